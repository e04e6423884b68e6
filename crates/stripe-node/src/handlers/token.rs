//! Tokens: <https://stripe.com/docs/api/tokens>

use serde_json::{json, Value};

use stripe_node_core::{Fields, NodeError, Operation, RequestSpec, Resource, Result};

use super::{unsupported, HandlerOutput};
use crate::context::ItemContext;

/// Token type value for card tokens, the only kind the node creates.
pub const CARD_TOKEN: &str = "cardToken";

/// Execute a token operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    match operation {
        Operation::Create => create(ctx).await.map(HandlerOutput::Single),
        _ => Err(unsupported(Resource::Token, operation)),
    }
}

async fn create(ctx: &ItemContext<'_>) -> Result<Value> {
    let token_type = ctx.string("type")?;
    if token_type != CARD_TOKEN {
        return Err(NodeError::NotImplemented(format!(
            "Only card token creation implemented, got token type '{token_type}'."
        )));
    }

    let card = json!({
        "number": ctx.string("number")?,
        "exp_month": ctx.number("expirationMonth")?,
        "exp_year": ctx.number("expirationYear")?,
        "cvc": ctx.string("cvc")?,
    });

    let mut body = Fields::new();
    body.insert("card".to_string(), card);

    ctx.request(RequestSpec::post("tokens").with_body(body)).await
}
