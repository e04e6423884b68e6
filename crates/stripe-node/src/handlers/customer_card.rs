//! Customer cards: <https://stripe.com/docs/api/cards>
//!
//! Cards live under the customer's `sources` sub-resource.

use serde_json::Value;

use stripe_node_core::{Fields, Operation, RequestSpec, Resource, Result};

use super::{unsupported, HandlerOutput};
use crate::context::ItemContext;

/// Execute a customer card operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    let request = match operation {
        Operation::Add => {
            let mut body = Fields::new();
            body.insert("source".to_string(), Value::String(ctx.string("token")?));
            sources(ctx, RequestSpec::post)?.with_body(body)
        }
        Operation::Get => {
            let source_id = ctx.identifier("sourceId")?;
            sources(ctx, RequestSpec::get)?.segment(source_id)
        }
        Operation::Remove => {
            let card_id = ctx.identifier("cardId")?;
            sources(ctx, RequestSpec::delete)?.segment(card_id)
        }
        _ => return Err(unsupported(Resource::CustomerCard, operation)),
    };

    ctx.request(request).await.map(HandlerOutput::Single)
}

/// `/customers/{customerId}/sources` with the given method constructor.
fn sources(ctx: &ItemContext<'_>, method: fn(&str) -> RequestSpec) -> Result<RequestSpec> {
    let customer_id = ctx.identifier("customerId")?;
    Ok(method("customers").segment(customer_id).segment("sources"))
}
