//! Coupons: <https://stripe.com/docs/api/coupons>

use serde_json::Value;

use stripe_node_core::{Fields, Operation, RequestSpec, Resource, Result};

use super::{list_limit, unsupported, HandlerOutput};
use crate::context::ItemContext;

/// Coupon type value for a fixed amount off; any other value means percent off.
pub const FIXED_AMOUNT: &str = "fixedAmount";

/// Execute a coupon operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    match operation {
        Operation::Create => create(ctx).await.map(HandlerOutput::Single),
        Operation::GetAll => {
            let limit = list_limit(ctx)?;
            ctx.list(Resource::Coupon, Fields::new(), limit)
                .await
                .map(HandlerOutput::Many)
        }
        _ => Err(unsupported(Resource::Coupon, operation)),
    }
}

async fn create(ctx: &ItemContext<'_>) -> Result<Value> {
    let mut body = Fields::new();
    body.insert("duration".to_string(), Value::String(ctx.string("duration")?));

    if ctx.string("type")? == FIXED_AMOUNT {
        body.insert("amount_off".to_string(), ctx.number("amountOff")?);
        body.insert("currency".to_string(), Value::String(ctx.string("currency")?));
    } else {
        body.insert("percent_off".to_string(), ctx.number("percentOff")?);
    }

    ctx.request(RequestSpec::post("coupons").with_body(body)).await
}
