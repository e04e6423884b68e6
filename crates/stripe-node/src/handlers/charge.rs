//! Charges: <https://stripe.com/docs/api/charges>

use serde_json::Value;

use stripe_node_core::{adjust_charge_fields, Fields, Operation, RequestSpec, Resource, Result};

use super::{list_limit, unsupported, update_fields, HandlerOutput};
use crate::context::ItemContext;

/// Execute a charge operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    match operation {
        Operation::Create => create(ctx).await.map(HandlerOutput::Single),
        Operation::Get => {
            let charge_id = ctx.identifier("chargeId")?;
            ctx.request(RequestSpec::get("charges").segment(charge_id))
                .await
                .map(HandlerOutput::Single)
        }
        Operation::GetAll => {
            let limit = list_limit(ctx)?;
            ctx.list(Resource::Charge, Fields::new(), limit)
                .await
                .map(HandlerOutput::Many)
        }
        Operation::Update => update(ctx).await.map(HandlerOutput::Single),
        _ => Err(unsupported(Resource::Charge, operation)),
    }
}

async fn create(ctx: &ItemContext<'_>) -> Result<Value> {
    let mut body = Fields::new();
    body.insert(
        "customer".to_string(),
        Value::String(ctx.identifier("customerId")?),
    );
    body.insert(
        "currency".to_string(),
        Value::String(ctx.string("currency")?.to_lowercase()),
    );
    body.insert("amount".to_string(), ctx.number("amount")?);
    body.insert("source".to_string(), Value::String(ctx.string("source")?));

    let additional = ctx.collection("additionalFields")?;
    if !additional.is_empty() {
        body.extend(adjust_charge_fields(additional));
    }

    ctx.request(RequestSpec::post("charges").with_body(body)).await
}

async fn update(ctx: &ItemContext<'_>) -> Result<Value> {
    let body = adjust_charge_fields(update_fields(ctx, Resource::Charge)?);
    let charge_id = ctx.identifier("chargeId")?;
    ctx.request(RequestSpec::post("charges").segment(charge_id).with_body(body))
        .await
}
