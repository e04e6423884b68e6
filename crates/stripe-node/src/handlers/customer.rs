//! Customers: <https://stripe.com/docs/api/customers>

use serde_json::Value;

use stripe_node_core::{
    adjust_customer_fields, Fields, Operation, RequestSpec, Resource, Result,
};

use super::{list_limit, unsupported, update_fields, HandlerOutput};
use crate::context::ItemContext;

/// Execute a customer operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    match operation {
        Operation::Create => create(ctx).await.map(HandlerOutput::Single),
        Operation::Delete => {
            let customer_id = ctx.identifier("customerId")?;
            ctx.request(RequestSpec::delete("customers").segment(customer_id))
                .await
                .map(HandlerOutput::Single)
        }
        Operation::Get => {
            let customer_id = ctx.identifier("customerId")?;
            ctx.request(RequestSpec::get("customers").segment(customer_id))
                .await
                .map(HandlerOutput::Single)
        }
        Operation::GetAll => get_all(ctx).await.map(HandlerOutput::Many),
        Operation::Update => update(ctx).await.map(HandlerOutput::Single),
        _ => Err(unsupported(Resource::Customer, operation)),
    }
}

async fn create(ctx: &ItemContext<'_>) -> Result<Value> {
    let mut body = Fields::new();
    body.insert("name".to_string(), Value::String(ctx.string("name")?));

    let additional = ctx.collection("additionalFields")?;
    if !additional.is_empty() {
        body.extend(adjust_customer_fields(additional));
    }

    ctx.request(RequestSpec::post("customers").with_body(body)).await
}

async fn get_all(ctx: &ItemContext<'_>) -> Result<Vec<Value>> {
    let mut query = Fields::new();
    let filters = ctx.collection("filters")?;
    if let Some(email) = filters.get("email") {
        query.insert("email".to_string(), email.clone());
    }

    let limit = list_limit(ctx)?;
    ctx.list(Resource::Customer, query, limit).await
}

async fn update(ctx: &ItemContext<'_>) -> Result<Value> {
    let body = adjust_customer_fields(update_fields(ctx, Resource::Customer)?);
    let customer_id = ctx.identifier("customerId")?;
    ctx.request(
        RequestSpec::post("customers")
            .segment(customer_id)
            .with_body(body),
    )
    .await
}
