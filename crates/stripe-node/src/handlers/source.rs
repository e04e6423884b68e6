//! Sources: <https://stripe.com/docs/api/sources>
//!
//! Creating a source is a two-step protocol:
//!
//! 1. `POST /sources` creates the source.
//! 2. `POST /customers/{customerId}/sources` attaches it to the customer.
//!
//! The steps are not atomic. When step 2 fails the source already exists in
//! Stripe and is not deleted; the caller receives
//! [`NodeError::SourceNotAttached`] with the created source so it can decide
//! whether to retry the attach or clean up.

use serde_json::Value;

use stripe_node_core::{adjust_metadata, Fields, NodeError, Operation, RequestSpec, Resource, Result};

use super::{unsupported, HandlerOutput};
use crate::context::ItemContext;

/// Execute a source operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    match operation {
        Operation::Create => create(ctx).await.map(HandlerOutput::Single),
        Operation::Delete => {
            let source_id = ctx.identifier("sourceId")?;
            let customer_id = ctx.identifier("customerId")?;
            let request = RequestSpec::delete("customers")
                .segment(customer_id)
                .segment("sources")
                .segment(source_id);
            ctx.request(request).await.map(HandlerOutput::Single)
        }
        Operation::Get => {
            let source_id = ctx.identifier("sourceId")?;
            ctx.request(RequestSpec::get("sources").segment(source_id))
                .await
                .map(HandlerOutput::Single)
        }
        _ => Err(unsupported(Resource::Source, operation)),
    }
}

async fn create(ctx: &ItemContext<'_>) -> Result<Value> {
    let customer_id = ctx.identifier("customerId")?;

    let mut body = Fields::new();
    body.insert("type".to_string(), Value::String(ctx.string("type")?));
    body.insert("amount".to_string(), ctx.number("amount")?);
    body.insert("currency".to_string(), Value::String(ctx.string("currency")?));

    let additional = ctx.collection("additionalFields")?;
    if !additional.is_empty() {
        body.extend(adjust_metadata(additional));
    }

    let created = create_source(ctx, body).await?;
    let source_id = created
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| NodeError::UnexpectedResponse("created source has no id".into()))?;

    if let Err(cause) = attach_source(ctx, &customer_id, &source_id).await {
        tracing::warn!(
            item = ctx.item(),
            source_id = %source_id,
            customer_id = %customer_id,
            error = %cause,
            "Source created but not attached to customer"
        );
        return Err(NodeError::SourceNotAttached {
            source_id,
            customer_id,
            created,
            cause: Box::new(cause),
        });
    }

    Ok(created)
}

/// Step 1: create the source.
async fn create_source(ctx: &ItemContext<'_>, body: Fields) -> Result<Value> {
    ctx.request(RequestSpec::post("sources").with_body(body)).await
}

/// Step 2: attach an existing source to a customer.
async fn attach_source(ctx: &ItemContext<'_>, customer_id: &str, source_id: &str) -> Result<Value> {
    let mut body = Fields::new();
    body.insert("source".to_string(), Value::String(source_id.to_string()));

    let request = RequestSpec::post("customers")
        .segment(customer_id)
        .segment("sources")
        .with_body(body);
    ctx.request(request).await
}
