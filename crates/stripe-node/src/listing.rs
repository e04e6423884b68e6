//! Cursor pagination over Stripe list endpoints.

use serde_json::Value;

use stripe_node_core::{Fields, NodeError, Operation, RequestSpec, Resource, Result};

use crate::context::RequestTransport;
use crate::stripe::StripeList;

/// Largest page Stripe serves.
const MAX_PAGE_SIZE: usize = 100;

/// Collect every object of `resource`, following `has_more`/`starting_after`.
///
/// `query` is sent with every page. With a `limit`, collection stops once
/// that many objects have been gathered and the result is truncated to it;
/// the limit also becomes the page size.
///
/// Pagination ends when a page reports no more data, omits `has_more`, is
/// empty, or ends with an object that has no id.
///
/// # Errors
///
/// Returns the first transport error, [`NodeError::UnsupportedOperation`] if
/// the resource has no list endpoint, or [`NodeError::UnexpectedResponse`] if
/// a page has no `data` array.
pub async fn handle_listing(
    transport: &dyn RequestTransport,
    credential: Option<&str>,
    resource: Resource,
    mut query: Fields,
    limit: Option<usize>,
) -> Result<Vec<Value>> {
    let collection = resource
        .list_path()
        .ok_or(NodeError::UnsupportedOperation {
            resource,
            operation: Operation::GetAll,
        })?;

    if limit == Some(0) {
        return Ok(Vec::new());
    }
    if let Some(limit) = limit {
        query.insert("limit".to_string(), Value::from(limit.min(MAX_PAGE_SIZE)));
    }

    let mut collected: Vec<Value> = Vec::new();
    let mut pages = 0_usize;

    loop {
        let spec = RequestSpec::get(collection).with_query(query.clone());
        let response = transport.request(spec, credential).await?;
        pages += 1;

        let page: StripeList<Value> = serde_json::from_value(response).map_err(|e| {
            NodeError::UnexpectedResponse(format!("/{collection} page {pages}: {e}"))
        })?;

        let page_len = page.data.len();
        collected.extend(page.data);

        if let Some(limit) = limit {
            if collected.len() >= limit {
                collected.truncate(limit);
                break;
            }
        }

        if !page.has_more || page_len == 0 {
            break;
        }

        let Some(last_id) = collected
            .last()
            .and_then(|object| object.get("id"))
            .and_then(Value::as_str)
        else {
            tracing::warn!(
                resource = %resource,
                "Last listed object has no id, stopping pagination"
            );
            break;
        };

        query.insert(
            "starting_after".to_string(),
            Value::String(last_id.to_string()),
        );
    }

    tracing::debug!(
        resource = %resource,
        pages,
        objects = collected.len(),
        "Listing complete"
    );

    Ok(collected)
}
