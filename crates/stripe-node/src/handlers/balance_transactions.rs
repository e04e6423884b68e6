//! Balance transactions: <https://stripe.com/docs/api/balance_transactions>
//!
//! Listing is scoped to one payout and returns a single page as Stripe sends
//! it; the caller drives pagination through `startingAfter` and `limit`.

use serde_json::Value;

use stripe_node_core::{Fields, ListingCursor, Operation, RequestSpec, Resource, Result};

use super::{unsupported, HandlerOutput};
use crate::context::ItemContext;

/// Execute a balance transactions operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    match operation {
        Operation::GetAll => get_all_for_payout(ctx).await.map(HandlerOutput::Single),
        _ => Err(unsupported(Resource::BalanceTransactions, operation)),
    }
}

async fn get_all_for_payout(ctx: &ItemContext<'_>) -> Result<Value> {
    let payout = ctx.identifier("payout")?;
    let cursor = ListingCursor {
        starting_after: ctx.optional_string("startingAfter")?,
        limit: ctx.optional_u64("limit")?,
    };

    let mut query = Fields::new();
    query.insert("payout".to_string(), Value::String(payout));
    cursor.apply(&mut query);

    ctx.request(RequestSpec::get("balance_transactions").with_query(query))
        .await
}
