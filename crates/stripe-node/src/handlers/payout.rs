//! Payouts: <https://stripe.com/docs/api/payouts>

use stripe_node_core::{Fields, Operation, Resource, Result};

use super::{list_limit, unsupported, HandlerOutput};
use crate::context::ItemContext;

/// Execute a payout operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    match operation {
        Operation::GetAll => {
            let limit = list_limit(ctx)?;
            ctx.list(Resource::Payout, Fields::new(), limit)
                .await
                .map(HandlerOutput::Many)
        }
        _ => Err(unsupported(Resource::Payout, operation)),
    }
}
