//! Balance: <https://stripe.com/docs/api/balance>

use stripe_node_core::{Operation, RequestSpec, Resource, Result};

use super::{unsupported, HandlerOutput};
use crate::context::ItemContext;

/// Execute a balance operation.
pub async fn execute(ctx: &ItemContext<'_>, operation: Operation) -> Result<HandlerOutput> {
    match operation {
        Operation::Get => ctx
            .request(RequestSpec::get("balance"))
            .await
            .map(HandlerOutput::Single),
        _ => Err(unsupported(Resource::Balance, operation)),
    }
}
