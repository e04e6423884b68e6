//! Resource handlers.
//!
//! Each handler maps one resource's operations onto Stripe requests. A
//! handler only reads the parameters the selected operation uses.

pub mod balance;
pub mod balance_transactions;
pub mod charge;
pub mod coupon;
pub mod customer;
pub mod customer_card;
pub mod payout;
pub mod source;
pub mod token;

use serde_json::Value;

use stripe_node_core::{Fields, NodeError, Operation, Resource, Result};

use crate::context::ItemContext;

/// Page size used when `returnAll` is off and no `limit` is given.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// What a handler produced for one item.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutput {
    /// A single Stripe object.
    Single(Value),
    /// A list of objects, spliced into the node output one by one.
    Many(Vec<Value>),
}

impl HandlerOutput {
    /// Append the output entries to `out`.
    pub fn append_to(self, out: &mut Vec<Value>) {
        match self {
            Self::Single(value) => out.push(value),
            Self::Many(values) => out.extend(values),
        }
    }
}

/// Run `operation` on `resource` for the item behind `ctx`.
///
/// # Errors
///
/// Returns [`NodeError::UnsupportedOperation`] for combinations no handler
/// implements, otherwise whatever the handler returns.
pub async fn execute(
    ctx: &ItemContext<'_>,
    resource: Resource,
    operation: Operation,
) -> Result<HandlerOutput> {
    match resource {
        Resource::Balance => balance::execute(ctx, operation).await,
        Resource::BalanceTransactions => balance_transactions::execute(ctx, operation).await,
        Resource::Charge => charge::execute(ctx, operation).await,
        Resource::Coupon => coupon::execute(ctx, operation).await,
        Resource::Customer => customer::execute(ctx, operation).await,
        Resource::CustomerCard => customer_card::execute(ctx, operation).await,
        Resource::Payout => payout::execute(ctx, operation).await,
        Resource::Source => source::execute(ctx, operation).await,
        Resource::Token => token::execute(ctx, operation).await,
    }
}

pub(crate) fn unsupported(resource: Resource, operation: Operation) -> NodeError {
    NodeError::UnsupportedOperation {
        resource,
        operation,
    }
}

/// `None` when every object is wanted, otherwise the requested count.
pub(crate) fn list_limit(ctx: &ItemContext<'_>) -> Result<Option<usize>> {
    if ctx.boolean_or("returnAll", true)? {
        return Ok(None);
    }
    let limit = ctx
        .optional_u64("limit")?
        .map_or(DEFAULT_LIST_LIMIT, |limit| {
            usize::try_from(limit).unwrap_or(usize::MAX)
        });
    Ok(Some(limit))
}

/// `updateFields` of the item; an empty set is a user error.
pub(crate) fn update_fields(ctx: &ItemContext<'_>, resource: Resource) -> Result<Fields> {
    let fields = ctx.collection("updateFields")?;
    if fields.is_empty() {
        return Err(NodeError::EmptyUpdate { resource });
    }
    Ok(fields)
}
