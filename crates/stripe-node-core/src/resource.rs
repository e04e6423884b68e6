//! Resource and operation tags selected by the node parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NodeError;

/// Stripe entity type targeted by an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    /// Account balance.
    Balance,
    /// Charges.
    Charge,
    /// Coupons.
    Coupon,
    /// Customers.
    Customer,
    /// Cards attached to a customer.
    CustomerCard,
    /// Payment sources.
    Source,
    /// Card tokens.
    Token,
    /// Payouts.
    Payout,
    /// Balance transactions of a payout.
    BalanceTransactions,
}

impl Resource {
    /// Every resource, in the order the node presents them.
    pub const ALL: [Self; 9] = [
        Self::Balance,
        Self::Charge,
        Self::Coupon,
        Self::Customer,
        Self::CustomerCard,
        Self::Source,
        Self::Token,
        Self::Payout,
        Self::BalanceTransactions,
    ];

    /// Parameter value naming this resource.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Charge => "charge",
            Self::Coupon => "coupon",
            Self::Customer => "customer",
            Self::CustomerCard => "customerCard",
            Self::Source => "source",
            Self::Token => "token",
            Self::Payout => "payout",
            Self::BalanceTransactions => "balanceTransactions",
        }
    }

    /// Collection endpoint for resources that can be listed with cursor pagination.
    #[must_use]
    pub const fn list_path(self) -> Option<&'static str> {
        match self {
            Self::Charge => Some("charges"),
            Self::Coupon => Some("coupons"),
            Self::Customer => Some("customers"),
            Self::Source => Some("sources"),
            Self::Payout => Some("payouts"),
            Self::BalanceTransactions => Some("balance_transactions"),
            Self::Balance | Self::CustomerCard | Self::Token => None,
        }
    }

    /// Operations the node implements for this resource.
    #[must_use]
    pub const fn operations(self) -> &'static [Operation] {
        use Operation::{Add, Create, Delete, Get, GetAll, Remove, Update};
        match self {
            Self::Balance => &[Get],
            Self::Charge => &[Create, Get, GetAll, Update],
            Self::Coupon => &[Create, GetAll],
            Self::Customer => &[Create, Delete, Get, GetAll, Update],
            Self::CustomerCard => &[Add, Get, Remove],
            Self::Source => &[Create, Delete, Get],
            Self::Token => &[Create],
            Self::Payout | Self::BalanceTransactions => &[GetAll],
        }
    }

    /// Whether `operation` is implemented for this resource.
    #[must_use]
    pub fn supports(self, operation: Operation) -> bool {
        self.operations().contains(&operation)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| NodeError::UnknownResource(s.to_string()))
    }
}

/// Action applied to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Create a new object.
    Create,
    /// Retrieve one object by id.
    Get,
    /// List objects.
    GetAll,
    /// Update an object by id.
    Update,
    /// Delete an object by id.
    Delete,
    /// Attach an object to a parent.
    Add,
    /// Detach an object from a parent.
    Remove,
}

impl Operation {
    /// Every operation.
    pub const ALL: [Self; 7] = [
        Self::Create,
        Self::Get,
        Self::GetAll,
        Self::Update,
        Self::Delete,
        Self::Add,
        Self::Remove,
    ];

    /// Parameter value naming this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Get => "get",
            Self::GetAll => "getAll",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| NodeError::UnknownOperation(s.to_string()))
    }
}
