//! Core types for the Stripe workflow node.
//!
//! This crate holds the pure, I/O-free part of the node:
//!
//! - **Tags**: `Resource`, `Operation`
//! - **Requests**: `RequestSpec`, `Method`, `ListingCursor`
//! - **Field adjusters**: reshaping editor fields into Stripe bodies
//! - **Form encoding**: Stripe's bracket notation for nested values
//! - **Errors**: `NodeError`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adjust;
pub mod error;
pub mod form;
pub mod request;
pub mod resource;

pub use adjust::{
    adjust_address, adjust_charge_fields, adjust_customer_fields, adjust_metadata,
    adjust_shipping, Fields,
};
pub use error::{NodeError, Result};
pub use request::{ListingCursor, Method, RequestSpec};
pub use resource::{Operation, Resource};
