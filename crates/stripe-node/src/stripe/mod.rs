//! Stripe HTTP transport.
//!
//! The node only depends on [`crate::RequestTransport`]; this module is the
//! `reqwest` implementation of it that talks to the real API.

pub mod client;
pub mod types;

pub use client::{StripeClient, StripeError};
pub use types::*;
