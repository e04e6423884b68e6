//! Stripe workflow node.
//!
//! This crate lets a workflow runtime call the Stripe API. For every input
//! item it reads the item's parameters (resource, operation, fields), builds
//! the matching Stripe request and returns the response as workflow data.
//!
//! - **Capabilities**: [`ParameterSource`] and [`RequestTransport`], supplied by the host
//! - **Handlers**: one module per Stripe resource
//! - **Listing**: cursor pagination for "get all" operations
//! - **Dispatch**: [`StripeNode::execute`], with optional continue-on-failure
//! - **Transport**: [`StripeClient`], a `reqwest` implementation with named credentials
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use stripe_node::{NodeParameters, StripeClient, StripeConfig, StripeNode};
//!
//! # async fn example() -> Result<(), stripe_node::NodeError> {
//! let client = StripeClient::from_config(&StripeConfig::from_env()?)?;
//! let node = StripeNode::new(client);
//!
//! let params = NodeParameters::default()
//!     .set("resource", json!("customer"))
//!     .set("operation", json!("get"))
//!     .set("customerId", json!("cus_123"));
//!
//! let output = node.execute(&[json!({})], &params).await?;
//! println!("{}", output[0][0]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod handlers;
pub mod listing;
pub mod node;
pub mod options;
pub mod parameters;
pub mod stripe;

pub use config::{CredentialStore, StripeConfig};
pub use context::{ItemContext, ParameterSource, RequestTransport, CREDENTIAL_PARAMETER};
pub use handlers::HandlerOutput;
pub use listing::handle_listing;
pub use node::{NodeSettings, StripeNode};
pub use options::{OptionLoader, PropertyOption};
pub use parameters::NodeParameters;
pub use stripe::{StripeClient, StripeError};
pub use stripe_node_core::{
    Fields, ListingCursor, Method, NodeError, Operation, RequestSpec, Resource, Result,
};
