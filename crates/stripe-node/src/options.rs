//! Dynamic option lists for the workflow editor.

use serde::Serialize;
use serde_json::Value;

use stripe_node_core::{Fields, NodeError, RequestSpec, Resource, Result};

use crate::context::RequestTransport;
use crate::listing;
use crate::stripe::{CountrySpec, Customer, StripeList};

/// One entry of an editor drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyOption {
    /// Label shown to the user.
    pub name: String,
    /// Value stored in the parameter.
    pub value: String,
}

/// Loads option lists with a fixed credential.
pub struct OptionLoader<'a> {
    transport: &'a dyn RequestTransport,
    credential: Option<&'a str>,
}

impl<'a> OptionLoader<'a> {
    /// Create a loader.
    #[must_use]
    pub fn new(transport: &'a dyn RequestTransport, credential: Option<&'a str>) -> Self {
        Self {
            transport,
            credential,
        }
    }

    /// Every customer, labelled by name (falling back to email, then id).
    ///
    /// # Errors
    ///
    /// Returns the listing error, or [`NodeError::UnexpectedResponse`] if a
    /// customer object has no id.
    pub async fn customers(&self) -> Result<Vec<PropertyOption>> {
        let customers = listing::handle_listing(
            self.transport,
            self.credential,
            Resource::Customer,
            Fields::new(),
            None,
        )
        .await?;

        customers
            .into_iter()
            .map(|customer| {
                let customer: Customer = serde_json::from_value(customer)
                    .map_err(|e| NodeError::UnexpectedResponse(format!("customer: {e}")))?;
                let name = customer
                    .name
                    .filter(|name| !name.is_empty())
                    .or(customer.email)
                    .unwrap_or_else(|| customer.id.clone());
                Ok(PropertyOption {
                    name,
                    value: customer.id,
                })
            })
            .collect()
    }

    /// Currencies payments can be made in, from the first country spec.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`NodeError::UnexpectedResponse`] if
    /// the response is not a list of country specs.
    pub async fn currencies(&self) -> Result<Vec<PropertyOption>> {
        let response: Value = self
            .transport
            .request(RequestSpec::get("country_specs"), self.credential)
            .await?;

        let specs: StripeList<CountrySpec> = serde_json::from_value(response)
            .map_err(|e| NodeError::UnexpectedResponse(format!("country specs: {e}")))?;

        let Some(spec) = specs.data.into_iter().next() else {
            return Ok(Vec::new());
        };

        Ok(spec
            .supported_payment_currencies
            .into_iter()
            .map(|currency| PropertyOption {
                name: currency.to_uppercase(),
                value: currency,
            })
            .collect())
    }
}
