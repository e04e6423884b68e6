//! Capabilities handed to the resource handlers.
//!
//! A handler never sees the host runtime. It gets an [`ItemContext`] that can
//! read the parameters of one item and send requests on behalf of that item,
//! nothing else.

use async_trait::async_trait;
use serde_json::{Map, Value};

use stripe_node_core::{Fields, NodeError, RequestSpec, Resource, Result};

use crate::listing;

/// Parameter name selecting a stored credential other than the default one.
pub const CREDENTIAL_PARAMETER: &str = "credentialName";

/// Per-item parameter values supplied by the host.
pub trait ParameterSource: Send + Sync {
    /// Value of `name` for item `item`, or `None` when it is not set.
    fn parameter(&self, name: &str, item: usize) -> Option<Value>;
}

/// Authenticated access to the Stripe API.
#[async_trait]
pub trait RequestTransport: Send + Sync {
    /// Send `spec` and return the parsed JSON response.
    ///
    /// `credential` names a stored credential to use instead of the default.
    /// Non-2xx responses are returned as errors.
    async fn request(&self, spec: RequestSpec, credential: Option<&str>) -> Result<Value>;
}

/// Everything a handler may do while processing one item.
pub struct ItemContext<'a> {
    params: &'a dyn ParameterSource,
    transport: &'a dyn RequestTransport,
    item: usize,
    credential: Option<String>,
}

impl<'a> ItemContext<'a> {
    /// Build the context for item `item`, resolving its credential override.
    ///
    /// # Errors
    ///
    /// Returns an error if `credentialName` is set to something other than a string.
    pub fn new(
        params: &'a dyn ParameterSource,
        transport: &'a dyn RequestTransport,
        item: usize,
    ) -> Result<Self> {
        let mut context = Self {
            params,
            transport,
            item,
            credential: None,
        };
        context.credential = context.optional_string(CREDENTIAL_PARAMETER)?;
        Ok(context)
    }

    /// Index of the item being processed.
    #[must_use]
    pub fn item(&self) -> usize {
        self.item
    }

    /// Credential override for this item, if any.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Raw value of a required parameter.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingParameter`] if the parameter is not set.
    pub fn required(&self, name: &str) -> Result<Value> {
        self.params
            .parameter(name, self.item)
            .ok_or_else(|| NodeError::MissingParameter {
                name: name.to_string(),
                item: self.item,
            })
    }

    /// Required string parameter. Numbers are accepted and rendered as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is missing or not a string.
    pub fn string(&self, name: &str) -> Result<String> {
        match self.required(name)? {
            Value::String(text) => Ok(text),
            Value::Number(number) => Ok(number.to_string()),
            _ => Err(self.invalid(name, "a string")),
        }
    }

    /// Required object id that becomes a path segment.
    ///
    /// Blank values count as missing. `.` and `..` are rejected since they
    /// would address a different route.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingParameter`] for absent or blank ids and
    /// [`NodeError::InvalidParameter`] for anything that is not a plain id.
    pub fn identifier(&self, name: &str) -> Result<String> {
        let id = self.optional_string(name)?.ok_or_else(|| NodeError::MissingParameter {
            name: name.to_string(),
            item: self.item,
        })?;
        let id = id.trim();
        match id {
            "" => Err(NodeError::MissingParameter {
                name: name.to_string(),
                item: self.item,
            }),
            "." | ".." => Err(self.invalid(name, "an object id")),
            _ => Ok(id.to_string()),
        }
    }

    /// Optional string parameter; absent, `null` and `""` are all `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is set to a non-string value.
    pub fn optional_string(&self, name: &str) -> Result<Option<String>> {
        match self.params.parameter(name, self.item) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) if text.is_empty() => Ok(None),
            Some(Value::String(text)) => Ok(Some(text)),
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(_) => Err(self.invalid(name, "a string")),
        }
    }

    /// Required numeric parameter, returned as a JSON number.
    ///
    /// Numeric strings such as `"2000"` are parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is missing or not numeric.
    pub fn number(&self, name: &str) -> Result<Value> {
        match self.required(name)? {
            Value::Number(number) => Ok(Value::Number(number)),
            Value::String(text) => parse_number(&text).ok_or_else(|| self.invalid(name, "a number")),
            _ => Err(self.invalid(name, "a number")),
        }
    }

    /// Optional non-negative integer; absent, `null` and `""` are all `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is set but is not a non-negative integer.
    pub fn optional_u64(&self, name: &str) -> Result<Option<u64>> {
        match self.params.parameter(name, self.item) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
            Some(Value::String(text)) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| self.invalid(name, "a non-negative integer")),
            Some(Value::Number(number)) => number
                .as_u64()
                .map(Some)
                .ok_or_else(|| self.invalid(name, "a non-negative integer")),
            Some(_) => Err(self.invalid(name, "a non-negative integer")),
        }
    }

    /// Boolean parameter with a default for when it is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is set to a non-boolean value.
    pub fn boolean_or(&self, name: &str, default: bool) -> Result<bool> {
        match self.params.parameter(name, self.item) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(flag)) => Ok(flag),
            Some(_) => Err(self.invalid(name, "a boolean")),
        }
    }

    /// Collection parameter (e.g. `additionalFields`); absent or `null` is empty.
    ///
    /// Entries set to `null` or `""` are dropped, so callers only see the
    /// fields the user actually filled in.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is set to a non-object value.
    pub fn collection(&self, name: &str) -> Result<Fields> {
        match self.params.parameter(name, self.item) {
            None | Some(Value::Null) => Ok(Map::new()),
            Some(Value::Object(fields)) => Ok(fields
                .into_iter()
                .filter(|(_, value)| !is_blank(value))
                .collect()),
            Some(_) => Err(self.invalid(name, "a collection of fields")),
        }
    }

    /// Send a request with this item's credential.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn request(&self, spec: RequestSpec) -> Result<Value> {
        tracing::debug!(
            item = self.item,
            method = %spec.method,
            path = %spec.path(),
            credential_override = self.credential.is_some(),
            "Sending Stripe request"
        );
        self.transport.request(spec, self.credential()).await
    }

    /// List `resource` through the listing helper with this item's credential.
    ///
    /// # Errors
    ///
    /// Returns the first transport error, or an error if a page is malformed.
    pub async fn list(
        &self,
        resource: Resource,
        query: Fields,
        limit: Option<usize>,
    ) -> Result<Vec<Value>> {
        listing::handle_listing(self.transport, self.credential(), resource, query, limit).await
    }

    fn invalid(&self, name: &str, expected: &'static str) -> NodeError {
        NodeError::InvalidParameter {
            name: name.to_string(),
            item: self.item,
            expected,
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn parse_number(text: &str) -> Option<Value> {
    let text = text.trim();
    if let Ok(integer) = text.parse::<i64>() {
        return Some(Value::from(integer));
    }
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}
