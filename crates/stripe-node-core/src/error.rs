//! Error types for the Stripe node.

use serde_json::Value;

use crate::resource::{Operation, Resource};

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, NodeError>;

/// Errors that can occur while executing the node.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// A required parameter was not supplied for the item.
    #[error("missing parameter '{name}' for item {item}")]
    MissingParameter {
        /// Parameter name.
        name: String,
        /// Item index the parameter was read for.
        item: usize,
    },

    /// A parameter was supplied with the wrong shape.
    #[error("parameter '{name}' for item {item} must be {expected}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Item index the parameter was read for.
        item: usize,
        /// Human readable description of the expected shape.
        expected: &'static str,
    },

    /// The `resource` parameter names no known resource.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// The `operation` parameter names no known operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The operation exists but the resource does not support it.
    #[error("operation '{operation}' is not supported for resource '{resource}'")]
    UnsupportedOperation {
        /// Selected resource.
        resource: Resource,
        /// Selected operation.
        operation: Operation,
    },

    /// An update was requested without any fields to update.
    #[error("Please enter at least one field to update for the {resource}.")]
    EmptyUpdate {
        /// Resource being updated.
        resource: Resource,
    },

    /// The requested variant exists in Stripe but is not handled by the node.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Stripe returned a non-2xx response.
    #[error("Stripe API error: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Stripe error type (e.g. `invalid_request_error`).
        error_type: String,
        /// Stripe error message.
        message: String,
        /// Stripe error code.
        code: Option<String>,
    },

    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A response did not have the shape the node relies on.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// No stored credential exists under the requested name.
    #[error("unknown credential: {0}")]
    UnknownCredential(String),

    /// A created source could not be attached to its customer.
    ///
    /// The source already exists in Stripe; nothing was rolled back.
    #[error("source {source_id} was created but could not be attached to customer {customer_id}: {cause}")]
    SourceNotAttached {
        /// Id of the created source.
        source_id: String,
        /// Customer the source should have been attached to.
        customer_id: String,
        /// Full response of the create call.
        created: Value,
        /// Error returned by the attach call.
        cause: Box<NodeError>,
    },

    /// A path segment would not address a single object (empty, `.` or `..`).
    #[error("invalid path segment '{0}'")]
    InvalidPathSegment(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl NodeError {
    /// Whether the error was raised before any request was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::InvalidParameter { .. }
                | Self::UnknownResource(_)
                | Self::UnknownOperation(_)
                | Self::UnsupportedOperation { .. }
                | Self::EmptyUpdate { .. }
                | Self::NotImplemented(_)
                | Self::InvalidPathSegment(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_names_resource() {
        let err = NodeError::EmptyUpdate {
            resource: Resource::Charge,
        };
        assert_eq!(
            err.to_string(),
            "Please enter at least one field to update for the charge."
        );
        assert!(err.is_validation());
    }

    #[test]
    fn api_error_surfaces_stripe_message() {
        let err = NodeError::Api {
            status: 404,
            error_type: "invalid_request_error".into(),
            message: "No such customer: 'cus_missing'".into(),
            code: Some("resource_missing".into()),
        };
        assert!(err.to_string().contains("No such customer: 'cus_missing'"));
        assert!(!err.is_validation());
    }

    #[test]
    fn partial_failure_keeps_cause() {
        let err = NodeError::SourceNotAttached {
            source_id: "src_1".into(),
            customer_id: "cus_1".into(),
            created: serde_json::json!({"id": "src_1"}),
            cause: Box::new(NodeError::Http("connection reset".into())),
        };
        let message = err.to_string();
        assert!(message.contains("src_1"));
        assert!(message.contains("cus_1"));
        assert!(message.contains("connection reset"));
    }
}
