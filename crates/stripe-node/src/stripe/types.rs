//! Stripe API types the node reads.
//!
//! Handler responses are passed through as raw JSON; only the envelopes the
//! node itself interprets are typed here.

use serde::Deserialize;

/// Stripe list response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    /// Data items.
    pub data: Vec<T>,
    /// Whether there are more items. A missing flag means there are none.
    #[serde(default)]
    pub has_more: bool,
}

/// Stripe customer object, as far as the option loader needs it.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Stripe customer ID.
    pub id: String,
    /// Customer name.
    #[serde(default)]
    pub name: Option<String>,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Stripe country spec object.
#[derive(Debug, Clone, Deserialize)]
pub struct CountrySpec {
    /// Currencies payments can be made in.
    #[serde(default)]
    pub supported_payment_currencies: Vec<String>,
}

/// Stripe API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn list_without_has_more_means_last_page() {
        let page: StripeList<Value> =
            serde_json::from_value(json!({"data": [{"id": "ch_1"}]})).unwrap();
        assert!(!page.has_more);
        assert_eq!(page.data.len(), 1);
    }

    #[test]
    fn list_requires_data() {
        let page = serde_json::from_value::<StripeList<Value>>(json!({"has_more": true}));
        assert!(page.is_err());
    }

    #[test]
    fn error_body_parses() {
        let body: StripeErrorResponse = serde_json::from_value(json!({
            "error": {
                "type": "card_error",
                "message": "Your card was declined.",
                "code": "card_declined"
            }
        }))
        .unwrap();
        assert_eq!(body.error.error_type, "card_error");
        assert_eq!(body.error.code.as_deref(), Some("card_declined"));
    }
}
