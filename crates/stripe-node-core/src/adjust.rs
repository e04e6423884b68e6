//! Field adjusters.
//!
//! The node collects optional fields in the shape the workflow editor
//! produces: fixed collections wrap their values (`metadata.metadataProperties`,
//! `address.details`, `shipping.shippingProperties`). These functions reshape
//! such a mapping into the body Stripe expects. They never validate values
//! and leave keys they do not handle untouched.

use serde_json::{Map, Value};

/// Flat field mapping as entered by the user.
pub type Fields = Map<String, Value>;

/// Turn `metadata.metadataProperties: [{key, value}]` into `metadata: {key: value}`.
#[must_use]
pub fn adjust_metadata(mut fields: Fields) -> Fields {
    let metadata = fields
        .get("metadata")
        .and_then(|metadata| metadata.get("metadataProperties"))
        .and_then(Value::as_array)
        .map(|pairs| collect_pairs(pairs));

    if let Some(metadata) = metadata {
        fields.insert("metadata".to_string(), Value::Object(metadata));
    }
    fields
}

fn collect_pairs(pairs: &[Value]) -> Map<String, Value> {
    let mut metadata = Map::new();
    for pair in pairs {
        if let Some(key) = pair.get("key").and_then(Value::as_str) {
            let value = pair.get("value").cloned().unwrap_or(Value::Null);
            metadata.insert(key.to_string(), value);
        }
    }
    metadata
}

/// Unwrap `address.details` into `address`.
#[must_use]
pub fn adjust_address(mut fields: Fields) -> Fields {
    let details = fields
        .get("address")
        .and_then(|address| address.get("details"))
        .cloned();

    if let Some(details) = details {
        fields.insert("address".to_string(), details);
    }
    fields
}

/// Unwrap the first `shipping.shippingProperties` entry into `shipping`,
/// with its `address.details` unwrapped into `shipping.address`.
///
/// An entry without an address is left as entered.
#[must_use]
pub fn adjust_shipping(mut fields: Fields) -> Fields {
    let shipping = fields
        .get("shipping")
        .and_then(|shipping| shipping.get("shippingProperties"))
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .and_then(Value::as_object)
        .and_then(unwrap_shipping_entry);

    if let Some(shipping) = shipping {
        fields.insert("shipping".to_string(), Value::Object(shipping));
    }
    fields
}

fn unwrap_shipping_entry(entry: &Map<String, Value>) -> Option<Map<String, Value>> {
    let address = match entry.get("address") {
        Some(Value::Object(address)) if !address.is_empty() => address,
        _ => return None,
    };

    let address = address
        .get("details")
        .cloned()
        .unwrap_or_else(|| Value::Object(address.clone()));

    let mut shipping: Map<String, Value> = entry
        .iter()
        .filter(|(key, _)| key.as_str() != "address")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    shipping.insert("address".to_string(), address);
    Some(shipping)
}

/// Adjust charge fields: shipping, then metadata.
#[must_use]
pub fn adjust_charge_fields(fields: Fields) -> Fields {
    adjust_metadata(adjust_shipping(fields))
}

/// Adjust customer fields: shipping, then address, then metadata.
#[must_use]
pub fn adjust_customer_fields(fields: Fields) -> Fields {
    adjust_metadata(adjust_address(adjust_shipping(fields)))
}
