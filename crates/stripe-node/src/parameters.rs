//! JSON-backed parameter source.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::context::ParameterSource;

/// Node parameters as plain JSON: values shared by every item plus
/// optional per-item overrides.
///
/// ```
/// use serde_json::json;
/// use stripe_node::{NodeParameters, ParameterSource};
///
/// let params = NodeParameters::default()
///     .set("resource", json!("customer"))
///     .set("operation", json!("get"))
///     .set_for_item(1, "customerId", json!("cus_2"))
///     .set("customerId", json!("cus_1"));
///
/// assert_eq!(params.parameter("customerId", 0), Some(json!("cus_1")));
/// assert_eq!(params.parameter("customerId", 1), Some(json!("cus_2")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeParameters {
    /// Values used for every item.
    #[serde(default)]
    pub shared: Map<String, Value>,
    /// Per-item overrides, indexed by item.
    #[serde(default)]
    pub items: Vec<Map<String, Value>>,
}

impl NodeParameters {
    /// Parameters with the given shared values and no overrides.
    #[must_use]
    pub fn new(shared: Map<String, Value>) -> Self {
        Self {
            shared,
            items: Vec::new(),
        }
    }

    /// Set a value shared by every item.
    #[must_use]
    pub fn set(mut self, name: &str, value: Value) -> Self {
        self.shared.insert(name.to_string(), value);
        self
    }

    /// Set a value for one item only.
    #[must_use]
    pub fn set_for_item(mut self, item: usize, name: &str, value: Value) -> Self {
        if self.items.len() <= item {
            self.items.resize_with(item + 1, Map::new);
        }
        self.items[item].insert(name.to_string(), value);
        self
    }
}

impl ParameterSource for NodeParameters {
    fn parameter(&self, name: &str, item: usize) -> Option<Value> {
        self.items
            .get(item)
            .and_then(|overrides| overrides.get(name))
            .or_else(|| self.shared.get(name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overrides_win_over_shared_values() {
        let params = NodeParameters::default()
            .set("amount", json!(100))
            .set_for_item(2, "amount", json!(300));

        assert_eq!(params.parameter("amount", 0), Some(json!(100)));
        assert_eq!(params.parameter("amount", 2), Some(json!(300)));
        assert_eq!(params.parameter("amount", 7), Some(json!(100)));
        assert_eq!(params.parameter("currency", 0), None);
        assert_eq!(params.items.len(), 3);
    }

    #[test]
    fn deserializes_from_json() {
        let params: NodeParameters = serde_json::from_value(json!({
            "shared": {"resource": "balance", "operation": "get"},
            "items": [{}, {"credentialName": "secondary"}]
        }))
        .unwrap();

        assert_eq!(params.parameter("resource", 1), Some(json!("balance")));
        assert_eq!(
            params.parameter("credentialName", 1),
            Some(json!("secondary"))
        );
        assert_eq!(params.parameter("credentialName", 0), None);
    }
}
