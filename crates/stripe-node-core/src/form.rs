//! Stripe form encoding.
//!
//! Stripe takes `application/x-www-form-urlencoded` bodies and expresses
//! nesting with brackets: `metadata[order]=42`, `card[exp_month]=12`,
//! `expand[0]=customer`.

use serde_json::{Map, Value};

/// Flatten a JSON object into bracket-notation form pairs.
///
/// `null` values are skipped; an empty string is kept because Stripe uses it
/// to clear a field.
#[must_use]
pub fn encode(fields: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in fields {
        push_value(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_value(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key, flag.to_string())),
        Value::Number(number) => pairs.push((key, number.to_string())),
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_value(pairs, format!("{key}[{index}]"), item);
            }
        }
        Value::Object(map) => {
            for (name, nested) in map {
                push_value(pairs, format!("{key}[{name}]"), nested);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn scalars_are_flat() {
        let pairs = encode(&object(json!({
            "amount": 2000,
            "currency": "usd",
            "capture": false,
        })));
        assert!(pairs.contains(&("amount".into(), "2000".into())));
        assert!(pairs.contains(&("currency".into(), "usd".into())));
        assert!(pairs.contains(&("capture".into(), "false".into())));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn nested_objects_use_brackets() {
        let pairs = encode(&object(json!({
            "shipping": {
                "name": "Ada",
                "address": {"city": "London", "line1": "12 Rue"},
            },
            "metadata": {"order": "42"},
        })));
        assert!(pairs.contains(&("shipping[name]".into(), "Ada".into())));
        assert!(pairs.contains(&("shipping[address][city]".into(), "London".into())));
        assert!(pairs.contains(&("shipping[address][line1]".into(), "12 Rue".into())));
        assert!(pairs.contains(&("metadata[order]".into(), "42".into())));
    }

    #[test]
    fn arrays_are_indexed() {
        let pairs = encode(&object(json!({"expand": ["customer", "invoice"]})));
        assert_eq!(
            pairs,
            vec![
                ("expand[0]".to_string(), "customer".to_string()),
                ("expand[1]".to_string(), "invoice".to_string()),
            ]
        );
    }

    #[test]
    fn null_is_skipped_but_empty_string_kept() {
        let pairs = encode(&object(json!({"description": null, "email": ""})));
        assert_eq!(pairs, vec![("email".to_string(), String::new())]);
    }
}
