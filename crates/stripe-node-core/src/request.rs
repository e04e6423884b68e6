//! Request descriptions built by the resource handlers.

use std::fmt;

use serde_json::{Map, Value};

/// HTTP method used against the Stripe API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single Stripe API call.
///
/// The path is kept as a list of segments. Segments that carry user input
/// (object ids) are escaped by the transport when the URL is built, so an id
/// can never introduce extra path components or a query string.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: Method,
    /// Path segments below the API base URL.
    pub segments: Vec<String>,
    /// Form body.
    pub body: Map<String, Value>,
    /// Query string.
    pub query: Map<String, Value>,
}

impl RequestSpec {
    /// Start a request against a top-level collection such as `customers`.
    #[must_use]
    pub fn new(method: Method, collection: &str) -> Self {
        Self {
            method,
            segments: vec![collection.to_string()],
            body: Map::new(),
            query: Map::new(),
        }
    }

    /// `GET /{collection}`.
    #[must_use]
    pub fn get(collection: &str) -> Self {
        Self::new(Method::Get, collection)
    }

    /// `POST /{collection}`.
    #[must_use]
    pub fn post(collection: &str) -> Self {
        Self::new(Method::Post, collection)
    }

    /// `DELETE /{collection}`.
    #[must_use]
    pub fn delete(collection: &str) -> Self {
        Self::new(Method::Delete, collection)
    }

    /// Append a path segment.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Replace the form body.
    #[must_use]
    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    /// Replace the query string.
    #[must_use]
    pub fn with_query(mut self, query: Map<String, Value>) -> Self {
        self.query = query;
        self
    }

    /// Human readable path, e.g. `/customers/cus_123/sources`.
    ///
    /// Segments are joined verbatim; use it for logging and assertions only.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

/// Pagination controls carried from user parameters into a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingCursor {
    /// Object id after which the page starts.
    pub starting_after: Option<String>,
    /// Page size.
    pub limit: Option<u64>,
}

impl ListingCursor {
    /// Write the set controls into a query mapping.
    pub fn apply(&self, query: &mut Map<String, Value>) {
        if let Some(starting_after) = &self.starting_after {
            query.insert(
                "starting_after".to_string(),
                Value::String(starting_after.clone()),
            );
        }
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), Value::from(limit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_joins_segments() {
        let spec = RequestSpec::delete("customers")
            .segment("cus_1")
            .segment("sources")
            .segment("card_1");
        assert_eq!(spec.method, Method::Delete);
        assert_eq!(spec.path(), "/customers/cus_1/sources/card_1");
        assert!(spec.body.is_empty());
        assert!(spec.query.is_empty());
    }

    #[test]
    fn body_and_query_are_kept() {
        let body = json!({"name": "Ada"}).as_object().cloned().unwrap();
        let query = json!({"email": "ada@example.com"})
            .as_object()
            .cloned()
            .unwrap();
        let spec = RequestSpec::post("customers")
            .with_body(body.clone())
            .with_query(query.clone());
        assert_eq!(spec.body, body);
        assert_eq!(spec.query, query);
        assert_eq!(spec.path(), "/customers");
    }

    #[test]
    fn cursor_only_writes_set_controls() {
        let mut query = Map::new();
        ListingCursor::default().apply(&mut query);
        assert!(query.is_empty());

        let cursor = ListingCursor {
            starting_after: Some("txn_9".into()),
            limit: Some(10),
        };
        cursor.apply(&mut query);
        assert_eq!(
            Value::Object(query),
            json!({"starting_after": "txn_9", "limit": 10})
        );
    }

    #[test]
    fn method_displays_uppercase() {
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
