use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Identifier of a post. Upstream payloads use numbers, but strings are
/// accepted too. Any JSON number is kept as sent, fractional or beyond
/// `i64` included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(Number),
    Text(String),
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A remote post. Only `id` and `title` are displayed; every other field
/// (`userId`, `body`, ...) is kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn new(id: impl Into<PostId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeFailure {
    #[error("response body is not valid JSON")]
    Json(#[source] serde_json::Error),
    #[error("expected a JSON array of posts, found {found}")]
    NotAnArray { found: &'static str },
    #[error("post at index {index} is malformed")]
    InvalidPost {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a response body into posts, preserving response order.
pub fn decode_posts(body: &[u8]) -> Result<Vec<Post>, DecodeFailure> {
    let value: Value = serde_json::from_slice(body).map_err(DecodeFailure::Json)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DecodeFailure::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Post>(item)
                .map_err(|source| DecodeFailure::InvalidPost { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_numeric_and_string_ids_in_order() {
        let body = br#"[
            {"userId": 1, "id": 1, "title": "Hello", "body": "first"},
            {"id": "abc", "title": "World"}
        ]"#;
        let posts = decode_posts(body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, PostId::from(1));
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[1].id, PostId::Text("abc".to_string()));
        assert_eq!(posts[1].title, "World");
    }

    #[test]
    fn keeps_unused_fields_untouched() {
        let posts = decode_posts(br#"[{"userId": 7, "id": 3, "title": "t", "body": "b"}]"#)
            .unwrap();
        let extra = &posts[0].extra;
        assert_eq!(extra.get("userId"), Some(&Value::from(7)));
        assert_eq!(extra.get("body"), Some(&Value::from("b")));
        assert!(!extra.contains_key("id"));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(decode_posts(b"[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let error = decode_posts(b"[{\"id\": 1,").unwrap_err();
        assert!(matches!(error, DecodeFailure::Json(_)));
    }

    #[test]
    fn rejects_non_array_body() {
        let error = decode_posts(br#"{"data": []}"#).unwrap_err();
        assert!(matches!(
            error,
            DecodeFailure::NotAnArray { found: "an object" }
        ));
        assert_eq!(
            error.to_string(),
            "expected a JSON array of posts, found an object"
        );
    }

    #[test]
    fn reports_index_of_invalid_post() {
        let error = decode_posts(br#"[{"id": 1, "title": "ok"}, {"id": 2}]"#).unwrap_err();
        match error {
            DecodeFailure::InvalidPost { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_scalar_id() {
        let error = decode_posts(br#"[{"id": [1], "title": "x"}]"#).unwrap_err();
        assert!(matches!(error, DecodeFailure::InvalidPost { index: 0, .. }));
    }

    #[test]
    fn accepts_fractional_id() {
        let posts = decode_posts(br#"[{"id": 1.5, "title": "x"}]"#).unwrap();
        let expected = Number::from_f64(1.5).map(PostId::Number);
        assert_eq!(Some(posts[0].id.clone()), expected);
    }

    #[test]
    fn accepts_id_beyond_i64() {
        let posts = decode_posts(br#"[{"id": 18446744073709551615, "title": "x"}]"#).unwrap();
        assert_eq!(posts[0].id, PostId::Number(Number::from(u64::MAX)));
        assert_eq!(posts[0].title, "x");
    }
}
