//! Data Transfer Objects - request types for the API.
//!
//! Bodies are validated field by field instead of through a derived
//! `Deserialize`, so a client learns which required field is missing first.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Request body validation failures. `Display` is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing `{0}` in request body")]
    Missing(&'static str),

    #[error("Field `{0}` must be a string")]
    NotAString(&'static str),
}

/// A parsed JSON object body.
#[derive(Debug, Default)]
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
    /// Parse raw bytes. An empty body counts as `{}`.
    pub fn parse(bytes: &[u8]) -> Result<Self, FieldError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice(bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            _ => Err(FieldError::NotAnObject),
        }
    }

    /// Check that every field is present, reporting the first absent one.
    pub fn require(&self, fields: &[&'static str]) -> Result<(), FieldError> {
        match fields.iter().find(|field| !self.0.contains_key(**field)) {
            Some(missing) => Err(FieldError::Missing(*missing)),
            None => Ok(()),
        }
    }

    fn string(&self, field: &'static str) -> Result<String, FieldError> {
        match self.0.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(FieldError::NotAString(field)),
            None => Err(FieldError::Missing(field)),
        }
    }
}

/// Request to create a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl CreatePostRequest {
    pub const REQUIRED_FIELDS: [&'static str; 3] = ["title", "content", "author"];

    pub fn from_body(body: &RequestBody) -> Result<Self, FieldError> {
        body.require(&Self::REQUIRED_FIELDS)?;

        Ok(Self {
            title: body.string("title")?,
            content: body.string("content")?,
            author: body.string("author")?,
        })
    }
}

/// Request to replace a post. Every field is required, including the id,
/// which must match the id in the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
}

impl UpdatePostRequest {
    pub const REQUIRED_FIELDS: [&'static str; 5] =
        ["id", "title", "content", "author", "publishDate"];

    pub fn from_body(body: &RequestBody) -> Result<Self, FieldError> {
        body.require(&Self::REQUIRED_FIELDS)?;

        Ok(Self {
            id: body.string("id")?,
            title: body.string("title")?,
            content: body.string("content")?,
            author: body.string("author")?,
            publish_date: body.string("publishDate")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> RequestBody {
        RequestBody::parse(json.as_bytes()).unwrap()
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        let body = RequestBody::parse(b"").unwrap();
        assert_eq!(
            CreatePostRequest::from_body(&body),
            Err(FieldError::Missing("title"))
        );

        assert!(RequestBody::parse(b"  \n").is_ok());
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert_eq!(
            RequestBody::parse(b"[1, 2]").unwrap_err(),
            FieldError::NotAnObject
        );
        assert_eq!(
            RequestBody::parse(b"{not json").unwrap_err(),
            FieldError::NotAnObject
        );
    }

    #[test]
    fn reports_first_missing_field() {
        let err = CreatePostRequest::from_body(&body(r#"{"title": "t"}"#)).unwrap_err();
        assert_eq!(err, FieldError::Missing("content"));
        assert_eq!(err.to_string(), "Missing `content` in request body");

        let err = UpdatePostRequest::from_body(&body(
            r#"{"id": "1", "title": "t", "content": "c", "author": "a"}"#,
        ))
        .unwrap_err();
        assert_eq!(err, FieldError::Missing("publishDate"));
    }

    #[test]
    fn missing_field_wins_over_wrong_type() {
        let err = CreatePostRequest::from_body(&body(r#"{"title": 4}"#)).unwrap_err();
        assert_eq!(err, FieldError::Missing("content"));
    }

    #[test]
    fn rejects_non_string_values() {
        let err = CreatePostRequest::from_body(&body(
            r#"{"title": "t", "content": null, "author": "a"}"#,
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "Field `content` must be a string");
    }

    #[test]
    fn ignores_unknown_fields() {
        let req = CreatePostRequest::from_body(&body(
            r#"{"title": "Lorem ip some", "content": "foo foo foo foo", "author": "Emma Goldman", "extra": 1}"#,
        ))
        .unwrap();

        assert_eq!(req.title, "Lorem ip some");
        assert_eq!(req.author, "Emma Goldman");
    }

    #[test]
    fn parses_update_request() {
        let req = UpdatePostRequest::from_body(&body(
            r#"{"id": "abc", "title": "t", "content": "c", "author": "a", "publishDate": "whenever"}"#,
        ))
        .unwrap();

        assert_eq!(req.id, "abc");
        assert_eq!(req.publish_date, "whenever");
    }
}
