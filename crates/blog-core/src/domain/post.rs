use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a single blog entry.
///
/// `publish_date` is kept as the string the client last sent so updates
/// round-trip it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
}

impl Post {
    /// Create a new post with a generated id, published now.
    pub fn new(title: String, content: String, author: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            author,
            publish_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
