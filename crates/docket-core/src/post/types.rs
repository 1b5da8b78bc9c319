use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file attached to a post. Opaque to ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    /// Original display name
    pub name: String,
    /// MIME type recorded at upload time
    #[serde(rename = "type")]
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
    /// Stored filename on disk
    pub filename: String,
    /// ISO date string
    pub upload_date: String,
}

impl Attachment {
    /// MIME type guessed from the stored filename, falling back to the
    /// recorded type when the extension is unknown.
    pub fn guessed_mime(&self) -> String {
        mime_guess::from_path(&self.filename)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| self.content_type.clone())
    }
}

/// A published post, read-only input to the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable slug identifier
    pub id: String,
    pub title: String,
    /// Calendar date string; unparseable dates get zero recency
    pub date: String,
    pub author: String,
    pub summary: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Post {
    /// Publication timestamp, when the date string parses
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        super::parse_date(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r#"{
            "id": "gdpr-overview",
            "title": "GDPR Overview",
            "date": "2026-01-15",
            "author": "A. Counsel",
            "summary": "A summary",
            "content": "Body text"
        }"#
    }

    #[test]
    fn test_deserialize_minimal() {
        let post: Post = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(post.id, "gdpr-overview");
        assert!(post.tags.is_empty());
        assert!(post.jurisdiction.is_none());
        assert!(post.attachments.is_empty());
        assert!(post.published_at().is_some());
    }

    #[test]
    fn test_optional_fields_omitted_on_serialize() {
        let post: Post = serde_json::from_str(minimal_json()).unwrap();
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("jurisdiction").is_none());
        assert!(json.get("citation").is_none());
        assert!(json.get("attachments").is_none());
    }

    #[test]
    fn test_attachment_mime_guess() {
        let att = Attachment {
            id: "a1".into(),
            name: "brief.pdf".into(),
            content_type: "application/octet-stream".into(),
            size: 1024,
            filename: "1710000000-brief.pdf".into(),
            upload_date: "2026-01-15T10:00:00Z".into(),
        };
        assert_eq!(att.guessed_mime(), "application/pdf");

        let unknown = Attachment {
            filename: "blob.xyzzy".into(),
            ..att
        };
        assert_eq!(unknown.guessed_mime(), "application/octet-stream");
    }
}
