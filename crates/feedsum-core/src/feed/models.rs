use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an article produced by the fetch pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub url: Option<String>,
    pub title: String,
    /// Extracted article text; empty when extraction found nothing
    #[serde(default)]
    pub content: String,
    pub published_at: Option<DateTime<Utc>>,
    pub fetched_at: DateTime<Utc>,
}

impl Article {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: None,
            title: title.into(),
            content: content.into(),
            published_at: None,
            fetched_at: Utc::now(),
        }
    }

    /// Get the title clipped to the first N characters
    pub fn title_preview(&self, max_chars: usize) -> &str {
        match self.title.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.title[..idx],
            None => &self.title,
        }
    }
}
