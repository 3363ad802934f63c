use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::media::ViewableItem;

/// A watched title: the catalog record plus the moment it was watched.
/// `watched_at` is stamped by the history store at record time, never
/// supplied by the caller, and serializes as an RFC 3339 `watchedAt`
/// string alongside the flattened item fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub item: ViewableItem,
    #[serde(rename = "watchedAt")]
    pub watched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    #[test]
    fn test_entry_serializes_flat_with_watched_at() {
        let entry = HistoryEntry {
            item: ViewableItem {
                title: "Example".to_string(),
                slug: "example".to_string(),
                thumbnail: "https://img.example/e.jpg".to_string(),
                rating: "8.1".to_string(),
                year: "2019".to_string(),
                kind: MediaKind::Movie,
            },
            watched_at: Utc::now(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        // Flat wire shape: item fields at top level, no nested "item" object
        assert_eq!(json["slug"], "example");
        assert!(json.get("item").is_none());
        assert!(json["watchedAt"].is_string());
    }
}
