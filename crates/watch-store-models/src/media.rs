use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog record as the upstream API serves it: enough identity to key
/// on (`slug`) plus the display fields a card needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewableItem {
    pub title: String,
    pub slug: String,
    pub thumbnail: String,
    pub rating: String, // served as a string upstream, kept as-is
    pub year: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Series => write!(f, "series"),
        }
    }
}
