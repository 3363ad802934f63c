use chrono::Utc;
use tracing::warn;
use watch_store_models::{HistoryEntry, ViewableItem};

use crate::backend::StorageBackend;
use crate::validate;

pub const WATCH_HISTORY_KEY: &str = "watchHistory";

const MAX_ITEMS: usize = 50;

/// Watch history: up to fifty watched titles, deduped by slug, each
/// stamped with the time it was recorded. Same read-modify-write shape as
/// the recently-viewed store, plus an explicit `clear`.
pub struct WatchHistoryStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> WatchHistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Current history, newest first. Degrades to fewer (or no) entries on
    /// absent or malformed data, never an error.
    pub fn list(&self) -> Vec<HistoryEntry> {
        match self.backend.get(WATCH_HISTORY_KEY) {
            Some(raw) => validate::decode_history(&raw),
            None => Vec::new(),
        }
    }

    /// Records a watch. A repeated slug replaces its old entry, so the
    /// timestamp refreshes and the title moves to the front. Returns the
    /// updated list even when persisting it fails.
    pub fn record(&mut self, item: ViewableItem) -> Vec<HistoryEntry> {
        let mut updated: Vec<HistoryEntry> = self
            .list()
            .into_iter()
            .filter(|existing| existing.item.slug != item.slug)
            .collect();
        updated.insert(
            0,
            HistoryEntry {
                item,
                watched_at: Utc::now(),
            },
        );
        updated.truncate(MAX_ITEMS);

        self.persist(&updated);
        updated
    }

    /// Removes the whole history. Clearing an already-empty history is a
    /// no-op.
    pub fn clear(&mut self) {
        self.backend.remove(WATCH_HISTORY_KEY);
    }

    fn persist(&mut self, entries: &[HistoryEntry]) {
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize watch history: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.set(WATCH_HISTORY_KEY, &json) {
            warn!("Failed to persist watch history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use watch_store_models::MediaKind;

    fn sample_item(slug: &str) -> ViewableItem {
        ViewableItem {
            title: format!("Title {}", slug),
            slug: slug.to_string(),
            thumbnail: format!("https://img.example/{}.jpg", slug),
            rating: "8.2".to_string(),
            year: "2021".to_string(),
            kind: MediaKind::Series,
        }
    }

    #[test]
    fn test_record_stamps_fresh_timestamp() {
        let mut store = WatchHistoryStore::new(MemoryBackend::new());
        let before = Utc::now();
        let updated = store.record(sample_item("alpha"));
        let after = Utc::now();

        assert_eq!(updated.len(), 1);
        assert!(updated[0].watched_at >= before);
        assert!(updated[0].watched_at <= after);
    }

    #[test]
    fn test_round_trip_preserves_item_and_timestamp() {
        let mut store = WatchHistoryStore::new(MemoryBackend::new());
        let item = sample_item("alpha");
        let recorded = store.record(item.clone());

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].item, item);
        assert_eq!(listed[0].watched_at, recorded[0].watched_at);
    }

    #[test]
    fn test_rewatch_moves_to_front_and_refreshes_timestamp() {
        let mut store = WatchHistoryStore::new(MemoryBackend::new());
        let first = store.record(sample_item("a"));
        store.record(sample_item("b"));
        let rewatched = store.record(sample_item("a"));

        let slugs: Vec<_> = rewatched.iter().map(|e| e.item.slug.clone()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
        assert!(rewatched[0].watched_at >= first[0].watched_at);
    }

    #[test]
    fn test_eviction_keeps_fifty_newest() {
        let mut store = WatchHistoryStore::new(MemoryBackend::new());
        for n in 0..51 {
            store.record(sample_item(&format!("slug-{}", n)));
        }

        let listed = store.list();
        assert_eq!(listed.len(), 50);
        assert_eq!(listed[0].item.slug, "slug-50");
        assert!(listed.iter().all(|e| e.item.slug != "slug-0"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = WatchHistoryStore::new(MemoryBackend::new());
        store.record(sample_item("a"));

        store.clear();
        assert!(store.list().is_empty());
        store.clear();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_list_drops_entries_missing_watched_at() {
        let mut backend = MemoryBackend::new();
        backend
            .set(
                WATCH_HISTORY_KEY,
                r#"[
                    {"title":"X","slug":"x","thumbnail":"t","rating":"8","year":"2020","type":"movie"},
                    {"title":"Y","slug":"y","thumbnail":"t","rating":"7","year":"2021","type":"series","watchedAt":"2024-01-05T10:00:00Z"}
                ]"#,
            )
            .unwrap();

        let store = WatchHistoryStore::new(backend);
        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].item.slug, "y");
    }

    #[test]
    fn test_record_returns_updated_list_when_write_fails() {
        let mut store = WatchHistoryStore::new(MemoryBackend::with_quota(4));
        let updated = store.record(sample_item("a"));
        assert_eq!(updated.len(), 1);
        assert!(store.list().is_empty());
    }
}
