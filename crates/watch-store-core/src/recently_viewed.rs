use tracing::warn;
use watch_store_models::ViewableItem;

use crate::backend::StorageBackend;
use crate::validate;

pub const RECENTLY_VIEWED_KEY: &str = "recentlyViewed";

const MAX_ITEMS: usize = 10;

/// Bounded list of the most recently viewed titles, deduped by slug and
/// capped at ten entries. All state lives in the backend under
/// [`RECENTLY_VIEWED_KEY`]; the store itself is a stateless
/// read-modify-write pair.
pub struct RecentlyViewedStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecentlyViewedStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Current list, newest first. An absent key, a corrupt container, or
    /// invalid elements all degrade to fewer (or no) items, never an error.
    pub fn list(&self) -> Vec<ViewableItem> {
        match self.backend.get(RECENTLY_VIEWED_KEY) {
            Some(raw) => validate::decode_items(&raw),
            None => Vec::new(),
        }
    }

    /// Records a view: any existing entry with the same slug is dropped,
    /// the item goes to the front, and the list is truncated to capacity.
    /// Returns the updated list even when persisting it fails.
    pub fn record(&mut self, item: ViewableItem) -> Vec<ViewableItem> {
        let mut updated: Vec<ViewableItem> = self
            .list()
            .into_iter()
            .filter(|existing| existing.slug != item.slug)
            .collect();
        updated.insert(0, item);
        updated.truncate(MAX_ITEMS);

        self.persist(&updated);
        updated
    }

    fn persist(&mut self, items: &[ViewableItem]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize recently viewed list: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.set(RECENTLY_VIEWED_KEY, &json) {
            warn!("Failed to persist recently viewed list: {}", e);
        }
    }
}
