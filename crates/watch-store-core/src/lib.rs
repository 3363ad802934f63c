pub mod backend;
pub mod filter;
pub mod recently_viewed;
pub mod validate;
pub mod watch_history;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use filter::{collect_years, CatalogFilter};
pub use recently_viewed::{RecentlyViewedStore, RECENTLY_VIEWED_KEY};
pub use watch_history::{WatchHistoryStore, WATCH_HISTORY_KEY};
