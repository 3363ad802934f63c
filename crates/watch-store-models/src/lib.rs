pub mod history;
pub mod media;

pub use history::HistoryEntry;
pub use media::{MediaKind, ViewableItem};
