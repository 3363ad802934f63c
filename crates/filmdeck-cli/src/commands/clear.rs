use color_eyre::Result;
use watch_store_core::WatchHistoryStore;

use crate::output::Output;

pub fn run_clear(output: &Output) -> Result<()> {
    let backend = super::open_backend()?;
    let mut store = WatchHistoryStore::new(backend);

    let entries = store.list().len();
    store.clear();

    if entries > 0 {
        output.success(format!("Cleared {} watch history entries", entries));
    } else {
        output.info("Watch history was already empty");
    }
    Ok(())
}
