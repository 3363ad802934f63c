pub mod clear;
pub mod list;
pub mod record;

use color_eyre::eyre::Context;
use color_eyre::Result;
use tracing::debug;
use watch_store_config::{Config, PathManager};
use watch_store_core::FileBackend;

/// Opens the file-backed store under the configured data directory.
pub(crate) fn open_backend() -> Result<FileBackend> {
    let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let config = Config::load(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let paths = match config.data_dir {
        Some(data_dir) => paths.with_data_dir(data_dir),
        None => paths,
    };

    paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    debug!("Using store directory: {}", paths.store_dir().display());
    FileBackend::new(paths.store_dir()).context("Failed to open store directory")
}
