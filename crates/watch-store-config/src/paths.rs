use anyhow::Result;
use std::path::{Path, PathBuf};

/// Get the base path override from the environment, if set
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("FILMDECK_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        if let Some(base) = base_path_override() {
            return Ok(Self::from_base(base));
        }

        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("filmdeck");

        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    /// Replaces the data directory, keeping config where it is. Used for
    /// the `data_dir` config override.
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory the key-value store files live in.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(self.store_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_hang_off_base() {
        let paths = PathManager::from_base(PathBuf::from("/tmp/filmdeck-test"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/filmdeck-test/config.toml"));
        assert_eq!(paths.store_dir(), PathBuf::from("/tmp/filmdeck-test/data/store"));
    }

    #[test]
    fn test_with_data_dir_overrides_only_data() {
        let paths = PathManager::from_base(PathBuf::from("/tmp/filmdeck-test"))
            .with_data_dir(PathBuf::from("/var/lib/filmdeck"));
        assert_eq!(paths.config_dir(), Path::new("/tmp/filmdeck-test"));
        assert_eq!(paths.store_dir(), PathBuf::from("/var/lib/filmdeck/store"));
    }
}
