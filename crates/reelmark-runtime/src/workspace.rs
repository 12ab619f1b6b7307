use reelmark_omdb::OmdbClient;
use reelmark_store::{FileStore, PreferenceStore};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::controller::Controller;
use crate::Result;

/// What `Workspace::init` did to the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created { config_path: PathBuf },
    KeyUpdated { config_path: PathBuf },
    LoadedExisting { config_path: PathBuf },
}

/// A resolved data directory and the config stored in it
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
}

impl Workspace {
    /// Open `data_dir`; a missing config file means defaults.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        tracing::debug!(data_dir = %data_dir.display(), "workspace opened");
        Ok(Self { data_dir, config })
    }

    /// Create the data directory and config file, storing `api_key` if given.
    pub fn init(data_dir: impl Into<PathBuf>, api_key: Option<&str>) -> Result<(Self, InitOutcome)> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = Config::path_in(&data_dir);
        let existed = config_path.exists();
        let mut config = Config::load_from(&config_path)?;

        let key_changed = match api_key.map(str::trim).filter(|key| !key.is_empty()) {
            Some(key) if config.omdb.api_key.as_deref() != Some(key) => {
                config.omdb.api_key = Some(key.to_string());
                true
            }
            _ => false,
        };

        let outcome = if !existed {
            config.save_to(&config_path)?;
            InitOutcome::Created { config_path }
        } else if key_changed {
            config.save_to(&config_path)?;
            InitOutcome::KeyUpdated { config_path }
        } else {
            InitOutcome::LoadedExisting { config_path }
        };

        tracing::info!(data_dir = %data_dir.display(), ?outcome, "workspace initialized");
        Ok((Self { data_dir, config }, outcome))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("reelmark.log")
    }

    /// Favorites and ratings, stored as JSON files in the data directory.
    pub fn preferences(&self) -> PreferenceStore<FileStore> {
        PreferenceStore::open(FileStore::new(&self.data_dir))
    }

    pub fn controller(&self) -> Controller<FileStore> {
        Controller::new(self.preferences(), self.config.debounce())
    }

    /// Build the OMDb client. Fails if no API key can be found.
    pub fn metadata_client(&self, api_key: Option<&str>) -> Result<OmdbClient> {
        let key = self.config.resolve_api_key(api_key)?;
        let client = OmdbClient::new(key)?.with_base_url(self.config.omdb.base_url.clone());
        Ok(client)
    }
}
