//! calnote configuration.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::{CalNoteError, CalNoteResult};
use crate::month_grid::WeekStart;
use crate::note_store::{DEFAULT_STORAGE_KEY, NoteStore, PersistPolicy};
use crate::storage::FileStore;

static DEFAULT_DATA_DIR: &str = "~/.local/share/calnote";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Configuration at ~/.config/calnote/config.toml
///
/// Every field can also be set through a `CALNOTE_`-prefixed environment
/// variable, e.g. `CALNOTE_DATA_DIR`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CalnoteConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Write the note map even when it is empty.
    #[serde(default)]
    pub persist_empty: bool,

    #[serde(default)]
    pub week_start: WeekStart,
}

impl Default for CalnoteConfig {
    fn default() -> Self {
        CalnoteConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            persist_empty: false,
            week_start: WeekStart::default(),
        }
    }
}

impl CalnoteConfig {
    pub fn config_path() -> CalNoteResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalNoteError::Config("Could not determine config directory".into()))?
            .join("calnote");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out config
    /// there first if none exists.
    pub fn load() -> CalNoteResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_with_env(&config_path, Self::environment())
    }

    /// Load from `path` alone, ignoring `CALNOTE_` variables.
    pub fn load_from(path: &Path) -> CalNoteResult<Self> {
        Self::build(Config::builder().add_source(File::from(path.to_path_buf()).required(false)))
    }

    /// Load from `path`, letting `env` override file values.
    pub fn load_with_env(path: &Path, env: Environment) -> CalNoteResult<Self> {
        Self::build(
            Config::builder()
                .add_source(File::from(path.to_path_buf()).required(false))
                .add_source(env),
        )
    }

    /// `CALNOTE_`-prefixed process environment.
    pub fn environment() -> Environment {
        Environment::with_prefix("CALNOTE").try_parsing(true)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> CalNoteResult<Self> {
        builder
            .build()
            .map_err(|e| CalNoteError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalNoteError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn persist_policy(&self) -> PersistPolicy {
        if self.persist_empty {
            PersistPolicy::Always
        } else {
            PersistPolicy::SkipEmpty
        }
    }

    /// The note store described by this configuration, backed by files in `data_dir`.
    pub fn note_store(&self) -> NoteStore<FileStore> {
        NoteStore::new(FileStore::new(self.data_path()))
            .with_key(self.storage_key.clone())
            .with_policy(self.persist_policy())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalNoteResult<()> {
        let contents = format!(
            "\
# calnote configuration

# Where notes are stored:
# data_dir = \"{}\"

# Storage key (file name without .json) holding the notes:
# storage_key = \"{}\"

# Write the notes file even when there are no notes left:
# persist_empty = false

# First column of the month grid (\"sunday\" or \"monday\"):
# week_start = \"sunday\"
",
            DEFAULT_DATA_DIR, DEFAULT_STORAGE_KEY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalNoteError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalNoteError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
