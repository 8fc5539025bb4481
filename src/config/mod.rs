use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::errors::OrderError;
use crate::order::{ToppingCatalog, ToppingOption};
use crate::utils::paths;

const TMP_SUFFIX: &str = "tmp";

/// Persisted CLI settings. The topping catalog is supplied here rather than
/// computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub catalog: Vec<ToppingOption>,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: ToppingCatalog::default().options().to_vec(),
            plain_output: false,
        }
    }
}

impl Config {
    /// Validated catalog built from the configured entries.
    pub fn catalog(&self) -> Result<ToppingCatalog, OrderError> {
        ToppingCatalog::new(self.catalog.clone())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, OrderError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Result<Self, OrderError> {
        let base = base.as_ref();
        fs::create_dir_all(base)?;
        Ok(Self {
            path: paths::config_file_in(base),
        })
    }

    /// Loads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, OrderError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.catalog()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), OrderError> {
        config.catalog()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), OrderError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
