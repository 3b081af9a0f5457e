//! User configuration, read from a TOML file.
//!
//! ```toml
//! default_sort = "freq"          # word | end | freq
//! stoplist = "/home/me/stop.txt" # loaded at start-up
//! apostrophes = true             # keep don't / o'clock as one word
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::Tokenizer;
use crate::types::{SortKey, WordlistError, WordlistResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sort key applied whenever a text is loaded.
    pub default_sort: SortKey,
    /// Stoplist file loaded at start-up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoplist: Option<PathBuf>,
    /// Keep apostrophes between letters inside words.
    pub apostrophes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: SortKey::ByWordStart,
            stoplist: None,
            apostrophes: true,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> WordlistResult<Self> {
        toml::from_str(content).map_err(|e| WordlistError::Config(e.to_string()))
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> WordlistResult<String> {
        toml::to_string_pretty(self).map_err(|e| WordlistError::Config(e.to_string()))
    }

    /// Read a configuration file. A relative `stoplist` path is taken
    /// relative to the directory holding the file.
    pub fn load(path: &Path) -> WordlistResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        if let (Some(stoplist), Some(dir)) = (config.stoplist.as_mut(), path.parent()) {
            if stoplist.is_relative() {
                *stoplist = dir.join(&*stoplist);
            }
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// `<config dir>/wordlist/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordlist").join("config.toml"))
    }

    /// Load `explicit` if given, else the default file if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> WordlistResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::with_apostrophes(self.apostrophes)
    }

    /// Build an engine with this configuration, loading the stoplist file if one is set.
    #[cfg(feature = "format")]
    pub fn build_engine(&self) -> WordlistResult<crate::engine::WordlistEngine> {
        let tokenizer = self.tokenizer();
        let mut engine = crate::engine::WordlistEngine::new()
            .with_tokenizer(tokenizer)
            .with_default_sort(self.default_sort);

        if let Some(path) = &self.stoplist {
            let stoplist = crate::format::load_stoplist(path, &tokenizer)?;
            engine = engine.with_stoplist(stoplist);
        }

        Ok(engine)
    }
}
