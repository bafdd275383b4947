//! Configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[content]`  | Content root, item extension, overview file     |
//! | `[markdown]` | CommonMark extensions used for item bodies      |
//!
//! # Example
//!
//! ```toml
//! [content]
//! root = "content"
//! extension = "md"
//!
//! [markdown]
//! footnotes = false
//! ```

mod content;
pub mod defaults;
mod error;
mod markdown;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use markdown::MarkdownConfig;

use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name looked up by [`FolioConfig::load_or_default`].
pub const CONFIG_FILE: &str = "folio.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Content tree settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Markdown rendering settings
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl FolioConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: FolioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path.
    ///
    /// A relative `[content].root` is resolved against the config file's directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        let mut config: FolioConfig = toml::from_str(&content)
            .map_err(|err| ConfigError::ParseFile(path.to_path_buf(), err))?;
        config.validate()?;

        if let Some(dir) = path.parent() {
            config.update_path_with_root(dir);
        }
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load `folio.toml` from `root`, or use defaults rooted there if it does not exist.
    pub fn load_or_default(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            return Self::from_path(&config_path);
        }

        let mut config = Self::default();
        config.update_path_with_root(root);
        Ok(config)
    }

    /// Content root directory
    pub fn content_root(&self) -> &Path {
        &self.content.root
    }

    /// Resolve relative paths against `root`
    fn update_path_with_root(&mut self, root: &Path) {
        if self.content.root.is_relative() && !root.as_os_str().is_empty() {
            self.content.root = root.join(&self.content.root);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extension = &self.content.extension;
        if extension.is_empty() {
            return Err(ConfigError::Validation(
                "[content.extension] must not be empty".into(),
            ));
        }
        if extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "[content.extension] must not start with a dot: `{extension}`"
            )));
        }
        if self.content.overview.is_empty() {
            return Err(ConfigError::Validation(
                "[content.overview] must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
