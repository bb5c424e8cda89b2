//! Shared configuration loader for the docmark toolchain.
//!
//! `defaults/docmark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`DocmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use docmark_core::{ConvertOptions, CrossRefStyle, UnrecognizedPolicy};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/docmark.default.toml");

/// Top-level configuration consumed by docmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DocmarkConfig {
    pub markdown: MarkdownConfig,
    pub cross_references: CrossReferencesConfig,
    pub unrecognized: UnrecognizedConfig,
    pub code: CodeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub file_heading_level: u8,
    pub member_heading_level: u8,
    pub section_heading_level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrossReferencesConfig {
    pub style: CrossRefStyle,
    pub anchor_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnrecognizedConfig {
    pub policy: UnrecognizedPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeConfig {
    /// Empty means no info string.
    pub default_language: String,
}

impl From<&DocmarkConfig> for ConvertOptions {
    fn from(config: &DocmarkConfig) -> Self {
        let default_language = Some(config.code.default_language.trim())
            .filter(|language| !language.is_empty())
            .map(str::to_string);
        ConvertOptions {
            file_heading_level: config.markdown.file_heading_level,
            member_heading_level: config.markdown.member_heading_level,
            section_heading_level: config.markdown.section_heading_level,
            cross_references: config.cross_references.style,
            anchor_prefix: config.cross_references.anchor_prefix.clone(),
            unrecognized: config.unrecognized.policy,
            default_language,
        }
    }
}

impl From<DocmarkConfig> for ConvertOptions {
    fn from(config: DocmarkConfig) -> Self {
        ConvertOptions::from(&config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DocmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocmarkConfig, ConfigError> {
    Loader::new().build()
}
