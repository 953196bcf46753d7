//! Discovery configuration.
//!
//! A `DiscoveryConfig` is built once by the host (or loaded from a JSON file)
//! and handed to each discoverer; nothing here reads process-wide state.

use crate::error::{Result, ShadescopeError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the trailing dot-segments of a file name are recognized as a version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pattern", rename_all = "snake_case")]
pub enum VersionRule {
    /// Non-empty, all ASCII digits (`foo.1.2.oso` -> version `1.2`)
    #[default]
    Numeric,
    /// Never split a version off; the whole stem is the identifier
    Disabled,
    /// Token must fully match the given regular expression
    Pattern(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directories to scan, highest priority first
    pub search_paths: Vec<String>,
    pub follow_symlinks: bool,
    /// Directory levels to descend; 1 lists only the search root itself
    pub max_depth: usize,
    pub version_rule: VersionRule,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            follow_symlinks: true,
            max_depth: 1,
            version_rule: VersionRule::Numeric,
        }
    }
}

impl DiscoveryConfig {
    pub fn new<I, S>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_follow_symlinks(mut self, follow_symlinks: bool) -> Self {
        self.follow_symlinks = follow_symlinks;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_version_rule(mut self, version_rule: VersionRule) -> Self {
        self.version_rule = version_rule;
        self
    }

    /// Load and validate a configuration file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(ShadescopeError::Config(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if let VersionRule::Pattern(pattern) = &self.version_rule {
            regex::Regex::new(pattern)?;
        }
        Ok(())
    }
}
