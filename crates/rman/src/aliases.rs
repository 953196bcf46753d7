//! `.sdraliases` reader.
//!
//! An aliases file is a JSON object mapping node identifiers to the alternate
//! identifiers they may also be referenced by:
//!
//! ```json
//! {
//!     "PxrPlastic": ["old_plastic", "legacy_plastic"],
//!     "PxrNoise": ["noise"]
//! }
//! ```

use shadescope_core::{Result, ShadescopeError};
use shadescope_plugin::{AliasMap, AliasParser, BoxError, DiscoveryResult};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAliasParser;

impl JsonAliasParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_file(&self, path: &Path) -> Result<AliasMap> {
        let content = std::fs::read_to_string(path)?;
        parse_alias_document(&content)
    }
}

impl AliasParser for JsonAliasParser {
    fn parse_aliases(&self, result: &DiscoveryResult) -> std::result::Result<AliasMap, BoxError> {
        Ok(self.parse_file(result.path())?)
    }
}

pub fn parse_alias_document(content: &str) -> Result<AliasMap> {
    let aliases: AliasMap = serde_json::from_str(content)?;

    for (identifier, names) in &aliases {
        if identifier.is_empty() {
            return Err(ShadescopeError::Alias("empty node identifier".to_string()));
        }
        if names.iter().any(String::is_empty) {
            return Err(ShadescopeError::Alias(format!(
                "empty alias declared for '{identifier}'"
            )));
        }
    }

    Ok(aliases)
}
