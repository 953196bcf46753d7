//! Discovery record and capability traits for the shader node discovery layer.
//!
//! This module defines the core abstractions for:
//! - Node discovery (finding `.args` / `.oso` files on search paths)
//! - Alias parsing (turning alias-definition files into identifier mappings)
//! - Result filtering (host-supplied exclusion predicates)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Error type for plugin operations
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Identifier -> ordered alias list
pub type AliasMap = BTreeMap<String, Vec<String>>;

/// Host-supplied predicate. Returning `false` discards the result.
pub type NodeFilter = Arc<dyn Fn(&DiscoveryResult) -> bool + Send + Sync>;

// ==================== Discovery Result ====================

/// One shader node candidate found on disk, prior to parsing its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    /// Unique per `source_type` within a discovery run
    pub identifier: String,
    /// Node name; same as the identifier unless a parser overrides it
    pub name: String,
    pub version: Option<String>,
    /// Grouping tag, taken from the parent directory
    pub family: Option<String>,
    /// Raw file extension the node was found under (e.g. "oso")
    pub discovery_type: String,
    /// Tag telling downstream parsers which format to expect
    pub source_type: String,
    /// Resolved file path
    pub uri: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl DiscoveryResult {
    pub fn new(
        identifier: impl Into<String>,
        discovery_type: impl Into<String>,
        source_type: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        let identifier = identifier.into();
        Self {
            name: identifier.clone(),
            identifier,
            version: None,
            family: None,
            discovery_type: discovery_type.into(),
            source_type: source_type.into(),
            uri: uri.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn with_family(mut self, family: Option<String>) -> Self {
        self.family = family;
        self
    }

    /// Deduplication key: `(identifier, source_type)`
    pub fn key(&self) -> (&str, &str) {
        (&self.identifier, &self.source_type)
    }

    /// Whether the result's uri ends with `.<extension>`
    pub fn has_extension(&self, extension: &str) -> bool {
        self.uri
            .strip_suffix(extension)
            .is_some_and(|rest| rest.ends_with('.'))
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.uri)
    }
}

// ==================== Discovery Layer ====================

/// Per-invocation context handed in by the host.
///
/// Each call owns its own result set; nothing in the context is shared
/// between invocations.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryContext {
    /// Free-form label attached to diagnostics for this run
    pub label: Option<String>,
}

impl DiscoveryContext {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

/// Node discoverer - knows where shader nodes live and how to enumerate them
pub trait NodeDiscoverer: Send + Sync {
    /// Enumerate every node visible on this discoverer's search paths
    fn discover_nodes(&self, context: &DiscoveryContext) -> Vec<DiscoveryResult>;

    /// Search locations in priority order
    fn search_uris(&self) -> &[String];

    /// Discoverer name (for logging/debugging)
    fn name(&self) -> &str;
}

/// Alias parser - knows how to read an alias-definition file.
///
/// The returned map may name any identifier, including nodes that are not
/// part of the current result set.
pub trait AliasParser: Send + Sync {
    fn parse_aliases(&self, result: &DiscoveryResult) -> Result<AliasMap, BoxError>;
}

impl<F> AliasParser for F
where
    F: Fn(&DiscoveryResult) -> Result<AliasMap, BoxError> + Send + Sync,
{
    fn parse_aliases(&self, result: &DiscoveryResult) -> Result<AliasMap, BoxError> {
        self(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_defaults() {
        let result = DiscoveryResult::new("PxrSurface", "args", "args", "/shaders/PxrSurface.args");

        assert_eq!(result.name, "PxrSurface");
        assert_eq!(result.key(), ("PxrSurface", "args"));
        assert!(result.version.is_none());
        assert!(result.family.is_none());
        assert!(result.aliases.is_empty());
    }

    #[test]
    fn test_has_extension_requires_dot() {
        let result = DiscoveryResult::new("a", "sdraliases", "sdraliases", "/s/a.sdraliases");
        assert!(result.has_extension("sdraliases"));
        assert!(!result.has_extension("aliases"));

        let bare = DiscoveryResult::new("a", "oso", "oso", "/s/sdraliases");
        assert!(!bare.has_extension("sdraliases"));
    }

    #[test]
    fn test_empty_aliases_are_not_serialized() {
        let result = DiscoveryResult::new("noise", "oso", "oso", "/s/noise.oso");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("aliases").is_none());
    }
}
