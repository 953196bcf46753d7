//! Alias post-pass.
//!
//! Runs over aggregated results in three ordered passes:
//! 1. extract: parse every alias-definition file into one [`AliasMap`] and
//!    drop those files from the result set
//! 2. filter: apply the host predicate, if any
//! 3. back-fill: copy map entries into the `aliases` field of matching results
//!
//! Every alias file is read before the first write, so a file late in walk
//! order still applies to nodes found earlier.

use shadescope_plugin::{AliasMap, AliasParser, DiscoveryResult, NodeFilter};
use tracing::{debug, warn};

pub struct AliasResolver<'a> {
    extension: &'a str,
    parser: &'a dyn AliasParser,
    filter: Option<&'a NodeFilter>,
}

impl<'a> AliasResolver<'a> {
    pub fn new(extension: &'a str, parser: &'a dyn AliasParser) -> Self {
        Self {
            extension,
            parser,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: Option<&'a NodeFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn resolve(&self, results: Vec<DiscoveryResult>) -> Vec<DiscoveryResult> {
        let (nodes, aliases) = self.extract(results);
        let mut nodes = apply_filter(nodes, self.filter);
        backfill_aliases(&mut nodes, &aliases);
        nodes
    }

    /// Split alias files off the result set and parse them into one map.
    pub fn extract(&self, results: Vec<DiscoveryResult>) -> (Vec<DiscoveryResult>, AliasMap) {
        let mut aliases = AliasMap::new();
        let mut nodes = Vec::with_capacity(results.len());

        for result in results {
            if !result.has_extension(self.extension) {
                nodes.push(result);
                continue;
            }
            match self.parser.parse_aliases(&result) {
                Ok(contributed) => {
                    debug!(
                        "Alias file {} declares aliases for {} identifiers",
                        result.uri,
                        contributed.len()
                    );
                    merge_aliases(&mut aliases, contributed);
                }
                Err(e) => warn!("Ignoring alias file {}: {}", result.uri, e),
            }
        }

        (nodes, aliases)
    }
}

/// Append `contributed` into `target`, skipping aliases already listed.
pub fn merge_aliases(target: &mut AliasMap, contributed: AliasMap) {
    for (identifier, aliases) in contributed {
        let entry = target.entry(identifier).or_default();
        for alias in aliases {
            if !entry.contains(&alias) {
                entry.push(alias);
            }
        }
    }
}

/// Keep results the filter accepts; everything when there is no filter.
pub fn apply_filter(
    results: Vec<DiscoveryResult>,
    filter: Option<&NodeFilter>,
) -> Vec<DiscoveryResult> {
    match filter {
        Some(filter) => results.into_iter().filter(|r| filter(r)).collect(),
        None => results,
    }
}

/// Overwrite `aliases` on every result named in the map.
pub fn backfill_aliases(results: &mut [DiscoveryResult], aliases: &AliasMap) {
    if aliases.is_empty() {
        return;
    }
    for result in results.iter_mut() {
        if let Some(entry) = aliases.get(&result.identifier) {
            result.aliases = entry.clone();
        }
    }
}

pub fn resolve_aliases(
    results: Vec<DiscoveryResult>,
    alias_extension: &str,
    parser: &dyn AliasParser,
    filter: Option<&NodeFilter>,
) -> Vec<DiscoveryResult> {
    AliasResolver::new(alias_extension, parser)
        .with_filter(filter)
        .resolve(results)
}
