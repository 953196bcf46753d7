//! Discovery aggregator.
//!
//! Streams candidates from the walker through the extension filter and the
//! name parser, then keeps the first result seen per
//! `(identifier, source_type)`.

use super::extension::ExtensionMap;
use super::naming::{NameParser, VersionMatcher};
use super::walker::{WalkOptions, walk};
use crate::config::DiscoveryConfig;
use crate::error::Result;
use shadescope_plugin::DiscoveryResult;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Counters for a single discovery run
#[derive(Debug, Default, Clone)]
pub struct DiscoveryStats {
    /// Regular files produced by the walker
    pub candidates: usize,
    /// Files whose extension is not in the allow-set
    pub rejected: usize,
    /// Files dropped for an unusable name
    pub malformed: usize,
    /// Duplicates from a lower-priority search path
    pub shadowed: usize,
    /// Duplicates within one search path
    pub conflicts: usize,
    /// Results kept
    pub discovered: usize,
    pub duration: Duration,
}

pub struct DiscoveryAggregator {
    extensions: ExtensionMap,
    parser: NameParser,
    options: WalkOptions,
}

impl DiscoveryAggregator {
    pub fn new(extensions: ExtensionMap, options: WalkOptions) -> Self {
        Self {
            extensions,
            parser: NameParser::default(),
            options,
        }
    }

    pub fn from_config(config: &DiscoveryConfig, extensions: ExtensionMap) -> Result<Self> {
        config.validate()?;
        let options = WalkOptions {
            follow_symlinks: config.follow_symlinks,
            max_depth: config.max_depth,
        };
        let parser = NameParser::new(VersionMatcher::from_rule(&config.version_rule)?);
        Ok(Self::new(extensions, options).with_name_parser(parser))
    }

    pub fn with_name_parser(mut self, parser: NameParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn discover(&self, search_paths: &[String]) -> Vec<DiscoveryResult> {
        self.discover_with_stats(search_paths).0
    }

    pub fn discover_with_stats(&self, search_paths: &[String]) -> (Vec<DiscoveryResult>, DiscoveryStats) {
        let start = Instant::now();
        let mut stats = DiscoveryStats::default();
        let mut results = Vec::new();
        // key -> (root index, uri) of the kept result
        let mut seen: HashMap<(String, String), (usize, String)> = HashMap::new();
        debug!(
            "Walking {} search paths for [{}]",
            search_paths.len(),
            self.extensions.extensions().collect::<Vec<_>>().join(", ")
        );

        for candidate in walk(search_paths, self.options) {
            stats.candidates += 1;

            let Some(accepted) = self.extensions.accepts(&candidate.resolved) else {
                stats.rejected += 1;
                continue;
            };

            let parsed = match self.parser.parse(&candidate.resolved) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Skipping shader file with malformed name: {}", e);
                    stats.malformed += 1;
                    continue;
                }
            };

            let uri = candidate.resolved.to_string_lossy().into_owned();
            match seen.entry((parsed.identifier.clone(), accepted.source_type.clone())) {
                Entry::Occupied(entry) => {
                    let (kept_root, kept_uri) = entry.get();
                    if *kept_root == candidate.root_index {
                        warn!(
                            "Naming conflict for '{}' ({}): {} ignored, keeping {}",
                            parsed.identifier, accepted.source_type, uri, kept_uri
                        );
                        stats.conflicts += 1;
                    } else {
                        debug!(
                            "'{}' ({}) at {} is shadowed by {}",
                            parsed.identifier, accepted.source_type, uri, kept_uri
                        );
                        stats.shadowed += 1;
                    }
                    continue;
                }
                Entry::Vacant(entry) => {
                    entry.insert((candidate.root_index, uri.clone()));
                }
            }

            results.push(
                DiscoveryResult::new(
                    parsed.identifier,
                    accepted.discovery_type,
                    accepted.source_type,
                    uri,
                )
                .with_version(parsed.version)
                .with_family(parsed.family),
            );
        }

        stats.discovered = results.len();
        stats.duration = start.elapsed();
        info!(
            "Discovery complete: {} candidates, {} nodes, {} shadowed, {} conflicts in {:?}",
            stats.candidates, stats.discovered, stats.shadowed, stats.conflicts, stats.duration
        );

        (results, stats)
    }
}

/// Discover with the default name convention over a single-level walk.
pub fn discover(
    search_paths: &[String],
    extensions: &ExtensionMap,
    follow_symlinks: bool,
) -> Vec<DiscoveryResult> {
    let options = WalkOptions {
        follow_symlinks,
        ..WalkOptions::default()
    };
    DiscoveryAggregator::new(extensions.clone(), options).discover(search_paths)
}
