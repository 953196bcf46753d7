//! RenderMan node discoverer.

use crate::aliases::JsonAliasParser;
use crate::defaults::default_config;
use crate::{ALIASES_EXTENSION, ALLOWED_EXTENSIONS};
use shadescope_core::alias::AliasResolver;
use shadescope_core::fs::{DiscoveryAggregator, ExtensionMap, WalkOptions};
use shadescope_core::{DiscoveryConfig, Result};
use shadescope_plugin::{
    AliasParser, DiscoveryContext, DiscoveryResult, NodeDiscoverer, NodeFilter,
};
use std::sync::Arc;
use tracing::{debug, info_span};

pub struct RmanDiscoverer {
    config: DiscoveryConfig,
    aggregator: DiscoveryAggregator,
    alias_parser: Arc<dyn AliasParser>,
    filter: Option<NodeFilter>,
}

impl RmanDiscoverer {
    /// Discoverer over the current process-wide defaults
    pub fn new() -> Self {
        let config = default_config();
        // The defaults always use the numeric version rule and depth 1
        let aggregator = DiscoveryAggregator::new(
            Self::extensions(),
            WalkOptions {
                follow_symlinks: config.follow_symlinks,
                max_depth: config.max_depth,
            },
        );
        Self {
            config,
            aggregator,
            alias_parser: Arc::new(JsonAliasParser::new()),
            filter: None,
        }
    }

    pub fn with_config(config: DiscoveryConfig) -> Result<Self> {
        let aggregator = DiscoveryAggregator::from_config(&config, Self::extensions())?;
        Ok(Self {
            config,
            aggregator,
            alias_parser: Arc::new(JsonAliasParser::new()),
            filter: None,
        })
    }

    /// Exclude results for which `filter` returns false
    pub fn with_filter(mut self, filter: NodeFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_alias_parser(mut self, parser: Arc<dyn AliasParser>) -> Self {
        self.alias_parser = parser;
        self
    }

    fn extensions() -> ExtensionMap {
        ExtensionMap::identity(ALLOWED_EXTENSIONS)
    }
}

impl Default for RmanDiscoverer {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeDiscoverer for RmanDiscoverer {
    fn discover_nodes(&self, context: &DiscoveryContext) -> Vec<DiscoveryResult> {
        let span = info_span!("discover_nodes", label = context.label.as_deref().unwrap_or(""));
        let _enter = span.enter();

        let results = self.aggregator.discover(&self.config.search_paths);
        let resolved = AliasResolver::new(ALIASES_EXTENSION, self.alias_parser.as_ref())
            .with_filter(self.filter.as_ref())
            .resolve(results);

        debug!("{} returned {} nodes", self.name(), resolved.len());
        resolved
    }

    fn search_uris(&self) -> &[String] {
        &self.config.search_paths
    }

    fn name(&self) -> &str {
        "RenderMan Discoverer"
    }
}
