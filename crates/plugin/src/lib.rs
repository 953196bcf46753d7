//! Shared vocabulary between the discovery engine and its plugins.

pub mod discovery;

pub use discovery::{
    AliasMap, AliasParser, BoxError, DiscoveryContext, DiscoveryResult, NodeDiscoverer,
    NodeFilter,
};
