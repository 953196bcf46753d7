//! RenderMan shader node discovery.
//!
//! Finds `.args` metadata and `.oso` compiled OSL shaders on the RenderMan
//! search paths, and applies the aliases declared in `.sdraliases` files.

pub mod aliases;
pub mod defaults;
pub mod discoverer;
pub mod env;

pub use aliases::JsonAliasParser;
pub use defaults::{
    default_config, default_follow_symlinks, default_search_paths, set_default_follow_symlinks,
    set_default_search_paths,
};
pub use discoverer::RmanDiscoverer;
pub use env::{Environment, ProcessEnvironment, compute_default_search_paths};

/// Extension reserved for alias-definition files; never reported as a node.
pub const ALIASES_EXTENSION: &str = "sdraliases";

/// Extensions recognized on the search paths
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["args", "oso", ALIASES_EXTENSION];
