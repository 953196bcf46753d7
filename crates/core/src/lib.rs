pub mod alias;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;

pub use alias::{AliasResolver, resolve_aliases};
pub use config::{DiscoveryConfig, VersionRule};
pub use error::{Result, ShadescopeError};
pub use fs::{DiscoveryAggregator, DiscoveryStats, ExtensionMap, NameParser, discover};
