//! Filesystem discovery engine.
//!
//! ```text
//! search paths ──▶ walker ──▶ extension filter ──▶ name parser ──▶ aggregator (dedup)
//! ```
//!
//! The walker yields candidates lazily in a deterministic order; the
//! aggregator keeps the first result per `(identifier, source_type)`, so
//! earlier search paths shadow later ones.

pub mod aggregator;
pub mod extension;
pub mod naming;
pub mod walker;

pub use aggregator::{DiscoveryAggregator, DiscoveryStats, discover};
pub use extension::{Accepted, ExtensionMap, extension_of};
pub use naming::{NameError, NameParser, ParsedName, VersionMatcher};
pub use walker::{Candidate, WalkOptions, walk};
