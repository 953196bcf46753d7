//! Process-wide defaults picked up by [`RmanDiscoverer::new`].
//!
//! Search paths are computed from the environment once, on first access.
//! Hosts may replace them (and the symlink policy) through the setters;
//! discoverers copy the current values when constructed.
//!
//! [`RmanDiscoverer::new`]: crate::RmanDiscoverer::new

use crate::env::{ProcessEnvironment, compute_default_search_paths};
use once_cell::sync::Lazy;
use shadescope_core::DiscoveryConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

static DEFAULT_SEARCH_PATHS: Lazy<RwLock<Vec<String>>> =
    Lazy::new(|| RwLock::new(compute_default_search_paths(&ProcessEnvironment)));

static DEFAULT_FOLLOW_SYMLINKS: AtomicBool = AtomicBool::new(true);

pub fn default_search_paths() -> Vec<String> {
    DEFAULT_SEARCH_PATHS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn set_default_search_paths(paths: Vec<String>) {
    *DEFAULT_SEARCH_PATHS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = paths;
}

pub fn default_follow_symlinks() -> bool {
    DEFAULT_FOLLOW_SYMLINKS.load(Ordering::Acquire)
}

pub fn set_default_follow_symlinks(follow_symlinks: bool) {
    DEFAULT_FOLLOW_SYMLINKS.store(follow_symlinks, Ordering::Release);
}

/// Snapshot of the current defaults
pub fn default_config() -> DiscoveryConfig {
    DiscoveryConfig::new(default_search_paths()).with_follow_symlinks(default_follow_symlinks())
}
