//! Search path walker.
//!
//! Expands search roots into candidate files: roots in caller order, entries
//! within a directory sorted by file name. Missing roots and unreadable
//! entries are skipped.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    pub follow_symlinks: bool,
    /// 1 lists the search root only
    pub max_depth: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            max_depth: 1,
        }
    }
}

/// A regular file found under one of the search roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the originating search root (lower wins)
    pub root_index: usize,
    /// Path as found under the root
    pub path: PathBuf,
    /// Canonical location of the file; the link target for a followed link
    pub resolved: PathBuf,
}

/// Lazily walk every search path in order.
pub fn walk(
    search_paths: &[String],
    options: WalkOptions,
) -> impl Iterator<Item = Candidate> + '_ {
    search_paths
        .iter()
        .enumerate()
        .flat_map(move |(index, root)| walk_root(index, Path::new(root), options))
}

fn walk_root(
    root_index: usize,
    root: &Path,
    options: WalkOptions,
) -> Box<dyn Iterator<Item = Candidate>> {
    if !root.is_dir() {
        debug!("Skipping search path {:?}: not a directory", root);
        return Box::new(std::iter::empty());
    }

    Box::new(
        WalkDir::new(root)
            .min_depth(1)
            .max_depth(options.max_depth.max(1))
            .follow_links(options.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter_map(move |entry| to_candidate(root_index, entry, options.follow_symlinks)),
    )
}

fn to_candidate(root_index: usize, entry: DirEntry, follow_symlinks: bool) -> Option<Candidate> {
    if entry.path_is_symlink() && !follow_symlinks {
        trace!("Skipping symlink {:?}", entry.path());
        return None;
    }
    // With follow_links the reported file type is the target's
    if !entry.file_type().is_file() {
        return None;
    }

    // Links and plain files resolve the same way, so a linked file reports
    // exactly what its target would
    let resolved = match std::fs::canonicalize(entry.path()) {
        Ok(resolved) => resolved,
        Err(e) => {
            debug!("Failed to resolve {:?}: {}", entry.path(), e);
            return None;
        }
    };
    Some(Candidate {
        root_index,
        path: entry.into_path(),
        resolved,
    })
}
