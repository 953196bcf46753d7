use shadescope_core::alias::resolve_aliases;
use shadescope_core::fs::{DiscoveryAggregator, ExtensionMap, WalkOptions};
use shadescope_core::{DiscoveryConfig, discover};
use shadescope_plugin::{AliasMap, BoxError, DiscoveryResult, NodeFilter};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::tempdir;

fn root(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Result uris are canonical, so expected locations must be too
fn canonical_dir(base: &Path, name: &str) -> PathBuf {
    let dir = base.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::canonicalize(dir).unwrap()
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

fn shader_extensions() -> ExtensionMap {
    ExtensionMap::identity(["args", "oso"])
}

#[test]
fn test_repeated_discovery_is_deterministic() {
    let temp = tempdir().unwrap();
    let a = canonical_dir(temp.path(), "a");
    let b = canonical_dir(temp.path(), "b");
    for name in ["PxrSurface.args", "noise.oso", "checker.2.oso", "Pxr.args"] {
        touch(&a, name);
    }
    for name in ["noise.oso", "wood.oso", "PxrDisney.args"] {
        touch(&b, name);
    }

    let search = vec![root(&a), root(&b)];
    let first = discover(&search, &shader_extensions(), true);
    for _ in 0..5 {
        assert_eq!(discover(&search, &shader_extensions(), true), first);
    }

    let order: Vec<_> = first.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(
        order,
        vec!["Pxr", "PxrSurface", "checker", "noise", "PxrDisney", "wood"]
    );
}

#[test]
fn test_earlier_search_path_wins() {
    let temp = tempdir().unwrap();
    let a = canonical_dir(temp.path(), "a");
    let b = canonical_dir(temp.path(), "b");
    touch(&a, "foo.oso");
    touch(&b, "foo.oso");
    touch(&b, "bar.oso");

    let results = discover(&[root(&a), root(&b)], &shader_extensions(), true);
    let foo: Vec<_> = results.iter().filter(|r| r.identifier == "foo").collect();

    assert_eq!(foo.len(), 1);
    assert!(Path::new(&foo[0].uri).starts_with(&a));

    // Reversing the priority flips the winner
    let results = discover(&[root(&b), root(&a)], &shader_extensions(), true);
    let foo = results.iter().find(|r| r.identifier == "foo").unwrap();
    assert!(Path::new(&foo.uri).starts_with(&b));
}

#[test]
fn test_unlisted_extension_never_discovered() {
    let temp = tempdir().unwrap();
    let dir = canonical_dir(temp.path(), "shaders");
    touch(&dir, "shader.xml");
    touch(&dir, "shader.oso");

    let results = discover(&[root(&dir)], &shader_extensions(), true);

    assert_eq!(results.len(), 1);
    assert!(results.iter().all(|r| !r.uri.ends_with(".xml")));
}

#[cfg(unix)]
#[test]
fn test_symlink_policy() {
    let temp = tempdir().unwrap();
    let store = canonical_dir(temp.path(), "store");
    let search = canonical_dir(temp.path(), "search");
    touch(&store, "PxrLayer.args");
    std::os::unix::fs::symlink(store.join("PxrLayer.args"), search.join("PxrLayer.args")).unwrap();

    let disabled = discover(&[root(&search)], &shader_extensions(), false);
    assert!(disabled.is_empty());

    let enabled = discover(&[root(&search)], &shader_extensions(), true);
    let direct = discover(&[root(&store)], &shader_extensions(), true);
    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled, direct);
}

#[cfg(unix)]
#[test]
fn test_symlink_matches_target_through_linked_root() {
    let temp = tempdir().unwrap();
    let base = temp.path().join("base");
    let store = base.join("store");
    let search = base.join("search");
    fs::create_dir_all(&store).unwrap();
    fs::create_dir_all(&search).unwrap();
    touch(&store, "PxrLayer.args");
    std::os::unix::fs::symlink(store.join("PxrLayer.args"), search.join("PxrLayer.args")).unwrap();
    let linked_base = temp.path().join("alias");
    std::os::unix::fs::symlink(&base, &linked_base).unwrap();

    let via_link = discover(&[root(&linked_base.join("search"))], &shader_extensions(), true);
    let direct = discover(&[root(&linked_base.join("store"))], &shader_extensions(), true);

    assert_eq!(via_link.len(), 1);
    assert_eq!(via_link, direct);
    assert_eq!(
        Path::new(&direct[0].uri),
        fs::canonicalize(store.join("PxrLayer.args")).unwrap()
    );
}

#[test]
fn test_non_canonical_search_path_yields_canonical_uri() {
    let temp = tempdir().unwrap();
    let dir = canonical_dir(temp.path(), "shaders");
    touch(&dir, "noise.oso");
    let indirect = root(&dir.join("..").join("shaders"));

    let results = discover(&[indirect], &shader_extensions(), true);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].uri, root(&dir.join("noise.oso")));
}

#[test]
fn test_always_true_filter_matches_no_filter() {
    let temp = tempdir().unwrap();
    let dir = canonical_dir(temp.path(), "shaders");
    for name in ["a.oso", "b.args", "c.oso"] {
        touch(&dir, name);
    }

    let parser = |_: &DiscoveryResult| -> Result<AliasMap, BoxError> { Ok(AliasMap::new()) };
    let include_all: NodeFilter = Arc::new(|_: &DiscoveryResult| true);

    let discovered = discover(&[root(&dir)], &shader_extensions(), true);
    let unfiltered = resolve_aliases(discovered.clone(), "sdraliases", &parser, None);
    let filtered = resolve_aliases(discovered, "sdraliases", &parser, Some(&include_all));

    assert_eq!(unfiltered, filtered);
    assert_eq!(filtered.len(), 3);
}

#[test]
fn test_missing_search_path_is_skipped() {
    let temp = tempdir().unwrap();
    let valid = canonical_dir(temp.path(), "valid");
    touch(&valid, "noise.oso");
    touch(&valid, "PxrSurface.args");
    let missing = temp.path().join("does_not_exist");

    let with_missing = discover(&[root(&missing), root(&valid)], &shader_extensions(), true);
    let valid_only = discover(&[root(&valid)], &shader_extensions(), true);

    assert_eq!(with_missing, valid_only);
    assert_eq!(with_missing.len(), 2);
}

#[test]
fn test_recursive_walk_takes_family_from_subdirectory() {
    let temp = tempdir().unwrap();
    let dir = canonical_dir(temp.path(), "shaders");
    let pattern = dir.join("pattern");
    fs::create_dir_all(&pattern).unwrap();
    touch(&pattern, "PxrChecker.args");

    let config = DiscoveryConfig::new([root(&dir)]).with_max_depth(2);
    let aggregator = DiscoveryAggregator::from_config(&config, shader_extensions()).unwrap();
    let results = aggregator.discover(&config.search_paths);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].family.as_deref(), Some("pattern"));

    let shallow = DiscoveryAggregator::new(shader_extensions(), WalkOptions::default())
        .discover(&config.search_paths);
    assert!(shallow.is_empty());
}
