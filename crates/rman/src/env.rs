//! Search paths derived from the RenderMan installation environment.
//!
//! Shaders (`.oso`):
//! - `RMAN_SHADERPATH` entries, or else
//! - `$RMANTREE/lib/shaders` and `<loader root>/resources/shaders`
//!
//! Args metadata (`.args`):
//! - `<entry>/Args` for each `RMAN_RIXPLUGINPATH` entry, or else
//! - `$RMANTREE/lib/plugins/Args`

use std::collections::HashMap;
use std::path::Path;

pub const RMAN_SHADERPATH: &str = "RMAN_SHADERPATH";
pub const RMAN_RIXPLUGINPATH: &str = "RMAN_RIXPLUGINPATH";
pub const RMANTREE: &str = "RMANTREE";
/// Install location of the renderer's USD loader plugin
pub const LOADER_ROOT: &str = "SHADESCOPE_LOADER_ROOT";

/// Read access to environment-style configuration
pub trait Environment {
    /// Value of `key`; unset and empty values are both `None`
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

pub fn compute_default_search_paths(env: &dyn Environment) -> Vec<String> {
    let mut search_paths = Vec::new();
    let rmantree = env.var(RMANTREE);

    if let Some(shaderpath) = env.var(RMAN_SHADERPATH) {
        search_paths.extend(split_path_list(&shaderpath));
    } else {
        if let Some(tree) = &rmantree {
            search_paths.push(join(tree, "lib/shaders"));
        }
        if let Some(loader_root) = env.var(LOADER_ROOT) {
            search_paths.push(join(&loader_root, "resources/shaders"));
        }
    }

    if let Some(rixpluginpath) = env.var(RMAN_RIXPLUGINPATH) {
        // Args files live under an 'Args' directory of each plugin path
        search_paths.extend(
            split_path_list(&rixpluginpath)
                .iter()
                .map(|path| join(path, "Args")),
        );
    } else if let Some(tree) = &rmantree {
        search_paths.push(join(tree, "lib/plugins/Args"));
    }

    search_paths
}

/// Split on the platform path-list separator, dropping empty entries.
fn split_path_list(value: &str) -> Vec<String> {
    std::env::split_paths(value)
        .map(|p| p.to_string_lossy().into_owned())
        .filter(|p| !p.is_empty())
        .collect()
}

fn join(base: &str, relative: &str) -> String {
    Path::new(base).join(relative).to_string_lossy().into_owned()
}
