use shadescope_rman::{ProcessEnvironment, compute_default_search_paths};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let paths = compute_default_search_paths(&ProcessEnvironment);
    if paths.is_empty() {
        println!("No search paths configured (set RMAN_SHADERPATH, RMAN_RIXPLUGINPATH or RMANTREE).");
        return Ok(());
    }

    for path in paths {
        let marker = if std::path::Path::new(&path).is_dir() { " " } else { "!" };
        println!("{marker} {path}");
    }
    Ok(())
}
