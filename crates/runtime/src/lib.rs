use shadescope_core::DiscoveryConfig;
use shadescope_core::logging::LogOptions;
use shadescope_plugin::NodeDiscoverer;
use shadescope_rman::RmanDiscoverer;
use std::sync::Arc;

/// Bootstraps the discoverers available to a host.
///
/// With no explicit configuration the RenderMan discoverer takes the
/// process-wide defaults computed from the environment.
pub fn build_default_discoverers(
    config: Option<DiscoveryConfig>,
) -> shadescope_core::Result<Vec<Arc<dyn NodeDiscoverer>>> {
    let rman = match config {
        Some(config) => RmanDiscoverer::with_config(config)?,
        None => RmanDiscoverer::new(),
    };
    tracing::debug!("Search paths for {}: {:?}", rman.name(), rman.search_uris());

    let rman: Arc<dyn NodeDiscoverer> = Arc::new(rman);
    Ok(vec![rman])
}

/// Installs the global subscriber described by `options`.
/// The returned guard flushes buffered log lines when dropped.
pub fn init_logging(options: &LogOptions) -> shadescope_core::Result<impl Drop> {
    shadescope_core::logging::init_logging(options)
}
