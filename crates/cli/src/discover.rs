use shadescope_core::DiscoveryConfig;
use shadescope_plugin::{DiscoveryContext, DiscoveryResult, NodeDiscoverer};
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::info;

pub struct DiscoverArgs {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_follow_symlinks: bool,
    pub max_depth: Option<usize>,
    pub json: bool,
}

#[derive(Tabled)]
struct NodeRow {
    #[tabled(rename = "Identifier")]
    identifier: String,
    #[tabled(rename = "Type")]
    source_type: String,
    #[tabled(rename = "Ver")]
    version: String,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "Aliases")]
    aliases: String,
    #[tabled(rename = "Path")]
    uri: String,
}

impl From<DiscoveryResult> for NodeRow {
    fn from(r: DiscoveryResult) -> Self {
        Self {
            identifier: r.identifier,
            source_type: r.source_type,
            version: r.version.unwrap_or_default(),
            family: r.family.unwrap_or_default(),
            aliases: r.aliases.join(", "),
            uri: r.uri,
        }
    }
}

fn build_config(args: &DiscoverArgs) -> shadescope_core::Result<DiscoveryConfig> {
    let mut config = match &args.config {
        Some(path) => DiscoveryConfig::from_file(path)?,
        None => shadescope_rman::default_config(),
    };

    if !args.paths.is_empty() {
        config.search_paths = args
            .paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
    }
    if args.no_follow_symlinks {
        config.follow_symlinks = false;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }

    Ok(config)
}

pub fn run(args: DiscoverArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(&args)?;
    info!("Discovering shader nodes in {:?}", config.search_paths);

    let context = DiscoveryContext::labeled("cli");
    let mut results = Vec::new();
    for discoverer in shadescope_runtime::build_default_discoverers(Some(config))? {
        results.extend(discoverer.discover_nodes(&context));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No shader nodes found.");
    } else {
        let count = results.len();
        let rows: Vec<NodeRow> = results.into_iter().map(NodeRow::from).collect();
        println!("{}", Table::new(rows));
        println!("{count} nodes");
    }
    Ok(())
}
