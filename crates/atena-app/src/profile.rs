use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use atena_config::Config;

/// Load a JSON profile; missing sections keep their defaults
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading profile from {}", path.display());
    let file = File::open(path)
        .with_context(|| format!("Failed to open profile {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(config)
}

/// Profile file when given, otherwise `ATENA_*` environment variables
pub fn resolve_config(profile: Option<&Path>) -> anyhow::Result<Config> {
    match profile {
        Some(path) => load_profile(path),
        None => Ok(Config::new()),
    }
}
