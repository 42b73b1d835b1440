//! CLI subcommands.

pub mod config;
pub mod extract;
pub mod reconcile;

use std::path::Path;

use concilia_core::models::config::ConciliaConfig;

/// Load the config given on the command line, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ConciliaConfig> {
    match config_path {
        Some(path) => Ok(ConciliaConfig::from_file(Path::new(path))?),
        None => Ok(ConciliaConfig::default()),
    }
}

/// Reject inputs that are not .xlsx workbooks up front.
pub fn ensure_xlsx(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "xlsx" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    Ok(())
}
