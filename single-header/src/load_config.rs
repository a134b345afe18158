//! `load_config` module: reads the optional YAML project file into a [`ProjectConfig`].
//!
//! # Responsibilities
//! - Parse the user-supplied YAML into the core config type; every key is optional
//!   and falls back to the default library layout.
//! - Resolve relative paths against the directory holding the config file, so the
//!   tool behaves the same from any working directory.
//! - Surface read and parse failures with clear messages for the CLI and tests.
//!
//! # Errors
//! All errors in this module use `anyhow::Error` and are surfaced at the CLI boundary.

use anyhow::Result;
use single_header_core::ProjectConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Loads a YAML project file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ProjectConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    // An empty document means "all defaults".
    let raw: ProjectConfig = if config_content.trim().is_empty() {
        ProjectConfig::default()
    } else {
        match serde_yaml::from_str(&config_content) {
            Ok(conf) => {
                info!(config_path = ?path_ref, "Parsed config YAML successfully");
                conf
            }
            Err(e) => {
                error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
                return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
            }
        }
    };

    let base = config_dir(path_ref);
    let config = raw.rebase(&base);
    config.trace_loaded();
    Ok(config)
}

/// Config from `path` if given, otherwise the default layout relative to the
/// current directory.
pub fn resolve_config(path: Option<&Path>) -> Result<ProjectConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            info!("No config file given, using default project layout");
            let config = ProjectConfig::default();
            config.trace_loaded();
            Ok(config)
        }
    }
}

fn config_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::new(),
    }
}
