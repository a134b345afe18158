use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Layout of the project being amalgamated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory internal includes are resolved against.
    pub source_root: PathBuf,
    /// Namespace for forwarded external includes.
    pub dependency_root: PathBuf,
    /// Files to assemble, in order, relative to `source_root`.
    pub entry_points: Vec<PathBuf>,
    pub license_file: Option<PathBuf>,
    pub output: PathBuf,
    /// Marker labels are printed relative to this directory.
    #[serde(skip)]
    pub marker_base: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src"),
            dependency_root: PathBuf::from("dependency"),
            entry_points: ["iostream.hpp", "sstream.hpp", "serstream.hpp"]
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            license_file: Some(PathBuf::from("LICENSE")),
            output: PathBuf::from("single/ard-streams.h"),
            marker_base: PathBuf::new(),
        }
    }
}

impl ProjectConfig {
    /// Resolves every relative path against `base`, which also becomes the
    /// marker base. Entry points stay relative to `source_root`.
    pub fn rebase(mut self, base: &Path) -> Self {
        self.source_root = base.join(&self.source_root);
        self.dependency_root = base.join(&self.dependency_root);
        self.license_file = self.license_file.map(|p| base.join(p));
        self.output = base.join(&self.output);
        self.marker_base = base.to_path_buf();
        self
    }

    /// Entry points joined onto the source root.
    pub fn entry_paths(&self) -> Vec<PathBuf> {
        self.entry_points
            .iter()
            .map(|e| self.source_root.join(e))
            .collect()
    }

    pub fn trace_loaded(&self) {
        info!(
            source_root = %self.source_root.display(),
            entry_points = self.entry_points.len(),
            output = %self.output.display(),
            "Loaded project config"
        );
        debug!(?self, "Project config loaded (full debug)");
    }
}
