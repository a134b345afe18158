//! Writes the single-header artifact: banner followed by the assembled sources.
//!
//! The artifact is streamed into a temporary file next to the output path and
//! renamed into place only after assembly succeeded. A failed run leaves no
//! new artifact behind.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::assemble::Assembler;
use crate::banner::Banner;
use crate::config::ProjectConfig;
use crate::contract::{AssemblyReport, GenerateError, SourceTree};

pub fn generate<T: SourceTree>(
    config: &ProjectConfig,
    tree: T,
    generated_at: DateTime<Utc>,
) -> Result<AssemblyReport, GenerateError> {
    info!(output = %config.output.display(), "Generating single header");

    let license = match &config.license_file {
        Some(path) => Some(tree.read_to_string(path).map_err(|source| {
            error!(path = %path.display(), error = ?source, "Failed to read license file");
            GenerateError::License {
                path: path.to_path_buf(),
                source,
            }
        })?),
        None => None,
    };

    let output = config.output.as_path();
    let output_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(output_dir).map_err(|source| {
        error!(path = %output_dir.display(), error = ?source, "Failed to create output directory");
        GenerateError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        }
    })?;

    let output_error = |source: std::io::Error| GenerateError::Output {
        path: output.to_path_buf(),
        source,
    };

    let staging = tempfile::NamedTempFile::new_in(output_dir).map_err(output_error)?;
    let mut writer = BufWriter::new(staging);

    Banner::new(license.as_deref(), generated_at)
        .write_to(&mut writer)
        .map_err(output_error)?;

    let report = Assembler::new(tree, &config.source_root, &config.dependency_root)
        .with_marker_base(&config.marker_base)
        .assemble(&config.entry_paths(), &mut writer)
        .map_err(|e| {
            error!(error = %e, "Assembly failed, discarding partial artifact");
            e
        })?;

    writer.flush().map_err(output_error)?;
    let staging = writer
        .into_inner()
        .map_err(|e| output_error(e.into_error()))?;
    make_readable(&staging).map_err(output_error)?;
    staging.persist(output).map_err(|e| output_error(e.error))?;

    info!(
        output = %output.display(),
        files = report.files.len(),
        dependencies = report.dependencies.len(),
        "Single header written"
    );
    Ok(report)
}

/// Temporary files are created owner-only; the artifact is meant to be shared.
#[cfg(unix)]
fn make_readable(file: &tempfile::NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.as_file().set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn make_readable(_file: &tempfile::NamedTempFile) -> std::io::Result<()> {
    Ok(())
}
