//! # contract: shared interface types for the amalgamation pipeline
//!
//! This module holds the seam between the algorithm and the outside world:
//!
//! - [`SourceTree`]: the only way the classifier and assembler touch the
//!   filesystem. The real implementation is [`crate::source_tree::FsSourceTree`];
//!   tests use the generated `MockSourceTree` for in-memory include graphs.
//! - [`AssemblyReport`]: what a successful run inlined and forwarded.
//! - [`AssembleError`] / [`GenerateError`]: the failure taxonomy.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall` so consumers (including the CLI
//!   crate's tests) can build deterministic trees without touching disk.

use std::io;
use std::path::{Path, PathBuf};

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use thiserror::Error;

/// Read access to the project sources.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait SourceTree {
    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Registries of a finished run, both in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Every inlined file: entry points and transitive internal includes.
    pub files: Vec<PathBuf>,
    /// Keys (`dependency_root/<name>`) of every forwarded external include.
    pub dependencies: Vec<PathBuf>,
}

#[derive(Debug, Error)]
pub enum AssembleError {
    /// An entry point or resolved internal include could not be opened.
    #[error("cannot open source file {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write assembled output: {0}")]
    Write(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot read license file {}: {source}", path.display())]
    License {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write artifact {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Assemble(#[from] AssembleError),
}
