//! # assemble: depth-first include inlining
//!
//! The [`Assembler`] walks the entry points in order and writes one merged
//! stream. Each internal include is inlined at the point of its first
//! occurrence, wrapped in `// beginning of` / `// end of` markers.
//!
//! ## Deduplication
//! - The processed-file registry is filled *before* a file's lines are
//!   emitted. A second visit of the same path, whether through a diamond or a
//!   cycle, is a silent no-op. Cycles are avoided, never reported.
//! - External include directives are written once per run, at their first
//!   occurrence. Later occurrences are dropped.
//!
//! ## Blank lines
//! Each file tracks its own "previous line was blank" flag, starting as blank.
//! A nested file never affects its includer's flag.
//!
//! ## Traversal
//! Files are processed on an explicit stack of frames instead of the call
//! stack, so include depth is not limited by thread stack size. Order is the
//! same as a recursive descent.
//!
//! ## Line endings
//! Sources may use `\n`, `\r\n` or bare `\r`; the output always uses `\n`.

use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::classify::{classify, LineKind};
use crate::contract::{AssembleError, AssemblyReport, SourceTree};
use crate::registry::Registry;

/// One file being streamed.
struct Frame {
    path: PathBuf,
    content: String,
    cursor: usize,
    previous_blank: bool,
}

impl Frame {
    fn new(path: PathBuf, content: String) -> Self {
        Self {
            path,
            content,
            cursor: 0,
            previous_blank: true,
        }
    }

    /// Byte range of the next line body. `\r\n`, `\r` and `\n` all end a
    /// line and are not part of the range.
    fn next_line(&mut self) -> Option<Range<usize>> {
        if self.cursor >= self.content.len() {
            return None;
        }
        let start = self.cursor;
        let rest = &self.content[start..];
        let Some(offset) = rest.find(|c: char| c == '\r' || c == '\n') else {
            self.cursor = self.content.len();
            return Some(start..self.cursor);
        };
        let terminator = if rest[offset..].starts_with("\r\n") { 2 } else { 1 };
        self.cursor = start + offset + terminator;
        Some(start..start + offset)
    }
}

/// Inlines internal includes of a set of entry points into a single stream.
///
/// An assembler is consumed by [`Assembler::assemble`], so every run starts
/// with empty registries.
pub struct Assembler<T> {
    tree: T,
    source_root: PathBuf,
    dependency_root: PathBuf,
    marker_base: Option<PathBuf>,
    files: Registry<PathBuf>,
    dependencies: Registry<PathBuf>,
}

impl<T: SourceTree> Assembler<T> {
    pub fn new(tree: T, source_root: impl Into<PathBuf>, dependency_root: impl Into<PathBuf>) -> Self {
        Self {
            tree,
            source_root: source_root.into(),
            dependency_root: dependency_root.into(),
            marker_base: None,
            files: Registry::new(),
            dependencies: Registry::new(),
        }
    }

    /// Marker lines name files relative to `base` when they live under it.
    pub fn with_marker_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.marker_base = Some(base.into());
        self
    }

    /// Processes every entry point in order, writing into `out`.
    ///
    /// Stops at the first file that cannot be read.
    pub fn assemble<W: Write + ?Sized>(
        mut self,
        entry_points: &[PathBuf],
        out: &mut W,
    ) -> Result<AssemblyReport, AssembleError> {
        info!(
            entry_points = entry_points.len(),
            source_root = %self.source_root.display(),
            "Starting assembly"
        );

        for entry in entry_points {
            self.process(entry, out)?;
        }

        info!(
            files = self.files.len(),
            dependencies = self.dependencies.len(),
            "Assembly complete"
        );
        Ok(AssemblyReport {
            files: self.files.into_vec(),
            dependencies: self.dependencies.into_vec(),
        })
    }

    fn process<W: Write + ?Sized>(&mut self, entry: &Path, out: &mut W) -> Result<(), AssembleError> {
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.enter(entry, out)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(range) = frame.next_line() else {
                if let Some(done) = stack.pop() {
                    self.leave(&done.path, out)?;
                }
                continue;
            };
            let line = &frame.content[range];

            match classify(line, &self.source_root, &self.tree) {
                LineKind::TopLevelComment | LineKind::IncludeGuard => continue,
                LineKind::InternalInclude(path) => {
                    if let Some(nested) = self.enter(&path, out)? {
                        stack.push(nested);
                    }
                    continue;
                }
                LineKind::Dependency(name) => {
                    let key = self.dependency_root.join(&name);
                    if !self.dependencies.insert(key) {
                        debug!(dependency = %name, file = %frame.path.display(), "Dropping repeated dependency include");
                        continue;
                    }
                    debug!(dependency = %name, "Forwarding dependency include");
                }
                LineKind::Content => {}
            }

            let blank = line.trim().is_empty();
            if blank && frame.previous_blank {
                continue;
            }
            frame.previous_blank = blank;
            write_line(out, line)?;
        }

        Ok(())
    }

    /// Registers `path` and writes its begin marker, or returns `None` if the
    /// file was already inlined earlier in this run.
    fn enter<W: Write + ?Sized>(&mut self, path: &Path, out: &mut W) -> Result<Option<Frame>, AssembleError> {
        if self.files.contains(path) {
            debug!(path = %path.display(), "Already inlined, skipping");
            return Ok(None);
        }

        let content = self
            .tree
            .read_to_string(path)
            .map_err(|source| AssembleError::MissingFile {
                path: path.to_path_buf(),
                source,
            })?;

        self.files.insert(path.to_path_buf());
        info!(path = %path.display(), "processing");
        write!(out, "// beginning of {}\n\n", self.label(path)).map_err(AssembleError::Write)?;

        Ok(Some(Frame::new(path.to_path_buf(), content)))
    }

    fn leave<W: Write + ?Sized>(&self, path: &Path, out: &mut W) -> Result<(), AssembleError> {
        write!(out, "// end of {}\n\n", self.label(path)).map_err(AssembleError::Write)
    }

    fn label(&self, path: &Path) -> String {
        let relative = self
            .marker_base
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path);
        relative.display().to_string()
    }
}

fn write_line<W: Write + ?Sized>(out: &mut W, line: &str) -> Result<(), AssembleError> {
    out.write_all(line.as_bytes()).map_err(AssembleError::Write)?;
    out.write_all(b"\n").map_err(AssembleError::Write)
}
