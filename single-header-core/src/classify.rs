//! Line classifier: pure, line-oriented pattern matching.
//!
//! Nothing here tokenizes C++. Directives are recognised only when they start
//! at column 0, and a line that merely resembles a directive is plain content.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::contract::SourceTree;

/// Column-0 single-line comment marker.
pub const COMMENT_MARKER: &str = "//";

/// The guard directive stripped from every inlined file and written once into
/// the banner.
pub const INCLUDE_GUARD: &str = "#pragma once";

static INCLUDE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^#include ["<](.*?)[>"]"#).expect("include directive pattern is valid")
});

static INCLUDE_GUARD_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}", regex::escape(INCLUDE_GUARD)))
        .expect("include guard pattern is valid")
});

/// What the assembler should do with one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `//` at column 0, e.g. a license preamble. Dropped.
    TopLevelComment,
    /// `#pragma once`. Dropped.
    IncludeGuard,
    /// Include of a file that exists under the project root. Inlined.
    InternalInclude(PathBuf),
    /// Any other include directive, carrying the raw name. Forwarded once.
    Dependency(String),
    Content,
}

pub fn is_top_level_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

pub fn is_include_guard(line: &str) -> bool {
    INCLUDE_GUARD_DIRECTIVE.is_match(line)
}

/// Raw name captured from an include directive, whether or not it exists.
pub fn extract_dependency_name(line: &str) -> Option<&str> {
    INCLUDE_DIRECTIVE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
}

/// Resolves an include directive to `project_root/<name>` if that file exists.
pub fn resolve_internal_include<T>(line: &str, project_root: &Path, tree: &T) -> Option<PathBuf>
where
    T: SourceTree + ?Sized,
{
    let name = extract_dependency_name(line)?;
    let candidate = project_root.join(name);
    tree.is_file(&candidate).then_some(candidate)
}

/// Classifies a line. Internal resolution is tried before dependency
/// extraction, so a name present under `project_root` is always inlined.
pub fn classify<T>(line: &str, project_root: &Path, tree: &T) -> LineKind
where
    T: SourceTree + ?Sized,
{
    if is_top_level_comment(line) {
        return LineKind::TopLevelComment;
    }
    if is_include_guard(line) {
        return LineKind::IncludeGuard;
    }
    if let Some(path) = resolve_internal_include(line, project_root, tree) {
        return LineKind::InternalInclude(path);
    }
    match extract_dependency_name(line) {
        Some(name) => LineKind::Dependency(name.to_string()),
        None => LineKind::Content,
    }
}
