use std::io;
use std::path::Path;

use crate::contract::SourceTree;

/// [`SourceTree`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceTree;

impl SourceTree for FsSourceTree {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
