//! Read-only inspection of the target directory.

use camino::Utf8Path;

/// Answers whether a target directory already holds files.
pub trait TargetProbe {
    fn is_occupied(&self, path: &Utf8Path) -> bool;
}

/// Probe backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl TargetProbe for FsProbe {
    fn is_occupied(&self, path: &Utf8Path) -> bool {
        is_dir_occupied(path)
    }
}

/// A path is occupied when it exists and is not an empty directory.
/// A lone `.git` entry counts as empty.
pub fn is_dir_occupied(path: &Utf8Path) -> bool {
    if !path.exists() {
        return false;
    }
    let entries = match path.read_dir_utf8() {
        Ok(entries) => entries,
        // exists but is not a readable directory
        Err(_) => return true,
    };

    entries
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name() != ".git")
}
