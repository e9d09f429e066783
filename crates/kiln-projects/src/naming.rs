//! Target directory and package name normalization.

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::sync::LazyLock;

static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z][a-z\d\-*._~]*/)?[a-z][a-z\d\-._~]*$")
        .expect("package name regex is valid")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

static INVALID_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\d\-~]+").expect("invalid chars regex is valid"));

/// Trim surrounding whitespace and trailing path separators.
pub fn format_target_dir(input: &str) -> String {
    input
        .trim()
        .trim_end_matches(['/', '\\'])
        .to_string()
}

/// Directory name a target dir would produce, relative to `cwd`.
///
/// `.` names the current directory itself. Returns `None` when no name can
/// be derived (e.g. `..` or an empty path).
pub fn project_name_of(target_dir: &str, cwd: &Utf8Path) -> Option<String> {
    let path: Utf8PathBuf = if target_dir == "." {
        cwd.to_path_buf()
    } else {
        Utf8PathBuf::from(target_dir)
    };
    path.file_name().map(str::to_string)
}

/// Check a package name: optional `@scope/`, then a lowercase letter
/// followed by lowercase letters, digits and `-._~`.
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME_RE.is_match(name)
}

/// Turn an arbitrary name into a valid package name.
///
/// Lowercases, replaces whitespace runs with `-`, strips leading characters
/// that are not letters and replaces runs of unsupported characters with
/// `-`. Falls back to `fallback` when nothing usable remains.
pub fn to_valid_package_name(name: &str, fallback: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let dashed = WHITESPACE_RE.replace_all(&lowered, "-");
    let stripped = dashed.trim_start_matches(|c: char| !c.is_ascii_lowercase());
    let cleaned = INVALID_CHARS_RE.replace_all(stripped, "-");

    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned.into_owned()
    }
}
