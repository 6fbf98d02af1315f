//! Filename classification and normalization
//!
//! Hidden-artifact checks always look at the name exactly as it appears on
//! disk. Normalization produces the key used to compare names across trees;
//! keys keep the raw bytes of names that are not valid UTF-8.

use crate::options::MatchOptions;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Exact names written by the OS that are never compared
const HIDDEN_EXACT: &[&str] = &[".DS_Store"];

/// Name prefixes written by the OS that are never compared
const HIDDEN_PREFIXES: &[&str] = &[
    // macOS resource forks
    "._",
    // Windows folder metadata
    "desktop.ini",
    "thumbs.db",
    // Windows recycle bin and system files
    "$",
];

/// Check whether a filename is an OS-generated metadata artifact
///
/// The match is case-sensitive.
#[must_use]
pub fn is_hidden_artifact(name: &str) -> bool {
    HIDDEN_EXACT.contains(&name) || HIDDEN_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Strip the last extension from a filename
///
/// The extension runs from the last `.` to the end, so a name whose only dot
/// is the leading one (`.bashrc`) strips to the empty name.
#[must_use]
pub fn strip_extension(name: &OsStr) -> &OsStr {
    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(_)) => stem,
        _ if name.to_string_lossy().starts_with('.') => OsStr::new(""),
        _ => name,
    }
}

/// Produce the comparison key for a filename
///
/// Case folding is full Unicode lowercasing for UTF-8 names and ASCII-only
/// for anything else.
#[must_use]
pub fn normalize(name: &OsStr, options: &MatchOptions) -> OsString {
    let mut key = if options.ignore_case {
        match name.to_str() {
            Some(s) => OsString::from(s.to_lowercase()),
            None => name.to_ascii_lowercase(),
        }
    } else {
        name.to_os_string()
    };
    if options.ignore_extension {
        key = strip_extension(&key).to_os_string();
    }
    key
}
