//! dupname scanner - find files sharing a name across two directory trees
//!
//! This crate walks two trees read-only, indexes every file by a normalized
//! name and reports each cross-tree pair of files sharing that name.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod index;
pub mod matcher;
pub mod names;
pub mod options;
pub mod output;
pub mod types;
pub mod walk;

pub use error::{MatchError, MatchResult, TreeSide};
pub use index::FileIndex;
pub use matcher::{find_matches, resolve_root, DirectoryMatcher};
pub use options::MatchOptions;
pub use types::{MatchRecord, MatchReport};
pub use walk::{TreeWalk, WalkEntry};
