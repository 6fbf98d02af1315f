//! Shared result types for the dupname scanner

use crate::options::MatchOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One pair of files, one from each tree, sharing a normalized name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Normalized filename both paths produced
    pub filename: String,
    /// Path in the first tree
    pub path1: PathBuf,
    /// Path in the second tree
    pub path2: PathBuf,
}

/// Complete result of comparing two trees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Resolved root of the first tree
    pub root1: PathBuf,
    /// Resolved root of the second tree
    pub root2: PathBuf,
    /// Options the comparison ran with
    pub options: MatchOptions,
    /// Every match, in output order
    pub matches: Vec<MatchRecord>,
}

impl MatchReport {
    /// Check if no filename was shared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of match records
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }
}
