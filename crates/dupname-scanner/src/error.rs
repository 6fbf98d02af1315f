//! Error types for the dupname scanner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Which of the two compared trees an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeSide {
    /// The first directory argument
    First,
    /// The second directory argument
    Second,
}

impl fmt::Display for TreeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeSide::First => f.write_str("目录1"),
            TreeSide::Second => f.write_str("目录2"),
        }
    }
}

/// Errors that can occur while resolving or walking a tree
#[derive(Error, Debug)]
pub enum MatchError {
    /// The current working directory could not be read
    #[error("获取{side}绝对路径失败: {source}")]
    CurrentDir {
        side: TreeSide,
        #[source]
        source: std::io::Error,
    },

    /// The resolved path does not exist or cannot be inspected
    #[error("获取{side}绝对路径失败: {}: {source}", .path.display())]
    Resolve {
        side: TreeSide,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolved path exists but is not a directory
    #[error("获取{side}绝对路径失败: {} is not a directory", .path.display())]
    NotADirectory { side: TreeSide, path: PathBuf },

    /// An entry could not be read during traversal
    #[error("遍历{side}出错: {source}")]
    Walk {
        side: TreeSide,
        #[source]
        source: walkdir::Error,
    },

    /// The root of a flat walk could not be listed
    #[error("遍历{side}出错: {}: {source}", .path.display())]
    ReadDir {
        side: TreeSide,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a report
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
