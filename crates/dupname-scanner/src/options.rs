//! Comparison options

use serde::{Deserialize, Serialize};

/// Immutable configuration for one comparison run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Descend into subdirectories of each root
    pub recursive: bool,
    /// Fold filenames to lower case before comparing
    pub ignore_case: bool,
    /// Drop the last extension before comparing
    pub ignore_extension: bool,
}

impl MatchOptions {
    /// Create options with every flag off
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable recursive traversal
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Enable case-insensitive comparison
    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Enable extension-insensitive comparison
    #[must_use]
    pub fn with_ignore_extension(mut self, ignore_extension: bool) -> Self {
        self.ignore_extension = ignore_extension;
        self
    }
}
