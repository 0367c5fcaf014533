use serde::{Deserialize, Serialize};

/// Result of a remove-by-title call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveOutcome {
    /// At least one record's title matched and every match was removed
    Removed,
    /// No record's title matched; the catalog is unchanged
    NotFound,
}

impl std::fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Removed => write!(f, "removed"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

/// Result of a load call that did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    /// The file was read and the in-memory sequence replaced wholesale
    Loaded,
    /// The file does not exist; the in-memory sequence is untouched
    FileMissing,
}

impl std::fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded => write!(f, "loaded"),
            Self::FileMissing => write!(f, "file not found"),
        }
    }
}
