use crate::model::error::comparison::ComparisonError;
use std::path::PathBuf;

/// The two folder paths as typed or picked in the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSelection {
    pub first: String,
    pub second: String,
}

impl FolderSelection {
    /// Both paths are passed on exactly as entered; blank input is rejected.
    pub fn validate(&self) -> Result<(PathBuf, PathBuf), ComparisonError> {
        if self.first.trim().is_empty() || self.second.trim().is_empty() {
            return Err(ComparisonError::MissingSelection);
        }
        Ok((PathBuf::from(&self.first), PathBuf::from(&self.second)))
    }
}
