//! # Catalog Errors

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Song catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    // Lookup errors
    #[error("Song not found")]
    SongNotFound(String),

    #[error("Failed to update song. Id not found")]
    UpdateTargetNotFound(String),

    #[error("Failed to delete song. Id not found")]
    DeleteTargetNotFound(String),

    // Identity errors
    /// A freshly generated id was not present exactly once after insertion.
    #[error("Failed to add song: id {0} is not unique")]
    Invariant(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Whether the error means the referenced song does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::SongNotFound(_)
                | CatalogError::UpdateTargetNotFound(_)
                | CatalogError::DeleteTargetNotFound(_)
        )
    }

    /// The song id the error refers to, if any
    pub fn song_id(&self) -> Option<&str> {
        match self {
            CatalogError::SongNotFound(id)
            | CatalogError::UpdateTargetNotFound(id)
            | CatalogError::DeleteTargetNotFound(id)
            | CatalogError::Invariant(id) => Some(id),
            CatalogError::Internal(_) => None,
        }
    }
}
