use service_core::error::AppError;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Menu item not found";

/// Closed set of failures a [`MenuStore`](super::MenuStore) can report.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Menu item not found")]
    NotFound,

    #[error("Invalid menu item id: {0}")]
    InvalidIdentifier(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Internal store error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        StoreError::Validation(errors.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound(anyhow::anyhow!(NOT_FOUND_MESSAGE)),
            StoreError::InvalidIdentifier(_) | StoreError::Validation(_) => {
                AppError::BadRequest(anyhow::anyhow!(err.to_string()))
            }
            StoreError::Database(_) | StoreError::Internal(_) => {
                tracing::error!(error = %err, "Menu item store operation failed");
                AppError::BadRequest(anyhow::anyhow!("Failed to access menu items"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_fixed_message() {
        let err = AppError::from(StoreError::NotFound);
        assert!(matches!(err, AppError::NotFound(ref e) if e.to_string() == "Menu item not found"));
    }

    #[test]
    fn test_invalid_identifier_maps_to_bad_request() {
        let err = AppError::from(StoreError::InvalidIdentifier("abc".to_string()));
        assert!(
            matches!(err, AppError::BadRequest(ref e) if e.to_string() == "Invalid menu item id: abc")
        );
    }

    #[test]
    fn test_internal_failure_is_sanitized() {
        let err = AppError::from(StoreError::Internal("mutex poisoned".to_string()));
        assert!(
            matches!(err, AppError::BadRequest(ref e) if e.to_string() == "Failed to access menu items")
        );
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::from(StoreError::Validation("name: must not be empty".to_string()));
        assert!(
            matches!(err, AppError::BadRequest(ref e) if e.to_string() == "Validation failed: name: must not be empty")
        );
    }
}
