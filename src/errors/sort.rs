use thiserror::Error;

use crate::models::sort_key::SortKey;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("invalid option for --sort, options are: {}", SortKey::choices())]
    InvalidSortKey { key: String },

    #[error("cannot sort by names: container {id} has no names")]
    MissingPrimaryName { id: String },
}

impl SortError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            SortError::InvalidSortKey { .. } => ErrorCode::SORT_INVALID_KEY,
            SortError::MissingPrimaryName { .. } => ErrorCode::SORT_MISSING_PRIMARY_NAME,
        }
    }
}
