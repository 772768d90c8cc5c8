pub mod codes;
pub mod container_client;
pub mod sort;

use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::container_client::ContainerClientError;
use crate::errors::sort::SortError;

pub type PsResult<T> = Result<T, PsError>;

pub trait HasErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum PsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error(transparent)]
    ContainerClient(#[from] ContainerClientError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl HasErrorCode for PsError {
    fn error_code(&self) -> &'static str {
        match self {
            PsError::Config(e) => e.error_code(),
            PsError::Sort(e) => e.error_code(),
            PsError::ContainerClient(e) => e.error_code(),
            PsError::Internal(_) => "E000",
        }
    }
}
