use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainerClientError {
    #[error("Failed to connect to container engine: {reason}")]
    ConnectFailed { reason: String },

    #[error("Failed to list containers: {reason}")]
    ListContainersFailed { reason: String },

    #[error("Failed to inspect container {id}: {reason}")]
    InspectContainerFailed { id: String, reason: String },
}

impl ContainerClientError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            ContainerClientError::ConnectFailed { .. } => ErrorCode::CONTAINER_CONNECT_FAILED,
            ContainerClientError::ListContainersFailed { .. } => ErrorCode::CONTAINER_LIST_FAILED,
            ContainerClientError::InspectContainerFailed { .. } => {
                ErrorCode::CONTAINER_INSPECT_FAILED
            }
        }
    }
}
