use async_trait::async_trait;
use mockall::automock;

use crate::errors::container_client::ContainerClientError;
use crate::models::container_ps::{ListContainer, ListContainerOptions};

/// Produces listing snapshots from a container runtime.
#[automock]
#[async_trait]
pub trait ContainerClient: Send + Sync {
    async fn list_containers(
        &self,
        options: &ListContainerOptions,
    ) -> Result<Vec<ListContainer>, ContainerClientError>;
}
