use std::sync::Arc;

use crate::errors::PsResult;
use crate::models::container_ps::{ListContainer, ListContainerOptions};
use crate::models::sort_key::SortKey;
use crate::repositories::container_client::ContainerClient;
use crate::usecases::sort::sort_by_key;

pub struct ContainerPsUsecase<C>
where
    C: ContainerClient + 'static,
{
    pub container_client: Arc<C>,
    pub default_sort: Option<SortKey>,
}

impl<C> Clone for ContainerPsUsecase<C>
where
    C: ContainerClient + 'static,
{
    fn clone(&self) -> Self {
        Self {
            container_client: Arc::clone(&self.container_client),
            default_sort: self.default_sort,
        }
    }
}

impl<C> ContainerPsUsecase<C>
where
    C: ContainerClient + 'static,
{
    pub fn new(container_client: Arc<C>, default_sort: Option<SortKey>) -> Self {
        Self {
            container_client,
            default_sort,
        }
    }

    /// Lists containers and orders them by the requested key, falling back to
    /// the configured default. Snapshots are returned unsorted when neither
    /// names a key.
    pub async fn list(&self, options: &ListContainerOptions) -> PsResult<Vec<ListContainer>> {
        let sort_key = match options.sort.as_deref() {
            Some(key) => Some(key.parse::<SortKey>()?),
            None => self.default_sort,
        };

        let containers = self.container_client.list_containers(options).await?;

        match sort_key {
            Some(key) => Ok(sort_by_key(key, containers)?),
            None => Ok(containers),
        }
    }
}
