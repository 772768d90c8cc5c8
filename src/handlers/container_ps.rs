use axum::extract::{Query, State};

use crate::errors::PsResult;
use crate::models::container_ps::{ListContainer, ListContainerOptions};
use crate::models::response::GenericResponse;
use crate::repositories::container_client::ContainerClient;
use crate::usecases::container_ps::ContainerPsUsecase;

pub async fn list_containers<C>(
    State(usecase): State<ContainerPsUsecase<C>>,
    Query(options): Query<ListContainerOptions>,
) -> PsResult<GenericResponse<ListContainer>>
where
    C: ContainerClient + 'static,
{
    let containers = usecase.list(&options).await?;
    Ok(GenericResponse::results(containers))
}
