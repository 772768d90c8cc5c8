pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod telemetry;
pub mod usecases;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::PsResult;
use crate::handlers::container_ps::list_containers;
use crate::models::sort_key::SortKey;
use crate::repositories::container_client::ContainerClient;
use crate::repositories::docker_client::DockerClient;
use crate::telemetry::initialize_telemetry;
use crate::usecases::container_ps::ContainerPsUsecase;

const CONFIG_PATH_ENV: &str = "CONTAINER_PS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

pub fn router<C>(usecase: ContainerPsUsecase<C>) -> Router
where
    C: ContainerClient + 'static,
{
    Router::new()
        .route("/containers", get(list_containers::<C>))
        .with_state(usecase)
}

pub fn load_config(path: &str) -> PsResult<Config> {
    Ok(Config::from_file(path)?)
}

pub async fn start() -> PsResult<()> {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = load_config(&config_path)?;

    let telemetry = initialize_telemetry(&config.telemetry)?;
    tracing::info!("Loaded config from '{}'", config_path);

    let docker_client = Arc::new(DockerClient::new(&config.listing.proc_root)?);
    // Validated when the config was loaded.
    let default_sort = config
        .listing
        .default_sort
        .as_deref()
        .map(str::parse::<SortKey>)
        .transpose()?;
    let usecase = ContainerPsUsecase::new(docker_client, default_sort);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Binding {}", address))?;
    tracing::info!("Listening on {}", address);

    let served = axum::serve(listener, router(usecase)).await;
    telemetry.shutdown();

    served.context("Serving container listing")?;
    Ok(())
}
