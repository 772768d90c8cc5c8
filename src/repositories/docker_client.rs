use async_trait::async_trait;
use bollard::container::{InspectContainerOptions, ListContainersOptions};
use bollard::errors::Error as BollardError;
use bollard::models::{ContainerState, ContainerSummary, Port};
use bollard::Docker;
use chrono::DateTime;
use futures_util::future::try_join_all;
use std::path::{Path, PathBuf};

use crate::errors::container_client::ContainerClientError;
use crate::models::container_ps::{
    ContainerSize, ListContainer, ListContainerOptions, PortMapping,
};
use crate::repositories::container_client::ContainerClient;
use crate::repositories::namespaces::read_namespaces;

#[derive(Debug, Clone)]
pub struct DockerClient {
    docker: Docker,
    proc_root: PathBuf,
}

impl DockerClient {
    pub fn new(proc_root: impl Into<PathBuf>) -> Result<DockerClient, ContainerClientError> {
        tracing::info!("Creating Docker client");
        let docker = Docker::connect_with_local_defaults().map_err(|e| {
            ContainerClientError::ConnectFailed {
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            docker,
            proc_root: proc_root.into(),
        })
    }

    /// `None` when the container disappeared after it was listed.
    async fn inspect_state(
        &self,
        id: &str,
    ) -> Result<Option<ContainerState>, ContainerClientError> {
        match self
            .docker
            .inspect_container(id, Some(InspectContainerOptions { size: false }))
            .await
        {
            Ok(response) => Ok(Some(response.state.unwrap_or_default())),
            Err(BollardError::DockerResponseServerError {
                status_code: 404, ..
            }) => {
                tracing::debug!("Container {} removed while listing", id);
                Ok(None)
            }
            Err(e) => Err(ContainerClientError::InspectContainerFailed {
                id: id.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[async_trait]
impl ContainerClient for DockerClient {
    async fn list_containers(
        &self,
        options: &ListContainerOptions,
    ) -> Result<Vec<ListContainer>, ContainerClientError> {
        tracing::info!(?options, "Listing containers");
        let Some(list_options) = engine_options(options) else {
            return Ok(Vec::new());
        };

        let summaries = self
            .docker
            .list_containers(Some(list_options))
            .await
            .map_err(|e| {
                tracing::error!("Listing containers failed: {}", e);
                ContainerClientError::ListContainersFailed {
                    reason: e.to_string(),
                }
            })?;

        let states = try_join_all(
            summaries
                .iter()
                .map(|summary| self.inspect_state(summary.id.as_deref().unwrap_or_default())),
        )
        .await?;

        let containers = assemble(summaries, states, options, &self.proc_root);

        tracing::debug!(count = containers.len(), "Listed containers");
        Ok(containers)
    }
}

/// `None` when `last=0` asks for nothing. A `last` too large for the engine
/// is sent without a limit.
fn engine_options(options: &ListContainerOptions) -> Option<ListContainersOptions<String>> {
    if options.last == Some(0) {
        return None;
    }

    Some(ListContainersOptions::<String> {
        all: options.all || options.last.is_some(),
        limit: options.last.and_then(|n| isize::try_from(n).ok()),
        size: options.size,
        ..Default::default()
    })
}

/// Pairs each summary with its inspected state. Containers that disappeared
/// before inspection (`None` state) are dropped.
fn assemble(
    summaries: Vec<ContainerSummary>,
    states: Vec<Option<ContainerState>>,
    options: &ListContainerOptions,
    proc_root: &Path,
) -> Vec<ListContainer> {
    summaries
        .into_iter()
        .zip(states)
        .filter_map(|(summary, state)| {
            let state = state?;
            let mut container = to_list_container(summary, &state, options.size);
            if options.namespace && container.pid > 0 {
                container.namespaces = read_namespaces(proc_root, container.pid);
            }
            Some(container)
        })
        .collect()
}

fn to_list_container(
    summary: ContainerSummary,
    state: &ContainerState,
    with_size: bool,
) -> ListContainer {
    let label = summary.state.unwrap_or_default();
    let exited = matches!(label.as_str(), "exited" | "dead");
    let running = state.running.unwrap_or(false);

    let size = with_size.then(|| ContainerSize {
        root_fs_size: summary.size_root_fs.unwrap_or(0),
        rw_size: summary.size_rw.unwrap_or(0),
    });

    ListContainer {
        command: summary
            .command
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect(),
        created: summary.created.unwrap_or(0),
        exited,
        exited_at: if exited {
            parse_timestamp(state.finished_at.as_deref())
        } else {
            0
        },
        exit_code: if exited {
            i32::try_from(state.exit_code.unwrap_or(0)).unwrap_or(i32::MAX)
        } else {
            0
        },
        id: summary.id.unwrap_or_default(),
        image: summary.image.unwrap_or_default(),
        is_infra: false,
        labels: summary.labels.unwrap_or_default(),
        mounts: summary
            .mounts
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.destination)
            .collect(),
        names: summary
            .names
            .unwrap_or_default()
            .into_iter()
            .map(|n| n.trim_start_matches('/').to_string())
            .collect(),
        namespaces: Default::default(),
        pid: if running { state.pid.unwrap_or(0) } else { 0 },
        pod: String::new(),
        pod_name: String::new(),
        ports: summary
            .ports
            .unwrap_or_default()
            .into_iter()
            .map(PortMapping::from)
            .collect(),
        size,
        started_at: parse_timestamp(state.started_at.as_deref()),
        state: label,
    }
}

/// RFC 3339 to unix seconds; the engine's zero time becomes 0.
fn parse_timestamp(value: Option<&str>) -> i64 {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|t| t.timestamp())
        .filter(|t| *t > 0)
        .unwrap_or(0)
}

impl From<Port> for PortMapping {
    fn from(port: Port) -> Self {
        PortMapping {
            host_port: port.public_port.unwrap_or(0),
            container_port: port.private_port,
            protocol: port.typ.map(|t| t.to_string()).unwrap_or_default(),
            host_ip: port.ip.unwrap_or_default(),
        }
    }
}
