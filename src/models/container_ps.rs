use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A container as it appears in a listing snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContainer {
    /// Container command
    pub command: Vec<String>,
    /// Container creation time, unix seconds
    pub created: i64,
    /// If container has exited/stopped
    pub exited: bool,
    /// Time container exited, unix seconds
    pub exited_at: i64,
    /// If container has exited, the return code from the command
    pub exit_code: i32,
    /// The unique identifier for the container
    pub id: String,
    /// Container image
    pub image: String,
    /// If this container is a pod infra container
    pub is_infra: bool,
    /// Labels for container
    pub labels: HashMap<String, String>,
    /// User volume mount destinations
    pub mounts: Vec<String>,
    /// The names assigned to the container, primary first
    pub names: Vec<String>,
    /// Only populated when namespace detail was requested
    pub namespaces: ListContainerNamespaces,
    /// The process id of the container, 0 unless running
    pub pid: i64,
    /// Pod id when the container belongs to a pod, empty otherwise
    pub pod: String,
    /// Pod name when the container belongs to a pod, empty otherwise
    pub pod_name: String,
    /// Port mappings
    pub ports: Vec<PortMapping>,
    /// Only present when size detail was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ContainerSize>,
    /// Time when container started, unix seconds, 0 if never started
    pub started_at: i64,
    /// State of container
    pub state: String,
}

impl ListContainer {
    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// Identifiers of the container's Linux namespaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContainerNamespaces {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pidns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    #[serde(rename = "hostPort")]
    pub host_port: u16,
    #[serde(rename = "containerPort")]
    pub container_port: u16,
    pub protocol: String,
    #[serde(rename = "hostIP")]
    pub host_ip: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSize {
    #[serde(rename = "rootFsSize")]
    pub root_fs_size: i64,
    #[serde(rename = "rwSize")]
    pub rw_size: i64,
}

/// What the caller asked the listing to include.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListContainerOptions {
    #[serde(default)]
    pub all: bool,
    #[serde(default)]
    pub size: bool,
    #[serde(default)]
    pub namespace: bool,
    /// Only the N most recently created containers
    pub last: Option<usize>,
    pub sort: Option<String>,
}
