pub mod container_client;
pub mod docker_client;
pub mod namespaces;
