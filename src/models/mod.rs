pub mod container_ps;
pub mod response;
pub mod sort_key;
