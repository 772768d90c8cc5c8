pub mod container_ps;
pub mod error;
