pub mod container_ps;
pub mod sort;
