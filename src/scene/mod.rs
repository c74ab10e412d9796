pub mod container;
pub mod node;
