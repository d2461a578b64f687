pub mod config;
pub mod grid;
pub mod image;
pub mod partition;
pub mod snapshot;
pub mod solver;
pub mod stencil;
