//! TUI Voxel (workspace facade crate).
//!
//! Exposes the engine and its collaborators as `tui_voxel::{core,input,term,types}`
//! while the implementation lives in dedicated crates under `crates/`, plus
//! the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_voxel_core as core;
pub use tui_voxel_input as input;
pub use tui_voxel_term as term;
pub use tui_voxel_types as types;

pub use config::AppConfig;
