//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::LookAction`] and gathers them
//! into one [`crate::types::InputSnapshot`] per tick, so the engine never sees
//! keyboard state directly.

pub mod handler;
pub mod map;

pub use tui_voxel_types as types;

pub use handler::TickInput;
pub use map::{handle_key_event, map_key_code, should_quit};
