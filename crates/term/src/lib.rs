//! Terminal display module.
//!
//! The display collaborator for the voxel renderer. The engine hands over a
//! finished [`core::Picture`]; this crate styles it into a simple framebuffer
//! and flushes that to the terminal.
//!
//! Goals:
//! - Keep `core` free of terminal and OS concerns
//! - Highlight one block kind and dim block edges without touching the engine
//! - Only rewrite terminal cells that changed since the last frame

pub mod fb;
pub mod picture_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_voxel_core as core;
pub use tui_voxel_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use picture_view::{Palette, PictureView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
