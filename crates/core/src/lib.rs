//! Core engine module - pure, deterministic, and testable
//!
//! This module contains the voxel world, the camera model and the raycasting
//! renderer. It has **zero dependencies** on terminals, keyboards or other I/O,
//! making it:
//!
//! - **Deterministic**: Identical pose and world produce identical pictures
//! - **Testable**: Every stage is a plain function over in-memory data
//! - **Portable**: The picture can be shown by any display collaborator
//! - **Fast**: Picture and direction field are reused across frames
//!
//! # Module Structure
//!
//! - [`geometry`]: Vector helpers and pitch/yaw to direction conversion
//! - [`world`]: Fixed-size block grid with bounds checks
//! - [`camera`]: Camera pose, field of view and per-pixel direction field
//! - [`raycast`]: Cell-by-cell ray traversal with block-edge detection
//! - [`frame`]: Picture buffer and the per-pixel frame renderer
//! - [`pose`]: Step-up/gravity snapping and look input
//! - [`scene`]: The startup world
//!
//! # Frame Order
//!
//! Each tick runs in a fixed order:
//!
//! 1. [`PoseIntegrator::integrate`] snaps the camera to the ground and applies look input
//! 2. [`FrameRenderer::render_into`] recomputes the direction field and traces every pixel
//! 3. The finished [`Picture`] is handed to the display
//!
//! # Example
//!
//! ```
//! use tui_voxel_core::{default_world, Camera, FrameRenderer, PoseIntegrator};
//! use tui_voxel_types::{InputSnapshot, LookAction, Pixel};
//!
//! let world = default_world();
//! let mut camera = Camera::spawn();
//!
//! let input = InputSnapshot::from_actions([LookAction::TiltDown]);
//! PoseIntegrator::default().integrate(&mut camera, &world, &input);
//!
//! let mut renderer = FrameRenderer::new();
//! let picture = renderer.render(&camera, &world, 40, 12);
//! assert!(picture.count(|p| p != Pixel::Empty) > 0);
//! ```

pub mod camera;
pub mod frame;
pub mod geometry;
pub mod pose;
pub mod raycast;
pub mod scene;
pub mod world;

pub use tui_voxel_types as types;

// Re-export commonly used types for convenience
pub use camera::{Camera, DirectionField, FieldOfView, ScreenBasis};
pub use frame::{FrameRenderer, Picture};
pub use geometry::{add, angle_to_direction, normalize, scale, sub, try_normalize};
pub use pose::{PoseIntegrator, PoseReport, VerticalMove};
pub use raycast::{raytrace, RayParams, Raycaster, Trace};
pub use scene::{default_world, flat_world};
pub use world::{Extent, World};
