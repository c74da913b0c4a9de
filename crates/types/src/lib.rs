//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are plain data with no I/O, usable from the core engine, the
//! terminal view and the input layer alike.
//!
//! # Coordinate System
//!
//! World space is measured in block units. `x` and `y` span the horizontal
//! plane, `z` points up. The block occupying the unit cube whose most negative
//! corner is `(x, y, z)` is stored at grid index `[z][y][x]`.
//!
//! # World Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `X_BLOCKS` | 20 | Columns |
//! | `Y_BLOCKS` | 20 | Rows |
//! | `Z_BLOCKS` | 10 | Depth (vertical layers) |
//!
//! # Tolerances
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BLOCK_BORDER_SIZE` | 0.05 | Distance to a cell edge that counts as "on the border" |
//! | `RAY_STEP_EPS` | 0.01 | Axis dead zone and overshoot when crossing a cell boundary |
//! | `MAX_RAY_STEP` | 2.0 | Upper bound on a single traversal step |
//! | `FOOT_PROBE_EPS` | 0.01 | Offset of the ground probes around foot level |
//!
//! # Examples
//!
//! ```
//! use tui_voxel_types::{BlockKind, LookAction, Pixel, Vec3, X_BLOCKS, Z_BLOCKS};
//!
//! let kind = BlockKind::from_glyph('o').unwrap();
//! assert_eq!(kind, BlockKind::Grass);
//! assert_eq!(Pixel::Block(kind).glyph(), 'o');
//! assert_eq!(Pixel::Border.glyph(), '-');
//!
//! let action = LookAction::from_str("tiltUp").unwrap();
//! assert_eq!(action, LookAction::TiltUp);
//!
//! let v = Vec3::new(1.0, 2.0, 2.0);
//! assert_eq!(v.length(), 3.0);
//!
//! assert_eq!(X_BLOCKS, 20);
//! assert_eq!(Z_BLOCKS, 10);
//! ```

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use arrayvec::ArrayVec;

/// World width in blocks (x axis, columns)
pub const X_BLOCKS: usize = 20;

/// World length in blocks (y axis, rows)
pub const Y_BLOCKS: usize = 20;

/// World height in blocks (z axis, depth)
pub const Z_BLOCKS: usize = 10;

/// Default picture width in pixels (terminal columns)
pub const PICTURE_WIDTH: u16 = 900;

/// Default picture height in pixels (terminal rows)
pub const PICTURE_HEIGHT: u16 = 180;

/// Distance from the camera down to the feet.
pub const EYE_HEIGHT: f64 = 1.5;

/// Vertical field of view in radians (full extent, top to bottom).
pub const VIEW_HEIGHT: f64 = 0.7;

/// Horizontal field of view in radians (full extent, left to right).
pub const VIEW_WIDTH: f64 = 1.0;

/// Border highlight threshold in block units.
pub const BLOCK_BORDER_SIZE: f64 = 0.05;

/// Direction dead zone and boundary overshoot for ray traversal.
pub const RAY_STEP_EPS: f64 = 0.01;

/// Longest single step a ray may take.
pub const MAX_RAY_STEP: f64 = 2.0;

/// Offset of the step-up and gravity probes around foot level.
pub const FOOT_PROBE_EPS: f64 = 0.01;

/// Pitch/yaw change per look input, in radians.
pub const TILT_STEP: f64 = 0.1;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Spawn position of the camera (eye), standing on the layer `z = 4`.
pub const SPAWN_POSITION: Vec3 = Vec3::new(5.0, 5.0, 4.0 + EYE_HEIGHT);

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Camera orientation in radians.
///
/// - **pitch**: elevation above the horizontal plane
/// - **yaw**: azimuth within the horizontal plane, measured from +x towards +y
///
/// Neither angle wraps; callers may clamp if they want to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
}

impl Orientation {
    pub const LEVEL: Orientation = Orientation::new(0.0, 0.0);

    pub const fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }
}

/// Kinds of solid blocks a world cell can hold.
///
/// Each kind is drawn with a single glyph:
/// - **Stone**: `@`
/// - **Grass**: `o` (highlighted by the terminal view)
/// - **Dirt**: `#`
/// - **Wood**: `%`
/// - **Leaves**: `*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Stone,
    Grass,
    Dirt,
    Wood,
    Leaves,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Stone,
        BlockKind::Grass,
        BlockKind::Dirt,
        BlockKind::Wood,
        BlockKind::Leaves,
    ];

    /// Parse block kind from its display glyph
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_voxel_types::BlockKind;
    ///
    /// assert_eq!(BlockKind::from_glyph('@'), Some(BlockKind::Stone));
    /// assert_eq!(BlockKind::from_glyph('%'), Some(BlockKind::Wood));
    /// assert_eq!(BlockKind::from_glyph(' '), None);
    /// assert_eq!(BlockKind::from_glyph('-'), None);
    /// ```
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '@' => Some(BlockKind::Stone),
            'o' => Some(BlockKind::Grass),
            '#' => Some(BlockKind::Dirt),
            '%' => Some(BlockKind::Wood),
            '*' => Some(BlockKind::Leaves),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            BlockKind::Stone => '@',
            BlockKind::Grass => 'o',
            BlockKind::Dirt => '#',
            BlockKind::Wood => '%',
            BlockKind::Leaves => '*',
        }
    }

    /// Parse block kind from its name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stone" => Some(BlockKind::Stone),
            "grass" => Some(BlockKind::Grass),
            "dirt" => Some(BlockKind::Dirt),
            "wood" => Some(BlockKind::Wood),
            "leaves" => Some(BlockKind::Leaves),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Stone => "stone",
            BlockKind::Grass => "grass",
            BlockKind::Dirt => "dirt",
            BlockKind::Wood => "wood",
            BlockKind::Leaves => "leaves",
        }
    }
}

/// A cell in the world grid
///
/// - `None`: Empty cell
/// - `Some(BlockKind)`: Solid block of the given kind
pub type Cell = Option<BlockKind>;

/// What a single screen pixel resolved to after raycasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    /// The ray left the world without hitting anything.
    #[default]
    Empty,
    /// The ray hit a block close to two of its edges.
    Border,
    /// The ray hit the face of a block.
    Block(BlockKind),
}

impl Pixel {
    pub fn glyph(&self) -> char {
        match self {
            Pixel::Empty => ' ',
            Pixel::Border => '-',
            Pixel::Block(kind) => kind.glyph(),
        }
    }

    /// Inverse of [`Pixel::glyph`]; unknown glyphs yield `None`.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Pixel::Empty),
            '-' => Some(Pixel::Border),
            _ => BlockKind::from_glyph(ch).map(Pixel::Block),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Pixel::Empty)
    }
}

/// Look actions the input layer can report for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookAction {
    /// Raise pitch by one step
    TiltUp,
    /// Lower pitch by one step
    TiltDown,
    /// Turn towards negative yaw
    YawLeft,
    /// Turn towards positive yaw
    YawRight,
}

impl LookAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_voxel_types::LookAction;
    ///
    /// assert_eq!(LookAction::from_str("tiltDown"), Some(LookAction::TiltDown));
    /// assert_eq!(LookAction::from_str("YAWLEFT"), Some(LookAction::YawLeft));
    /// assert_eq!(LookAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tiltup" => Some(LookAction::TiltUp),
            "tiltdown" => Some(LookAction::TiltDown),
            "yawleft" => Some(LookAction::YawLeft),
            "yawright" => Some(LookAction::YawRight),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookAction::TiltUp => "tiltUp",
            LookAction::TiltDown => "tiltDown",
            LookAction::YawLeft => "yawLeft",
            LookAction::YawRight => "yawRight",
        }
    }
}

/// The set of look actions active during one tick.
///
/// Each action is recorded at most once per tick, no matter how many key
/// events produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    actions: ArrayVec<LookAction, 4>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from any sequence of actions (duplicates collapse).
    pub fn from_actions<I: IntoIterator<Item = LookAction>>(actions: I) -> Self {
        let mut snap = Self::new();
        for action in actions {
            snap.press(action);
        }
        snap
    }

    pub fn press(&mut self, action: LookAction) {
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }

    pub fn release(&mut self, action: LookAction) {
        self.actions.retain(|a| *a != action);
    }

    /// Add every action of `other` that is not already present.
    pub fn merge(&mut self, other: &InputSnapshot) {
        for action in other.actions() {
            self.press(*action);
        }
    }

    pub fn is_pressed(&self, action: LookAction) -> bool {
        self.actions.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[LookAction] {
        &self.actions
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_defaults() {
        assert_eq!((X_BLOCKS, Y_BLOCKS, Z_BLOCKS), (20, 20, 10));
        assert_eq!((PICTURE_WIDTH, PICTURE_HEIGHT), (900, 180));
        assert_eq!(EYE_HEIGHT, 1.5);
        assert_eq!(VIEW_HEIGHT, 0.7);
        assert_eq!(VIEW_WIDTH, 1.0);
        assert_eq!(BLOCK_BORDER_SIZE, 0.05);
        assert_eq!(RAY_STEP_EPS, 0.01);
        assert_eq!(MAX_RAY_STEP, 2.0);
        assert_eq!(TILT_STEP, 0.1);
        assert_eq!(SPAWN_POSITION, Vec3::new(5.0, 5.0, 5.5));
    }

    #[test]
    fn glyphs_roundtrip_for_every_kind() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_glyph(kind.glyph()), Some(kind));
            assert_eq!(BlockKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(Pixel::from_glyph(kind.glyph()), Some(Pixel::Block(kind)));
        }
        assert_eq!(Pixel::from_glyph(' '), Some(Pixel::Empty));
        assert_eq!(Pixel::from_glyph('-'), Some(Pixel::Border));
        assert_eq!(Pixel::from_glyph('?'), None);
    }

    #[test]
    fn vector_operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 4.0);
        assert_eq!(a + b, Vec3::new(1.5, 1.0, 7.0));
        assert_eq!(a - b, Vec3::new(0.5, 3.0, -1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 0.5 - 2.0 + 12.0);
    }

    #[test]
    fn input_snapshot_collapses_duplicates() {
        let snap = InputSnapshot::from_actions([
            LookAction::TiltUp,
            LookAction::YawLeft,
            LookAction::TiltUp,
            LookAction::TiltUp,
        ]);
        assert_eq!(snap.actions(), &[LookAction::TiltUp, LookAction::YawLeft]);
        assert!(snap.is_pressed(LookAction::YawLeft));
        assert!(!snap.is_pressed(LookAction::YawRight));
    }

    #[test]
    fn input_snapshot_holds_all_four_actions() {
        let mut snap = InputSnapshot::new();
        for action in [
            LookAction::TiltUp,
            LookAction::TiltDown,
            LookAction::YawLeft,
            LookAction::YawRight,
            LookAction::YawRight,
        ] {
            snap.press(action);
        }
        assert_eq!(snap.actions().len(), 4);

        snap.clear();
        assert!(snap.is_empty());
    }
}
