//! Camera pose and per-pixel view directions.
//!
//! The screen is a rectangle spanned by four boundary directions (up, down,
//! left, right of the view center). Pixel directions are bilinear blends over
//! that rectangle, normalized afterwards:
//!
//! ```text
//!   (0,0) ──────────── (0,C-1)        dir(r, c) = center + h + v
//!     │        ↑ v         │                     - 2·c/(C-1)·h
//!     │ ← h  center        │                     - 2·r/(R-1)·v
//!     │                    │
//!   (R-1,0) ────────── (R-1,C-1)
//! ```

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::geometry::{angle_to_direction, normalize};
use crate::types::{Orientation, Vec3, EYE_HEIGHT, SPAWN_POSITION, VIEW_HEIGHT, VIEW_WIDTH};

/// Camera pose: eye position plus view orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub view: Orientation,
}

impl Camera {
    pub fn new(position: Vec3, view: Orientation) -> Self {
        Self { position, view }
    }

    /// Camera at the default spawn point, looking level along +x.
    pub fn spawn() -> Self {
        Self::new(SPAWN_POSITION, Orientation::LEVEL)
    }

    /// Height of the feet below the eye.
    pub fn foot_height(&self) -> f64 {
        self.position.z - EYE_HEIGHT
    }

    /// Direction of the view center.
    pub fn forward(&self) -> Vec3 {
        angle_to_direction(self.view)
    }

    /// Stable hash of the exact pose bits.
    ///
    /// Two cameras with equal fingerprints render identical pictures of the
    /// same world.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for v in [
            self.position.x,
            self.position.y,
            self.position.z,
            self.view.pitch,
            self.view.yaw,
        ] {
            v.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::spawn()
    }
}

/// Angular half-extents of the view, measured from the view center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    pub up: f64,
    pub down: f64,
    pub left: f64,
    pub right: f64,
}

impl FieldOfView {
    /// Symmetric field of view from full vertical and horizontal extents.
    pub fn symmetric(height: f64, width: f64) -> Self {
        Self {
            up: height / 2.0,
            down: height / 2.0,
            left: width / 2.0,
            right: width / 2.0,
        }
    }
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self::symmetric(VIEW_HEIGHT, VIEW_WIDTH)
    }
}

/// Screen center and half-extent basis vectors for one orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBasis {
    /// Midpoint of the left and right boundary directions.
    pub center: Vec3,
    /// From `center` to the left boundary.
    pub horizontal: Vec3,
    /// From the up/down midpoint to the up boundary.
    pub vertical: Vec3,
}

impl ScreenBasis {
    pub fn from_view(view: Orientation, fov: FieldOfView) -> Self {
        let up = angle_to_direction(Orientation::new(view.pitch + fov.up, view.yaw));
        let down = angle_to_direction(Orientation::new(view.pitch - fov.down, view.yaw));
        let left = angle_to_direction(Orientation::new(view.pitch, view.yaw - fov.left));
        let right = angle_to_direction(Orientation::new(view.pitch, view.yaw + fov.right));

        let mid_vertical = (up + down) * 0.5;
        let center = (left + right) * 0.5;

        Self {
            center,
            horizontal: left - center,
            vertical: up - mid_vertical,
        }
    }

    /// Unit direction through pixel `(row, col)` of a `rows × cols` screen.
    pub fn direction(&self, row: usize, col: usize, rows: usize, cols: usize) -> Vec3 {
        let fx = span_fraction(col, cols);
        let fy = span_fraction(row, rows);
        let dir = self.center + self.horizontal + self.vertical
            - self.horizontal * (2.0 * fx)
            - self.vertical * (2.0 * fy);
        normalize(dir)
    }
}

/// Position of `i` across `n` samples, 0.0 at the first and 1.0 at the last.
///
/// A single sample sits in the middle.
#[inline(always)]
fn span_fraction(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.5
    } else {
        i as f64 / (n - 1) as f64
    }
}

/// Per-pixel unit ray directions for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionField {
    rows: usize,
    cols: usize,
    /// Row-major directions (row * cols + col)
    dirs: Vec<Vec3>,
}

impl DirectionField {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            dirs: vec![Vec3::ZERO; rows * cols],
        }
    }

    /// Build and fill a field in one go.
    pub fn for_view(view: Orientation, fov: FieldOfView, rows: usize, cols: usize) -> Self {
        let mut field = Self::new(rows, cols);
        field.recompute(view, fov);
        field
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Resize the field.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if self.rows == rows && self.cols == cols {
            return;
        }
        self.rows = rows;
        self.cols = cols;
        self.dirs.resize(rows * cols, Vec3::ZERO);
    }

    /// Overwrite every direction for the given orientation.
    pub fn recompute(&mut self, view: Orientation, fov: FieldOfView) {
        let basis = ScreenBasis::from_view(view, fov);
        let (rows, cols) = (self.rows, self.cols);
        for (i, dir) in self.dirs.iter_mut().enumerate() {
            *dir = basis.direction(i / cols, i % cols, rows, cols);
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Vec3> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.dirs[row * self.cols + col])
    }

    /// Directions of one row.
    pub fn row(&self, row: usize) -> &[Vec3] {
        let start = row * self.cols;
        &self.dirs[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.dirs
    }
}
