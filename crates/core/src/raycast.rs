//! Raycaster - walks a ray through the block grid cell by cell.
//!
//! Each iteration either resolves the ray (left the grid, or hit a block) or
//! advances it just past the nearest cell boundary ahead:
//!
//! 1. Outside the grid: [`Pixel::Empty`].
//! 2. Inside an occupied cell: [`Pixel::Border`] when the hit point is within
//!    the border threshold of the nearest integer on two or more axes,
//!    otherwise [`Pixel::Block`].
//! 3. Inside an empty cell: step to the closest boundary crossing over all
//!    axes whose direction component clears the dead zone, capped at the
//!    maximum step, then overshoot by the step epsilon.
//!
//! Every step crosses into a new cell along at least one axis without ever
//! reversing on another, and the grid is finite, so the walk always ends.

use crate::types::{Pixel, Vec3, BLOCK_BORDER_SIZE, MAX_RAY_STEP, RAY_STEP_EPS};
use crate::world::World;

/// Tolerances controlling traversal and border detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayParams {
    /// Distance to a cell edge that counts as touching it.
    pub border_size: f64,
    /// Direction dead zone, also added past each boundary crossing.
    pub step_eps: f64,
    /// Upper bound for one step.
    pub max_step: f64,
}

impl Default for RayParams {
    fn default() -> Self {
        Self {
            border_size: BLOCK_BORDER_SIZE,
            step_eps: RAY_STEP_EPS,
            max_step: MAX_RAY_STEP,
        }
    }
}

/// Outcome of a traced ray, with the number of steps taken to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    pub pixel: Pixel,
    pub steps: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Raycaster {
    params: RayParams,
}

impl Raycaster {
    /// # Panics
    ///
    /// `max_step` and `step_eps` must be positive and finite, otherwise a ray
    /// could stop advancing.
    pub fn new(params: RayParams) -> Self {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        assert!(
            positive(params.max_step) && positive(params.step_eps),
            "ray params need a positive step: {params:?}"
        );
        Self { params }
    }

    pub fn params(&self) -> RayParams {
        self.params
    }

    /// Resolve the ray from `origin` along unit `dir`.
    #[inline]
    pub fn trace(&self, origin: Vec3, dir: Vec3, world: &World) -> Pixel {
        self.trace_detailed(origin, dir, world).pixel
    }

    /// Like [`Raycaster::trace`], also reporting how many cell steps were taken.
    pub fn trace_detailed(&self, origin: Vec3, dir: Vec3, world: &World) -> Trace {
        let mut pos = origin;
        let mut steps = 0u32;

        loop {
            if world.is_outside(pos) {
                return Trace {
                    pixel: Pixel::Empty,
                    steps,
                };
            }

            if let Some(kind) = world.cell_at(pos.z as usize, pos.y as usize, pos.x as usize) {
                let pixel = if self.on_block_border(pos) {
                    Pixel::Border
                } else {
                    Pixel::Block(kind)
                };
                return Trace { pixel, steps };
            }

            let dist = self.distance_to_next_cell(pos, dir);
            pos += dir * (dist + self.params.step_eps);
            steps += 1;
        }
    }

    /// True when `pos` is near the integer grid on at least two axes.
    pub fn on_block_border(&self, pos: Vec3) -> bool {
        let near = |v: f64| (v - v.round()).abs() < self.params.border_size;
        let hits = near(pos.x) as u8 + near(pos.y) as u8 + near(pos.z) as u8;
        hits >= 2
    }

    /// Ray parameter to the closest boundary ahead, capped at `max_step`.
    fn distance_to_next_cell(&self, pos: Vec3, dir: Vec3) -> f64 {
        let eps = self.params.step_eps;
        let axis = |p: f64, d: f64| -> Option<f64> {
            let cell = p.trunc();
            if d > eps {
                Some((cell + 1.0 - p) / d)
            } else if d < -eps {
                Some((cell - p) / d)
            } else {
                None
            }
        };

        [axis(pos.x, dir.x), axis(pos.y, dir.y), axis(pos.z, dir.z)]
            .into_iter()
            .flatten()
            .fold(self.params.max_step, f64::min)
    }
}

/// Trace with default tolerances.
pub fn raytrace(origin: Vec3, dir: Vec3, world: &World) -> Pixel {
    Raycaster::default().trace(origin, dir, world)
}
