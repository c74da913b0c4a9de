//! Pose integration - ground snapping and look input, once per tick.
//!
//! Vertical motion is a discrete snap, not physics:
//! - the cell just above foot level is solid: step up one block
//! - otherwise, the cell just below foot level is empty: fall one block
//!
//! Then look actions rotate the view by a fixed step each. Horizontal
//! position never changes here and is never collision checked.

use tracing::debug;

use crate::camera::Camera;
use crate::types::{InputSnapshot, LookAction, Vec3, EYE_HEIGHT, FOOT_PROBE_EPS, TILT_STEP};
use crate::world::World;

/// Vertical snap applied during one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMove {
    /// Feet were inside a block; raised by one.
    StepUp,
    /// Nothing underfoot; lowered by one.
    Fall,
    /// Standing on something (or the probe left the world).
    Rest,
}

impl VerticalMove {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalMove::StepUp => "stepUp",
            VerticalMove::Fall => "fall",
            VerticalMove::Rest => "rest",
        }
    }
}

/// What one integration step did to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseReport {
    pub vertical: VerticalMove,
    pub view_changed: bool,
}

impl PoseReport {
    /// True if the camera pose differs from before the step.
    pub fn moved(&self) -> bool {
        self.view_changed || self.vertical != VerticalMove::Rest
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseIntegrator {
    eye_height: f64,
    probe_eps: f64,
    tilt_step: f64,
}

impl Default for PoseIntegrator {
    fn default() -> Self {
        Self::new(EYE_HEIGHT, FOOT_PROBE_EPS, TILT_STEP)
    }
}

impl PoseIntegrator {
    pub fn new(eye_height: f64, probe_eps: f64, tilt_step: f64) -> Self {
        Self {
            eye_height,
            probe_eps,
            tilt_step,
        }
    }

    pub fn tilt_step(&self) -> f64 {
        self.tilt_step
    }

    /// Apply ground collision, then look input, to `camera`.
    pub fn integrate(&self, camera: &mut Camera, world: &World, input: &InputSnapshot) -> PoseReport {
        let vertical = self.resolve_vertical(camera, world);
        let view_changed = self.apply_look(camera, input);

        if vertical != VerticalMove::Rest {
            debug!(
                vertical = vertical.as_str(),
                z = camera.position.z,
                "camera snapped vertically"
            );
        }

        PoseReport {
            vertical,
            view_changed,
        }
    }

    /// Step-up / gravity snap against the cells around foot level.
    pub fn resolve_vertical(&self, camera: &mut Camera, world: &World) -> VerticalMove {
        let foot = camera.position.z - self.eye_height;

        let probe = |z: f64| Vec3::new(camera.position.x, camera.position.y, z);
        let inside = world.cell_at_point(probe(foot + self.probe_eps));
        let below = world.cell_at_point(probe(foot - self.probe_eps));

        match (inside, below) {
            (Some(Some(_)), _) => {
                camera.position.z += 1.0;
                VerticalMove::StepUp
            }
            (_, Some(None)) => {
                camera.position.z -= 1.0;
                VerticalMove::Fall
            }
            _ => VerticalMove::Rest,
        }
    }

    /// Rotate the view for every active look action; true if anything was pressed.
    pub fn apply_look(&self, camera: &mut Camera, input: &InputSnapshot) -> bool {
        for action in input.actions() {
            match action {
                LookAction::TiltUp => camera.view.pitch += self.tilt_step,
                LookAction::TiltDown => camera.view.pitch -= self.tilt_step,
                LookAction::YawLeft => camera.view.yaw -= self.tilt_step,
                LookAction::YawRight => camera.view.yaw += self.tilt_step,
            }
        }
        !input.is_empty()
    }
}
