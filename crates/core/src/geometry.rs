//! Geometry kernel - vector helpers and angle conversion.
//!
//! Plain functions over [`Vec3`]; the operator impls on `Vec3` do the same
//! arithmetic and are used interchangeably inside the engine.

use crate::types::{Orientation, Vec3};

#[inline(always)]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

#[inline(always)]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

#[inline(always)]
pub fn scale(s: f64, v: Vec3) -> Vec3 {
    v * s
}

/// Scale `v` to unit length, or `None` when its length is zero or not finite.
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        Some(v * (1.0 / len))
    } else {
        None
    }
}

/// Scale `v` to unit length.
///
/// # Panics
///
/// Normalizing a zero-length (or non-finite) vector is a caller bug. This
/// fails fast instead of letting NaN leak into the render loop.
pub fn normalize(v: Vec3) -> Vec3 {
    match try_normalize(v) {
        Some(unit) => unit,
        None => panic!("cannot normalize degenerate vector {v:?}"),
    }
}

/// Unit direction for a pitch/yaw pair.
///
/// `(cos(pitch)·cos(yaw), cos(pitch)·sin(yaw), sin(pitch))`: pitch lifts the
/// direction out of the horizontal plane, yaw turns it from +x towards +y.
pub fn angle_to_direction(view: Orientation) -> Vec3 {
    let (sin_p, cos_p) = view.pitch.sin_cos();
    let (sin_y, cos_y) = view.yaw.sin_cos();
    Vec3::new(cos_p * cos_y, cos_p * sin_y, sin_p)
}
