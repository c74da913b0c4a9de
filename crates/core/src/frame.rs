//! Frame rendering - one ray per pixel into a reusable picture buffer.
//!
//! Pixels are independent of each other: every ray reads the same world and
//! the same direction field and writes only its own picture cell. The
//! sequential path is the reference; the parallel path splits the picture
//! into rows and hands them to rayon.

use rayon::prelude::*;

use crate::camera::{Camera, DirectionField, FieldOfView};
use crate::raycast::{RayParams, Raycaster};
use crate::types::{Pixel, Vec3};
use crate::world::World;

/// 2D grid of resolved pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: u16,
    height: u16,
    pixels: Vec<Pixel>,
}

impl Picture {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Pixel::Empty; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the picture.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.resize(len, Pixel::Empty);
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Pixel> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u16, y: u16, pixel: Pixel) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = pixel;
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // `max(1)` keeps `chunks` happy for zero-width pictures, which have no pixels anyway.
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Render as text, one line per row, without trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() + self.height as usize);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(Pixel::glyph));
        }
        out
    }

    /// Count pixels matching a predicate.
    pub fn count(&self, mut f: impl FnMut(Pixel) -> bool) -> usize {
        self.pixels.iter().filter(|p| f(**p)).count()
    }
}

/// Drives the raycaster over a whole picture.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    fov: FieldOfView,
    raycaster: Raycaster,
    field: DirectionField,
    parallel: bool,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::with_config(FieldOfView::default(), RayParams::default())
    }

    pub fn with_config(fov: FieldOfView, params: RayParams) -> Self {
        Self {
            fov,
            raycaster: Raycaster::new(params),
            field: DirectionField::new(0, 0),
            parallel: false,
        }
    }

    /// Trace rows on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn fov(&self) -> FieldOfView {
        self.fov
    }

    /// Direction field used for the most recent frame.
    pub fn field(&self) -> &DirectionField {
        &self.field
    }

    /// Render into a fresh picture.
    pub fn render(&mut self, camera: &Camera, world: &World, width: u16, height: u16) -> Picture {
        let mut picture = Picture::new(width, height);
        self.render_into(camera, world, &mut picture);
        picture
    }

    /// Render the world as seen from `camera` into an existing picture.
    ///
    /// This is the allocation-free hot path (sequential mode). Callers keep
    /// one picture alive and pass it every frame.
    pub fn render_into(&mut self, camera: &Camera, world: &World, picture: &mut Picture) {
        self.field
            .resize(picture.height() as usize, picture.width() as usize);
        self.field.recompute(camera.view, self.fov);

        let origin = camera.position;
        let raycaster = self.raycaster;
        let width = picture.width() as usize;
        if width == 0 {
            return;
        }

        if self.parallel {
            let field = &self.field;
            picture
                .pixels
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| trace_row(&raycaster, origin, field.row(y), world, row));
        } else {
            for (y, row) in picture.pixels.chunks_mut(width).enumerate() {
                trace_row(&raycaster, origin, self.field.row(y), world, row);
            }
        }
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn trace_row(raycaster: &Raycaster, origin: Vec3, dirs: &[Vec3], world: &World, out: &mut [Pixel]) {
    for (pixel, dir) in out.iter_mut().zip(dirs) {
        *pixel = raycaster.trace(origin, *dir, world);
    }
}
