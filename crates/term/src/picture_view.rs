//! PictureView: maps a rendered `core::Picture` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Camera, Picture};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockKind, Pixel};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Styles per resolved pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: CellStyle,
    pub border: CellStyle,
    pub block: CellStyle,
    /// Style for the distinguished block kind.
    pub highlight: CellStyle,
    pub highlight_kind: Option<BlockKind>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: CellStyle::default(),
            border: CellStyle {
                dim: true,
                ..CellStyle::fg(Rgb::new(160, 160, 160))
            },
            block: CellStyle::default(),
            highlight: CellStyle::fg(Rgb::new(80, 200, 80)),
            highlight_kind: Some(BlockKind::Grass),
        }
    }
}

impl Palette {
    /// Every pixel in the default foreground color.
    pub fn monochrome() -> Self {
        let plain = CellStyle::default();
        Self {
            empty: plain,
            border: plain,
            block: plain,
            highlight: plain,
            highlight_kind: None,
        }
    }

    #[inline(always)]
    pub fn style_for(&self, pixel: Pixel) -> CellStyle {
        match pixel {
            Pixel::Empty => self.empty,
            Pixel::Border => self.border,
            Pixel::Block(kind) if Some(kind) == self.highlight_kind => self.highlight,
            Pixel::Block(_) => self.block,
        }
    }
}

/// Lays out the picture (and an optional status line) on the terminal.
#[derive(Debug, Clone)]
pub struct PictureView {
    palette: Palette,
    status_line: bool,
}

impl Default for PictureView {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            status_line: true,
        }
    }
}

impl PictureView {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            status_line: true,
        }
    }

    pub fn with_status_line(mut self, enabled: bool) -> Self {
        self.status_line = enabled;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Rows left for the picture once the status line is reserved.
    pub fn picture_rows(&self, viewport: Viewport) -> u16 {
        if self.status_line {
            viewport.height.saturating_sub(1)
        } else {
            viewport.height
        }
    }

    /// Render the picture into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. The picture is centered
    /// horizontally and clipped when larger than the viewport.
    pub fn render_into(
        &self,
        picture: &Picture,
        camera: Option<&Camera>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.palette.empty.cell(' '));

        let rows = self.picture_rows(viewport).min(picture.height());
        let start_x = viewport.width.saturating_sub(picture.width()) / 2;

        for y in 0..rows {
            for x in 0..picture.width() {
                let Some(pixel) = picture.get(x, y) else {
                    continue;
                };
                let px = start_x.saturating_add(x);
                if px >= viewport.width {
                    break;
                }
                fb.set(px, y, self.palette.style_for(pixel).cell(pixel.glyph()));
            }
        }

        if self.status_line && viewport.height > 0 {
            self.draw_status_line(fb, camera, viewport.height - 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, picture: &Picture, camera: Option<&Camera>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(picture, camera, viewport, &mut fb);
        fb
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, camera: Option<&Camera>, y: u16) {
        let bar = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        fb.fill_row(0, y, bar.cell(' '));

        let mut x = 0;
        if let Some(cam) = camera {
            let p = cam.position;
            let pose_w = fb.put_fmt(
                0,
                y,
                format_args!(
                    "x {:.2} y {:.2} z {:.2}  pitch {:+.2} yaw {:+.2}",
                    p.x, p.y, p.z, cam.view.pitch, cam.view.yaw
                ),
                CellStyle { bold: true, ..bar },
            );
            x = pose_w.saturating_add(2);
        }

        let hint = "wasd/arrows look  q quit";
        let hint_w = hint.chars().count() as u16;
        let hint_x = fb.width().saturating_sub(hint_w).max(x);
        fb.put_str(hint_x, y, hint, CellStyle { dim: true, ..bar });
    }
}
