//! Terminal voxel renderer (default binary).
//!
//! Each tick: drain the keys pressed since the last tick, snap the camera to
//! the ground and turn it, raycast a new picture if the pose changed, and
//! flush the changed cells to the terminal.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_voxel::core::{default_world, Camera, FrameRenderer, Picture, PoseIntegrator};
use tui_voxel::input::{should_quit, TickInput};
use tui_voxel::term::{FrameBuffer, PictureView, RenderThrottle, TerminalRenderer, Viewport};
use tui_voxel::{logging, AppConfig};

/// Redraw interval for an unchanged pose.
const STATIC_REDRAW_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    for w in &config.warnings {
        warn!("{w}");
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("renderer stopped: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let world = default_world();
    let mut camera = Camera::spawn();
    let integrator = PoseIntegrator::default();
    let mut renderer = FrameRenderer::new().with_parallel(config.parallel);

    let (pic_w, pic_h) = config.picture_size(crossterm::terminal::size().ok());
    let mut picture = Picture::new(pic_w, pic_h);

    let view = PictureView::default().with_status_line(config.status_line);
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut input = TickInput::new().with_release_tracking(term.key_release_events());

    info!(
        width = pic_w,
        height = pic_h,
        parallel = config.parallel,
        release_events = term.key_release_events(),
        occupied = world.occupied_count(),
        "session started"
    );

    let started = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();
    let mut frames: u64 = 0;

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!(frames, "quit requested");
                        return Ok(());
                    }
                    input.handle_key_event(key);
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();

        let snapshot = input.take();
        let report = integrator.integrate(&mut camera, &world, &snapshot);

        let now_ms = started.elapsed().as_millis() as u64;
        if !throttle.should_render(now_ms, camera.fingerprint(), !report.moved()) {
            continue;
        }

        renderer.render_into(&camera, &world, &mut picture);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&picture, Some(&camera), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
        frames += 1;
    }
}
