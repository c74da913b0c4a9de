//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `VOXEL_PICTURE_WIDTH` | terminal width | Picture columns |
//! | `VOXEL_PICTURE_HEIGHT` | terminal height (minus status line) | Picture rows |
//! | `VOXEL_TICK_MS` | 16 | Frame tick interval |
//! | `VOXEL_PARALLEL` | off | Trace picture rows on the rayon pool |
//! | `VOXEL_HUD` | on | Show the status line |
//! | `VOXEL_LOG_PATH` | unset | Write `tracing` output to this file |
//!
//! The picture size is fixed once the session starts. Values that fail to
//! parse fall back to their defaults and are reported through
//! [`AppConfig::warnings`].

use tui_voxel_types::{PICTURE_HEIGHT, PICTURE_WIDTH, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit picture size; `None` means "fit the terminal at startup".
    pub picture_width: Option<u16>,
    pub picture_height: Option<u16>,
    pub tick_ms: u32,
    pub parallel: bool,
    pub status_line: bool,
    pub log_path: Option<String>,
    /// Variables that were set but could not be parsed.
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            picture_width: None,
            picture_height: None,
            tick_ms: TICK_MS,
            parallel: false,
            status_line: true,
            log_path: None,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        let mut warnings = Vec::new();

        let mut parse = |key: &str| -> Option<u32> {
            let raw = lookup(key)?;
            match raw.trim().parse::<u32>() {
                Ok(v) if v > 0 => Some(v),
                _ => {
                    warnings.push(format!("{key}={raw:?} is not a positive integer; using default"));
                    None
                }
            }
        };

        cfg.picture_width = parse("VOXEL_PICTURE_WIDTH").map(|v| v.min(u16::MAX as u32) as u16);
        cfg.picture_height = parse("VOXEL_PICTURE_HEIGHT").map(|v| v.min(u16::MAX as u32) as u16);
        if let Some(tick) = parse("VOXEL_TICK_MS") {
            cfg.tick_ms = tick;
        }

        cfg.parallel = lookup("VOXEL_PARALLEL").map(|v| is_truthy(&v)).unwrap_or(false);
        cfg.status_line = lookup("VOXEL_HUD").map(|v| is_truthy(&v)).unwrap_or(true);

        cfg.log_path = lookup("VOXEL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        cfg.warnings = warnings;
        cfg
    }

    /// Picture size for a terminal of `term_w × term_h`.
    ///
    /// Explicit settings win; otherwise the picture fills the terminal, less
    /// the status line. Without a terminal size the classic 900×180 is used.
    pub fn picture_size(&self, terminal: Option<(u16, u16)>) -> (u16, u16) {
        let reserved = u16::from(self.status_line);
        let (fit_w, fit_h) = match terminal {
            Some((w, h)) => (w.max(2), h.saturating_sub(reserved).max(2)),
            None => (PICTURE_WIDTH, PICTURE_HEIGHT),
        };
        (
            self.picture_width.unwrap_or(fit_w),
            self.picture_height.unwrap_or(fit_h),
        )
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
