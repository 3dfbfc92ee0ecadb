//! Game tunables loaded from a JSON file.
//!
//! Every field has a default matching the constants module, so an absent or
//! empty file yields the stock game. Unknown fields are ignored.

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Aim window half-extents `(x, y)` in pixels
    pub aim_offset: (f32, f32),
    /// Inactivity timeout before the round winds down on its own
    pub inactivity_timeout_ms: u64,
    /// Rearm the inactivity watchdog on every pointer-down
    pub rearm_watchdog_on_input: bool,
    /// Duration of the car motion along the drawn path
    pub motion_duration: f32,
    /// Curviness of the path-follow interpolation
    pub motion_curviness: f32,
    /// Fade-out of decorations after the motion
    pub decoration_fade: f32,
    /// Fade-to-fail-sign duration for short paths
    pub fail_fade: f32,
    /// Fade-in of decorations after revert
    pub restore_fade: f32,
    /// Width of drawn strokes
    pub stroke_width: f32,
    /// Destination of the exit button
    pub exit_url: String,
    /// Enable debug-level logging
    pub debug_logging: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            aim_offset: (AIM_OFFSET_X, AIM_OFFSET_Y),
            inactivity_timeout_ms: INACTIVITY_TIMEOUT_MS,
            rearm_watchdog_on_input: false,
            motion_duration: MOTION_DURATION,
            motion_curviness: MOTION_CURVINESS,
            decoration_fade: DECORATION_FADE_DURATION,
            fail_fade: FAIL_FADE_DURATION,
            restore_fade: RESTORE_FADE_DURATION,
            stroke_width: STROKE_WIDTH,
            exit_url: EXIT_URL.to_string(),
            debug_logging: false,
        }
    }
}

impl GameConfig {
    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_millis(self.inactivity_timeout_ms)
    }

    /// `<config dir>/lanedraw/config.json`
    pub fn default_path() -> ConfigResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults on any
    /// problem.
    pub fn load() -> Self {
        let loaded = Self::default_path().and_then(|path| Self::load_from(&path));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing or blank file yields defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write as pretty JSON, creating parent folders.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(io_err)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let (ox, oy) = self.aim_offset;
        if ox.is_nan() || oy.is_nan() || ox < 0.0 || oy < 0.0 {
            return Err(ConfigError::Invalid {
                field: "aim_offset",
                reason: format!("must be non-negative, got ({ox}, {oy})"),
            });
        }
        if self.motion_duration.is_nan() || self.motion_duration <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "motion_duration",
                reason: format!("must be positive, got {}", self.motion_duration),
            });
        }
        if self.inactivity_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "inactivity_timeout_ms",
                reason: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}
