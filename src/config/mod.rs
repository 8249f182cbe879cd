//! TOML configuration for the explorer.
//!
//! Every key is optional; a missing file or key falls back to the classic
//! full-set view at 500×500.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::navigation::zoom_factor::{MIN_ZOOM_FACTOR, ZoomFactor, ZoomFactorError};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "MANDELBROT_ZOOM_CONFIG";

/// File looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "mandelbrot_zoom.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub canvas_size: u32,
    pub max_iterations: u32,
    pub zoom_factor: f64,
    pub shift_percentage: f64,
    pub poll_interval_ms: u64,
    pub colour_map: ColourMapKind,
    /// Where the PPM sink writes frames. Defaults to the system temp dir.
    pub output_dir: Option<PathBuf>,
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub size: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            canvas_size: 500,
            max_iterations: 255,
            zoom_factor: 5.0,
            shift_percentage: 0.10,
            poll_interval_ms: 50,
            colour_map: ColourMapKind::default(),
            output_dir: None,
            viewport: ViewportConfig::default(),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            center_x: -0.5,
            center_y: 0.0,
            size: 2.0,
        }
    }
}

impl ExplorerConfig {
    /// Loads from `path` if given, else from `$MANDELBROT_ZOOM_CONFIG`, else
    /// from `mandelbrot_zoom.toml` in the working directory.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        Self::load_from(&path)
    }

    /// Returns the defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        log::info!("loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_size == 0 {
            return Err(ConfigError::Validation(
                "canvas_size must be positive".to_string(),
            ));
        }

        if !self.viewport.size.is_finite() || self.viewport.size <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "viewport.size must be positive and finite, got {}",
                self.viewport.size
            )));
        }

        if !self.viewport.center_x.is_finite() || !self.viewport.center_y.is_finite() {
            return Err(ConfigError::Validation(format!(
                "viewport centre must be finite, got ({}, {})",
                self.viewport.center_x, self.viewport.center_y
            )));
        }

        if !self.zoom_factor.is_finite() || self.zoom_factor < MIN_ZOOM_FACTOR {
            return Err(ConfigError::Validation(format!(
                "zoom_factor must be finite and at least {MIN_ZOOM_FACTOR}, got {}",
                self.zoom_factor
            )));
        }

        if !self.shift_percentage.is_finite() || self.shift_percentage < 0.0 {
            return Err(ConfigError::Validation(format!(
                "shift_percentage must be non-negative and finite, got {}",
                self.shift_percentage
            )));
        }

        Ok(())
    }

    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(
            Complex::new(self.viewport.center_x, self.viewport.center_y),
            self.viewport.size,
        )
    }

    pub fn zoom_factor(&self) -> Result<ZoomFactor, ZoomFactorError> {
        ZoomFactor::new(self.zoom_factor)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
