pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use config::{ConfigError, ExplorerConfig};
pub use controllers::session::{ExplorerSession, SessionSettings, StepOutcome};
pub use crate::core::actions::render_frame::FrameRenderer;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::escape_countdown;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
pub use crate::core::navigation::viewport_model::ViewportModel;
#[cfg(feature = "gui")]
pub use input::gui::run_gui;
pub use presenters::file::ppm::PpmFileSink;
