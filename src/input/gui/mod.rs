//! GUI input adapter for interactive exploration.
//!
//! A winit window whose events feed a held-key/pointer state, with a `pixels`
//! framebuffer as the render sink.

mod app;
pub mod input_state;

pub use app::{GuiError, run_gui};
