//! Render sinks: where finished frames go.

pub mod file;
pub mod pixel_format;
#[cfg(feature = "gui")]
pub mod pixels;
