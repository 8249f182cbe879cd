//! Interactive explore session.
//!
//! Owns the viewport model and the redraw counter, and turns polled input into
//! viewport mutations and re-renders:
//! - **Input**: an [`InputSource`](ports::input_source::InputSource) queried once per step
//! - **Output**: a [`RenderSink`](ports::render_sink::RenderSink) receiving each [`Frame`](data::frame::Frame)
//! - **Core**: `FrameRenderer` and `ViewportModel` from `core/`

pub mod data;
pub mod errors;
pub mod ports;
mod controller;

pub use controller::{ExplorerSession, SessionSettings, StepOutcome};
