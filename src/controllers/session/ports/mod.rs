//! Port definitions for the session.
//!
//! The session polls an [`InputSource`](input_source::InputSource) and hands
//! rendered frames to a [`RenderSink`](render_sink::RenderSink), so it runs
//! the same against a window, a file writer or a test double.

pub mod input_source;
pub mod render_sink;
