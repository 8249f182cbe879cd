//! Input adapters for the explorer.
//!
//! Adapters translate device events into the session's polled
//! [`InputSource`](crate::controllers::session::ports::input_source::InputSource)
//! view.

#[cfg(feature = "gui")]
pub mod gui;
