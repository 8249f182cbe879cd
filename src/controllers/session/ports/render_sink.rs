use crate::controllers::session::data::frame::Frame;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),

    #[error("display surface error: {0}")]
    Surface(String),
}

/// Receives each rendered frame, e.g. to display or save it.
pub trait RenderSink {
    fn present(&mut self, frame: &Frame) -> Result<(), SinkError>;
}
