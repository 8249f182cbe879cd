use crate::controllers::session::ports::render_sink::SinkError;
use crate::core::data::raster::RasterError;
use crate::core::data::viewport::ViewportError;
use crate::core::navigation::zoom_factor::ZoomFactorError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),

    #[error("invalid zoom factor: {0}")]
    ZoomFactor(#[from] ZoomFactorError),

    #[error("render failed: {0}")]
    Render(#[from] RasterError),

    #[error("render sink failed: {0}")]
    Sink(#[from] SinkError),
}
