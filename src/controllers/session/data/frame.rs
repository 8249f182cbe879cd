use std::time::Duration;

use crate::core::data::raster::Raster;

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Redraw counter value at render time. Starts at `0` and grows by one per
    /// render.
    pub id: u64,
    pub raster: Raster,
    pub render_duration: Duration,
}
