use crate::core::data::normalized_point::NormalizedPoint;

/// Keys the session reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
}

/// Polled view of the user's input devices.
///
/// Queries report the state at the moment of the call; nothing is buffered.
pub trait InputSource {
    fn pointer_pressed(&self) -> bool;

    /// Normalized pointer position, `y` growing upward.
    fn pointer_position(&self) -> NormalizedPoint;

    fn is_key_held(&self, key: Key) -> bool;
}
