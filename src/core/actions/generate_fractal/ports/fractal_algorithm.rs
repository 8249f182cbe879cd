use crate::core::data::point::Point;

/// Computes one value per canvas pixel. Implementations must be pure so pixels
/// can be evaluated in any order and on any thread.
pub trait FractalAlgorithm {
    type Output;

    fn canvas_size(&self) -> u32;

    fn compute(&self, pixel: Point) -> Self::Output;
}
