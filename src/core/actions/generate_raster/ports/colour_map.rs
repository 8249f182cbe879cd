use crate::core::data::colour::Colour;

/// Turns a per-pixel fractal value into a display colour. Must be total.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
