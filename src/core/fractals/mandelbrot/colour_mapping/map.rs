use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;

/// A colour map over escape countdown values.
pub trait MandelbrotColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> ColourMapKind;
}

/// Clamps a countdown value into a single colour channel.
pub(crate) fn channel(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
