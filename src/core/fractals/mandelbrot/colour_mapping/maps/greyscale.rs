use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, channel};

/// Uses the countdown directly as a grey level; values above 255 saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greyscale;

impl ColourMap<u32> for Greyscale {
    fn map(&self, countdown: u32) -> Colour {
        Colour::grey(channel(countdown))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for Greyscale {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Greyscale
    }
}
