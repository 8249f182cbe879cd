use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, channel};

/// Alternates between a grey level and its inverse on even and odd countdowns,
/// giving striped contour bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeetleJuice;

impl ColourMap<u32> for BeetleJuice {
    fn map(&self, countdown: u32) -> Colour {
        let level = channel(countdown);

        if countdown % 2 == 0 {
            Colour::grey(level)
        } else {
            Colour::grey(u8::MAX - level)
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for BeetleJuice {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::BeetleJuice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_countdown_is_grey_level() {
        assert_eq!(BeetleJuice.map(0), Colour::BLACK);
        assert_eq!(BeetleJuice.map(100), Colour::grey(100));
    }

    #[test]
    fn test_odd_countdown_is_inverted() {
        assert_eq!(BeetleJuice.map(1), Colour::grey(254));
        assert_eq!(BeetleJuice.map(255), Colour::BLACK);
    }

    #[test]
    fn test_saturated_odd_countdown_stays_in_range() {
        assert_eq!(BeetleJuice.map(301), Colour::BLACK);
    }
}
