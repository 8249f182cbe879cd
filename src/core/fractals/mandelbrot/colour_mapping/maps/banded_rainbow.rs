use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

/// A `(modulus, colour)` pair: values divisible by `modulus` take `colour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub modulus: u32,
    pub colour: Colour,
}

const DEFAULT_BANDS: [Band; 6] = [
    Band {
        modulus: 7,
        colour: Colour::BLACK,
    },
    Band {
        modulus: 6,
        colour: Colour::BLUE,
    },
    Band {
        modulus: 5,
        colour: Colour::GREEN,
    },
    Band {
        modulus: 4,
        colour: Colour::YELLOW,
    },
    Band {
        modulus: 3,
        colour: Colour::ORANGE,
    },
    Band {
        modulus: 2,
        colour: Colour::RED,
    },
];

/// Picks the first band whose modulus divides the value, in table order, and
/// falls back to a fixed colour when none does.
///
/// With the default table `0` is divisible by everything and maps to black, so
/// points inside the set render black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandedRainbow {
    bands: Vec<Band>,
    fallback: Colour,
}

impl BandedRainbow {
    #[must_use]
    pub fn new() -> Self {
        Self::with_bands(DEFAULT_BANDS.to_vec(), Colour::MAGENTA)
    }

    /// Bands with a zero modulus are dropped since nothing is divisible by zero.
    #[must_use]
    pub fn with_bands(bands: Vec<Band>, fallback: Colour) -> Self {
        let bands = bands.into_iter().filter(|band| band.modulus > 0).collect();
        Self { bands, fallback }
    }

    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

impl Default for BandedRainbow {
    fn default() -> Self {
        Self::new()
    }
}

impl ColourMap<u32> for BandedRainbow {
    fn map(&self, countdown: u32) -> Colour {
        self.bands
            .iter()
            .find(|band| countdown % band.modulus == 0)
            .map_or(self.fallback, |band| band.colour)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for BandedRainbow {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Rainbow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_set_value_is_black() {
        assert_eq!(BandedRainbow::new().map(0), Colour::BLACK);
    }

    #[test]
    fn test_bands_are_checked_in_decreasing_modulus_order() {
        let map = BandedRainbow::new();

        assert_eq!(map.map(7), Colour::BLACK);
        assert_eq!(map.map(42), Colour::BLACK); // divisible by 7 and 6
        assert_eq!(map.map(6), Colour::BLUE);
        assert_eq!(map.map(30), Colour::BLUE); // divisible by 6 and 5
        assert_eq!(map.map(5), Colour::GREEN);
        assert_eq!(map.map(20), Colour::GREEN); // divisible by 5 and 4
        assert_eq!(map.map(4), Colour::YELLOW);
        assert_eq!(map.map(3), Colour::ORANGE);
        assert_eq!(map.map(9), Colour::ORANGE);
        assert_eq!(map.map(2), Colour::RED);
        assert_eq!(map.map(22), Colour::RED);
    }

    #[test]
    fn test_values_coprime_to_all_bands_use_fallback() {
        let map = BandedRainbow::new();

        for value in [1, 11, 13, 253] {
            assert_eq!(map.map(value), Colour::MAGENTA);
        }
    }

    #[test]
    fn test_map_is_total_and_deterministic_over_countdown_range() {
        let map = BandedRainbow::new();

        for value in 0..=255 {
            assert_eq!(map.map(value), map.map(value));
        }
        assert_eq!(map.map(u32::MAX), map.map(u32::MAX));
    }

    #[test]
    fn test_custom_table_is_swappable() {
        let map = BandedRainbow::with_bands(
            vec![
                Band {
                    modulus: 0,
                    colour: Colour::RED,
                },
                Band {
                    modulus: 3,
                    colour: Colour::GREEN,
                },
            ],
            Colour::BLUE,
        );

        assert_eq!(map.bands().len(), 1);
        assert_eq!(map.map(9), Colour::GREEN);
        assert_eq!(map.map(10), Colour::BLUE);
    }
}
