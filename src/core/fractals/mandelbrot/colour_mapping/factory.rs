use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::banded_rainbow::BandedRainbow;
use crate::core::fractals::mandelbrot::colour_mapping::maps::beetle_juice::BeetleJuice;
use crate::core::fractals::mandelbrot::colour_mapping::maps::greyscale::Greyscale;

#[must_use]
pub fn mandelbrot_colour_map_factory(kind: ColourMapKind) -> Box<dyn MandelbrotColourMap> {
    match kind {
        ColourMapKind::Rainbow => Box::new(BandedRainbow::new()),
        ColourMapKind::Greyscale => Box::new(Greyscale),
        ColourMapKind::BeetleJuice => Box::new(BeetleJuice),
    }
}
