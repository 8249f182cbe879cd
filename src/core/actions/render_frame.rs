use std::time::Instant;

use log::debug;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_raster::generate_raster::generate_raster;
use crate::core::data::raster::{Raster, RasterError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

/// Renders the Mandelbrot set seen through a viewport into a raster.
pub struct FrameRenderer {
    colour_map: Box<dyn MandelbrotColourMap>,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(kind: ColourMapKind) -> Self {
        Self::with_colour_map(mandelbrot_colour_map_factory(kind))
    }

    #[must_use]
    pub fn with_colour_map(colour_map: Box<dyn MandelbrotColourMap>) -> Self {
        Self { colour_map }
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> ColourMapKind {
        self.colour_map.kind()
    }

    /// Renders on rayon's pool.
    pub fn render(
        &self,
        viewport: &Viewport,
        canvas_size: u32,
        max_iterations: u32,
    ) -> Result<Raster, RasterError> {
        let algorithm = MandelbrotAlgorithm::new(*viewport, canvas_size, max_iterations);
        let start = Instant::now();
        let values = generate_fractal_rayon(&algorithm);
        debug!("computed {canvas_size}x{canvas_size} escape values in {:?}", start.elapsed());

        generate_raster(values, self.colour_map.as_ref(), canvas_size)
    }

    /// Same output as [`render`](Self::render), on the calling thread.
    pub fn render_sequential(
        &self,
        viewport: &Viewport,
        canvas_size: u32,
        max_iterations: u32,
    ) -> Result<Raster, RasterError> {
        let algorithm = MandelbrotAlgorithm::new(*viewport, canvas_size, max_iterations);
        let values = generate_fractal(&algorithm);

        generate_raster(values, self.colour_map.as_ref(), canvas_size)
    }
}

impl std::fmt::Debug for FrameRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("colour_map", &self.colour_map.kind())
            .finish()
    }
}
