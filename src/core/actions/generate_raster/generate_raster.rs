use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::data::raster::{BYTES_PER_PIXEL, Raster, RasterError};

/// Colours row-major fractal values into a square raster.
///
/// Fails when `values` does not hold exactly one entry per pixel.
pub fn generate_raster<T, CMap: ColourMap<T> + ?Sized>(
    values: Vec<T>,
    mapper: &CMap,
    canvas_size: u32,
) -> Result<Raster, RasterError> {
    let mut buffer = Vec::with_capacity(values.len() * BYTES_PER_PIXEL);

    for value in values {
        let colour = mapper.map(value);
        buffer.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Raster::from_data(canvas_size, buffer)
}
