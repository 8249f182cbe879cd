use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

pub const BYTES_PER_PIXEL: usize = 3;

fn canvas_to_buffer_size(canvas_size: u32) -> usize {
    canvas_size as usize * canvas_size as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("canvas size must be positive")]
    EmptyCanvas,

    #[error("pixel at x:{}, y:{} outside of {canvas_size}x{canvas_size} canvas", .pixel.x, .pixel.y)]
    PixelOutsideBounds { pixel: Point, canvas_size: u32 },

    #[error("canvas size {expected} bytes does not match buffer size {actual} bytes")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type RasterData = Vec<u8>;

/// A square grid of RGB pixels, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    canvas_size: u32,
    buffer: RasterData,
}

impl Raster {
    pub fn new(canvas_size: u32) -> Result<Self, RasterError> {
        if canvas_size == 0 {
            return Err(RasterError::EmptyCanvas);
        }

        Ok(Self {
            canvas_size,
            buffer: vec![0; canvas_to_buffer_size(canvas_size)],
        })
    }

    pub fn from_data(canvas_size: u32, buffer: RasterData) -> Result<Self, RasterError> {
        if canvas_size == 0 {
            return Err(RasterError::EmptyCanvas);
        }

        let expected = canvas_to_buffer_size(canvas_size);

        if expected != buffer.len() {
            return Err(RasterError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            canvas_size,
            buffer,
        })
    }

    #[must_use]
    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.canvas_size as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn contains(&self, pixel: Point) -> bool {
        pixel.x < self.canvas_size && pixel.y < self.canvas_size
    }

    fn index_of(&self, pixel: Point) -> Result<usize, RasterError> {
        if !self.contains(pixel) {
            return Err(RasterError::PixelOutsideBounds {
                pixel,
                canvas_size: self.canvas_size,
            });
        }

        Ok(pixel.y as usize * self.row_stride() + pixel.x as usize * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), RasterError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, RasterError> {
        let index = self.index_of(pixel)?;

        Ok(Colour::rgb(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }
}
