use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::session::data::frame::Frame;
use crate::controllers::session::ports::render_sink::{RenderSink, SinkError};
use crate::core::data::colour::Colour;
use crate::core::navigation::zoom_box::ZoomBox;
use crate::presenters::pixel_format::{copy_rgb_to_rgba, draw_zoom_box};

const ZOOM_BOX_THICKNESS: u32 = 2;

/// Shows frames in a window through a `pixels` framebuffer, with the zoom box
/// drawn on top.
pub struct PixelsSink {
    pixels: Pixels<'static>,
    canvas_size: u32,
    /// Last presented frame in RGBA, kept so the overlay can move without a
    /// re-render.
    last_frame: Option<Vec<u8>>,
    zoom_box: Option<ZoomBox>,
}

impl PixelsSink {
    pub fn new(window: &'static Window, canvas_size: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(canvas_size, canvas_size, surface_texture)?;

        Ok(Self {
            pixels,
            canvas_size,
            last_frame: None,
            zoom_box: None,
        })
    }

    pub fn set_zoom_box(&mut self, zoom_box: Option<ZoomBox>) {
        self.zoom_box = zoom_box;
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SinkError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(|err| SinkError::Surface(err.to_string()))
    }

    /// Redraws the last frame and the overlay.
    pub fn redraw(&mut self) -> Result<(), SinkError> {
        let canvas_size = self.canvas_size;
        let frame = self.pixels.frame_mut();

        match &self.last_frame {
            Some(rgba) => frame.copy_from_slice(rgba),
            None => frame.fill(0),
        }

        if let Some(zoom_box) = &self.zoom_box {
            draw_zoom_box(frame, canvas_size, zoom_box, Colour::ZOOM_BOX, ZOOM_BOX_THICKNESS);
        }

        self.pixels
            .render()
            .map_err(|err| SinkError::Surface(err.to_string()))
    }
}

impl RenderSink for PixelsSink {
    fn present(&mut self, frame: &Frame) -> Result<(), SinkError> {
        if frame.raster.canvas_size() != self.canvas_size {
            return Err(SinkError::Surface(format!(
                "frame {} is {}x{}, window canvas is {}x{}",
                frame.id,
                frame.raster.canvas_size(),
                frame.raster.canvas_size(),
                self.canvas_size,
                self.canvas_size
            )));
        }

        let mut rgba = vec![0; self.pixels.frame().len()];
        copy_rgb_to_rgba(frame.raster.buffer(), &mut rgba);
        self.last_frame = Some(rgba);

        self.redraw()
    }
}
