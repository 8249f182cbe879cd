use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::controllers::session::data::frame::Frame;
use crate::controllers::session::ports::render_sink::{RenderSink, SinkError};
use crate::core::data::raster::Raster;

/// Writes `raster` as a binary (`P6`) PPM image.
pub fn write_ppm<W: Write>(raster: &Raster, mut out: W) -> std::io::Result<()> {
    let size = raster.canvas_size();

    writeln!(out, "P6")?;
    writeln!(out, "{size} {size}")?;
    writeln!(out, "255")?;
    out.write_all(raster.buffer())?;
    out.flush()
}

/// Saves every presented frame as `frame{id}.ppm` inside a directory.
#[derive(Debug, Clone)]
pub struct PpmFileSink {
    output_dir: PathBuf,
}

impl PpmFileSink {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn frame_path(&self, id: u64) -> PathBuf {
        self.output_dir.join(format!("frame{id}.ppm"))
    }
}

impl RenderSink for PpmFileSink {
    fn present(&mut self, frame: &Frame) -> Result<(), SinkError> {
        let path = self.frame_path(frame.id);
        log::info!("saving frame {} to {}", frame.id, path.display());

        std::fs::create_dir_all(&self.output_dir)?;
        let file = std::fs::File::create(&path)?;
        write_ppm(&frame.raster, BufWriter::new(file))?;

        Ok(())
    }
}
