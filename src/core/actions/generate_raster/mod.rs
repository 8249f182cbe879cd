pub mod generate_raster;
pub mod ports;
