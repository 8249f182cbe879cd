pub mod colour;
pub mod complex;
pub mod normalized_point;
pub mod point;
pub mod raster;
pub mod viewport;
