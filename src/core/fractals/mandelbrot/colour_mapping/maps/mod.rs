pub mod banded_rainbow;
pub mod beetle_juice;
pub mod greyscale;
