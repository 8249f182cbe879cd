pub mod pan_direction;
pub mod viewport_model;
pub mod zoom_box;
pub mod zoom_factor;
