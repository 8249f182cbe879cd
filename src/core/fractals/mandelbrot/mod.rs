pub mod algorithm;
pub mod colour_mapping;
