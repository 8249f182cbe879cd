use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the canvas in row-major order, top row first.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Output> {
    let canvas_size = algorithm.canvas_size();

    (0..canvas_size)
        .flat_map(|y| (0..canvas_size).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
