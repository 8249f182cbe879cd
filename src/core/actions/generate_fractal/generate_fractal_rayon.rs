use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the canvas on rayon's pool, one row per task.
///
/// Output order matches [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Default + Clone + Send,
{
    let canvas_size = algorithm.canvas_size();
    let row_width = canvas_size as usize;
    let mut results = vec![<Alg::Output as Default>::default(); row_width * row_width];

    if row_width == 0 {
        return results;
    }

    results
        .par_chunks_mut(row_width)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = algorithm.compute(Point { x: x as u32, y });
            }
        });

    results
}
