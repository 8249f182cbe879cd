//! RGBA framebuffer helpers for display sinks.

use crate::core::data::colour::Colour;
use crate::core::navigation::zoom_box::ZoomBox;

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// # Panics
/// Panics if `dst` does not hold exactly four bytes per RGB pixel of `src`.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 3 == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / 3) * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}

/// Outlines `zoom_box` on a square RGBA canvas. Parts outside the canvas are
/// clipped.
pub fn draw_zoom_box(
    rgba: &mut [u8],
    canvas_size: u32,
    zoom_box: &ZoomBox,
    colour: Colour,
    thickness: u32,
) {
    let size = f64::from(canvas_size);
    let left = (zoom_box.left() * size).round() as i64;
    let right = (zoom_box.right() * size).round() as i64;
    // normalized y grows upward, rows grow downward
    let top = ((1.0 - zoom_box.top()) * size).round() as i64;
    let bottom = ((1.0 - zoom_box.bottom()) * size).round() as i64;

    for t in 0..i64::from(thickness) {
        for x in left..=right {
            put_pixel(rgba, canvas_size, x, top + t, colour);
            put_pixel(rgba, canvas_size, x, bottom - t, colour);
        }
        for y in top..=bottom {
            put_pixel(rgba, canvas_size, left + t, y, colour);
            put_pixel(rgba, canvas_size, right - t, y, colour);
        }
    }
}

fn put_pixel(rgba: &mut [u8], canvas_size: u32, x: i64, y: i64, colour: Colour) {
    let size = i64::from(canvas_size);
    if !(0..size).contains(&x) || !(0..size).contains(&y) {
        return;
    }

    let index = ((y * size + x) * 4) as usize;
    if let Some(pixel) = rgba.get_mut(index..index + 4) {
        pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
    }
}
