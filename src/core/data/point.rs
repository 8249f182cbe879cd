/// A pixel position on the canvas: `x` is the column, `y` the row, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
