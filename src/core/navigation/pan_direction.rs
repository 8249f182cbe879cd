/// Direction of a pan step, named by where the view moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Unit offset in plane coordinates. Up is towards positive imaginary.
    #[must_use]
    pub const fn unit_offset(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, 1.0),
            Self::Down => (0.0, -1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}
