//! The scroll axis a fade applies to.

use crate::geometry::Point;

/// The scroll axis along which edges fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The vertical axis; the leading edge is the top.
    #[default]
    Vertical,
    /// The horizontal axis; the leading edge is the left.
    Horizontal,
}

impl Axis {
    /// The start and end points of a gradient running along this axis, in
    /// unit coordinates of the mask frame.
    pub fn gradient_line(self) -> (Point, Point) {
        match self {
            Axis::Vertical => (Point::new(0.5, 0.0), Point::new(0.5, 1.0)),
            Axis::Horizontal => (Point::new(0.0, 0.5), Point::new(1.0, 0.5)),
        }
    }
}
