use serde::{Serialize, Deserialize};


/// A location on the plane.
/// Each raw feature (column) of a [`Sample`](crate::Sample)
/// is attached to exactly one `Point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}


impl Point {
    /// Construct a new point `(x, y)`.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }


    /// Returns the x-coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }


    /// Returns the y-coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }


    /// Returns the squared Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}


impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
