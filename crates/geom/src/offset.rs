use crate::{Point, Vector};

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D offset, used both for positions and displacements.
///
/// `Offset` is a plain value type: every operation returns a new offset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Shorthand for `Offset::new(x, y)`.
#[inline]
pub fn offset(x: f64, y: f64) -> Offset {
    Offset::new(x, y)
}

impl Offset {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Offset { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Offset { x: 0.0, y: 0.0 }
    }

    /// Angle in radians between the positive x axis and this vector, in `[-π, π]`.
    #[inline]
    pub fn direction(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Offset {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Reflection of `self` about `center`.
    #[inline]
    pub fn reflect_about(self, center: Offset) -> Self {
        Offset {
            x: 2.0 * center.x - self.x,
            y: 2.0 * center.y - self.y,
        }
    }

    #[inline]
    pub fn square_length(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, other: Offset) -> Offset {
        Offset::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Offset {
    #[inline]
    fn add_assign(&mut self, other: Offset) {
        *self = *self + other;
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, other: Offset) -> Offset {
        Offset::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Offset {
    #[inline]
    fn sub_assign(&mut self, other: Offset) {
        *self = *self - other;
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;
    #[inline]
    fn mul(self, scale: f64) -> Offset {
        Offset::new(self.x * scale, self.y * scale)
    }
}

impl Neg for Offset {
    type Output = Offset;
    #[inline]
    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

impl From<Point> for Offset {
    fn from(p: Point) -> Self {
        Offset::new(p.x, p.y)
    }
}

impl From<Vector> for Offset {
    fn from(v: Vector) -> Self {
        Offset::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Offset {
    fn from((x, y): (f64, f64)) -> Self {
        Offset::new(x, y)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset{{{:.6},{:.6}}}", self.x, self.y)
    }
}

#[test]
fn arithmetic() {
    let a = offset(1.0, 2.0);
    let b = offset(0.5, -4.0);

    assert_eq!(a + b, offset(1.5, -2.0));
    assert_eq!(a - b, offset(0.5, 6.0));
    assert_eq!(a * 2.0, offset(2.0, 4.0));
    assert_eq!(-a, offset(-1.0, -2.0));
    assert_eq!(a.translate(-1.0, 1.0), offset(0.0, 3.0));
    assert_eq!(Offset::zero(), Offset::default());
}

#[test]
fn direction() {
    use std::f64::consts::{FRAC_PI_2, PI};

    assert_eq!(offset(1.0, 0.0).direction(), 0.0);
    assert_eq!(offset(0.0, 1.0).direction(), FRAC_PI_2);
    assert_eq!(offset(-1.0, 0.0).direction(), PI);
    assert_eq!(offset(0.0, -1.0).direction(), -FRAC_PI_2);
}

#[test]
fn reflection() {
    let ctrl = offset(40.0, 5.0);
    assert_eq!(ctrl.reflect_about(offset(60.0, 30.0)), offset(80.0, 55.0));
    assert_eq!(ctrl.reflect_about(ctrl), ctrl);
}

#[test]
fn display() {
    assert_eq!(
        format!("{}", offset(1.5, -2.0)),
        "Offset{1.500000,-2.000000}"
    );
}

#[test]
fn euclid_conversions() {
    let p = offset(3.0, 4.0);
    assert_eq!(Offset::from(p.to_point()), p);
    assert_eq!(Offset::from(p.to_vector()), p);
    assert_eq!(p.square_length(), 25.0);
}
