use crate::{CubicBezierSegment, Offset};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Offset,
    pub ctrl: Offset,
    pub to: Offset,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Offset {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl * (2.0 * one_t * t) + self.to * t2
    }

    /// Elevate the curve to an equivalent cubic bézier segment.
    pub fn to_cubic(&self) -> CubicBezierSegment {
        CubicBezierSegment {
            from: self.from,
            ctrl1: elevate(self.from, self.ctrl),
            ctrl2: elevate(self.to, self.ctrl),
            to: self.to,
        }
    }
}

#[inline]
fn elevate(endpoint: Offset, ctrl: Offset) -> Offset {
    Offset::new(
        (endpoint.x + 2.0 * ctrl.x) / 3.0,
        (endpoint.y + 2.0 * ctrl.y) / 3.0,
    )
}

#[test]
fn to_cubic() {
    use crate::offset;

    let quadratic = QuadraticBezierSegment {
        from: offset(20.0, 30.0),
        ctrl: offset(40.0, 5.0),
        to: offset(60.0, 30.0),
    };
    let cubic = quadratic.to_cubic();

    assert_eq!(cubic.from, quadratic.from);
    assert_eq!(cubic.to, quadratic.to);
    assert!((cubic.ctrl1.x - 33.333333).abs() < 1e-5);
    assert!((cubic.ctrl1.y - 13.333333).abs() < 1e-5);
    assert!((cubic.ctrl2.x - 46.666667).abs() < 1e-5);
    assert!((cubic.ctrl2.y - 13.333333).abs() < 1e-5);

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let a = quadratic.sample(t);
        let b = cubic.sample(t);
        assert!((a - b).square_length() < 1e-12, "{:?} != {:?} at {}", a, b, t);
    }
}
