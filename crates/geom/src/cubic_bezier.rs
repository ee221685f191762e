use crate::Offset;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Offset,
    pub ctrl1: Offset,
    pub ctrl2: Offset,
    pub to: Offset,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Offset {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1 * (3.0 * one_t2 * t)
            + self.ctrl2 * (3.0 * one_t * t2)
            + self.to * t3
    }

    pub fn is_finite(&self) -> bool {
        self.from.is_finite()
            && self.ctrl1.is_finite()
            && self.ctrl2.is_finite()
            && self.to.is_finite()
    }
}

#[test]
fn sample_endpoints() {
    use crate::offset;

    let curve = CubicBezierSegment {
        from: offset(0.0, 0.0),
        ctrl1: offset(1.0, 2.0),
        ctrl2: offset(3.0, 2.0),
        to: offset(4.0, 0.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert_eq!(curve.sample(0.5), offset(2.0, 1.5));
}
