//! Elliptic arc related maths and tools.
//!
//! SVG describes arcs with their endpoints, radii, rotation and two flags
//! (the "endpoint parameterization"). [`SvgArc::to_cubic_beziers`] maps the
//! ellipse onto the unit circle, finds the center there and approximates the
//! swept angle with cubic bézier segments of at most a quarter turn each.

use crate::{Angle, CubicBezierSegment, Offset, Rotation, Transform};

use arrayvec::ArrayVec;
use std::f64::consts::{FRAC_PI_2, PI};

/// Maximum angle spanned by a single cubic bézier segment of the approximation.
const MAX_SEGMENT_ANGLE: f64 = FRAC_PI_2 + 0.001;

/// Upper bound on the number of segments an arc decomposes into.
///
/// The swept angle never exceeds a full turn.
pub const MAX_ARC_SEGMENTS: usize = 4;

/// Cubic bézier segments approximating an arc.
pub type ArcCubics = ArrayVec<CubicBezierSegment, MAX_ARC_SEGMENTS>;

/// Flag parameters for SVG arcs.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arc sweeps, two will represent an arc sweep of greater
    /// than or equal to 180 degrees (the "large-arc"), and two will represent an arc
    /// sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
    /// is true, then one of the two larger arc sweeps will be chosen; otherwise, if
    /// `large_arc` is false, one of the smaller arc sweeps will be chosen.
    pub large_arc: bool,
    /// If `sweep` is true, then the arc will be drawn in a "positive-angle" direction
    /// (the ellipse formula `x=cx+rx*cos(theta)` and `y=cy+ry*sin(theta)` is evaluated
    /// such that theta starts at an angle corresponding to the current point and
    /// increases positively until the arc reaches the destination position).
    pub sweep: bool,
}

/// An elliptic arc in SVG's endpoint parameterization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SvgArc {
    pub from: Offset,
    pub to: Offset,
    pub radii: Offset,
    pub x_rotation: Angle,
    pub flags: ArcFlags,
}

impl SvgArc {
    /// Per SVG, an arc with a zero radius or with identical endpoints is rendered
    /// as a straight line.
    pub fn is_straight_line(&self) -> bool {
        self.radii.x == 0.0 || self.radii.y == 0.0 || self.from == self.to
    }

    /// Approximate the arc with cubic bézier segments.
    ///
    /// Returns `None` when the arc should be drawn as a straight line instead,
    /// either because it is degenerate or because its parameters do not produce
    /// a finite approximation. Nothing is returned partially: either every
    /// segment is valid or the whole arc is rejected.
    pub fn to_cubic_beziers(&self) -> Option<ArcCubics> {
        if self.is_straight_line() {
            return None;
        }

        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();
        let angle = self.x_rotation;

        let half_delta = (self.from - self.to) * 0.5;
        let p = Offset::from(Rotation::new(-angle).transform_vector(half_delta.to_vector()));

        // Scale the radii up if the ellipse can't connect both endpoints.
        let radii_scale = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
        if radii_scale > 1.0 {
            let s = radii_scale.sqrt();
            rx *= s;
            ry *= s;
        }

        let to_unit_circle = Transform::rotation(-angle).then_scale(1.0 / rx, 1.0 / ry);
        let p1 = Offset::from(to_unit_circle.transform_point(self.from.to_point()));
        let p2 = Offset::from(to_unit_circle.transform_point(self.to.to_point()));
        let delta = p2 - p1;

        let d = delta.square_length();
        let mut scale_factor = (1.0 / d - 0.25).max(0.0).sqrt();
        if !scale_factor.is_finite() {
            scale_factor = 0.0;
        }
        if self.flags.sweep == self.flags.large_arc {
            scale_factor = -scale_factor;
        }

        let delta = delta * scale_factor;
        let center = ((p1 + p2) * 0.5).translate(-delta.y, delta.x);

        let theta1 = (p1 - center).direction();
        let theta2 = (p2 - center).direction();

        let mut sweep_angle = theta2 - theta1;
        if sweep_angle < 0.0 && self.flags.sweep {
            sweep_angle += 2.0 * PI;
        } else if sweep_angle > 0.0 && !self.flags.sweep {
            sweep_angle -= 2.0 * PI;
        }

        if !sweep_angle.is_finite() {
            return None;
        }

        let from_unit_circle = Transform::scale(rx, ry).then_rotate(angle);
        let map = |p: Offset| Offset::from(from_unit_circle.transform_point(p.to_point()));

        let n_segments = (sweep_angle.abs() / MAX_SEGMENT_ANGLE).ceil() as usize;
        if n_segments == 0 {
            return None;
        }

        let mut curves = ArcCubics::new();
        let mut from = self.from;
        for i in 0..n_segments {
            let start_theta = theta1 + i as f64 * sweep_angle / n_segments as f64;
            let end_theta = theta1 + (i + 1) as f64 * sweep_angle / n_segments as f64;

            let t = (8.0 / 6.0) * (0.25 * (end_theta - start_theta)).tan();
            if !t.is_finite() {
                return None;
            }

            let (sin_start, cos_start) = start_theta.sin_cos();
            let (sin_end, cos_end) = end_theta.sin_cos();

            let ctrl1 = Offset::new(cos_start - t * sin_start, sin_start + t * cos_start)
                .translate(center.x, center.y);
            let to = Offset::new(cos_end, sin_end).translate(center.x, center.y);
            let ctrl2 = to.translate(t * sin_end, -t * cos_end);

            let curve = CubicBezierSegment {
                from,
                ctrl1: map(ctrl1),
                ctrl2: map(ctrl2),
                to: map(to),
            };
            from = curve.to;

            curves.try_push(curve).ok()?;
        }

        Some(curves)
    }
}

#[cfg(test)]
fn assert_approx_eq(a: Offset, b: Offset) {
    assert!(
        (a - b).square_length() < 1e-8,
        "{:?} is not approximately {:?}",
        a,
        b
    );
}

#[cfg(test)]
fn arc(from: Offset, to: Offset, radius: f64, large_arc: bool, sweep: bool) -> SvgArc {
    SvgArc {
        from,
        to,
        radii: Offset::new(radius, radius),
        x_rotation: Angle::degrees(0.0),
        flags: ArcFlags { large_arc, sweep },
    }
}

#[test]
fn degenerate_arcs() {
    use crate::offset;

    let mut a = arc(offset(0.0, 0.0), offset(10.0, 0.0), 0.0, false, false);
    assert!(a.is_straight_line());
    assert!(a.to_cubic_beziers().is_none());

    a.radii = offset(5.0, 0.0);
    assert!(a.to_cubic_beziers().is_none());

    let a = arc(offset(3.0, 3.0), offset(3.0, 3.0), 5.0, true, true);
    assert!(a.to_cubic_beziers().is_none());
}

#[test]
fn half_circle() {
    use crate::offset;

    let curves = arc(offset(0.0, 0.0), offset(10.0, 0.0), 5.0, false, true)
        .to_cubic_beziers()
        .unwrap();

    assert_eq!(curves.len(), 2);
    assert_eq!(curves[0].from, offset(0.0, 0.0));
    assert_approx_eq(curves[0].ctrl1, offset(0.0, -2.761423749153966));
    assert_approx_eq(curves[0].ctrl2, offset(2.238576250846032, -5.0));
    assert_approx_eq(curves[0].to, offset(5.0, -5.0));
    assert_approx_eq(curves[1].ctrl1, offset(7.761423749153966, -5.0));
    assert_approx_eq(curves[1].ctrl2, offset(10.0, -2.761423749153968));
    assert_approx_eq(curves[1].to, offset(10.0, 0.0));
}

#[test]
fn radii_are_scaled_up() {
    use crate::offset;

    // A radius of 1 can't connect points 10 units apart, the ellipse is grown
    // to the smallest one that does, which is the circle of radius 5.
    let small = arc(offset(0.0, 0.0), offset(10.0, 0.0), 1.0, false, true)
        .to_cubic_beziers()
        .unwrap();
    let exact = arc(offset(0.0, 0.0), offset(10.0, 0.0), 5.0, false, true)
        .to_cubic_beziers()
        .unwrap();

    assert_eq!(small.len(), exact.len());
    for (a, b) in small.iter().zip(exact.iter()) {
        assert_approx_eq(a.ctrl1, b.ctrl1);
        assert_approx_eq(a.ctrl2, b.ctrl2);
        assert_approx_eq(a.to, b.to);
    }
}

#[test]
fn sweep_flag_mirrors_the_arc() {
    use crate::offset;

    let positive = arc(offset(0.0, 0.0), offset(10.0, 0.0), 5.0, false, true)
        .to_cubic_beziers()
        .unwrap();
    let negative = arc(offset(0.0, 0.0), offset(10.0, 0.0), 5.0, false, false)
        .to_cubic_beziers()
        .unwrap();

    assert_eq!(positive.len(), negative.len());
    for (a, b) in positive.iter().zip(negative.iter()) {
        assert_approx_eq(a.ctrl1, offset(b.ctrl1.x, -b.ctrl1.y));
        assert_approx_eq(a.ctrl2, offset(b.ctrl2.x, -b.ctrl2.y));
        assert_approx_eq(a.to, offset(b.to.x, -b.to.y));
    }
}

#[test]
fn large_arc_uses_the_other_center() {
    use crate::offset;

    let from = offset(0.0, 0.0);
    let to = offset(10.0, 0.0);

    let small = arc(from, to, 10.0, false, true).to_cubic_beziers().unwrap();
    let large = arc(from, to, 10.0, true, true).to_cubic_beziers().unwrap();

    assert_eq!(small.len(), 1);
    assert_eq!(large.len(), 4);
    assert_approx_eq(small.last().unwrap().to, to);
    assert_approx_eq(large.last().unwrap().to, to);

    // Same sweep direction, but the large arc goes around the center that is
    // further away from the chord.
    assert!(small[0].sample(0.5).y < 0.0);
    assert!(small[0].sample(0.5).y > -2.0);
    assert!(large[1].to.y < -18.0);
}

#[test]
fn segments_stay_within_a_quarter_turn() {
    use crate::offset;

    for &(large_arc, sweep) in &[(false, false), (false, true), (true, false), (true, true)] {
        let curves = SvgArc {
            from: offset(5.5, 5.5),
            to: offset(4.634, 5.0),
            radii: offset(0.5, 1.5),
            x_rotation: Angle::degrees(30.0),
            flags: ArcFlags { large_arc, sweep },
        }
        .to_cubic_beziers()
        .unwrap();

        assert!(!curves.is_empty());
        assert!(curves.len() <= MAX_ARC_SEGMENTS);
        assert!(curves.iter().all(|c| c.is_finite()));
        assert_approx_eq(curves.last().unwrap().to, offset(4.634, 5.0));
    }
}
