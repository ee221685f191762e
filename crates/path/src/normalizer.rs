//! Conversion of parsed segments into absolute drawing instructions.

use crate::geom::{Angle, Offset, QuadraticBezierSegment, SvgArc};
use crate::segment::{Segment, SegmentKind};
use crate::sink::PathSink;

/// The running state of the normalizer.
///
/// A `PathState` is threaded through every segment of one path, in order. It
/// resolves relative coordinates, implicit control points of smooth curves,
/// quadratic curves and arcs so that the sink only ever sees absolute move-to,
/// line-to, cubic-to and close calls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathState {
    /// The current point.
    current_point: Offset,
    /// The first point of the current sub-path.
    subpath_start: Offset,
    /// The last control point, equal to the current point unless the previous
    /// segment was a cubic or quadratic curve.
    last_control_point: Offset,
    /// The command of the previous segment.
    last_kind: SegmentKind,
}

impl Default for PathState {
    fn default() -> Self {
        PathState::new()
    }
}

impl PathState {
    pub fn new() -> Self {
        PathState {
            current_point: Offset::zero(),
            subpath_start: Offset::zero(),
            last_control_point: Offset::zero(),
            last_kind: SegmentKind::Unknown,
        }
    }

    /// The current position.
    pub fn current_point(&self) -> Offset {
        self.current_point
    }

    /// The position at the start of the current sub-path.
    pub fn subpath_start(&self) -> Offset {
        self.subpath_start
    }

    pub fn last_control_point(&self) -> Offset {
        self.last_control_point
    }

    pub fn last_kind(&self) -> SegmentKind {
        self.last_kind
    }

    /// Resolve a segment and forward the result to the sink.
    ///
    /// Issues exactly one sink call per segment, except for arcs which may
    /// produce several cubic bézier curves.
    pub fn emit_segment<S: PathSink + ?Sized>(&mut self, segment: &Segment, sink: &mut S) {
        let kind = segment.kind;
        debug_assert_ne!(kind, SegmentKind::Unknown, "not produced by the parser");
        if kind == SegmentKind::Unknown {
            log::warn!("ignoring a segment of unknown kind");
            return;
        }

        let mut seg = self.to_absolute(segment);

        match kind {
            SegmentKind::MoveToAbs | SegmentKind::MoveToRel => {
                self.subpath_start = seg.target;
                sink.move_to(seg.target.x, seg.target.y);
            }
            SegmentKind::LineToAbs
            | SegmentKind::LineToRel
            | SegmentKind::HorizontalLineToAbs
            | SegmentKind::HorizontalLineToRel
            | SegmentKind::VerticalLineToAbs
            | SegmentKind::VerticalLineToRel => {
                sink.line_to(seg.target.x, seg.target.y);
            }
            SegmentKind::Close => {
                sink.close();
            }
            SegmentKind::CubicToAbs
            | SegmentKind::CubicToRel
            | SegmentKind::SmoothCubicToAbs
            | SegmentKind::SmoothCubicToRel => {
                if kind == SegmentKind::SmoothCubicToAbs || kind == SegmentKind::SmoothCubicToRel {
                    seg.control1 = self.smooth_ctrl(self.last_kind.is_cubic());
                }
                self.last_control_point = seg.control2;
                sink.cubic_to(
                    seg.control1.x,
                    seg.control1.y,
                    seg.control2.x,
                    seg.control2.y,
                    seg.target.x,
                    seg.target.y,
                );
            }
            SegmentKind::QuadraticToAbs
            | SegmentKind::QuadraticToRel
            | SegmentKind::SmoothQuadraticToAbs
            | SegmentKind::SmoothQuadraticToRel => {
                if kind == SegmentKind::SmoothQuadraticToAbs
                    || kind == SegmentKind::SmoothQuadraticToRel
                {
                    seg.control1 = self.smooth_ctrl(self.last_kind.is_quadratic());
                }
                self.last_control_point = seg.control1;
                let cubic = QuadraticBezierSegment {
                    from: self.current_point,
                    ctrl: seg.control1,
                    to: seg.target,
                }
                .to_cubic();
                sink.cubic_to(
                    cubic.ctrl1.x,
                    cubic.ctrl1.y,
                    cubic.ctrl2.x,
                    cubic.ctrl2.y,
                    cubic.to.x,
                    cubic.to.y,
                );
            }
            SegmentKind::ArcToAbs | SegmentKind::ArcToRel => {
                self.emit_arc(&seg, sink);
            }
            SegmentKind::Unknown => unreachable!(),
        }

        self.current_point = seg.target;

        if !kind.is_cubic() && !kind.is_quadratic() {
            self.last_control_point = self.current_point;
        }

        self.last_kind = kind;
    }

    /// Emit a whole sequence of segments.
    pub fn emit_segments<'l, Iter, S>(&mut self, segments: Iter, sink: &mut S)
    where
        Iter: IntoIterator<Item = &'l Segment>,
        S: PathSink + ?Sized,
    {
        for segment in segments {
            self.emit_segment(segment, sink);
        }
    }

    fn to_absolute(&self, segment: &Segment) -> Segment {
        let current = self.current_point;
        let mut seg = *segment;
        match segment.kind {
            SegmentKind::QuadraticToRel => {
                seg.control1 += current;
                seg.target += current;
            }
            SegmentKind::CubicToRel => {
                seg.control1 += current;
                seg.control2 += current;
                seg.target += current;
            }
            SegmentKind::SmoothCubicToRel => {
                seg.control2 += current;
                seg.target += current;
            }
            SegmentKind::MoveToRel
            | SegmentKind::LineToRel
            | SegmentKind::SmoothQuadraticToRel
            | SegmentKind::ArcToRel => {
                seg.target += current;
            }
            // Only the moving axis changes, whatever is stored in the other one.
            SegmentKind::HorizontalLineToRel => {
                seg.target = Offset::new(current.x + seg.target.x, current.y);
            }
            SegmentKind::VerticalLineToRel => {
                seg.target = Offset::new(current.x, current.y + seg.target.y);
            }
            SegmentKind::HorizontalLineToAbs => {
                seg.target.y = current.y;
            }
            SegmentKind::VerticalLineToAbs => {
                seg.target.x = current.x;
            }
            SegmentKind::Close => {
                seg.target = self.subpath_start;
            }
            _ => {}
        }

        seg
    }

    fn smooth_ctrl(&self, reflect: bool) -> Offset {
        if reflect {
            self.last_control_point.reflect_about(self.current_point)
        } else {
            self.current_point
        }
    }

    fn emit_arc<S: PathSink + ?Sized>(&self, seg: &Segment, sink: &mut S) {
        let arc = SvgArc {
            from: self.current_point,
            to: seg.target,
            radii: seg.arc_radii(),
            x_rotation: Angle::degrees(seg.arc_rotation),
            flags: seg.arc_flags(),
        };

        match arc.to_cubic_beziers() {
            Some(curves) => {
                for curve in &curves {
                    sink.cubic_to(
                        curve.ctrl1.x,
                        curve.ctrl1.y,
                        curve.ctrl2.x,
                        curve.ctrl2.y,
                        curve.to.x,
                        curve.to.y,
                    );
                }
            }
            None => {
                log::debug!("arc {:?} drawn as a straight line", arc);
                sink.line_to(seg.target.x, seg.target.y);
            }
        }
    }
}

#[cfg(test)]
use crate::geom::offset;
#[cfg(test)]
use crate::{PathEvent, PathRecorder};

#[cfg(test)]
fn seg(kind: SegmentKind, x: f64, y: f64) -> Segment {
    Segment::new(kind, offset(x, y))
}

#[cfg(test)]
fn curve(kind: SegmentKind, c1: (f64, f64), c2: (f64, f64), to: (f64, f64)) -> Segment {
    Segment {
        kind,
        target: to.into(),
        control1: c1.into(),
        control2: c2.into(),
        ..Segment::default()
    }
}

#[cfg(test)]
fn normalize(segments: &[Segment]) -> Vec<PathEvent> {
    let mut recorder = PathRecorder::new();
    PathState::new().emit_segments(segments, &mut recorder);
    recorder.into_events()
}

#[test]
fn relative_commands() {
    use SegmentKind::*;

    let events = normalize(&[
        seg(MoveToRel, 10.0, 10.0),
        seg(LineToRel, 5.0, 0.0),
        curve(CubicToRel, (1.0, 1.0), (2.0, 2.0), (3.0, 0.0)),
        curve(QuadraticToRel, (1.0, -1.0), (0.0, 0.0), (2.0, 0.0)),
        seg(MoveToRel, 1.0, 1.0),
    ]);

    assert_eq!(
        events,
        vec![
            PathEvent::move_to(10.0, 10.0),
            PathEvent::line_to(15.0, 10.0),
            PathEvent::cubic_to(16.0, 11.0, 17.0, 12.0, 18.0, 10.0),
            PathEvent::cubic_to(
                (18.0 + 2.0 * 19.0) / 3.0,
                (10.0 + 2.0 * 9.0) / 3.0,
                (20.0 + 2.0 * 19.0) / 3.0,
                (10.0 + 2.0 * 9.0) / 3.0,
                20.0,
                10.0
            ),
            PathEvent::move_to(21.0, 11.0),
        ]
    );
}

#[test]
fn horizontal_and_vertical_lines() {
    use SegmentKind::*;

    // The parser stores h/H operands in x and v/V operands in y, leaving the
    // other coordinate at zero.
    let events = normalize(&[
        seg(MoveToAbs, 3.0, 4.0),
        seg(HorizontalLineToAbs, 10.0, 0.0),
        seg(VerticalLineToAbs, 0.0, 20.0),
        seg(HorizontalLineToRel, -5.0, 0.0),
        seg(VerticalLineToRel, 0.0, -6.0),
    ]);

    assert_eq!(
        events,
        vec![
            PathEvent::move_to(3.0, 4.0),
            PathEvent::line_to(10.0, 4.0),
            PathEvent::line_to(10.0, 20.0),
            PathEvent::line_to(5.0, 20.0),
            PathEvent::line_to(5.0, 14.0),
        ]
    );
}

#[test]
fn relative_axis_lines_ignore_the_other_axis() {
    use SegmentKind::*;

    let events = normalize(&[
        seg(MoveToAbs, 3.0, 4.0),
        seg(HorizontalLineToRel, 1.0, 99.0),
        seg(VerticalLineToRel, 99.0, 1.0),
    ]);

    assert_eq!(events[1], PathEvent::line_to(4.0, 4.0));
    assert_eq!(events[2], PathEvent::line_to(4.0, 5.0));
}

#[test]
fn close_returns_to_subpath_start() {
    use SegmentKind::*;

    let mut state = PathState::new();
    let mut events: Vec<PathEvent> = Vec::new();
    state.emit_segments(
        &[
            seg(MoveToAbs, 1.0, 1.0),
            seg(LineToAbs, 5.0, 1.0),
            seg(Close, 0.0, 0.0),
        ],
        &mut events,
    );

    assert_eq!(state.current_point(), offset(1.0, 1.0));
    assert_eq!(state.subpath_start(), offset(1.0, 1.0));
    assert_eq!(state.last_control_point(), offset(1.0, 1.0));
    assert_eq!(state.last_kind(), Close);

    // Relative commands after a close are relative to the sub-path start.
    state.emit_segment(&seg(LineToRel, 1.0, 0.0), &mut events);
    assert_eq!(
        events,
        vec![
            PathEvent::move_to(1.0, 1.0),
            PathEvent::line_to(5.0, 1.0),
            PathEvent::Close,
            PathEvent::line_to(2.0, 1.0),
        ]
    );
}

#[test]
fn smooth_cubic_reflection() {
    use SegmentKind::*;

    let events = normalize(&[
        seg(MoveToAbs, 0.0, 0.0),
        curve(CubicToAbs, (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)),
        curve(SmoothCubicToAbs, (0.0, 0.0), (20.0, -10.0), (20.0, 0.0)),
        curve(SmoothCubicToRel, (0.0, 0.0), (10.0, 10.0), (10.0, 0.0)),
    ]);

    assert_eq!(
        events[2],
        PathEvent::cubic_to(10.0, -10.0, 20.0, -10.0, 20.0, 0.0)
    );
    assert_eq!(
        events[3],
        PathEvent::cubic_to(20.0, 10.0, 30.0, 10.0, 30.0, 0.0)
    );
}

#[test]
fn smooth_curves_after_unrelated_commands() {
    use SegmentKind::*;

    // After a line, the implicit control point is the current point.
    let events = normalize(&[
        seg(MoveToAbs, 0.0, 0.0),
        curve(CubicToAbs, (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)),
        seg(LineToAbs, 20.0, 0.0),
        curve(SmoothCubicToAbs, (0.0, 0.0), (30.0, 10.0), (30.0, 0.0)),
    ]);
    assert_eq!(
        events[3],
        PathEvent::cubic_to(20.0, 0.0, 30.0, 10.0, 30.0, 0.0)
    );

    // A quadratic control point is not reflected by a smooth cubic, and
    // the other way around.
    let events = normalize(&[
        seg(MoveToAbs, 0.0, 0.0),
        curve(QuadraticToAbs, (5.0, 10.0), (0.0, 0.0), (10.0, 0.0)),
        curve(SmoothCubicToAbs, (0.0, 0.0), (20.0, 10.0), (20.0, 0.0)),
        seg(SmoothQuadraticToAbs, 30.0, 0.0),
    ]);
    assert_eq!(
        events[2],
        PathEvent::cubic_to(10.0, 0.0, 20.0, 10.0, 20.0, 0.0)
    );
    assert_eq!(
        events[3],
        PathEvent::cubic_to(20.0, 0.0, 70.0 / 3.0, 0.0, 30.0, 0.0)
    );
}

#[test]
fn smooth_quadratic_reflection() {
    use SegmentKind::*;

    let events = normalize(&[
        seg(MoveToAbs, 20.0, 30.0),
        curve(QuadraticToAbs, (40.0, 5.0), (0.0, 0.0), (60.0, 30.0)),
        seg(SmoothQuadraticToAbs, 100.0, 30.0),
        seg(SmoothQuadraticToRel, 40.0, 0.0),
    ]);

    let trace: Vec<String> = events.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        trace,
        vec![
            "moveTo(20.0000, 30.0000)",
            "cubicTo(33.3333, 13.3333, 46.6667, 13.3333, 60.0000, 30.0000)",
            "cubicTo(73.3333, 46.6667, 86.6667, 46.6667, 100.0000, 30.0000)",
            "cubicTo(113.3333, 13.3333, 126.6667, 13.3333, 140.0000, 30.0000)",
        ]
    );
}

#[test]
fn degenerate_arcs_become_lines() {
    use SegmentKind::*;

    let mut zero_radius = seg(ArcToAbs, 10.0, 0.0);
    zero_radius.control1 = offset(0.0, 5.0);

    let mut same_point = seg(ArcToRel, 0.0, 0.0);
    same_point.control1 = offset(5.0, 5.0);

    let events = normalize(&[seg(MoveToAbs, 0.0, 0.0), zero_radius, same_point]);

    assert_eq!(
        events,
        vec![
            PathEvent::move_to(0.0, 0.0),
            PathEvent::line_to(10.0, 0.0),
            PathEvent::line_to(10.0, 0.0),
        ]
    );
}

#[test]
fn arc_updates_current_point() {
    use SegmentKind::*;

    let mut arc = seg(ArcToRel, 10.0, 0.0);
    arc.control1 = offset(5.0, 5.0);
    arc.arc_sweep = true;

    let mut state = PathState::new();
    let mut recorder = PathRecorder::new();
    state.emit_segments(&[seg(MoveToAbs, 0.0, 0.0), arc], &mut recorder);

    assert_eq!(recorder.len(), 3);
    assert_eq!(state.current_point(), offset(10.0, 0.0));
    assert_eq!(state.last_control_point(), offset(10.0, 0.0));
    match recorder.events()[2] {
        PathEvent::CubicTo { to, .. } => {
            assert!((to - offset(10.0, 0.0)).square_length() < 1e-12);
        }
        evt => panic!("unexpected event {:?}", evt),
    }
}

#[test]
fn independent_states_are_deterministic() {
    use SegmentKind::*;

    let mut arc = seg(ArcToAbs, 4.0, 1.0);
    arc.control1 = offset(3.0, 2.0);
    arc.arc_rotation = 45.0;
    arc.arc_large = true;

    let segments = [
        seg(MoveToAbs, 0.0, 0.0),
        curve(CubicToRel, (1.0, 2.0), (3.0, 4.0), (5.0, 0.0)),
        curve(SmoothCubicToRel, (0.0, 0.0), (1.0, 1.0), (2.0, 0.0)),
        arc,
        seg(SmoothQuadraticToAbs, 8.0, 8.0),
        seg(Close, 0.0, 0.0),
    ];

    assert_eq!(normalize(&segments), normalize(&segments));
}
