//! The interface between the normalizer and whatever consumes the path.
//!
//! A [`PathSink`](trait.PathSink.html) receives absolute coordinates only: relative
//! commands, shorthand curves, quadratic curves and arcs have all been resolved
//! into move-to, line-to, cubic-to and close calls by the time they reach it.
//!
//! ## Examples
//!
//! ```
//! use pathdata_path::{PathEvent, PathRecorder, PathSink};
//! use pathdata_path::geom::offset;
//!
//! let mut recorder = PathRecorder::new();
//! recorder.move_to(0.0, 0.0);
//! recorder.line_to(1.0, 0.0);
//! recorder.cubic_to(2.0, 0.0, 2.0, 1.0, 1.0, 1.0);
//! recorder.close();
//!
//! assert_eq!(recorder.events()[1], PathEvent::LineTo(offset(1.0, 0.0)));
//! ```

use crate::PathEvent;

/// The four operations a path consumer must provide.
///
/// Implement this for a renderer, a path data structure or a test double.
pub trait PathSink {
    /// Start a new sub-path at the given position.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a line segment from the current position.
    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a cubic bézier segment from the current position, with control
    /// points `(x1, y1)` and `(x2, y2)` and end point `(x3, y3)`.
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);

    /// Closes the current sub-path back to its first point.
    fn close(&mut self);

    /// Forward a recorded event to this sink.
    fn path_event(&mut self, event: PathEvent) {
        match event {
            PathEvent::MoveTo(to) => self.move_to(to.x, to.y),
            PathEvent::LineTo(to) => self.line_to(to.x, to.y),
            PathEvent::CubicTo { ctrl1, ctrl2, to } => {
                self.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)
            }
            PathEvent::Close => self.close(),
        }
    }
}

impl<'l, S: PathSink + ?Sized> PathSink for &'l mut S {
    #[inline]
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y);
    }

    #[inline]
    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y);
    }

    #[inline]
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        (**self).cubic_to(x1, y1, x2, y2, x3, y3);
    }

    #[inline]
    fn close(&mut self) {
        (**self).close();
    }
}

impl PathSink for Vec<PathEvent> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(PathEvent::move_to(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(PathEvent::line_to(x, y));
    }

    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.push(PathEvent::cubic_to(x1, y1, x2, y2, x3, y3));
    }

    fn close(&mut self) {
        self.push(PathEvent::Close);
    }
}

#[test]
fn forward_events() {
    use crate::geom::offset;

    let events = vec![
        PathEvent::MoveTo(offset(1.0, 2.0)),
        PathEvent::CubicTo {
            ctrl1: offset(1.0, 3.0),
            ctrl2: offset(2.0, 3.0),
            to: offset(2.0, 2.0),
        },
        PathEvent::LineTo(offset(1.0, 1.0)),
        PathEvent::Close,
    ];

    fn forward<S: PathSink>(mut sink: S, events: &[PathEvent]) {
        for evt in events {
            sink.path_event(*evt);
        }
    }

    let mut copy: Vec<PathEvent> = Vec::new();
    forward(&mut copy, &events);

    assert_eq!(copy, events);
}
