use crate::geom::{offset, Offset};
use crate::sink::PathSink;

use std::fmt;

/// A primitive drawing instruction in absolute coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    MoveTo(Offset),
    LineTo(Offset),
    CubicTo {
        ctrl1: Offset,
        ctrl2: Offset,
        to: Offset,
    },
    Close,
}

impl PathEvent {
    pub fn move_to(x: f64, y: f64) -> Self {
        PathEvent::MoveTo(offset(x, y))
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        PathEvent::LineTo(offset(x, y))
    }

    pub fn cubic_to(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        PathEvent::CubicTo {
            ctrl1: offset(x1, y1),
            ctrl2: offset(x2, y2),
            to: offset(x3, y3),
        }
    }

    /// The end point of the event, `None` for `Close` which carries no position.
    pub fn to(&self) -> Option<Offset> {
        match *self {
            PathEvent::MoveTo(to) | PathEvent::LineTo(to) | PathEvent::CubicTo { to, .. } => {
                Some(to)
            }
            PathEvent::Close => None,
        }
    }
}

/// Renders the event with four decimals, for example `lineTo(1.0000, 2.5000)`.
impl fmt::Display for PathEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PathEvent::MoveTo(p) => write!(f, "moveTo({:.4}, {:.4})", p.x, p.y),
            PathEvent::LineTo(p) => write!(f, "lineTo({:.4}, {:.4})", p.x, p.y),
            PathEvent::CubicTo { ctrl1, ctrl2, to } => write!(
                f,
                "cubicTo({:.4}, {:.4}, {:.4}, {:.4}, {:.4}, {:.4})",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            PathEvent::Close => write!(f, "close()"),
        }
    }
}

/// A sink that stores every event it receives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathRecorder {
    events: Vec<PathEvent>,
}

impl PathRecorder {
    pub fn new() -> Self {
        PathRecorder { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        PathRecorder {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn events(&self) -> &[PathEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<PathEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// One formatted event per entry, see `PathEvent`'s `Display` implementation.
    pub fn trace(&self) -> Vec<String> {
        self.events.iter().map(|evt| evt.to_string()).collect()
    }

    /// Replay the recorded events into another sink.
    pub fn replay<S: PathSink>(&self, sink: &mut S) {
        for evt in &self.events {
            sink.path_event(*evt);
        }
    }
}

impl PathSink for PathRecorder {
    fn move_to(&mut self, x: f64, y: f64) {
        self.events.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.events.line_to(x, y);
    }

    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.events.cubic_to(x1, y1, x2, y2, x3, y3);
    }

    fn close(&mut self) {
        self.events.close();
    }
}

impl fmt::Display for PathRecorder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, evt) in self.events.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", evt)?;
        }
        Ok(())
    }
}

#[test]
fn event_display() {
    assert_eq!(
        PathEvent::move_to(20.0, 30.0).to_string(),
        "moveTo(20.0000, 30.0000)"
    );
    assert_eq!(
        PathEvent::cubic_to(100.0 / 3.0, 40.0 / 3.0, 140.0 / 3.0, 40.0 / 3.0, 60.0, 30.0)
            .to_string(),
        "cubicTo(33.3333, 13.3333, 46.6667, 13.3333, 60.0000, 30.0000)"
    );
    assert_eq!(PathEvent::Close.to_string(), "close()");
}

#[test]
fn recorder() {
    let mut recorder = PathRecorder::with_capacity(4);
    assert!(recorder.is_empty());

    recorder.move_to(0.0, 0.0);
    recorder.line_to(1.0, 2.0);
    recorder.close();

    assert_eq!(recorder.len(), 3);
    assert_eq!(recorder.events()[1].to(), Some(offset(1.0, 2.0)));
    assert_eq!(recorder.events()[2].to(), None);
    assert_eq!(
        recorder.trace(),
        vec!["moveTo(0.0000, 0.0000)", "lineTo(1.0000, 2.0000)", "close()"]
    );
    assert_eq!(
        recorder.to_string(),
        "moveTo(0.0000, 0.0000)\nlineTo(1.0000, 2.0000)\nclose()"
    );

    let mut copy = PathRecorder::new();
    recorder.replay(&mut copy);
    assert_eq!(copy, recorder);

    recorder.clear();
    assert!(recorder.is_empty());
    assert_eq!(copy.into_events().len(), 3);
}
