#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Parsing of SVG-style path data.
//!
//! [`SegmentParser`](struct.SegmentParser.html) turns a path data string into a sequence of
//! segments, and [`write_path_data`](fn.write_path_data.html) drives the whole pipeline,
//! normalizing each segment into a [`PathSink`](../pathdata_path/trait.PathSink.html) as
//! soon as it has been read.
//!
//! This crate is reexported in [pathdata](https://docs.rs/pathdata/).
//!
//! # Examples
//!
//! ```
//! use pathdata_parser::write_path_data;
//! use pathdata_parser::path::PathRecorder;
//!
//! let mut recorder = PathRecorder::new();
//! write_path_data("M 10 10 h 5 v 5 z", &mut recorder).unwrap();
//!
//! assert_eq!(
//!     recorder.trace(),
//!     [
//!         "moveTo(10.0000, 10.0000)",
//!         "lineTo(15.0000, 10.0000)",
//!         "lineTo(15.0000, 15.0000)",
//!         "close()",
//!     ]
//! );
//! ```

pub use pathdata_path as path;

mod error;
mod parser;

pub use crate::error::{ErrorKind, NumberError, ParseError};
pub use crate::parser::SegmentParser;

use crate::path::{PathSink, PathState, Segment};

/// Parses `src` and forwards the normalized path to `sink`.
///
/// Segments are emitted as they are parsed: when an error is returned, the
/// sink has already received everything that preceded it.
pub fn write_path_data<S: PathSink + ?Sized>(src: &str, sink: &mut S) -> Result<(), ParseError> {
    let mut state = PathState::new();

    for segment in SegmentParser::new(src) {
        let segment = segment.map_err(|err| {
            log::debug!("stopped parsing path data: {}", err);
            err
        })?;

        state.emit_segment(&segment, sink);
    }

    Ok(())
}

/// Parses `src` into a list of segments without normalizing them.
pub fn parse_segments(src: &str) -> Result<Vec<Segment>, ParseError> {
    SegmentParser::new(src).collect()
}

#[cfg(test)]
use crate::path::{PathEvent, PathRecorder};

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn empty() {
    init_logger();

    let mut recorder = PathRecorder::new();
    write_path_data("", &mut recorder).unwrap();
    write_path_data("  \n\t ", &mut recorder).unwrap();
    assert!(recorder.is_empty());
}

#[test]
fn smooth_quadratic_path() {
    init_logger();

    let mut recorder = PathRecorder::new();
    write_path_data("M20,30 Q40,5 60,30 T100,30", &mut recorder).unwrap();

    assert_eq!(
        recorder.trace(),
        [
            "moveTo(20.0000, 30.0000)",
            "cubicTo(33.3333, 13.3333, 46.6667, 13.3333, 60.0000, 30.0000)",
            "cubicTo(73.3333, 46.6667, 86.6667, 46.6667, 100.0000, 30.0000)",
        ]
    );
}

#[test]
fn arcs_become_cubics() {
    init_logger();

    let mut events: Vec<PathEvent> = Vec::new();
    write_path_data(
        "M5.5 5.5a.5 1.5 30 1 1 -.866 -.5 .5 1.5 30 1 1 .866 .5z",
        &mut events,
    )
    .unwrap();

    assert_eq!(events.len(), 8);
    assert_eq!(events[0], PathEvent::move_to(5.5, 5.5));
    assert_eq!(events[7], PathEvent::Close);

    assert_eq!(
        events[3].to_string(),
        "cubicTo(4.1967, 5.9451, 4.3638, 5.4655, 4.6340, 5.0000)"
    );
    assert_eq!(
        events[6].to_string(),
        "cubicTo(5.9373, 4.5549, 5.7702, 5.0345, 5.5000, 5.5000)"
    );
}

#[test]
fn missing_operand() {
    init_logger();

    let mut recorder = PathRecorder::new();
    let err = write_path_data("M", &mut recorder).unwrap_err();

    assert_eq!(err, ParseError::UnexpectedEnd { position: 1 });
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(recorder.is_empty());
}

#[test]
fn partial_output_on_error() {
    init_logger();

    let mut recorder = PathRecorder::new();
    let err = write_path_data("M 1 2 L 3 4 L 5 *", &mut recorder).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Numeric);
    assert_eq!(err.position(), 16);
    assert_eq!(
        recorder.trace(),
        ["moveTo(1.0000, 2.0000)", "lineTo(3.0000, 4.0000)"]
    );
}

#[test]
fn segments_are_left_relative() {
    let segments = parse_segments("m 1 1 l 2 2").unwrap();
    assert_eq!(segments[1].target, crate::path::geom::offset(2.0, 2.0));
}
