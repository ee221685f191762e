#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::too_many_arguments)]

//! Path segments and the normalizer that turns them into drawing instructions.
//!
//! Parsed path data is a sequence of [`Segment`](struct.Segment.html)s which may use
//! relative coordinates, implicit control points, quadratic curves and elliptic arcs.
//! [`PathState`](struct.PathState.html) resolves all of these and forwards absolute
//! move-to, line-to, cubic-to and close calls to a [`PathSink`](trait.PathSink.html).
//!
//! This crate is reexported in [pathdata](https://docs.rs/pathdata/).
//!
//! # Examples
//!
//! ```
//! use pathdata_path::{PathRecorder, PathState, Segment, SegmentKind};
//! use pathdata_path::geom::offset;
//!
//! let mut quadratic = Segment::new(SegmentKind::QuadraticToAbs, offset(60.0, 30.0));
//! quadratic.control1 = offset(40.0, 5.0);
//!
//! let segments = [
//!     Segment::new(SegmentKind::MoveToAbs, offset(20.0, 30.0)),
//!     quadratic,
//!     Segment::new(SegmentKind::SmoothQuadraticToAbs, offset(100.0, 30.0)),
//! ];
//!
//! let mut recorder = PathRecorder::new();
//! PathState::new().emit_segments(&segments, &mut recorder);
//!
//! assert_eq!(recorder.trace()[2], "cubicTo(73.3333, 46.6667, 86.6667, 46.6667, 100.0000, 30.0000)");
//! ```

pub use pathdata_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod events;
mod normalizer;
mod segment;
pub mod sink;

pub use crate::events::{PathEvent, PathRecorder};
pub use crate::geom::{ArcFlags, Offset};
pub use crate::normalizer::PathState;
pub use crate::segment::{Segment, SegmentKind};
pub use crate::sink::PathSink;

pub mod traits {
    //! `pathdata_path` traits reexported here for convenience.

    pub use crate::sink::PathSink;
}
