#![deny(bare_trait_objects)]

//! Parsing and normalization of SVG-style path data in Rust.
//!
//! # Crates
//!
//! This meta-crate (`pathdata`) reexports the following sub-crates for convenience:
//!
//! * **pathdata_geom** - Offsets, bézier segments and elliptic arc decomposition.
//! * **pathdata_path** - Path segments, the `PathSink` trait and the normalizer.
//! * **pathdata_parser** - The path data parser and the `write_path_data` driver.
//!
//! Each `pathdata_<name>` crate is reexported as a `<name>` module in `pathdata`. For example:
//!
//! ```ignore
//! extern crate pathdata_parser;
//! use pathdata_parser::SegmentParser;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate pathdata;
//! use pathdata::parser::SegmentParser;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Writing path data into a custom sink
//!
//! Whatever consumes the path only has to implement the four operations of
//! [`PathSink`](path/trait.PathSink.html). Everything else (relative coordinates,
//! shorthand curves, quadratic curves and arcs) is resolved before it gets there.
//!
//! ```
//! use pathdata::path::PathSink;
//! use pathdata::write_path_data;
//!
//! #[derive(Default)]
//! struct Bounds {
//!     min_x: f64,
//!     max_x: f64,
//!     subpaths: u32,
//! }
//!
//! impl Bounds {
//!     fn add(&mut self, x: f64) {
//!         self.min_x = self.min_x.min(x);
//!         self.max_x = self.max_x.max(x);
//!     }
//! }
//!
//! impl PathSink for Bounds {
//!     fn move_to(&mut self, x: f64, _y: f64) {
//!         self.subpaths += 1;
//!         self.add(x);
//!     }
//!     fn line_to(&mut self, x: f64, _y: f64) {
//!         self.add(x);
//!     }
//!     fn cubic_to(&mut self, x1: f64, _: f64, x2: f64, _: f64, x3: f64, _: f64) {
//!         self.add(x1);
//!         self.add(x2);
//!         self.add(x3);
//!     }
//!     fn close(&mut self) {}
//! }
//!
//! let mut bounds = Bounds::default();
//! write_path_data("M 1 1 h 4 v 4 h -6 z m 10 0 l 1 1", &mut bounds).unwrap();
//!
//! assert_eq!(bounds.subpaths, 2);
//! assert_eq!(bounds.min_x, -1.0);
//! assert_eq!(bounds.max_x, 12.0);
//! ```
//!
//! ## Recording and printing a path
//!
//! ```
//! use pathdata::path::PathRecorder;
//!
//! let mut recorder = PathRecorder::new();
//! pathdata::write_path_data("M20,30 Q40,5 60,30", &mut recorder).unwrap();
//!
//! assert_eq!(
//!     recorder.to_string(),
//!     "moveTo(20.0000, 30.0000)\ncubicTo(33.3333, 13.3333, 46.6667, 13.3333, 60.0000, 30.0000)"
//! );
//! ```

pub extern crate pathdata_parser;

pub use pathdata_parser as parser;
pub use parser::path;
pub use path::geom;

pub use parser::{write_path_data, ErrorKind, ParseError};
