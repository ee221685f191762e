#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives for path data on top of euclid.
//!
//! This crate is reexported in [pathdata](https://docs.rs/pathdata/).
//!
//! # Overview.
//!
//! This crate implements the maths needed to normalize path data:
//!
//! - the [`Offset`](struct.Offset.html) value type used for points and vectors,
//! - quadratic to cubic bézier degree elevation,
//! - decomposition of SVG-style elliptic arcs into cubic bézier curves.
//!
//! All computations use `f64`.

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
mod cubic_bezier;
mod offset;
mod quadratic_bezier;

#[doc(inline)]
pub use crate::arc::{ArcFlags, SvgArc};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::offset::{offset, Offset};
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;

/// Alias for `euclid::default::Point2D<f64>`.
pub type Point = euclid::default::Point2D<f64>;

/// Alias for `euclid::default::Vector2D<f64>`.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for `euclid::default::Transform2D<f64>`.
pub type Transform = euclid::default::Transform2D<f64>;

/// Alias for `euclid::default::Rotation2D<f64>`.
pub type Rotation = euclid::default::Rotation2D<f64>;

/// An angle in radians.
pub type Angle = euclid::Angle<f64>;
