use crate::geom::{ArcFlags, Offset};

use std::fmt;

/// The command of a path segment, one variant per path data letter.
///
/// Every spatial command exists in an absolute (uppercase letter) and a relative
/// (lowercase letter) flavor. `Unknown` is only used by the parser to signal that
/// a byte is not a command letter and never appears in a parsed segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SegmentKind {
    Unknown,
    MoveToAbs,
    MoveToRel,
    LineToAbs,
    LineToRel,
    HorizontalLineToAbs,
    HorizontalLineToRel,
    VerticalLineToAbs,
    VerticalLineToRel,
    CubicToAbs,
    CubicToRel,
    SmoothCubicToAbs,
    SmoothCubicToRel,
    QuadraticToAbs,
    QuadraticToRel,
    SmoothQuadraticToAbs,
    SmoothQuadraticToRel,
    ArcToAbs,
    ArcToRel,
    Close,
}

impl SegmentKind {
    /// Map a path data command letter to its segment kind.
    pub fn from_letter(c: u8) -> Self {
        match c {
            b'M' => SegmentKind::MoveToAbs,
            b'm' => SegmentKind::MoveToRel,
            b'L' => SegmentKind::LineToAbs,
            b'l' => SegmentKind::LineToRel,
            b'H' => SegmentKind::HorizontalLineToAbs,
            b'h' => SegmentKind::HorizontalLineToRel,
            b'V' => SegmentKind::VerticalLineToAbs,
            b'v' => SegmentKind::VerticalLineToRel,
            b'C' => SegmentKind::CubicToAbs,
            b'c' => SegmentKind::CubicToRel,
            b'S' => SegmentKind::SmoothCubicToAbs,
            b's' => SegmentKind::SmoothCubicToRel,
            b'Q' => SegmentKind::QuadraticToAbs,
            b'q' => SegmentKind::QuadraticToRel,
            b'T' => SegmentKind::SmoothQuadraticToAbs,
            b't' => SegmentKind::SmoothQuadraticToRel,
            b'A' => SegmentKind::ArcToAbs,
            b'a' => SegmentKind::ArcToRel,
            b'Z' | b'z' => SegmentKind::Close,
            _ => SegmentKind::Unknown,
        }
    }

    /// The letter of this command, `None` for `Unknown`.
    ///
    /// Close is always reported as `Z`.
    pub fn letter(self) -> Option<char> {
        Some(match self {
            SegmentKind::Unknown => return None,
            SegmentKind::MoveToAbs => 'M',
            SegmentKind::MoveToRel => 'm',
            SegmentKind::LineToAbs => 'L',
            SegmentKind::LineToRel => 'l',
            SegmentKind::HorizontalLineToAbs => 'H',
            SegmentKind::HorizontalLineToRel => 'h',
            SegmentKind::VerticalLineToAbs => 'V',
            SegmentKind::VerticalLineToRel => 'v',
            SegmentKind::CubicToAbs => 'C',
            SegmentKind::CubicToRel => 'c',
            SegmentKind::SmoothCubicToAbs => 'S',
            SegmentKind::SmoothCubicToRel => 's',
            SegmentKind::QuadraticToAbs => 'Q',
            SegmentKind::QuadraticToRel => 'q',
            SegmentKind::SmoothQuadraticToAbs => 'T',
            SegmentKind::SmoothQuadraticToRel => 't',
            SegmentKind::ArcToAbs => 'A',
            SegmentKind::ArcToRel => 'a',
            SegmentKind::Close => 'Z',
        })
    }

    pub fn is_relative(self) -> bool {
        match self {
            SegmentKind::MoveToRel
            | SegmentKind::LineToRel
            | SegmentKind::HorizontalLineToRel
            | SegmentKind::VerticalLineToRel
            | SegmentKind::CubicToRel
            | SegmentKind::SmoothCubicToRel
            | SegmentKind::QuadraticToRel
            | SegmentKind::SmoothQuadraticToRel
            | SegmentKind::ArcToRel => true,
            _ => false,
        }
    }

    /// Cubic and smooth cubic commands, absolute or relative.
    pub fn is_cubic(self) -> bool {
        match self {
            SegmentKind::CubicToAbs
            | SegmentKind::CubicToRel
            | SegmentKind::SmoothCubicToAbs
            | SegmentKind::SmoothCubicToRel => true,
            _ => false,
        }
    }

    /// Quadratic and smooth quadratic commands, absolute or relative.
    pub fn is_quadratic(self) -> bool {
        match self {
            SegmentKind::QuadraticToAbs
            | SegmentKind::QuadraticToRel
            | SegmentKind::SmoothQuadraticToAbs
            | SegmentKind::SmoothQuadraticToRel => true,
            _ => false,
        }
    }

    /// The command that an implicit repetition of this one stands for.
    ///
    /// Extra coordinates after a move-to are treated as line-to commands. Close
    /// has no operands and can't be repeated.
    pub fn implicit_successor(self) -> SegmentKind {
        match self {
            SegmentKind::MoveToAbs => SegmentKind::LineToAbs,
            SegmentKind::MoveToRel => SegmentKind::LineToRel,
            SegmentKind::Close => SegmentKind::Unknown,
            other => other,
        }
    }
}

impl Default for SegmentKind {
    fn default() -> Self {
        SegmentKind::Unknown
    }
}

/// One parsed path command with its raw operands.
///
/// Coordinates are stored as written: relative commands hold offsets from the
/// current point and smooth commands leave the implicit control point zeroed.
/// Fields that a command doesn't use are zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Segment {
    pub kind: SegmentKind,
    pub target: Offset,
    /// First control point. Holds the radii for arcs.
    pub control1: Offset,
    pub control2: Offset,
    /// Arc x-axis rotation in degrees.
    pub arc_rotation: f64,
    pub arc_large: bool,
    pub arc_sweep: bool,
}

impl Segment {
    pub fn new(kind: SegmentKind, target: Offset) -> Self {
        Segment {
            kind,
            target,
            ..Segment::default()
        }
    }

    #[inline]
    pub fn arc_radii(&self) -> Offset {
        self.control1
    }

    #[inline]
    pub fn arc_flags(&self) -> ArcFlags {
        ArcFlags {
            large_arc: self.arc_large,
            sweep: self.arc_sweep,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = self.kind.letter().unwrap_or('?');
        match self.kind {
            SegmentKind::Unknown | SegmentKind::Close => write!(f, "{}", letter),
            SegmentKind::HorizontalLineToAbs | SegmentKind::HorizontalLineToRel => {
                write!(f, "{} {}", letter, self.target.x)
            }
            SegmentKind::VerticalLineToAbs | SegmentKind::VerticalLineToRel => {
                write!(f, "{} {}", letter, self.target.y)
            }
            SegmentKind::MoveToAbs
            | SegmentKind::MoveToRel
            | SegmentKind::LineToAbs
            | SegmentKind::LineToRel
            | SegmentKind::SmoothQuadraticToAbs
            | SegmentKind::SmoothQuadraticToRel => {
                write!(f, "{} {} {}", letter, self.target.x, self.target.y)
            }
            SegmentKind::QuadraticToAbs | SegmentKind::QuadraticToRel => write!(
                f,
                "{} {} {} {} {}",
                letter, self.control1.x, self.control1.y, self.target.x, self.target.y
            ),
            SegmentKind::SmoothCubicToAbs | SegmentKind::SmoothCubicToRel => write!(
                f,
                "{} {} {} {} {}",
                letter, self.control2.x, self.control2.y, self.target.x, self.target.y
            ),
            SegmentKind::CubicToAbs | SegmentKind::CubicToRel => write!(
                f,
                "{} {} {} {} {} {} {}",
                letter,
                self.control1.x,
                self.control1.y,
                self.control2.x,
                self.control2.y,
                self.target.x,
                self.target.y
            ),
            SegmentKind::ArcToAbs | SegmentKind::ArcToRel => write!(
                f,
                "{} {} {} {} {} {} {} {}",
                letter,
                self.control1.x,
                self.control1.y,
                self.arc_rotation,
                self.arc_large as u8,
                self.arc_sweep as u8,
                self.target.x,
                self.target.y
            ),
        }
    }
}

#[test]
fn letters_round_trip() {
    for &c in b"MmLlHhVvCcSsQqTtAaZ" {
        let kind = SegmentKind::from_letter(c);
        assert_ne!(kind, SegmentKind::Unknown);
        assert_eq!(kind.letter(), Some(c as char));
        assert_eq!(kind.is_relative(), (c as char).is_ascii_lowercase() && c != b'z');
    }

    assert_eq!(SegmentKind::from_letter(b'z'), SegmentKind::Close);
    assert_eq!(SegmentKind::from_letter(b'x'), SegmentKind::Unknown);
    assert_eq!(SegmentKind::from_letter(b'1'), SegmentKind::Unknown);
    assert_eq!(SegmentKind::Unknown.letter(), None);
}

#[test]
fn implicit_successors() {
    assert_eq!(SegmentKind::MoveToAbs.implicit_successor(), SegmentKind::LineToAbs);
    assert_eq!(SegmentKind::MoveToRel.implicit_successor(), SegmentKind::LineToRel);
    assert_eq!(SegmentKind::Close.implicit_successor(), SegmentKind::Unknown);
    assert_eq!(SegmentKind::ArcToRel.implicit_successor(), SegmentKind::ArcToRel);
    assert_eq!(
        SegmentKind::SmoothCubicToAbs.implicit_successor(),
        SegmentKind::SmoothCubicToAbs
    );
}

#[test]
fn families() {
    assert!(SegmentKind::SmoothCubicToRel.is_cubic());
    assert!(!SegmentKind::SmoothCubicToRel.is_quadratic());
    assert!(SegmentKind::SmoothQuadraticToAbs.is_quadratic());
    assert!(!SegmentKind::ArcToAbs.is_cubic());
    assert!(!SegmentKind::ArcToAbs.is_quadratic());
}

#[test]
fn display() {
    use crate::geom::offset;

    let mut arc = Segment::new(SegmentKind::ArcToRel, offset(-0.866, -0.5));
    arc.control1 = offset(0.5, 1.5);
    arc.arc_rotation = 30.0;
    arc.arc_large = true;
    arc.arc_sweep = true;
    assert_eq!(format!("{}", arc), "a 0.5 1.5 30 1 1 -0.866 -0.5");

    let line = Segment::new(SegmentKind::HorizontalLineToAbs, offset(3.0, 0.0));
    assert_eq!(format!("{}", line), "H 3");
    assert_eq!(format!("{}", Segment::new(SegmentKind::Close, offset(1.0, 1.0))), "Z");
}
