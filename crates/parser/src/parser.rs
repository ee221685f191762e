use crate::error::{NumberError, ParseError};
use crate::path::geom::{offset, Offset};
use crate::path::{Segment, SegmentKind};

const MIN_EXPONENT: f64 = -37.0;
const MAX_EXPONENT: f64 = 38.0;

// A cursor over the bytes of the path data.
struct Source<'l> {
    src: &'l str,
    bytes: &'l [u8],
    position: usize,
}

impl<'l> Source<'l> {
    fn new(src: &'l str) -> Self {
        Source {
            src,
            bytes: src.as_bytes(),
            position: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    #[inline]
    fn peek_digit(&self) -> Option<u8> {
        self.peek().filter(u8::is_ascii_digit)
    }

    #[inline]
    fn advance_one(&mut self) {
        self.position += 1;
    }

    fn finished(&self) -> bool {
        self.position >= self.bytes.len()
    }

    // The character starting at `position`. Only ascii bytes are ever consumed,
    // so the position always lies on a char boundary.
    fn char_at(&self, position: usize) -> char {
        self.src
            .get(position..)
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0C') = self.peek() {
            self.advance_one();
        }
    }

    // Whitespace with at most one comma in it.
    fn skip_separator(&mut self) {
        self.skip_whitespace();
        if self.peek() == Some(b',') {
            self.advance_one();
            self.skip_whitespace();
        }
    }

    // An `e` or `E` starts an exponent unless it is the beginning of an `em` or `ex` unit.
    fn at_exponent(&self) -> bool {
        match self.peek() {
            Some(b'e' | b'E') => {
                let next = self.bytes.get(self.position + 1).copied();
                !matches!(next, Some(b'x' | b'm'))
            }
            _ => false,
        }
    }

    fn parse_number(&mut self) -> Result<f64, ParseError> {
        self.skip_whitespace();

        let start = self.position;

        let mut sign = 1.0;
        match self.peek() {
            Some(b'+') => self.advance_one(),
            Some(b'-') => {
                sign = -1.0;
                self.advance_one();
            }
            _ => {}
        }

        match self.peek() {
            None => {
                return Err(ParseError::UnexpectedEnd {
                    position: self.position,
                });
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => {}
            Some(_) => {
                return Err(ParseError::Number {
                    reason: NumberError::InvalidStart(self.char_at(self.position)),
                    position: start,
                });
            }
        }

        let mut integer = 0.0;
        while let Some(digit) = self.peek_digit() {
            integer = integer * 10.0 + f64::from(digit - b'0');
            self.advance_one();
        }

        if !is_valid_range(integer) {
            return Err(ParseError::Overflow { position: start });
        }

        let mut decimal = 0.0;
        if self.peek() == Some(b'.') {
            self.advance_one();

            if self.peek_digit().is_none() {
                return Err(ParseError::Number {
                    reason: NumberError::MissingFractionDigits,
                    position: start,
                });
            }

            let mut frac = 1.0;
            while let Some(digit) = self.peek_digit() {
                frac *= 0.1;
                decimal += f64::from(digit - b'0') * frac;
                self.advance_one();
            }
        }

        let mut number = (integer + decimal) * sign;

        if self.at_exponent() {
            self.advance_one();

            let mut exponent_sign = 1.0;
            match self.peek() {
                Some(b'+') => self.advance_one(),
                Some(b'-') => {
                    exponent_sign = -1.0;
                    self.advance_one();
                }
                _ => {}
            }

            if self.peek_digit().is_none() {
                return Err(ParseError::Number {
                    reason: NumberError::MissingExponentDigits,
                    position: start,
                });
            }

            let mut exponent = 0.0;
            while let Some(digit) = self.peek_digit() {
                exponent = exponent * 10.0 + f64::from(digit - b'0');
                self.advance_one();
            }
            exponent *= exponent_sign;

            if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
                return Err(ParseError::Exponent {
                    exponent,
                    position: start,
                });
            }

            if exponent != 0.0 {
                number *= 10f64.powf(exponent);
            }
        }

        if !is_valid_range(number) {
            return Err(ParseError::Overflow { position: start });
        }

        self.skip_separator();

        Ok(number)
    }

    fn parse_point(&mut self) -> Result<Offset, ParseError> {
        let x = self.parse_number()?;
        let y = self.parse_number()?;

        Ok(offset(x, y))
    }

    fn parse_flag(&mut self) -> Result<bool, ParseError> {
        let position = self.position;
        let flag = match self.peek() {
            Some(b'0') => false,
            Some(b'1') => true,
            Some(_) => {
                return Err(ParseError::Flag {
                    src: self.char_at(position),
                    position,
                });
            }
            None => return Err(ParseError::UnexpectedEnd { position }),
        };

        self.advance_one();
        self.skip_separator();

        Ok(flag)
    }
}

fn is_valid_range(value: f64) -> bool {
    (-f64::MAX..=f64::MAX).contains(&value)
}

fn is_number_start(c: u8) -> bool {
    c.is_ascii_digit() || c == b'+' || c == b'-' || c == b'.'
}

/// Splits path data into [`Segment`](../pathdata_path/struct.Segment.html)s.
///
/// The parser yields segments as written, with relative coordinates left relative.
/// Pass them to a [`PathState`](../pathdata_path/struct.PathState.html) to get absolute
/// drawing instructions.
///
/// Once an error has been produced the iterator is exhausted.
///
/// # Examples
///
/// ```
/// use pathdata_parser::SegmentParser;
/// use pathdata_parser::path::SegmentKind;
///
/// let kinds: Vec<SegmentKind> = SegmentParser::new("M 0 0 10 10 z")
///     .map(|segment| segment.unwrap().kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     [SegmentKind::MoveToAbs, SegmentKind::LineToAbs, SegmentKind::Close]
/// );
/// ```
pub struct SegmentParser<'l> {
    src: Source<'l>,
    previous_kind: SegmentKind,
    finished: bool,
}

impl<'l> SegmentParser<'l> {
    pub fn new(src: &'l str) -> Self {
        let mut src = Source::new(src);
        src.skip_whitespace();

        SegmentParser {
            src,
            previous_kind: SegmentKind::Unknown,
            finished: false,
        }
    }

    /// Whether anything other than whitespace is left to read.
    pub fn has_more_data(&self) -> bool {
        !self.finished && !self.src.finished()
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.src.position
    }

    /// Reads the next segment, or returns `Ok(None)` at the end of the input.
    pub fn parse_segment(&mut self) -> Result<Option<Segment>, ParseError> {
        let lookahead = match self.src.peek() {
            Some(c) => c,
            None => return Ok(None),
        };

        let position = self.src.position;
        let mut kind = SegmentKind::from_letter(lookahead);

        if self.previous_kind == SegmentKind::Unknown {
            if kind != SegmentKind::MoveToAbs && kind != SegmentKind::MoveToRel {
                return Err(ParseError::MissingMoveTo {
                    command: self.src.char_at(position),
                    position,
                });
            }
            self.src.advance_one();
        } else if kind == SegmentKind::Unknown {
            if is_number_start(lookahead) {
                kind = self.previous_kind.implicit_successor();
            }
        } else {
            self.src.advance_one();
        }

        let mut segment = Segment::new(kind, Offset::zero());

        match kind {
            SegmentKind::MoveToAbs
            | SegmentKind::MoveToRel
            | SegmentKind::LineToAbs
            | SegmentKind::LineToRel
            | SegmentKind::SmoothQuadraticToAbs
            | SegmentKind::SmoothQuadraticToRel => {
                segment.target = self.src.parse_point()?;
            }
            SegmentKind::HorizontalLineToAbs | SegmentKind::HorizontalLineToRel => {
                segment.target.x = self.src.parse_number()?;
            }
            SegmentKind::VerticalLineToAbs | SegmentKind::VerticalLineToRel => {
                segment.target.y = self.src.parse_number()?;
            }
            SegmentKind::CubicToAbs | SegmentKind::CubicToRel => {
                segment.control1 = self.src.parse_point()?;
                segment.control2 = self.src.parse_point()?;
                segment.target = self.src.parse_point()?;
            }
            SegmentKind::SmoothCubicToAbs | SegmentKind::SmoothCubicToRel => {
                segment.control2 = self.src.parse_point()?;
                segment.target = self.src.parse_point()?;
            }
            SegmentKind::QuadraticToAbs | SegmentKind::QuadraticToRel => {
                segment.control1 = self.src.parse_point()?;
                segment.target = self.src.parse_point()?;
            }
            SegmentKind::ArcToAbs | SegmentKind::ArcToRel => {
                segment.control1 = self.src.parse_point()?;
                segment.arc_rotation = self.src.parse_number()?;
                segment.arc_large = self.src.parse_flag()?;
                segment.arc_sweep = self.src.parse_flag()?;
                segment.target = self.src.parse_point()?;
            }
            SegmentKind::Close => {
                self.src.skip_whitespace();
            }
            SegmentKind::Unknown => {
                return Err(ParseError::Command {
                    command: self.src.char_at(position),
                    position,
                });
            }
        }

        self.previous_kind = kind;

        log::trace!("segment {}", segment);

        Ok(Some(segment))
    }
}

impl<'l> Iterator for SegmentParser<'l> {
    type Item = Result<Segment, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.parse_segment() {
            Ok(Some(segment)) => Some(Ok(segment)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<'l> std::iter::FusedIterator for SegmentParser<'l> {}

#[cfg(test)]
fn parse(src: &str) -> Result<Vec<Segment>, ParseError> {
    SegmentParser::new(src).collect()
}

#[cfg(test)]
fn parse_err(src: &str) -> ParseError {
    match parse(src) {
        Err(err) => err,
        Ok(segments) => panic!("{:?} parsed as {:?}", src, segments),
    }
}

#[cfg(test)]
fn approx_eq(a: Offset, b: Offset) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn empty() {
    assert_eq!(parse(""), Ok(Vec::new()));
    assert_eq!(parse(" \t\r\n\x0C "), Ok(Vec::new()));

    let parser = SegmentParser::new("   ");
    assert!(!parser.has_more_data());
    assert_eq!(parser.position(), 3);
}

#[test]
fn simple_square() {
    let segments = parse("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();
    let kinds: Vec<SegmentKind> = segments.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        [
            SegmentKind::MoveToAbs,
            SegmentKind::LineToAbs,
            SegmentKind::LineToAbs,
            SegmentKind::LineToAbs,
            SegmentKind::Close,
        ]
    );
    assert_eq!(segments[2].target, offset(1.0, 1.0));
}

#[test]
fn implicit_commands() {
    let segments = parse("M 1 2 3 4").unwrap();
    assert_eq!(segments[0], Segment::new(SegmentKind::MoveToAbs, offset(1.0, 2.0)));
    assert_eq!(segments[1], Segment::new(SegmentKind::LineToAbs, offset(3.0, 4.0)));

    let segments = parse("m 1 2 3 4 5 6").unwrap();
    assert_eq!(segments[0].kind, SegmentKind::MoveToRel);
    assert_eq!(segments[1].kind, SegmentKind::LineToRel);
    assert_eq!(segments[2].kind, SegmentKind::LineToRel);

    let segments = parse("M 0 0 c 1 1 2 2 3 3 4 4 5 5 6 6").unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[2].kind, SegmentKind::CubicToRel);
    assert_eq!(segments[2].control1, offset(4.0, 4.0));
    assert_eq!(segments[2].control2, offset(5.0, 5.0));
    assert_eq!(segments[2].target, offset(6.0, 6.0));

    let segments = parse("M 0 0 H 1 -2 +3").unwrap();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[2], Segment::new(SegmentKind::HorizontalLineToAbs, offset(-2.0, 0.0)));

    let segments = parse("M 0 0 L 1 1 .5 .5").unwrap();
    assert_eq!(segments[2], Segment::new(SegmentKind::LineToAbs, offset(0.5, 0.5)));
}

#[test]
fn commands_after_close() {
    let segments = parse("M 0 0 z L 1 1").unwrap();
    assert_eq!(segments[1].kind, SegmentKind::Close);
    assert_eq!(segments[2].kind, SegmentKind::LineToAbs);

    let segments = parse("M 0 0 zm 1 1").unwrap();
    assert_eq!(segments[2].kind, SegmentKind::MoveToRel);

    assert_eq!(
        parse_err("M 0 0 z 1 1"),
        ParseError::Command {
            command: '1',
            position: 8
        }
    );
}

#[test]
fn axis_lines() {
    let segments = parse("M 0 0 H 5 v 3").unwrap();
    assert_eq!(segments[1], Segment::new(SegmentKind::HorizontalLineToAbs, offset(5.0, 0.0)));
    assert_eq!(segments[2], Segment::new(SegmentKind::VerticalLineToRel, offset(0.0, 3.0)));
}

#[test]
fn arcs() {
    let segments = parse("M5.5 5.5a.5 1.5 30 1 1 -.866 -.5 .5 1.5 30 1 1 .866 .5z").unwrap();
    assert_eq!(segments.len(), 4);

    let arc = segments[1];
    assert_eq!(arc.kind, SegmentKind::ArcToRel);
    assert_eq!(arc.arc_radii(), offset(0.5, 1.5));
    assert_eq!(arc.arc_rotation, 30.0);
    assert!(arc.arc_large);
    assert!(arc.arc_sweep);
    assert!(approx_eq(arc.target, offset(-0.866, -0.5)));

    assert_eq!(segments[2].kind, SegmentKind::ArcToRel);
    assert!(approx_eq(segments[2].target, offset(0.866, 0.5)));
    assert_eq!(segments[3].kind, SegmentKind::Close);

    // Flags don't need to be separated from what follows.
    let segments = parse("M0 0a1 1 0 015 5").unwrap();
    assert!(!segments[1].arc_large);
    assert!(segments[1].arc_sweep);
    assert_eq!(segments[1].target, offset(5.0, 5.0));

    let segments = parse("M0 0A1,1,0,1,0,5,5").unwrap();
    assert!(segments[1].arc_large);
    assert!(!segments[1].arc_sweep);
}

#[test]
fn invalid_flags() {
    assert_eq!(
        parse_err("M 0 0 A 1 1 0 2 0 5 5"),
        ParseError::Flag {
            src: '2',
            position: 14
        }
    );
    assert_eq!(
        parse_err("M 0 0 A 1 1 0 1"),
        ParseError::UnexpectedEnd { position: 15 }
    );
}

#[test]
fn missing_move_to() {
    assert_eq!(
        parse_err("L 1 2"),
        ParseError::MissingMoveTo {
            command: 'L',
            position: 0
        }
    );
    assert_eq!(
        parse_err("  10 20"),
        ParseError::MissingMoveTo {
            command: '1',
            position: 2
        }
    );
}

#[test]
fn invalid_cmd() {
    assert_eq!(
        parse_err("M 0 0 x 1"),
        ParseError::Command {
            command: 'x',
            position: 6
        }
    );
    assert_eq!(
        parse_err("M 0 0 \u{e9} 1"),
        ParseError::Command {
            command: '\u{e9}',
            position: 6
        }
    );
}

#[test]
fn unexpected_end() {
    assert_eq!(parse_err("M"), ParseError::UnexpectedEnd { position: 1 });
    assert_eq!(parse_err("M 1"), ParseError::UnexpectedEnd { position: 3 });
    assert_eq!(parse_err("M 1 2 L 3 -"), ParseError::UnexpectedEnd { position: 11 });
}

#[test]
fn numbers() {
    // Equivalent to "M 0.6 0.5".
    let segments = parse("M 0.6.5").unwrap();
    assert!(approx_eq(segments[0].target, offset(0.6, 0.5)));

    let segments = parse("M.5-.5").unwrap();
    assert_eq!(segments[0].target, offset(0.5, -0.5));

    let segments = parse("M +1 , 2").unwrap();
    assert_eq!(segments[0].target, offset(1.0, 2.0));

    let segments = parse("M 1e2 -1E-1").unwrap();
    assert!(approx_eq(segments[0].target, offset(100.0, -0.1)));

    let segments = parse("M 25e+0 1e38").unwrap();
    assert_eq!(segments[0].target.x, 25.0);
    assert!(segments[0].target.y > 9.9e37);
}

#[test]
fn unit_suffix_is_not_an_exponent() {
    assert_eq!(
        parse_err("M 1em 2 3"),
        ParseError::Number {
            reason: NumberError::InvalidStart('e'),
            position: 3
        }
    );
    assert_eq!(
        parse_err("M 1 2ex"),
        ParseError::Command {
            command: 'e',
            position: 5
        }
    );
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| match parse(src) {
        Err(ParseError::Number { .. }) => true,
        r => {
            println!("{:?}", r);
            false
        }
    };

    assert!(bad_number("M 0 --1"));
    assert!(bad_number("M 0 1ee2"));
    assert!(bad_number("M 0 1e--1"));
    assert!(bad_number("M 0 *2"));
    assert!(bad_number("M 0 e"));
    assert!(bad_number("M 0 1e"));
    assert!(bad_number("M 0 1. 2"));
    assert!(bad_number("M . 2"));
    assert!(bad_number("M 1,,2"));

    assert_eq!(
        parse_err("M 0 1.x"),
        ParseError::Number {
            reason: NumberError::MissingFractionDigits,
            position: 4
        }
    );
}

#[test]
fn numbers_out_of_range() {
    assert_eq!(
        parse_err("M 1e39 0"),
        ParseError::Exponent {
            exponent: 39.0,
            position: 2
        }
    );
    assert_eq!(
        parse_err("M 0 1e-38"),
        ParseError::Exponent {
            exponent: -38.0,
            position: 4
        }
    );
    assert!(parse("M 1e-37 1e38").is_ok());

    let huge = format!("M 1{} 0", "0".repeat(400));
    assert_eq!(parse_err(&huge), ParseError::Overflow { position: 2 });

    // Finite mantissa and exponent in range, but their product is not.
    let huge = format!("M 1{}e38 0", "0".repeat(300));
    assert_eq!(parse_err(&huge), ParseError::Overflow { position: 2 });
}

#[test]
fn iterator_stops_after_error() {
    let mut parser = SegmentParser::new("M 0 0 L 1 1 x 2 2 L 3 3");

    assert!(matches!(parser.next(), Some(Ok(_))));
    assert!(matches!(parser.next(), Some(Ok(_))));
    assert!(matches!(parser.next(), Some(Err(ParseError::Command { .. }))));
    assert_eq!(parser.next(), None);
    assert_eq!(parser.next(), None);
    assert!(!parser.has_more_data());
}

#[test]
fn trailing_whitespace_after_close() {
    let mut parser = SegmentParser::new("M 0 0 z \n ");
    assert!(parser.has_more_data());
    assert_eq!(parser.parse_segment().unwrap().map(|s| s.kind), Some(SegmentKind::MoveToAbs));
    assert_eq!(parser.parse_segment().unwrap().map(|s| s.kind), Some(SegmentKind::Close));
    assert!(!parser.has_more_data());
    assert_eq!(parser.parse_segment(), Ok(None));
}
