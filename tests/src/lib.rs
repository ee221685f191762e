//! Reference paths and helpers shared by the integration tests and the benchmarks.

use pathdata::path::PathEvent;

/// A quadratic curve followed by its smooth continuation.
pub const SMOOTH_QUADRATIC: &str = "M20,30 Q40,5 60,30 T100,30";

/// Two relative elliptic arcs with a rotated frame, closed.
pub const ROTATED_ARCS: &str = "M5.5 5.5a.5 1.5 30 1 1-.866-.5.5 1.5 30 1 1 .866.5z";

/// A heart shaped icon, written the way icon sets usually compress their paths.
pub const HEART: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

/// A full circle made of two half-circle arcs.
pub const CIRCLE: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z";

/// A rounded rectangle with a cut out, using every command family.
pub const ROUNDED_FRAME: &str = "M 4,1 H 20 A 3 3 0 0 1 23 4 V 20 Q 23 23 20 23 H 4 T 1 20 V 4 C 1 2 2 1 4 1 Z \
     m 4 4 h 8 s 4 0 4 4 v 6 l -2 2 h -10 c -1 0 -2 -1 -2 -2 v -8 q 0 -2 2 -2 z";

/// Every reference path, for tests and benchmarks that iterate over all of them.
pub const ALL_PATHS: [&str; 5] = [SMOOTH_QUADRATIC, ROTATED_ARCS, HEART, CIRCLE, ROUNDED_FRAME];

/// Repeats `path` `count` times, each copy as its own sub-path.
pub fn repeated_path(path: &str, count: usize) -> String {
    let mut out = String::with_capacity((path.len() + 1) * count);
    for _ in 0..count {
        out.push_str(path);
        out.push(' ');
    }
    out
}

/// Compares two event sequences, allowing `tolerance` on every coordinate.
pub fn events_approx_eq(actual: &[PathEvent], expected: &[PathEvent], tolerance: f64) -> bool {
    if actual.len() != expected.len() {
        return false;
    }

    let close = |a: f64, b: f64| (a - b).abs() <= tolerance;

    actual.iter().zip(expected).all(|pair| match pair {
        (PathEvent::MoveTo(a), PathEvent::MoveTo(b))
        | (PathEvent::LineTo(a), PathEvent::LineTo(b)) => close(a.x, b.x) && close(a.y, b.y),
        (
            PathEvent::CubicTo { ctrl1, ctrl2, to },
            PathEvent::CubicTo {
                ctrl1: e1,
                ctrl2: e2,
                to: e3,
            },
        ) => {
            close(ctrl1.x, e1.x)
                && close(ctrl1.y, e1.y)
                && close(ctrl2.x, e2.x)
                && close(ctrl2.y, e2.y)
                && close(to.x, e3.x)
                && close(to.y, e3.y)
        }
        (PathEvent::Close, PathEvent::Close) => true,
        _ => false,
    })
}

#[cfg(test)]
mod reference {
    use super::*;
    use pathdata::path::{PathRecorder, PathSink};
    use pathdata::{write_path_data, ErrorKind, ParseError};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn events(src: &str) -> Vec<PathEvent> {
        let mut events: Vec<PathEvent> = Vec::new();
        write_path_data(src, &mut events).unwrap();
        events
    }

    #[test]
    fn smooth_quadratic_trace() {
        init_logger();

        let mut recorder = PathRecorder::new();
        write_path_data(SMOOTH_QUADRATIC, &mut recorder).unwrap();

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
    fn rotated_arcs_trace() {
        init_logger();

        let mut recorder = PathRecorder::new();
        write_path_data(ROTATED_ARCS, &mut recorder).unwrap();

        assert_eq!(
            recorder.trace(),
            [
                "moveTo(5.5000, 5.5000)",
                "cubicTo(5.2319, 5.9667, 4.9001, 6.3513, 4.6307, 6.5077)",
                "cubicTo(4.3612, 6.6640, 4.1953, 6.5683, 4.1960, 6.2567)",
                "cubicTo(4.1967, 5.9451, 4.3638, 5.4655, 4.6340, 5.0000)",
                "cubicTo(4.9021, 4.5333, 5.2339, 4.1487, 5.5033, 3.9923)",
                "cubicTo(5.7728, 3.8360, 5.9387, 3.9317, 5.9380, 4.2433)",
                "cubicTo(5.9373, 4.5549, 5.7702, 5.0345, 5.5000, 5.5000)",
                "close()",
            ]
        );
    }

    #[test]
    fn all_reference_paths_parse() {
        init_logger();

        for src in &ALL_PATHS {
            let events = events(src);
            assert!(matches!(events.first(), Some(PathEvent::MoveTo(_))), "{}", src);
            for evt in &events {
                if let Some(to) = evt.to() {
                    assert!(to.is_finite(), "{} produced {:?}", src, evt);
                }
            }
        }
    }

    #[test]
    fn circle_endpoints_stay_on_the_circle() {
        let events = events(CIRCLE);

        // Each half circle turns into two quarter arcs.
        assert_eq!(events.len(), 6);
        assert_eq!(events[5], PathEvent::Close);

        for evt in &events[..5] {
            let to = evt.to().unwrap();
            let dx = to.x - 12.0;
            let dy = to.y - 12.0;
            assert!(((dx * dx + dy * dy).sqrt() - 10.0).abs() < 1e-6, "{:?}", evt);
        }
    }

    #[test]
    fn heart_is_symmetric() {
        let events = events(HEART);

        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        for evt in &events {
            if let Some(to) = evt.to() {
                min_x = min_x.min(to.x);
                max_x = max_x.max(to.x);
            }
        }

        assert!((min_x - 2.0).abs() < 1e-9);
        assert!((max_x - 22.0).abs() < 1e-9);
        assert_eq!(events.last(), Some(&PathEvent::Close));
    }

    #[test]
    fn separators_do_not_matter() {
        let reference = events("M 20 30 Q 40 5 60 30 T 100 30");
        assert_eq!(events(SMOOTH_QUADRATIC), reference);
        assert_eq!(events("M20 30Q40 5,60 30T100 30"), reference);
        assert_eq!(events("\n\tM 20,30\r\n Q 40 , 5 60 , 30\x0CT100,30 "), reference);
    }

    #[test]
    fn relative_and_absolute_forms_match() {
        let relative = events("m 10 10 l 5 0 0 5 h -5 z m 20 0 c 0 -5 5 -5 5 0 s 5 5 5 0");
        let absolute = events("M 10 10 L 15 10 15 15 H 10 Z M 30 10 C 30 5 35 5 35 10 S 40 15 40 10");

        assert!(events_approx_eq(&relative, &absolute, 1e-9));
    }

    #[test]
    fn repeated_paths() {
        let src = repeated_path(HEART, 3);
        let single = events(HEART);
        let repeated = events(&src);

        assert_eq!(repeated.len(), single.len() * 3);
        assert!(events_approx_eq(&repeated[..single.len()], &single, 0.0));
    }

    #[test]
    fn errors_keep_the_emitted_prefix() {
        init_logger();

        let src = format!("{} L 4 ,, 5", ROUNDED_FRAME);
        let mut with_error: Vec<PathEvent> = Vec::new();
        let err = write_path_data(&src, &mut with_error).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Numeric);
        assert!(matches!(err, ParseError::Number { .. }));
        assert_eq!(with_error, events(ROUNDED_FRAME));
    }

    #[test]
    fn custom_sink() {
        #[derive(Default)]
        struct Counter {
            moves: u32,
            lines: u32,
            cubics: u32,
            closes: u32,
        }

        impl PathSink for Counter {
            fn move_to(&mut self, _: f64, _: f64) {
                self.moves += 1;
            }
            fn line_to(&mut self, _: f64, _: f64) {
                self.lines += 1;
            }
            fn cubic_to(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64) {
                self.cubics += 1;
            }
            fn close(&mut self) {
                self.closes += 1;
            }
        }

        let mut counter = Counter::default();
        write_path_data(ROUNDED_FRAME, &mut counter).unwrap();

        assert_eq!(counter.moves, 2);
        assert_eq!(counter.closes, 2);
        assert_eq!(counter.lines, 9);
        assert_eq!(counter.cubics, 7);
    }
}
