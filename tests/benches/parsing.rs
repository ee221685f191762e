extern crate pathdata;
extern crate pathdata_tests;
#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion, Throughput};
use pathdata::parser::SegmentParser;
use pathdata::path::{PathEvent, PathSink};
use pathdata::write_path_data;
use pathdata_tests::*;

const REPEAT: usize = 200;

// Discards everything, so that only parsing and normalization are measured.
struct NullSink;

impl PathSink for NullSink {
    fn move_to(&mut self, x: f64, y: f64) {
        std::hint::black_box((x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        std::hint::black_box((x, y));
    }
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        std::hint::black_box((x1, y1, x2, y2, x3, y3));
    }
    fn close(&mut self) {}
}

fn segments(c: &mut Criterion) {
    let mut g = c.benchmark_group("segments");
    for (name, path) in &[("heart", HEART), ("frame", ROUNDED_FRAME), ("arcs", ROTATED_ARCS)] {
        let src = repeated_path(path, REPEAT);
        g.throughput(Throughput::Bytes(src.len() as u64));
        g.bench_with_input(BenchmarkId::new("parse", name), &src, |b, src| {
            b.iter(|| {
                for segment in SegmentParser::new(src) {
                    std::hint::black_box(segment.ok());
                }
            })
        });
    }
}

fn normalize(c: &mut Criterion) {
    let mut g = c.benchmark_group("write_path_data");
    for (name, path) in &[("heart", HEART), ("frame", ROUNDED_FRAME), ("arcs", ROTATED_ARCS), ("circle", CIRCLE)] {
        let src = repeated_path(path, REPEAT);
        g.throughput(Throughput::Bytes(src.len() as u64));
        g.bench_with_input(BenchmarkId::new("null sink", name), &src, |b, src| {
            b.iter(|| write_path_data(src, &mut NullSink).ok())
        });
        g.bench_with_input(BenchmarkId::new("events", name), &src, |b, src| {
            let mut events: Vec<PathEvent> = Vec::with_capacity(4096);
            b.iter(|| {
                events.clear();
                write_path_data(src, &mut events).ok();
                std::hint::black_box(events.len());
            })
        });
    }
}

criterion_group!(parsing, segments, normalize);

criterion_main!(parsing);
