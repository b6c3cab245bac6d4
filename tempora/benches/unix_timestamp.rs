//! Conversions between UNIX timestamps and calendar values compared against `chrono`.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tempora::calendar::DateTime;

const SAMPLES: usize = 1024;

fn chrono_samples() -> Vec<chrono::DateTime<chrono::Utc>> {
  unix_samples()
    .into_iter()
    .filter_map(|(seconds, nanosecond)| chrono::DateTime::from_timestamp(seconds, nanosecond))
    .collect()
}

fn tempora_samples() -> Vec<DateTime> {
  unix_samples()
    .into_iter()
    .filter_map(|(seconds, nanosecond)| DateTime::from_unix_timestamp(seconds, nanosecond).ok())
    .collect()
}

fn unix_samples() -> Vec<(i64, u32)> {
  (0..SAMPLES)
    .map(|idx| {
      let n = i64::try_from(idx).unwrap();
      let seconds = n * 250_000 - 125_000_000;
      let nanosecond = u32::try_from(n * 97_921 % 1_000_000_000).unwrap();
      (seconds, nanosecond)
    })
    .collect()
}

fn from_unix_timestamp(c: &mut Criterion) {
  let mut group = c.benchmark_group("from_unix_timestamp");
  let samples = unix_samples();
  group.bench_function("tempora", |b| {
    b.iter(|| {
      for &(seconds, nanosecond) in &samples {
        let _ = black_box(DateTime::from_unix_timestamp(seconds, nanosecond));
      }
    });
  });
  group.bench_function("chrono", |b| {
    b.iter(|| {
      for &(seconds, nanosecond) in &samples {
        let _ = black_box(chrono::DateTime::from_timestamp(seconds, nanosecond));
      }
    });
  });
  group.finish();
}

fn to_unix_timestamp(c: &mut Criterion) {
  let mut group = c.benchmark_group("to_unix_timestamp");
  let (tempora, chrono) = (tempora_samples(), chrono_samples());
  group.bench_function("tempora", |b| {
    b.iter(|| {
      for elem in &tempora {
        let _ = black_box(elem.unix_timestamp());
      }
    });
  });
  group.bench_function("chrono", |b| {
    b.iter(|| {
      for elem in &chrono {
        let _ = black_box(elem.timestamp());
      }
    });
  });
  group.finish();
}

fn to_unix_timestamp_nanos(c: &mut Criterion) {
  let mut group = c.benchmark_group("to_unix_timestamp_nanos");
  let (tempora, chrono) = (tempora_samples(), chrono_samples());
  group.bench_function("tempora", |b| {
    b.iter(|| {
      for elem in &tempora {
        let _ = black_box(elem.unix_timestamp_nanos());
      }
    });
  });
  group.bench_function("chrono", |b| {
    b.iter(|| {
      for elem in &chrono {
        let _ = black_box(elem.timestamp_nanos_opt());
      }
    });
  });
  group.finish();
}

criterion_group!(benches, from_unix_timestamp, to_unix_timestamp, to_unix_timestamp_nanos);
criterion_main!(benches);
