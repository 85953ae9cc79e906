use core::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Error, Result};

use crate::cli::{Opts, Output, Percentiles, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Percentiles reported, in basis points.
const PERCENTILES: [u32; 5] = [2500, 5000, 9500, 9900, 9999];

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, passing every produced value through `check`.
    #[inline]
    pub fn iter<T, V, O, E>(&mut self, opts: &Opts, check: V, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        V: FnMut(&O) -> Result<()>,
        O: fmt::Debug,
        Error: From<E>,
    {
        let stdout = std::io::stdout();
        let mut o = Output::new(stdout.lock(), opts.output_kind());

        if let Err(e) = self.inner_iter(&mut o, opts, check, iter) {
            o.error(e)?;
        }

        Ok(())
    }

    fn inner_iter<T, V, O, E>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        mut check: V,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        V: FnMut(&O) -> Result<()>,
        O: fmt::Debug,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut sample = || -> Result<(Instant, Duration)> {
            let before = Instant::now();
            let value = iter()?;
            let after = Instant::now();
            check(&value)?;
            let _ = black_box(value);
            Ok((after, after.duration_since(before)))
        };

        if !warmup.is_zero() {
            let s = Instant::now();

            o.info(format_args!("warming up ({warmup:?})..."))?;

            loop {
                let (after, _) = sample()?;

                if after.duration_since(s) >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                let (_, d) = sample()?;
                samples.push(d);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                let (after, d) = sample()?;
                samples.push(d);

                if after.duration_since(start) >= time_limit {
                    break;
                }
            }
        }

        samples.sort();

        let mut percentiles = Percentiles::new();

        for at in PERCENTILES {
            percentiles.insert(at, &samples);
        }

        let min = samples.first().copied();
        let max = samples.last().copied();
        let sum = samples.iter().copied().sum();
        let report = Report::new(samples.len(), min, max, sum, percentiles);
        o.report(&report)?;
        Ok(())
    }
}

/// A function that is opaque to the optimizer, used to prevent the compiler
/// from optimizing away computations in a benchmark.
#[inline]
fn black_box<T>(dummy: T) -> T {
    std::hint::black_box(dummy)
}
