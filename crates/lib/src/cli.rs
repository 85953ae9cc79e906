//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
pub use self::error::{error_context, LineCol};
pub(self) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Trace
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = std::ffi::OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    let warmup = warmup
                        .to_str()
                        .context("missing string argument to `--warmup`")?;
                    opts.warmup = Some(warmup.parse().context("bad argument to `--warmup`")?);
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    let time_limit = time_limit
                        .to_str()
                        .context("missing string argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    let count = count
                        .to_str()
                        .context("missing string argument to `--count`")?;
                    opts.count = Some(count.parse().context("bad argument to `--count`")?);
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Print the answer produced by a solver.
#[doc(hidden)]
pub fn print_value<O>(opts: &Opts, value: &O) -> Result<()>
where
    O: fmt::Debug,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());
    o.value(format_args!("{value:?}"))?;
    Ok(())
}

/// Check an answer against the expected one.
#[doc(hidden)]
pub fn check_expected<O, C>(value: &O, expected: &C) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if !value.output_eq(expected) {
        bail!("{value:?} (value) != {expected:?} (expected)");
    }

    Ok(())
}

/// A single percentile, where `at` is expressed in basis points.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
struct Percentile {
    at: u32,
    value: Duration,
}

/// Collection of percentiles calculated from sorted samples.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Percentiles {
    values: Vec<Percentile>,
}

impl Percentiles {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert the percentile `at` (in basis points) from sorted `samples`.
    pub(crate) fn insert(&mut self, at: u32, samples: &[Duration]) {
        let n = samples.len().saturating_sub(1) * at as usize / 10000;

        if let Some(&value) = samples.get(n) {
            self.values.push(Percentile { at, value });
        }
    }
}

impl fmt::Display for Percentiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.values.iter().peekable();

        while let Some(Percentile { at, value }) = it.next() {
            if at % 100 == 0 {
                write!(f, "{}th: {value:?}", at / 100)?;
            } else {
                write!(f, "{}.{:02}th: {value:?}", at / 100, at % 100)?;
            }

            if it.peek().is_some() {
                write!(f, ", ")?;
            }
        }

        Ok(())
    }
}

impl AddAssign<&Percentiles> for Percentiles {
    fn add_assign(&mut self, rhs: &Percentiles) {
        for p in &rhs.values {
            match self.values.iter_mut().find(|o| o.at == p.at) {
                Some(o) => o.value += p.value,
                None => self.values.push(*p),
            }
        }
    }
}

#[derive(Default, Deserialize, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Option<Duration>,
    pub max: Option<Duration>,
    pub avg: Duration,
    pub percentiles: Percentiles,
}

impl Report {
    fn new(
        count: usize,
        min: Option<Duration>,
        max: Option<Duration>,
        sum: Duration,
        percentiles: Percentiles,
    ) -> Self {
        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from((sum.as_nanos()) / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            count,
            min,
            max,
            avg,
            percentiles,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            percentiles,
        } = self;

        let min = Maybe(min);
        let max = Maybe(max);
        write!(f, "count: {count}, min: {min}, max: {max}, avg: {avg:?}")?;

        if !percentiles.values.is_empty() {
            write!(f, ", {percentiles}")?;
        }

        Ok(())
    }
}

struct Maybe<'a, T>(&'a Option<T>);

impl<T> fmt::Display for Maybe<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => "-".fmt(f),
        }
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.count += rhs.count;
        self.min = sum(self.min, rhs.min);
        self.max = sum(self.max, rhs.max);
        self.avg += rhs.avg;
        self.percentiles += &rhs.percentiles;
    }
}

fn sum(a: Option<Duration>, b: Option<Duration>) -> Option<Duration> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + b),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{check_expected, Mode, Opts, Percentiles, Report};

    fn args(args: &[&str]) -> Vec<std::ffi::OsString> {
        args.iter().map(|a| a.into()).collect()
    }

    #[test]
    fn test_parse_opts() {
        let opts = Opts::parse_from(args(&["--bench", "--count", "5", "--json"])).unwrap();
        assert!(matches!(opts.mode, Mode::Bench));
        assert_eq!(opts.count, Some(5));
        assert!(opts.json);

        assert!(Opts::parse_from(args(&["--bench", "--bench"])).is_err());
        assert!(Opts::parse_from(args(&["--count"])).is_err());
        assert!(Opts::parse_from(args(&["--frobnicate"])).is_err());
        assert!(Opts::parse_from(args(&["--", "--frobnicate"])).is_ok());
    }

    #[test]
    fn test_percentiles() {
        let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();

        let mut p = Percentiles::new();
        p.insert(5000, &samples);
        p.insert(9999, &samples);

        assert_eq!(p.to_string(), "50th: 50ms, 99.99th: 99ms");
    }

    #[test]
    fn test_report_sum() {
        let mut total = Report::default();
        let a = Report::new(2, Some(Duration::from_millis(1)), None, Duration::from_millis(4), Percentiles::new());
        let b = Report::new(1, Some(Duration::from_millis(2)), Some(Duration::from_millis(2)), Duration::from_millis(2), Percentiles::new());

        total += &a;
        total += &b;

        assert_eq!(total.count, 3);
        assert_eq!(total.min, Some(Duration::from_millis(3)));
        assert_eq!(total.max, Some(Duration::from_millis(2)));
        assert_eq!(total.avg, Duration::from_millis(4));
    }

    #[test]
    fn test_check_expected() {
        assert!(check_expected(&(11u32, 31u32), &(11, 31)).is_ok());
        assert!(check_expected(&41u32, &40).is_err());
    }
}
