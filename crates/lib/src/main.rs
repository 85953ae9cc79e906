//! Builds every solver in the `y2024` package and runs them in sequence,
//! collecting their JSON output into a summary.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use lib::cli::Report;
use serde::de::IntoDeserializer;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

struct Solver {
    name: String,
    path: PathBuf,
}

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    package: Option<String>,
    args: Vec<OsString>,
}

impl Opts {
    fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "-p" | "--package" => {
                    let package = it.next().context("missing argument to `--package`")?;
                    let package = package
                        .into_string()
                        .map_err(|_| anyhow::anyhow!("non-utf8 argument to `--package`"))?;
                    opts.package = Some(package);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

/// Build the package and collect its binaries sorted by name.
fn build(package: &str) -> Result<Vec<Solver>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.args(["build", "--release", "-p", package]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn()?;
    let stdout = child.stdout.take().context("missing stdout")?;

    let mut solvers = Vec::new();

    for value in serde_json::Deserializer::from_reader(stdout).into_iter() {
        let value: serde_json::Value = value?;

        if value.get("reason").and_then(|d| d.as_str()) != Some("compiler-artifact") {
            continue;
        }

        let artifact = Artifact::deserialize(value.into_deserializer())?;

        if !matches!(&artifact.target.kind[..], [kind] if kind == "bin") {
            continue;
        }

        solvers.push(Solver {
            name: artifact.target.name,
            path: artifact.executable.context("missing executable")?,
        });
    }

    let status = child.wait()?;

    if !status.success() {
        bail!("building `{package}` failed: {status}");
    }

    solvers.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(solvers)
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let package = opts.package.as_deref().unwrap_or("y2024");

    let mut total = Report::default();

    for solver in build(package)? {
        let mut cmd = Command::new(&solver.path);
        cmd.stdout(Stdio::piped());
        cmd.args(&opts.args[..]);
        cmd.arg("--json");

        let mut child = cmd.spawn()?;
        let stdout = child.stdout.take().context("missing stdout")?;
        let name = &solver.name;

        for value in serde_json::Deserializer::from_reader(stdout).into_iter() {
            let value: serde_json::Value = value?;

            match value.get("type").and_then(|d| d.as_str()) {
                Some("report") => {
                    let report = Data::<Report>::deserialize(value.into_deserializer())?.data;

                    if !opts.quiet {
                        println!("{name}: {report}");
                    }

                    total += &report;
                }
                Some("value") => {
                    let value = Data::<String>::deserialize(value.into_deserializer())?.data;

                    if !opts.quiet {
                        println!("{name}: {value}");
                    }
                }
                Some("message") => {
                    let message = Data::<Message>::deserialize(value.into_deserializer())?.data;

                    if opts.is_verbose() || message.kind == "error" {
                        println!("{name}: {}: {}", message.kind, message.output);
                    }
                }
                _ => {}
            }
        }

        let status = child.wait()?;

        if opts.is_verbose() || !status.success() {
            println!("{name}: {status}");
        }
    }

    println!("total: {total}");
    Ok(())
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}
