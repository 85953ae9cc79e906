use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// Output sink for a solver, either human readable or JSON lines which are
/// consumed by the workspace runner.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.emit(Line::Message {
            kind: MessageKind::Info,
            output: m.to_string(),
        })
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.emit(Line::Message {
            kind: MessageKind::Error,
            output: m.to_string(),
        })
    }

    pub(crate) fn value(&mut self, value: impl fmt::Display) -> io::Result<()> {
        self.emit(Line::Value(value.to_string()))
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        self.emit(Line::Report(report))
    }

    fn emit(&mut self, line: Line<'_>) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => {
                serde_json::to_writer(&mut self.out, &line)?;
                writeln!(self.out)?;
            }
            OutputKind::Normal => match line {
                Line::Message { kind, output } => writeln!(self.out, "{kind}: {output}")?,
                Line::Report(report) => writeln!(self.out, "{report}")?,
                Line::Value(value) => writeln!(self.out, "{value}")?,
            },
        }

        Ok(())
    }
}

/// A single line of output, serialized as `{"type": ..., "data": ...}`.
#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
enum Line<'a> {
    Message { kind: MessageKind, output: String },
    Report(&'a Report),
    Value(String),
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Output, OutputKind};
    use crate::cli::Report;

    fn lines(kind: OutputKind, f: impl FnOnce(&mut Output<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        f(&mut Output::new(&mut buf, kind));
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_json_lines() {
        let out = lines(OutputKind::Json, |o| {
            o.info("warming up").unwrap();
            o.value("(11, 31)").unwrap();
        });

        assert_eq!(
            out,
            "{\"type\":\"message\",\"data\":{\"kind\":\"info\",\"output\":\"warming up\"}}\n\
             {\"type\":\"value\",\"data\":\"(11, 31)\"}\n"
        );
    }

    #[test]
    fn test_normal() {
        let out = lines(OutputKind::Normal, |o| {
            o.error("boom").unwrap();
            o.report(&Report::default()).unwrap();
        });

        assert_eq!(out, "error: boom\ncount: 0, min: -, max: -, avg: 0ns\n");
    }
}
