use log::{Level, Log};

/// Logger which writes records to stdout. Info records are printed as-is,
/// everything else is prefixed with its source location and level.
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if record.level() == Level::Info {
            println!("{}", record.args());
            return;
        }

        println!(
            "{file}:{line}: {}: {}",
            record.level(),
            record.args(),
            file = record.file().unwrap_or_default(),
            line = record.line().unwrap_or_default()
        );
    }

    fn flush(&self) {}
}
