use log::{Level, Metadata, Record};

/// Writes log lines to stderr. Dependencies (reqwest, hyper) only get through
/// at info and above.
pub struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info || metadata.target().starts_with("gl3w_gen")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<8} {:<16} {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}
