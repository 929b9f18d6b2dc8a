use log::{Level, LevelFilter, Log, Metadata, Record};
use web_sys::console;

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        match record.level() {
            Level::Error => console::error_1(&line.into()),
            Level::Warn => console::warn_1(&line.into()),
            Level::Info => console::info_1(&line.into()),
            Level::Debug | Level::Trace => console::debug_1(&line.into()),
        }
    }

    fn flush(&self) {}
}

pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init(debug: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_for(debug));
    }
}
