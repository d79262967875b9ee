//! Kept in its own test binary: the logger is process-global.

use std::sync::Mutex;

use dinner_core::{initialize, FormatOptions, StartupHook, STARTUP_MESSAGE};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("dinner_core") {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn diagnostic_messages() -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .map(|(level, message)| format!("{level} {message}"))
        .collect()
}

#[test]
fn test_startup_emits_exactly_one_diagnostic() {
    log::set_logger(&LOGGER).expect("logger already set");
    log::set_max_level(LevelFilter::Trace);

    let mut hook = StartupHook::new(FormatOptions::default().with_time_zone("UTC"));
    assert!(diagnostic_messages().is_empty());

    // Every level counts: the startup path logs nothing but the one message.
    let app = hook.run().expect("Failed to initialize");
    assert_eq!(diagnostic_messages(), vec![format!("INFO {STARTUP_MESSAGE}")]);

    // Formatting valid input is silent.
    app.format_date("2024-03-15T14:05:00");
    assert_eq!(diagnostic_messages().len(), 1);

    // Neither a rejected second run nor a failed startup logs anything.
    assert!(hook.run().is_err());
    assert!(initialize(FormatOptions::default().with_time_zone("Bad/Zone")).is_err());
    assert_eq!(diagnostic_messages().len(), 1);
}
