use decomp3d::logging::{Console, ExternalSeverity, LogBridge, LogLevel, LogRecord, LogSettings};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CountingConsole(Arc<Mutex<HashMap<&'static str, usize>>>);

impl CountingConsole {
    fn count(&self, channel: &'static str) -> usize {
        self.0.lock().unwrap().get(channel).copied().unwrap_or(0)
    }

    fn total(&self) -> usize {
        self.0.lock().unwrap().values().sum()
    }

    fn bump(&self, channel: &'static str) {
        *self.0.lock().unwrap().entry(channel).or_insert(0) += 1;
    }
}

impl Console for CountingConsole {
    fn print_verbose(&self, _: &str) {
        self.bump("verbose");
    }

    fn print(&self, _: &str) {
        self.bump("print");
    }

    fn push_warning(&self, _: &str) {
        self.bump("warning");
    }

    fn push_error(&self, _: &str) {
        self.bump("error");
    }
}

fn record(severity: ExternalSeverity) -> LogRecord {
    LogRecord {
        severity,
        message: format!("{:?}", severity),
    }
}

#[test]
fn every_active_severity_is_published_once() {
    let console = CountingConsole::default();
    let bridge = LogBridge::new(console.clone());
    let events = bridge.subscribe();
    let settings = LogSettings {
        level: LogLevel::Debug,
        print_to_console: true,
    };

    for severity in ExternalSeverity::ACTIVE {
        bridge.dispatch(record(severity), &settings);
    }

    let levels: Vec<_> = events.try_iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        [
            LogLevel::Debug,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Critical
        ]
    );

    assert_eq!(console.count("verbose"), 2);
    assert_eq!(console.count("print"), 1);
    assert_eq!(console.count("warning"), 1);
    assert_eq!(console.count("error"), 2);
}

#[test]
fn off_never_reaches_the_console() {
    let console = CountingConsole::default();
    let bridge = LogBridge::new(console.clone());
    let events = bridge.subscribe();

    for level in [
        LogLevel::Off,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ] {
        let settings = LogSettings {
            level,
            print_to_console: true,
        };
        bridge.dispatch(record(ExternalSeverity::Off), &settings);
    }

    assert_eq!(console.total(), 0);
    assert_eq!(events.try_iter().count(), 0);
}

#[test]
fn threshold_is_applied_at_the_sink() {
    let console = CountingConsole::default();
    let bridge = LogBridge::new(console.clone());
    let settings = LogSettings {
        level: LogLevel::Error,
        print_to_console: true,
    };
    let (sink, records) = LogBridge::channel(&settings);

    for severity in ExternalSeverity::ACTIVE {
        sink.log(severity, "message");
    }
    drop(sink);
    bridge.drain(records, &settings);

    assert_eq!(console.count("error"), 2);
    assert_eq!(console.total(), 2);
}
