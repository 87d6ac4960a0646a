use crate::logging::{ExternalSeverity, LogLevel};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

/// The `log` target used by [`LogConsole`].
pub const LOG_TARGET: &str = "decomp3d";

/// A message emitted by a decomposition backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    /// The backend-side severity of the message.
    pub severity: ExternalSeverity,
    /// The message.
    pub message: String,
}

/// A message published to the subscribers of a [`LogBridge`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
    /// The message.
    pub message: String,
    /// The host-side severity of the message.
    pub level: LogLevel,
}

/// Filtering and echoing options of the backend logs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LogSettings {
    /// Records less severe than this are dropped by the [`LogSink`].
    pub level: LogLevel,
    /// Echo every published record to the [`Console`].
    pub print_to_console: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Warning,
            print_to_console: true,
        }
    }
}

/// The handle through which a decomposition backend emits its log records.
///
/// A sink may be cloned and moved to other threads. Records below the sink's
/// threshold are dropped immediately; the others are queued for the
/// [`LogBridge`] consumer. Emitting a record never blocks and never fails.
#[derive(Clone, Debug)]
pub struct LogSink {
    sender: Option<Sender<LogRecord>>,
    level: LogLevel,
}

impl LogSink {
    /// A sink feeding `sender`, dropping the records that don't pass `level`.
    pub fn new(sender: Sender<LogRecord>, level: LogLevel) -> Self {
        Self {
            sender: Some(sender),
            level,
        }
    }

    /// A sink that drops every record.
    pub fn disabled() -> Self {
        Self {
            sender: None,
            level: LogLevel::Off,
        }
    }

    /// Would a record with the given severity be kept?
    pub fn enabled(&self, severity: ExternalSeverity) -> bool {
        self.sender.is_some() && LogLevel::from(severity).passes(self.level)
    }

    /// Emits a record.
    pub fn log(&self, severity: ExternalSeverity, message: impl Into<String>) {
        if !self.enabled(severity) {
            return;
        }

        if let Some(sender) = &self.sender {
            // The consumer only disappears once the decomposition is over.
            let _ = sender.send(LogRecord {
                severity,
                message: message.into(),
            });
        }
    }

    /// Emits a debug record.
    pub fn debug(&self, message: impl Into<String>) {
        self.log(ExternalSeverity::Debug, message)
    }

    /// Emits an info record.
    pub fn info(&self, message: impl Into<String>) {
        self.log(ExternalSeverity::Info, message)
    }

    /// Emits a warning record.
    pub fn warn(&self, message: impl Into<String>) {
        self.log(ExternalSeverity::Warn, message)
    }

    /// Emits an error record.
    pub fn error(&self, message: impl Into<String>) {
        self.log(ExternalSeverity::Err, message)
    }
}

/// The host's console, to which backend logs are echoed.
pub trait Console: Send + Sync {
    /// Prints a message only shown in verbose mode.
    fn print_verbose(&self, message: &str);
    /// Prints an informative message.
    fn print(&self, message: &str);
    /// Reports a warning.
    fn push_warning(&self, message: &str);
    /// Reports an error.
    fn push_error(&self, message: &str);
}

/// A [`Console`] forwarding to the `log` facade, with the [`LOG_TARGET`] target.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogConsole;

impl Console for LogConsole {
    fn print_verbose(&self, message: &str) {
        log::debug!(target: LOG_TARGET, "{}", message);
    }

    fn print(&self, message: &str) {
        log::info!(target: LOG_TARGET, "{}", message);
    }

    fn push_warning(&self, message: &str) {
        log::warn!(target: LOG_TARGET, "{}", message);
    }

    fn push_error(&self, message: &str) {
        log::error!(target: LOG_TARGET, "{}", message);
    }
}

/// Forwards backend log records to event subscribers and to a [`Console`].
pub struct LogBridge {
    subscribers: Mutex<Vec<Sender<LogEvent>>>,
    console: Box<dyn Console>,
}

impl Default for LogBridge {
    fn default() -> Self {
        Self::new(LogConsole)
    }
}

impl LogBridge {
    /// A bridge echoing to `console`.
    pub fn new(console: impl Console + 'static) -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            console: Box::new(console),
        }
    }

    /// Registers a new subscriber.
    ///
    /// Every record published after this call is sent to the returned
    /// receiver. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<LogEvent> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sender);
        receiver
    }

    /// Creates the sink a backend logs into and the receiving end to [`drain`](Self::drain).
    pub fn channel(settings: &LogSettings) -> (LogSink, Receiver<LogRecord>) {
        let (sender, receiver) = mpsc::channel();
        (LogSink::new(sender, settings.level), receiver)
    }

    /// Publishes a single record.
    ///
    /// Records with an `off` severity are dropped.
    pub fn dispatch(&self, record: LogRecord, settings: &LogSettings) {
        let level = LogLevel::from(record.severity);

        if level == LogLevel::Off {
            return;
        }

        if settings.print_to_console {
            match level {
                LogLevel::Debug => self.console.print_verbose(&record.message),
                LogLevel::Info => self.console.print(&record.message),
                LogLevel::Warning => self.console.push_warning(&record.message),
                LogLevel::Error | LogLevel::Critical => self.console.push_error(&record.message),
                LogLevel::Off => {}
            }
        }

        let event = LogEvent {
            message: record.message,
            level,
        };

        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    /// Publishes every record of `records` until all its senders are dropped.
    pub fn drain(&self, records: Receiver<LogRecord>, settings: &LogSettings) {
        for record in records {
            self.dispatch(record, settings);
        }
    }
}
