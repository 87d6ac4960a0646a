//! Forwarding of the decomposition backends' logs to the host.
//!
//! Backends run on the caller's thread but may log from anywhere: they push
//! [`LogRecord`]s into a [`LogSink`], which is a channel drained by a
//! [`LogBridge`] on a separate thread for the duration of the decomposition.
//! The bridge translates the backend severities into [`LogLevel`]s, publishes
//! a [`LogEvent`] to every subscriber, and optionally echoes the message to a
//! [`Console`].

pub use self::bridge::{
    Console, LogBridge, LogConsole, LogEvent, LogRecord, LogSettings, LogSink, LOG_TARGET,
};
pub use self::severity::{ExternalSeverity, LogLevel};

#[cfg(test)]
pub(crate) use self::bridge::test::RecordingConsole;

mod bridge;
mod severity;
