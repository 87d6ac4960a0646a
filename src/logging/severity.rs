/// Severity of a record emitted by a decomposition backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExternalSeverity {
    /// Very detailed diagnostics.
    Trace,
    /// Diagnostics.
    Debug,
    /// Progress information.
    Info,
    /// Something unexpected that the backend recovered from.
    Warn,
    /// An error.
    Err,
    /// An unrecoverable error.
    Critical,
    /// Not a real severity: records with this level are never shown.
    Off,
}

impl ExternalSeverity {
    /// Every severity a backend may emit a record with.
    pub const ACTIVE: [ExternalSeverity; 6] = [
        ExternalSeverity::Trace,
        ExternalSeverity::Debug,
        ExternalSeverity::Info,
        ExternalSeverity::Warn,
        ExternalSeverity::Err,
        ExternalSeverity::Critical,
    ];
}

/// Severity of the log events published to the host.
///
/// Levels are ordered by increasing importance; [`LogLevel::Off`] sorts first
/// but, used as a threshold, disables every record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum LogLevel {
    /// No logging.
    Off,
    /// Diagnostics.
    Debug,
    /// Progress information.
    Info,
    /// Recoverable problems.
    #[default]
    Warning,
    /// Errors.
    Error,
    /// Unrecoverable errors.
    Critical,
}

impl LogLevel {
    /// The name of this level, as understood by the backends' level filters.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }

    /// Does a record of level `self` pass the given `threshold`?
    pub fn passes(self, threshold: LogLevel) -> bool {
        self != LogLevel::Off && threshold != LogLevel::Off && self >= threshold
    }
}

impl From<ExternalSeverity> for LogLevel {
    fn from(severity: ExternalSeverity) -> Self {
        match severity {
            ExternalSeverity::Trace | ExternalSeverity::Debug => LogLevel::Debug,
            ExternalSeverity::Info => LogLevel::Info,
            ExternalSeverity::Warn => LogLevel::Warning,
            ExternalSeverity::Err => LogLevel::Error,
            ExternalSeverity::Critical => LogLevel::Critical,
            ExternalSeverity::Off => LogLevel::Off,
        }
    }
}
