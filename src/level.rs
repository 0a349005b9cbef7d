/// The severity of a log line.
///
/// All levels are always written; there is no filtering.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Level {
    /// Printed as `ERROR`.
    Error,
    /// Printed as `WARNING`.
    Warning,
    /// Printed as `DEBUG`.
    Debug,
    /// Printed as `INFO`.
    Info,
}
impl Level {
    /// The tag that starts each log line of this level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
        }
    }
}
impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// trace has no counterpart and is written as debug
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}
