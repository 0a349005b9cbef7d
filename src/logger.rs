use crate::{
    config::{Config, DEFAULT_FILE_NAME},
    file_setup, AppendMode, ErrorChannel, ErrorCode, LogLibError, LoggerHandle, TimestampFormat,
};
use std::path::PathBuf;

/// The entry-point for using `loglib`.
///
/// Create a `Logger`, use its configuration methods, and finally call [`Logger::start`].
/// Every option has a default:
///
/// | option | default |
/// |---|---|
/// | [`directory`](Logger::directory) | the home directory of the current user |
/// | [`file_name`](Logger::file_name) | `log.txt` |
/// | [`append_mode`](Logger::append_mode) | [`AppendMode::Append`] |
/// | [`timestamp_format`](Logger::timestamp_format) | `dd.MM HH:mm:ss` |
/// | [`error_channel`](Logger::error_channel) | [`ErrorChannel::StdErr`] |
///
/// ## Examples
///
/// ### Use defaults only
///
/// Appends to `~/log.txt`:
///
/// ```rust,ignore
/// let handle = loglib::Logger::new().start();
/// loglib::error!(handle, "This is an error message");
/// ```
///
/// ### Start each run with a fresh file, and keep the previous one
///
/// ```rust,ignore
/// use loglib::{AppendMode, Logger};
///
/// let handle = Logger::new()
///     .directory("/tmp/logtest")
///     .file_name("test.txt")
///     .append_mode(AppendMode::New)
///     .timestamp_format("dd.MM HH:mm:ss.SSS")?
///     .start();
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    o_directory: Option<PathBuf>,
    o_file_name: Option<String>,
    append_mode: AppendMode,
    timestamp_format: TimestampFormat,
    print_message: bool,
    error_channel: ErrorChannel,
}

/// Simple methods for influencing the behavior of the Logger.
impl Logger {
    /// Creates a `Logger` with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a logger in one call; every `None` selects the default.
    ///
    /// # Errors
    ///
    /// [`LogLibError::InvalidTimestampFormat`] if the given timestamp format is invalid;
    /// in that case no file is touched.
    pub fn try_with_options<P: Into<PathBuf>, S: Into<String>>(
        o_directory: Option<P>,
        o_file_name: Option<S>,
        o_append_mode: Option<AppendMode>,
        o_timestamp_format: Option<&str>,
    ) -> Result<LoggerHandle, LogLibError> {
        Ok(Self::new()
            .o_directory(o_directory)
            .o_file_name(o_file_name)
            .append_mode(o_append_mode.unwrap_or_default())
            .o_timestamp_format(o_timestamp_format)?
            .start())
    }

    /// Specifies the folder for the log file.
    ///
    /// If the folder does not exist, it will be created.
    #[must_use]
    pub fn directory<P: Into<PathBuf>>(self, directory: P) -> Self {
        self.o_directory(Some(directory))
    }

    /// Specifies the folder for the log file,
    /// or selects the home directory of the current user with `None`.
    #[must_use]
    pub fn o_directory<P: Into<PathBuf>>(mut self, o_directory: Option<P>) -> Self {
        self.o_directory = o_directory.map(Into::into);
        self
    }

    /// Specifies the name of the log file, including its extension.
    #[must_use]
    pub fn file_name<S: Into<String>>(self, file_name: S) -> Self {
        self.o_file_name(Some(file_name))
    }

    /// Specifies the name of the log file, or selects `log.txt` with `None`.
    #[must_use]
    pub fn o_file_name<S: Into<String>>(mut self, o_file_name: Option<S>) -> Self {
        self.o_file_name = o_file_name.map(Into::into);
        self
    }

    /// Decides what happens with an existing log file, see [`AppendMode`].
    #[must_use]
    pub fn append_mode(mut self, append_mode: AppendMode) -> Self {
        self.append_mode = append_mode;
        self
    }

    /// Makes the logger write to stdout rather than to a file.
    ///
    /// Equivalent to `append_mode(AppendMode::Console)`.
    #[must_use]
    pub fn log_to_console(self) -> Self {
        self.append_mode(AppendMode::Console)
    }

    /// Specifies the format of the timestamps, see [`TimestampFormat`] for the syntax.
    ///
    /// # Errors
    ///
    /// [`LogLibError::InvalidTimestampFormat`] if the pattern is not valid.
    pub fn timestamp_format<S: AsRef<str>>(self, pattern: S) -> Result<Self, LogLibError> {
        Ok(self.use_timestamp_format(TimestampFormat::try_new(pattern.as_ref())?))
    }

    /// Specifies the format of the timestamps, or selects the default with `None`.
    ///
    /// # Errors
    ///
    /// [`LogLibError::InvalidTimestampFormat`] if the pattern is not valid.
    pub fn o_timestamp_format(self, o_pattern: Option<&str>) -> Result<Self, LogLibError> {
        match o_pattern {
            Some(pattern) => self.timestamp_format(pattern),
            None => Ok(self.use_timestamp_format(TimestampFormat::default())),
        }
    }

    /// Uses an already verified timestamp format.
    #[must_use]
    pub fn use_timestamp_format(mut self, timestamp_format: TimestampFormat) -> Self {
        self.timestamp_format = timestamp_format;
        self
    }

    /// Makes the logger print an info message to stdout with the name of the log file
    /// when it is started.
    #[must_use]
    pub fn print_message(mut self) -> Self {
        self.print_message = true;
        self
    }

    /// Specifies where problems with the log file are reported.
    #[must_use]
    pub fn error_channel(mut self, error_channel: ErrorChannel) -> Self {
        self.error_channel = error_channel;
        self
    }

    /// Resolves the configuration, prepares the log file according to the append mode,
    /// writes the header line, and returns the handle for writing log lines.
    ///
    /// File system problems do not make this method fail;
    /// they are reported to the error channel.
    #[must_use]
    pub fn start(self) -> LoggerHandle {
        let config = self.resolve();
        file_setup::prepare_log_file(&config);
        LoggerHandle::new(config)
    }

    pub(crate) fn resolve(self) -> Config {
        let directory = self.o_directory.unwrap_or_else(|| {
            dirs::home_dir().unwrap_or_else(|| {
                if self.append_mode.uses_file() {
                    self.error_channel.report(
                        ErrorCode::HomeDir,
                        "using the current directory for the log file",
                        &LogLibError::NoHomeDirectory,
                    );
                }
                PathBuf::from(".")
            })
        });
        Config {
            directory,
            file_name: self
                .o_file_name
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            append_mode: self.append_mode,
            timestamp_format: self.timestamp_format,
            print_message: self.print_message,
            error_channel: self.error_channel,
        }
    }
}
