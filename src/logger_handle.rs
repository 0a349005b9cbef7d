use crate::{
    config::Config, file_setup, formats, AppendMode, CallSite, ErrorCode, FileOp, Level,
    LogLibError, TimestampFormat,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

/// The started logger, as returned from [`Logger::start`](crate::Logger::start).
///
/// Offers the emit methods [`error`](LoggerHandle::error), [`warning`](LoggerHandle::warning),
/// [`debug`](LoggerHandle::debug) and [`info`](LoggerHandle::info), which are most easily
/// used with the equally named macros that capture the call site:
///
/// ```rust
/// let handle = loglib::Logger::new()
///     .directory(std::env::temp_dir())
///     .file_name("loglib_doc.txt")
///     .start();
/// loglib::info!(handle, "{} entries loaded", 42);
/// ```
///
/// Each emit writes exactly one line; the log file is opened for each line and closed
/// again right away. Problems with writing are reported to the configured
/// [`ErrorChannel`](crate::ErrorChannel) and otherwise ignored.
///
/// The handle can be cloned and shared between threads; lines written through the same
/// handle (or its clones) never interleave.
#[derive(Clone, Debug)]
pub struct LoggerHandle {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: Config,
    // None in console mode
    o_path: Option<PathBuf>,
    write_lock: Mutex<()>,
}

impl LoggerHandle {
    pub(crate) fn new(config: Config) -> Self {
        let o_path = config
            .append_mode
            .uses_file()
            .then(|| config.file_path());
        Self {
            inner: Arc::new(Inner {
                config,
                o_path,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Writes an `ERROR` line.
    pub fn error(&self, site: &CallSite<'_>, message: &str) {
        self.emit(Level::Error, site, message);
    }

    /// Writes a `WARNING` line.
    pub fn warning(&self, site: &CallSite<'_>, message: &str) {
        self.emit(Level::Warning, site, message);
    }

    /// Writes a `DEBUG` line.
    pub fn debug(&self, site: &CallSite<'_>, message: &str) {
        self.emit(Level::Debug, site, message);
    }

    /// Writes an `INFO` line.
    pub fn info(&self, site: &CallSite<'_>, message: &str) {
        self.emit(Level::Info, site, message);
    }

    /// Writes a line with the given level.
    pub fn emit(&self, level: Level, site: &CallSite<'_>, message: &str) {
        let config = &self.inner.config;
        let _guard = self
            .inner
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let line = formats::log_line(level, &config.timestamp_format.now(), site, message);
        let result = match self.inner.o_path {
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(line.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(LogLibError::Console)
            }
            Some(ref path) => file_setup::append_to(path, line.as_bytes())
                .map_err(|e| LogLibError::io(FileOp::Append, path, e)),
        };
        if let Err(e) = result {
            config
                .error_channel
                .report(ErrorCode::Write, "writing log line failed", &e);
        }
    }

    /// The log file, or `None` with [`AppendMode::Console`].
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.inner.o_path.as_deref()
    }

    /// The directory of the log file.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.inner.config.directory
    }

    /// The append mode the logger was started with.
    #[must_use]
    pub fn append_mode(&self) -> AppendMode {
        self.inner.config.append_mode
    }

    /// The format of the timestamps.
    #[must_use]
    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.inner.config.timestamp_format
    }

    /// Registers a clone of this handle as the backend of the `log` facade,
    /// so that `log::warn!` and friends are written by this logger, too.
    ///
    /// No level filtering is applied; trace records are written as `DEBUG` lines.
    ///
    /// # Errors
    ///
    /// [`LogLibError::Log`] if a global logger is already installed.
    pub fn install(&self) -> Result<(), LogLibError> {
        log::set_boxed_logger(Box::new(self.clone()))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for LoggerHandle {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.emit(
            record.level().into(),
            &CallSite::from_record(record),
            &record.args().to_string(),
        );
    }

    fn flush(&self) {}
}
