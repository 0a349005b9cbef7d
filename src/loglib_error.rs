use std::path::PathBuf;
use thiserror::Error;

/// Describes errors in the initialization of `loglib`, and the I/O problems that the
/// logger reports on its [`ErrorChannel`](crate::ErrorChannel).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogLibError {
    /// The given timestamp format cannot be used to format the current point in time.
    #[error("timestamp format \"{pattern}\" is not valid: {reason}")]
    InvalidTimestampFormat {
        /// The rejected pattern.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A file system operation on the log file or its directory failed.
    ///
    /// This error is never returned from [`Logger::start`](crate::Logger::start)
    /// or from the emit methods; it is only handed to the error channel.
    #[error("cannot {op} {}: {source}", .path.display())]
    Io {
        /// The operation that failed.
        op: FileOp,
        /// The file or directory the operation was applied to.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed.
    #[error("cannot write to stdout: {0}")]
    Console(#[source] std::io::Error),

    /// Reading a configuration file failed.
    #[cfg(feature = "config_file")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config_file")))]
    #[error("cannot read configuration file {}: {source}", .path.display())]
    ConfigFile {
        /// The configuration file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file has invalid content.
    #[cfg(feature = "config_file")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config_file")))]
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// The home directory could not be determined.
    #[error("the home directory of the current user cannot be determined")]
    NoHomeDirectory,

    /// Installing the logger as the global `log` backend failed.
    #[error(transparent)]
    Log(#[from] log::SetLoggerError),
}

/// The file system operations that `loglib` applies to the log file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileOp {
    /// Creating the log directory.
    CreateDir,
    /// Creating the log file.
    Create,
    /// Deleting the previous log file.
    Delete,
    /// Renaming the previous log file to the backup name.
    Rename,
    /// Appending to the log file.
    Append,
}
impl std::fmt::Display for FileOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Self::CreateDir => "create directory",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Rename => "rename",
            Self::Append => "append to",
        })
    }
}

impl LogLibError {
    pub(crate) fn io(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is a configuration error,
    /// i.e. an error that the caller is expected to avoid by providing valid input.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidTimestampFormat { .. })
    }
}
