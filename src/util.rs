use crate::LogLibError;
use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    sync::Arc,
};

#[cfg(windows)]
pub(crate) const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_ENDING: &str = "\n";

/// Classifies the problems that `loglib` reports on its [`ErrorChannel`].
///
/// See [`error_info`](crate::error_info) for details.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The home directory could not be determined, the current directory is used instead.
    HomeDir,
    /// Preparing the log file (creating, deleting, renaming) failed.
    Setup,
    /// Writing the header line failed.
    Header,
    /// Writing a log line failed.
    Write,
}
impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::HomeDir => "HomeDir",
            Self::Setup => "Setup",
            Self::Header => "Header",
            Self::Write => "Write",
        }
    }
}

/// Function type for [`ErrorChannel::Callback`].
pub type ErrorCallback = Arc<dyn Fn(ErrorCode, &LogLibError) + Send + Sync>;

/// Describes where `loglib` reports its own problems.
///
/// Problems with the log file never abort the program, and they are never returned to
/// the caller of an emit method. By default they are printed to stderr.
#[derive(Clone, Default)]
pub enum ErrorChannel {
    /// Problems are printed to stderr.
    #[default]
    StdErr,
    /// Problems are printed to stdout.
    StdOut,
    /// Problems are appended to the given file.
    File(PathBuf),
    /// Problems are handed to the given function.
    Callback(ErrorCallback),
    /// Problems are ignored.
    DevNull,
}
impl ErrorChannel {
    /// Convenience constructor for [`ErrorChannel::Callback`].
    #[must_use]
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(ErrorCode, &LogLibError) + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    pub(crate) fn report(&self, code: ErrorCode, context: &str, err: &LogLibError) {
        match self {
            Self::StdErr => eprintln!("{}", diagnostic(code, context, err)),
            Self::StdOut => println!("{}", diagnostic(code, context, err)),
            Self::File(path) => {
                let written = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .and_then(|mut file| {
                        writeln!(file, "{}", diagnostic(code, context, err))
                    });
                if let Err(e) = written {
                    eprintln!("{}", diagnostic(code, context, err));
                    eprintln!(
                        "[loglib] cannot write to error channel {}: {e}",
                        path.display()
                    );
                }
            }
            Self::Callback(f) => f(code, err),
            Self::DevNull => {}
        }
    }
}
impl std::fmt::Debug for ErrorChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::StdErr => f.write_str("StdErr"),
            Self::StdOut => f.write_str("StdOut"),
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Callback(_) => f.write_str("Callback(<fn>)"),
            Self::DevNull => f.write_str("DevNull"),
        }
    }
}

fn diagnostic(code: ErrorCode, context: &str, err: &LogLibError) -> String {
    format!("[loglib][ErrorCode::{}] {context}, caused by {err}", code.as_str())
}
