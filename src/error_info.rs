//! Error codes of `loglib`.
//!
//! Problems with the log file never abort the program. They are reported on the
//! configured [`ErrorChannel`](crate::ErrorChannel) and tagged with an
//! [`ErrorCode`](crate::ErrorCode). The following sections describe them.
//!
//! ## `HomeDir`
//!
//! No directory was configured, and the home directory of the current user could not
//! be determined. The log file is then written into the current directory.
//!
//! ```text
//! [loglib][ErrorCode::HomeDir] using the current directory for the log file, caused by the home directory of the current user cannot be determined
//! ```
//!
//! ## `Setup`
//!
//! Preparing the log file during [`Logger::start`](crate::Logger::start) failed:
//! the log directory could not be created, the previous log file could not be deleted
//! ([`AppendMode::Overwrite`](crate::AppendMode::Overwrite)) or renamed
//! ([`AppendMode::New`](crate::AppendMode::New)), or the log file could not be created.
//!
//! ```text
//! [loglib][ErrorCode::Setup] cannot create log file, caused by cannot create /var/log/app/log.txt: Permission denied (os error 13)
//! ```
//!
//! If the log file could not be created, all subsequent log lines will fail with `Write`.
//! If the previous log file could not be renamed, it is kept and the new run is
//! appended to it.
//!
//! ## `Header`
//!
//! The header line could not be appended to the log file.
//!
//! ## `Write`
//!
//! A log line could not be written. The line is lost; there is no retry.
//!
//! ```text
//! [loglib][ErrorCode::Write] writing log line failed, caused by cannot append to /tmp/logtest/test.txt: No such file or directory (os error 2)
//! ```
//!
//! Typically the log file was deleted or moved while the program was running.
