// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! A small logger that formats error, warning, debug and info messages with a timestamp and
//! the call site, and writes them to a log file or to stdout.
//!
//! ```rust,ignore
//! use loglib::{AppendMode, Logger};
//!
//! let handle = Logger::new()
//!     .directory("/tmp/logtest")
//!     .file_name("test.txt")
//!     .append_mode(AppendMode::Append)
//!     .timestamp_format("dd.MM HH:mm:ss.SSS")?
//!     .start();
//!
//! loglib::error!(handle, "boom");
//! ```
//!
//! produces in `/tmp/logtest/test.txt`
//!
//! ```text
//! --------------------NEW RUN: 13.07 09:05:03.114--------------------
//! ERROR: [13.07 09:05:03.115] in method main from class my_prog in line 11: boom.
//! ```
//!
//! See
//!
//! * the builder [`Logger`] for all configuration options and their defaults,
//! * [`AppendMode`] for what happens with the log file of a previous run,
//! * [`TimestampFormat`] for the syntax of timestamp formats,
//! * [`ErrorChannel`] and the module [`error_info`] for how problems are reported.
//!
//! Writing a log line never fails from the caller's perspective: problems with the file
//! system are reported on the error channel, and the program continues.
//! Only an invalid timestamp format is returned as error, right when it is configured.
//!
//! The handle can also serve as backend for the `log` facade,
//! see [`LoggerHandle::install`].

mod append_mode;
mod call_site;
mod config;
#[cfg(feature = "config_file")]
mod config_file;
mod file_setup;
mod formats;
mod level;
mod logger;
mod logger_handle;
mod loglib_error;
mod timestamp_format;
mod util;

pub mod error_info;

pub use crate::append_mode::AppendMode;
#[doc(hidden)]
pub use crate::call_site::enclosing_fn;
pub use crate::call_site::CallSite;
pub use crate::config::{backup_file_name, DEFAULT_FILE_NAME};
pub use crate::formats::{header_line, log_line};
pub use crate::level::Level;
pub use crate::logger::Logger;
pub use crate::logger_handle::LoggerHandle;
pub use crate::loglib_error::{FileOp, LogLibError};
pub use crate::timestamp_format::{TimestampFormat, DEFAULT_TIMESTAMP_FORMAT};
pub use crate::util::{ErrorCallback, ErrorChannel, ErrorCode};
