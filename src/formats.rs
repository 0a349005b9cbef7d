use crate::{util::LINE_ENDING, CallSite, Level};

const HEADER_DELIMITER: &str = "--------------------";

/// Produces the line that is written to the log file whenever a logger is started, like
/// <br>
/// ```--------------------NEW RUN: 13.07 09:05:03--------------------```
/// <br>
/// including the platform's line ending.
#[must_use]
pub fn header_line(timestamp: &str) -> String {
    format!("{HEADER_DELIMITER}NEW RUN: {timestamp}{HEADER_DELIMITER}{LINE_ENDING}")
}

/// Produces a log line like
/// <br>
/// ```ERROR: [13.07 09:05:03] in method connect from class app::db in line 42: boom.```
/// <br>
/// including the platform's line ending.
///
/// The message is taken verbatim.
#[must_use]
pub fn log_line(level: Level, timestamp: &str, site: &CallSite<'_>, message: &str) -> String {
    format!(
        "{level}: [{timestamp}] in method {} from class {} in line {}: {message}.{LINE_ENDING}",
        site.method(),
        site.class(),
        site.line(),
    )
}
