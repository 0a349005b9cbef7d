/// Decides what happens with an already existing log file when the logger is started,
/// and whether a log file is used at all.
///
/// The default is [`AppendMode::Append`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "config_file", derive(serde_derive::Deserialize))]
#[cfg_attr(feature = "config_file", serde(rename_all = "lowercase"))]
pub enum AppendMode {
    /// New log output is appended to the content of the existing log file.
    #[default]
    Append,
    /// The existing log file is deleted, the new run starts with an empty file.
    Overwrite,
    /// The existing log file is renamed to a backup file
    /// (see [`backup_file_name`](crate::backup_file_name)), and a new log file is created.
    New,
    /// Log lines are written to stdout; no file is touched.
    Console,
}
impl AppendMode {
    /// Returns true if this mode writes to a log file.
    #[must_use]
    pub fn uses_file(self) -> bool {
        !matches!(self, Self::Console)
    }
}
