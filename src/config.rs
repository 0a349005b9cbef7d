use crate::{AppendMode, ErrorChannel, TimestampFormat};
use std::path::{Path, PathBuf};

/// The file name that is used if none is configured.
pub const DEFAULT_FILE_NAME: &str = "log.txt";

// The immutable configuration of a started logger, with all defaults resolved.
#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub(crate) directory: PathBuf,
    pub(crate) file_name: String,
    pub(crate) append_mode: AppendMode,
    pub(crate) timestamp_format: TimestampFormat,
    pub(crate) print_message: bool,
    pub(crate) error_channel: ErrorChannel,
}
impl Config {
    pub(crate) fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    // next to the log file, also if the file name contains a subfolder
    pub(crate) fn backup_path(&self) -> PathBuf {
        let path = self.file_path();
        let backup = path.file_name().map_or_else(
            || backup_file_name(&self.file_name),
            |name| backup_file_name(&name.to_string_lossy()),
        );
        path.with_file_name(backup)
    }
}

/// The name to which [`AppendMode::New`] renames the previous log file.
///
/// `_old` is appended to the stem of the given file name,
/// so `log.txt` is kept as `log_old.txt`.
/// An existing file with that name is replaced.
/// If the previous log file cannot be renamed, it is kept and the new run is appended to it.
///
/// ```rust
/// assert_eq!(loglib::backup_file_name("test.txt"), "test_old.txt");
/// ```
#[must_use]
pub fn backup_file_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map_or_else(|| file_name.into(), |s| s.to_string_lossy());
    match path.extension() {
        Some(ext) => format!("{stem}_old.{}", ext.to_string_lossy()),
        None => format!("{stem}_old"),
    }
}

#[cfg(test)]
mod test {
    use super::{backup_file_name, Config};
    use crate::{AppendMode, ErrorChannel, TimestampFormat};
    use std::path::Path;

    fn config(file_name: &str) -> Config {
        Config {
            directory: "/var/log".into(),
            file_name: file_name.to_string(),
            append_mode: AppendMode::New,
            timestamp_format: TimestampFormat::default(),
            print_message: false,
            error_channel: ErrorChannel::DevNull,
        }
    }

    #[test]
    fn test_paths() {
        let flat = config("app.txt");
        assert_eq!(flat.file_path(), Path::new("/var/log/app.txt"));
        assert_eq!(flat.backup_path(), Path::new("/var/log/app_old.txt"));

        let nested = config("nightly/app.txt");
        assert_eq!(nested.file_path(), Path::new("/var/log/nightly/app.txt"));
        assert_eq!(nested.backup_path(), Path::new("/var/log/nightly/app_old.txt"));
    }

    #[test]
    fn test_backup_file_name() {
        assert_eq!(backup_file_name("log.txt"), "log_old.txt");
        assert_eq!(backup_file_name("app.2024.log"), "app.2024_old.log");
        assert_eq!(backup_file_name("trace"), "trace_old");
        assert_eq!(backup_file_name(".hidden"), ".hidden_old");
    }
}
