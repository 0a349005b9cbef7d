use crate::{AppendMode, LogLibError, Logger};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

// The content of a configuration file; all keys are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggerFileConfig {
    directory: Option<PathBuf>,
    file_name: Option<String>,
    append_mode: Option<AppendMode>,
    timestamp_format: Option<String>,
    #[serde(default)]
    print_message: bool,
}

impl Logger {
    /// Creates a `Logger` from a TOML document like
    ///
    /// ```toml
    /// directory = "/tmp/logtest"
    /// file_name = "test.txt"
    /// append_mode = "new"        # append | overwrite | new | console
    /// timestamp_format = "dd.MM HH:mm:ss.SSS"
    /// print_message = false
    /// ```
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// [`LogLibError::Toml`] if the document cannot be parsed,
    /// [`LogLibError::InvalidTimestampFormat`] if the timestamp format is invalid.
    pub fn try_from_toml_str(s: &str) -> Result<Self, LogLibError> {
        let file_config: LoggerFileConfig = toml::from_str(s)?;
        let mut logger = Self::new()
            .o_directory(file_config.directory)
            .o_file_name(file_config.file_name)
            .append_mode(file_config.append_mode.unwrap_or_default())
            .o_timestamp_format(file_config.timestamp_format.as_deref())?;
        if file_config.print_message {
            logger = logger.print_message();
        }
        Ok(logger)
    }

    /// Creates a `Logger` from a TOML file, see [`Logger::try_from_toml_str`].
    ///
    /// # Errors
    ///
    /// [`LogLibError::ConfigFile`] if the file cannot be read,
    /// and the errors of [`Logger::try_from_toml_str`].
    pub fn try_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LogLibError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| LogLibError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::try_from_toml_str(&s)
    }
}
