use crate::{config::Config, formats, AppendMode, ErrorCode, FileOp, LogLibError};
use std::{
    fs::{remove_file, rename, OpenOptions},
    io::{ErrorKind, Write},
    path::Path,
};

// Brings the log file into the state that the append mode asks for,
// and writes the header line.
// Problems are reported to the error channel; the logger is usable in any case.
pub(crate) fn prepare_log_file(config: &Config) {
    let path = config.file_path();
    let report = |context: &str, err: LogLibError| {
        config.error_channel.report(ErrorCode::Setup, context, &err);
    };

    match config.append_mode {
        AppendMode::Console => return,
        AppendMode::Append => {}
        AppendMode::Overwrite => {
            if let Err(e) = remove_if_exists(&path) {
                report("cannot discard previous log file", e);
            }
        }
        AppendMode::New => {
            // if the previous file cannot be kept, the new run is appended to it
            match rename(&path, config.backup_path()) {
                Err(e) if e.kind() != ErrorKind::NotFound => {
                    report(
                        "cannot keep previous log file, appending to it",
                        LogLibError::io(FileOp::Rename, &path, e),
                    );
                }
                _ => {
                    if let Err(e) = remove_if_exists(&path) {
                        report("cannot discard previous log file", e);
                    }
                }
            }
        }
    }

    let directory = path.parent().unwrap_or(config.directory.as_path());
    if let Err(e) = std::fs::create_dir_all(directory) {
        report(
            "cannot create log directory",
            LogLibError::io(FileOp::CreateDir, directory, e),
        );
        return;
    }
    if config.print_message {
        println!("Log is written to {}", path.display());
    }
    if let Err(e) = OpenOptions::new().create(true).append(true).open(&path) {
        report("cannot create log file", LogLibError::io(FileOp::Create, &path, e));
        return;
    }

    let header = formats::header_line(&config.timestamp_format.now());
    if let Err(e) = append_to(&path, header.as_bytes()) {
        config.error_channel.report(
            ErrorCode::Header,
            "writing header line failed",
            &LogLibError::io(FileOp::Append, &path, e),
        );
    }
}

// Opens the existing file, appends, and closes it again.
pub(crate) fn append_to(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    OpenOptions::new().append(true).open(path)?.write_all(bytes)
}

fn remove_if_exists(path: &Path) -> Result<(), LogLibError> {
    match remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => {
            Err(LogLibError::io(FileOp::Delete, path, e))
        }
        _ => Ok(()),
    }
}
