mod test_utils;

use loglib::{AppendMode, LogLibError, Logger, TimestampFormat};

#[test]
fn test_valid_formats_are_accepted() {
    let dir = temp_dir::TempDir::new().unwrap();
    for (i, pattern) in [
        "dd.MM HH:mm:ss",
        "dd.MM HH:mm:ss.SSS",
        "yyyy-MM-dd'T'HH:mm:ss.SSSSSSX",
        "EEEE, d. MMMM yy, h:mm a",
        "'run at' HH:mm",
        "yyyy-LL-dd kk:mm:ss.SSSS G",
        "YYYY 'week' w/W, F. E, KK a",
    ]
    .into_iter()
    .enumerate()
    {
        let file_name = format!("valid_{i}.txt");
        let handle = Logger::try_with_options(
            Some(dir.path()),
            Some(file_name.as_str()),
            Some(AppendMode::Overwrite),
            Some(pattern),
        )
        .unwrap_or_else(|e| panic!("{pattern} was rejected: {e}"));
        assert_eq!(handle.timestamp_format().pattern(), pattern);
        assert_eq!(test_utils::read_lines(dir.path().join(file_name)).len(), 1);
    }
}

#[test]
fn test_invalid_formats_fail_without_files() {
    let dir = temp_dir::TempDir::new().unwrap();
    for pattern in ["dd.MM qq", "HH:mm 'unterminated", "ss.SSS x", "HH:mm T"] {
        match Logger::try_with_options(
            Some(dir.path().join("logs")),
            Some("invalid.txt"),
            Some(AppendMode::Overwrite),
            Some(pattern),
        ) {
            Err(e @ LogLibError::InvalidTimestampFormat { .. }) => {
                assert!(e.to_string().contains(pattern), "{e}");
            }
            Err(e) => panic!("unexpected error for {pattern}: {e}"),
            Ok(_) => panic!("{pattern} was accepted"),
        }
    }
    assert!(!dir.path().join("logs").exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_configured_format_is_used() {
    let dir = temp_dir::TempDir::new().unwrap();
    let handle = Logger::new()
        .directory(dir.path())
        .use_timestamp_format(TimestampFormat::from_strftime("%Y|%m|%d").unwrap())
        .start();
    loglib::info!(handle, "x");

    let lines = test_utils::read_lines(handle.file_path().unwrap());
    let header_ts = test_utils::header_timestamp(&lines[0]);
    let line_ts = test_utils::parse_log_line(&lines[1]).timestamp;
    for ts in [header_ts, line_ts.as_str()] {
        let parts: Vec<&str> = ts.split('|').collect();
        assert_eq!(parts.len(), 3, "{ts}");
        assert_eq!(parts[0].len(), 4, "{ts}");
    }
}

#[test]
fn test_default_file_name() {
    let dir = temp_dir::TempDir::new().unwrap();
    let handle = Logger::try_with_options(Some(dir.path()), None::<String>, None, None).unwrap();
    assert_eq!(handle.file_path(), Some(dir.path().join("log.txt").as_path()));
    assert_eq!(handle.append_mode(), AppendMode::Append);
    assert_eq!(handle.timestamp_format().pattern(), "dd.MM HH:mm:ss");
    assert_eq!(handle.directory(), dir.path());
}
