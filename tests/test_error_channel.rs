mod test_utils;

use loglib::{ErrorChannel, ErrorCode, Logger};

#[test]
fn test_unusable_directory_is_reported() {
    let dir = temp_dir::TempDir::new().unwrap();
    // a file where the log directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "no directory\n").unwrap();

    let (channel, reported) = test_utils::collecting_channel();
    let handle = Logger::new()
        .directory(&blocker)
        .error_channel(channel)
        .start();
    assert_eq!(test_utils::codes(&reported), vec![ErrorCode::Setup]);

    loglib::error!(handle, "lost");
    loglib::info!(handle, "lost as well");
    assert_eq!(
        test_utils::codes(&reported),
        vec![ErrorCode::Setup, ErrorCode::Write, ErrorCode::Write]
    );
    let last = reported.lock().unwrap().last().unwrap().1.clone();
    assert!(last.starts_with("cannot append to "), "{last}");

    assert_eq!(
        std::fs::read_to_string(&blocker).unwrap(),
        "no directory\n"
    );
}

#[test]
fn test_deleted_log_file_is_not_recreated() {
    let dir = temp_dir::TempDir::new().unwrap();
    let (channel, reported) = test_utils::collecting_channel();
    let handle = Logger::new()
        .directory(dir.path())
        .error_channel(channel)
        .start();
    let path = handle.file_path().unwrap().to_path_buf();

    loglib::warning!(handle, "written");
    std::fs::remove_file(&path).unwrap();
    loglib::warning!(handle, "dropped");

    assert_eq!(test_utils::codes(&reported), vec![ErrorCode::Write]);
    assert!(!path.exists());
}

#[test]
fn test_file_channel() {
    let dir = temp_dir::TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let err_file = dir.path().join("loglib.err");

    let handle = Logger::new()
        .directory(&blocker)
        .error_channel(ErrorChannel::File(err_file.clone()))
        .start();
    loglib::debug!(handle, "lost");

    let lines = test_utils::read_lines(&err_file);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[loglib][ErrorCode::Setup] "), "{}", lines[0]);
    assert!(lines[1].starts_with("[loglib][ErrorCode::Write] "), "{}", lines[1]);
}
