#![allow(dead_code)]

use loglib::{ErrorChannel, ErrorCode};
use std::{
    path::Path,
    sync::{Arc, Mutex},
};

pub const HEADER_START: &str = "--------------------NEW RUN: ";
pub const HEADER_END: &str = "--------------------";

pub type Reported = Arc<Mutex<Vec<(ErrorCode, String)>>>;

// An error channel that collects what is reported
pub fn collecting_channel() -> (ErrorChannel, Reported) {
    let reported: Reported = Arc::new(Mutex::new(Vec::new()));
    let t_reported = Arc::clone(&reported);
    let channel = ErrorChannel::callback(move |code, err| {
        t_reported.lock().unwrap().push((code, err.to_string()));
    });
    (channel, reported)
}

pub fn codes(reported: &Reported) -> Vec<ErrorCode> {
    reported.lock().unwrap().iter().map(|(code, _)| *code).collect()
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
        .lines()
        .map(ToString::to_string)
        .collect()
}

pub fn assert_header(line: &str) {
    assert!(
        line.starts_with(HEADER_START) && line.ends_with(HEADER_END),
        "not a header line: {line}"
    );
}

pub fn header_timestamp(line: &str) -> &str {
    assert_header(line);
    &line[HEADER_START.len()..line.len() - HEADER_END.len()]
}

#[derive(Debug, PartialEq, Eq)]
pub struct LogLine {
    pub level: String,
    pub timestamp: String,
    pub method: String,
    pub class: String,
    pub line: u32,
    pub message: String,
}

// Splits a line of the form
// <LEVEL>: [<timestamp>] in method <method> from class <class> in line <line>: <message>.
pub fn parse_log_line(line: &str) -> LogLine {
    let (level, rest) = line.split_once(": [").unwrap_or_else(|| fail(line));
    let (timestamp, rest) = rest.split_once("] in method ").unwrap_or_else(|| fail(line));
    let (method, rest) = rest.split_once(" from class ").unwrap_or_else(|| fail(line));
    let (class, rest) = rest.split_once(" in line ").unwrap_or_else(|| fail(line));
    let (line_no, message) = rest.split_once(": ").unwrap_or_else(|| fail(line));
    let message = message.strip_suffix('.').unwrap_or_else(|| fail(line));

    LogLine {
        level: level.to_string(),
        timestamp: timestamp.to_string(),
        method: method.to_string(),
        class: class.to_string(),
        line: line_no.parse().unwrap_or_else(|_| fail(line)),
        message: message.to_string(),
    }
}

fn fail(line: &str) -> ! {
    panic!("unexpected log line: {line}")
}

// Checks that the timestamp has the shape of "dd.MM HH:mm:ss" plus the given suffix length
pub fn assert_default_shape(timestamp: &str, fraction_digits: usize) {
    let expected_len = 14 + if fraction_digits > 0 { 1 + fraction_digits } else { 0 };
    assert_eq!(timestamp.len(), expected_len, "bad timestamp: {timestamp}");
    for (i, c) in timestamp.chars().enumerate() {
        let expected_sep = match i {
            2 | 14 => Some('.'),
            5 => Some(' '),
            8 | 11 => Some(':'),
            _ => None,
        };
        match expected_sep {
            Some(sep) => assert_eq!(c, sep, "bad timestamp: {timestamp}"),
            None => assert!(c.is_ascii_digit(), "bad timestamp: {timestamp}"),
        }
    }
}
