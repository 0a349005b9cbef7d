use crate::LogLibError;
use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Datelike, Local, TimeZone, Timelike,
};
use std::{
    fmt::{self, Write},
    str::FromStr,
};

/// The timestamp pattern that is used if none is configured.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "dd.MM HH:mm:ss";

/// A validated format for the timestamps in the header line and in the log lines.
///
/// Patterns are built from pattern letters, like the default `dd.MM HH:mm:ss`.
/// For numbers, the number of letters is the minimum number of digits:
///
/// | letters | meaning | example |
/// |---|---|---|
/// | `G` | era | `AD` |
/// | `yy`, `y`, `yyyy` | year (`yy` is truncated to two digits) | `17`, `2017` |
/// | `YY`, `Y`, `YYYY` | ISO week-based year | `17`, `2017` |
/// | `M`, `MM`, `MMM`, `MMMM` | month | `7`, `07`, `Jul`, `July` |
/// | `L`, `LL`, `LLL`, `LLLL` | month, same as `M` | `7`, `07`, `Jul`, `July` |
/// | `w` | ISO week of year | `28` |
/// | `W` | week of month, weeks start on Monday | `3` |
/// | `D` | day of year | `194` |
/// | `d`, `dd` | day of month | `3`, `03` |
/// | `F` | day of week in month | `2` |
/// | `E`, `EEE`, `EEEE` | weekday | `Thu`, `Thursday` |
/// | `u` | weekday number, Monday is 1 | `4` |
/// | `a` | AM/PM marker | `AM` |
/// | `H`, `HH` | hour (0-23) | `9`, `09` |
/// | `k`, `kk` | hour (1-24) | `9`, `09` |
/// | `K`, `KK` | hour (0-11) | `9`, `09` |
/// | `h`, `hh` | hour (1-12) | `9`, `09` |
/// | `m`, `mm` | minute | `5`, `05` |
/// | `s`, `ss` | second | `3`, `03` |
/// | `S`, `SS`, `SSS` | millisecond | `42`, `42`, `042` |
/// | `SSSS` and longer | fraction of second with that many digits | `0420`, `042000` |
/// | `z`, `Z`, `X` | time zone | `+02:00`, `+0200`, `+02:00` |
///
/// Text in single quotes is copied literally, `''` is a single quote.
/// Other ASCII letters are rejected, all other characters are copied literally.
///
/// Alternatively, a chrono `strftime` string can be used with
/// [`TimestampFormat::from_strftime`].
///
/// Every constructor verifies the format by rendering the current point in time with it,
/// so an existing `TimestampFormat` can always be used without failure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimestampFormat {
    pattern: String,
    pieces: Vec<Piece>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Piece {
    Literal(String),
    Strftime(String),
    Number(Field, usize),
    // number of digits
    Fraction(usize),
    Era,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Field {
    Year,
    WeekYear,
    Month,
    WeekOfYear,
    WeekOfMonth,
    DayOfYear,
    DayOfMonth,
    DayOfWeekInMonth,
    WeekdayNumber,
    Hour0To23,
    Hour1To24,
    Hour0To11,
    Hour1To12,
    Minute,
    Second,
    Millisecond,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        let literal = |s: &str| Piece::Literal(s.to_string());
        Self {
            pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            pieces: vec![
                Piece::Number(Field::DayOfMonth, 2),
                literal("."),
                Piece::Number(Field::Month, 2),
                literal(" "),
                Piece::Number(Field::Hour0To23, 2),
                literal(":"),
                Piece::Number(Field::Minute, 2),
                literal(":"),
                Piece::Number(Field::Second, 2),
            ],
        }
    }
}
impl TimestampFormat {
    /// Parses and verifies a pattern.
    ///
    /// # Errors
    ///
    /// [`LogLibError::InvalidTimestampFormat`] if the pattern contains an unknown pattern letter
    /// or an unterminated quote, or if it cannot render the current point in time.
    pub fn try_new<S: Into<String>>(pattern: S) -> Result<Self, LogLibError> {
        let pattern = pattern.into();
        match parse(&pattern) {
            Ok(pieces) => Self::verified(pattern, pieces),
            Err(reason) => Err(LogLibError::InvalidTimestampFormat { pattern, reason }),
        }
    }

    /// Verifies a chrono `strftime` string, like `"%Y-%m-%d %H:%M:%S%.3f"`.
    ///
    /// # Errors
    ///
    /// [`LogLibError::InvalidTimestampFormat`] if the string cannot render the current point in time.
    pub fn from_strftime<S: Into<String>>(strftime: S) -> Result<Self, LogLibError> {
        let strftime = strftime.into();
        Self::verified(strftime.clone(), vec![Piece::Strftime(strftime)])
    }

    fn verified(pattern: String, pieces: Vec<Piece>) -> Result<Self, LogLibError> {
        let format = Self { pattern, pieces };
        match format.verify() {
            Ok(()) => Ok(format),
            Err(reason) => Err(LogLibError::InvalidTimestampFormat {
                pattern: format.pattern,
                reason,
            }),
        }
    }

    fn verify(&self) -> Result<(), String> {
        for piece in &self.pieces {
            if let Piece::Strftime(strftime) = piece {
                if StrftimeItems::new(strftime).any(|item| matches!(item, Item::Error)) {
                    return Err("unknown or incomplete strftime specifier".to_string());
                }
            }
        }
        let mut sample = String::new();
        self.write_to(&Local::now(), &mut sample)
            .map_err(|_| "cannot render the current point in time".to_string())
    }

    /// The pattern this format was created from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders the given point in time.
    #[must_use]
    pub fn format<Tz>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut rendered = String::new();
        // the format was verified on construction
        let _ = self.write_to(timestamp, &mut rendered);
        rendered
    }

    /// Renders the current local time.
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }

    fn write_to<Tz>(&self, timestamp: &DateTime<Tz>, out: &mut String) -> fmt::Result
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Strftime(strftime) => write!(out, "{}", timestamp.format(strftime))?,
                Piece::Number(field, width) => {
                    let (value, width) = field.value(timestamp, *width);
                    write!(out, "{value:0width$}")?;
                }
                Piece::Fraction(digits) => {
                    let digits = *digits;
                    let nanos = format!("{:09}", timestamp.nanosecond() % 1_000_000_000);
                    if digits <= 9 {
                        out.push_str(&nanos[..digits]);
                    } else {
                        write!(out, "{nanos:0<digits$}")?;
                    }
                }
                Piece::Era => out.push_str(if timestamp.year() > 0 { "AD" } else { "BC" }),
            }
        }
        Ok(())
    }
}
impl FromStr for TimestampFormat {
    type Err = LogLibError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl Field {
    // The value, and the width it is padded to.
    fn value<Tz: TimeZone>(self, ts: &DateTime<Tz>, width: usize) -> (i64, usize) {
        let day = i64::from(ts.day());
        let value = match self {
            Self::Year | Self::WeekYear => {
                let year = i64::from(if self == Self::Year {
                    ts.year()
                } else {
                    ts.iso_week().year()
                });
                if width == 2 {
                    return (year.rem_euclid(100), 2);
                }
                year
            }
            Self::Month => i64::from(ts.month()),
            Self::WeekOfYear => i64::from(ts.iso_week().week()),
            Self::WeekOfMonth => {
                let weekday = i64::from(ts.weekday().num_days_from_monday());
                let first_of_month = (weekday - (day - 1)).rem_euclid(7);
                (day - 1 + first_of_month) / 7 + 1
            }
            Self::DayOfYear => i64::from(ts.ordinal()),
            Self::DayOfMonth => day,
            Self::DayOfWeekInMonth => (day - 1) / 7 + 1,
            Self::WeekdayNumber => i64::from(ts.weekday().number_from_monday()),
            Self::Hour0To23 => i64::from(ts.hour()),
            Self::Hour1To24 => match ts.hour() {
                0 => 24,
                h => i64::from(h),
            },
            Self::Hour0To11 => i64::from(ts.hour() % 12),
            Self::Hour1To12 => i64::from(ts.hour12().1),
            Self::Minute => i64::from(ts.minute()),
            Self::Second => i64::from(ts.second()),
            Self::Millisecond => i64::from(ts.nanosecond() % 1_000_000_000 / 1_000_000),
        };
        (value, width)
    }
}

fn parse(pattern: &str) -> Result<Vec<Piece>, String> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.next_if_eq(&'\'').is_some() {
                literal.push('\'');
                continue;
            }
            let mut terminated = false;
            while let Some(q) = chars.next() {
                if q != '\'' {
                    literal.push(q);
                } else if chars.next_if_eq(&'\'').is_some() {
                    literal.push('\'');
                } else {
                    terminated = true;
                    break;
                }
            }
            if !terminated {
                return Err("unterminated quote".to_string());
            }
        } else if c.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.next_if_eq(&c).is_some() {
                count += 1;
            }
            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            pieces.push(piece(c, count)?);
        } else {
            literal.push(c);
        }
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

fn piece(letter: char, count: usize) -> Result<Piece, String> {
    let strftime = |s: &str| Piece::Strftime(s.to_string());
    let number = |field| Piece::Number(field, count);
    Ok(match letter {
        'G' => Piece::Era,
        'y' => number(Field::Year),
        'Y' => number(Field::WeekYear),
        'M' | 'L' => match count {
            1 | 2 => number(Field::Month),
            3 => strftime("%b"),
            _ => strftime("%B"),
        },
        'w' => number(Field::WeekOfYear),
        'W' => number(Field::WeekOfMonth),
        'D' => number(Field::DayOfYear),
        'd' => number(Field::DayOfMonth),
        'F' => number(Field::DayOfWeekInMonth),
        'E' if count <= 3 => strftime("%a"),
        'E' => strftime("%A"),
        'u' => number(Field::WeekdayNumber),
        'a' => strftime("%p"),
        'H' => number(Field::Hour0To23),
        'k' => number(Field::Hour1To24),
        'K' => number(Field::Hour0To11),
        'h' => number(Field::Hour1To12),
        'm' => number(Field::Minute),
        's' => number(Field::Second),
        'S' if count <= 3 => number(Field::Millisecond),
        'S' => Piece::Fraction(count),
        'z' => strftime("%Z"),
        'Z' => strftime("%z"),
        'X' => strftime("%:z"),
        c => return Err(format!("illegal pattern letter '{c}'")),
    })
}
