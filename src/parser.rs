//! Turns raw line-oriented input into [`Marker`] records.
//!
//! Parsing is deliberately tolerant: lines that do not have exactly three
//! fields are skipped, and coordinates that cannot be read as numbers become
//! `0.0`. Nothing in this module returns an error for malformed data.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::MapError;

const FIELD_COUNT: usize = 3;

/// A single point of interest to plot on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    /// Popup text, kept exactly as it appeared in the input.
    pub label: String,
}

impl Marker {
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            label: label.into(),
        }
    }
}

/// The character splitting each input line into fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    #[default]
    Tab,
    Comma,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Tab => '\t',
            Separator::Comma => ',',
        }
    }
}

impl FromStr for Separator {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" => Ok(Separator::Tab),
            "comma" => Ok(Separator::Comma),
            other => Err(MapError::InvalidSeparator(other.to_string())),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Tab => f.write_str("tab"),
            Separator::Comma => f.write_str("comma"),
        }
    }
}

/// Parses raw input bytes. Invalid UTF-8 is replaced rather than rejected.
pub fn parse(input: &[u8], separator: Separator) -> Vec<Marker> {
    let text: Cow<'_, str> = String::from_utf8_lossy(input);
    parse_str(&text, separator)
}

/// Parses already-decoded text, one record per `\n`-terminated line.
///
/// Only lines with exactly three fields produce a marker; output order follows
/// input order.
pub fn parse_str(input: &str, separator: Separator) -> Vec<Marker> {
    input
        .split('\n')
        .filter_map(|line| parse_line(line, separator))
        .collect()
}

fn parse_line(line: &str, separator: Separator) -> Option<Marker> {
    let fields: Vec<&str> = line.split(separator.as_char()).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    Some(Marker {
        latitude: parse_coordinate(fields[0]),
        longitude: parse_coordinate(fields[1]),
        label: fields[2].to_string(),
    })
}

/// Reads a coordinate, accepting either `.` or `,` as the decimal point.
///
/// Returns `0.0` when the value is not a finite number (`nan`, `inf` and
/// overflowing values included).
pub fn parse_coordinate(field: &str) -> f64 {
    let value = field.trim();
    let normalized: Cow<'_, str> = if value.contains(',') {
        Cow::Owned(value.replace(',', "."))
    } else {
        Cow::Borrowed(value)
    };

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
