//! Unit-aware size and speed handling.
//!
//! Everything internal to the simulator is normalized to megabytes (and
//! MB/s) before any arithmetic happens. The suffix table uses binary
//! multipliers; a bare size defaults to gigabytes, while a bare speed uses
//! a caller-supplied default unit scaled to the declared size.

pub mod duration;

use crate::error::EtaError;

/// Multipliers into the MB base unit.
pub const MB: f64 = 1.0;
pub const GB: f64 = 1024.0;
pub const TB: f64 = 1024.0 * 1024.0;
pub const PB: f64 = 1024.0 * 1024.0 * 1024.0;

/// A display/input unit for sizes and speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Mb,
    Gb,
    Tb,
    Pb,
}

impl Unit {
    /// Multiplier converting this unit into the MB base unit.
    pub fn factor(self) -> f64 {
        match self {
            Unit::Mb => MB,
            Unit::Gb => GB,
            Unit::Tb => TB,
            Unit::Pb => PB,
        }
    }

    /// Label for speeds expressed in this unit, e.g. `MB/s`.
    pub fn speed_label(self) -> &'static str {
        match self {
            Unit::Mb => "MB/s",
            Unit::Gb => "GB/s",
            Unit::Tb => "TB/s",
            Unit::Pb => "PB/s",
        }
    }
}

// Two-letter suffixes must be checked before the one-letter forms so that
// "2gb" strips "gb" instead of leaving a stray 'g' in the numeric part.
const SUFFIXES: &[(&str, Unit)] = &[
    ("mb", Unit::Mb),
    ("gb", Unit::Gb),
    ("tb", Unit::Tb),
    ("pb", Unit::Pb),
    ("m", Unit::Mb),
    ("g", Unit::Gb),
    ("t", Unit::Tb),
    ("p", Unit::Pb),
];

/// Split a lower-cased input into its numeric part and recognized unit.
fn split_unit(s: &str) -> (&str, Option<Unit>) {
    for (suffix, unit) in SUFFIXES {
        if let Some(number) = s.strip_suffix(suffix) {
            return (number, Some(*unit));
        }
    }
    (s, None)
}

/// Parse a human quantity string into MB, falling back to `default_unit`
/// when no suffix is present.
fn parse_quantity(input: &str, default_unit: Unit) -> Result<f64, String> {
    let normalized = input.trim().to_lowercase();
    let (number, unit) = split_unit(&normalized);
    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", number.trim()))?;
    let mb = value * unit.unwrap_or(default_unit).factor();
    if !mb.is_finite() {
        return Err("amount is not finite".to_string());
    }
    if mb <= 0.0 {
        return Err("amount must be greater than zero".to_string());
    }
    Ok(mb)
}

/// Parse a size string (`"500M"`, `"2G"`, `"10T"`, `"1P"`, or a bare
/// number meaning gigabytes) into MB.
pub fn parse_size(input: &str) -> Result<f64, EtaError> {
    parse_quantity(input, Unit::Gb).map_err(|reason| EtaError::InvalidSize {
        input: input.trim().to_string(),
        reason,
    })
}

/// Parse a speed string into MB/s. A bare number is interpreted in
/// `default_unit`, which callers derive from the declared size.
pub fn parse_speed(input: &str, default_unit: Unit) -> Result<f64, EtaError> {
    parse_quantity(input, default_unit).map_err(|reason| EtaError::InvalidSpeed {
        input: input.trim().to_string(),
        reason,
    })
}

/// Default unit for a unit-less speed input, scaled to the declared size.
///
/// Keeps the implied ETA sane: a bare "500" against a petabyte payload
/// means 500 TB/s, not 500 MB/s.
pub fn default_speed_unit(size_mb: f64) -> Unit {
    if size_mb < TB {
        Unit::Mb
    } else if size_mb < PB {
        Unit::Gb
    } else {
        Unit::Tb
    }
}

/// Format an MB value in the largest unit with magnitude >= 1, two decimals.
pub fn format_size(mb: f64) -> String {
    if mb >= PB {
        format!("{:.2} PB", mb / PB)
    } else if mb >= TB {
        format!("{:.2} TB", mb / TB)
    } else if mb >= GB {
        format!("{:.2} GB", mb / GB)
    } else {
        format!("{:.2} MB", mb)
    }
}

/// Format an MB/s value in the largest unit with magnitude >= 1, two decimals.
pub fn format_speed(mbps: f64) -> String {
    if mbps >= PB {
        format!("{:.2} PB/s", mbps / PB)
    } else if mbps >= TB {
        format!("{:.2} TB/s", mbps / TB)
    } else if mbps >= GB {
        format!("{:.2} GB/s", mbps / GB)
    } else {
        format!("{:.2} MB/s", mbps)
    }
}
