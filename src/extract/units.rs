//! Rate unit parsing and conversion utilities
//!
//! fio prints per-job and aggregate bandwidth as `<number><unit>/s`.
//! Only byte and kilobyte rates are understood; anything else is
//! reported as unrecognized and left to the caller to skip.

/// Bytes in one kibibyte, used for both `KB` rates and MiB conversion
pub const KIB: f64 = 1024.0;

/// Bytes in one mebibyte
pub const MIB: f64 = KIB * KIB;

/// Unit suffix of a bandwidth token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandwidthUnit {
    /// `B/s`
    Bytes,
    /// `KB/s`, 1024 bytes per second
    Kilobytes,
}

/// Suffix text and bytes-per-unit multiplier for each known unit
const UNIT_TABLE: &[(&str, BandwidthUnit, f64)] = &[
    ("B", BandwidthUnit::Bytes, 1.0),
    ("KB", BandwidthUnit::Kilobytes, KIB),
];

impl BandwidthUnit {
    /// Look up a unit from its suffix, with or without the trailing `/s`
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let suffix = suffix.strip_suffix("/s").unwrap_or(suffix);
        UNIT_TABLE
            .iter()
            .find(|(text, _, _)| *text == suffix)
            .map(|(_, unit, _)| *unit)
    }

    /// Bytes per second represented by one of this unit
    pub fn multiplier(&self) -> f64 {
        UNIT_TABLE
            .iter()
            .find(|(_, unit, _)| unit == self)
            .map(|(_, _, factor)| *factor)
            .unwrap_or(1.0)
    }
}

/// A parsed rate before normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    pub value: f64,
    pub unit: BandwidthUnit,
}

impl Rate {
    /// The rate expressed in bytes per second
    pub fn bytes_per_sec(&self) -> f64 {
        self.value * self.unit.multiplier()
    }
}

/// Parse a rate such as `2048KB/s` into its number and unit
///
/// Returns `None` when the numeric prefix is missing or unparsable, or the
/// unit is not one of the known suffixes.
///
/// # Examples
/// ```
/// use fio_summary::extract::units::{parse_rate, BandwidthUnit};
///
/// let rate = parse_rate("2048KB/s").unwrap();
/// assert_eq!(rate.unit, BandwidthUnit::Kilobytes);
/// assert_eq!(rate.bytes_per_sec(), 2_097_152.0);
/// assert!(parse_rate("12MB/s").is_none());
/// ```
pub fn parse_rate(input: &str) -> Option<Rate> {
    let split_pos = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(input.len());
    let (number_part, unit_part) = input.split_at(split_pos);

    let unit = BandwidthUnit::from_suffix(unit_part)?;
    let value: f64 = number_part.parse().ok()?;

    Some(Rate { value, unit })
}

/// Convert bytes per second into MiB per second
pub fn bytes_to_mib(bytes_per_sec: f64) -> f64 {
    bytes_per_sec / MIB
}
