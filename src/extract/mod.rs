//! Value extraction module
//!
//! Turns filtered report lines into numbers: IOPS counts and bandwidth
//! rates normalized to bytes per second.

pub mod field;
pub mod units;

pub use field::{extract, extract_aggregate, extract_bandwidth, extract_iops, Field, FieldValues};
pub use units::{bytes_to_mib, parse_rate, BandwidthUnit, Rate};
