//! Field value extraction
//!
//! Lines are split on whitespace and every token containing the field
//! name is parsed. `iops` tokens must parse; bandwidth tokens that do not
//! are skipped.

use tracing::debug;

use super::units::parse_rate;
use crate::{FioSummaryError, Result};

/// Token key scanned for in filtered lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `iops=<int>,`
    Iops,
    /// `bw=<float><unit>/s,`
    Bandwidth,
    /// `aggrb=<float><unit>/s,`
    AggregateBandwidth,
}

impl Field {
    /// Name as it appears in the report
    pub fn key(&self) -> &'static str {
        match self {
            Field::Iops => "iops",
            Field::Bandwidth => "bw",
            Field::AggregateBandwidth => "aggrb",
        }
    }

    /// Strip the `<key>=` prefix and any trailing commas from a token
    fn value_text<'t>(&self, token: &'t str) -> &'t str {
        let prefix = match self {
            Field::Iops => "iops=",
            Field::Bandwidth => "bw=",
            Field::AggregateBandwidth => "aggrb=",
        };
        token
            .strip_prefix(prefix)
            .unwrap_or(token)
            .trim_end_matches(',')
    }
}

/// Values pulled out of a line set for one field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValues {
    /// One value per qualifying token (`iops`, `bw`)
    Samples(Vec<f64>),
    /// First qualifying value across all lines (`aggrb`)
    Single(Option<f64>),
}

impl FieldValues {
    pub fn samples(&self) -> &[f64] {
        match self {
            FieldValues::Samples(values) => values,
            FieldValues::Single(Some(value)) => std::slice::from_ref(value),
            FieldValues::Single(None) => &[],
        }
    }
}

/// Tokens of `lines` that mention `field`, in order
fn tokens_for<'a>(lines: &'a [&'a str], field: Field) -> impl Iterator<Item = &'a str> + 'a {
    let key = field.key();
    lines
        .iter()
        .flat_map(|line| line.split_whitespace())
        .filter(move |token| token.contains(key))
}

/// Parse every `iops=<int>,` token in `lines`
///
/// A token that mentions `iops` but does not hold an integer is fatal.
pub fn extract_iops(lines: &[&str]) -> Result<Vec<i64>> {
    tokens_for(lines, Field::Iops)
        .map(|token| {
            Field::Iops
                .value_text(token)
                .parse::<i64>()
                .map_err(|_| FioSummaryError::MalformedValue {
                    field: Field::Iops.key(),
                    token: token.to_string(),
                })
        })
        .collect()
}

fn bandwidth_value(field: Field, token: &str) -> Option<f64> {
    let parsed = parse_rate(field.value_text(token)).map(|rate| rate.bytes_per_sec());
    if parsed.is_none() {
        debug!(field = field.key(), token, "ignoring token with unrecognized rate");
    }
    parsed
}

/// Parse every `bw=` token in `lines` into bytes per second
pub fn extract_bandwidth(lines: &[&str]) -> Vec<f64> {
    tokens_for(lines, Field::Bandwidth)
        .filter_map(|token| bandwidth_value(Field::Bandwidth, token))
        .collect()
}

/// First recognizable `aggrb=` value across all `lines`, in bytes per second
// TODO: report one aggregate per status group once multi-group runs need it
pub fn extract_aggregate(lines: &[&str]) -> Option<f64> {
    tokens_for(lines, Field::AggregateBandwidth)
        .find_map(|token| bandwidth_value(Field::AggregateBandwidth, token))
}

/// Extract `field` from `lines`, dispatching on the field kind
pub fn extract(lines: &[&str], field: Field) -> Result<FieldValues> {
    let values = match field {
        Field::Iops => {
            FieldValues::Samples(extract_iops(lines)?.into_iter().map(|v| v as f64).collect())
        }
        Field::Bandwidth => FieldValues::Samples(extract_bandwidth(lines)),
        Field::AggregateBandwidth => FieldValues::Single(extract_aggregate(lines)),
    };
    Ok(values)
}
