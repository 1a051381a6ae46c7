//! Line categories and their matching rules

use tracing::debug;

use crate::extract::Field;

/// I/O direction of a report block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Read,
    Write,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Read, Direction::Write];

    /// Capitalized label used in the rendered summary
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Read => "Read",
            Direction::Write => "Write",
        }
    }

    pub fn iops_category(&self) -> LineCategory {
        match self {
            Direction::Read => LineCategory::ReadIops,
            Direction::Write => LineCategory::WriteIops,
        }
    }

    pub fn bandwidth_category(&self) -> LineCategory {
        match self {
            Direction::Read => LineCategory::ReadBandwidth,
            Direction::Write => LineCategory::WriteBandwidth,
        }
    }

    pub fn aggregate_category(&self) -> LineCategory {
        match self {
            Direction::Read => LineCategory::AggregateReadBandwidth,
            Direction::Write => LineCategory::AggregateWriteBandwidth,
        }
    }
}

/// Category a report line can fall into; categories are not exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCategory {
    /// Per-job read line carrying `iops=`
    ReadIops,
    /// Per-job write line carrying `iops=`
    WriteIops,
    /// Per-job read line carrying `bw=`
    ReadBandwidth,
    /// Per-job write line carrying `bw=`
    WriteBandwidth,
    /// Run status `READ:` line carrying `aggrb=`
    AggregateReadBandwidth,
    /// Run status `WRITE:` line carrying `aggrb=`
    AggregateWriteBandwidth,
}

impl LineCategory {
    pub const ALL: [LineCategory; 6] = [
        LineCategory::ReadIops,
        LineCategory::WriteIops,
        LineCategory::ReadBandwidth,
        LineCategory::WriteBandwidth,
        LineCategory::AggregateReadBandwidth,
        LineCategory::AggregateWriteBandwidth,
    ];

    /// The two markers a line must contain, in this order
    pub fn markers(&self) -> (&'static str, &'static str) {
        match self {
            LineCategory::ReadIops => ("read", "iops"),
            LineCategory::WriteIops => ("write", "iops"),
            LineCategory::ReadBandwidth => ("read", "bw"),
            LineCategory::WriteBandwidth => ("write", "bw"),
            LineCategory::AggregateReadBandwidth => ("READ", "aggrb"),
            LineCategory::AggregateWriteBandwidth => ("WRITE", "aggrb"),
        }
    }

    /// Field whose values are extracted from lines of this category
    pub fn field(&self) -> Field {
        match self {
            LineCategory::ReadIops | LineCategory::WriteIops => Field::Iops,
            LineCategory::ReadBandwidth | LineCategory::WriteBandwidth => Field::Bandwidth,
            LineCategory::AggregateReadBandwidth | LineCategory::AggregateWriteBandwidth => {
                Field::AggregateBandwidth
            }
        }
    }

    /// Check whether a single line belongs to this category
    pub fn matches(&self, line: &str) -> bool {
        let (first, second) = self.markers();
        contains_in_order(line, first, second)
    }

    fn index(&self) -> usize {
        match self {
            LineCategory::ReadIops => 0,
            LineCategory::WriteIops => 1,
            LineCategory::ReadBandwidth => 2,
            LineCategory::WriteBandwidth => 3,
            LineCategory::AggregateReadBandwidth => 4,
            LineCategory::AggregateWriteBandwidth => 5,
        }
    }
}

/// True when `first` occurs in `line` and `second` occurs somewhere after it
///
/// The two occurrences may not overlap.
pub fn contains_in_order(line: &str, first: &str, second: &str) -> bool {
    match line.find(first) {
        Some(start) => line[start + first.len()..].contains(second),
        None => false,
    }
}

/// Ordered subsequence of `lines` matching `category`
pub fn filter_lines<'a, S: AsRef<str>>(lines: &'a [S], category: LineCategory) -> Vec<&'a str> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| category.matches(line))
        .collect()
}

/// Every category's filtered line set, computed in one place
#[derive(Debug, Default)]
pub struct CategorizedLines<'a> {
    sets: [Vec<&'a str>; 6],
}

impl<'a> CategorizedLines<'a> {
    pub fn from_lines<S: AsRef<str>>(lines: &'a [S]) -> Self {
        let mut categorized = Self::default();
        for category in LineCategory::ALL {
            let matched = filter_lines(lines, category);
            debug!(?category, matched = matched.len(), "filtered report lines");
            categorized.sets[category.index()] = matched;
        }
        categorized
    }

    pub fn get(&self, category: LineCategory) -> &[&'a str] {
        &self.sets[category.index()]
    }

    pub fn is_empty(&self, category: LineCategory) -> bool {
        self.get(category).is_empty()
    }
}
