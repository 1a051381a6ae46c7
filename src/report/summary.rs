//! Per-direction report blocks and their text rendering

use tracing::debug;

use super::stats::Summary;
use crate::extract::extract;
use crate::extract::units::{bytes_to_mib, MIB};
use crate::filter::{CategorizedLines, Direction, LineCategory};
use crate::Result;

/// Summary block for one I/O direction
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionReport {
    pub direction: Direction,
    /// Per-job bandwidth in bytes per second
    pub bandwidth: Summary,
    /// Per-job IOPS
    pub iops: Summary,
    /// Aggregate bandwidth for the run in bytes per second, if reported
    pub aggregate_bandwidth: Option<f64>,
}

impl DirectionReport {
    /// Build the block for `direction`, or `None` when its line sets are empty
    ///
    /// A malformed `iops` token aborts the whole report.
    pub fn from_categorized(
        categorized: &CategorizedLines<'_>,
        direction: Direction,
    ) -> Result<Option<Self>> {
        let iops_category = direction.iops_category();
        let bandwidth_category = direction.bandwidth_category();

        if categorized.is_empty(iops_category) || categorized.is_empty(bandwidth_category) {
            debug!(?direction, "no per-job lines, omitting block");
            return Ok(None);
        }

        let values_for =
            |category: LineCategory| extract(categorized.get(category), category.field());
        let iops = values_for(iops_category)?;
        let bandwidth = values_for(bandwidth_category)?;
        let aggregate_bandwidth = values_for(direction.aggregate_category())?
            .samples()
            .first()
            .copied();

        match (
            Summary::from_values(bandwidth.samples()),
            Summary::from_values(iops.samples()),
        ) {
            (Some(bandwidth), Some(iops)) => Ok(Some(Self {
                direction,
                bandwidth,
                iops,
                aggregate_bandwidth,
            })),
            _ => {
                debug!(?direction, "matched lines held no usable values, omitting block");
                Ok(None)
            }
        }
    }

    /// Render the two or three summary lines for this direction
    pub fn render(&self) -> Vec<String> {
        let label = self.direction.label();
        let bandwidth = self.bandwidth.scaled(MIB);

        let mut lines = vec![
            format!(
                "Avg {} Bandwidth Per Job = {:.2} MB/s, StDev = {:.2}",
                label, bandwidth.mean, bandwidth.std_dev
            ),
            format!(
                "Avg {} IOPS = {:.2}, StDev = {:.2}",
                label, self.iops.mean, self.iops.std_dev
            ),
        ];

        if let Some(aggregate) = self.aggregate_bandwidth {
            lines.push(format!(
                "Aggregate {} Bandwidth for this fio run = {:.2} MB/s",
                label,
                bytes_to_mib(aggregate)
            ));
        }

        lines
    }
}

/// Read and write summaries of one fio report
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunReport {
    pub read: Option<DirectionReport>,
    pub write: Option<DirectionReport>,
}

impl RunReport {
    /// Filter, extract and summarize a loaded report
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let categorized = CategorizedLines::from_lines(lines);
        Ok(Self {
            read: DirectionReport::from_categorized(&categorized, Direction::Read)?,
            write: DirectionReport::from_categorized(&categorized, Direction::Write)?,
        })
    }

    pub fn get(&self, direction: Direction) -> Option<&DirectionReport> {
        match direction {
            Direction::Read => self.read.as_ref(),
            Direction::Write => self.write.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.read.is_none() && self.write.is_none()
    }

    /// Render the read block followed by the write block
    pub fn render(&self) -> Vec<String> {
        Direction::ALL
            .iter()
            .filter_map(|direction| self.get(*direction))
            .flat_map(|block| block.render())
            .collect()
    }
}
