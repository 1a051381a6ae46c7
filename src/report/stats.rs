//! Mean and population standard deviation

/// Mean and population standard deviation of a non-empty sample set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

impl Summary {
    /// Summarize `values`, or `None` when there is nothing to summarize
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;

        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            count,
        })
    }

    /// Apply the same linear scale to mean and deviation
    pub fn scaled(&self, divisor: f64) -> Self {
        Self {
            mean: self.mean / divisor,
            std_dev: self.std_dev / divisor,
            count: self.count,
        }
    }
}
