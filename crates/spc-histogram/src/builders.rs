//! Fixed-width histogram construction

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use spc_core::utils::sorted;
use spc_core::{Error, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// `[min, max]`. Bins are half-open except the last, which also holds `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    pub fn new(num_bins: usize) -> Self {
        Self { num_bins }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("histogram input"));
        }
        self.build_sorted(&sorted(sample))
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        if self.num_bins == 0 {
            return Err(Error::InvalidParameter(
                "histogram needs at least one bin".to_string(),
            ));
        }
        let (min, max) = match (sorted_sample.first(), sorted_sample.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Ok(Histogram::empty()),
        };
        let total = sorted_sample.len();

        if max == min {
            // All values are the same
            let bin = HistogramBin::new(min, max, total);
            return Ok(Histogram::new(vec![bin], total, min, max));
        }

        let width = (max - min) / self.num_bins as f64;
        let last = self.num_bins - 1;
        let mut bins: Vec<HistogramBin> = (0..self.num_bins)
            .map(|i| {
                let left = min + i as f64 * width;
                let right = if i == last {
                    max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right, 0)
            })
            .collect();

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in sorted_sample {
            while current_bin < last && value >= bins[current_bin].range_end {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        Ok(Histogram::new(bins, total, min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_width_bins() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let hist = FixedWidthBuilder::new(3).build(&data).unwrap();

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.counts(), vec![3, 3, 4]);
        assert_eq!(hist.bins()[0].range_start, 1.0);
        assert_relative_eq!(hist.bins()[0].range_end, 4.0, epsilon = 1e-12);
        assert_eq!(hist.bins()[2].range_end, 10.0);
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let data = vec![0.0, 0.5, 1.0, 1.0];
        let hist = FixedWidthBuilder::new(2).build(&data).unwrap();
        assert_eq!(hist.counts(), vec![1, 3]);
        assert_eq!(hist.find_bin(1.0), Some(1));
    }

    #[test]
    fn test_value_on_inner_edge_goes_right() {
        let data = vec![0.0, 2.0, 4.0];
        let hist = FixedWidthBuilder::new(2).build(&data).unwrap();
        assert_eq!(hist.counts(), vec![1, 2]);
    }

    #[test]
    fn test_unsorted_input() {
        let data = vec![9.0, 1.0, 5.0, 3.0, 7.0];
        let hist = FixedWidthBuilder::new(4).build(&data).unwrap();
        assert_eq!(hist.counts().iter().sum::<usize>(), 5);
        assert_eq!(hist.min(), 1.0);
        assert_eq!(hist.max(), 9.0);
    }

    #[test]
    fn test_constant_data_single_bin() {
        let hist = FixedWidthBuilder::new(10).build(&[2.5; 7]).unwrap();
        assert_eq!(hist.len(), 1);
        assert_eq!(hist.counts(), vec![7]);
        assert_eq!(hist.bins()[0].range_start, 2.5);
        assert_eq!(hist.bins()[0].range_end, 2.5);
    }

    #[test]
    fn test_empty_and_invalid() {
        let hist = FixedWidthBuilder::new(10).build(&[]).unwrap();
        assert!(hist.is_empty());
        assert_eq!(hist.total_count(), 0);

        assert!(matches!(
            FixedWidthBuilder::new(0).build(&[1.0, 2.0]),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            FixedWidthBuilder::new(5).build(&[1.0, f64::NAN]),
            Err(Error::InvalidInput(_))
        ));
    }
}
