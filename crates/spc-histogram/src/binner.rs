//! Distribution histograms annotated with specification limits

use crate::builders::FixedWidthBuilder;
use crate::traits::HistogramBuilder;
use crate::types::HistogramResult;
use spc_core::{pooled_values, IndividualSample, MeasurementSpec, Result, SubgroupSample};
use tracing::{debug, instrument};

/// Default number of bins for distribution display
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Buckets raw observations into a fixed number of equal-width bins and
/// attaches the spec's LSL/USL for overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBinner {
    builder: FixedWidthBuilder,
}

impl Default for HistogramBinner {
    fn default() -> Self {
        Self::new(DEFAULT_BIN_COUNT)
    }
}

impl HistogramBinner {
    pub fn new(bin_count: usize) -> Self {
        Self {
            builder: FixedWidthBuilder::new(bin_count),
        }
    }

    pub fn bin_count(&self) -> usize {
        self.builder.target_bins().unwrap_or(DEFAULT_BIN_COUNT)
    }

    /// Bin a flat list of values
    #[instrument(skip_all, fields(values = values.len(), bins = self.bin_count()))]
    pub fn bin(&self, values: &[f64], spec: &MeasurementSpec) -> Result<HistogramResult> {
        let histogram = self.builder.build(values)?;
        debug!(
            min = histogram.min(),
            max = histogram.max(),
            bins = histogram.len(),
            "binned values"
        );
        Ok(HistogramResult {
            bins: histogram.into_bins(),
            lsl: spec.lsl(),
            usl: spec.usl(),
        })
    }

    /// Bin every value of every subgroup
    pub fn bin_subgroups(
        &self,
        subgroups: &[SubgroupSample],
        spec: &MeasurementSpec,
    ) -> Result<HistogramResult> {
        self.bin(&pooled_values(subgroups), spec)
    }

    pub fn bin_individuals(
        &self,
        samples: &[IndividualSample],
        spec: &MeasurementSpec,
    ) -> Result<HistogramResult> {
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        self.bin(&values, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spc_core::{individuals_from_values, subgroups_from_rows, Error};

    fn spec() -> MeasurementSpec {
        MeasurementSpec::symmetric(10.0, 0.3, "mm").unwrap()
    }

    #[test]
    fn test_result_carries_spec_limits() {
        let result = HistogramBinner::default()
            .bin(&[9.8, 9.9, 10.0, 10.1, 10.2], &spec())
            .unwrap();
        assert_eq!(result.bins.len(), 10);
        assert_eq!(result.total_count(), 5);
        assert_eq!(result.lsl, spec().lsl());
        assert_eq!(result.usl, spec().usl());
        assert_eq!(result.bins[9].count, 1);
    }

    #[test]
    fn test_subgroups_are_pooled() {
        let subgroups = subgroups_from_rows(vec![
            vec![9.9, 10.0, 10.1],
            vec![10.0, 10.0, 10.2],
        ]);
        let result = HistogramBinner::new(4).bin_subgroups(&subgroups, &spec()).unwrap();
        assert_eq!(result.bins.len(), 4);
        assert_eq!(result.total_count(), 6);
        assert_eq!(result.bins[0].range_start, 9.9);
        assert_eq!(result.bins[3].range_end, 10.2);
    }

    #[test]
    fn test_individuals() {
        let samples = individuals_from_values(&[1.0, 2.0, 3.0, 4.0]);
        let result = HistogramBinner::new(3).bin_individuals(&samples, &spec()).unwrap();
        assert_eq!(result.total_count(), 4);
    }

    #[test]
    fn test_empty_values_and_zero_bins() {
        let result = HistogramBinner::default().bin(&[], &spec()).unwrap();
        assert!(result.bins.is_empty());
        assert_eq!(result.usl, spec().usl());

        assert!(matches!(
            HistogramBinner::new(0).bin(&[1.0], &spec()),
            Err(Error::InvalidParameter(_))
        ));
    }
}
