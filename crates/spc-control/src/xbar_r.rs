//! X-bar and Range chart limits
//!
//! 1. For each subgroup compute the mean (X-bar) and the range (R).
//! 2. Grand mean X-double-bar and average range R-bar over all subgroups.
//! 3. X-bar limits: CL = X-double-bar, UCL/LCL = CL +/- A2 * R-bar.
//! 4. R limits: CL = R-bar, UCL = D4 * R-bar, LCL = D3 * R-bar.
//!
//! Factors come from [`ChartConstants`] keyed by the subgroup size.

use crate::traits::LimitCalculator;
use crate::types::{ChartSeries, ControlLimits, SeriesKind, SeriesPoint, XBarRChart};
use spc_core::{utils, validate_subgroups, ChartConstants, Error, Result, SubgroupSample};
use tracing::{debug, instrument};

/// Computes X-bar/R control limits from subgroup samples
#[derive(Debug, Clone, Default)]
pub struct ControlLimitCalculator {
    expected_size: Option<usize>,
}

impl ControlLimitCalculator {
    /// Calculator that takes the subgroup size from the first subgroup
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator that requires every subgroup to have `subgroup_size` values
    pub fn with_subgroup_size(subgroup_size: usize) -> Self {
        Self {
            expected_size: Some(subgroup_size),
        }
    }

    /// Validate the series and return its subgroup size and factors
    pub fn constants_for(&self, subgroups: &[SubgroupSample]) -> Result<ChartConstants> {
        let n = validate_subgroups(subgroups)?;
        if let Some(expected) = self.expected_size {
            if n != expected {
                // every subgroup has size n at this point, so the first one is the offender
                return Err(Error::InconsistentSubgroupSize {
                    subgroup: subgroups[0].subgroup_index,
                    expected,
                    actual: n,
                });
            }
        }
        ChartConstants::for_subgroup_size(n)
    }

    fn limits_from(x_bars: &[f64], ranges: &[f64], c: &ChartConstants) -> ControlLimits {
        let x_bar_bar = utils::mean(x_bars);
        let r_bar = utils::mean(ranges);
        debug!(
            x_bar_bar,
            r_bar,
            subgroup_size = c.subgroup_size,
            "computed X-bar/R center lines"
        );

        ControlLimits {
            x_bar_cl: x_bar_bar,
            x_bar_ucl: x_bar_bar + c.a2 * r_bar,
            x_bar_lcl: x_bar_bar - c.a2 * r_bar,
            range_cl: r_bar,
            range_ucl: c.d4 * r_bar,
            range_lcl: c.d3 * r_bar,
        }
    }
}

impl LimitCalculator for ControlLimitCalculator {
    type Sample = SubgroupSample;
    type Limits = ControlLimits;
    type Chart = XBarRChart;

    fn method_name(&self) -> &'static str {
        "X-bar/R"
    }

    fn minimum_samples(&self) -> usize {
        1
    }

    #[instrument(skip_all, fields(subgroups = subgroups.len()))]
    fn compute_limits(&self, subgroups: &[SubgroupSample]) -> Result<ControlLimits> {
        let c = self.constants_for(subgroups)?;
        let x_bars: Vec<f64> = subgroups.iter().map(SubgroupSample::x_bar).collect();
        let ranges: Vec<f64> = subgroups.iter().map(SubgroupSample::range).collect();
        Ok(Self::limits_from(&x_bars, &ranges, &c))
    }

    #[instrument(skip_all, fields(subgroups = subgroups.len()))]
    fn build_chart(&self, subgroups: &[SubgroupSample]) -> Result<XBarRChart> {
        let c = self.constants_for(subgroups)?;
        let x_bar: Vec<SeriesPoint> = subgroups
            .iter()
            .map(|s| SeriesPoint {
                index: s.subgroup_index,
                value: s.x_bar(),
            })
            .collect();
        let range: Vec<SeriesPoint> = subgroups
            .iter()
            .map(|s| SeriesPoint {
                index: s.subgroup_index,
                value: s.range(),
            })
            .collect();

        let x_bars: Vec<f64> = x_bar.iter().map(|p| p.value).collect();
        let ranges: Vec<f64> = range.iter().map(|p| p.value).collect();
        let limits = Self::limits_from(&x_bars, &ranges, &c);

        Ok(XBarRChart {
            subgroup_size: c.subgroup_size,
            limits,
            x_bar: ChartSeries::new(SeriesKind::XBar, x_bar),
            range: ChartSeries::new(SeriesKind::Range, range),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use spc_core::subgroups_from_rows;

    fn fixture() -> Vec<SubgroupSample> {
        subgroups_from_rows(vec![
            vec![10.0, 10.2, 9.8, 10.1, 9.9],
            vec![10.1, 10.3, 9.9, 10.0, 10.2],
            vec![9.9, 10.0, 9.7, 10.1, 9.8],
        ])
    }

    #[test]
    fn test_limits_for_size_five() {
        let limits = ControlLimitCalculator::new().compute_limits(&fixture()).unwrap();

        // x-bars: 10.0, 10.1, 9.9 ; ranges: 0.4, 0.4, 0.4
        assert_relative_eq!(limits.x_bar_cl, 10.0, epsilon = 1e-9);
        assert_relative_eq!(limits.range_cl, 0.4, epsilon = 1e-9);
        assert_relative_eq!(limits.x_bar_ucl, 10.0 + 0.577 * 0.4, epsilon = 1e-9);
        assert_relative_eq!(limits.x_bar_lcl, 10.0 - 0.577 * 0.4, epsilon = 1e-9);
        assert_relative_eq!(limits.range_ucl, 2.114 * 0.4, epsilon = 1e-9);
        assert_eq!(limits.range_lcl, 0.0);
    }

    #[test]
    fn test_chart_series_follow_subgroup_indices() {
        let chart = ControlLimitCalculator::new().build_chart(&fixture()).unwrap();
        assert_eq!(chart.subgroup_size, 5);
        assert_eq!(chart.x_bar.kind, SeriesKind::XBar);
        assert_eq!(chart.range.kind, SeriesKind::Range);
        assert_eq!(
            chart.x_bar.points.iter().map(|p| p.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_relative_eq!(chart.x_bar.points[1].value, 10.1, epsilon = 1e-9);
        assert_eq!(
            chart.limits,
            ControlLimitCalculator::new().compute_limits(&fixture()).unwrap()
        );
    }

    #[test]
    fn test_range_lcl_positive_for_large_subgroups() {
        let rows: Vec<Vec<f64>> = (0..4)
            .map(|i| (0..8).map(|j| 5.0 + 0.1 * j as f64 + 0.01 * i as f64).collect())
            .collect();
        let limits = ControlLimitCalculator::new()
            .compute_limits(&subgroups_from_rows(rows))
            .unwrap();
        assert_relative_eq!(limits.range_lcl, 0.136 * limits.range_cl, epsilon = 1e-12);
        assert!(limits.range_lcl > 0.0);
    }

    #[test]
    fn test_empty_series_is_insufficient() {
        let err = ControlLimitCalculator::new().compute_limits(&[]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 1, actual: 0 }));
    }

    #[test]
    fn test_mixed_sizes_rejected() {
        let rows = vec![vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![1.0, 2.0, 3.0, 4.0]];
        let err = ControlLimitCalculator::new()
            .compute_limits(&subgroups_from_rows(rows))
            .unwrap_err();
        assert!(matches!(err, Error::InconsistentSubgroupSize { subgroup: 2, .. }));
    }

    #[test]
    fn test_expected_size_enforced() {
        let err = ControlLimitCalculator::with_subgroup_size(4)
            .compute_limits(&fixture())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InconsistentSubgroupSize {
                expected: 4,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_single_value_subgroups_unsupported() {
        let rows = vec![vec![1.0], vec![2.0]];
        let err = ControlLimitCalculator::new()
            .compute_limits(&subgroups_from_rows(rows))
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedSubgroupSize(1)));
    }

    #[test]
    fn test_constant_data_gives_collapsed_limits() {
        let rows = vec![vec![3.0; 5], vec![3.0; 5]];
        let limits = ControlLimitCalculator::new()
            .compute_limits(&subgroups_from_rows(rows))
            .unwrap();
        assert_eq!(limits.x_bar_ucl, limits.x_bar_lcl);
        assert_eq!(limits.range_ucl, 0.0);
    }

    #[test]
    fn test_properties() {
        let calc = ControlLimitCalculator::new();
        assert_eq!(calc.method_name(), "X-bar/R");
        assert!(!calc.can_handle_size(0));
        assert!(calc.can_handle_size(1));
    }
}
