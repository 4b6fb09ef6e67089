//! Individual and Moving-Range chart limits
//!
//! The moving range of reading `i` is `|x_i - x_{i-1}|`. The first reading has
//! no predecessor, so its moving range is undefined and excluded: a series of
//! `n` readings yields `n - 1` moving ranges and MR-bar averages only those.

use crate::traits::LimitCalculator;
use crate::types::{ChartSeries, IndividualControlLimits, IndividualMrChart, SeriesKind, SeriesPoint};
use spc_core::{utils, validate_individuals, IndividualSample, Result, D4_MR, E2};
use tracing::{debug, instrument};

/// Computes I-MR control limits from ungrouped readings
#[derive(Debug, Clone, Copy, Default)]
pub struct IndividualControlLimitCalculator;

impl IndividualControlLimitCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Moving ranges keyed by the index of the later reading of each pair
    pub fn moving_ranges(samples: &[IndividualSample]) -> Vec<SeriesPoint> {
        samples
            .windows(2)
            .map(|pair| SeriesPoint {
                index: pair[1].index,
                value: (pair[1].value - pair[0].value).abs(),
            })
            .collect()
    }

    fn limits_from(values: &[f64], moving_ranges: &[f64]) -> IndividualControlLimits {
        let x_bar = utils::mean(values);
        let mr_bar = utils::mean(moving_ranges);
        debug!(x_bar, mr_bar, readings = values.len(), "computed I-MR center lines");

        IndividualControlLimits {
            individual_cl: x_bar,
            individual_ucl: x_bar + E2 * mr_bar,
            individual_lcl: x_bar - E2 * mr_bar,
            mr_cl: mr_bar,
            mr_ucl: D4_MR * mr_bar,
        }
    }
}

impl LimitCalculator for IndividualControlLimitCalculator {
    type Sample = IndividualSample;
    type Limits = IndividualControlLimits;
    type Chart = IndividualMrChart;

    fn method_name(&self) -> &'static str {
        "I-MR"
    }

    fn minimum_samples(&self) -> usize {
        2
    }

    #[instrument(skip_all, fields(readings = samples.len()))]
    fn compute_limits(&self, samples: &[IndividualSample]) -> Result<IndividualControlLimits> {
        validate_individuals(samples, self.minimum_samples())?;
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        let mrs: Vec<f64> = Self::moving_ranges(samples).iter().map(|p| p.value).collect();
        Ok(Self::limits_from(&values, &mrs))
    }

    #[instrument(skip_all, fields(readings = samples.len()))]
    fn build_chart(&self, samples: &[IndividualSample]) -> Result<IndividualMrChart> {
        validate_individuals(samples, self.minimum_samples())?;
        let individual = ChartSeries::new(
            SeriesKind::Individual,
            samples
                .iter()
                .map(|s| SeriesPoint {
                    index: s.index,
                    value: s.value,
                })
                .collect(),
        );
        let moving_range = ChartSeries::new(SeriesKind::MovingRange, Self::moving_ranges(samples));
        let limits = Self::limits_from(&individual.values(), &moving_range.values());

        Ok(IndividualMrChart {
            limits,
            individual,
            moving_range,
        })
    }
}
