//! Core traits for control chart computation

use crate::types::SeriesBounds;
use spc_core::Result;

/// A calculator turning a sample series into control limits and chart series.
///
/// Implementations are pure: the same input always yields bit-identical
/// output and no state is kept between calls.
pub trait LimitCalculator {
    /// Observation type the chart consumes
    type Sample;
    /// Limits object the chart produces
    type Limits;
    /// Limits plus the plotted series
    type Chart;

    /// Name of the chart type
    fn method_name(&self) -> &'static str;

    /// Minimum number of samples required
    fn minimum_samples(&self) -> usize;

    /// Compute the control limits for the full series
    fn compute_limits(&self, samples: &[Self::Sample]) -> Result<Self::Limits>;

    /// Compute the limits and the series to plot against them
    fn build_chart(&self, samples: &[Self::Sample]) -> Result<Self::Chart>;

    /// Check if the calculator can handle the given sample count
    fn can_handle_size(&self, size: usize) -> bool {
        size >= self.minimum_samples()
    }
}

/// A test for special-cause variation evaluated at one point of a series.
///
/// Rules see the whole series so that run-based tests (e.g. several points
/// on one side of the center line) can look backwards from `position`.
pub trait RunRule: Send + Sync {
    /// Tag recorded on every point this rule flags
    fn tag(&self) -> &'static str;

    /// Whether the point at `position` violates the rule
    fn violates(&self, values: &[f64], position: usize, bounds: &SeriesBounds) -> bool;
}
