//! Capability analysis against specification limits
//!
//! 1. `sigma_short_term = R-bar / d2` (subgroups) or `MR-bar / d2(2)` (individuals).
//! 2. `cp = (USL - LSL) / (6 sigma)`, `cpk = min(USL - CL, CL - LSL) / (3 sigma)`.
//! 3. Pool every observation, take its mean and sample (n - 1) standard
//!    deviation, and compute `pp` / `ppk` the same way.
//!
//! A zero sigma (constant data) fails with `DegenerateVariance` instead of
//! producing infinite indices.

use crate::indices::CapabilityIndices;
use spc_control::{ControlLimits, IndividualControlLimits};
use spc_core::{
    pooled_values, validate_individuals, validate_subgroups, ChartConstants, Error,
    IndividualSample, MeasurementSpec, Result, SubgroupSample, D2_MR,
};
use statrs::statistics::Statistics;
use tracing::{debug, instrument};

/// Computes Cp/Cpk/Pp/Ppk for a chart and its raw data
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilityAnalyzer;

impl CapabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Indices for an X-bar/R series
    #[instrument(skip_all, fields(subgroups = subgroups.len()))]
    pub fn analyze(
        &self,
        subgroups: &[SubgroupSample],
        limits: &ControlLimits,
        spec: &MeasurementSpec,
    ) -> Result<CapabilityIndices> {
        let n = validate_subgroups(subgroups)?;
        let constants = ChartConstants::for_subgroup_size(n)?;
        let sigma_short_term = limits.range_cl / constants.d2;
        if sigma_short_term.is_nan() || sigma_short_term <= 0.0 {
            return Err(Error::zero_spread("R-bar"));
        }

        let pooled = pooled_values(subgroups);
        Self::indices(spec, limits.x_bar_cl, sigma_short_term, &pooled)
    }

    /// Indices for an I-MR series
    #[instrument(skip_all, fields(readings = samples.len()))]
    pub fn analyze_individuals(
        &self,
        samples: &[IndividualSample],
        limits: &IndividualControlLimits,
        spec: &MeasurementSpec,
    ) -> Result<CapabilityIndices> {
        validate_individuals(samples, 2)?;
        let sigma_short_term = limits.mr_cl / D2_MR;
        if sigma_short_term.is_nan() || sigma_short_term <= 0.0 {
            return Err(Error::zero_spread("MR-bar"));
        }

        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        Self::indices(spec, limits.individual_cl, sigma_short_term, &values)
    }

    fn indices(
        spec: &MeasurementSpec,
        center: f64,
        sigma_short_term: f64,
        pooled: &[f64],
    ) -> Result<CapabilityIndices> {
        if pooled.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: pooled.len(),
            });
        }
        let overall_mean = pooled.iter().mean();
        let overall_std_dev = pooled.iter().std_dev();
        if overall_std_dev.is_nan() || overall_std_dev <= 0.0 {
            return Err(Error::zero_spread("overall standard deviation"));
        }

        let usl = spec.usl();
        let lsl = spec.lsl();
        let tolerance = spec.tolerance();

        let cp = tolerance / (6.0 * sigma_short_term);
        let cp_upper = (usl - center) / (3.0 * sigma_short_term);
        let cp_lower = (center - lsl) / (3.0 * sigma_short_term);

        let pp = tolerance / (6.0 * overall_std_dev);
        let pp_upper = (usl - overall_mean) / (3.0 * overall_std_dev);
        let pp_lower = (overall_mean - lsl) / (3.0 * overall_std_dev);

        let indices = CapabilityIndices {
            cp,
            cpk: cp_upper.min(cp_lower),
            pp,
            ppk: pp_upper.min(pp_lower),
            sigma_short_term,
            cp_upper,
            cp_lower,
            pp_upper,
            pp_lower,
            center,
            overall_mean,
            overall_std_dev,
        };
        debug!(
            cp = indices.cp,
            cpk = indices.cpk,
            pp = indices.pp,
            ppk = indices.ppk,
            sigma_short_term,
            overall_std_dev,
            "computed capability indices"
        );
        Ok(indices)
    }
}
