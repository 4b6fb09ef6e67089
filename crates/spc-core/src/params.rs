//! Analysis parameters

use crate::constants::ChartConstants;
use crate::error::{Error, Result};
use crate::utils::round_to;
use serde::{Deserialize, Serialize};

/// Decimal places applied when results leave the engine.
///
/// Calculations always run at full `f64` precision; these are only used by
/// the `rounded()` views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Precision {
    /// Control limits, chart values and histogram edges
    pub limits: u32,
    /// Cp, Cpk, Pp, Ppk
    pub capability: u32,
    /// Sigma estimates
    pub sigma: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            limits: 3,
            capability: 2,
            sigma: 4,
        }
    }
}

impl Precision {
    pub fn limit(&self, value: f64) -> f64 {
        round_to(value, self.limits)
    }

    pub fn index(&self, value: f64) -> f64 {
        round_to(value, self.capability)
    }

    pub fn sigma(&self, value: f64) -> f64 {
        round_to(value, self.sigma)
    }
}

/// Parameters for one SPC analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpcParameters {
    /// Expected subgroup size for X-bar/R analysis
    pub subgroup_size: usize,
    /// Number of histogram bins
    pub bin_count: usize,
    pub precision: Precision,
}

impl Default for SpcParameters {
    fn default() -> Self {
        Self {
            subgroup_size: 5,
            bin_count: 10,
            precision: Precision::default(),
        }
    }
}

impl SpcParameters {
    pub fn with_subgroup_size(mut self, subgroup_size: usize) -> Self {
        self.subgroup_size = subgroup_size;
        self
    }

    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Check the parameters before running an analysis
    pub fn validate(&self) -> Result<()> {
        if self.bin_count == 0 {
            return Err(Error::InvalidParameter(
                "bin_count must be at least 1".to_string(),
            ));
        }
        ChartConstants::for_subgroup_size(self.subgroup_size)?;
        Ok(())
    }
}
