//! Capability index types and their interpretation

use serde::{Deserialize, Serialize};
use spc_core::Precision;
use std::fmt;

/// Lowest Cpk considered capable
pub const CAPABLE_THRESHOLD: f64 = 1.33;
/// Lowest Cpk considered marginal
pub const MARGINAL_THRESHOLD: f64 = 1.00;

/// Computed capability and performance indices.
///
/// Short-term indices (Cp, Cpk) use the within-subgroup sigma estimate,
/// long-term indices (Pp, Ppk) the standard deviation of the pooled data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityIndices {
    /// (USL - LSL) / (6 * sigma_short_term)
    pub cp: f64,
    /// min(cp_upper, cp_lower)
    pub cpk: f64,
    /// (USL - LSL) / (6 * overall_std_dev)
    pub pp: f64,
    /// min(pp_upper, pp_lower)
    pub ppk: f64,
    /// Within-subgroup sigma (R-bar / d2 or MR-bar / d2)
    pub sigma_short_term: f64,
    pub cp_upper: f64,
    pub cp_lower: f64,
    pub pp_upper: f64,
    pub pp_lower: f64,
    /// Process center used for the short-term indices (the chart center line)
    pub center: f64,
    pub overall_mean: f64,
    /// Sample (n - 1) standard deviation of the pooled data
    pub overall_std_dev: f64,
}

impl CapabilityIndices {
    pub fn rating(&self) -> CapabilityRating {
        CapabilityRating::from_cpk(self.cpk)
    }

    /// Copy rounded for presentation
    pub fn rounded(&self, precision: &Precision) -> Self {
        Self {
            cp: precision.index(self.cp),
            cpk: precision.index(self.cpk),
            pp: precision.index(self.pp),
            ppk: precision.index(self.ppk),
            sigma_short_term: precision.sigma(self.sigma_short_term),
            cp_upper: precision.index(self.cp_upper),
            cp_lower: precision.index(self.cp_lower),
            pp_upper: precision.index(self.pp_upper),
            pp_lower: precision.index(self.pp_lower),
            center: precision.limit(self.center),
            overall_mean: precision.limit(self.overall_mean),
            overall_std_dev: precision.sigma(self.overall_std_dev),
        }
    }
}

impl fmt::Display for CapabilityIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cp={:.2} Cpk={:.2} Pp={:.2} Ppk={:.2} sigma={:.4} ({})",
            self.cp,
            self.cpk,
            self.pp,
            self.ppk,
            self.sigma_short_term,
            self.rating()
        )
    }
}

/// Labeling convention for Cpk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapabilityRating {
    /// Cpk >= 1.33
    Capable,
    /// 1.00 <= Cpk < 1.33
    Marginal,
    /// Cpk < 1.00
    NotCapable,
}

impl CapabilityRating {
    pub fn from_cpk(cpk: f64) -> Self {
        if cpk >= CAPABLE_THRESHOLD {
            CapabilityRating::Capable
        } else if cpk >= MARGINAL_THRESHOLD {
            CapabilityRating::Marginal
        } else {
            CapabilityRating::NotCapable
        }
    }
}

impl fmt::Display for CapabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityRating::Capable => write!(f, "capable"),
            CapabilityRating::Marginal => write!(f, "marginal"),
            CapabilityRating::NotCapable => write!(f, "not capable"),
        }
    }
}
