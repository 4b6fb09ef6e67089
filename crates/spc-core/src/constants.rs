//! Control chart factors keyed by subgroup size
//!
//! Values follow ASTM E2587 (Standard Practice for Use of Control Charts in
//! Statistical Process Control) and Montgomery, *Introduction to Statistical
//! Quality Control*, Appendix VI.

use crate::error::{Error, Result};
use serde::Serialize;

/// Smallest subgroup size with tabulated factors
pub const MIN_SUBGROUP_SIZE: usize = 2;
/// Largest subgroup size with tabulated factors
pub const MAX_SUBGROUP_SIZE: usize = 10;

/// Multiplier for Individual chart limits (3 / d2 at n=2)
pub const E2: f64 = 2.66;
/// Moving-range UCL multiplier (D4 at n=2)
pub const D4_MR: f64 = 3.267;
/// d2 at n=2, used to turn MR-bar into a sigma estimate
pub const D2_MR: f64 = 1.128;

// Index 0 corresponds to n=2.
const A2: [f64; 9] = [1.880, 1.023, 0.729, 0.577, 0.483, 0.419, 0.373, 0.337, 0.308];
const D2: [f64; 9] = [1.128, 1.693, 2.059, 2.326, 2.534, 2.704, 2.847, 2.970, 3.078];
const D3: [f64; 9] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.076, 0.136, 0.184, 0.223];
const D4: [f64; 9] = [3.267, 2.575, 2.282, 2.114, 2.004, 1.924, 1.864, 1.816, 1.777];

/// X-bar/R factors for one subgroup size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConstants {
    pub subgroup_size: usize,
    /// X-bar limit multiplier for R-bar
    pub a2: f64,
    /// Mean of the relative range distribution
    pub d2: f64,
    /// R chart LCL multiplier
    pub d3: f64,
    /// R chart UCL multiplier
    pub d4: f64,
}

impl ChartConstants {
    /// Look up the factors for subgroup size `n`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spc_core::ChartConstants;
    ///
    /// let c = ChartConstants::for_subgroup_size(5).unwrap();
    /// assert_eq!(c.a2, 0.577);
    /// assert_eq!(c.d2, 2.326);
    /// assert!(ChartConstants::for_subgroup_size(1).is_err());
    /// ```
    pub fn for_subgroup_size(n: usize) -> Result<Self> {
        if !(MIN_SUBGROUP_SIZE..=MAX_SUBGROUP_SIZE).contains(&n) {
            return Err(Error::UnsupportedSubgroupSize(n));
        }
        let idx = n - MIN_SUBGROUP_SIZE;
        Ok(Self {
            subgroup_size: n,
            a2: A2[idx],
            d2: D2[idx],
            d3: D3[idx],
            d4: D4[idx],
        })
    }

    /// Whether a table entry exists for `n`
    pub fn is_supported(n: usize) -> bool {
        (MIN_SUBGROUP_SIZE..=MAX_SUBGROUP_SIZE).contains(&n)
    }
}
