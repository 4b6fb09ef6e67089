//! Observation types consumed by the SPC calculators

use crate::error::{Error, Result};
use crate::utils;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rational subgroup of consecutive measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubgroupSample {
    /// 1-based position of the subgroup in the series
    pub subgroup_index: usize,
    /// Measurements in the subgroup, in collection order
    pub values: Vec<f64>,
    /// When the subgroup was collected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SubgroupSample {
    pub fn new(subgroup_index: usize, values: Vec<f64>) -> Self {
        Self {
            subgroup_index,
            values,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Number of measurements in the subgroup
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Subgroup mean
    pub fn x_bar(&self) -> f64 {
        utils::mean(&self.values)
    }

    /// Subgroup range (max - min)
    pub fn range(&self) -> f64 {
        utils::range(&self.values)
    }
}

/// A single ungrouped reading for Individual/Moving-Range charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualSample {
    /// 1-based position of the reading in the series
    pub index: usize,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl IndividualSample {
    pub fn new(index: usize, value: f64) -> Self {
        Self {
            index,
            value,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Build 1-based subgroups from raw value rows
pub fn subgroups_from_rows<I, R>(rows: I) -> Vec<SubgroupSample>
where
    I: IntoIterator<Item = R>,
    R: Into<Vec<f64>>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| SubgroupSample::new(i + 1, row.into()))
        .collect()
}

/// Build 1-based individual samples from raw readings
pub fn individuals_from_values(values: &[f64]) -> Vec<IndividualSample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| IndividualSample::new(i + 1, v))
        .collect()
}

/// Validate a subgroup series and return its common subgroup size.
///
/// The series must be non-empty, every subgroup non-empty with finite values,
/// and all subgroups must share the size of the first one.
pub fn validate_subgroups(subgroups: &[SubgroupSample]) -> Result<usize> {
    let first = subgroups.first().ok_or_else(|| Error::empty_input(1))?;
    let expected = first.size();

    for subgroup in subgroups {
        if subgroup.values.is_empty() {
            return Err(Error::InvalidInput(format!(
                "subgroup {} has no values",
                subgroup.subgroup_index
            )));
        }
        if subgroup.size() != expected {
            return Err(Error::InconsistentSubgroupSize {
                subgroup: subgroup.subgroup_index,
                expected,
                actual: subgroup.size(),
            });
        }
        if subgroup.values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite(&format!(
                "subgroup {}",
                subgroup.subgroup_index
            )));
        }
    }

    Ok(expected)
}

/// Validate an individual series: at least `minimum` finite readings.
pub fn validate_individuals(samples: &[IndividualSample], minimum: usize) -> Result<()> {
    if samples.len() < minimum {
        return Err(Error::InsufficientData {
            expected: minimum,
            actual: samples.len(),
        });
    }
    if let Some(bad) = samples.iter().find(|s| !s.value.is_finite()) {
        return Err(Error::non_finite(&format!("sample {}", bad.index)));
    }
    Ok(())
}

/// Flatten every subgroup into one pooled sample, in series order
pub fn pooled_values(subgroups: &[SubgroupSample]) -> Vec<f64> {
    subgroups
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .collect()
}
