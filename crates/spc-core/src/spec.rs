//! Measurement specification (nominal value and tolerance band)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Nominal dimension with an asymmetric tolerance band.
///
/// The specification limits are derived: `usl = nominal + tolerance_plus`
/// and `lsl = nominal - tolerance_minus`. Construction guarantees
/// `usl > lsl` and non-negative tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMeasurementSpec")]
pub struct MeasurementSpec {
    nominal: f64,
    tolerance_plus: f64,
    tolerance_minus: f64,
    unit: String,
}

impl MeasurementSpec {
    /// Create a validated specification
    pub fn new(
        nominal: f64,
        tolerance_plus: f64,
        tolerance_minus: f64,
        unit: impl Into<String>,
    ) -> Result<Self> {
        if !nominal.is_finite() || !tolerance_plus.is_finite() || !tolerance_minus.is_finite() {
            return Err(Error::InvalidSpec(
                "nominal and tolerances must be finite".to_string(),
            ));
        }
        if tolerance_plus < 0.0 || tolerance_minus < 0.0 {
            return Err(Error::InvalidSpec(format!(
                "tolerances must be non-negative (got +{tolerance_plus} / -{tolerance_minus})"
            )));
        }

        let spec = Self {
            nominal,
            tolerance_plus,
            tolerance_minus,
            unit: unit.into(),
        };
        if spec.usl() <= spec.lsl() {
            return Err(Error::InvalidSpec(format!(
                "USL ({}) must be greater than LSL ({})",
                spec.usl(),
                spec.lsl()
            )));
        }
        Ok(spec)
    }

    /// Symmetric tolerance band around the nominal
    pub fn symmetric(nominal: f64, tolerance: f64, unit: impl Into<String>) -> Result<Self> {
        Self::new(nominal, tolerance, tolerance, unit)
    }

    pub fn nominal(&self) -> f64 {
        self.nominal
    }

    pub fn tolerance_plus(&self) -> f64 {
        self.tolerance_plus
    }

    pub fn tolerance_minus(&self) -> f64 {
        self.tolerance_minus
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Upper specification limit
    pub fn usl(&self) -> f64 {
        self.nominal + self.tolerance_plus
    }

    /// Lower specification limit
    pub fn lsl(&self) -> f64 {
        self.nominal - self.tolerance_minus
    }

    /// Width of the tolerance band (`usl - lsl`)
    pub fn tolerance(&self) -> f64 {
        self.usl() - self.lsl()
    }

    /// Check whether a value lies inside the specification limits (inclusive)
    pub fn conforms(&self, value: f64) -> bool {
        value >= self.lsl() && value <= self.usl()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeasurementSpec {
    nominal: f64,
    tolerance_plus: f64,
    tolerance_minus: f64,
    #[serde(default)]
    unit: String,
}

impl TryFrom<RawMeasurementSpec> for MeasurementSpec {
    type Error = Error;

    fn try_from(raw: RawMeasurementSpec) -> Result<Self> {
        Self::new(raw.nominal, raw.tolerance_plus, raw.tolerance_minus, raw.unit)
    }
}
