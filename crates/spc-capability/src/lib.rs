//! Process capability and performance indices
//!
//! Compares the spread of a process against its specification limits:
//!
//! - **Cp / Cpk**: short-term capability from the within-subgroup sigma
//!   estimate (R-bar / d2, or MR-bar / d2 for individuals)
//! - **Pp / Ppk**: long-term performance from the standard deviation of all
//!   pooled observations
//!
//! ```rust
//! use spc_capability::{CapabilityAnalyzer, CapabilityRating};
//! use spc_control::{ControlLimitCalculator, LimitCalculator};
//! use spc_core::{subgroups_from_rows, MeasurementSpec};
//!
//! let spec = MeasurementSpec::symmetric(10.0, 0.5, "mm").unwrap();
//! let subgroups = subgroups_from_rows(vec![
//!     vec![9.98, 10.01, 10.00, 10.02, 9.99],
//!     vec![10.00, 9.97, 10.03, 10.01, 9.99],
//! ]);
//! let limits = ControlLimitCalculator::new().compute_limits(&subgroups).unwrap();
//! let indices = CapabilityAnalyzer::new()
//!     .analyze(&subgroups, &limits, &spec)
//!     .unwrap();
//! assert_eq!(indices.rating(), CapabilityRating::Capable);
//! ```

pub mod analyzer;
pub mod indices;

pub use analyzer::CapabilityAnalyzer;
pub use indices::{CapabilityIndices, CapabilityRating, CAPABLE_THRESHOLD, MARGINAL_THRESHOLD};

pub use spc_core::Result;
