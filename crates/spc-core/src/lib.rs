//! Core types for statistical process control
//!
//! This crate holds everything the SPC calculators share: the measurement
//! specification, the observation types, the control-chart factor table,
//! analysis parameters, the sample-source abstraction and the unified error
//! type.
//!
//! # Example
//!
//! ```rust
//! use spc_core::{ChartConstants, MeasurementSpec, SubgroupSample};
//!
//! let spec = MeasurementSpec::symmetric(10.0, 0.3, "mm").unwrap();
//! assert!(spec.usl() > spec.lsl());
//!
//! let subgroup = SubgroupSample::new(1, vec![10.0, 10.1, 9.9, 10.05, 9.95]);
//! let constants = ChartConstants::for_subgroup_size(subgroup.size()).unwrap();
//! println!("x-bar={:.3}, A2={}", subgroup.x_bar(), constants.a2);
//! ```

pub mod constants;
pub mod error;
pub mod params;
pub mod sample;
pub mod source;
pub mod spec;
pub mod utils;

pub use constants::{ChartConstants, D2_MR, D4_MR, E2};
pub use error::{Error, Result};
pub use params::{Precision, SpcParameters};
pub use sample::{
    individuals_from_values, pooled_values, subgroups_from_rows, validate_individuals,
    validate_subgroups, IndividualSample, SubgroupSample,
};
pub use source::{FixedSource, SampleSource};
#[cfg(feature = "simulation")]
pub use source::{SimulatedIndividualSource, SimulatedSubgroupSource};
pub use spec::MeasurementSpec;
