//! Statistical process control toolkit
//!
//! This crate re-exports the SPC workspace crates and adds [`SpcAnalysis`],
//! which runs a full report for one measurement series:
//!
//! - control limits and plotted series (X-bar/R or I-MR)
//! - out-of-control points (Rule 1: beyond the control limits)
//! - capability indices (Cp, Cpk, Pp, Ppk) and their rating
//! - a histogram of the raw values with the specification limits attached
//!
//! All calculations run at full precision. Call `rounded()` on a report to
//! get the values a UI or export should display.
//!
//! # Example
//!
//! ```rust
//! use spc_stats::{MeasurementSpec, SpcAnalysis, SpcParameters, subgroups_from_rows};
//!
//! let spec = MeasurementSpec::symmetric(10.0, 0.3, "mm").unwrap();
//! let analysis = SpcAnalysis::new(spec, SpcParameters::default()).unwrap();
//!
//! let subgroups = subgroups_from_rows(vec![
//!     vec![9.98, 10.01, 10.00, 10.02, 9.99],
//!     vec![10.00, 9.97, 10.03, 10.01, 9.99],
//!     vec![10.01, 10.00, 9.98, 10.02, 10.00],
//! ]);
//! let report = analysis.analyze_subgroups(&subgroups).unwrap().rounded();
//! println!("{}", report.chart.limits);
//! println!("{} ({})", report.capability, report.rating);
//! ```

pub mod pipeline;

pub use pipeline::{ChartInput, IndividualReport, SpcAnalysis, XBarRReport};

pub use spc_core::{
    individuals_from_values, subgroups_from_rows, ChartConstants, Error, FixedSource,
    IndividualSample, MeasurementSpec, Precision, Result, SampleSource, SimulatedIndividualSource,
    SimulatedSubgroupSource, SpcParameters, SubgroupSample,
};

pub use spc_control::{
    BeyondControlLimits, ChartSeries, ControlLimitCalculator, ControlLimits,
    IndividualControlLimitCalculator, IndividualControlLimits, IndividualMrChart, LimitCalculator,
    OutOfControlDetector, OutOfControlPoint, RunRule, SeriesBounds, SeriesKind, SeriesPoint,
    XBarRChart,
};

pub use spc_capability::{CapabilityAnalyzer, CapabilityIndices, CapabilityRating};

pub use spc_histogram::{HistogramBin, HistogramBinner, HistogramResult};

/// Prelude for the common SPC workflow
pub mod prelude {
    pub use crate::{
        CapabilityAnalyzer, ControlLimitCalculator, HistogramBinner,
        IndividualControlLimitCalculator, LimitCalculator, MeasurementSpec,
        OutOfControlDetector, SampleSource, SpcAnalysis, SpcParameters,
    };
}
