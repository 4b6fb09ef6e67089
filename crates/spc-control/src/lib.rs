//! Shewhart control charts for variables data
//!
//! This crate computes control limits for X-bar/R charts (subgrouped data)
//! and Individual/Moving-Range charts (ungrouped readings), and scans the
//! resulting series for out-of-control points.
//!
//! # Charts
//!
//! - [`ControlLimitCalculator`]: X-bar and R limits from subgroups (n = 2..=10)
//! - [`IndividualControlLimitCalculator`]: I and MR limits from individual readings
//!
//! # Detection
//!
//! - [`OutOfControlDetector`]: single-pass scan applying [`RunRule`]s
//! - [`BeyondControlLimits`]: Rule 1, the only rule enabled by default
//!
//! ## Usage
//!
//! ```rust
//! use spc_control::{ControlLimitCalculator, LimitCalculator, OutOfControlDetector};
//! use spc_core::subgroups_from_rows;
//!
//! let subgroups = subgroups_from_rows(vec![
//!     vec![25.0, 26.0, 24.5, 25.5, 25.0],
//!     vec![25.2, 24.8, 25.1, 24.9, 25.3],
//!     vec![25.1, 25.0, 24.7, 25.3, 24.9],
//! ]);
//!
//! let chart = ControlLimitCalculator::new().build_chart(&subgroups).unwrap();
//! assert!(chart.limits.x_bar_ucl > chart.limits.x_bar_cl);
//!
//! let flagged = OutOfControlDetector::new().detect_xbar_r(&chart);
//! println!("{} out-of-control points", flagged.len());
//! ```
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587, Standard Practice for Use of Control Charts

pub mod detector;
pub mod individual;
pub mod rules;
pub mod traits;
pub mod types;
pub mod xbar_r;

pub use detector::OutOfControlDetector;
pub use individual::IndividualControlLimitCalculator;
pub use rules::BeyondControlLimits;
pub use traits::{LimitCalculator, RunRule};
pub use types::{
    ChartSeries, ControlLimits, IndividualControlLimits, IndividualMrChart, OutOfControlPoint,
    SeriesBounds, SeriesKind, SeriesPoint, XBarRChart,
};
pub use xbar_r::ControlLimitCalculator;

pub use spc_core::Result;
