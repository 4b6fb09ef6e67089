//! Distribution histograms for SPC reports
//!
//! Raw observations are bucketed into a fixed number of equal-width bins
//! between the observed minimum and maximum. Every bin is half-open
//! `[start, end)` except the last, which is closed so the maximum value is
//! never dropped. The result carries the specification limits so a renderer
//! can draw them without recomputing.
//!
//! ```rust
//! use spc_core::MeasurementSpec;
//! use spc_histogram::HistogramBinner;
//!
//! let spec = MeasurementSpec::symmetric(10.0, 0.3, "mm").unwrap();
//! let values = vec![9.8, 9.9, 9.95, 10.0, 10.0, 10.05, 10.1, 10.2];
//!
//! let result = HistogramBinner::new(4).bin(&values, &spec).unwrap();
//! assert_eq!(result.total_count(), values.len());
//! for bin in &result.bins {
//!     println!("{bin}");
//! }
//! ```

pub mod binner;
pub mod builders;
pub mod traits;
pub mod types;

pub use binner::{HistogramBinner, DEFAULT_BIN_COUNT};
pub use builders::FixedWidthBuilder;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin, HistogramResult};

pub use spc_core::Result;
