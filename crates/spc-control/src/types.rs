//! Types produced by the control chart calculators

use serde::{Deserialize, Serialize};
use spc_core::Precision;
use std::fmt;

/// Which chart a series belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    /// Subgroup means
    XBar,
    /// Subgroup ranges
    Range,
    /// Individual readings
    Individual,
    /// Absolute differences of consecutive readings
    MovingRange,
}

impl SeriesKind {
    /// Dispersion charts only signal on the upper limit
    pub fn is_dispersion(&self) -> bool {
        matches!(self, SeriesKind::Range | SeriesKind::MovingRange)
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::XBar => write!(f, "X-bar"),
            SeriesKind::Range => write!(f, "Range"),
            SeriesKind::Individual => write!(f, "Individual"),
            SeriesKind::MovingRange => write!(f, "Moving Range"),
        }
    }
}

/// One plotted value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Index of the subgroup or reading this value came from
    pub index: usize,
    pub value: f64,
}

/// A chart's ordered points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn new(kind: SeriesKind, points: Vec<SeriesPoint>) -> Self {
        Self { kind, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values in series order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn rounded(&self, precision: &Precision) -> Self {
        Self {
            kind: self.kind,
            points: self
                .points
                .iter()
                .map(|p| SeriesPoint {
                    index: p.index,
                    value: precision.limit(p.value),
                })
                .collect(),
        }
    }
}

/// Center line and limits a single series is judged against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesBounds {
    pub center: f64,
    pub upper: f64,
    /// `None` when the series has no meaningful lower limit
    pub lower: Option<f64>,
}

/// X-bar and R chart limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    #[serde(rename = "xBarCL")]
    pub x_bar_cl: f64,
    #[serde(rename = "xBarUCL")]
    pub x_bar_ucl: f64,
    #[serde(rename = "xBarLCL")]
    pub x_bar_lcl: f64,
    #[serde(rename = "rangeCL")]
    pub range_cl: f64,
    #[serde(rename = "rangeUCL")]
    pub range_ucl: f64,
    #[serde(rename = "rangeLCL")]
    pub range_lcl: f64,
}

impl ControlLimits {
    pub fn x_bar_bounds(&self) -> SeriesBounds {
        SeriesBounds {
            center: self.x_bar_cl,
            upper: self.x_bar_ucl,
            lower: Some(self.x_bar_lcl),
        }
    }

    /// Range chart bounds; only the upper limit is checked
    pub fn range_bounds(&self) -> SeriesBounds {
        SeriesBounds {
            center: self.range_cl,
            upper: self.range_ucl,
            lower: None,
        }
    }

    pub fn rounded(&self, precision: &Precision) -> Self {
        Self {
            x_bar_cl: precision.limit(self.x_bar_cl),
            x_bar_ucl: precision.limit(self.x_bar_ucl),
            x_bar_lcl: precision.limit(self.x_bar_lcl),
            range_cl: precision.limit(self.range_cl),
            range_ucl: precision.limit(self.range_ucl),
            range_lcl: precision.limit(self.range_lcl),
        }
    }
}

impl fmt::Display for ControlLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X-bar [{:.3}, {:.3}, {:.3}] R [{:.3}, {:.3}, {:.3}]",
            self.x_bar_lcl, self.x_bar_cl, self.x_bar_ucl, self.range_lcl, self.range_cl, self.range_ucl
        )
    }
}

/// Individual and Moving-Range chart limits.
///
/// There is no MR lower limit: a moving range cannot be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndividualControlLimits {
    #[serde(rename = "individualCL")]
    pub individual_cl: f64,
    #[serde(rename = "individualUCL")]
    pub individual_ucl: f64,
    #[serde(rename = "individualLCL")]
    pub individual_lcl: f64,
    #[serde(rename = "mrCL")]
    pub mr_cl: f64,
    #[serde(rename = "mrUCL")]
    pub mr_ucl: f64,
}

impl IndividualControlLimits {
    pub fn individual_bounds(&self) -> SeriesBounds {
        SeriesBounds {
            center: self.individual_cl,
            upper: self.individual_ucl,
            lower: Some(self.individual_lcl),
        }
    }

    pub fn moving_range_bounds(&self) -> SeriesBounds {
        SeriesBounds {
            center: self.mr_cl,
            upper: self.mr_ucl,
            lower: None,
        }
    }

    pub fn rounded(&self, precision: &Precision) -> Self {
        Self {
            individual_cl: precision.limit(self.individual_cl),
            individual_ucl: precision.limit(self.individual_ucl),
            individual_lcl: precision.limit(self.individual_lcl),
            mr_cl: precision.limit(self.mr_cl),
            mr_ucl: precision.limit(self.mr_ucl),
        }
    }
}

impl fmt::Display for IndividualControlLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "I [{:.3}, {:.3}, {:.3}] MR [{:.3}, {:.3}]",
            self.individual_lcl, self.individual_cl, self.individual_ucl, self.mr_cl, self.mr_ucl
        )
    }
}

/// A point flagged by a run rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfControlPoint {
    /// Index of the subgroup or reading that was flagged
    pub series_index: usize,
    pub series: SeriesKind,
    /// Tag of the rule that fired
    pub rule: String,
    pub value: f64,
}

impl OutOfControlPoint {
    pub fn rounded(&self, precision: &Precision) -> Self {
        Self {
            value: precision.limit(self.value),
            ..self.clone()
        }
    }
}

impl fmt::Display for OutOfControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} point {} = {:.3} ({})",
            self.series, self.series_index, self.value, self.rule
        )
    }
}

/// X-bar/R limits together with both plotted series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XBarRChart {
    pub subgroup_size: usize,
    pub limits: ControlLimits,
    pub x_bar: ChartSeries,
    pub range: ChartSeries,
}

/// I-MR limits together with both plotted series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualMrChart {
    pub limits: IndividualControlLimits,
    pub individual: ChartSeries,
    pub moving_range: ChartSeries,
}
