//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use spc_core::Precision;
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub range_start: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub range_end: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    pub fn new(range_start: f64, range_end: f64, count: usize) -> Self {
        Self {
            range_start,
            range_end,
            count,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.range_start + self.range_end) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.range_end - self.range_start
    }

    /// Check if a value falls within this bin, treating it as half-open
    pub fn contains(&self, value: f64) -> bool {
        value >= self.range_start && value < self.range_end
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}",
            self.range_start, self.range_end, self.count
        )
    }
}

/// A histogram representation of data
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// An empty histogram with no bins
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0.0, 0.0)
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn into_bins(self) -> Vec<HistogramBin> {
        self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Last bin includes its right edge
        if let Some(last) = self.bins.last() {
            if value == last.range_end {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get frequencies as a vector
    pub fn frequencies(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| bin.frequency(self.total_count))
            .collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.range_start).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.range_end);
        }
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

/// Histogram bins plus the specification limits a renderer overlays on them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramResult {
    pub bins: Vec<HistogramBin>,
    pub lsl: f64,
    pub usl: f64,
}

impl HistogramResult {
    /// Sum of all bin counts
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Copy with bin edges and limits rounded for presentation
    pub fn rounded(&self, precision: &Precision) -> Self {
        Self {
            bins: self
                .bins
                .iter()
                .map(|bin| {
                    HistogramBin::new(
                        precision.limit(bin.range_start),
                        precision.limit(bin.range_end),
                        bin.count,
                    )
                })
                .collect(),
            lsl: precision.limit(self.lsl),
            usl: precision.limit(self.usl),
        }
    }
}
