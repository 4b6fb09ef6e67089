//! One-shot SPC report for a measurement series
//!
//! Each call runs the whole chain (limits, detection, capability, histogram)
//! and either returns a complete report or the first error. Partial reports
//! are never produced.

use serde::Serialize;
use spc_capability::{CapabilityAnalyzer, CapabilityIndices, CapabilityRating};
use spc_control::{
    ControlLimitCalculator, IndividualControlLimitCalculator, IndividualMrChart, LimitCalculator,
    OutOfControlDetector, OutOfControlPoint, XBarRChart,
};
use spc_core::{
    IndividualSample, MeasurementSpec, Precision, Result, SampleSource, SpcParameters,
    SubgroupSample,
};
use spc_histogram::{HistogramBinner, HistogramResult};
use tracing::{debug, instrument};

/// Report for an X-bar/R analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XBarRReport {
    pub spec: MeasurementSpec,
    pub chart: XBarRChart,
    pub out_of_control: Vec<OutOfControlPoint>,
    pub capability: CapabilityIndices,
    pub rating: CapabilityRating,
    pub histogram: HistogramResult,
    #[serde(skip)]
    precision: Precision,
}

impl XBarRReport {
    /// Copy with every number rounded to the configured precision
    pub fn rounded(&self) -> Self {
        let p = &self.precision;
        Self {
            spec: self.spec.clone(),
            chart: XBarRChart {
                subgroup_size: self.chart.subgroup_size,
                limits: self.chart.limits.rounded(p),
                x_bar: self.chart.x_bar.rounded(p),
                range: self.chart.range.rounded(p),
            },
            out_of_control: self.out_of_control.iter().map(|o| o.rounded(p)).collect(),
            capability: self.capability.rounded(p),
            rating: self.rating,
            histogram: self.histogram.rounded(p),
            precision: self.precision,
        }
    }

    pub fn is_in_control(&self) -> bool {
        self.out_of_control.is_empty()
    }
}

/// Report for an Individual/Moving-Range analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualReport {
    pub spec: MeasurementSpec,
    pub chart: IndividualMrChart,
    pub out_of_control: Vec<OutOfControlPoint>,
    pub capability: CapabilityIndices,
    pub rating: CapabilityRating,
    pub histogram: HistogramResult,
    #[serde(skip)]
    precision: Precision,
}

impl IndividualReport {
    /// Copy with every number rounded to the configured precision
    pub fn rounded(&self) -> Self {
        let p = &self.precision;
        Self {
            spec: self.spec.clone(),
            chart: IndividualMrChart {
                limits: self.chart.limits.rounded(p),
                individual: self.chart.individual.rounded(p),
                moving_range: self.chart.moving_range.rounded(p),
            },
            out_of_control: self.out_of_control.iter().map(|o| o.rounded(p)).collect(),
            capability: self.capability.rounded(p),
            rating: self.rating,
            histogram: self.histogram.rounded(p),
            precision: self.precision,
        }
    }

    pub fn is_in_control(&self) -> bool {
        self.out_of_control.is_empty()
    }
}

/// Observation types [`SpcAnalysis::analyze_source`] can chart
pub trait ChartInput: Sized {
    type Report;

    fn analyze(analysis: &SpcAnalysis, batch: &[Self]) -> Result<Self::Report>;
}

impl ChartInput for SubgroupSample {
    type Report = XBarRReport;

    fn analyze(analysis: &SpcAnalysis, batch: &[Self]) -> Result<XBarRReport> {
        analysis.analyze_subgroups(batch)
    }
}

impl ChartInput for IndividualSample {
    type Report = IndividualReport;

    fn analyze(analysis: &SpcAnalysis, batch: &[Self]) -> Result<IndividualReport> {
        analysis.analyze_individuals(batch)
    }
}

/// Runs complete SPC reports against one measurement specification
#[derive(Debug)]
pub struct SpcAnalysis {
    spec: MeasurementSpec,
    params: SpcParameters,
    detector: OutOfControlDetector,
}

impl SpcAnalysis {
    /// Create an analysis after validating the parameters
    pub fn new(spec: MeasurementSpec, params: SpcParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            spec,
            params,
            detector: OutOfControlDetector::new(),
        })
    }

    /// Replace the default Rule 1 detector
    pub fn with_detector(mut self, detector: OutOfControlDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn spec(&self) -> &MeasurementSpec {
        &self.spec
    }

    pub fn params(&self) -> &SpcParameters {
        &self.params
    }

    /// X-bar/R report for a subgroup series
    #[instrument(skip_all, fields(subgroups = subgroups.len()))]
    pub fn analyze_subgroups(&self, subgroups: &[SubgroupSample]) -> Result<XBarRReport> {
        let chart = ControlLimitCalculator::with_subgroup_size(self.params.subgroup_size)
            .build_chart(subgroups)?;
        let out_of_control = self.detector.detect_xbar_r(&chart);
        let capability = CapabilityAnalyzer::new().analyze(subgroups, &chart.limits, &self.spec)?;
        let histogram =
            HistogramBinner::new(self.params.bin_count).bin_subgroups(subgroups, &self.spec)?;

        debug!(
            out_of_control = out_of_control.len(),
            cpk = capability.cpk,
            "X-bar/R analysis complete"
        );
        Ok(XBarRReport {
            spec: self.spec.clone(),
            chart,
            out_of_control,
            rating: capability.rating(),
            capability,
            histogram,
            precision: self.params.precision,
        })
    }

    /// I-MR report for a series of individual readings
    #[instrument(skip_all, fields(readings = samples.len()))]
    pub fn analyze_individuals(&self, samples: &[IndividualSample]) -> Result<IndividualReport> {
        let chart = IndividualControlLimitCalculator::new().build_chart(samples)?;
        let out_of_control = self.detector.detect_individual(&chart);
        let capability =
            CapabilityAnalyzer::new().analyze_individuals(samples, &chart.limits, &self.spec)?;
        let histogram =
            HistogramBinner::new(self.params.bin_count).bin_individuals(samples, &self.spec)?;

        debug!(
            out_of_control = out_of_control.len(),
            cpk = capability.cpk,
            "I-MR analysis complete"
        );
        Ok(IndividualReport {
            spec: self.spec.clone(),
            chart,
            out_of_control,
            rating: capability.rating(),
            capability,
            histogram,
            precision: self.params.precision,
        })
    }

    /// Pull one batch from `source` and report on it.
    ///
    /// An exhausted source yields an empty batch, which fails with
    /// `InsufficientData`.
    pub fn analyze_source<S>(&self, source: &mut S) -> Result<<S::Sample as ChartInput>::Report>
    where
        S: SampleSource,
        S::Sample: ChartInput,
    {
        let batch = source.next_batch()?;
        debug!(batch = batch.len(), "pulled sample batch");
        <S::Sample as ChartInput>::analyze(self, &batch)
    }
}
