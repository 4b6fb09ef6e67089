//! Out-of-control point detection
//!
//! The detector walks one or more chart series in a single merged pass,
//! ascending by point index. At each index the series are visited in the
//! order given (X-bar before R, I before MR) and, within a series, the rules
//! in registration order. Every violation becomes one [`OutOfControlPoint`];
//! the same index may appear once per chart that flags it.

use crate::rules::BeyondControlLimits;
use crate::traits::RunRule;
use crate::types::{ChartSeries, IndividualMrChart, OutOfControlPoint, SeriesBounds, XBarRChart};
use std::fmt;
use tracing::debug;

/// Applies run rules to chart series
pub struct OutOfControlDetector {
    rules: Vec<Box<dyn RunRule>>,
}

impl OutOfControlDetector {
    /// Detector with Rule 1 only
    pub fn new() -> Self {
        Self {
            rules: vec![Box::new(BeyondControlLimits)],
        }
    }

    /// Detector with no rules registered
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register an additional rule, evaluated after the existing ones
    pub fn with_rule<R: RunRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_tags(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.tag()).collect()
    }

    /// Scan a single series against its bounds
    pub fn detect_series(
        &self,
        series: &ChartSeries,
        bounds: &SeriesBounds,
    ) -> Vec<OutOfControlPoint> {
        self.scan(&[(series, *bounds)])
    }

    /// Scan an X-bar/R chart pair
    pub fn detect_xbar_r(&self, chart: &XBarRChart) -> Vec<OutOfControlPoint> {
        self.scan(&[
            (&chart.x_bar, chart.limits.x_bar_bounds()),
            (&chart.range, chart.limits.range_bounds()),
        ])
    }

    /// Scan an I-MR chart pair
    pub fn detect_individual(&self, chart: &IndividualMrChart) -> Vec<OutOfControlPoint> {
        self.scan(&[
            (&chart.individual, chart.limits.individual_bounds()),
            (&chart.moving_range, chart.limits.moving_range_bounds()),
        ])
    }

    /// Merged scan over several series
    pub fn scan(&self, charts: &[(&ChartSeries, SeriesBounds)]) -> Vec<OutOfControlPoint> {
        let values: Vec<Vec<f64>> = charts.iter().map(|(series, _)| series.values()).collect();
        let mut cursors = vec![0usize; charts.len()];
        let mut flagged = Vec::new();

        loop {
            let next_index = charts
                .iter()
                .zip(&cursors)
                .filter_map(|((series, _), &pos)| series.points.get(pos).map(|p| p.index))
                .min();
            let Some(index) = next_index else {
                break;
            };

            for (k, (series, bounds)) in charts.iter().enumerate() {
                let pos = cursors[k];
                let Some(point) = series.points.get(pos) else {
                    continue;
                };
                if point.index != index {
                    continue;
                }
                for rule in &self.rules {
                    if rule.violates(&values[k], pos, bounds) {
                        flagged.push(OutOfControlPoint {
                            series_index: point.index,
                            series: series.kind,
                            rule: rule.tag().to_string(),
                            value: point.value,
                        });
                    }
                }
                cursors[k] += 1;
            }
        }

        debug!(
            series = charts.len(),
            flagged = flagged.len(),
            "out-of-control scan complete"
        );
        flagged
    }
}

impl Default for OutOfControlDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OutOfControlDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutOfControlDetector")
            .field("rules", &self.rule_tags())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LimitCalculator;
    use crate::types::{SeriesKind, SeriesPoint};
    use crate::{ControlLimitCalculator, IndividualControlLimitCalculator};
    use spc_core::{individuals_from_values, subgroups_from_rows};

    fn series(kind: SeriesKind, start: usize, values: &[f64]) -> ChartSeries {
        ChartSeries::new(
            kind,
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| SeriesPoint {
                    index: start + i,
                    value,
                })
                .collect(),
        )
    }

    /// Flags every point above the center line
    struct AboveCenter;

    impl RunRule for AboveCenter {
        fn tag(&self) -> &'static str {
            "above-center"
        }

        fn violates(&self, values: &[f64], position: usize, bounds: &SeriesBounds) -> bool {
            values[position] > bounds.center
        }
    }

    #[test]
    fn test_points_on_limits_are_not_flagged() {
        let bounds = SeriesBounds {
            center: 0.0,
            upper: 3.0,
            lower: Some(-3.0),
        };
        let s = series(SeriesKind::Individual, 1, &[3.0, -3.0, 0.0, 3.5]);
        let flagged = OutOfControlDetector::new().detect_series(&s, &bounds);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].series_index, 4);
        assert_eq!(flagged[0].rule, "rule1");
        assert_eq!(flagged[0].value, 3.5);
    }

    #[test]
    fn test_merged_order_is_by_index_then_chart() {
        let a = series(SeriesKind::Individual, 1, &[5.0, 0.0, 5.0]);
        let b = series(SeriesKind::MovingRange, 2, &[5.0, 5.0]);
        let bounds_a = SeriesBounds {
            center: 0.0,
            upper: 1.0,
            lower: Some(-1.0),
        };
        let bounds_b = SeriesBounds {
            center: 0.0,
            upper: 1.0,
            lower: None,
        };
        let flagged = OutOfControlDetector::new().scan(&[(&a, bounds_a), (&b, bounds_b)]);
        let order: Vec<(usize, SeriesKind)> =
            flagged.iter().map(|p| (p.series_index, p.series)).collect();
        assert_eq!(
            order,
            vec![
                (1, SeriesKind::Individual),
                (2, SeriesKind::MovingRange),
                (3, SeriesKind::Individual),
                (3, SeriesKind::MovingRange),
            ]
        );
    }

    #[test]
    fn test_custom_rules_emit_their_own_tag() {
        let bounds = SeriesBounds {
            center: 0.0,
            upper: 2.0,
            lower: Some(-2.0),
        };
        let s = series(SeriesKind::XBar, 1, &[1.0, 3.0]);
        let detector = OutOfControlDetector::new().with_rule(AboveCenter);
        assert_eq!(detector.rule_tags(), vec!["rule1", "above-center"]);

        let tags: Vec<(usize, String)> = detector
            .detect_series(&s, &bounds)
            .into_iter()
            .map(|p| (p.series_index, p.rule))
            .collect();
        assert_eq!(
            tags,
            vec![
                (1, "above-center".to_string()),
                (2, "rule1".to_string()),
                (2, "above-center".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_detector_flags_nothing() {
        let s = series(SeriesKind::XBar, 1, &[100.0]);
        let bounds = SeriesBounds {
            center: 0.0,
            upper: 1.0,
            lower: Some(-1.0),
        };
        assert!(OutOfControlDetector::empty().detect_series(&s, &bounds).is_empty());
    }

    #[test]
    fn test_xbar_r_shift_is_flagged() {
        let mut rows: Vec<Vec<f64>> = (0..9)
            .map(|i| {
                let shift = if i % 2 == 0 { 0.01 } else { -0.01 };
                vec![10.0 + shift, 10.1 + shift, 9.9 + shift, 10.05 + shift, 9.95 + shift]
            })
            .collect();
        // subgroup 10 jumps by half a unit
        rows.push(vec![10.5, 10.6, 10.4, 10.55, 10.45]);

        let chart = ControlLimitCalculator::new()
            .build_chart(&subgroups_from_rows(rows))
            .unwrap();
        let flagged = OutOfControlDetector::new().detect_xbar_r(&chart);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].series, SeriesKind::XBar);
        assert_eq!(flagged[0].series_index, 10);
    }

    #[test]
    fn test_individual_spike_flags_both_charts() {
        let mut values = vec![5.0, 5.1, 4.9, 5.0, 5.1, 4.9, 5.0, 5.1, 4.9, 5.0];
        values.push(8.0);
        let chart = IndividualControlLimitCalculator::new()
            .build_chart(&individuals_from_values(&values))
            .unwrap();
        let flagged = OutOfControlDetector::new().detect_individual(&chart);
        let kinds: Vec<(usize, SeriesKind)> =
            flagged.iter().map(|p| (p.series_index, p.series)).collect();
        assert_eq!(
            kinds,
            vec![(11, SeriesKind::Individual), (11, SeriesKind::MovingRange)]
        );
    }
}
