//! Run rules for special-cause detection
//!
//! Only Rule 1 (a point beyond the control limits) ships with the crate.
//! Further Western Electric / Nelson tests plug in by implementing
//! [`RunRule`] and registering with
//! [`OutOfControlDetector::with_rule`](crate::OutOfControlDetector::with_rule).

use crate::traits::RunRule;
use crate::types::SeriesBounds;

/// Rule 1: a single point strictly above the UCL or strictly below the LCL.
///
/// A point exactly on a limit is in control. Series without a lower limit
/// (range, moving range) only test the upper one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeyondControlLimits;

impl BeyondControlLimits {
    pub const TAG: &'static str = "rule1";
}

impl RunRule for BeyondControlLimits {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn violates(&self, values: &[f64], position: usize, bounds: &SeriesBounds) -> bool {
        let Some(&value) = values.get(position) else {
            return false;
        };
        value > bounds.upper || bounds.lower.is_some_and(|lcl| value < lcl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: SeriesBounds = SeriesBounds {
        center: 10.0,
        upper: 11.0,
        lower: Some(9.0),
    };

    #[test]
    fn test_strict_inequality() {
        let values = [11.0, 9.0, 11.0001, 8.9999, 10.0];
        let rule = BeyondControlLimits;
        let flagged: Vec<usize> = (0..values.len())
            .filter(|&i| rule.violates(&values, i, &BOUNDS))
            .collect();
        assert_eq!(flagged, vec![2, 3]);
    }

    #[test]
    fn test_upper_only_bounds() {
        let bounds = SeriesBounds {
            lower: None,
            ..BOUNDS
        };
        let rule = BeyondControlLimits;
        assert!(!rule.violates(&[-100.0], 0, &bounds));
        assert!(rule.violates(&[12.0], 0, &bounds));
    }

    #[test]
    fn test_out_of_range_position() {
        assert!(!BeyondControlLimits.violates(&[20.0], 3, &BOUNDS));
        assert_eq!(BeyondControlLimits.tag(), "rule1");
    }
}
