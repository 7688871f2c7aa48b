//! Ordered threshold tables for category lookups
//!
//! A table is a list of `(upper bound, label)` pairs sorted by bound. A value
//! belongs to the first band whose upper bound is strictly greater than it,
//! so every band includes its lower bound and excludes its upper bound.
//! Values at or above the last bound get the ceiling label.

/// Sorted boundary -> label table
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<L: 'static> {
    bands: &'static [(f64, L)],
    ceiling: L,
}

impl<L: 'static> ThresholdTable<L> {
    /// Build a table from bands sorted by ascending upper bound
    pub const fn new(bands: &'static [(f64, L)], ceiling: L) -> Self {
        Self { bands, ceiling }
    }
}

impl<L: Copy + PartialEq + 'static> ThresholdTable<L> {
    /// Label for `value`
    pub fn classify(&self, value: f64) -> L {
        self.bands
            .iter()
            .find(|(upper, _)| value < *upper)
            .map(|(_, label)| *label)
            .unwrap_or(self.ceiling)
    }

    /// `[lower, upper)` range covered by `label`
    ///
    /// The first band starts at 0.0 and the ceiling band ends at infinity.
    pub fn range(&self, label: L) -> Option<(f64, f64)> {
        let mut lower = 0.0;
        for (upper, band) in self.bands {
            if *band == label {
                return Some((lower, *upper));
            }
            lower = *upper;
        }
        (self.ceiling == label).then_some((lower, f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Low,
        Mid,
        High,
    }

    const TABLE: ThresholdTable<Level> =
        ThresholdTable::new(&[(1.0, Level::Low), (2.0, Level::Mid)], Level::High);

    #[rstest]
    #[case(0.0, Level::Low)]
    #[case(0.99, Level::Low)]
    #[case(1.0, Level::Mid)]
    #[case(1.5, Level::Mid)]
    #[case(2.0, Level::High)]
    #[case(1000.0, Level::High)]
    fn test_classify_uses_inclusive_lower_bounds(#[case] value: f64, #[case] expected: Level) {
        assert_eq!(TABLE.classify(value), expected);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(TABLE.range(Level::Low), Some((0.0, 1.0)));
        assert_eq!(TABLE.range(Level::Mid), Some((1.0, 2.0)));
        assert_eq!(TABLE.range(Level::High), Some((2.0, f64::INFINITY)));
    }

    #[test]
    fn test_unknown_label_has_no_range() {
        const SHORT: ThresholdTable<Level> = ThresholdTable::new(&[(1.0, Level::Low)], Level::High);
        assert_eq!(SHORT.range(Level::Mid), None);
    }
}
