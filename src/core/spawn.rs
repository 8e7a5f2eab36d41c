//! Spawn rule - probability-weighted choice of new tile values
//!
//! After each accepted move one tile appears on a random empty cell. Its
//! value is drawn from an ordered table of (value, weight) entries whose
//! weights sum to 1.0; the draw walks the cumulative weights in insertion
//! order.

/// Ordered cumulative-weight table for new tile values
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRule {
    /// (value, cumulative weight) in insertion order
    entries: Vec<(u32, f64)>,
    /// Fallback when rounding leaves no cumulative bucket matched
    lowest_value: u32,
}

impl SpawnRule {
    /// Build a rule from ordered (value, weight) pairs.
    ///
    /// Returns `None` for an empty table or a non-positive weight; weight
    /// normalization is validated upstream at config load time.
    pub fn new(weights: &[(u32, f64)]) -> Option<Self> {
        if weights.is_empty() {
            return None;
        }

        let mut entries = Vec::with_capacity(weights.len());
        let mut cumulative = 0.0;
        for &(value, weight) in weights {
            if weight <= 0.0 || !weight.is_finite() {
                return None;
            }
            cumulative += weight;
            entries.push((value, cumulative));
        }

        let lowest_value = weights.iter().map(|&(value, _)| value).min()?;
        Some(Self {
            entries,
            lowest_value,
        })
    }

    /// Pick a value for a uniform draw in [0, 1).
    ///
    /// Returns the first entry whose cumulative weight meets or exceeds
    /// the draw, falling back to the lowest configured value.
    pub fn pick(&self, draw: f64) -> u32 {
        for &(value, cumulative) in &self.entries {
            if draw <= cumulative {
                return value;
            }
        }
        self.lowest_value
    }

    /// The configured values, in insertion order
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|&(value, _)| value)
    }
}

impl Default for SpawnRule {
    /// The classic rule: 2 at 90%, 4 at 10%
    fn default() -> Self {
        SpawnRule::new(&[(2, 0.9), (4, 0.1)]).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_buckets() {
        let rule = SpawnRule::default();
        assert_eq!(rule.pick(0.0), 2);
        assert_eq!(rule.pick(0.5), 2);
        assert_eq!(rule.pick(0.9), 2);
        assert_eq!(rule.pick(0.91), 4);
        assert_eq!(rule.pick(0.999), 4);
    }

    #[test]
    fn test_insertion_order_wins_over_value_order() {
        // Listing 4 first gives it the low end of the cumulative walk.
        let rule = SpawnRule::new(&[(4, 0.5), (2, 0.5)]).unwrap();
        assert_eq!(rule.pick(0.25), 4);
        assert_eq!(rule.pick(0.75), 2);
    }

    #[test]
    fn test_fallback_is_lowest_value() {
        // Underweighted table: a draw past the last bucket falls back.
        let rule = SpawnRule::new(&[(8, 0.3), (2, 0.3)]).unwrap();
        assert_eq!(rule.pick(0.99), 2);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(SpawnRule::new(&[]).is_none());
    }

    #[test]
    fn test_bad_weights_rejected() {
        assert!(SpawnRule::new(&[(2, 0.0)]).is_none());
        assert!(SpawnRule::new(&[(2, -0.5)]).is_none());
        assert!(SpawnRule::new(&[(2, f64::NAN)]).is_none());
    }

    #[test]
    fn test_values_keep_insertion_order() {
        let rule = SpawnRule::new(&[(4, 0.1), (2, 0.9)]).unwrap();
        assert_eq!(rule.values().collect::<Vec<_>>(), vec![4, 2]);
    }
}
