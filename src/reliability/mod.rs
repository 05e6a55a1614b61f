use serde::Serialize;

/// One tier of the reliability scale: how much an average backed by a
/// given number of matches can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityBucket {
    /// CSS background color applied to the whole table row.
    pub color: &'static str,
    pub interpretation: &'static str,
    pub credibility: &'static str,
    /// Human-readable match-count range for the legend.
    pub match_range: &'static str,
}

struct Tier {
    /// Exclusive upper bound on match count; `None` for the open-ended
    /// top tier. Bounds are strictly ascending.
    upper: Option<i64>,
    bucket: ReliabilityBucket,
}

const fn tier(
    upper: Option<i64>,
    color: &'static str,
    interpretation: &'static str,
    credibility: &'static str,
    match_range: &'static str,
) -> Tier {
    Tier {
        upper,
        bucket: ReliabilityBucket {
            color,
            interpretation,
            credibility,
            match_range,
        },
    }
}

/// Thresholds follow the club's confidence scale. Intervals are half-open
/// `[low, high)`: a count exactly on a bound belongs to the higher tier.
const TIERS: [Tier; 8] = [
    tier(Some(10), "#A0A0A0", "anecdotal", "negligible", "under 10"),
    tier(Some(20), "#C0C0C0", "unusable", "useless", "10 to 20"),
    tier(Some(50), "#FF4C4C", "unreliable", "fragile", "20 to 50"),
    tier(Some(100), "#FFD44C", "exploratory", "needs confirmation", "50 to 100"),
    tier(Some(250), "#C6FF4C", "solid", "grounded", "100 to 250"),
    tier(Some(500), "#80FF4C", "reliable", "credible", "250 to 500"),
    tier(Some(1000), "#00CC00", "very reliable", "very robust", "500 to 1000"),
    tier(None, "#009900", "indisputable", "irrefutable", "1000+"),
];

/// Classify a match count into its reliability tier.
///
/// Pure and total: every integer lands in exactly one tier. Counts below
/// zero never occur in well-formed sheets but fall into the lowest tier
/// since it has no lower bound.
pub fn classify(match_count: i64) -> &'static ReliabilityBucket {
    for tier in &TIERS {
        if let Some(upper) = tier.upper {
            if match_count < upper {
                return &tier.bucket;
            }
        }
    }
    &TIERS[TIERS.len() - 1].bucket
}

/// The 8 tiers in ascending order, for the on-page legend. Built from the
/// same table as `classify`, so legend and row colors cannot drift apart.
pub fn legend() -> Vec<&'static ReliabilityBucket> {
    TIERS.iter().map(|t| &t.bucket).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        assert_eq!(classify(9).color, "#A0A0A0");
        assert_eq!(classify(10).color, "#C0C0C0");
        assert_eq!(classify(19).color, "#C0C0C0");
        assert_eq!(classify(20).color, "#FF4C4C");
        assert_eq!(classify(999).color, "#00CC00");
        assert_eq!(classify(1000).color, "#009900");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0).interpretation, "anecdotal");
        assert_eq!(classify(i64::MAX).interpretation, "indisputable");
        // No lower bound is enforced, so negatives land in the lowest tier.
        assert_eq!(classify(-5).interpretation, "anecdotal");
    }

    #[test]
    fn test_tiers_partition_the_counts() {
        // Every sampled count matches exactly one tier interval.
        for count in 0..=2_000 {
            let mut low = i64::MIN;
            let mut hits = 0;
            for tier in &TIERS {
                let in_tier = match tier.upper {
                    Some(upper) => count >= low && count < upper,
                    None => count >= low,
                };
                if in_tier {
                    hits += 1;
                    assert_eq!(classify(count), &tier.bucket);
                }
                if let Some(upper) = tier.upper {
                    low = upper;
                }
            }
            assert_eq!(hits, 1, "count {count} must fall in exactly one tier");
        }
    }

    #[test]
    fn test_bounds_strictly_ascending() {
        let bounds: Vec<i64> = TIERS.iter().filter_map(|t| t.upper).collect();
        assert_eq!(bounds.len(), 7);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(TIERS.last().is_some_and(|t| t.upper.is_none()));
    }

    #[test]
    fn test_legend_matches_classification() {
        let legend = legend();
        assert_eq!(legend.len(), 8);
        // Sampling a value inside each range must yield the legend entry.
        let samples = [5, 15, 30, 75, 150, 300, 700, 5_000];
        for (entry, sample) in legend.iter().zip(samples) {
            assert_eq!(classify(sample), *entry);
        }
    }
}
