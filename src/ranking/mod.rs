//! Ranking engine
//!
//! Filters the college dataset against a student's hard constraints,
//! then scores the survivors with a fixed linear weighted sum of eight
//! normalized components. `rank` is a pure function of (dataset, query):
//! deterministic, no side effects, no mutation of the input.
//!
//! Earnings and student-parent-gap normalization bounds come from the
//! *filtered* candidate set, so scores are only meaningful as a
//! within-query ranking. Re-running with a different query recomputes
//! the bounds from scratch.

use std::cmp::Ordering;

use crate::data::CollegeRecord;

pub mod filters;
pub mod query;
pub mod weights;

// Re-exports
pub use query::{MsiPreference, Query, StateChoice, MAX_TOP_K, MIN_TOP_K};
pub use weights::{Weights, WEIGHTS};

/// Guards the earnings min-max division when every surviving record has
/// the same earnings value.
pub const EARNINGS_EPSILON: f64 = 1e-6;

/// The eight raw score components, each in [0, 1] before weighting.
/// Kept for inspection and tests, never displayed to the student.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreBreakdown {
    pub gender: f64,
    pub race: f64,
    pub major: f64,
    pub affordability: f64,
    pub debt: f64,
    pub student_parent: f64,
    pub age: f64,
    pub earnings: f64,
}

impl ScoreBreakdown {
    /// Components in weight-table order
    pub fn components(&self) -> [f64; 8] {
        [
            self.gender,
            self.race,
            self.major,
            self.affordability,
            self.debt,
            self.student_parent,
            self.age,
            self.earnings,
        ]
    }

    /// The weighted sum of the components
    pub fn weighted_total(&self, weights: &Weights) -> f64 {
        weights.gender * self.gender
            + weights.race * self.race
            + weights.major * self.major
            + weights.affordability * self.affordability
            + weights.debt * self.debt
            + weights.student_parent * self.student_parent
            + weights.age * self.age
            + weights.earnings * self.earnings
    }
}

/// A college that survived the hard filters, with its derived score
#[derive(Debug, Clone)]
pub struct RankedRecord {
    pub record: CollegeRecord,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Normalization bounds derived from the filtered candidate set
#[derive(Debug, Clone, Copy)]
struct ScoreBounds {
    earnings_min: f64,
    earnings_max: f64,
    /// Largest per-record affordability-gap mean, when the student is a
    /// parent and at least one surviving record carries a positive gap.
    /// `None` disables the student-parent component for the whole set.
    max_gap: Option<f64>,
}

impl ScoreBounds {
    fn from_filtered(filtered: &[&CollegeRecord], query: &Query) -> Self {
        let mut earnings_min = f64::MAX;
        let mut earnings_max = f64::MIN;
        for record in filtered {
            let e = record.earnings(query.payer_status);
            earnings_min = earnings_min.min(e);
            earnings_max = earnings_max.max(e);
        }

        let max_gap = if query.student_parent {
            filtered
                .iter()
                .filter_map(|r| r.parent_gap())
                .fold(None, |acc: Option<f64>, g| {
                    Some(acc.map_or(g, |m| m.max(g)))
                })
                .filter(|m| *m > 0.0)
        } else {
            None
        };

        Self {
            earnings_min,
            earnings_max,
            max_gap,
        }
    }
}

/// Clamp a component to [0, 1]; non-finite inputs become 0
fn unit_clamp(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn score_record(record: &CollegeRecord, query: &Query, bounds: &ScoreBounds) -> RankedRecord {
    let affordability = if query.estimated_income > 0.0 {
        unit_clamp((query.estimated_income - record.net_price_low_income) / query.estimated_income)
    } else {
        0.0
    };

    let debt = if query.max_debt > 0.0 {
        unit_clamp((query.max_debt - record.debt(query.payer_status)) / query.max_debt)
    } else {
        0.0
    };

    let student_parent = match (bounds.max_gap, record.parent_gap()) {
        (Some(max_gap), Some(gap)) => unit_clamp((max_gap - gap) / max_gap),
        _ => 0.0,
    };

    let earnings = unit_clamp(
        (record.earnings(query.payer_status) - bounds.earnings_min)
            / (bounds.earnings_max - bounds.earnings_min + EARNINGS_EPSILON),
    );

    let breakdown = ScoreBreakdown {
        gender: unit_clamp(record.gender_share(query.gender) / 100.0),
        race: unit_clamp(record.race_share(query.race) / 100.0),
        major: unit_clamp(record.major_share(query.major) / 100.0),
        affordability,
        debt,
        student_parent,
        age: unit_clamp(record.pct_age_25_to_64 / 100.0),
        earnings,
    };

    RankedRecord {
        record: record.clone(),
        score: breakdown.weighted_total(&WEIGHTS),
        breakdown,
    }
}

/// Filter and rank the dataset against the query.
///
/// Returns at most `query.top_k` records, sorted by score descending;
/// equal scores keep their dataset order (stable sort). An empty
/// filtered set returns an empty vector without scoring.
pub fn rank(records: &[CollegeRecord], query: &Query) -> Vec<RankedRecord> {
    let filtered = filters::apply_hard_filters(records, query);
    tracing::debug!(
        "{} of {} colleges survived the hard filters",
        filtered.len(),
        records.len()
    );

    if filtered.is_empty() {
        return Vec::new();
    }

    let bounds = ScoreBounds::from_filtered(&filtered, query);

    let mut ranked: Vec<RankedRecord> = filtered
        .into_iter()
        .map(|record| score_record(record, query, &bounds))
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(query.top_k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::record;
    use crate::data::PayerStatus;

    fn ca_query() -> Query {
        Query::new(
            StateChoice::State("CA".to_string()),
            "CA",
            PayerStatus::Dependent,
        )
        .with_max_tuition(20_000.0)
        .with_max_debt(15_000.0)
        .with_estimated_income(30_000.0)
    }

    fn sample_dataset() -> Vec<CollegeRecord> {
        let mut a = record("Alpha College", "CA");
        a.earnings_dependent = 50_000.0;
        a.net_price_low_income = 8_000.0;

        let mut b = record("Beta University", "CA");
        b.earnings_dependent = 42_000.0;
        b.debt_dependent = 9_000.0;

        let mut c = record("Gamma Institute", "CA");
        c.earnings_dependent = 38_000.0;
        c.pct_women = 70.0;

        let d = record("Delta College", "NY");

        vec![a, b, c, d]
    }

    #[test]
    fn test_results_satisfy_hard_filters() {
        let records = sample_dataset();
        let query = ca_query();

        let ranked = rank(&records, &query);
        assert!(!ranked.is_empty());
        for r in &ranked {
            assert!(filters::matches_state(&r.record, &query));
            assert!(filters::matches_msi(&r.record, &query));
            assert!(filters::within_tuition(&r.record, &query));
            assert!(filters::within_debt(&r.record, &query));
        }
    }

    #[test]
    fn test_scores_sorted_non_increasing() {
        let ranked = rank(&sample_dataset(), &ca_query());
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_components_within_unit_interval() {
        let query = ca_query().with_student_parent(true);
        for r in rank(&sample_dataset(), &query) {
            for component in r.breakdown.components() {
                assert!(
                    (0.0..=1.0).contains(&component),
                    "component {} out of range for {}",
                    component,
                    r.record.name
                );
            }
            assert!(r.score.is_finite());
            assert!(r.score >= 0.0);
        }
    }

    #[test]
    fn test_score_equals_weighted_component_sum() {
        for r in rank(&sample_dataset(), &ca_query()) {
            let expected = r.breakdown.weighted_total(&WEIGHTS);
            assert!((r.score - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let records = sample_dataset();
        let query = ca_query().with_student_parent(true);

        let first = rank(&records, &query);
        let second = rank(&records, &query);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.record.name, b.record.name);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_top_k_truncation() {
        let records = sample_dataset();
        let query = ca_query().with_top_k(2);

        let ranked = rank(&records, &query);
        assert_eq!(ranked.len(), 2);

        // top_k larger than the filtered set returns the whole set
        let all = rank(&records, &ca_query().with_top_k(10));
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_one_record_over_tuition_excluded() {
        let mut expensive = record("Pricey College", "CA");
        expensive.cost_in_state = 25_000.0;
        let records = vec![
            record("Alpha College", "CA"),
            expensive,
            record("Gamma Institute", "CA"),
        ];

        let ranked = rank(&records, &ca_query());
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.record.name != "Pricey College"));
    }

    #[test]
    fn test_student_parent_off_contributes_zero() {
        // Gap data is present on every record, but the flag is off.
        let ranked = rank(&sample_dataset(), &ca_query().with_student_parent(false));
        for r in ranked {
            assert_eq!(r.breakdown.student_parent, 0.0);
        }
    }

    #[test]
    fn test_student_parent_component_uses_gap_means() {
        let mut low_gap = record("Low Gap", "CA");
        low_gap.gap_center_based_care = Some(1_000.0);
        low_gap.gap_full_ttd = Some(1_000.0);
        let mut high_gap = record("High Gap", "CA");
        high_gap.gap_center_based_care = Some(10_000.0);
        high_gap.gap_full_ttd = Some(10_000.0);
        let mut no_gap = record("No Gap", "CA");
        no_gap.gap_center_based_care = None;
        no_gap.gap_full_ttd = None;

        let query = ca_query().with_student_parent(true).with_top_k(10);
        let ranked = rank(&[low_gap, high_gap, no_gap], &query);

        let component = |name: &str| {
            ranked
                .iter()
                .find(|r| r.record.name == name)
                .unwrap()
                .breakdown
                .student_parent
        };

        // Smallest gap scores highest; the set's max gap scores zero;
        // a record with no gap data contributes zero.
        assert!((component("Low Gap") - 0.9).abs() < 1e-9);
        assert_eq!(component("High Gap"), 0.0);
        assert_eq!(component("No Gap"), 0.0);
    }

    #[test]
    fn test_equal_earnings_score_zero_not_nan() {
        let records: Vec<CollegeRecord> = ["A", "B", "C"]
            .iter()
            .map(|name| {
                let mut r = record(name, "CA");
                r.earnings_dependent = 40_000.0;
                r
            })
            .collect();

        for r in rank(&records, &ca_query()) {
            assert_eq!(r.breakdown.earnings, 0.0);
            assert!(r.score.is_finite());
        }
    }

    #[test]
    fn test_empty_filtered_set_returns_empty() {
        let records = vec![record("Delta College", "NY")];
        assert!(rank(&records, &ca_query()).is_empty());
    }

    #[test]
    fn test_zero_max_debt_zero_guarded() {
        let mut debt_free = record("Debt Free", "CA");
        debt_free.debt_dependent = 0.0;

        let query = ca_query().with_max_debt(0.0);
        let ranked = rank(&[debt_free], &query);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].breakdown.debt, 0.0);
        assert!(ranked[0].score.is_finite());
    }

    #[test]
    fn test_zero_income_zero_guarded() {
        let query = ca_query().with_estimated_income(0.0);
        for r in rank(&sample_dataset(), &query) {
            assert_eq!(r.breakdown.affordability, 0.0);
            assert!(r.score.is_finite());
        }
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        // Identical records score identically; the stable sort keeps
        // their input order.
        let records = vec![record("First", "CA"), record("Second", "CA")];
        let ranked = rank(&records, &ca_query());

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].record.name, "First");
        assert_eq!(ranked[1].record.name, "Second");
    }
}
