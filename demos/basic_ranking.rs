//! Basic ranking example
//!
//! Builds a tiny in-memory dataset and ranks it against a sample query,
//! printing each college with its score and component breakdown.

use anyhow::Result;
use collegefit::data::{CollegeRecord, Dataset, Gender, Major, PayerStatus, Race};
use collegefit::ranking::{self, Query, StateChoice};

fn college(name: &str, state: &str, cost_in_state: f64, earnings: f64) -> CollegeRecord {
    CollegeRecord {
        name: name.to_string(),
        state: state.to_string(),
        msi_type: "None".to_string(),
        cost_in_state,
        cost_out_of_state: cost_in_state + 12_000.0,
        debt_dependent: 11_000.0,
        debt_independent: 13_500.0,
        pct_women: 56.0,
        pct_men: 44.0,
        pct_american_indian: 0.8,
        pct_asian: 14.0,
        pct_black: 9.0,
        pct_latino: 24.0,
        pct_pacific_islander: 0.4,
        pct_white: 42.0,
        pct_age_25_to_64: 21.0,
        pct_degrees_stem: 33.0,
        pct_degrees_arts: 9.0,
        pct_degrees_education: 4.0,
        pct_degrees_social: 14.0,
        pct_degrees_health: 13.0,
        pct_degrees_business: 19.0,
        net_price_low_income: 10_500.0,
        gap_center_based_care: Some(5_200.0),
        gap_full_ttd: Some(7_900.0),
        earnings_dependent: earnings,
        earnings_independent: earnings - 4_000.0,
    }
}

fn main() -> Result<()> {
    let dataset = Dataset::from_records(vec![
        college("Golden Coast University", "CA", 14_000.0, 52_000.0),
        college("Sierra State College", "CA", 11_500.0, 44_000.0),
        college("Bayview Institute", "CA", 19_000.0, 58_000.0),
        college("Empire College", "NY", 13_000.0, 49_000.0),
    ]);

    let query = Query::new(
        StateChoice::State("CA".to_string()),
        "CA",
        PayerStatus::Dependent,
    )
    .with_max_tuition(20_000.0)
    .with_max_debt(15_000.0)
    .with_msi_preference("any".parse()?)
    .with_gender(Gender::Women)
    .with_race(Race::Latino)
    .with_major(Major::Stem)
    .with_student_parent(true)
    .with_estimated_income(35_000.0)
    .with_top_k(3);

    let ranked = ranking::rank(dataset.records(), &query);

    println!("Ranked {} college(s):\n", ranked.len());
    for (i, r) in ranked.iter().enumerate() {
        println!("{}. {} - score {:.3}", i + 1, r.record.name, r.score);
        println!(
            "   affordability {:.2}, debt {:.2}, earnings {:.2}, student parent {:.2}",
            r.breakdown.affordability,
            r.breakdown.debt,
            r.breakdown.earnings,
            r.breakdown.student_parent
        );
    }

    Ok(())
}
