//! Hard filters
//!
//! Each filter eliminates records that cannot satisfy the student's
//! stated constraints. Filter order does not affect the surviving set,
//! only how much work later predicates see.

use crate::data::CollegeRecord;

use super::query::{MsiPreference, Query, StateChoice};

/// Jurisdiction filter. `Any` matches every record; a concrete state
/// requires an exact match.
pub fn matches_state(record: &CollegeRecord, query: &Query) -> bool {
    match &query.desired_state {
        StateChoice::Any => true,
        StateChoice::State(s) => record.state == *s,
    }
}

/// MSI filter. `Any` matches every record; a concrete category requires
/// an exact match.
pub fn matches_msi(record: &CollegeRecord, query: &Query) -> bool {
    match &query.msi_preference {
        MsiPreference::Any => true,
        MsiPreference::Category(c) => record.msi_type == *c,
    }
}

/// Tuition filter against the residency-selected cost column
pub fn within_tuition(record: &CollegeRecord, query: &Query) -> bool {
    record.cost(query.residency()) <= query.max_tuition
}

/// Debt filter against the payer-status-selected debt column
pub fn within_debt(record: &CollegeRecord, query: &Query) -> bool {
    record.debt(query.payer_status) <= query.max_debt
}

/// Apply all hard filters, preserving dataset order
pub fn apply_hard_filters<'a>(
    records: &'a [CollegeRecord],
    query: &Query,
) -> Vec<&'a CollegeRecord> {
    records
        .iter()
        .filter(|&r| {
            matches_state(r, query)
                && matches_msi(r, query)
                && within_tuition(r, query)
                && within_debt(r, query)
        })
        .collect()
}
