//! Dataset schema constants and validation
//!
//! Column names for the joint college dataset. The loader validates the
//! header row against the required set before deserializing any rows, so
//! a schema mismatch fails fast at startup instead of surfacing as a
//! late lookup error mid-ranking.

use anyhow::Result;

/// Canonical header for the institution-name column. Some exports of the
/// joint dataset carry the pre-rename spelling with a space; the loader
/// accepts both.
pub const INSTITUTION_NAME: &str = "Institution_Name_x";
/// Pre-rename spelling of the institution-name column
pub const INSTITUTION_NAME_RAW: &str = "Institution Name_x";

pub const STATE: &str = "State";
pub const MSI_TYPE: &str = "MSI Type";

pub const COST_IN_STATE: &str = "Average Cost of Attendance In-State";
pub const COST_OUT_OF_STATE: &str = "Average Cost of Attendance Out-of-State";

pub const DEBT_DEPENDENT: &str = "Median Debt for Dependent Students";
pub const DEBT_INDEPENDENT: &str = "Median Debt for Independent Students";

pub const PCT_WOMEN: &str = "Percent of Women Undergraduates";
pub const PCT_MEN: &str = "Percent of Men Undergraduates";

pub const PCT_AMERICAN_INDIAN: &str =
    "Percent of American Indian or Alaska Native Undergraduates";
pub const PCT_ASIAN: &str = "Percent of Asian Undergraduates";
pub const PCT_BLACK: &str = "Percent of Black or African American Undergraduates";
pub const PCT_LATINO: &str = "Percent of Latino Undergraduates";
pub const PCT_PACIFIC_ISLANDER: &str =
    "Percent of Native Hawaiian or Other Pacific Islander Undergraduates";
pub const PCT_WHITE: &str = "Percent of White Undergraduates";

pub const PCT_AGE_25_TO_64: &str = "Percent of Undergraduates Age 25 to 64";

pub const PCT_DEGREES_STEM: &str =
    "Percent of Bachelor Degrees Awarded in Science, Technology, Engineering, and Math";
pub const PCT_DEGREES_ARTS: &str =
    "Percent of Bachelor Degrees Awarded in Arts and Humanities";
pub const PCT_DEGREES_EDUCATION: &str = "Percent of Bachelor Degrees Awarded in Education";
pub const PCT_DEGREES_SOCIAL: &str = "Percent of Bachelor Degrees Awarded in Social Sciences";
pub const PCT_DEGREES_HEALTH: &str = "Percent of Bachelor Degrees Awarded in Health Sciences";
pub const PCT_DEGREES_BUSINESS: &str = "Percent of Bachelor Degrees Awarded in Business";

pub const NET_PRICE_LOW_INCOME: &str = "Average Net Price for Low-Income Students, 2020-21";

/// Optional column: absent from some dataset vintages
pub const GAP_CENTER_BASED_CARE: &str = "Student Parent Affordability Gap: Center-Based Care";
/// Optional column: absent from some dataset vintages
pub const GAP_FULL_TTD: &str = "100% TTD Student Parent Affordability Gap";

pub const EARNINGS_DEPENDENT: &str =
    "Median Earnings of Dependent Students Working and Not Enrolled 10 Years After Entry";
pub const EARNINGS_INDEPENDENT: &str =
    "Median Earnings of Independent Students Working and Not Enrolled 10 Years After Entry";

/// Columns that must be present for filtering and scoring to work.
/// The two student-parent affordability-gap columns are deliberately not
/// listed: when absent, the student-parent score component is skipped.
pub const REQUIRED_COLUMNS: &[&str] = &[
    STATE,
    MSI_TYPE,
    COST_IN_STATE,
    COST_OUT_OF_STATE,
    DEBT_DEPENDENT,
    DEBT_INDEPENDENT,
    PCT_WOMEN,
    PCT_MEN,
    PCT_AMERICAN_INDIAN,
    PCT_ASIAN,
    PCT_BLACK,
    PCT_LATINO,
    PCT_PACIFIC_ISLANDER,
    PCT_WHITE,
    PCT_AGE_25_TO_64,
    PCT_DEGREES_STEM,
    PCT_DEGREES_ARTS,
    PCT_DEGREES_EDUCATION,
    PCT_DEGREES_SOCIAL,
    PCT_DEGREES_HEALTH,
    PCT_DEGREES_BUSINESS,
    NET_PRICE_LOW_INCOME,
    EARNINGS_DEPENDENT,
    EARNINGS_INDEPENDENT,
];

/// Validate a CSV header row against the required column set.
///
/// Returns an error naming every missing column so a schema mismatch is
/// diagnosable in one pass.
pub fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    let mut missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();

    let has_name = headers
        .iter()
        .any(|h| h == INSTITUTION_NAME || h == INSTITUTION_NAME_RAW);
    if !has_name {
        missing.insert(0, INSTITUTION_NAME);
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Dataset is missing {} required column(s): {}",
            missing.len(),
            missing.join(", ")
        );
    }

    Ok(())
}
