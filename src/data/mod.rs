//! College dataset types
//!
//! This module provides the record type for a single institution, the
//! enumerated demographic/academic categories used to select among its
//! columns, and the loader that reads the joint dataset from CSV.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod loader;
pub mod schema;

// Re-exports for convenience
pub use loader::Dataset;

/// Gender category for the undergraduate-share lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    Women,
    Men,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Women => write!(f, "Women"),
            Gender::Men => write!(f, "Men"),
        }
    }
}

/// Race/ethnicity category for the undergraduate-share lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Race {
    AmericanIndianOrAlaskaNative,
    Asian,
    BlackOrAfricanAmerican,
    Latino,
    NativeHawaiianOrOtherPacificIslander,
    White,
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Race::AmericanIndianOrAlaskaNative => "American Indian or Alaska Native",
            Race::Asian => "Asian",
            Race::BlackOrAfricanAmerican => "Black or African American",
            Race::Latino => "Latino",
            Race::NativeHawaiianOrOtherPacificIslander => {
                "Native Hawaiian or Other Pacific Islander"
            }
            Race::White => "White",
        };
        write!(f, "{}", label)
    }
}

/// Field-of-study category for the bachelor-degree-share lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Major {
    Stem,
    ArtsAndHumanities,
    Education,
    SocialSciences,
    HealthSciences,
    Business,
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Major::Stem => "Science, Technology, Engineering, and Math",
            Major::ArtsAndHumanities => "Arts and Humanities",
            Major::Education => "Education",
            Major::SocialSciences => "Social Sciences",
            Major::HealthSciences => "Health Sciences",
            Major::Business => "Business",
        };
        write!(f, "{}", label)
    }
}

/// Dependent vs. independent classification. Determines which debt and
/// earnings columns apply to the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PayerStatus {
    Dependent,
    Independent,
}

impl fmt::Display for PayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayerStatus::Dependent => write!(f, "Dependent"),
            PayerStatus::Independent => write!(f, "Independent"),
        }
    }
}

/// Which cost-of-attendance column applies to the student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Residency {
    InState,
    OutOfState,
}

/// A single value exposed for context serialization
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

/// One row of the joint college dataset, keyed by institution name.
///
/// Read-only after load. The two student-parent affordability-gap columns
/// are optional; every other column is a load-time precondition (see
/// [`schema`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeRecord {
    #[serde(rename = "Institution_Name_x", alias = "Institution Name_x")]
    pub name: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "MSI Type")]
    pub msi_type: String,

    #[serde(rename = "Average Cost of Attendance In-State")]
    pub cost_in_state: f64,
    #[serde(rename = "Average Cost of Attendance Out-of-State")]
    pub cost_out_of_state: f64,

    #[serde(rename = "Median Debt for Dependent Students")]
    pub debt_dependent: f64,
    #[serde(rename = "Median Debt for Independent Students")]
    pub debt_independent: f64,

    #[serde(rename = "Percent of Women Undergraduates")]
    pub pct_women: f64,
    #[serde(rename = "Percent of Men Undergraduates")]
    pub pct_men: f64,

    #[serde(rename = "Percent of American Indian or Alaska Native Undergraduates")]
    pub pct_american_indian: f64,
    #[serde(rename = "Percent of Asian Undergraduates")]
    pub pct_asian: f64,
    #[serde(rename = "Percent of Black or African American Undergraduates")]
    pub pct_black: f64,
    #[serde(rename = "Percent of Latino Undergraduates")]
    pub pct_latino: f64,
    #[serde(rename = "Percent of Native Hawaiian or Other Pacific Islander Undergraduates")]
    pub pct_pacific_islander: f64,
    #[serde(rename = "Percent of White Undergraduates")]
    pub pct_white: f64,

    #[serde(rename = "Percent of Undergraduates Age 25 to 64")]
    pub pct_age_25_to_64: f64,

    #[serde(
        rename = "Percent of Bachelor Degrees Awarded in Science, Technology, Engineering, and Math"
    )]
    pub pct_degrees_stem: f64,
    #[serde(rename = "Percent of Bachelor Degrees Awarded in Arts and Humanities")]
    pub pct_degrees_arts: f64,
    #[serde(rename = "Percent of Bachelor Degrees Awarded in Education")]
    pub pct_degrees_education: f64,
    #[serde(rename = "Percent of Bachelor Degrees Awarded in Social Sciences")]
    pub pct_degrees_social: f64,
    #[serde(rename = "Percent of Bachelor Degrees Awarded in Health Sciences")]
    pub pct_degrees_health: f64,
    #[serde(rename = "Percent of Bachelor Degrees Awarded in Business")]
    pub pct_degrees_business: f64,

    #[serde(rename = "Average Net Price for Low-Income Students, 2020-21")]
    pub net_price_low_income: f64,
    #[serde(
        rename = "Student Parent Affordability Gap: Center-Based Care",
        default
    )]
    pub gap_center_based_care: Option<f64>,
    #[serde(rename = "100% TTD Student Parent Affordability Gap", default)]
    pub gap_full_ttd: Option<f64>,

    #[serde(
        rename = "Median Earnings of Dependent Students Working and Not Enrolled 10 Years After Entry"
    )]
    pub earnings_dependent: f64,
    #[serde(
        rename = "Median Earnings of Independent Students Working and Not Enrolled 10 Years After Entry"
    )]
    pub earnings_independent: f64,
}

impl CollegeRecord {
    /// Cost-of-attendance column for the given residency
    pub fn cost(&self, residency: Residency) -> f64 {
        match residency {
            Residency::InState => self.cost_in_state,
            Residency::OutOfState => self.cost_out_of_state,
        }
    }

    /// Median-debt column for the given payer status
    pub fn debt(&self, payer: PayerStatus) -> f64 {
        match payer {
            PayerStatus::Dependent => self.debt_dependent,
            PayerStatus::Independent => self.debt_independent,
        }
    }

    /// Median post-enrollment earnings column for the given payer status
    pub fn earnings(&self, payer: PayerStatus) -> f64 {
        match payer {
            PayerStatus::Dependent => self.earnings_dependent,
            PayerStatus::Independent => self.earnings_independent,
        }
    }

    /// Undergraduate share for the given gender, in [0, 100]
    pub fn gender_share(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Women => self.pct_women,
            Gender::Men => self.pct_men,
        }
    }

    /// Undergraduate share for the given race/ethnicity, in [0, 100]
    pub fn race_share(&self, race: Race) -> f64 {
        match race {
            Race::AmericanIndianOrAlaskaNative => self.pct_american_indian,
            Race::Asian => self.pct_asian,
            Race::BlackOrAfricanAmerican => self.pct_black,
            Race::Latino => self.pct_latino,
            Race::NativeHawaiianOrOtherPacificIslander => self.pct_pacific_islander,
            Race::White => self.pct_white,
        }
    }

    /// Bachelor-degree share for the given field of study, in [0, 100]
    pub fn major_share(&self, major: Major) -> f64 {
        match major {
            Major::Stem => self.pct_degrees_stem,
            Major::ArtsAndHumanities => self.pct_degrees_arts,
            Major::Education => self.pct_degrees_education,
            Major::SocialSciences => self.pct_degrees_social,
            Major::HealthSciences => self.pct_degrees_health,
            Major::Business => self.pct_degrees_business,
        }
    }

    /// Mean of the affordability-gap columns present on this record,
    /// or `None` when neither is available.
    pub fn parent_gap(&self) -> Option<f64> {
        match (self.gap_center_based_care, self.gap_full_ttd) {
            (Some(a), Some(b)) => Some((a + b) / 2.0),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// All fields except the institution name, as (label, value) pairs
    /// in dataset column order. Absent optional columns are skipped.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = vec![
            (schema::STATE, FieldValue::Text(self.state.clone())),
            (schema::MSI_TYPE, FieldValue::Text(self.msi_type.clone())),
            (schema::COST_IN_STATE, FieldValue::Number(self.cost_in_state)),
            (
                schema::COST_OUT_OF_STATE,
                FieldValue::Number(self.cost_out_of_state),
            ),
            (
                schema::DEBT_DEPENDENT,
                FieldValue::Number(self.debt_dependent),
            ),
            (
                schema::DEBT_INDEPENDENT,
                FieldValue::Number(self.debt_independent),
            ),
            (schema::PCT_WOMEN, FieldValue::Number(self.pct_women)),
            (schema::PCT_MEN, FieldValue::Number(self.pct_men)),
            (
                schema::PCT_AMERICAN_INDIAN,
                FieldValue::Number(self.pct_american_indian),
            ),
            (schema::PCT_ASIAN, FieldValue::Number(self.pct_asian)),
            (schema::PCT_BLACK, FieldValue::Number(self.pct_black)),
            (schema::PCT_LATINO, FieldValue::Number(self.pct_latino)),
            (
                schema::PCT_PACIFIC_ISLANDER,
                FieldValue::Number(self.pct_pacific_islander),
            ),
            (schema::PCT_WHITE, FieldValue::Number(self.pct_white)),
            (
                schema::PCT_AGE_25_TO_64,
                FieldValue::Number(self.pct_age_25_to_64),
            ),
            (
                schema::PCT_DEGREES_STEM,
                FieldValue::Number(self.pct_degrees_stem),
            ),
            (
                schema::PCT_DEGREES_ARTS,
                FieldValue::Number(self.pct_degrees_arts),
            ),
            (
                schema::PCT_DEGREES_EDUCATION,
                FieldValue::Number(self.pct_degrees_education),
            ),
            (
                schema::PCT_DEGREES_SOCIAL,
                FieldValue::Number(self.pct_degrees_social),
            ),
            (
                schema::PCT_DEGREES_HEALTH,
                FieldValue::Number(self.pct_degrees_health),
            ),
            (
                schema::PCT_DEGREES_BUSINESS,
                FieldValue::Number(self.pct_degrees_business),
            ),
            (
                schema::NET_PRICE_LOW_INCOME,
                FieldValue::Number(self.net_price_low_income),
            ),
        ];

        if let Some(gap) = self.gap_center_based_care {
            fields.push((schema::GAP_CENTER_BASED_CARE, FieldValue::Number(gap)));
        }
        if let Some(gap) = self.gap_full_ttd {
            fields.push((schema::GAP_FULL_TTD, FieldValue::Number(gap)));
        }

        fields.push((
            schema::EARNINGS_DEPENDENT,
            FieldValue::Number(self.earnings_dependent),
        ));
        fields.push((
            schema::EARNINGS_INDEPENDENT,
            FieldValue::Number(self.earnings_independent),
        ));

        fields
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// A baseline record for unit tests; individual tests override the
    /// fields they care about.
    pub fn record(name: &str, state: &str) -> CollegeRecord {
        CollegeRecord {
            name: name.to_string(),
            state: state.to_string(),
            msi_type: "None".to_string(),
            cost_in_state: 15_000.0,
            cost_out_of_state: 30_000.0,
            debt_dependent: 12_000.0,
            debt_independent: 14_000.0,
            pct_women: 55.0,
            pct_men: 45.0,
            pct_american_indian: 1.0,
            pct_asian: 10.0,
            pct_black: 12.0,
            pct_latino: 20.0,
            pct_pacific_islander: 0.5,
            pct_white: 50.0,
            pct_age_25_to_64: 18.0,
            pct_degrees_stem: 30.0,
            pct_degrees_arts: 10.0,
            pct_degrees_education: 5.0,
            pct_degrees_social: 15.0,
            pct_degrees_health: 12.0,
            pct_degrees_business: 20.0,
            net_price_low_income: 9_000.0,
            gap_center_based_care: Some(6_000.0),
            gap_full_ttd: Some(8_000.0),
            earnings_dependent: 45_000.0,
            earnings_independent: 40_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::record;
    use super::*;

    #[test]
    fn test_column_accessors() {
        let r = record("Test College", "CA");

        assert_eq!(r.cost(Residency::InState), 15_000.0);
        assert_eq!(r.cost(Residency::OutOfState), 30_000.0);
        assert_eq!(r.debt(PayerStatus::Dependent), 12_000.0);
        assert_eq!(r.debt(PayerStatus::Independent), 14_000.0);
        assert_eq!(r.earnings(PayerStatus::Dependent), 45_000.0);
        assert_eq!(r.earnings(PayerStatus::Independent), 40_000.0);
        assert_eq!(r.gender_share(Gender::Women), 55.0);
        assert_eq!(r.race_share(Race::Latino), 20.0);
        assert_eq!(r.major_share(Major::Business), 20.0);
    }

    #[test]
    fn test_parent_gap_mean() {
        let mut r = record("Test College", "CA");
        assert_eq!(r.parent_gap(), Some(7_000.0));

        r.gap_full_ttd = None;
        assert_eq!(r.parent_gap(), Some(6_000.0));

        r.gap_center_based_care = None;
        assert_eq!(r.parent_gap(), None);
    }

    #[test]
    fn test_fields_skip_absent_gaps() {
        let mut r = record("Test College", "CA");
        r.gap_center_based_care = None;
        r.gap_full_ttd = None;

        let fields = r.fields();
        assert!(!fields.iter().any(|(label, _)| label.contains("Gap")));
        // Name is the block header, never a field line.
        assert!(!fields
            .iter()
            .any(|(_, v)| matches!(v, FieldValue::Text(t) if t == "Test College")));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            Race::NativeHawaiianOrOtherPacificIslander.to_string(),
            "Native Hawaiian or Other Pacific Islander"
        );
        assert_eq!(
            Major::Stem.to_string(),
            "Science, Technology, Engineering, and Math"
        );
        assert_eq!(PayerStatus::Independent.to_string(), "Independent");
    }
}
