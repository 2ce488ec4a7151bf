//! Student query types
//!
//! Defines the structured query a student submits to the ranking engine:
//! preferences, financial constraints, and demographic fields.

use anyhow::{anyhow, Error};
use std::fmt;
use std::str::FromStr;

use crate::data::{FieldValue, Gender, Major, PayerStatus, Race, Residency};

/// Bounds on the number of ranked colleges a query may request
pub const MIN_TOP_K: usize = 1;
pub const MAX_TOP_K: usize = 10;

/// Desired jurisdiction: a concrete state code, or no preference.
///
/// `Any` bypasses the jurisdiction filter entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChoice {
    Any,
    State(String),
}

impl FromStr for StateChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("State choice cannot be empty"));
        }
        if trimmed.eq_ignore_ascii_case("any") {
            Ok(StateChoice::Any)
        } else {
            Ok(StateChoice::State(trimmed.to_string()))
        }
    }
}

impl fmt::Display for StateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateChoice::Any => write!(f, "Any"),
            StateChoice::State(s) => write!(f, "{}", s),
        }
    }
}

/// Minority-serving-institution preference: a concrete category from the
/// dataset, or no preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MsiPreference {
    Any,
    Category(String),
}

impl FromStr for MsiPreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("MSI preference cannot be empty"));
        }
        if trimmed.eq_ignore_ascii_case("any") {
            Ok(MsiPreference::Any)
        } else {
            Ok(MsiPreference::Category(trimmed.to_string()))
        }
    }
}

impl fmt::Display for MsiPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MsiPreference::Any => write!(f, "Any"),
            MsiPreference::Category(c) => write!(f, "{}", c),
        }
    }
}

/// A student's stated preferences and constraints.
///
/// Ephemeral: constructed per ranking request and discarded afterwards.
/// The engine takes it by reference and never mutates it.
#[derive(Debug, Clone)]
pub struct Query {
    pub desired_state: StateChoice,
    pub home_state: String,
    pub payer_status: PayerStatus,
    pub max_tuition: f64,
    pub max_debt: f64,
    pub msi_preference: MsiPreference,
    pub gender: Gender,
    pub international_student: bool,
    pub race: Race,
    pub student_parent: bool,
    pub major: Major,
    pub age: u32,
    pub estimated_income: f64,
    pub top_k: usize,
}

impl Query {
    /// Create a query with the required preference fields and neutral
    /// defaults for the rest. Use the `with_*` setters to fill in the
    /// remaining fields.
    pub fn new(desired_state: StateChoice, home_state: &str, payer_status: PayerStatus) -> Self {
        Self {
            desired_state,
            home_state: home_state.to_string(),
            payer_status,
            max_tuition: f64::MAX,
            max_debt: f64::MAX,
            msi_preference: MsiPreference::Any,
            gender: Gender::Women,
            international_student: false,
            race: Race::White,
            student_parent: false,
            major: Major::Stem,
            age: 18,
            estimated_income: 0.0,
            top_k: 5,
        }
    }

    pub fn with_max_tuition(mut self, max_tuition: f64) -> Self {
        self.max_tuition = max_tuition;
        self
    }

    pub fn with_max_debt(mut self, max_debt: f64) -> Self {
        self.max_debt = max_debt;
        self
    }

    pub fn with_msi_preference(mut self, msi: MsiPreference) -> Self {
        self.msi_preference = msi;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_international_student(mut self, international: bool) -> Self {
        self.international_student = international;
        self
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    pub fn with_student_parent(mut self, student_parent: bool) -> Self {
        self.student_parent = student_parent;
        self
    }

    pub fn with_major(mut self, major: Major) -> Self {
        self.major = major;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_estimated_income(mut self, income: f64) -> Self {
        self.estimated_income = income;
        self
    }

    /// Set the result-count limit, clamped to [`MIN_TOP_K`]..=[`MAX_TOP_K`]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.clamp(MIN_TOP_K, MAX_TOP_K);
        self
    }

    /// Which cost-of-attendance column applies: in-state only when the
    /// desired state is a concrete state equal to the home state. `Any`
    /// is not the home state, so it uses the out-of-state column.
    pub fn residency(&self) -> Residency {
        match &self.desired_state {
            StateChoice::State(s) if *s == self.home_state => Residency::InState,
            _ => Residency::OutOfState,
        }
    }

    /// The query's fields as (snake_case name, value) pairs for the
    /// context builder. Empty text values are skipped.
    pub fn profile_fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = vec![
            (
                "desired_state",
                FieldValue::Text(self.desired_state.to_string()),
            ),
            ("home_state", FieldValue::Text(self.home_state.clone())),
            (
                "payer_status",
                FieldValue::Text(self.payer_status.to_string()),
            ),
            ("max_tuition", FieldValue::Number(self.max_tuition)),
            ("max_debt", FieldValue::Number(self.max_debt)),
            (
                "msi_preference",
                FieldValue::Text(self.msi_preference.to_string()),
            ),
            ("gender", FieldValue::Text(self.gender.to_string())),
            (
                "international_student",
                FieldValue::Flag(self.international_student),
            ),
            ("race", FieldValue::Text(self.race.to_string())),
            ("student_parent", FieldValue::Flag(self.student_parent)),
            ("major", FieldValue::Text(self.major.to_string())),
            ("age", FieldValue::Number(f64::from(self.age))),
            (
                "estimated_income",
                FieldValue::Number(self.estimated_income),
            ),
            ("top_k", FieldValue::Number(self.top_k as f64)),
        ];
        fields.retain(|(_, v)| !matches!(v, FieldValue::Text(t) if t.is_empty()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_choice_parsing() {
        assert_eq!("any".parse::<StateChoice>().unwrap(), StateChoice::Any);
        assert_eq!("Any".parse::<StateChoice>().unwrap(), StateChoice::Any);
        assert_eq!(
            "CA".parse::<StateChoice>().unwrap(),
            StateChoice::State("CA".to_string())
        );
        assert!("  ".parse::<StateChoice>().is_err());
    }

    #[test]
    fn test_msi_preference_parsing() {
        assert_eq!("ANY".parse::<MsiPreference>().unwrap(), MsiPreference::Any);
        assert_eq!(
            "HBCU".parse::<MsiPreference>().unwrap(),
            MsiPreference::Category("HBCU".to_string())
        );
    }

    #[test]
    fn test_residency_selection() {
        let home = Query::new(
            StateChoice::State("CA".to_string()),
            "CA",
            PayerStatus::Dependent,
        );
        assert_eq!(home.residency(), Residency::InState);

        let away = Query::new(
            StateChoice::State("NY".to_string()),
            "CA",
            PayerStatus::Dependent,
        );
        assert_eq!(away.residency(), Residency::OutOfState);

        let any = Query::new(StateChoice::Any, "CA", PayerStatus::Dependent);
        assert_eq!(any.residency(), Residency::OutOfState);
    }

    #[test]
    fn test_top_k_clamped() {
        let query = Query::new(StateChoice::Any, "CA", PayerStatus::Dependent);
        assert_eq!(query.clone().with_top_k(0).top_k, MIN_TOP_K);
        assert_eq!(query.clone().with_top_k(3).top_k, 3);
        assert_eq!(query.with_top_k(50).top_k, MAX_TOP_K);
    }

    #[test]
    fn test_profile_fields_skip_empty_text() {
        let mut query = Query::new(StateChoice::Any, "CA", PayerStatus::Dependent);
        query.home_state = String::new();

        let fields = query.profile_fields();
        assert!(!fields.iter().any(|(name, _)| *name == "home_state"));
        assert!(fields.iter().any(|(name, _)| *name == "desired_state"));
    }
}
