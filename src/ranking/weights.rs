//! Score component weights
//!
//! The fixed linear weighting applied to the eight normalized score
//! components. Weights sum to 1.0, so a record that maxes every
//! component scores exactly 1.0.

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub gender: f64,
    pub race: f64,
    pub major: f64,
    pub affordability: f64,
    pub debt: f64,
    pub student_parent: f64,
    pub age: f64,
    pub earnings: f64,
}

/// Weighting used by [`crate::ranking::rank`]. Affordability and debt
/// dominate; demographics and academics act as tie-shapers.
pub const WEIGHTS: Weights = Weights {
    gender: 0.10,
    race: 0.10,
    major: 0.10,
    affordability: 0.20,
    debt: 0.20,
    student_parent: 0.10,
    age: 0.05,
    earnings: 0.15,
};

impl Weights {
    pub fn sum(&self) -> f64 {
        self.gender
            + self.race
            + self.major
            + self.affordability
            + self.debt
            + self.student_parent
            + self.age
            + self.earnings
    }
}
