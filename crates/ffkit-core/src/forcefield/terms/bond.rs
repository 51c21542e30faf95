use super::{TermMeta, sorted_pair};
use crate::forcefield::potentials;

/// Bond term in harmonic form: `U = k * (b - b0)^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicBondTerm {
    type1: String,
    type2: String,
    /// Equilibrium length `b0`.
    pub length: f64,
    pub k: f64,
    /// Whether the bond is treated as a rigid constraint rather than a free
    /// harmonic spring.
    pub fixed: bool,
    pub meta: TermMeta,
}

impl HarmonicBondTerm {
    pub fn new(type1: &str, type2: &str, length: f64, k: f64, fixed: bool) -> Self {
        let (at1, at2) = sorted_pair(type1, type2);
        Self {
            type1: at1,
            type2: at2,
            length,
            k,
            fixed,
            meta: TermMeta::default(),
        }
    }

    pub fn type1(&self) -> &str {
        &self.type1
    }

    pub fn type2(&self) -> &str {
        &self.type2
    }

    pub fn name(&self) -> String {
        format!("{},{}", self.type1, self.type2)
    }

    pub fn evaluate_energy(&self, b: f64) -> f64 {
        potentials::harmonic(b, self.length, self.k)
    }
}
