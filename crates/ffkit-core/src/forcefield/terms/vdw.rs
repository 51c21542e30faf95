use super::{TermMeta, sorted_pair};
use crate::forcefield::potentials;

/// vdW term in LJ-12-6 form: `U = 4*epsilon*((sigma/r)^12 - (sigma/r)^6)`.
///
/// LJ-12-6 is common enough to keep as its own variant instead of going
/// through the generalized [`MieTerm`].
#[derive(Debug, Clone, PartialEq)]
pub struct LJ126Term {
    type1: String,
    type2: String,
    pub epsilon: f64,
    pub sigma: f64,
    pub meta: TermMeta,
}

impl LJ126Term {
    pub fn new(type1: &str, type2: &str, epsilon: f64, sigma: f64) -> Self {
        let (at1, at2) = sorted_pair(type1, type2);
        Self {
            type1: at1,
            type2: at2,
            epsilon,
            sigma,
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

    pub fn evaluate_energy(&self, r: f64) -> f64 {
        potentials::lj_12_6(r, self.epsilon, self.sigma)
    }
}

/// vdW term in generalized Mie form, mainly used by coarse-grained force
/// fields:
///
/// `U = C * epsilon * ((sigma/r)^n - (sigma/r)^m)` with
/// `C = n/(n-m) * (n/m)^(m/(n-m))` and `r_min = (n/m)^(1/(n-m)) * sigma`,
/// where `n` is `repulsion` and `m` is `attraction`.
#[derive(Debug, Clone, PartialEq)]
pub struct MieTerm {
    type1: String,
    type2: String,
    pub epsilon: f64,
    pub sigma: f64,
    pub repulsion: f64,
    pub attraction: f64,
    pub meta: TermMeta,
}

impl MieTerm {
    pub fn new(
        type1: &str,
        type2: &str,
        epsilon: f64,
        sigma: f64,
        repulsion: f64,
        attraction: f64,
    ) -> Self {
        let (at1, at2) = sorted_pair(type1, type2);
        Self {
            type1: at1,
            type2: at2,
            epsilon,
            sigma,
            repulsion,
            attraction,
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

    /// The energy pre-factor `C = n/(n-m) * (n/m)^(m/(n-m))`.
    pub fn factor_energy(&self) -> f64 {
        potentials::mie_energy_factor(self.repulsion, self.attraction)
    }

    /// The factor converting `sigma` to the distance of the energy minimum,
    /// `(n/m)^(1/(n-m))`.
    pub fn factor_r_min(&self) -> f64 {
        potentials::mie_r_min_factor(self.repulsion, self.attraction)
    }

    pub fn evaluate_energy(&self, r: f64) -> f64 {
        potentials::mie(r, self.epsilon, self.sigma, self.repulsion, self.attraction)
    }
}
