use super::{TermMeta, sorted_pair};
use crate::forcefield::potentials;

/// Angle term in harmonic form: `U = k * (theta - theta0)^2`.
///
/// `theta` is stored in degrees while `k` is per squared radian; the
/// conversion happens inside the energy function.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicAngleTerm {
    type1: String,
    type2: String,
    type3: String,
    /// Equilibrium angle `theta0` in degrees.
    pub theta: f64,
    pub k: f64,
    pub fixed: bool,
    pub meta: TermMeta,
}

impl HarmonicAngleTerm {
    /// `type2` is the vertex and never moves; the side types are sorted.
    pub fn new(type1: &str, type2: &str, type3: &str, theta: f64, k: f64, fixed: bool) -> Self {
        let (at1, at3) = sorted_pair(type1, type3);
        Self {
            type1: at1,
            type2: type2.to_string(),
            type3: at3,
            theta,
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

    pub fn type3(&self) -> &str {
        &self.type3
    }

    pub fn name(&self) -> String {
        format!("{},{},{}", self.type1, self.type2, self.type3)
    }

    /// `theta` in degrees.
    pub fn evaluate_energy(&self, theta: f64) -> f64 {
        potentials::harmonic_degrees(theta, self.theta, self.k)
    }
}

/// Angle term in SDK form: `U = k * (theta - theta0)^2 + LJ96`.
///
/// The LJ-9-6 part carries no parameters of its own. A valid parameter set
/// must contain a Mie vdW term between `type1` and `type3` with exponents
/// 9 and 6; that consistency is checked by
/// [`ForceField::validate`](crate::forcefield::collection::ForceField::validate),
/// not here. This also means the term has no self-contained closed form, so it
/// does not implement energy evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkAngleTerm {
    type1: String,
    type2: String,
    type3: String,
    /// Equilibrium angle `theta0` in degrees.
    pub theta: f64,
    pub k: f64,
    pub meta: TermMeta,
}

impl SdkAngleTerm {
    pub fn new(type1: &str, type2: &str, type3: &str, theta: f64, k: f64) -> Self {
        let (at1, at3) = sorted_pair(type1, type3);
        Self {
            type1: at1,
            type2: type2.to_string(),
            type3: at3,
            theta,
            k,
            meta: TermMeta::default(),
        }
    }

    pub fn type1(&self) -> &str {
        &self.type1
    }

    pub fn type2(&self) -> &str {
        &self.type2
    }

    pub fn type3(&self) -> &str {
        &self.type3
    }

    pub fn name(&self) -> String {
        format!("{},{},{}", self.type1, self.type2, self.type3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_are_sorted_and_vertex_is_kept() {
        let a = HarmonicAngleTerm::new("o_2", "c_4", "h_1", 109.5, 300.0, false);
        let b = HarmonicAngleTerm::new("h_1", "c_4", "o_2", 109.5, 300.0, false);
        assert_eq!(a, b);
        assert_eq!(a.name(), "h_1,c_4,o_2");
        assert_eq!(a.type2(), "c_4");
    }

    #[test]
    fn vertex_is_never_reordered_even_when_smallest() {
        let term = HarmonicAngleTerm::new("z", "a", "y", 120.0, 1.0, false);
        assert_eq!(term.name(), "y,a,z");
    }

    #[test]
    fn energy_converts_degrees_to_radians_before_squaring() {
        let term = HarmonicAngleTerm::new("a", "b", "c", 120.0, 100.0, false);
        assert_eq!(term.evaluate_energy(120.0), 0.0);
        let expected = 100.0 * (10f64.to_radians()).powi(2);
        assert!((term.evaluate_energy(130.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn sdk_angle_sides_are_sorted() {
        let a = SdkAngleTerm::new("w", "ch2", "ch3", 97.0, 60.0);
        let b = SdkAngleTerm::new("ch3", "ch2", "w", 97.0, 60.0);
        assert_eq!(a, b);
        assert_eq!(a.name(), "ch3,ch2,w");
    }
}
