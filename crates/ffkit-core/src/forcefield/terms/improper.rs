use super::{TermError, TermMeta, WILDCARD};
use crate::forcefield::potentials;

/// Canonicalizes an improper's atom sequence: the first atom is the fixed
/// center (wildcard forbidden), the three side slots sort the non-wildcard
/// types lexicographically and pad with wildcards to exactly three.
fn canonical_sides(
    class: &'static str,
    type1: &str,
    type2: &str,
    type3: &str,
    type4: &str,
) -> Result<(String, String, String, String), TermError> {
    if type1 == WILDCARD {
        return Err(TermError::WildcardCenter {
            class,
            type1: type1.to_string(),
            type2: type2.to_string(),
            type3: type3.to_string(),
            type4: type4.to_string(),
        });
    }
    let mut sides: Vec<&str> = [type2, type3, type4]
        .into_iter()
        .filter(|t| *t != WILDCARD)
        .collect();
    sides.sort_unstable();
    while sides.len() < 3 {
        sides.push(WILDCARD);
    }
    Ok((
        type1.to_string(),
        sides[0].to_string(),
        sides[1].to_string(),
        sides[2].to_string(),
    ))
}

/// Improper term in OPLS cosine form: `U = k * (1 - cos(2*phi))`.
///
/// The improper keeps 3-coordinated centers planar. In the OPLS convention
/// the improper value of `a1-a2-a3-a4` (center first) is the angle between
/// planes `a2-a3-a1` and `a3-a1-a4`.
#[derive(Debug, Clone, PartialEq)]
pub struct OplsImproperTerm {
    type1: String,
    type2: String,
    type3: String,
    type4: String,
    pub k: f64,
    pub meta: TermMeta,
}

impl OplsImproperTerm {
    pub fn new(
        type1: &str,
        type2: &str,
        type3: &str,
        type4: &str,
        k: f64,
    ) -> Result<Self, TermError> {
        let (at1, at2, at3, at4) =
            canonical_sides("OplsImproperTerm", type1, type2, type3, type4)?;
        Ok(Self {
            type1: at1,
            type2: at2,
            type3: at3,
            type4: at4,
            k,
            meta: TermMeta::default(),
        })
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

    pub fn type4(&self) -> &str {
        &self.type4
    }

    pub fn name(&self) -> String {
        format!(
            "{},{},{},{}",
            self.type1, self.type2, self.type3, self.type4
        )
    }

    /// `phi` in radians.
    pub fn evaluate_energy(&self, phi: f64) -> f64 {
        potentials::opls_improper(phi, self.k)
    }
}

/// Improper term in harmonic form, mainly used by CHARMM:
/// `U = k * (phi - phi0)^2`.
///
/// `phi` is stored in degrees while `k` is per squared radian. In the CHARMM
/// convention the improper value of `a1-a2-a3-a4` (center first) is the angle
/// between planes `a1-a2-a3` and `a2-a3-a4`.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicImproperTerm {
    type1: String,
    type2: String,
    type3: String,
    type4: String,
    /// Equilibrium value `phi0` in degrees.
    pub phi: f64,
    pub k: f64,
    pub meta: TermMeta,
}

impl HarmonicImproperTerm {
    pub fn new(
        type1: &str,
        type2: &str,
        type3: &str,
        type4: &str,
        phi: f64,
        k: f64,
    ) -> Result<Self, TermError> {
        let (at1, at2, at3, at4) =
            canonical_sides("HarmonicImproperTerm", type1, type2, type3, type4)?;
        Ok(Self {
            type1: at1,
            type2: at2,
            type3: at3,
            type4: at4,
            phi,
            k,
            meta: TermMeta::default(),
        })
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

    pub fn type4(&self) -> &str {
        &self.type4
    }

    pub fn name(&self) -> String {
        format!(
            "{},{},{},{}",
            self.type1, self.type2, self.type3, self.type4
        )
    }

    /// `phi` in degrees.
    pub fn evaluate_energy(&self, phi: f64) -> f64 {
        potentials::harmonic_degrees(phi, self.phi, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn center_wildcard_is_rejected() {
        assert!(matches!(
            OplsImproperTerm::new("*", "a", "b", "c", 1.0),
            Err(TermError::WildcardCenter { .. })
        ));
        assert!(matches!(
            HarmonicImproperTerm::new("*", "a", "b", "c", 0.0, 1.0),
            Err(TermError::WildcardCenter { .. })
        ));
    }

    #[test]
    fn sides_sort_non_wildcards_first_and_pad_with_wildcards() {
        let term = OplsImproperTerm::new("c_3", "*", "o_1", "n_2", 2.5).unwrap();
        assert_eq!(term.name(), "c_3,n_2,o_1,*");

        let term = OplsImproperTerm::new("c_3", "*", "*", "n_2", 2.5).unwrap();
        assert_eq!(term.name(), "c_3,n_2,*,*");
    }

    #[test]
    fn side_order_is_irrelevant() {
        let a = OplsImproperTerm::new("c_3", "o_1", "h_1", "n_2", 2.5).unwrap();
        let b = OplsImproperTerm::new("c_3", "n_2", "o_1", "h_1", 2.5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.name(), "c_3,h_1,n_2,o_1");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let once = OplsImproperTerm::new("c_3", "*", "o_1", "n_2", 2.5).unwrap();
        let twice = OplsImproperTerm::new(
            once.type1(),
            once.type2(),
            once.type3(),
            once.type4(),
            2.5,
        )
        .unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn opls_energy_vanishes_in_plane_and_peaks_perpendicular() {
        let term = OplsImproperTerm::new("c_3", "a", "b", "c", 2.0).unwrap();
        assert!(term.evaluate_energy(0.0).abs() < 1e-12);
        assert!((term.evaluate_energy(PI / 2.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn harmonic_energy_converts_degrees_to_radians() {
        let term = HarmonicImproperTerm::new("c_3", "a", "b", "c", 0.0, 50.0).unwrap();
        assert_eq!(term.evaluate_energy(0.0), 0.0);
        let expected = 50.0 * (5f64.to_radians()).powi(2);
        assert!((term.evaluate_energy(5.0) - expected).abs() < 1e-9);
    }
}
