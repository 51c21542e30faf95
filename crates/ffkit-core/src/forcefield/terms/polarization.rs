use super::TermMeta;
use crate::forcefield::constants::{AVOGADRO, ELEMENTARY_CHARGE, VACUUM_PERMITTIVITY};
use crate::forcefield::potentials;
use std::f64::consts::PI;

/// Default Drude spring constant, kJ/mol/nm^2 (4184/2 * 100).
pub const DEFAULT_DRUDE_K: f64 = 209_200.0;
/// Default Drude particle mass.
pub const DEFAULT_DRUDE_MASS: f64 = 0.4;

/// Polarization described by an isotropic Drude induced dipole.
///
/// The polarization energy is `U = k * d^2` for a Drude displacement `d`. The
/// charge split between parent atom and Drude particle follows from `alpha`
/// and `k`, see [`charge`](Self::charge).
///
/// When `merge_alpha_h` is non-zero, the polarizability of bonded hydrogens is
/// folded into this type and no separate Drude term may be provided for the
/// hydrogen types, otherwise it would be double counted.
#[derive(Debug, Clone, PartialEq)]
pub struct DrudeTerm {
    type_: String,
    /// Polarizability in nm^3.
    pub alpha: f64,
    /// Thole screening factor.
    pub thole: f64,
    /// Spring constant in kJ/mol/nm^2.
    pub k: f64,
    /// Mass taken from the parent atom for the Drude particle.
    pub mass: f64,
    /// Polarizability merged in from each bonded hydrogen, nm^3.
    pub merge_alpha_h: f64,
    pub meta: TermMeta,
}

impl DrudeTerm {
    pub fn new(type_: &str, alpha: f64, thole: f64) -> Self {
        Self {
            type_: type_.to_string(),
            alpha,
            thole,
            k: DEFAULT_DRUDE_K,
            mass: DEFAULT_DRUDE_MASS,
            merge_alpha_h: 0.0,
            meta: TermMeta::default(),
        }
    }

    pub fn atom_type(&self) -> &str {
        &self.type_
    }

    pub fn name(&self) -> &str {
        &self.type_
    }

    /// The charge offset from the Drude particle to its parent atom, in
    /// elementary charge units: `q = sqrt(4*pi*eps_0 * 2k * alpha)`.
    ///
    /// The Drude particle itself carries the negative of this charge. Pass an
    /// explicit `alpha` (e.g. with merged hydrogen polarizabilities) to
    /// override the stored one.
    pub fn charge(&self, alpha: Option<f64>) -> f64 {
        let alpha = alpha.unwrap_or(self.alpha);
        // kJ/mol/nm^2 and nm^3 to SI, then to elementary charges.
        let factor = (1e-6 / AVOGADRO).sqrt() / ELEMENTARY_CHARGE;
        (4.0 * PI * VACUUM_PERMITTIVITY * (2.0 * self.k) * alpha).sqrt() * factor
    }

    /// `d` is the Drude displacement.
    pub fn evaluate_energy(&self, d: f64) -> f64 {
        potentials::drude(d, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_default_spring_and_mass() {
        let term = DrudeTerm::new("c_4", 0.00178, 2.6);
        assert_eq!(term.name(), "c_4");
        assert_eq!(term.k, 209_200.0);
        assert_eq!(term.mass, 0.4);
        assert_eq!(term.merge_alpha_h, 0.0);
    }

    #[test]
    fn charge_matches_the_isotropic_drude_formula() {
        let term = DrudeTerm::new("c_4", 0.001, 2.6);
        // sqrt(4*pi*eps_0 * 2k * alpha) in e, with k = 209200 kJ/mol/nm^2.
        assert!((term.charge(None) - 1.7355).abs() < 1e-3);
    }

    #[test]
    fn charge_scales_with_the_square_root_of_alpha() {
        let term = DrudeTerm::new("c_4", 0.001, 2.6);
        let single = term.charge(None);
        let quadrupled = term.charge(Some(0.004));
        assert!((quadrupled - 2.0 * single).abs() < 1e-9);
    }

    #[test]
    fn energy_is_quadratic_in_displacement() {
        let term = DrudeTerm::new("c_4", 0.001, 2.6);
        assert_eq!(term.evaluate_energy(0.0), 0.0);
        assert!((term.evaluate_energy(0.01) - 209_200.0 * 1e-4).abs() < 1e-9);
    }
}
