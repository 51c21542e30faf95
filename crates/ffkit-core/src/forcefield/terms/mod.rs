//! # Term Variants
//!
//! One module per structural family of force-field terms. Every concrete
//! functional form canonicalizes its participant atom-type strings exactly once,
//! in its constructor, before any other field is assigned. The canonical
//! identity fields are private and immutable thereafter; auxiliary fields
//! (numeric parameters, metadata) stay public.
//!
//! The [`FFTerm`] tagged union covers the full, closed set of functional forms
//! and is the unit handled by the codec, the registry, and the owning
//! [`ForceField`](crate::forcefield::collection::ForceField) collection.

mod angle;
mod atom_type;
mod bond;
mod charge_increment;
mod dihedral;
mod improper;
mod polarization;
mod vdw;

pub use angle::{HarmonicAngleTerm, SdkAngleTerm};
pub use atom_type::AtomType;
pub use bond::HarmonicBondTerm;
pub use charge_increment::ChargeIncrementTerm;
pub use dihedral::{DihedralParameter, PeriodicDihedralTerm};
pub use improper::{HarmonicImproperTerm, OplsImproperTerm};
pub use polarization::DrudeTerm;
pub use vdw::{LJ126Term, MieTerm};

use thiserror::Error;

/// The atom-type placeholder matching any type during parameter lookup.
///
/// Wildcard terms have lower priority than exact matches, and the wildcard is
/// always placed last by the canonicalization rules that admit it. The
/// placement is an explicit rule, never a byproduct of string comparison.
pub const WILDCARD: &str = "*";

/// Provenance and free-text annotations shared by every term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermMeta {
    /// Version string of the parameter set this term came from, if any.
    pub version: Option<String>,
    /// Free-text comments, useful when generating simulation inputs.
    pub comments: Vec<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum TermError {
    #[error("Non-zero charge increment {value} between atoms of the same type '{type_name}'")]
    ChargeIncrementNonZero { type_name: String, value: f64 },

    #[error("Wildcard not allowed for center atoms in {class} '{type1},{type2},{type3},{type4}'")]
    WildcardCenter {
        class: &'static str,
        type1: String,
        type2: String,
        type3: String,
        type4: String,
    },

    #[error("Multiplicity must be a positive integer for dihedral '{name}'")]
    InvalidMultiplicity { name: String },

    #[error("Duplicated multiplicity {n} for dihedral '{name}'")]
    DuplicateMultiplicity { name: String, n: u32 },

    #[error("Dihedral '{name}' does not follow OPLS convention: {reason}")]
    NotOplsConvention { name: String, reason: String },

    #[error("Mass must be >= -1 for atom type '{name}': {mass}")]
    InvalidMass { name: String, mass: f64 },

    #[error("Energy evaluation is not supported for {class} '{name}'")]
    UnsupportedEnergy { class: &'static str, name: String },
}

/// Returns the two type strings in lexicographic order.
pub(crate) fn sorted_pair(type1: &str, type2: &str) -> (String, String) {
    if type1 <= type2 {
        (type1.to_string(), type2.to_string())
    } else {
        (type2.to_string(), type1.to_string())
    }
}

/// The closed set of concrete force-field term variants.
///
/// Dispatch happens on the tag, never on runtime type identity. The variant
/// set mirrors the class names of the persisted format, see
/// [`FFTerm::class_name`].
#[derive(Debug, Clone, PartialEq)]
pub enum FFTerm {
    AtomType(AtomType),
    ChargeIncrement(ChargeIncrementTerm),
    LJ126(LJ126Term),
    Mie(MieTerm),
    HarmonicBond(HarmonicBondTerm),
    HarmonicAngle(HarmonicAngleTerm),
    SdkAngle(SdkAngleTerm),
    PeriodicDihedral(PeriodicDihedralTerm),
    OplsImproper(OplsImproperTerm),
    HarmonicImproper(HarmonicImproperTerm),
    Drude(DrudeTerm),
}

impl FFTerm {
    /// The class name used as the element tag in the persisted format.
    pub fn class_name(&self) -> &'static str {
        match self {
            FFTerm::AtomType(_) => "AtomType",
            FFTerm::ChargeIncrement(_) => "ChargeIncrementTerm",
            FFTerm::LJ126(_) => "LJ126Term",
            FFTerm::Mie(_) => "MieTerm",
            FFTerm::HarmonicBond(_) => "HarmonicBondTerm",
            FFTerm::HarmonicAngle(_) => "HarmonicAngleTerm",
            FFTerm::SdkAngle(_) => "SDKAngleTerm",
            FFTerm::PeriodicDihedral(_) => "PeriodicDihedralTerm",
            FFTerm::OplsImproper(_) => "OplsImproperTerm",
            FFTerm::HarmonicImproper(_) => "HarmonicImproperTerm",
            FFTerm::Drude(_) => "DrudeTerm",
        }
    }

    /// The canonical, order-independent identity key of this term.
    pub fn name(&self) -> String {
        match self {
            FFTerm::AtomType(t) => t.name().to_string(),
            FFTerm::ChargeIncrement(t) => t.name(),
            FFTerm::LJ126(t) => t.name(),
            FFTerm::Mie(t) => t.name(),
            FFTerm::HarmonicBond(t) => t.name(),
            FFTerm::HarmonicAngle(t) => t.name(),
            FFTerm::SdkAngle(t) => t.name(),
            FFTerm::PeriodicDihedral(t) => t.name(),
            FFTerm::OplsImproper(t) => t.name(),
            FFTerm::HarmonicImproper(t) => t.name(),
            FFTerm::Drude(t) => t.name().to_string(),
        }
    }

    pub fn meta(&self) -> &TermMeta {
        match self {
            FFTerm::AtomType(t) => &t.meta,
            FFTerm::ChargeIncrement(t) => &t.meta,
            FFTerm::LJ126(t) => &t.meta,
            FFTerm::Mie(t) => &t.meta,
            FFTerm::HarmonicBond(t) => &t.meta,
            FFTerm::HarmonicAngle(t) => &t.meta,
            FFTerm::SdkAngle(t) => &t.meta,
            FFTerm::PeriodicDihedral(t) => &t.meta,
            FFTerm::OplsImproper(t) => &t.meta,
            FFTerm::HarmonicImproper(t) => &t.meta,
            FFTerm::Drude(t) => &t.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut TermMeta {
        match self {
            FFTerm::AtomType(t) => &mut t.meta,
            FFTerm::ChargeIncrement(t) => &mut t.meta,
            FFTerm::LJ126(t) => &mut t.meta,
            FFTerm::Mie(t) => &mut t.meta,
            FFTerm::HarmonicBond(t) => &mut t.meta,
            FFTerm::HarmonicAngle(t) => &mut t.meta,
            FFTerm::SdkAngle(t) => &mut t.meta,
            FFTerm::PeriodicDihedral(t) => &mut t.meta,
            FFTerm::OplsImproper(t) => &mut t.meta,
            FFTerm::HarmonicImproper(t) => &mut t.meta,
            FFTerm::Drude(t) => &mut t.meta,
        }
    }

    /// Evaluates the closed-form potential of this term at an observed value
    /// (a distance, an angle in degrees, or a torsion in radians, depending on
    /// the variant).
    ///
    /// Intended for debugging and inspection, not simulation. Variants without
    /// a closed form (atom types, charge increments, SDK angles) return
    /// [`TermError::UnsupportedEnergy`] rather than a silent zero.
    pub fn evaluate_energy(&self, val: f64) -> Result<f64, TermError> {
        match self {
            FFTerm::LJ126(t) => Ok(t.evaluate_energy(val)),
            FFTerm::Mie(t) => Ok(t.evaluate_energy(val)),
            FFTerm::HarmonicBond(t) => Ok(t.evaluate_energy(val)),
            FFTerm::HarmonicAngle(t) => Ok(t.evaluate_energy(val)),
            FFTerm::PeriodicDihedral(t) => Ok(t.evaluate_energy(val)),
            FFTerm::OplsImproper(t) => Ok(t.evaluate_energy(val)),
            FFTerm::HarmonicImproper(t) => Ok(t.evaluate_energy(val)),
            FFTerm::Drude(t) => Ok(t.evaluate_energy(val)),
            FFTerm::AtomType(_) | FFTerm::ChargeIncrement(_) | FFTerm::SdkAngle(_) => {
                Err(TermError::UnsupportedEnergy {
                    class: self.class_name(),
                    name: self.name(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_pair_orders_lexicographically() {
        assert_eq!(
            sorted_pair("h_1", "c_4"),
            ("c_4".to_string(), "h_1".to_string())
        );
        assert_eq!(
            sorted_pair("c_4", "h_1"),
            ("c_4".to_string(), "h_1".to_string())
        );
    }

    #[test]
    fn sorted_pair_keeps_equal_types_unchanged() {
        assert_eq!(
            sorted_pair("c_4", "c_4"),
            ("c_4".to_string(), "c_4".to_string())
        );
    }

    #[test]
    fn evaluate_energy_fails_for_variants_without_closed_form() {
        let term = FFTerm::AtomType(AtomType::new("c_4"));
        assert!(matches!(
            term.evaluate_energy(1.0),
            Err(TermError::UnsupportedEnergy { class: "AtomType", .. })
        ));

        let term = FFTerm::SdkAngle(SdkAngleTerm::new("a", "b", "c", 120.0, 50.0));
        assert!(matches!(
            term.evaluate_energy(1.0),
            Err(TermError::UnsupportedEnergy { class: "SDKAngleTerm", .. })
        ));
    }

    #[test]
    fn class_names_match_persisted_format_tags() {
        let term = FFTerm::ChargeIncrement(ChargeIncrementTerm::new("a", "b", 0.1).unwrap());
        assert_eq!(term.class_name(), "ChargeIncrementTerm");
        assert_eq!(term.name(), "a,b");
    }
}
