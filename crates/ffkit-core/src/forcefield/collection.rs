//! # Term Collection
//!
//! [`ForceField`] owns one map per structural family, keyed by canonical term
//! name. Cross-term consistency rules that no single term can enforce (the
//! SDK-angle/Mie pairing) live here as an explicit validation step.

use super::terms::{FFTerm, sorted_pair};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum ForceFieldError {
    #[error("Duplicate {class} term '{name}'")]
    DuplicateTerm { class: &'static str, name: String },

    #[error("SDK angle '{angle}' requires a Mie vdW term between '{pair}'")]
    SdkAngleWithoutMie { angle: String, pair: String },

    #[error(
        "SDK angle '{angle}' requires Mie exponents 9/6, found {repulsion}/{attraction} on '{pair}'"
    )]
    SdkAngleExponents {
        angle: String,
        pair: String,
        repulsion: f64,
        attraction: f64,
    },
}

/// An owning, name-keyed collection of force-field terms.
///
/// Each family keeps its own ordered map so iteration over a saved parameter
/// set is deterministic. A term is either inserted whole or rejected; nothing
/// here mutates a term after insertion.
#[derive(Debug, Clone, Default)]
pub struct ForceField {
    atom_types: BTreeMap<String, FFTerm>,
    charge_increments: BTreeMap<String, FFTerm>,
    vdw_terms: BTreeMap<String, FFTerm>,
    bond_terms: BTreeMap<String, FFTerm>,
    angle_terms: BTreeMap<String, FFTerm>,
    dihedral_terms: BTreeMap<String, FFTerm>,
    improper_terms: BTreeMap<String, FFTerm>,
    polar_terms: BTreeMap<String, FFTerm>,
}

impl ForceField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a term into its family map, rejecting a second term with the
    /// same canonical name in the same family.
    pub fn add_term(&mut self, term: FFTerm) -> Result<(), ForceFieldError> {
        let name = term.name();
        let class = term.class_name();
        let family = match &term {
            FFTerm::AtomType(_) => &mut self.atom_types,
            FFTerm::ChargeIncrement(_) => &mut self.charge_increments,
            FFTerm::LJ126(_) | FFTerm::Mie(_) => &mut self.vdw_terms,
            FFTerm::HarmonicBond(_) => &mut self.bond_terms,
            FFTerm::HarmonicAngle(_) | FFTerm::SdkAngle(_) => &mut self.angle_terms,
            FFTerm::PeriodicDihedral(_) => &mut self.dihedral_terms,
            FFTerm::OplsImproper(_) | FFTerm::HarmonicImproper(_) => &mut self.improper_terms,
            FFTerm::Drude(_) => &mut self.polar_terms,
        };
        if family.contains_key(&name) {
            return Err(ForceFieldError::DuplicateTerm { class, name });
        }
        debug!(class, name = %name, "adding force field term");
        family.insert(name, term);
        Ok(())
    }

    pub fn atom_types(&self) -> &BTreeMap<String, FFTerm> {
        &self.atom_types
    }

    pub fn charge_increments(&self) -> &BTreeMap<String, FFTerm> {
        &self.charge_increments
    }

    pub fn vdw_terms(&self) -> &BTreeMap<String, FFTerm> {
        &self.vdw_terms
    }

    pub fn bond_terms(&self) -> &BTreeMap<String, FFTerm> {
        &self.bond_terms
    }

    pub fn angle_terms(&self) -> &BTreeMap<String, FFTerm> {
        &self.angle_terms
    }

    pub fn dihedral_terms(&self) -> &BTreeMap<String, FFTerm> {
        &self.dihedral_terms
    }

    pub fn improper_terms(&self) -> &BTreeMap<String, FFTerm> {
        &self.improper_terms
    }

    pub fn polar_terms(&self) -> &BTreeMap<String, FFTerm> {
        &self.polar_terms
    }

    pub fn len(&self) -> usize {
        self.iter_terms().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All terms in a deterministic order: family by family, canonical names
    /// ascending within each.
    pub fn iter_terms(&self) -> impl Iterator<Item = &FFTerm> {
        self.atom_types
            .values()
            .chain(self.charge_increments.values())
            .chain(self.vdw_terms.values())
            .chain(self.bond_terms.values())
            .chain(self.angle_terms.values())
            .chain(self.dihedral_terms.values())
            .chain(self.improper_terms.values())
            .chain(self.polar_terms.values())
    }

    /// Looks up a term of any family by canonical name.
    pub fn find(&self, name: &str) -> Option<&FFTerm> {
        self.iter_terms().find(|t| t.name() == name)
    }

    /// Cross-term consistency checks that single terms must not enforce.
    ///
    /// Currently: every SDK angle needs a Mie vdW term between its two side
    /// types with repulsion 9 and attraction 6, because the angle's LJ-9-6
    /// part takes epsilon and sigma from that term.
    pub fn validate(&self) -> Result<(), ForceFieldError> {
        for term in self.angle_terms.values() {
            let FFTerm::SdkAngle(angle) = term else {
                continue;
            };
            let (t1, t3) = sorted_pair(angle.type1(), angle.type3());
            let pair = format!("{t1},{t3}");
            match self.vdw_terms.get(&pair) {
                Some(FFTerm::Mie(mie)) if mie.repulsion == 9.0 && mie.attraction == 6.0 => {}
                Some(FFTerm::Mie(mie)) => {
                    return Err(ForceFieldError::SdkAngleExponents {
                        angle: angle.name(),
                        pair,
                        repulsion: mie.repulsion,
                        attraction: mie.attraction,
                    });
                }
                _ => {
                    return Err(ForceFieldError::SdkAngleWithoutMie {
                        angle: angle.name(),
                        pair,
                    });
                }
            }
        }
        Ok(())
    }
}
