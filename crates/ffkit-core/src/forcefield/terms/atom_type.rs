use super::TermMeta;

/// The most fundamental element of a force field.
///
/// An atom type determines which vdW, bond, angle, dihedral, improper, and
/// polarization terms describe the interactions of a specific set of atoms.
///
/// Equivalence types (`eqt_*`) generalize an atom type across parameter
/// lookups without duplicating terms one-to-one: e.g. two chemically distinct
/// carbon types can share bond parameters through a common `eqt_bond` while
/// keeping separate charges. Every equivalence type defaults to the atom type's
/// own name.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomType {
    name: String,
    /// Mass of this atom type. `-1.0` means not provided by the force field;
    /// masses usually come from the topology, but values stored here can be
    /// used to assign them.
    pub mass: f64,
    /// Charge of this atom type, in elementary charge units.
    pub charge: f64,
    /// Equivalent type for vdW parameters.
    pub eqt_vdw: String,
    /// Equivalent type for charge increment parameters.
    pub eqt_q_inc: String,
    /// Equivalent type for bond parameters.
    pub eqt_bond: String,
    /// Equivalent type for angle parameters when this type is the angle center.
    pub eqt_ang_c: String,
    /// Equivalent type for angle parameters when this type is an angle side.
    pub eqt_ang_s: String,
    /// Equivalent type for dihedral parameters when this type is a dihedral center.
    pub eqt_dih_c: String,
    /// Equivalent type for dihedral parameters when this type is a dihedral side.
    pub eqt_dih_s: String,
    /// Equivalent type for improper parameters when this type is the improper center.
    pub eqt_imp_c: String,
    /// Equivalent type for improper parameters when this type is an improper side.
    pub eqt_imp_s: String,
    /// Equivalent type for polarization parameters.
    pub eqt_polar: String,
    pub meta: TermMeta,
}

impl AtomType {
    /// Creates an atom type with unknown mass, zero charge, and every
    /// equivalence type defaulting to `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mass: -1.0,
            charge: 0.0,
            eqt_vdw: name.to_string(),
            eqt_q_inc: name.to_string(),
            eqt_bond: name.to_string(),
            eqt_ang_c: name.to_string(),
            eqt_ang_s: name.to_string(),
            eqt_dih_c: name.to_string(),
            eqt_dih_s: name.to_string(),
            eqt_imp_c: name.to_string(),
            eqt_imp_s: name.to_string(),
            eqt_polar: name.to_string(),
            meta: TermMeta::default(),
        }
    }

    /// The identity of this atom type. Atom types order lexicographically by it.
    pub fn name(&self) -> &str {
        &self.name
    }
}
