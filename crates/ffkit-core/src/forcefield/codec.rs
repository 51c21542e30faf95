//! # Attribute Codec and Term Registry
//!
//! Every term (de)serializes through a flat `string key -> string value` map.
//! Encoding prints floats through their default `Display` form and booleans as
//! `true`/`false`; decoding goes through one explicit function per class, so no
//! reflection over field names is involved anywhere.
//!
//! Variable-arity substructure that cannot be flattened to fixed named fields
//! uses an explicit extra step on both sides: the periodic dihedral emits one
//! `phi_<n>`/`k_<n>` pair per multiplicity on encode, and re-adds each pair
//! through the multiplicity-checked insertion path on decode.
//!
//! The class table is populated at compile time and wrapped in the
//! [`TermRegistry`] value handed to readers, so no registration happens at run
//! time and no mutable global state exists.

use super::terms::{
    AtomType, ChargeIncrementTerm, DrudeTerm, FFTerm, HarmonicAngleTerm, HarmonicBondTerm,
    HarmonicImproperTerm, LJ126Term, MieTerm, OplsImproperTerm, PeriodicDihedralTerm, SdkAngleTerm,
    TermError,
};
use phf::phf_map;
use std::collections::BTreeMap;
use thiserror::Error;

/// The flat attribute mapping of the persisted representation.
pub type AttrMap = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Unknown force field term class '{0}'")]
    UnknownClass(String),

    #[error("Missing attribute '{attr}' for term class '{class}'")]
    MissingAttribute { class: &'static str, attr: String },

    #[error("Malformed attribute '{attr}' = '{value}' for term class '{class}'")]
    MalformedAttribute {
        class: &'static str,
        attr: String,
        value: String,
    },

    #[error("Cannot construct {class} from attributes {attrs}: {source}")]
    Construction {
        class: &'static str,
        attrs: String,
        #[source]
        source: TermError,
    },
}

type DecodeFn = fn(&AttrMap) -> Result<FFTerm, CodecError>;

static DECODERS: phf::Map<&'static str, DecodeFn> = phf_map! {
    "AtomType" => decode_atom_type as DecodeFn,
    "ChargeIncrementTerm" => decode_charge_increment as DecodeFn,
    "LJ126Term" => decode_lj126 as DecodeFn,
    "MieTerm" => decode_mie as DecodeFn,
    "HarmonicBondTerm" => decode_harmonic_bond as DecodeFn,
    "HarmonicAngleTerm" => decode_harmonic_angle as DecodeFn,
    "SDKAngleTerm" => decode_sdk_angle as DecodeFn,
    "PeriodicDihedralTerm" => decode_periodic_dihedral as DecodeFn,
    "OplsImproperTerm" => decode_opls_improper as DecodeFn,
    "HarmonicImproperTerm" => decode_harmonic_improper as DecodeFn,
    "DrudeTerm" => decode_drude as DecodeFn,
};

/// The class-name lookup table behind [`create`](Self::create).
///
/// The variant set is a closed enum, so the table is a compile-time static and
/// duplicate registration cannot arise. The registry is still passed around as
/// an explicit value rather than reached for as a singleton.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermRegistry(());

impl TermRegistry {
    pub fn new() -> Self {
        Self(())
    }

    pub fn contains(&self, class: &str) -> bool {
        DECODERS.contains_key(class)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &'static str> {
        DECODERS.keys().copied()
    }

    /// Reconstructs a term from its class name and flat attribute map.
    ///
    /// Fails with [`CodecError::UnknownClass`] for an unregistered name, with
    /// [`CodecError::MissingAttribute`]/[`CodecError::MalformedAttribute`] for
    /// schema violations, and with [`CodecError::Construction`] (echoing the
    /// full input map) when canonicalization or an invariant check rejects the
    /// decoded values.
    pub fn create(&self, class: &str, attrs: &AttrMap) -> Result<FFTerm, CodecError> {
        let decode = DECODERS
            .get(class)
            .ok_or_else(|| CodecError::UnknownClass(class.to_string()))?;
        decode(attrs)
    }
}

/// Packs a term into its flat attribute map, the exact inverse of
/// [`TermRegistry::create`] up to the printed float precision.
pub fn encode(term: &FFTerm) -> AttrMap {
    let mut attrs = AttrMap::new();
    match term {
        FFTerm::AtomType(t) => {
            attrs.insert("name".into(), t.name().into());
            attrs.insert("mass".into(), t.mass.to_string());
            attrs.insert("charge".into(), t.charge.to_string());
            attrs.insert("eqt_vdw".into(), t.eqt_vdw.clone());
            attrs.insert("eqt_q_inc".into(), t.eqt_q_inc.clone());
            attrs.insert("eqt_bond".into(), t.eqt_bond.clone());
            attrs.insert("eqt_ang_c".into(), t.eqt_ang_c.clone());
            attrs.insert("eqt_ang_s".into(), t.eqt_ang_s.clone());
            attrs.insert("eqt_dih_c".into(), t.eqt_dih_c.clone());
            attrs.insert("eqt_dih_s".into(), t.eqt_dih_s.clone());
            attrs.insert("eqt_imp_c".into(), t.eqt_imp_c.clone());
            attrs.insert("eqt_imp_s".into(), t.eqt_imp_s.clone());
            attrs.insert("eqt_polar".into(), t.eqt_polar.clone());
        }
        FFTerm::ChargeIncrement(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("value".into(), t.value.to_string());
        }
        FFTerm::LJ126(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("epsilon".into(), t.epsilon.to_string());
            attrs.insert("sigma".into(), t.sigma.to_string());
        }
        FFTerm::Mie(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("epsilon".into(), t.epsilon.to_string());
            attrs.insert("sigma".into(), t.sigma.to_string());
            attrs.insert("repulsion".into(), t.repulsion.to_string());
            attrs.insert("attraction".into(), t.attraction.to_string());
        }
        FFTerm::HarmonicBond(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("length".into(), t.length.to_string());
            attrs.insert("k".into(), t.k.to_string());
            attrs.insert("fixed".into(), t.fixed.to_string());
        }
        FFTerm::HarmonicAngle(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("type3".into(), t.type3().into());
            attrs.insert("theta".into(), t.theta.to_string());
            attrs.insert("k".into(), t.k.to_string());
            attrs.insert("fixed".into(), t.fixed.to_string());
        }
        FFTerm::SdkAngle(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("type3".into(), t.type3().into());
            attrs.insert("theta".into(), t.theta.to_string());
            attrs.insert("k".into(), t.k.to_string());
        }
        FFTerm::PeriodicDihedral(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("type3".into(), t.type3().into());
            attrs.insert("type4".into(), t.type4().into());
            for p in t.parameters() {
                attrs.insert(format!("phi_{}", p.n), format!("{:.1}", p.phi));
                attrs.insert(format!("k_{}", p.n), format!("{:.4}", p.k));
            }
        }
        FFTerm::OplsImproper(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("type3".into(), t.type3().into());
            attrs.insert("type4".into(), t.type4().into());
            attrs.insert("k".into(), t.k.to_string());
        }
        FFTerm::HarmonicImproper(t) => {
            attrs.insert("type1".into(), t.type1().into());
            attrs.insert("type2".into(), t.type2().into());
            attrs.insert("type3".into(), t.type3().into());
            attrs.insert("type4".into(), t.type4().into());
            attrs.insert("phi".into(), t.phi.to_string());
            attrs.insert("k".into(), t.k.to_string());
        }
        FFTerm::Drude(t) => {
            attrs.insert("type".into(), t.atom_type().into());
            attrs.insert("alpha".into(), t.alpha.to_string());
            attrs.insert("thole".into(), t.thole.to_string());
            attrs.insert("k".into(), t.k.to_string());
            attrs.insert("mass".into(), t.mass.to_string());
            attrs.insert("merge_alpha_h".into(), t.merge_alpha_h.to_string());
        }
    }
    attrs
}

fn require<'a>(
    class: &'static str,
    attrs: &'a AttrMap,
    attr: &str,
) -> Result<&'a str, CodecError> {
    attrs
        .get(attr)
        .map(String::as_str)
        .ok_or_else(|| CodecError::MissingAttribute {
            class,
            attr: attr.to_string(),
        })
}

fn require_f64(class: &'static str, attrs: &AttrMap, attr: &str) -> Result<f64, CodecError> {
    let raw = require(class, attrs, attr)?;
    raw.parse().map_err(|_| CodecError::MalformedAttribute {
        class,
        attr: attr.to_string(),
        value: raw.to_string(),
    })
}

fn require_bool(class: &'static str, attrs: &AttrMap, attr: &str) -> Result<bool, CodecError> {
    let raw = require(class, attrs, attr)?;
    parse_bool(raw).ok_or_else(|| CodecError::MalformedAttribute {
        class,
        attr: attr.to_string(),
        value: raw.to_string(),
    })
}

/// Permissive boolean parser for the persisted format.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" | "on" => Some(true),
        "0" | "f" | "false" | "n" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn construction(class: &'static str, attrs: &AttrMap, source: TermError) -> CodecError {
    CodecError::Construction {
        class,
        attrs: format!("{attrs:?}"),
        source,
    }
}

fn decode_atom_type(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "AtomType";
    let name = require(CLASS, attrs, "name")?;
    let mut at = AtomType::new(name);
    at.mass = require_f64(CLASS, attrs, "mass")?;
    if at.mass < -1.0 {
        return Err(construction(
            CLASS,
            attrs,
            TermError::InvalidMass {
                name: name.to_string(),
                mass: at.mass,
            },
        ));
    }
    at.charge = require_f64(CLASS, attrs, "charge")?;
    // Equivalence types already default to the atom type's own name; absent
    // keys keep the default.
    let eqt_slots: [(&str, &mut String); 10] = [
        ("eqt_vdw", &mut at.eqt_vdw),
        ("eqt_q_inc", &mut at.eqt_q_inc),
        ("eqt_bond", &mut at.eqt_bond),
        ("eqt_ang_c", &mut at.eqt_ang_c),
        ("eqt_ang_s", &mut at.eqt_ang_s),
        ("eqt_dih_c", &mut at.eqt_dih_c),
        ("eqt_dih_s", &mut at.eqt_dih_s),
        ("eqt_imp_c", &mut at.eqt_imp_c),
        ("eqt_imp_s", &mut at.eqt_imp_s),
        ("eqt_polar", &mut at.eqt_polar),
    ];
    for (key, slot) in eqt_slots {
        if let Some(value) = attrs.get(key) {
            *slot = value.clone();
        }
    }
    Ok(FFTerm::AtomType(at))
}

fn decode_charge_increment(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "ChargeIncrementTerm";
    let type1 = require(CLASS, attrs, "type1")?;
    let type2 = require(CLASS, attrs, "type2")?;
    let value = require_f64(CLASS, attrs, "value")?;
    ChargeIncrementTerm::new(type1, type2, value)
        .map(FFTerm::ChargeIncrement)
        .map_err(|e| construction(CLASS, attrs, e))
}

fn decode_lj126(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "LJ126Term";
    Ok(FFTerm::LJ126(LJ126Term::new(
        require(CLASS, attrs, "type1")?,
        require(CLASS, attrs, "type2")?,
        require_f64(CLASS, attrs, "epsilon")?,
        require_f64(CLASS, attrs, "sigma")?,
    )))
}

fn decode_mie(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "MieTerm";
    Ok(FFTerm::Mie(MieTerm::new(
        require(CLASS, attrs, "type1")?,
        require(CLASS, attrs, "type2")?,
        require_f64(CLASS, attrs, "epsilon")?,
        require_f64(CLASS, attrs, "sigma")?,
        require_f64(CLASS, attrs, "repulsion")?,
        require_f64(CLASS, attrs, "attraction")?,
    )))
}

fn decode_harmonic_bond(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "HarmonicBondTerm";
    Ok(FFTerm::HarmonicBond(HarmonicBondTerm::new(
        require(CLASS, attrs, "type1")?,
        require(CLASS, attrs, "type2")?,
        require_f64(CLASS, attrs, "length")?,
        require_f64(CLASS, attrs, "k")?,
        require_bool(CLASS, attrs, "fixed")?,
    )))
}

fn decode_harmonic_angle(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "HarmonicAngleTerm";
    Ok(FFTerm::HarmonicAngle(HarmonicAngleTerm::new(
        require(CLASS, attrs, "type1")?,
        require(CLASS, attrs, "type2")?,
        require(CLASS, attrs, "type3")?,
        require_f64(CLASS, attrs, "theta")?,
        require_f64(CLASS, attrs, "k")?,
        require_bool(CLASS, attrs, "fixed")?,
    )))
}

fn decode_sdk_angle(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "SDKAngleTerm";
    Ok(FFTerm::SdkAngle(SdkAngleTerm::new(
        require(CLASS, attrs, "type1")?,
        require(CLASS, attrs, "type2")?,
        require(CLASS, attrs, "type3")?,
        require_f64(CLASS, attrs, "theta")?,
        require_f64(CLASS, attrs, "k")?,
    )))
}

fn decode_periodic_dihedral(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "PeriodicDihedralTerm";
    let mut term = PeriodicDihedralTerm::new(
        require(CLASS, attrs, "type1")?,
        require(CLASS, attrs, "type2")?,
        require(CLASS, attrs, "type3")?,
        require(CLASS, attrs, "type4")?,
    )
    .map_err(|e| construction(CLASS, attrs, e))?;

    // Extra step: one phi_<n>/k_<n> pair per multiplicity, restored through
    // the uniqueness-checked insertion path.
    for key in attrs.keys() {
        let Some(suffix) = key.strip_prefix("phi_") else {
            continue;
        };
        let n: u32 = suffix.parse().map_err(|_| CodecError::MalformedAttribute {
            class: CLASS,
            attr: key.clone(),
            value: attrs[key].clone(),
        })?;
        let phi = require_f64(CLASS, attrs, key)?;
        let k = require_f64(CLASS, attrs, &format!("k_{n}"))?;
        term.add_parameter(phi, k, n)
            .map_err(|e| construction(CLASS, attrs, e))?;
    }
    Ok(FFTerm::PeriodicDihedral(term))
}

fn decode_opls_improper(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "OplsImproperTerm";
    OplsImproperTerm::new(
        require(CLASS, attrs, "type1")?,
        require(CLASS, attrs, "type2")?,
        require(CLASS, attrs, "type3")?,
        require(CLASS, attrs, "type4")?,
        require_f64(CLASS, attrs, "k")?,
    )
    .map(FFTerm::OplsImproper)
    .map_err(|e| construction(CLASS, attrs, e))
}

fn decode_harmonic_improper(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "HarmonicImproperTerm";
    HarmonicImproperTerm::new(
        require(CLASS, attrs, "type1")?,
        require(CLASS, attrs, "type2")?,
        require(CLASS, attrs, "type3")?,
        require(CLASS, attrs, "type4")?,
        require_f64(CLASS, attrs, "phi")?,
        require_f64(CLASS, attrs, "k")?,
    )
    .map(FFTerm::HarmonicImproper)
    .map_err(|e| construction(CLASS, attrs, e))
}

fn decode_drude(attrs: &AttrMap) -> Result<FFTerm, CodecError> {
    const CLASS: &str = "DrudeTerm";
    let mut term = DrudeTerm::new(
        require(CLASS, attrs, "type")?,
        require_f64(CLASS, attrs, "alpha")?,
        require_f64(CLASS, attrs, "thole")?,
    );
    // Spring constant, particle mass, and hydrogen merging have defaults.
    if attrs.contains_key("k") {
        term.k = require_f64(CLASS, attrs, "k")?;
    }
    if attrs.contains_key("mass") {
        term.mass = require_f64(CLASS, attrs, "mass")?;
    }
    if attrs.contains_key("merge_alpha_h") {
        term.merge_alpha_h = require_f64(CLASS, attrs, "merge_alpha_h")?;
    }
    Ok(FFTerm::Drude(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(term: FFTerm) -> FFTerm {
        let registry = TermRegistry::new();
        let attrs = encode(&term);
        registry.create(term.class_name(), &attrs).unwrap()
    }

    #[test]
    fn atom_type_roundtrips() {
        let mut at = AtomType::new("c_4h2");
        at.mass = 12.011;
        at.charge = -0.12;
        at.eqt_bond = "c_4".to_string();
        let term = FFTerm::AtomType(at);
        assert_eq!(roundtrip(term.clone()), term);
    }

    #[test]
    fn charge_increment_roundtrips_with_canonical_sign() {
        let term =
            FFTerm::ChargeIncrement(ChargeIncrementTerm::new("h_1", "c_4", 0.06).unwrap());
        assert_eq!(roundtrip(term.clone()), term);
    }

    #[test]
    fn vdw_and_bonded_terms_roundtrip() {
        for term in [
            FFTerm::LJ126(LJ126Term::new("a", "b", 0.65, 0.34)),
            FFTerm::Mie(MieTerm::new("w", "ch2", 0.4, 0.43, 9.0, 6.0)),
            FFTerm::HarmonicBond(HarmonicBondTerm::new("a", "b", 0.109, 140000.0, true)),
            FFTerm::HarmonicAngle(HarmonicAngleTerm::new("a", "b", "c", 109.5, 300.0, false)),
            FFTerm::SdkAngle(SdkAngleTerm::new("w", "ch2", "ch3", 97.0, 60.0)),
            FFTerm::OplsImproper(OplsImproperTerm::new("c_3", "*", "a", "b", 2.5).unwrap()),
            FFTerm::HarmonicImproper(
                HarmonicImproperTerm::new("c_3", "a", "b", "c", 0.0, 50.0).unwrap(),
            ),
        ] {
            assert_eq!(roundtrip(term.clone()), term);
        }
    }

    #[test]
    fn drude_roundtrips_with_explicit_defaults() {
        let mut drude = DrudeTerm::new("c_4", 0.00178, 2.6);
        drude.merge_alpha_h = 0.0004;
        let term = FFTerm::Drude(drude);
        assert_eq!(roundtrip(term.clone()), term);
    }

    #[test]
    fn drude_defaults_apply_when_optional_attrs_are_absent() {
        let registry = TermRegistry::new();
        let mut attrs = AttrMap::new();
        attrs.insert("type".into(), "c_4".into());
        attrs.insert("alpha".into(), "0.00178".into());
        attrs.insert("thole".into(), "2.6".into());
        let term = registry.create("DrudeTerm", &attrs).unwrap();
        let FFTerm::Drude(drude) = term else {
            panic!("expected DrudeTerm");
        };
        assert_eq!(drude.k, 209_200.0);
        assert_eq!(drude.mass, 0.4);
    }

    #[test]
    fn periodic_dihedral_roundtrips_within_printed_precision() {
        let mut term = PeriodicDihedralTerm::new("h_1", "c_4", "c_4", "h_1").unwrap();
        term.add_parameter(0.0, 0.6485, 1).unwrap();
        term.add_parameter(180.0, 1.0678, 2).unwrap();
        term.add_parameter(0.0, 0.6226, 3).unwrap();

        let attrs = encode(&FFTerm::PeriodicDihedral(term.clone()));
        assert_eq!(attrs["phi_2"], "180.0");
        assert_eq!(attrs["k_2"], "1.0678");

        let registry = TermRegistry::new();
        let decoded = registry.create("PeriodicDihedralTerm", &attrs).unwrap();
        let FFTerm::PeriodicDihedral(decoded) = decoded else {
            panic!("expected PeriodicDihedralTerm");
        };
        assert_eq!(decoded.name(), term.name());
        assert_eq!(decoded.parameters().len(), 3);
        for (a, b) in decoded.parameters().iter().zip(term.parameters()) {
            assert_eq!(a.n, b.n);
            assert!((a.phi - b.phi).abs() < 0.05);
            assert!((a.k - b.k).abs() < 5e-5);
        }
    }

    #[test]
    fn unknown_class_is_rejected() {
        let registry = TermRegistry::new();
        let result = registry.create("MorseBondTerm", &AttrMap::new());
        assert!(matches!(result, Err(CodecError::UnknownClass(_))));
    }

    #[test]
    fn missing_attribute_is_reported_with_class_and_key() {
        let registry = TermRegistry::new();
        let mut attrs = AttrMap::new();
        attrs.insert("type1".into(), "a".into());
        attrs.insert("type2".into(), "b".into());
        let result = registry.create("LJ126Term", &attrs);
        match result {
            Err(CodecError::MissingAttribute { class, attr }) => {
                assert_eq!(class, "LJ126Term");
                assert_eq!(attr, "epsilon");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_float_is_rejected() {
        let registry = TermRegistry::new();
        let mut attrs = AttrMap::new();
        attrs.insert("type1".into(), "a".into());
        attrs.insert("type2".into(), "b".into());
        attrs.insert("epsilon".into(), "strong".into());
        attrs.insert("sigma".into(), "0.34".into());
        assert!(matches!(
            registry.create("LJ126Term", &attrs),
            Err(CodecError::MalformedAttribute { .. })
        ));
    }

    #[test]
    fn construction_failure_echoes_the_input_attributes() {
        let registry = TermRegistry::new();
        let mut attrs = AttrMap::new();
        attrs.insert("type1".into(), "x".into());
        attrs.insert("type2".into(), "x".into());
        attrs.insert("value".into(), "0.1".into());
        let err = registry
            .create("ChargeIncrementTerm", &attrs)
            .unwrap_err();
        assert!(matches!(err, CodecError::Construction { .. }));
        assert!(err.to_string().contains("0.1"));
        assert!(err.to_string().contains("ChargeIncrementTerm"));
    }

    #[test]
    fn non_integer_multiplicity_suffix_is_malformed() {
        let registry = TermRegistry::new();
        let mut attrs = AttrMap::new();
        attrs.insert("type1".into(), "a".into());
        attrs.insert("type2".into(), "b".into());
        attrs.insert("type3".into(), "c".into());
        attrs.insert("type4".into(), "d".into());
        attrs.insert("phi_1.5".into(), "0.0".into());
        attrs.insert("k_1.5".into(), "1.0".into());
        assert!(matches!(
            registry.create("PeriodicDihedralTerm", &attrs),
            Err(CodecError::MalformedAttribute { .. })
        ));
    }

    #[test]
    fn zero_multiplicity_fails_through_the_insertion_path() {
        let registry = TermRegistry::new();
        let mut attrs = AttrMap::new();
        attrs.insert("type1".into(), "a".into());
        attrs.insert("type2".into(), "b".into());
        attrs.insert("type3".into(), "c".into());
        attrs.insert("type4".into(), "d".into());
        attrs.insert("phi_0".into(), "0.0".into());
        attrs.insert("k_0".into(), "1.0".into());
        let err = registry
            .create("PeriodicDihedralTerm", &attrs)
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::Construction {
                source: TermError::InvalidMultiplicity { .. },
                ..
            }
        ));
    }

    #[test]
    fn dihedral_phi_without_matching_k_is_missing() {
        let registry = TermRegistry::new();
        let mut attrs = AttrMap::new();
        attrs.insert("type1".into(), "a".into());
        attrs.insert("type2".into(), "b".into());
        attrs.insert("type3".into(), "c".into());
        attrs.insert("type4".into(), "d".into());
        attrs.insert("phi_2".into(), "180.0".into());
        assert!(matches!(
            registry.create("PeriodicDihedralTerm", &attrs),
            Err(CodecError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn atom_type_with_mass_below_sentinel_is_rejected() {
        let registry = TermRegistry::new();
        let mut attrs = AttrMap::new();
        attrs.insert("name".into(), "c_4".into());
        attrs.insert("mass".into(), "-2.5".into());
        attrs.insert("charge".into(), "0".into());
        assert!(matches!(
            registry.create("AtomType", &attrs),
            Err(CodecError::Construction {
                source: TermError::InvalidMass { .. },
                ..
            })
        ));
    }

    #[test]
    fn bool_parser_is_permissive_but_not_sloppy() {
        for raw in ["1", "t", "TRUE", "y", "Yes", "on"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "f", "False", "n", "NO", "off"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        for raw in ["maybe", "", "2", "fixed"] {
            assert_eq!(parse_bool(raw), None, "{raw}");
        }
    }

    #[test]
    fn registry_lists_every_builtin_class() {
        let registry = TermRegistry::new();
        assert!(registry.contains("AtomType"));
        assert!(registry.contains("PeriodicDihedralTerm"));
        assert!(!registry.contains("FFTerm"));
        assert_eq!(registry.class_names().count(), 11);
    }
}
