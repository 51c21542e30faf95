use super::{TermError, TermMeta, WILDCARD};
use crate::forcefield::potentials;

/// One cosine harmonic of a periodic dihedral: phase `phi` (degrees), force
/// constant `k`, multiplicity `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DihedralParameter {
    pub phi: f64,
    pub k: f64,
    pub n: u32,
}

/// Dihedral term in periodic cosine form:
/// `U = sum_n k_n * (1 + cos(n*phi - phi0_n))`.
///
/// The term is built over the four-atom sequence `i-j-k-l` and then filled by
/// [`add_parameter`](Self::add_parameter), one entry per multiplicity:
///
/// ```
/// use ffkit::forcefield::terms::PeriodicDihedralTerm;
///
/// let mut term = PeriodicDihedralTerm::new("h_1", "c_4", "c_4", "h_1").unwrap();
/// term.add_parameter(0.0, 0.6485, 1).unwrap();
/// term.add_parameter(180.0, 1.0678, 2).unwrap();
/// term.add_parameter(0.0, 0.6226, 3).unwrap();
/// assert!(term.is_opls_convention());
/// assert_eq!(term.get_opls_parameters().unwrap(), (0.6485, 1.0678, 0.6226, 0.0));
/// ```
///
/// A wildcard is allowed for the two end atoms only. Wildcard terms have lower
/// priority during parameter matching and are placed last by the explicit
/// canonicalization rule below, never by string comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicDihedralTerm {
    type1: String,
    type2: String,
    type3: String,
    type4: String,
    parameters: Vec<DihedralParameter>,
    pub meta: TermMeta,
}

impl PeriodicDihedralTerm {
    /// Canonicalizes the atom sequence. With no or two wildcard ends the
    /// lexicographically smaller of `i-j-k-l` and `l-k-j-i` wins; with exactly
    /// one wildcard end the sequence is oriented so the wildcard lands on
    /// `type4`. A wildcard on either center atom is rejected.
    pub fn new(type1: &str, type2: &str, type3: &str, type4: &str) -> Result<Self, TermError> {
        if type2 == WILDCARD || type3 == WILDCARD {
            return Err(TermError::WildcardCenter {
                class: "PeriodicDihedralTerm",
                type1: type1.to_string(),
                type2: type2.to_string(),
                type3: type3.to_string(),
                type4: type4.to_string(),
            });
        }
        let forward = (type1, type2, type3, type4);
        let reverse = (type4, type3, type2, type1);
        let wildcard_ends = (type1 == WILDCARD) as usize + (type4 == WILDCARD) as usize;
        let (at1, at2, at3, at4) = match wildcard_ends {
            0 | 2 => forward.min(reverse),
            _ if type1 == WILDCARD => reverse,
            _ => forward,
        };
        Ok(Self {
            type1: at1.to_string(),
            type2: at2.to_string(),
            type3: at3.to_string(),
            type4: at4.to_string(),
            parameters: Vec::new(),
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

    /// Adds the parameter for one multiplicity, keeping the list sorted by
    /// `n`. Multiplicity zero and duplicate multiplicities are rejected.
    pub fn add_parameter(&mut self, phi: f64, k: f64, n: u32) -> Result<(), TermError> {
        if n < 1 {
            return Err(TermError::InvalidMultiplicity { name: self.name() });
        }
        if self.parameters.iter().any(|p| p.n == n) {
            return Err(TermError::DuplicateMultiplicity {
                name: self.name(),
                n,
            });
        }
        self.parameters.push(DihedralParameter { phi, k, n });
        self.parameters.sort_by_key(|p| p.n);
        Ok(())
    }

    /// Parameters ordered by multiplicity.
    pub fn parameters(&self) -> &[DihedralParameter] {
        &self.parameters
    }

    /// Whether this term always yields zero energy. Linear groups like alkyne
    /// and nitrile carry dihedrals in the topology whose parameters are all
    /// zero.
    pub fn is_zero(&self) -> bool {
        self.parameters.iter().all(|p| p.k == 0.0)
    }

    /// Whether the phases follow the fixed OPLS pattern: `phi = 0` for
    /// `n = 1, 3`, `phi = 180` for `n = 2, 4`, and `k = 0` for any `n > 4`.
    pub fn is_opls_convention(&self) -> bool {
        self.parameters.iter().all(|p| match p.n {
            1 | 3 => p.phi == 0.0,
            2 | 4 => p.phi == 180.0,
            _ => p.k == 0.0,
        })
    }

    /// The four force constants `(k1, k2, k3, k4)` under the OPLS convention.
    ///
    /// Fails with [`TermError::NotOplsConvention`] if any phase deviates from
    /// the pattern or a multiplicity above four carries a non-zero constant.
    pub fn get_opls_parameters(&self) -> Result<(f64, f64, f64, f64), TermError> {
        let violation = |reason: String| TermError::NotOplsConvention {
            name: self.name(),
            reason,
        };
        let mut k = [0.0; 4];
        for p in &self.parameters {
            match p.n {
                1 | 3 if p.phi != 0.0 => {
                    return Err(violation(format!("phi_{} != 0", p.n)));
                }
                2 | 4 if p.phi != 180.0 => {
                    return Err(violation(format!("phi_{} != 180", p.n)));
                }
                1..=4 => k[(p.n - 1) as usize] = p.k,
                _ if p.k != 0.0 => {
                    return Err(violation(format!("k_{} != 0 for n > 4", p.n)));
                }
                _ => {}
            }
        }
        Ok((k[0], k[1], k[2], k[3]))
    }

    /// `phi` in radians; the stored phases are converted from degrees.
    pub fn evaluate_energy(&self, phi: f64) -> f64 {
        self.parameters
            .iter()
            .map(|p| potentials::periodic_cosine(phi, p.phi, p.k, p.n))
            .sum()
    }
}
