use super::{TermError, TermMeta, sorted_pair};

/// Charge transferred between two bonded atom types.
///
/// `value` is the net charge moved from `type2` to `type1`. The pair is stored
/// sorted, and when the caller's order is reversed by the sort the value is
/// negated so the transfer direction is preserved:
///
/// ```
/// use ffkit::forcefield::terms::ChargeIncrementTerm;
///
/// let term = ChargeIncrementTerm::new("h_1", "c_4", 0.06).unwrap();
/// assert_eq!((term.type1(), term.type2(), term.value), ("c_4", "h_1", -0.06));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeIncrementTerm {
    type1: String,
    type2: String,
    /// Net charge transferred from `type2` to `type1`.
    pub value: f64,
    pub meta: TermMeta,
}

impl ChargeIncrementTerm {
    /// A self increment must be zero; anything else is a
    /// [`TermError::ChargeIncrementNonZero`].
    pub fn new(type1: &str, type2: &str, value: f64) -> Result<Self, TermError> {
        if type1 == type2 && value != 0.0 {
            return Err(TermError::ChargeIncrementNonZero {
                type_name: type1.to_string(),
                value,
            });
        }
        let (at1, at2) = sorted_pair(type1, type2);
        let value = if at1 == type1 { value } else { -value };
        Ok(Self {
            type1: at1,
            type2: at2,
            value,
            meta: TermMeta::default(),
        })
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_types_and_negates_value_when_order_reversed() {
        let term = ChargeIncrementTerm::new("h_1", "c_4", 0.06).unwrap();
        assert_eq!(term.type1(), "c_4");
        assert_eq!(term.type2(), "h_1");
        assert_eq!(term.value, -0.06);
    }

    #[test]
    fn new_keeps_value_when_order_already_canonical() {
        let term = ChargeIncrementTerm::new("c_4", "h_1", -0.06).unwrap();
        assert_eq!(term.type1(), "c_4");
        assert_eq!(term.type2(), "h_1");
        assert_eq!(term.value, -0.06);
    }

    #[test]
    fn both_constructions_share_the_canonical_name() {
        let a = ChargeIncrementTerm::new("h_1", "c_4", 0.06).unwrap();
        let b = ChargeIncrementTerm::new("c_4", "h_1", -0.06).unwrap();
        assert_eq!(a.name(), "c_4,h_1");
        assert_eq!(a, b);
    }

    #[test]
    fn new_rejects_non_zero_self_increment() {
        let result = ChargeIncrementTerm::new("x", "x", 0.1);
        assert!(matches!(
            result,
            Err(TermError::ChargeIncrementNonZero { .. })
        ));
    }

    #[test]
    fn new_accepts_zero_self_increment() {
        let term = ChargeIncrementTerm::new("x", "x", 0.0).unwrap();
        assert_eq!(term.value, 0.0);
        assert_eq!(term.name(), "x,x");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let once = ChargeIncrementTerm::new("h_1", "c_4", 0.06).unwrap();
        let twice = ChargeIncrementTerm::new(once.type1(), once.type2(), once.value).unwrap();
        assert_eq!(once, twice);
    }
}
