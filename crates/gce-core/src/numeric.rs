use crate::GceError;

/// Floating point type used throughout the model.
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-12,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GceError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GceError::NonFinite { what, value: v })
    }
}

/// Mass fraction `part / whole` with IEEE semantics: a zero reservoir
/// yields NaN (or ±Inf), never an error.
#[inline]
pub fn mass_fraction(part: Real, whole: Real) -> Real {
    part / whole
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1.0e9_f64..1.0e9, b in -1.0e9_f64..1.0e9) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn nearly_equal_is_reflexive(a in -1.0e12_f64..1.0e12) {
            prop_assert!(nearly_equal(a, a, Tolerances::default()));
        }
    }
}
