use crate::TmError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TmError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TmError::NonFinite { what, value: v })
    }
}

/// Check that an integer count lies in `min..=max`.
pub fn ensure_in_range(v: i64, min: i64, max: i64, what: &'static str) -> Result<i64, TmError> {
    if (min..=max).contains(&v) {
        Ok(v)
    } else {
        Err(TmError::OutOfRange {
            what,
            value: v,
            min,
            max,
        })
    }
}
