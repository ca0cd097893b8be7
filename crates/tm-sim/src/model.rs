//! One-step recurrences for the two plant models.

use crate::params::ModelParameters;

/// Linear model: `a·y + b·u`.
///
/// Total over finite inputs; overflow to infinity is left to float semantics.
#[inline]
pub fn step_linear(y: f64, u: f64, params: &ModelParameters) -> f64 {
    params.a * y + params.b * u
}

/// Nonlinear model: `a·y_cur − b·y_prev² + c·u_cur + d·sin(u_prev)`.
///
/// Second order in `y` (current and previous state), first-order lagged in `u`.
#[inline]
pub fn step_nonlinear(
    y_cur: f64,
    y_prev: f64,
    u_cur: f64,
    u_prev: f64,
    params: &ModelParameters,
) -> f64 {
    params.a * y_cur - params.b * y_prev * y_prev + params.c * u_cur + params.d * u_prev.sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn linear_basic() {
        let p = ModelParameters::linear(0.8, 0.1);
        assert_eq!(step_linear(20.0, 5.0, &p), 0.8 * 20.0 + 0.1 * 5.0);
    }

    #[test]
    fn linear_negative_values() {
        let p = ModelParameters::linear(-0.5, -0.2);
        assert_eq!(step_linear(-10.0, -3.0, &p), -0.5 * -10.0 + -0.2 * -3.0);
    }

    #[test]
    fn nonlinear_basic() {
        let p = ModelParameters::new(0.8, 0.12, 0.05, 0.02);
        let expected = 0.8 * 20.0 - 0.12 * 20.0 * 20.0 + 0.05 * 5.0 + 0.02 * 4.0_f64.sin();
        assert_eq!(step_nonlinear(20.0, 20.0, 5.0, 4.0, &p), expected);
    }

    #[test]
    fn nonlinear_all_zero_is_zero() {
        let p = ModelParameters::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(step_nonlinear(0.0, 0.0, 0.0, 0.0, &p), 0.0);
        assert_eq!(step_nonlinear(3.0, -7.0, 11.0, 1.3, &p), 0.0);
    }

    #[test]
    fn nonlinear_uses_previous_state_for_quadratic_term() {
        let p = ModelParameters::new(0.0, 1.0, 0.0, 0.0);
        assert_eq!(step_nonlinear(100.0, 3.0, 0.0, 0.0, &p), -9.0);
    }

    #[test]
    fn unstable_gain_overflows_without_panicking() {
        let p = ModelParameters::linear(f64::MAX, 0.0);
        assert!(step_linear(10.0, 0.0, &p).is_infinite());
    }

    proptest! {
        #[test]
        fn linear_matches_closed_form(
            y in -1.0e3_f64..1.0e3, u in -1.0e3_f64..1.0e3,
            a in -2.0_f64..2.0, b in -2.0_f64..2.0,
        ) {
            let p = ModelParameters::linear(a, b);
            prop_assert_eq!(step_linear(y, u, &p), a * y + b * u);
        }

        #[test]
        fn nonlinear_matches_closed_form(
            y_cur in -1.0e3_f64..1.0e3, y_prev in -1.0e3_f64..1.0e3,
            u_cur in -50.0_f64..50.0, u_prev in -50.0_f64..50.0,
            a in -2.0_f64..2.0, b in -1.0_f64..1.0, c in -1.0_f64..1.0, d in -1.0_f64..1.0,
        ) {
            let p = ModelParameters::new(a, b, c, d);
            let expected = a * y_cur - b * y_prev * y_prev + c * u_cur + d * u_prev.sin();
            prop_assert_eq!(step_nonlinear(y_cur, y_prev, u_cur, u_prev, &p), expected);
        }
    }
}
