use proptest::prelude::*;
use tm_controls::{ConstantSignal, SinusoidalSignal, generate_control_signal};
use tm_core::{Tolerances, nearly_equal};
use tm_sim::*;

fn lab2_coefficients() -> ModelCoefficients {
    ModelCoefficients::split(
        ModelParameters::linear(0.8, 0.1),
        ModelParameters::new(0.8, 0.12, 0.05, 0.02),
    )
}

#[test]
fn lab2_single_step_linear() {
    let out = run_simulation(
        1,
        &lab2_coefficients(),
        &InitialCondition::new(20.0).with_u0(5.0),
        &ConstantSignal { value: 5.0 },
        ControlMode::IndependentConstant,
    );
    assert_eq!(out.linear.as_slice(), &[20.0, 16.5]);
}

#[test]
fn lab2_single_step_nonlinear() {
    let out = run_simulation(
        1,
        &lab2_coefficients(),
        &InitialCondition::new(20.0).with_u0(5.0),
        &ConstantSignal { value: 5.0 },
        ControlMode::IndependentConstant,
    );
    let expected = 0.8 * 20.0 - 0.12 * 400.0 + 0.05 * 5.0 + 0.02 * 5.0_f64.sin();
    assert_eq!(out.nonlinear.len(), 2);
    assert!(nearly_equal(
        out.nonlinear[1],
        expected,
        Tolerances::default()
    ));
}

#[test]
fn lab2_multiple_linear_steps() {
    let params = ModelParameters::linear(0.5, 0.2);
    let (y, _) = simulate_linear(3, &params, 10.0, &ConstantSignal { value: 2.0 });
    assert_eq!(y.len(), 4);
    assert_eq!(y[0], 10.0);
    for t in 1..=3 {
        assert_eq!(y[t], step_linear(y[t - 1], 2.0, &params));
    }
}

#[test]
fn lab1_defaults_stay_bounded() {
    let out = run_simulation(
        100,
        &ModelParameters::new(0.98, 0.05, 0.03, 0.02).into(),
        &InitialCondition::new(20.0).with_ambient(25.0),
        &SinusoidalSignal::default(),
        ControlMode::Coupled,
    );
    assert_eq!(out.linear.len(), 101);
    assert!(out.linear.iter().all(|y| y.is_finite()));
    assert_eq!(out.control_trace[0], generate_control_signal(0));
}

proptest! {
    #[test]
    fn linear_trajectory_follows_stepper(
        n in 1usize..200,
        a in -1.2_f64..1.2,
        b in -1.0_f64..1.0,
        y0 in -100.0_f64..100.0,
    ) {
        let params = ModelParameters::linear(a, b);
        let out = run_simulation(
            n,
            &params.into(),
            &InitialCondition::new(y0),
            &generate_control_signal,
            ControlMode::Coupled,
        );

        prop_assert_eq!(out.linear.len(), n + 1);
        prop_assert_eq!(out.linear[0], y0);
        for t in 1..=n {
            prop_assert_eq!(
                out.linear[t],
                step_linear(out.linear[t - 1], out.control_trace[t - 1], &params)
            );
        }
    }

    #[test]
    fn constant_mode_nonlinear_follows_stepper(
        n in 1usize..60,
        u0 in -20.0_f64..20.0,
        y0 in -5.0_f64..5.0,
    ) {
        let params = ModelParameters::new(0.5, 0.01, 0.05, 0.02);
        let out = run_simulation(
            n,
            &params.into(),
            &InitialCondition::new(y0).with_u0(u0),
            &generate_control_signal,
            ControlMode::IndependentConstant,
        );

        let y = out.nonlinear.as_slice();
        prop_assert_eq!(y.len(), n + 1);
        for t in 1..=n {
            let y_prev = if t == 1 { y0 } else { y[t - 2] };
            prop_assert_eq!(y[t], step_nonlinear(y[t - 1], y_prev, u0, u0, &params));
        }
    }
}
