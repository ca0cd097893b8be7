//! Discrete-time recurrence engine for thermomodel.
//!
//! Provides:
//! - Linear first-order stepper `y[k+1] = a·y[k] + b·u[k]`
//! - Nonlinear stepper with quadratic feedback and sinusoidal disturbance
//! - Trajectory runs under two control-sourcing modes
//! - Parallel parameter sweeps over independent runs
//!
//! Everything here is a pure computation over explicit inputs. No I/O.

pub mod error;
pub mod model;
pub mod params;
pub mod sim;
pub mod sweep;

pub use error::{SimError, SimResult};
pub use model::{step_linear, step_nonlinear};
pub use params::{ControlMode, InitialCondition, ModelCoefficients, ModelParameters};
pub use sim::{
    SimulationOutput, Trajectory, run_simulation, simulate_linear, simulate_nonlinear_constant,
    simulate_nonlinear_coupled,
};
pub use sweep::{SweepDefinition, SweepParameter, SweepPoint, run_sweep};
