//! tm-core: shared foundation for thermomodel.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{TmError, TmResult};
pub use numeric::*;
