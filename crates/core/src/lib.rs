//! Core types for comparing numerical solutions of Newton's law of cooling.
//!
//! This crate defines the shared vocabulary that the engine and dispatcher
//! build on:
//!
//! - [`Parameters`]: one computation request
//! - [`MethodKind`]: the fixed set of approximation methods
//! - [`CoolingLaw`]: the cooling equation and its closed-form solution
//! - [`Solution`] and [`ApproximationSeries`]: the index-aligned output
//! - [`StepIntegrable`]: stepping a state by `derivative * delta`
//!
//! # Features
//!
//! - `serde-derive` (default): derives `Serialize` and `Deserialize` for the
//!   request and output types.

mod error;
mod law;
mod method;
mod parameters;
mod solution;
mod step;

pub use error::{AlignmentError, ParameterError};
pub use law::CoolingLaw;
pub use method::MethodKind;
pub use parameters::Parameters;
pub use solution::{ApproximationSeries, Sample, Solution};
pub use step::StepIntegrable;
