//! Integration engine for Newton's law of cooling.
//!
//! [`solve`] turns one [`Parameters`] request into one [`Solution`]: it derives
//! the step size, evaluates the analytical reference at every sample time, and
//! marches each requested numerical method through its update rule.
//!
//! # Modules
//!
//! - [`methods`]: the per-step update rules (Euler, modified Euler, RK4)
//! - [`convergence`]: observed order of accuracy under step refinement
//!
//! [`Parameters`]: cooling_core::Parameters
//! [`Solution`]: cooling_core::Solution

mod engine;

pub mod convergence;
pub mod methods;

pub use engine::{Error, solve};
