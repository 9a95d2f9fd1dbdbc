//! Radar and electronic-warfare formula library with an antenna pattern
//! synthesizer.
//!
//! Formulas live under [`formulas`] as plain functions returning
//! [`FormulaResult`]; [`catalog`] exposes them by name for hosts that drive
//! evaluations from configuration. [`pattern`] produces normalized 3D gain
//! grids for the supported antenna archetypes.

pub mod catalog;
pub mod formulas;
pub mod math;
pub mod pattern;
pub mod prelude;
pub mod telemetry;

pub use catalog::{Evaluation, FormulaRequest};
pub use prelude::{DomainError, FormulaResult};
