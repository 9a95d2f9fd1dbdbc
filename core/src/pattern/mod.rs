//! Approximate 3D radiation patterns for common antenna archetypes.
//!
//! Patterns are closed-form angular shaping functions (Gaussian mainlobes,
//! sinusoidal dipole lobes, array beamwidth heuristics) sampled on a fixed
//! θ/φ grid and normalized to a unit peak. No EM simulation is involved.

pub mod archetype;
pub mod shaping;
pub mod synthesizer;

pub use archetype::{AntennaArchetype, UnknownArchetype};
pub use synthesizer::{
    AngularGrid, CartesianSurface, PatternGrid, PatternParams, PatternSynthesizer,
};
