//! Closed-form radar, EW, propagation and receiver formulas.
//!
//! Each function takes named scalar inputs in the units spelled out by its
//! parameter names and returns a [`FormulaResult`](crate::prelude::FormulaResult).
//! Functions share no state; composite formulas call the simpler ones directly.

pub mod antenna;
pub mod doppler;
pub mod jamming;
pub mod noise;
pub mod propagation;
pub mod pulse;
pub mod radar;
pub mod rcs;
pub mod resolution;

use crate::prelude::{finite, require_positive, FormulaResult};

/// Propagation speed used throughout, m/s.
pub const C0: f64 = 3e8;

/// `c` expressed in GHz·m, so that `λ = 0.3 / f_GHz`.
pub const C_GHZ_M: f64 = 0.3;

/// Free-space wavelength in metres for a carrier in GHz.
pub fn wavelength_m(freq_ghz: f64) -> FormulaResult {
    let freq_ghz = require_positive("freq_ghz", freq_ghz)?;
    finite("wavelength_m", C_GHZ_M / freq_ghz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ten_gigahertz_is_three_centimetres() {
        assert_abs_diff_eq!(wavelength_m(10.0).unwrap(), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn wavelength_rejects_zero_frequency() {
        assert!(wavelength_m(0.0).is_err());
        assert!(wavelength_m(-2.0).is_err());
    }
}
