use crate::formulas::wavelength_m;
use crate::prelude::{finite, require_number, require_positive, FormulaResult};

/// Unambiguous (blind-speed free) radial velocity `λ·PRF/4`, m/s.
pub fn unambiguous_velocity_ms(freq_ghz: f64, prf_hz: f64) -> FormulaResult {
    let wavelength = wavelength_m(freq_ghz)?;
    let prf_hz = require_positive("prf_hz", prf_hz)?;
    finite("unambiguous_velocity_ms", wavelength * prf_hz / 4.0)
}

/// Monostatic Doppler shift `2·v/λ`, Hz. Closing targets have positive speed.
pub fn doppler_frequency_hz(freq_ghz: f64, radial_speed_mps: f64) -> FormulaResult {
    let wavelength = wavelength_m(freq_ghz)?;
    let speed = require_number("radial_speed_mps", radial_speed_mps)?;
    finite("doppler_frequency_hz", 2.0 * speed / wavelength)
}
