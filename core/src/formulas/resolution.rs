use crate::formulas::C0;
use crate::prelude::{finite, require_non_negative, require_positive, FormulaResult};

/// Range resolution of an unmodulated pulse, m.
pub fn range_resolution_m(pulse_width_us: f64) -> FormulaResult {
    let tau = require_positive("pulse_width_us", pulse_width_us)?;
    finite("range_resolution_m", C0 * (tau * 1e-6) / 2.0)
}

/// Range resolution of a chirp or FMCW waveform of swept bandwidth, m.
pub fn bandwidth_resolution_m(bandwidth_mhz: f64) -> FormulaResult {
    let bandwidth = require_positive("bandwidth_mhz", bandwidth_mhz)?;
    finite("bandwidth_resolution_m", C0 / (2.0 * bandwidth * 1e6))
}

/// Cross-range extent resolved by a beam at range, m.
pub fn angular_resolution_m(range_km: f64, beamwidth_deg: f64) -> FormulaResult {
    let range_km = require_non_negative("range_km", range_km)?;
    let beamwidth = require_positive("beamwidth_deg", beamwidth_deg)?;
    finite("angular_resolution_m", range_km * 1000.0 * beamwidth.to_radians())
}

/// Pulse (resolution cell) volume `R²·θaz·θel·c0·τ/8`, m³.
pub fn resolution_cell_volume_m3(
    range_km: f64,
    beamwidth_az_deg: f64,
    beamwidth_el_deg: f64,
    pulse_width_us: f64,
) -> FormulaResult {
    let range_km = require_non_negative("range_km", range_km)?;
    let az = require_positive("beamwidth_az_deg", beamwidth_az_deg)?;
    let el = require_positive("beamwidth_el_deg", beamwidth_el_deg)?;
    let tau = require_non_negative("pulse_width_us", pulse_width_us)?;
    let r_m = range_km * 1000.0;
    let volume = r_m.powi(2) * az.to_radians() * el.to_radians() * C0 * (tau * 1e-6) / 8.0;
    finite("resolution_cell_volume_m3", volume)
}
