use crate::formulas::C0;
use crate::prelude::{finite, require_non_negative, require_positive, FormulaResult};

/// Transmit duty factor `τ/PRI` (unitless).
pub fn duty_cycle(pri_us: f64, pulse_width_us: f64) -> FormulaResult {
    let pri = require_positive("pri_us", pri_us)?;
    let tau = require_non_negative("pulse_width_us", pulse_width_us)?;
    finite("duty_cycle", tau / pri)
}

/// Minimum range hidden by the pulse plus switching dead and recovery time, m.
pub fn blind_range_m(
    pulse_width_us: f64,
    dead_time_us: f64,
    recovery_time_us: f64,
) -> FormulaResult {
    let tau = require_non_negative("pulse_width_us", pulse_width_us)?;
    let dead = require_non_negative("dead_time_us", dead_time_us)?;
    let recovery = require_non_negative("recovery_time_us", recovery_time_us)?;
    finite("blind_range_m", C0 * ((tau + dead + recovery) * 1e-6) / 2.0)
}

/// Maximum unambiguous range, km. The listening window is `PRI − τ`,
/// floored at zero.
pub fn unambiguous_range_km(pri_us: f64, pulse_width_us: f64) -> FormulaResult {
    let pri = require_positive("pri_us", pri_us)?;
    let tau = require_non_negative("pulse_width_us", pulse_width_us)?;
    let window_s = (pri * 1e-6 - tau * 1e-6).max(0.0);
    finite("unambiguous_range_km", C0 * window_s / 2.0 / 1000.0)
}

pub fn prf_hz(pri_us: f64) -> FormulaResult {
    let pri = require_positive("pri_us", pri_us)?;
    finite("prf_hz", 1.0 / (pri * 1e-6))
}

/// Time a scanning beam dwells on a point target, ms.
pub fn dwell_time_ms(beamwidth_deg: f64, rpm: f64) -> FormulaResult {
    let beamwidth = require_positive("beamwidth_deg", beamwidth_deg)?;
    let rpm = require_positive("rpm", rpm)?;
    finite("dwell_time_ms", (60.0 / rpm) * (beamwidth / 360.0) * 1000.0)
}

/// Pulses landing on a target per antenna revolution.
pub fn hits_per_scan(beamwidth_deg: f64, prf_hz: f64, rpm: f64) -> FormulaResult {
    let beamwidth = require_positive("beamwidth_deg", beamwidth_deg)?;
    let prf = require_positive("prf_hz", prf_hz)?;
    let rpm = require_positive("rpm", rpm)?;
    finite("hits_per_scan", beamwidth * prf / (6.0 * rpm))
}

/// Pulse compression ratio `BW·τ`.
pub fn pulse_compression_ratio(bandwidth_mhz: f64, pulse_width_us: f64) -> FormulaResult {
    let bandwidth = require_positive("bandwidth_mhz", bandwidth_mhz)?;
    let tau = require_positive("pulse_width_us", pulse_width_us)?;
    finite("pulse_compression_ratio", bandwidth * 1e6 * tau * 1e-6)
}

/// Linear FM sweep rate, Hz/s.
pub fn chirp_slope_hz_per_s(bandwidth_mhz: f64, chirp_time_us: f64) -> FormulaResult {
    let bandwidth = require_positive("bandwidth_mhz", bandwidth_mhz)?;
    let duration = require_positive("chirp_time_us", chirp_time_us)?;
    finite("chirp_slope_hz_per_s", bandwidth * 1e6 / (duration * 1e-6))
}

/// Target range from an FMCW beat frequency, m.
pub fn fmcw_beat_range_m(beat_hz: f64, slope_hz_per_s: f64) -> FormulaResult {
    let beat = require_non_negative("beat_hz", beat_hz)?;
    let slope = require_positive("slope_hz_per_s", slope_hz_per_s)?;
    finite("fmcw_beat_range_m", C0 * beat / (2.0 * slope))
}
