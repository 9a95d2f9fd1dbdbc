use crate::math::DecibelHelper;
use crate::prelude::{finite, require_non_negative, require_number, require_positive, FormulaResult};

/// Thermal noise density at 290 K, dBm/Hz.
pub const THERMAL_NOISE_DBM_PER_HZ: f64 = -174.0;

/// Reference temperature for noise figure, K.
pub const REFERENCE_TEMPERATURE_K: f64 = 290.0;

/// Receiver noise floor `−174 + 10·log10(B) + NF`, dBm.
pub fn noise_floor_dbm(bandwidth_hz: f64, noise_figure_db: f64) -> FormulaResult {
    let bandwidth_hz = require_positive("bandwidth_hz", bandwidth_hz)?;
    let noise_figure_db = require_number("noise_figure_db", noise_figure_db)?;
    let floor = THERMAL_NOISE_DBM_PER_HZ + DecibelHelper::power_db(bandwidth_hz) + noise_figure_db;
    finite("noise_floor_dbm", floor)
}

/// Minimum discernible signal with bandwidth in MHz, dBm.
pub fn mds_dbm(bandwidth_mhz: f64, noise_figure_db: f64) -> FormulaResult {
    let bandwidth_mhz = require_positive("bandwidth_mhz", bandwidth_mhz)?;
    let noise_figure_db = require_number("noise_figure_db", noise_figure_db)?;
    finite("mds_dbm", -114.0 + DecibelHelper::power_db(bandwidth_mhz) + noise_figure_db)
}

/// Effective noise temperature for a noise figure, K.
pub fn noise_temperature_k(noise_figure_db: f64) -> FormulaResult {
    let nf = require_non_negative("noise_figure_db", noise_figure_db)?;
    finite(
        "noise_temperature_k",
        REFERENCE_TEMPERATURE_K * (DecibelHelper::power_linear(nf) - 1.0),
    )
}

pub fn enob_from_sinad(sinad_db: f64) -> FormulaResult {
    let sinad_db = require_number("sinad_db", sinad_db)?;
    finite("enob_from_sinad", (sinad_db - 1.76) / 6.02)
}

pub fn sinad_from_enob(enob_bits: f64) -> FormulaResult {
    let enob_bits = require_number("enob_bits", enob_bits)?;
    finite("sinad_from_enob", enob_bits * 6.02 + 1.76)
}
