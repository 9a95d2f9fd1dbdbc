use std::f64::consts::PI;

use crate::math::DecibelHelper;
use crate::prelude::{finite, require_number, require_positive, FormulaResult};

/// Average RCS of a single resonant chaff dipole is `0.155·λ²`.
const CHAFF_DIPOLE_FACTOR: f64 = 0.155;

/// Rayleigh-region sphere RCS `π⁵·d⁶/λ⁴`, m².
///
/// Only meaningful while the diameter is small against the wavelength; that
/// regime is not checked here.
pub fn rayleigh_sphere_rcs_m2(diameter_m: f64, wavelength_m: f64) -> FormulaResult {
    let d = require_positive("diameter_m", diameter_m)?;
    let wavelength = require_positive("wavelength_m", wavelength_m)?;
    finite("rayleigh_sphere_rcs_m2", PI.powi(5) * d.powi(6) / wavelength.powi(4))
}

/// Optical-region sphere RCS, equal to its projected area, m².
pub fn optical_sphere_rcs_m2(diameter_m: f64) -> FormulaResult {
    let d = require_positive("diameter_m", diameter_m)?;
    finite("optical_sphere_rcs_m2", PI * d.powi(2) / 4.0)
}

pub fn chaff_dipole_rcs_m2(wavelength_m: f64) -> FormulaResult {
    let wavelength = require_positive("wavelength_m", wavelength_m)?;
    finite("chaff_dipole_rcs_m2", CHAFF_DIPOLE_FACTOR * wavelength.powi(2))
}

/// Sparse chaff cloud: dipole returns add in power.
pub fn chaff_cloud_rcs_m2(wavelength_m: f64, dipole_count: u64) -> FormulaResult {
    let count = require_positive("dipole_count", dipole_count as f64)?;
    finite("chaff_cloud_rcs_m2", count * chaff_dipole_rcs_m2(wavelength_m)?)
}

/// RCS an active repeater decoy simulates, dBsm.
pub fn active_decoy_rcs_dbsm(amplifier_gain_db: f64, freq_mhz: f64) -> FormulaResult {
    let gain = require_number("amplifier_gain_db", amplifier_gain_db)?;
    let freq_mhz = require_positive("freq_mhz", freq_mhz)?;
    finite("active_decoy_rcs_dbsm", 39.0 + gain - DecibelHelper::field_db(freq_mhz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn small_sphere_in_rayleigh_region() {
        assert_relative_eq!(
            rayleigh_sphere_rcs_m2(0.01, 0.03).unwrap(),
            0.00037780207998182905,
            max_relative = 1e-9
        );
        assert!(rayleigh_sphere_rcs_m2(0.0, 0.03).is_err());
    }

    #[test]
    fn rayleigh_rcs_scales_with_inverse_fourth_power_of_wavelength() {
        let x = rayleigh_sphere_rcs_m2(0.01, 0.03).unwrap();
        let half = rayleigh_sphere_rcs_m2(0.01, 0.06).unwrap();
        assert_relative_eq!(x / half, 16.0, max_relative = 1e-9);
    }

    #[test]
    fn optical_and_chaff() {
        assert_relative_eq!(optical_sphere_rcs_m2(2.0).unwrap(), PI, max_relative = 1e-12);
        assert_relative_eq!(chaff_dipole_rcs_m2(0.1).unwrap(), 0.00155, max_relative = 1e-12);
        assert_relative_eq!(chaff_cloud_rcs_m2(0.1, 1000).unwrap(), 1.55, max_relative = 1e-12);
        assert!(chaff_cloud_rcs_m2(0.1, 0).is_err());
        assert!(optical_sphere_rcs_m2(0.0).is_err());
        assert!(optical_sphere_rcs_m2(-2.0).is_err());
        assert!(chaff_dipole_rcs_m2(0.0).is_err());
        assert!(chaff_dipole_rcs_m2(f64::NAN).is_err());
    }

    #[test]
    fn decoy_at_one_gigahertz() {
        assert_relative_eq!(
            active_decoy_rcs_dbsm(60.0, 1000.0).unwrap(),
            39.0,
            max_relative = 1e-12
        );
        assert!(active_decoy_rcs_dbsm(60.0, 0.0).is_err());
        assert!(active_decoy_rcs_dbsm(f64::NAN, 1000.0).is_err());
    }
}
