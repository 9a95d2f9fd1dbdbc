use crate::formulas::wavelength_m;
use crate::math::DecibelHelper;
use crate::prelude::{
    finite, require_non_negative, require_number, require_open_range, require_positive,
    FormulaResult,
};

/// Effective Earth radius for standard (4/3) refraction, km.
pub const DEFAULT_EQUIVALENT_EARTH_RADIUS_KM: f64 = 8500.0;

/// Horizon coefficient for heights in metres and ranges in km.
const HORIZON_KM_PER_SQRT_M: f64 = 4.12;

/// Free-space path loss in dB. The 32.45 constant expects km and MHz.
pub fn fspl_db(distance_km: f64, freq_ghz: f64) -> FormulaResult {
    let distance_km = require_positive("distance_km", distance_km)?;
    let freq_ghz = require_positive("freq_ghz", freq_ghz)?;
    let loss =
        32.45 + DecibelHelper::field_db(distance_km) + DecibelHelper::field_db(freq_ghz * 1000.0);
    finite("fspl_db", loss)
}

/// Radius of the `zone`-th Fresnel zone at the midpoint of a path, m.
pub fn fresnel_radius_m(distance_km: f64, freq_ghz: f64, zone: u32) -> FormulaResult {
    let distance_km = require_positive("distance_km", distance_km)?;
    let wavelength = wavelength_m(freq_ghz)?;
    let zone = require_positive("zone", f64::from(zone))?;
    let d_m = distance_km * 1000.0;
    finite("fresnel_radius_m", (zone * wavelength * d_m / 2.0).sqrt())
}

/// Midpoint Earth bulge for a path of `distance_km`, m.
pub fn earth_bulge_m(distance_km: f64) -> FormulaResult {
    let distance_km = require_non_negative("distance_km", distance_km)?;
    finite("earth_bulge_m", distance_km.powi(2) / 12.75)
}

/// Line-of-sight radar horizon, km.
///
/// A target height is only added when present and non-negative; a negative
/// target height is treated as absent rather than as an error.
pub fn radar_horizon_km(antenna_height_m: f64, target_height_m: Option<f64>) -> FormulaResult {
    let antenna_height_m = require_non_negative("antenna_height_m", antenna_height_m)?;
    let target_height_m = target_height_m
        .map(|h| require_number("target_height_m", h))
        .transpose()?;
    let mut horizon = HORIZON_KM_PER_SQRT_M * antenna_height_m.sqrt();
    if let Some(target) = target_height_m.filter(|h| *h >= 0.0) {
        horizon += HORIZON_KM_PER_SQRT_M * target.sqrt();
    }
    finite("radar_horizon_km", horizon)
}

/// Target height from slant range and elevation using an equivalent Earth
/// radius (defaults to [`DEFAULT_EQUIVALENT_EARTH_RADIUS_KM`]), m.
pub fn height_from_range_elevation_m(
    range_km: f64,
    elevation_deg: f64,
    equivalent_radius_km: Option<f64>,
) -> FormulaResult {
    let range_km = require_non_negative("range_km", range_km)?;
    let elevation_deg = require_number("elevation_deg", elevation_deg)?;
    let radius_km = require_positive(
        "equivalent_radius_km",
        equivalent_radius_km.unwrap_or(DEFAULT_EQUIVALENT_EARTH_RADIUS_KM),
    )?;
    let range_m = range_km * 1000.0;
    let height =
        range_m * elevation_deg.to_radians().sin() + range_m.powi(2) / (2.0 * radius_km * 1000.0);
    finite("height_from_range_elevation_m", height)
}

/// Rain/gaseous loss accumulated over a path plus fixed extra losses, dB.
pub fn environmental_loss_db(
    distance_km: f64,
    loss_db_per_km: f64,
    misc_loss_db: f64,
) -> FormulaResult {
    let distance_km = require_non_negative("distance_km", distance_km)?;
    let rate = require_non_negative("loss_db_per_km", loss_db_per_km)?;
    let misc = require_non_negative("misc_loss_db", misc_loss_db)?;
    finite("environmental_loss_db", distance_km * rate + misc)
}

/// Fresnel-Kirchhoff diffraction parameter `v` for an obstacle of height
/// `obstacle_height_m` above the line of sight.
pub fn fresnel_kirchhoff_parameter(
    obstacle_height_m: f64,
    freq_ghz: f64,
    d1_m: f64,
    d2_m: f64,
) -> FormulaResult {
    let height = require_number("obstacle_height_m", obstacle_height_m)?;
    let wavelength = wavelength_m(freq_ghz)?;
    let d1 = require_positive("d1_m", d1_m)?;
    let d2 = require_positive("d2_m", d2_m)?;
    let v = height * (2.0 / wavelength * (1.0 / d1 + 1.0 / d2)).sqrt();
    finite("fresnel_kirchhoff_parameter", v)
}

/// Single knife-edge diffraction loss, dB. The quadratic fit only holds for
/// `0 < v < 2.4`.
pub fn knife_edge_loss_db(v: f64) -> FormulaResult {
    let v = require_open_range("v", v, 0.0, 2.4)?;
    finite("knife_edge_loss_db", 1.27 * v.powi(2) + 9.0 * v + 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::DomainError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fspl_reference_value() {
        assert_abs_diff_eq!(fspl_db(100.0, 10.0).unwrap(), 152.45, epsilon = 1e-6);
    }

    #[test]
    fn fspl_rejects_non_positive_inputs() {
        assert!(fspl_db(0.0, 10.0).is_err());
        assert!(fspl_db(10.0, -1.0).is_err());
        assert!(fspl_db(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn fresnel_first_zone() {
        assert_abs_diff_eq!(
            fresnel_radius_m(20.0, 5.0, 1).unwrap(),
            24.494897427831781,
            epsilon = 1e-9
        );
        assert!(fresnel_radius_m(20.0, 5.0, 0).is_err());
        // Zone n scales the radius by sqrt(n).
        let first = fresnel_radius_m(20.0, 5.0, 1).unwrap();
        let fourth = fresnel_radius_m(20.0, 5.0, 4).unwrap();
        assert_abs_diff_eq!(fourth, 2.0 * first, epsilon = 1e-9);
    }

    #[test]
    fn earth_bulge_uses_twelve_point_seven_five() {
        assert_abs_diff_eq!(earth_bulge_m(20.0).unwrap(), 31.372549019607842, epsilon = 1e-9);
        assert_eq!(earth_bulge_m(0.0), Ok(0.0));
        assert!(earth_bulge_m(-1.0).is_err());
    }

    #[test]
    fn horizon_adds_target_term_when_present() {
        let antenna_only = radar_horizon_km(20.0, None).unwrap();
        assert_abs_diff_eq!(antenna_only, 4.12 * 20f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            radar_horizon_km(20.0, Some(5.0)).unwrap(),
            27.6378002018974,
            epsilon = 1e-9
        );
        assert_eq!(radar_horizon_km(20.0, Some(-3.0)), Ok(antenna_only));
        assert!(radar_horizon_km(-1.0, None).is_err());
    }

    #[test]
    fn horizon_rejects_nan_target_height() {
        assert_eq!(
            radar_horizon_km(20.0, Some(f64::NAN)),
            Err(DomainError::NotANumber {
                quantity: "target_height_m"
            })
        );
    }

    #[test]
    fn height_estimate_includes_curvature() {
        let height = height_from_range_elevation_m(50.0, 1.0, None).unwrap();
        assert_abs_diff_eq!(height, 1019.6791453935873, epsilon = 1e-6);
        let flat = height_from_range_elevation_m(50.0, 1.0, Some(1e12)).unwrap();
        assert!(flat < height);
        assert!(height_from_range_elevation_m(50.0, 1.0, Some(0.0)).is_err());
    }

    #[test]
    fn environmental_loss_accumulates_per_km() {
        assert_abs_diff_eq!(environmental_loss_db(20.0, 0.05, 2.0).unwrap(), 3.0, epsilon = 1e-12);
        assert!(environmental_loss_db(20.0, -0.05, 2.0).is_err());
    }

    #[test]
    fn knife_edge_loss_only_inside_fit_range() {
        assert_abs_diff_eq!(knife_edge_loss_db(1.0).unwrap(), 16.27, epsilon = 1e-12);
        assert!(knife_edge_loss_db(0.0).is_err());
        assert!(knife_edge_loss_db(3.0).is_err());
    }

    #[test]
    fn diffraction_parameter_grows_with_obstacle_height() {
        let low = fresnel_kirchhoff_parameter(5.0, 3.0, 1000.0, 2000.0).unwrap();
        let high = fresnel_kirchhoff_parameter(10.0, 3.0, 1000.0, 2000.0).unwrap();
        assert_abs_diff_eq!(high, 2.0 * low, epsilon = 1e-12);
        assert!(fresnel_kirchhoff_parameter(5.0, 3.0, 0.0, 2000.0).is_err());
    }
}
