use std::f64::consts::PI;

use crate::math::DecibelHelper;
use crate::prelude::{finite, require_positive, FormulaResult};

/// Square degrees in a full sphere (4π sr).
pub const SQUARE_DEGREES_PER_SPHERE: f64 = 41253.0;

/// Share of the rectangular beam footprint filled by the inscribed ellipse.
pub const ELLIPTICAL_FILL_FACTOR: f64 = PI / 4.0;

/// Beam solid angle `θaz·θel`, steradians.
pub fn beam_solid_angle_sr(beamwidth_az_deg: f64, beamwidth_el_deg: f64) -> FormulaResult {
    let az = require_positive("beamwidth_az_deg", beamwidth_az_deg)?;
    let el = require_positive("beamwidth_el_deg", beamwidth_el_deg)?;
    finite("beam_solid_angle_sr", az.to_radians() * el.to_radians())
}

/// Gain from half-power beamwidths, rectangular mainlobe model, dBi.
pub fn beamwidth_gain_dbi(
    beamwidth_az_deg: f64,
    beamwidth_el_deg: f64,
    efficiency: f64,
) -> FormulaResult {
    let az = require_positive("beamwidth_az_deg", beamwidth_az_deg)?;
    let el = require_positive("beamwidth_el_deg", beamwidth_el_deg)?;
    let efficiency = require_positive("efficiency", efficiency)?;
    let gain = efficiency * SQUARE_DEGREES_PER_SPHERE / (az * el);
    finite("beamwidth_gain_dbi", DecibelHelper::power_db(gain))
}

/// Gain from half-power beamwidths, elliptical solid-angle model, dBi.
///
/// The elliptical mainlobe only fills `π/4` of the rectangle spanned by the
/// two beamwidths, so this estimate sits about 1.05 dB under
/// [`beamwidth_gain_dbi`] for any beamwidth pair.
pub fn beamwidth_gain_elliptical_dbi(
    beamwidth_az_deg: f64,
    beamwidth_el_deg: f64,
    efficiency: f64,
) -> FormulaResult {
    let omega = beam_solid_angle_sr(beamwidth_az_deg, beamwidth_el_deg)?;
    let efficiency = require_positive("efficiency", efficiency)?;
    let gain = efficiency * ELLIPTICAL_FILL_FACTOR * 4.0 * PI / omega;
    finite("beamwidth_gain_elliptical_dbi", DecibelHelper::power_db(gain))
}

/// Fraunhofer (far-field) boundary `2D²/λ` for an aperture of `aperture_m`.
pub fn fraunhofer_distance_m(aperture_m: f64, wavelength_m: f64) -> FormulaResult {
    let aperture_m = require_positive("aperture_m", aperture_m)?;
    let wavelength_m = require_positive("wavelength_m", wavelength_m)?;
    finite("fraunhofer_distance_m", 2.0 * aperture_m.powi(2) / wavelength_m)
}
