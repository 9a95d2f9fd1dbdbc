use std::f64::consts::PI;

use serde::Serialize;

use crate::math::DecibelHelper;
use crate::prelude::{finite, require_number, require_positive, FormulaResult};

/// Intermediate dB terms of the self-protection burn-through estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BurnThroughBudget {
    /// `Pt + 2·Gt + σ + λ²`, dB.
    pub numerator_db: f64,
    /// `Pj + Gj + (4π)² + J/S`, dB.
    pub denominator_db: f64,
    /// Quarter of the difference: S/J follows an inverse fourth-power law.
    pub range_db: f64,
    pub range_km: f64,
}

pub fn burn_through_budget(
    tx_power_w: f64,
    tx_gain_dbi: f64,
    jammer_power_w: f64,
    jammer_gain_dbi: f64,
    wavelength_m: f64,
    rcs_m2: f64,
    desired_js_db: f64,
) -> FormulaResult<BurnThroughBudget> {
    let tx_power_w = require_positive("tx_power_w", tx_power_w)?;
    let jammer_power_w = require_positive("jammer_power_w", jammer_power_w)?;
    let wavelength_m = require_positive("wavelength_m", wavelength_m)?;
    let rcs_m2 = require_positive("rcs_m2", rcs_m2)?;
    let tx_gain_dbi = require_number("tx_gain_dbi", tx_gain_dbi)?;
    let jammer_gain_dbi = require_number("jammer_gain_dbi", jammer_gain_dbi)?;
    let desired_js_db = require_number("desired_js_db", desired_js_db)?;

    let numerator_db = DecibelHelper::power_db(tx_power_w)
        + 2.0 * tx_gain_dbi
        + DecibelHelper::power_db(rcs_m2)
        + DecibelHelper::field_db(wavelength_m);
    let denominator_db = DecibelHelper::power_db(jammer_power_w)
        + jammer_gain_dbi
        + DecibelHelper::field_db(4.0 * PI)
        + desired_js_db;
    let range_db = 0.25 * (numerator_db - denominator_db);
    let range_km = finite("burn_through_range_km", 10f64.powf(range_db) / 1000.0)?;

    Ok(BurnThroughBudget {
        numerator_db,
        denominator_db,
        range_db,
        range_km,
    })
}

/// Range at which the radar echo overcomes self-protection jamming by the
/// desired margin, km.
pub fn burn_through_range_km(
    tx_power_w: f64,
    tx_gain_dbi: f64,
    jammer_power_w: f64,
    jammer_gain_dbi: f64,
    wavelength_m: f64,
    rcs_m2: f64,
    desired_js_db: f64,
) -> FormulaResult {
    burn_through_budget(
        tx_power_w,
        tx_gain_dbi,
        jammer_power_w,
        jammer_gain_dbi,
        wavelength_m,
        rcs_m2,
        desired_js_db,
    )
    .map(|budget| budget.range_km)
}

/// J/S for support (stand-off) jamming into the radar sidelobes, dB.
///
/// ERPs are in watts, ranges in km and the carrier in MHz; the 11 dB term
/// carries the remaining constants of the ratio.
pub fn support_jamming_js_db(
    erp_jammer_w: f64,
    erp_target_w: f64,
    mainlobe_gain_dbi: f64,
    sidelobe_gain_dbi: f64,
    range_target_km: f64,
    range_jammer_km: f64,
    freq_mhz: f64,
) -> FormulaResult {
    let erp_j = require_positive("erp_jammer_w", erp_jammer_w)?;
    let erp_t = require_positive("erp_target_w", erp_target_w)?;
    let range_t = require_positive("range_target_km", range_target_km)?;
    let range_j = require_positive("range_jammer_km", range_jammer_km)?;
    let freq_mhz = require_positive("freq_mhz", freq_mhz)?;
    let g_main = require_number("mainlobe_gain_dbi", mainlobe_gain_dbi)?;
    let g_side = require_number("sidelobe_gain_dbi", sidelobe_gain_dbi)?;

    let js = DecibelHelper::watts_to_dbw(erp_j) - DecibelHelper::watts_to_dbw(erp_t)
        + 11.0
        + g_main
        - g_side
        + 40.0 * range_t.log10()
        - DecibelHelper::field_db(range_j)
        - DecibelHelper::power_db(freq_mhz);
    finite("support_jamming_js_db", js)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn burn_through_intermediates() {
        let budget = burn_through_budget(5000.0, 32.0, 1000.0, 10.0, 0.03, 1.0, 0.0).unwrap();
        assert_abs_diff_eq!(budget.numerator_db, 70.53212513775344, epsilon = 1e-9);
        assert_abs_diff_eq!(budget.denominator_db, 61.984197280441926, epsilon = 1e-9);
        assert_abs_diff_eq!(budget.range_db, 2.1369819643278785, epsilon = 1e-9);
        assert_abs_diff_eq!(budget.range_km, 0.13708248364508097, epsilon = 1e-12);
    }

    #[test]
    fn more_jamming_margin_shortens_burn_through() {
        let base = burn_through_range_km(5000.0, 32.0, 1000.0, 10.0, 0.03, 1.0, 0.0).unwrap();
        let harder = burn_through_range_km(5000.0, 32.0, 1000.0, 10.0, 0.03, 1.0, 4.0).unwrap();
        assert_abs_diff_eq!(base / harder, 10f64.powf(0.1), epsilon = 1e-9);
    }

    #[test]
    fn burn_through_guards() {
        assert!(burn_through_range_km(0.0, 32.0, 1000.0, 10.0, 0.03, 1.0, 0.0).is_err());
        assert!(burn_through_range_km(5000.0, 32.0, 0.0, 10.0, 0.03, 1.0, 0.0).is_err());
        assert!(burn_through_range_km(5000.0, 32.0, 1000.0, 10.0, 0.0, 1.0, 0.0).is_err());
        assert!(burn_through_range_km(5000.0, 32.0, 1000.0, 10.0, 0.03, 0.0, 0.0).is_err());
    }

    #[test]
    fn support_jamming_reference_value() {
        let js = support_jamming_js_db(10000.0, 50.0, 30.0, 0.0, 100.0, 50.0, 3000.0).unwrap();
        assert_abs_diff_eq!(js, 75.25968732272281, epsilon = 1e-9);
        assert!(support_jamming_js_db(10000.0, 50.0, 30.0, 0.0, 100.0, 0.0, 3000.0).is_err());
    }
}
