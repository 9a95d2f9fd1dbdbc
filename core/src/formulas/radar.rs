use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::formulas::noise::noise_floor_dbm;
use crate::formulas::propagation::fspl_db;
use crate::math::DecibelHelper;
use crate::prelude::{finite, require_non_negative, require_number, require_positive, FormulaResult};

/// Two-way monostatic radar equation, received power in dBm.
///
/// Gains are in dBi and `system_losses_db` is positive for a loss. The range
/// term is the fourth-power law `40·log10(R_m)`.
pub fn radar_received_power_dbm(
    tx_power_w: f64,
    tx_gain_dbi: f64,
    rx_gain_dbi: f64,
    wavelength_m: f64,
    rcs_m2: f64,
    range_km: f64,
    system_losses_db: f64,
) -> FormulaResult {
    let tx_power_w = require_positive("tx_power_w", tx_power_w)?;
    let wavelength_m = require_positive("wavelength_m", wavelength_m)?;
    let rcs_m2 = require_positive("rcs_m2", rcs_m2)?;
    let range_km = require_positive("range_km", range_km)?;
    let tx_gain_dbi = require_number("tx_gain_dbi", tx_gain_dbi)?;
    let rx_gain_dbi = require_number("rx_gain_dbi", rx_gain_dbi)?;
    let system_losses_db = require_number("system_losses_db", system_losses_db)?;

    let geometric_db = DecibelHelper::field_db(wavelength_m / (4.0 * PI));
    let range_db = 40.0 * (range_km * 1000.0).log10();
    let power = DecibelHelper::watts_to_dbm(tx_power_w)
        + tx_gain_dbi
        + rx_gain_dbi
        + geometric_db
        + DecibelHelper::power_db(rcs_m2)
        - range_db
        - system_losses_db;
    finite("radar_received_power_dbm", power)
}

/// Effective isotropic radiated power, dBm.
pub fn eirp_dbm(tx_power_w: f64, tx_gain_dbi: f64) -> FormulaResult {
    let tx_power_w = require_positive("tx_power_w", tx_power_w)?;
    let tx_gain_dbi = require_number("tx_gain_dbi", tx_gain_dbi)?;
    finite("eirp_dbm", DecibelHelper::watts_to_dbm(tx_power_w) + tx_gain_dbi)
}

/// One-way link budget (warning receivers, secondary radar), dBm.
pub fn one_way_received_power_dbm(
    tx_power_w: f64,
    tx_gain_dbi: f64,
    rx_gain_dbi: f64,
    range_km: f64,
    freq_ghz: f64,
    losses_db: f64,
) -> FormulaResult {
    let tx_power_w = require_positive("tx_power_w", tx_power_w)?;
    let rx_gain_dbi = require_number("rx_gain_dbi", rx_gain_dbi)?;
    let losses_db = require_number("losses_db", losses_db)?;
    let path_loss = fspl_db(range_km, freq_ghz)?;
    let eirp = eirp_dbm(tx_power_w, tx_gain_dbi)?;
    finite("one_way_received_power_dbm", eirp + rx_gain_dbi - path_loss - losses_db)
}

/// Received power, noise floor and margin for a two-way radar link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkBudget {
    pub received_power_dbm: f64,
    pub noise_floor_dbm: f64,
    pub snr_db: f64,
    pub margin_db: f64,
}

impl LinkBudget {
    pub fn meets_requirement(&self) -> bool {
        self.margin_db >= 0.0
    }
}

/// Inputs of the two-way link budget, grouped because the budget combines
/// the radar equation with the receiver noise floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarLink {
    pub tx_power_w: f64,
    pub tx_gain_dbi: f64,
    pub rx_gain_dbi: f64,
    pub freq_ghz: f64,
    pub rcs_m2: f64,
    pub range_km: f64,
    pub losses_db: f64,
    pub bandwidth_mhz: f64,
    pub noise_figure_db: f64,
    pub required_snr_db: f64,
}

pub fn radar_link_budget(link: &RadarLink) -> FormulaResult<LinkBudget> {
    let wavelength = crate::formulas::wavelength_m(link.freq_ghz)?;
    let received_power_dbm = radar_received_power_dbm(
        link.tx_power_w,
        link.tx_gain_dbi,
        link.rx_gain_dbi,
        wavelength,
        link.rcs_m2,
        link.range_km,
        link.losses_db,
    )?;
    let bandwidth_mhz = require_positive("bandwidth_mhz", link.bandwidth_mhz)?;
    let noise_floor_dbm = noise_floor_dbm(bandwidth_mhz * 1e6, link.noise_figure_db)?;
    let required = require_number("required_snr_db", link.required_snr_db)?;
    let snr_db = received_power_dbm - noise_floor_dbm;
    Ok(LinkBudget {
        received_power_dbm,
        noise_floor_dbm,
        snr_db,
        margin_db: finite("link_margin_db", snr_db - required)?,
    })
}

/// Relative weather-radar return in dB, without calibration constants.
///
/// Volume targets fill the pulse volume, so only a `20·log10(R)` range loss
/// applies. `reflectivity_mm6_m3` is the reflectivity factor Z.
pub fn weather_return_score_db(
    tx_power_w: f64,
    gain_dbi: f64,
    wavelength_m: f64,
    reflectivity_mm6_m3: f64,
    range_km: f64,
    attenuation_db_per_km: f64,
    misc_loss_db: f64,
) -> FormulaResult {
    let tx_power_w = require_positive("tx_power_w", tx_power_w)?;
    let gain_dbi = require_number("gain_dbi", gain_dbi)?;
    let wavelength_m = require_positive("wavelength_m", wavelength_m)?;
    let z = require_positive("reflectivity_mm6_m3", reflectivity_mm6_m3)?;
    let range_km = require_positive("range_km", range_km)?;
    let attenuation = require_non_negative("attenuation_db_per_km", attenuation_db_per_km)?;
    let misc = require_non_negative("misc_loss_db", misc_loss_db)?;

    let score = DecibelHelper::watts_to_dbm(tx_power_w)
        + 2.0 * gain_dbi
        + DecibelHelper::field_db(wavelength_m)
        + DecibelHelper::power_db(z)
        - DecibelHelper::field_db(range_km * 1000.0)
        - (attenuation * range_km + misc);
    finite("weather_return_score_db", score)
}
