//! Named, serializable entry points for every formula.
//!
//! Hosts describe an evaluation as a [`FormulaRequest`] (for example a YAML
//! map with `formula: fspl`) and get back an [`Evaluation`] that carries
//! either the value or the domain violation that prevented it.

use serde::{Deserialize, Serialize};

use crate::formulas::radar::RadarLink;
use crate::formulas::{
    antenna, doppler, jamming, noise, propagation, pulse, radar, rcs, resolution, wavelength_m,
};
use crate::prelude::{DomainError, FormulaResult};
use crate::telemetry::log::LogManager;

/// Static description of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub unit: &'static str,
}

const fn info(id: &'static str, title: &'static str, unit: &'static str) -> FormulaInfo {
    FormulaInfo { id, title, unit }
}

pub const CATALOG: &[FormulaInfo] = &[
    info("fspl", "Free-space path loss", "dB"),
    info("radar_received_power", "Two-way radar received power", "dBm"),
    info("noise_floor", "Thermal noise floor", "dBm"),
    info("burn_through", "Self-protection burn-through range", "km"),
    info("beamwidth_gain", "Antenna gain, rectangular model", "dBi"),
    info("beamwidth_gain_elliptical", "Antenna gain, elliptical model", "dBi"),
    info("range_resolution", "Range resolution, unmodulated pulse", "m"),
    info("bandwidth_resolution", "Range resolution, chirp/FMCW", "m"),
    info("fresnel_radius", "Fresnel zone radius", "m"),
    info("earth_bulge", "Earth bulge at path midpoint", "m"),
    info("unambiguous_velocity", "Unambiguous velocity", "m/s"),
    info("doppler_shift", "Doppler shift", "Hz"),
    info("dwell_time", "Dwell time", "ms"),
    info("radar_horizon", "Radar horizon", "km"),
    info("eirp", "EIRP", "dBm"),
    info("target_height", "Target height from range and elevation", "m"),
    info("rayleigh_sphere_rcs", "Sphere RCS, Rayleigh region", "m²"),
    info("angular_resolution", "Cross-range resolution", "m"),
    info("resolution_cell_volume", "Resolution cell volume", "m³"),
    info("one_way_link", "One-way received power", "dBm"),
    info("duty_cycle", "Duty cycle", ""),
    info("blind_range", "Blind range", "m"),
    info("unambiguous_range", "Unambiguous range", "km"),
    info("enob_from_sinad", "ENOB from SINAD", "bits"),
    info("sinad_from_enob", "SINAD from ENOB", "dB"),
    info("support_jamming", "Support jamming J/S", "dB"),
    info("radar_link_budget", "Radar link margin", "dB"),
    info("environmental_loss", "Atmospheric and misc. path loss", "dB"),
    info("weather_return", "Relative weather return", "dB"),
    info("optical_sphere_rcs", "Sphere RCS, optical region", "m²"),
    info("chaff_dipole_rcs", "Chaff dipole RCS", "m²"),
    info("chaff_cloud_rcs", "Chaff cloud RCS", "m²"),
    info("active_decoy_rcs", "Active decoy simulated RCS", "dBsm"),
    info("noise_temperature", "Noise temperature", "K"),
    info("mds", "Minimum discernible signal", "dBm"),
    info("prf", "PRF from PRI", "Hz"),
    info("hits_per_scan", "Hits per scan", ""),
    info("pulse_compression_ratio", "Pulse compression ratio", ""),
    info("chirp_slope", "Chirp slope", "Hz/s"),
    info("fmcw_beat_range", "FMCW range from beat frequency", "m"),
    info("fraunhofer_distance", "Far-field (Fraunhofer) distance", "m"),
    info("knife_edge_loss", "Knife-edge diffraction loss", "dB"),
    info("beam_solid_angle", "Beam solid angle", "sr"),
    info("wavelength", "Wavelength", "m"),
];

pub fn lookup(id: &str) -> Option<&'static FormulaInfo> {
    CATALOG.iter().find(|entry| entry.id == id)
}

fn one() -> u32 {
    1
}

/// One formula invocation with its named inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formula", rename_all = "snake_case")]
pub enum FormulaRequest {
    Fspl {
        distance_km: f64,
        freq_ghz: f64,
    },
    RadarReceivedPower {
        tx_power_w: f64,
        tx_gain_dbi: f64,
        rx_gain_dbi: f64,
        wavelength_m: f64,
        rcs_m2: f64,
        range_km: f64,
        system_losses_db: f64,
    },
    NoiseFloor {
        bandwidth_hz: f64,
        noise_figure_db: f64,
    },
    BurnThrough {
        tx_power_w: f64,
        tx_gain_dbi: f64,
        jammer_power_w: f64,
        jammer_gain_dbi: f64,
        wavelength_m: f64,
        rcs_m2: f64,
        desired_js_db: f64,
    },
    BeamwidthGain {
        beamwidth_az_deg: f64,
        beamwidth_el_deg: f64,
        efficiency: f64,
    },
    BeamwidthGainElliptical {
        beamwidth_az_deg: f64,
        beamwidth_el_deg: f64,
        efficiency: f64,
    },
    RangeResolution {
        pulse_width_us: f64,
    },
    BandwidthResolution {
        bandwidth_mhz: f64,
    },
    FresnelRadius {
        distance_km: f64,
        freq_ghz: f64,
        #[serde(default = "one")]
        zone: u32,
    },
    EarthBulge {
        distance_km: f64,
    },
    UnambiguousVelocity {
        freq_ghz: f64,
        prf_hz: f64,
    },
    DopplerShift {
        freq_ghz: f64,
        radial_speed_mps: f64,
    },
    DwellTime {
        beamwidth_deg: f64,
        rpm: f64,
    },
    RadarHorizon {
        antenna_height_m: f64,
        #[serde(default)]
        target_height_m: Option<f64>,
    },
    Eirp {
        tx_power_w: f64,
        tx_gain_dbi: f64,
    },
    TargetHeight {
        range_km: f64,
        elevation_deg: f64,
        #[serde(default)]
        equivalent_radius_km: Option<f64>,
    },
    RayleighSphereRcs {
        diameter_m: f64,
        wavelength_m: f64,
    },
    AngularResolution {
        range_km: f64,
        beamwidth_deg: f64,
    },
    ResolutionCellVolume {
        range_km: f64,
        beamwidth_az_deg: f64,
        beamwidth_el_deg: f64,
        pulse_width_us: f64,
    },
    OneWayLink {
        tx_power_w: f64,
        tx_gain_dbi: f64,
        rx_gain_dbi: f64,
        range_km: f64,
        freq_ghz: f64,
        losses_db: f64,
    },
    DutyCycle {
        pri_us: f64,
        pulse_width_us: f64,
    },
    BlindRange {
        pulse_width_us: f64,
        #[serde(default)]
        dead_time_us: f64,
        #[serde(default)]
        recovery_time_us: f64,
    },
    UnambiguousRange {
        pri_us: f64,
        #[serde(default)]
        pulse_width_us: f64,
    },
    EnobFromSinad {
        sinad_db: f64,
    },
    SinadFromEnob {
        enob_bits: f64,
    },
    SupportJamming {
        erp_jammer_w: f64,
        erp_target_w: f64,
        mainlobe_gain_dbi: f64,
        sidelobe_gain_dbi: f64,
        range_target_km: f64,
        range_jammer_km: f64,
        freq_mhz: f64,
    },
    RadarLinkBudget(RadarLink),
    EnvironmentalLoss {
        distance_km: f64,
        loss_db_per_km: f64,
        #[serde(default)]
        misc_loss_db: f64,
    },
    WeatherReturn {
        tx_power_w: f64,
        gain_dbi: f64,
        wavelength_m: f64,
        reflectivity_mm6_m3: f64,
        range_km: f64,
        #[serde(default)]
        attenuation_db_per_km: f64,
        #[serde(default)]
        misc_loss_db: f64,
    },
    OpticalSphereRcs {
        diameter_m: f64,
    },
    ChaffDipoleRcs {
        wavelength_m: f64,
    },
    ChaffCloudRcs {
        wavelength_m: f64,
        dipole_count: u64,
    },
    ActiveDecoyRcs {
        amplifier_gain_db: f64,
        freq_mhz: f64,
    },
    NoiseTemperature {
        noise_figure_db: f64,
    },
    Mds {
        bandwidth_mhz: f64,
        noise_figure_db: f64,
    },
    Prf {
        pri_us: f64,
    },
    HitsPerScan {
        beamwidth_deg: f64,
        prf_hz: f64,
        rpm: f64,
    },
    PulseCompressionRatio {
        bandwidth_mhz: f64,
        pulse_width_us: f64,
    },
    ChirpSlope {
        bandwidth_mhz: f64,
        chirp_time_us: f64,
    },
    FmcwBeatRange {
        beat_hz: f64,
        slope_hz_per_s: f64,
    },
    FraunhoferDistance {
        aperture_m: f64,
        wavelength_m: f64,
    },
    KnifeEdgeLoss {
        obstacle_height_m: f64,
        freq_ghz: f64,
        d1_m: f64,
        d2_m: f64,
    },
    BeamSolidAngle {
        beamwidth_az_deg: f64,
        beamwidth_el_deg: f64,
    },
    Wavelength {
        freq_ghz: f64,
    },
}

/// Named intermediate output of a composite formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Detail {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

const fn detail(name: &'static str, value: f64, unit: &'static str) -> Detail {
    Detail { name, value, unit }
}

/// Outcome of evaluating a [`FormulaRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub formula: &'static str,
    pub title: &'static str,
    pub unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DomainError>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,
}

impl Evaluation {
    pub fn result(&self) -> FormulaResult {
        match (self.value, self.error) {
            (Some(value), _) => Ok(value),
            (None, Some(error)) => Err(error),
            (None, None) => Err(DomainError::NonFinite {
                formula: self.formula,
            }),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// The float convention for hosts that render `NaN` as "N/A".
    pub fn value_or_nan(&self) -> f64 {
        self.value.unwrap_or(f64::NAN)
    }
}

impl FormulaRequest {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Fspl { .. } => "fspl",
            Self::RadarReceivedPower { .. } => "radar_received_power",
            Self::NoiseFloor { .. } => "noise_floor",
            Self::BurnThrough { .. } => "burn_through",
            Self::BeamwidthGain { .. } => "beamwidth_gain",
            Self::BeamwidthGainElliptical { .. } => "beamwidth_gain_elliptical",
            Self::RangeResolution { .. } => "range_resolution",
            Self::BandwidthResolution { .. } => "bandwidth_resolution",
            Self::FresnelRadius { .. } => "fresnel_radius",
            Self::EarthBulge { .. } => "earth_bulge",
            Self::UnambiguousVelocity { .. } => "unambiguous_velocity",
            Self::DopplerShift { .. } => "doppler_shift",
            Self::DwellTime { .. } => "dwell_time",
            Self::RadarHorizon { .. } => "radar_horizon",
            Self::Eirp { .. } => "eirp",
            Self::TargetHeight { .. } => "target_height",
            Self::RayleighSphereRcs { .. } => "rayleigh_sphere_rcs",
            Self::AngularResolution { .. } => "angular_resolution",
            Self::ResolutionCellVolume { .. } => "resolution_cell_volume",
            Self::OneWayLink { .. } => "one_way_link",
            Self::DutyCycle { .. } => "duty_cycle",
            Self::BlindRange { .. } => "blind_range",
            Self::UnambiguousRange { .. } => "unambiguous_range",
            Self::EnobFromSinad { .. } => "enob_from_sinad",
            Self::SinadFromEnob { .. } => "sinad_from_enob",
            Self::SupportJamming { .. } => "support_jamming",
            Self::RadarLinkBudget(_) => "radar_link_budget",
            Self::EnvironmentalLoss { .. } => "environmental_loss",
            Self::WeatherReturn { .. } => "weather_return",
            Self::OpticalSphereRcs { .. } => "optical_sphere_rcs",
            Self::ChaffDipoleRcs { .. } => "chaff_dipole_rcs",
            Self::ChaffCloudRcs { .. } => "chaff_cloud_rcs",
            Self::ActiveDecoyRcs { .. } => "active_decoy_rcs",
            Self::NoiseTemperature { .. } => "noise_temperature",
            Self::Mds { .. } => "mds",
            Self::Prf { .. } => "prf",
            Self::HitsPerScan { .. } => "hits_per_scan",
            Self::PulseCompressionRatio { .. } => "pulse_compression_ratio",
            Self::ChirpSlope { .. } => "chirp_slope",
            Self::FmcwBeatRange { .. } => "fmcw_beat_range",
            Self::FraunhoferDistance { .. } => "fraunhofer_distance",
            Self::KnifeEdgeLoss { .. } => "knife_edge_loss",
            Self::BeamSolidAngle { .. } => "beam_solid_angle",
            Self::Wavelength { .. } => "wavelength",
        }
    }

    pub fn info(&self) -> FormulaInfo {
        let id = self.id();
        lookup(id).copied().unwrap_or(FormulaInfo {
            id,
            title: id,
            unit: "",
        })
    }

    fn compute(&self) -> FormulaResult<(f64, Vec<Detail>)> {
        let plain = |result: FormulaResult| result.map(|value| (value, Vec::new()));
        match *self {
            Self::Fspl {
                distance_km,
                freq_ghz,
            } => plain(propagation::fspl_db(distance_km, freq_ghz)),
            Self::RadarReceivedPower {
                tx_power_w,
                tx_gain_dbi,
                rx_gain_dbi,
                wavelength_m,
                rcs_m2,
                range_km,
                system_losses_db,
            } => plain(radar::radar_received_power_dbm(
                tx_power_w,
                tx_gain_dbi,
                rx_gain_dbi,
                wavelength_m,
                rcs_m2,
                range_km,
                system_losses_db,
            )),
            Self::NoiseFloor {
                bandwidth_hz,
                noise_figure_db,
            } => plain(noise::noise_floor_dbm(bandwidth_hz, noise_figure_db)),
            Self::BurnThrough {
                tx_power_w,
                tx_gain_dbi,
                jammer_power_w,
                jammer_gain_dbi,
                wavelength_m,
                rcs_m2,
                desired_js_db,
            } => {
                let budget = jamming::burn_through_budget(
                    tx_power_w,
                    tx_gain_dbi,
                    jammer_power_w,
                    jammer_gain_dbi,
                    wavelength_m,
                    rcs_m2,
                    desired_js_db,
                )?;
                Ok((
                    budget.range_km,
                    vec![
                        detail("numerator", budget.numerator_db, "dB"),
                        detail("denominator", budget.denominator_db, "dB"),
                        detail("range_term", budget.range_db, "dB"),
                    ],
                ))
            }
            Self::BeamwidthGain {
                beamwidth_az_deg,
                beamwidth_el_deg,
                efficiency,
            } => plain(antenna::beamwidth_gain_dbi(beamwidth_az_deg, beamwidth_el_deg, efficiency)),
            Self::BeamwidthGainElliptical {
                beamwidth_az_deg,
                beamwidth_el_deg,
                efficiency,
            } => plain(antenna::beamwidth_gain_elliptical_dbi(
                beamwidth_az_deg,
                beamwidth_el_deg,
                efficiency,
            )),
            Self::RangeResolution { pulse_width_us } => {
                plain(resolution::range_resolution_m(pulse_width_us))
            }
            Self::BandwidthResolution { bandwidth_mhz } => {
                plain(resolution::bandwidth_resolution_m(bandwidth_mhz))
            }
            Self::FresnelRadius {
                distance_km,
                freq_ghz,
                zone,
            } => plain(propagation::fresnel_radius_m(distance_km, freq_ghz, zone)),
            Self::EarthBulge { distance_km } => plain(propagation::earth_bulge_m(distance_km)),
            Self::UnambiguousVelocity { freq_ghz, prf_hz } => {
                plain(doppler::unambiguous_velocity_ms(freq_ghz, prf_hz))
            }
            Self::DopplerShift {
                freq_ghz,
                radial_speed_mps,
            } => plain(doppler::doppler_frequency_hz(freq_ghz, radial_speed_mps)),
            Self::DwellTime { beamwidth_deg, rpm } => {
                plain(pulse::dwell_time_ms(beamwidth_deg, rpm))
            }
            Self::RadarHorizon {
                antenna_height_m,
                target_height_m,
            } => plain(propagation::radar_horizon_km(antenna_height_m, target_height_m)),
            Self::Eirp {
                tx_power_w,
                tx_gain_dbi,
            } => plain(radar::eirp_dbm(tx_power_w, tx_gain_dbi)),
            Self::TargetHeight {
                range_km,
                elevation_deg,
                equivalent_radius_km,
            } => plain(propagation::height_from_range_elevation_m(
                range_km,
                elevation_deg,
                equivalent_radius_km,
            )),
            Self::RayleighSphereRcs {
                diameter_m,
                wavelength_m,
            } => plain(rcs::rayleigh_sphere_rcs_m2(diameter_m, wavelength_m)),
            Self::AngularResolution { range_km, beamwidth_deg } => {
                plain(resolution::angular_resolution_m(range_km, beamwidth_deg))
            }
            Self::ResolutionCellVolume {
                range_km,
                beamwidth_az_deg,
                beamwidth_el_deg,
                pulse_width_us,
            } => plain(resolution::resolution_cell_volume_m3(
                range_km,
                beamwidth_az_deg,
                beamwidth_el_deg,
                pulse_width_us,
            )),
            Self::OneWayLink {
                tx_power_w,
                tx_gain_dbi,
                rx_gain_dbi,
                range_km,
                freq_ghz,
                losses_db,
            } => {
                let received = radar::one_way_received_power_dbm(
                    tx_power_w,
                    tx_gain_dbi,
                    rx_gain_dbi,
                    range_km,
                    freq_ghz,
                    losses_db,
                )?;
                let path_loss = propagation::fspl_db(range_km, freq_ghz)?;
                Ok((received, vec![detail("fspl", path_loss, "dB")]))
            }
            Self::DutyCycle {
                pri_us,
                pulse_width_us,
            } => plain(pulse::duty_cycle(pri_us, pulse_width_us)),
            Self::BlindRange {
                pulse_width_us,
                dead_time_us,
                recovery_time_us,
            } => plain(pulse::blind_range_m(pulse_width_us, dead_time_us, recovery_time_us)),
            Self::UnambiguousRange { pri_us, pulse_width_us } => {
                plain(pulse::unambiguous_range_km(pri_us, pulse_width_us))
            }
            Self::EnobFromSinad { sinad_db } => plain(noise::enob_from_sinad(sinad_db)),
            Self::SinadFromEnob { enob_bits } => plain(noise::sinad_from_enob(enob_bits)),
            Self::SupportJamming {
                erp_jammer_w,
                erp_target_w,
                mainlobe_gain_dbi,
                sidelobe_gain_dbi,
                range_target_km,
                range_jammer_km,
                freq_mhz,
            } => plain(jamming::support_jamming_js_db(
                erp_jammer_w,
                erp_target_w,
                mainlobe_gain_dbi,
                sidelobe_gain_dbi,
                range_target_km,
                range_jammer_km,
                freq_mhz,
            )),
            Self::RadarLinkBudget(ref link) => {
                let budget = radar::radar_link_budget(link)?;
                Ok((
                    budget.margin_db,
                    vec![
                        detail("received_power", budget.received_power_dbm, "dBm"),
                        detail("noise_floor", budget.noise_floor_dbm, "dBm"),
                        detail("snr", budget.snr_db, "dB"),
                    ],
                ))
            }
            Self::EnvironmentalLoss {
                distance_km,
                loss_db_per_km,
                misc_loss_db,
            } => plain(propagation::environmental_loss_db(
                distance_km,
                loss_db_per_km,
                misc_loss_db,
            )),
            Self::WeatherReturn {
                tx_power_w,
                gain_dbi,
                wavelength_m,
                reflectivity_mm6_m3,
                range_km,
                attenuation_db_per_km,
                misc_loss_db,
            } => plain(radar::weather_return_score_db(
                tx_power_w,
                gain_dbi,
                wavelength_m,
                reflectivity_mm6_m3,
                range_km,
                attenuation_db_per_km,
                misc_loss_db,
            )),
            Self::OpticalSphereRcs { diameter_m } => plain(rcs::optical_sphere_rcs_m2(diameter_m)),
            Self::ChaffDipoleRcs { wavelength_m } => plain(rcs::chaff_dipole_rcs_m2(wavelength_m)),
            Self::ChaffCloudRcs {
                wavelength_m,
                dipole_count,
            } => plain(rcs::chaff_cloud_rcs_m2(wavelength_m, dipole_count)),
            Self::ActiveDecoyRcs {
                amplifier_gain_db,
                freq_mhz,
            } => plain(rcs::active_decoy_rcs_dbsm(amplifier_gain_db, freq_mhz)),
            Self::NoiseTemperature { noise_figure_db } => {
                plain(noise::noise_temperature_k(noise_figure_db))
            }
            Self::Mds {
                bandwidth_mhz,
                noise_figure_db,
            } => plain(noise::mds_dbm(bandwidth_mhz, noise_figure_db)),
            Self::Prf { pri_us } => plain(pulse::prf_hz(pri_us)),
            Self::HitsPerScan {
                beamwidth_deg,
                prf_hz,
                rpm,
            } => plain(pulse::hits_per_scan(beamwidth_deg, prf_hz, rpm)),
            Self::PulseCompressionRatio {
                bandwidth_mhz,
                pulse_width_us,
            } => plain(pulse::pulse_compression_ratio(bandwidth_mhz, pulse_width_us)),
            Self::ChirpSlope {
                bandwidth_mhz,
                chirp_time_us,
            } => plain(pulse::chirp_slope_hz_per_s(bandwidth_mhz, chirp_time_us)),
            Self::FmcwBeatRange {
                beat_hz,
                slope_hz_per_s,
            } => plain(pulse::fmcw_beat_range_m(beat_hz, slope_hz_per_s)),
            Self::FraunhoferDistance {
                aperture_m,
                wavelength_m,
            } => plain(antenna::fraunhofer_distance_m(aperture_m, wavelength_m)),
            Self::KnifeEdgeLoss {
                obstacle_height_m,
                freq_ghz,
                d1_m,
                d2_m,
            } => {
                let v = propagation::fresnel_kirchhoff_parameter(
                    obstacle_height_m,
                    freq_ghz,
                    d1_m,
                    d2_m,
                )?;
                let loss = propagation::knife_edge_loss_db(v)?;
                Ok((loss, vec![detail("v", v, "")]))
            }
            Self::BeamSolidAngle {
                beamwidth_az_deg,
                beamwidth_el_deg,
            } => plain(antenna::beam_solid_angle_sr(beamwidth_az_deg, beamwidth_el_deg)),
            Self::Wavelength { freq_ghz } => plain(wavelength_m(freq_ghz)),
        }
    }

    /// Evaluates the request. Domain violations are part of the returned
    /// [`Evaluation`], never a panic.
    pub fn evaluate(&self) -> Evaluation {
        let logger = LogManager::new("ewcore::catalog");
        let FormulaInfo { id, title, unit } = self.info();
        match self.compute() {
            Ok((value, details)) => {
                logger.debug(&format!("{} = {} {}", id, value, unit));
                Evaluation {
                    formula: id,
                    title,
                    unit,
                    value: Some(value),
                    error: None,
                    details,
                }
            }
            Err(error) => {
                logger.warn(&format!("{} undefined: {}", id, error));
                Evaluation {
                    formula: id,
                    title,
                    unit,
                    value: None,
                    error: Some(error),
                    details: Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = CATALOG.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn tagged_json_evaluates() {
        let request: FormulaRequest = serde_json::from_value(json!({
            "formula": "fspl", "distance_km": 100, "freq_ghz": 10
        }))
        .unwrap();
        let evaluation = request.evaluate();
        assert_eq!(evaluation.formula, "fspl");
        assert_eq!(evaluation.unit, "dB");
        assert_abs_diff_eq!(evaluation.value.unwrap(), 152.45, epsilon = 1e-6);
    }

    #[test]
    fn optional_inputs_take_defaults() {
        let request: FormulaRequest = serde_json::from_value(json!({
            "formula": "fresnel_radius", "distance_km": 20, "freq_ghz": 5
        }))
        .unwrap();
        assert_eq!(
            request,
            FormulaRequest::FresnelRadius {
                distance_km: 20.0,
                freq_ghz: 5.0,
                zone: 1
            }
        );
        let horizon: FormulaRequest = serde_json::from_value(json!({
            "formula": "radar_horizon", "antenna_height_m": 20
        }))
        .unwrap();
        assert_abs_diff_eq!(
            horizon.evaluate().value.unwrap(),
            4.12 * 20f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn domain_violation_becomes_error_not_value() {
        let evaluation = FormulaRequest::Fspl {
            distance_km: 0.0,
            freq_ghz: 10.0,
        }
        .evaluate();
        assert!(!evaluation.is_valid());
        assert!(evaluation.value_or_nan().is_nan());
        assert_eq!(
            evaluation.result(),
            Err(DomainError::NotPositive {
                quantity: "distance_km",
                value: 0.0
            })
        );
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["error"]["kind"], "not_positive");
        assert!(json.get("value").is_none());
    }

    #[test]
    fn burn_through_exposes_intermediate_terms() {
        let evaluation = FormulaRequest::BurnThrough {
            tx_power_w: 5000.0,
            tx_gain_dbi: 32.0,
            jammer_power_w: 1000.0,
            jammer_gain_dbi: 10.0,
            wavelength_m: 0.03,
            rcs_m2: 1.0,
            desired_js_db: 0.0,
        }
        .evaluate();
        let names: Vec<_> = evaluation.details.iter().map(|d| d.name).collect();
        assert_eq!(names, ["numerator", "denominator", "range_term"]);
        assert_abs_diff_eq!(evaluation.value.unwrap(), 0.13708248364508097, epsilon = 1e-12);
    }

    #[test]
    fn link_budget_request_flattens_fields() {
        let request: FormulaRequest = serde_json::from_value(json!({
            "formula": "radar_link_budget",
            "tx_power_w": 1000, "tx_gain_dbi": 30, "rx_gain_dbi": 30, "freq_ghz": 10,
            "rcs_m2": 1, "range_km": 10, "losses_db": 3, "bandwidth_mhz": 1,
            "noise_figure_db": 3, "required_snr_db": 13
        }))
        .unwrap();
        let evaluation = request.evaluate();
        assert_eq!(evaluation.details.len(), 3);
        assert!(evaluation.value.unwrap() > 0.0);
    }

    #[test]
    fn every_request_id_is_listed() {
        let requests = [
            FormulaRequest::Wavelength { freq_ghz: 10.0 },
            FormulaRequest::KnifeEdgeLoss {
                obstacle_height_m: 5.0,
                freq_ghz: 3.0,
                d1_m: 1000.0,
                d2_m: 2000.0,
            },
            FormulaRequest::ChaffCloudRcs {
                wavelength_m: 0.1,
                dipole_count: 10,
            },
            FormulaRequest::BlindRange {
                pulse_width_us: 1.0,
                dead_time_us: 0.0,
                recovery_time_us: 0.0,
            },
        ];
        for request in requests {
            assert!(lookup(request.id()).is_some(), "{}", request.id());
            assert!(request.evaluate().is_valid(), "{}", request.id());
        }
    }
}
