use std::f64::consts::{FRAC_PI_2, LN_2};

use crate::pattern::archetype::AntennaArchetype;
use crate::pattern::synthesizer::PatternParams;

/// Gaussian mainlobe whose −3 dB point sits at half the beamwidth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianTaper {
    beamwidth_deg: f64,
    theta0: f64,
}

impl GaussianTaper {
    pub fn new(beamwidth_deg: f64) -> Self {
        let beamwidth_deg = beamwidth_deg.max(1e-3);
        let theta0 = (beamwidth_deg / 2.0).to_radians() / LN_2.sqrt();
        Self { beamwidth_deg, theta0 }
    }

    pub fn beamwidth_deg(&self) -> f64 {
        self.beamwidth_deg
    }

    pub fn gain(&self, theta: f64) -> f64 {
        (-(theta / self.theta0).powi(2)).exp()
    }
}

/// Empirical half-power beamwidth `scale·λ/D`, clamped to `[1°, 180°]`.
pub fn beamwidth_from_aperture(aperture_m: f64, wavelength_m: f64, scale: f64) -> f64 {
    if !(aperture_m > 0.0 && wavelength_m > 0.0) {
        return 180.0;
    }
    (scale * wavelength_m / aperture_m).clamp(1.0, 180.0)
}

/// Azimuthal weighting `floor + depth·cos²φ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzimuthWeight {
    floor: f64,
    depth: f64,
}

impl AzimuthWeight {
    pub const UNIFORM: AzimuthWeight = AzimuthWeight { floor: 1.0, depth: 0.0 };

    pub const fn new(floor: f64, depth: f64) -> Self {
        Self { floor, depth }
    }

    pub fn weight(&self, phi: f64) -> f64 {
        self.floor + self.depth * phi.cos().powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DipoleVariant {
    Plain,
    Reflector,
    Folded,
    Biconical,
    Loop,
}

/// Angular shaping function resolved for one archetype and parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Uniform,
    Dipole(DipoleVariant),
    /// Dipole lobe over a ground plane; the lower hemisphere is scaled by
    /// `back_linear`.
    Monopole { back_linear: f64 },
    Mainlobe { taper: GaussianTaper, azimuth: AzimuthWeight },
    Lindenblad,
}

impl Shape {
    pub fn resolve(archetype: AntennaArchetype, params: &PatternParams) -> Self {
        use AntennaArchetype::*;

        let wavelength = params.wavelength_m;
        let aperture = params.aperture_m;
        let elements = f64::from(params.element_count.max(1));
        let mainlobe = |beamwidth_deg: f64, azimuth: AzimuthWeight| Shape::Mainlobe {
            taper: GaussianTaper::new(beamwidth_deg),
            azimuth,
        };

        match archetype {
            Isotropic => Shape::Uniform,
            HalfwaveDipole => Shape::Dipole(DipoleVariant::Plain),
            PcbDipoleReflector => Shape::Dipole(DipoleVariant::Reflector),
            FoldedDipole => Shape::Dipole(DipoleVariant::Folded),
            Biconical => Shape::Dipole(DipoleVariant::Biconical),
            RectangleLoop => Shape::Dipole(DipoleVariant::Loop),
            QuarterWaveMonopole => Shape::Monopole {
                back_linear: params.back_linear(),
            },
            Patch | TaperedSlot => mainlobe(
                beamwidth_from_aperture(aperture, wavelength, 65.0),
                AzimuthWeight::new(0.3, 1.0),
            ),
            PyramidalHorn | ConicalHorn => mainlobe(
                beamwidth_from_aperture(aperture, wavelength, 55.0),
                AzimuthWeight::UNIFORM,
            ),
            Parabolic => mainlobe(
                beamwidth_from_aperture(aperture, wavelength, 70.0),
                AzimuthWeight::UNIFORM,
            ),
            Helix => mainlobe(
                (52.0 * (wavelength / aperture.max(wavelength)).sqrt()).min(80.0),
                AzimuthWeight::UNIFORM,
            ),
            Yagi => mainlobe((100.0 / elements).max(12.0), AzimuthWeight::new(0.5, 1.0)),
            PhasedArray => mainlobe(
                (50.0 * wavelength / (elements * aperture).max(wavelength)).max(2.0),
                AzimuthWeight::UNIFORM,
            ),
            LogPeriodic => mainlobe(60.0, AzimuthWeight::new(0.7, 0.3)),
            Lindenblad => Shape::Lindenblad,
        }
    }

    /// Half-power beamwidth of the mainlobe, for directive shapes only.
    pub fn beamwidth_deg(&self) -> Option<f64> {
        match self {
            Shape::Mainlobe { taper, .. } => Some(taper.beamwidth_deg()),
            _ => None,
        }
    }

    /// Unnormalized intensity before front-to-back shaping.
    pub fn intensity(&self, theta: f64, phi: f64) -> f64 {
        let sin2 = theta.sin().powi(2);
        match *self {
            Shape::Uniform => 1.0,
            Shape::Dipole(variant) => match variant {
                DipoleVariant::Plain => sin2,
                DipoleVariant::Reflector => sin2 * (1.0 + 0.5 * phi.cos()),
                DipoleVariant::Folded => sin2 * 1.2,
                DipoleVariant::Biconical => sin2.powf(0.8),
                DipoleVariant::Loop => sin2 * (theta.cos().powi(2) + 0.3),
            },
            Shape::Monopole { back_linear } => {
                if theta <= FRAC_PI_2 {
                    sin2
                } else {
                    sin2 * back_linear
                }
            }
            Shape::Mainlobe { taper, azimuth } => taper.gain(theta) * azimuth.weight(phi),
            Shape::Lindenblad => sin2 * 0.8 + 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(wavelength_m: f64, aperture_m: f64, element_count: u32) -> PatternParams {
        PatternParams {
            wavelength_m,
            aperture_m,
            element_count,
            front_back_db: 10.0,
        }
    }

    #[test]
    fn gaussian_taper_is_half_power_at_half_beamwidth() {
        let taper = GaussianTaper::new(30.0);
        assert_abs_diff_eq!(taper.gain(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(taper.gain(15f64.to_radians()), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn aperture_beamwidth_is_clamped() {
        assert_abs_diff_eq!(beamwidth_from_aperture(1.0, 0.03, 70.0), 2.1, epsilon = 1e-12);
        assert_eq!(beamwidth_from_aperture(100.0, 0.03, 70.0), 1.0);
        assert_eq!(beamwidth_from_aperture(0.001, 0.3, 70.0), 180.0);
        assert_eq!(beamwidth_from_aperture(0.0, 0.03, 70.0), 180.0);
    }

    #[test]
    fn yagi_beam_narrows_with_elements_down_to_twelve_degrees() {
        let few = Shape::resolve(AntennaArchetype::Yagi, &params(0.03, 0.03, 4));
        let many = Shape::resolve(AntennaArchetype::Yagi, &params(0.03, 0.03, 64));
        assert_eq!(few.beamwidth_deg(), Some(25.0));
        assert_eq!(many.beamwidth_deg(), Some(12.0));
    }

    #[test]
    fn phased_array_beam_narrows_with_aperture() {
        let small = Shape::resolve(AntennaArchetype::PhasedArray, &params(0.03, 0.03, 4));
        let large = Shape::resolve(AntennaArchetype::PhasedArray, &params(0.03, 0.06, 4));
        assert_abs_diff_eq!(small.beamwidth_deg().unwrap(), 12.5, epsilon = 1e-12);
        assert_abs_diff_eq!(large.beamwidth_deg().unwrap(), 6.25, epsilon = 1e-12);
    }

    #[test]
    fn helix_beamwidth_caps_at_electrically_small_sizes() {
        let small = Shape::resolve(AntennaArchetype::Helix, &params(0.03, 0.01, 1));
        assert_abs_diff_eq!(small.beamwidth_deg().unwrap(), 52.0, epsilon = 1e-12);
        let large = Shape::resolve(AntennaArchetype::Helix, &params(0.03, 0.12, 1));
        assert_abs_diff_eq!(large.beamwidth_deg().unwrap(), 26.0, epsilon = 1e-12);
    }

    #[test]
    fn dipole_family_modifiers() {
        let theta = std::f64::consts::FRAC_PI_2;
        let plain = Shape::Dipole(DipoleVariant::Plain);
        let folded = Shape::Dipole(DipoleVariant::Folded);
        let reflector = Shape::Dipole(DipoleVariant::Reflector);
        assert_abs_diff_eq!(plain.intensity(theta, 0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(folded.intensity(theta, 0.0), 1.2, epsilon = 1e-15);
        assert_abs_diff_eq!(reflector.intensity(theta, 0.0), 1.5, epsilon = 1e-15);
        assert_abs_diff_eq!(reflector.intensity(theta, std::f64::consts::PI), 0.5, epsilon = 1e-15);
        assert_eq!(plain.beamwidth_deg(), None);
    }

    #[test]
    fn monopole_suppresses_lower_hemisphere() {
        let shape = Shape::resolve(AntennaArchetype::QuarterWaveMonopole, &params(0.03, 0.03, 1));
        let upper = shape.intensity(1.0, 0.0);
        let lower = shape.intensity(std::f64::consts::PI - 1.0, 0.0);
        assert_abs_diff_eq!(lower / upper, 0.1, epsilon = 1e-12);
    }
}
