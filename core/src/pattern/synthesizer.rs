use std::f64::consts::{FRAC_PI_2, PI};

use ndarray::{Array1, Array2, Zip};

use crate::formulas::wavelength_m;
use crate::math::{DecibelHelper, GridHelper};
use crate::pattern::archetype::AntennaArchetype;
use crate::pattern::shaping::Shape;
use crate::prelude::{require_non_negative, require_positive, DomainError, FormulaResult};
use crate::telemetry::log::LogManager;

/// Geometric inputs shared by every archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternParams {
    pub wavelength_m: f64,
    /// Aperture, diameter or boom length, m.
    pub aperture_m: f64,
    pub element_count: u32,
    pub front_back_db: f64,
}

impl PatternParams {
    /// Builds parameters from a carrier frequency; a missing aperture
    /// defaults to one wavelength.
    pub fn from_frequency(
        freq_ghz: f64,
        aperture_m: Option<f64>,
        element_count: u32,
        front_back_db: f64,
    ) -> FormulaResult<Self> {
        let wavelength_m = wavelength_m(freq_ghz)?;
        let params = Self {
            wavelength_m,
            aperture_m: aperture_m.unwrap_or(wavelength_m),
            element_count,
            front_back_db,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> FormulaResult<()> {
        require_positive("wavelength_m", self.wavelength_m)?;
        require_positive("aperture_m", self.aperture_m)?;
        require_positive("element_count", f64::from(self.element_count))?;
        require_non_negative("front_back_db", self.front_back_db)?;
        Ok(())
    }

    /// Rear-hemisphere scale factor `10^(−F/B/10)`.
    pub fn back_linear(&self) -> f64 {
        DecibelHelper::power_linear(-self.front_back_db)
    }
}

/// Fixed-resolution sampling of θ ∈ [0, π] and φ ∈ [0, 2π].
#[derive(Debug, Clone, PartialEq)]
pub struct AngularGrid {
    theta: Array1<f64>,
    phi: Array1<f64>,
}

impl AngularGrid {
    pub const DEFAULT_THETA_SAMPLES: usize = 90;
    pub const DEFAULT_PHI_SAMPLES: usize = 181;

    pub fn new(theta_samples: usize, phi_samples: usize) -> FormulaResult<Self> {
        for (quantity, samples) in [
            ("theta_samples", theta_samples),
            ("phi_samples", phi_samples),
        ] {
            if samples < 2 {
                return Err(DomainError::OutOfRange {
                    quantity,
                    value: samples as f64,
                    min: 2.0,
                    max: f64::INFINITY,
                });
            }
        }
        Ok(Self {
            theta: GridHelper::linspace(0.0, PI, theta_samples),
            phi: GridHelper::linspace(0.0, 2.0 * PI, phi_samples),
        })
    }

    pub fn theta(&self) -> &Array1<f64> {
        &self.theta
    }

    pub fn phi(&self) -> &Array1<f64> {
        &self.phi
    }

    /// `(rows, cols)` = `(φ samples, θ samples)`.
    pub fn dim(&self) -> (usize, usize) {
        (self.phi.len(), self.theta.len())
    }
}

impl Default for AngularGrid {
    fn default() -> Self {
        Self {
            theta: GridHelper::linspace(0.0, PI, Self::DEFAULT_THETA_SAMPLES),
            phi: GridHelper::linspace(0.0, 2.0 * PI, Self::DEFAULT_PHI_SAMPLES),
        }
    }
}

/// Normalized gain sampled on an [`AngularGrid`]. Rows follow φ and
/// columns follow θ.
#[derive(Debug, Clone)]
pub struct PatternGrid {
    pub archetype: AntennaArchetype,
    pub theta: Array2<f64>,
    pub phi: Array2<f64>,
    pub gain: Array2<f64>,
    /// Derived mainlobe beamwidth, directive archetypes only.
    pub beamwidth_deg: Option<f64>,
    /// Peak before normalization; zero or less marks a degenerate pattern.
    pub raw_peak: f64,
}

/// Cartesian surface for 3D rendering, one point per grid sample.
#[derive(Debug, Clone)]
pub struct CartesianSurface {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub z: Array2<f64>,
    /// Surface colouring `10·log10(r + 1e-6)`, dB.
    pub color_db: Array2<f64>,
}

impl PatternGrid {
    pub fn is_degenerate(&self) -> bool {
        !(self.raw_peak > 0.0)
    }

    /// Direction of the strongest sample as `(θ, φ)` in degrees.
    pub fn peak_direction_deg(&self) -> Option<(f64, f64)> {
        let mut best: Option<((usize, usize), f64)> = None;
        for (index, &value) in self.gain.indexed_iter() {
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((index, value));
            }
        }
        best.map(|(index, _)| (self.theta[index].to_degrees(), self.phi[index].to_degrees()))
    }

    /// Ratio of the front-hemisphere peak to the rear-hemisphere peak, dB.
    ///
    /// Equals the configured front-to-back ratio only for patterns whose
    /// shape is symmetric about θ = π/2; a directive mainlobe adds its own
    /// taper on top of the rear attenuation.
    pub fn front_rear_peak_ratio_db(&self) -> Option<f64> {
        let mut front = 0.0f64;
        let mut rear = 0.0f64;
        Zip::from(&self.gain).and(&self.theta).for_each(|&g, &theta| {
            if theta <= FRAC_PI_2 {
                front = front.max(g);
            } else {
                rear = rear.max(g);
            }
        });
        if front > 0.0 && rear > 0.0 {
            Some(DecibelHelper::power_db(front / rear))
        } else {
            None
        }
    }

    /// Spherical-to-Cartesian projection with `r = gain(θ, φ)`.
    pub fn to_cartesian(&self) -> CartesianSurface {
        let x = Zip::from(&self.gain)
            .and(&self.theta)
            .and(&self.phi)
            .map_collect(|&r, &theta, &phi| r * theta.sin() * phi.cos());
        let y = Zip::from(&self.gain)
            .and(&self.theta)
            .and(&self.phi)
            .map_collect(|&r, &theta, &phi| r * theta.sin() * phi.sin());
        let z = Zip::from(&self.gain)
            .and(&self.theta)
            .map_collect(|&r, &theta| r * theta.cos());
        let color_db = self.gain.mapv(|r| DecibelHelper::power_db(r + 1e-6));
        CartesianSurface { x, y, z, color_db }
    }
}

/// Maps an archetype and its parameters to a normalized pattern grid.
pub struct PatternSynthesizer {
    grid: AngularGrid,
    logger: LogManager,
}

impl PatternSynthesizer {
    pub fn new(grid: AngularGrid) -> Self {
        Self {
            grid,
            logger: LogManager::new("ewcore::pattern"),
        }
    }

    pub fn grid(&self) -> &AngularGrid {
        &self.grid
    }

    pub fn synthesize(
        &self,
        archetype: AntennaArchetype,
        params: &PatternParams,
    ) -> FormulaResult<PatternGrid> {
        params.validate()?;
        let shape = Shape::resolve(archetype, params);
        let back_linear = params.back_linear();

        let (theta, phi) = GridHelper::meshgrid(self.grid.theta.view(), self.grid.phi.view());
        let mut gain = Zip::from(&theta).and(&phi).map_collect(|&t, &p| {
            let value = shape.intensity(t, p);
            if t <= FRAC_PI_2 {
                value
            } else {
                value * back_linear
            }
        });

        let raw_peak = normalize_by_peak(&mut gain);
        let (rows, cols) = gain.dim();
        self.logger.debug(&format!(
            "Pattern {} on {}x{} grid, beamwidth {:?}, raw peak {:.4e}",
            archetype.id(),
            rows,
            cols,
            shape.beamwidth_deg(),
            raw_peak
        ));
        if !(raw_peak > 0.0) {
            self.logger.warn(&format!("Pattern {} is degenerate", archetype.id()));
        }

        Ok(PatternGrid {
            archetype,
            theta,
            phi,
            gain,
            beamwidth_deg: shape.beamwidth_deg(),
            raw_peak,
        })
    }
}

impl Default for PatternSynthesizer {
    fn default() -> Self {
        Self::new(AngularGrid::default())
    }
}

/// Divides every sample by the grid maximum and returns that maximum. A
/// maximum of zero or less leaves the samples untouched.
pub fn normalize_by_peak(values: &mut Array2<f64>) -> f64 {
    let peak = GridHelper::peak(values.view()).unwrap_or(0.0);
    if peak > 0.0 {
        values.mapv_inplace(|v| v / peak);
    }
    peak
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn x_band(front_back_db: f64) -> PatternParams {
        PatternParams::from_frequency(10.0, None, 8, front_back_db).unwrap()
    }

    #[test]
    fn default_grid_matches_visualizer_resolution() {
        let grid = AngularGrid::default();
        assert_eq!(grid.dim(), (181, 90));
        assert_abs_diff_eq!(grid.theta()[89], PI, epsilon = 1e-12);
        assert!(AngularGrid::new(1, 10).is_err());
    }

    #[test]
    fn params_validation() {
        assert!(PatternParams::from_frequency(0.0, None, 8, 10.0).is_err());
        assert!(PatternParams::from_frequency(10.0, Some(0.0), 8, 10.0).is_err());
        assert!(PatternParams::from_frequency(10.0, None, 0, 10.0).is_err());
        assert!(PatternParams::from_frequency(10.0, None, 8, -1.0).is_err());
        let params = x_band(10.0);
        assert_abs_diff_eq!(params.aperture_m, 0.03, epsilon = 1e-12);
    }

    #[test]
    fn every_archetype_is_normalized_to_unit_peak() {
        let synth = PatternSynthesizer::default();
        for archetype in AntennaArchetype::ALL {
            let pattern = synth.synthesize(archetype, &x_band(10.0)).unwrap();
            assert!(!pattern.is_degenerate());
            assert_eq!(GridHelper::peak(pattern.gain.view()), Some(1.0), "{archetype}");
            assert!(pattern.gain.iter().all(|&g| (0.0..=1.0).contains(&g)), "{archetype}");
        }
    }

    #[test]
    fn isotropic_poles_show_front_to_back_ratio() {
        let synth = PatternSynthesizer::default();
        let pattern = synth.synthesize(AntennaArchetype::Isotropic, &x_band(10.0)).unwrap();
        let front = pattern.gain[[0, 0]];
        let back = pattern.gain[[0, 89]];
        assert_abs_diff_eq!(front / back, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn dipole_mirrored_samples_show_front_to_back_ratio() {
        let synth = PatternSynthesizer::default();
        let pattern = synth.synthesize(AntennaArchetype::HalfwaveDipole, &x_band(10.0)).unwrap();
        for col in 1..45 {
            let ratio = pattern.gain[[0, col]] / pattern.gain[[0, 89 - col]];
            assert_abs_diff_eq!(ratio, 10.0, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(pattern.front_rear_peak_ratio_db().unwrap(), 10.0, epsilon = 1e-6);
    }

    #[test]
    fn horn_peak_ratio_includes_mainlobe_taper() {
        let synth = PatternSynthesizer::default();
        let pattern = synth.synthesize(AntennaArchetype::PyramidalHorn, &x_band(10.0)).unwrap();
        assert!(pattern.front_rear_peak_ratio_db().unwrap() > 10.0);
    }

    #[test]
    fn directive_patterns_peak_on_boresight() {
        let synth = PatternSynthesizer::default();
        let pattern = synth.synthesize(AntennaArchetype::Parabolic, &x_band(20.0)).unwrap();
        let (theta_deg, _) = pattern.peak_direction_deg().unwrap();
        assert_eq!(theta_deg, 0.0);
        assert_abs_diff_eq!(pattern.beamwidth_deg.unwrap(), 70.0, epsilon = 1e-9);
    }

    #[test]
    fn all_zero_grid_is_left_unnormalized() {
        let mut zeros = Array2::<f64>::zeros((3, 4));
        assert_eq!(normalize_by_peak(&mut zeros), 0.0);
        assert!(zeros.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn cartesian_projection_of_isotropic_is_a_sphere_and_hemisphere() {
        let synth = PatternSynthesizer::new(AngularGrid::new(19, 37).unwrap());
        let pattern = synth.synthesize(AntennaArchetype::Isotropic, &x_band(0.0)).unwrap();
        let surface = pattern.to_cartesian();
        Zip::from(&surface.x).and(&surface.y).and(&surface.z).for_each(|&x, &y, &z| {
            assert_abs_diff_eq!((x * x + y * y + z * z).sqrt(), 1.0, epsilon = 1e-12);
        });
        assert_abs_diff_eq!(surface.z[[0, 0]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            surface.color_db[[0, 0]],
            DecibelHelper::power_db(1.0 + 1e-6),
            epsilon = 1e-12
        );
    }
}
