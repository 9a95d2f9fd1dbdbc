use ewcore::catalog::Evaluation;
use ewcore::pattern::{AntennaArchetype, CartesianSurface, PatternGrid};
use ewcore::telemetry::Metrics;
use ewcore::DomainError;
use ndarray::Array2;
use serde::Serialize;

/// Headline figures of one synthesized pattern.
#[derive(Debug, Clone, Serialize)]
pub struct PatternSummary {
    pub antenna: AntennaArchetype,
    pub label: &'static str,
    pub wavelength_m: Option<f64>,
    pub grid: (usize, usize),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beamwidth_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_direction_deg: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_rear_peak_ratio_db: Option<f64>,
    pub degenerate: bool,
    pub typical_spec: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DomainError>,
}

impl PatternSummary {
    pub fn from_grid(grid: &PatternGrid, wavelength_m: f64) -> Self {
        Self {
            antenna: grid.archetype,
            label: grid.archetype.label(),
            wavelength_m: Some(wavelength_m),
            grid: grid.gain.dim(),
            beamwidth_deg: grid.beamwidth_deg,
            peak_direction_deg: grid.peak_direction_deg(),
            front_rear_peak_ratio_db: grid.front_rear_peak_ratio_db(),
            degenerate: grid.is_degenerate(),
            typical_spec: grid.archetype.typical_spec(),
            error: None,
        }
    }

    pub fn invalid(antenna: AntennaArchetype, error: DomainError) -> Self {
        Self {
            antenna,
            label: antenna.label(),
            wavelength_m: None,
            grid: (0, 0),
            beamwidth_deg: None,
            peak_direction_deg: None,
            front_rear_peak_ratio_db: None,
            degenerate: true,
            typical_spec: antenna.typical_spec(),
            error: Some(error),
        }
    }
}

fn rows(values: &Array2<f64>) -> Vec<Vec<f64>> {
    values.outer_iter().map(|row| row.to_vec()).collect()
}

/// Renderable surface in row-major nested vectors (rows follow φ).
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceExport {
    pub antenna: AntennaArchetype,
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
    pub color_db: Vec<Vec<f64>>,
}

impl SurfaceExport {
    pub fn new(antenna: AntennaArchetype, surface: &CartesianSurface) -> Self {
        Self {
            antenna,
            x: rows(&surface.x),
            y: rows(&surface.y),
            z: rows(&surface.z),
            color_db: rows(&surface.color_db),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorksheetReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub evaluations: Vec<Evaluation>,
    pub patterns: Vec<PatternSummary>,
    pub metrics: Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewcore::pattern::{PatternParams, PatternSynthesizer};

    #[test]
    fn surface_export_keeps_grid_shape() {
        let params = PatternParams::from_frequency(10.0, None, 8, 10.0).unwrap();
        let grid = PatternSynthesizer::default()
            .synthesize(AntennaArchetype::Patch, &params)
            .unwrap();
        let export = SurfaceExport::new(grid.archetype, &grid.to_cartesian());
        assert_eq!(export.x.len(), 181);
        assert_eq!(export.z[0].len(), 90);
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["antenna"], "patch");
    }

    #[test]
    fn invalid_summary_carries_the_reason() {
        let summary = PatternSummary::invalid(
            AntennaArchetype::Yagi,
            DomainError::NotPositive {
                quantity: "freq_ghz",
                value: 0.0,
            },
        );
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["error"]["quantity"], "freq_ghz");
        assert!(json.get("beamwidth_deg").is_none());
    }
}
