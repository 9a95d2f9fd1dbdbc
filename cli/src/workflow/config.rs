use anyhow::{bail, Context};
use ewcore::catalog::{lookup, FormulaRequest};
use ewcore::pattern::{AngularGrid, AntennaArchetype};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;

fn default_decimals() -> usize {
    2
}

/// A batch of formula evaluations and pattern syntheses loaded from YAML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorksheetConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    #[serde(default)]
    pub formulas: Vec<FormulaRequest>,
    #[serde(default)]
    pub patterns: Vec<PatternRequest>,
}

impl WorksheetConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading worksheet {}", path_ref.display()))?;
        let config: WorksheetConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing worksheet {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_request(request: FormulaRequest) -> Self {
        Self {
            title: None,
            decimals: default_decimals(),
            formulas: vec![request],
            patterns: Vec::new(),
        }
    }

    pub fn from_pattern(pattern: PatternRequest) -> Self {
        Self {
            title: None,
            decimals: default_decimals(),
            formulas: Vec::new(),
            patterns: vec![pattern],
        }
    }
}

fn default_element_count() -> u32 {
    8
}

fn default_front_back_db() -> f64 {
    10.0
}

fn default_theta_samples() -> usize {
    AngularGrid::DEFAULT_THETA_SAMPLES
}

fn default_phi_samples() -> usize {
    AngularGrid::DEFAULT_PHI_SAMPLES
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternRequest {
    pub antenna: AntennaArchetype,
    pub freq_ghz: f64,
    /// Defaults to one wavelength.
    #[serde(default)]
    pub aperture_m: Option<f64>,
    #[serde(default = "default_element_count")]
    pub element_count: u32,
    #[serde(default = "default_front_back_db")]
    pub front_back_db: f64,
    #[serde(default = "default_theta_samples")]
    pub theta_samples: usize,
    #[serde(default = "default_phi_samples")]
    pub phi_samples: usize,
}

impl PatternRequest {
    pub fn new(antenna: AntennaArchetype, freq_ghz: f64) -> Self {
        Self {
            antenna,
            freq_ghz,
            aperture_m: None,
            element_count: default_element_count(),
            front_back_db: default_front_back_db(),
            theta_samples: default_theta_samples(),
            phi_samples: default_phi_samples(),
        }
    }
}

fn parse_scalar(raw: &str) -> Value {
    if let Ok(integer) = raw.parse::<i64>() {
        return Value::from(integer);
    }
    match raw.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(number) => Value::Number(number),
        None => Value::String(raw.to_string()),
    }
}

/// Builds a request from a formula id and `name=value` assignments.
pub fn parse_request(formula: &str, assignments: &[String]) -> anyhow::Result<FormulaRequest> {
    if lookup(formula).is_none() {
        bail!("unknown formula '{}' (see `ewcalc list`)", formula);
    }
    let mut fields = Map::new();
    fields.insert("formula".to_string(), Value::String(formula.to_string()));
    for assignment in assignments {
        let Some((name, raw)) = assignment.split_once('=') else {
            bail!("expected name=value, got '{}'", assignment);
        };
        fields.insert(name.trim().to_string(), parse_scalar(raw.trim()));
    }
    serde_json::from_value(Value::Object(fields))
        .with_context(|| format!("building inputs for formula {}", formula))
}
