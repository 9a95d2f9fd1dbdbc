use crate::report::model::{PatternSummary, SurfaceExport, WorksheetReport};
use crate::workflow::config::{PatternRequest, WorksheetConfig};
use ewcore::catalog::Evaluation;
use ewcore::pattern::{AngularGrid, PatternGrid, PatternParams, PatternSynthesizer};
use ewcore::telemetry::{LogManager, MetricsRecorder};
use ewcore::FormulaResult;
use std::sync::Arc;

/// Evaluates worksheets through the core and keeps host-side counters.
#[derive(Clone)]
pub struct Runner {
    config: WorksheetConfig,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: WorksheetConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: LogManager::new("ewcalc::runner"),
        }
    }

    pub fn config(&self) -> &WorksheetConfig {
        &self.config
    }

    pub fn evaluate_formulas(&self) -> Vec<Evaluation> {
        self.config
            .formulas
            .iter()
            .map(|request| {
                let evaluation = request.evaluate();
                self.metrics.record_evaluation(evaluation.is_valid());
                evaluation
            })
            .collect()
    }

    /// Synthesizes one pattern. Domain violations come back as `Err` so the
    /// caller can render them; they are not host errors.
    pub fn synthesize(
        &self,
        request: &PatternRequest,
    ) -> FormulaResult<(PatternParams, PatternGrid)> {
        let params = PatternParams::from_frequency(
            request.freq_ghz,
            request.aperture_m,
            request.element_count,
            request.front_back_db,
        )?;
        let grid = AngularGrid::new(request.theta_samples, request.phi_samples)?;
        let pattern = PatternSynthesizer::new(grid).synthesize(request.antenna, &params)?;
        self.metrics.record_pattern();
        Ok((params, pattern))
    }

    pub fn summarize(&self, request: &PatternRequest) -> (PatternSummary, Option<SurfaceExport>) {
        match self.synthesize(request) {
            Ok((params, pattern)) => {
                let surface = SurfaceExport::new(pattern.archetype, &pattern.to_cartesian());
                (PatternSummary::from_grid(&pattern, params.wavelength_m), Some(surface))
            }
            Err(error) => {
                self.logger
                    .warn(&format!("pattern {} not synthesized: {}", request.antenna.id(), error));
                (PatternSummary::invalid(request.antenna, error), None)
            }
        }
    }

    pub fn execute(&self) -> WorksheetReport {
        let evaluations = self.evaluate_formulas();
        let patterns = self
            .config
            .patterns
            .iter()
            .map(|request| self.summarize(request).0)
            .collect();
        let metrics = self.metrics.snapshot();
        self.logger.record(&format!(
            "worksheet evaluated: {} formulas ({} undefined), {} patterns",
            metrics.evaluated, metrics.domain_violations, metrics.patterns
        ));
        WorksheetReport {
            title: self.config.title.clone(),
            evaluations,
            patterns,
            metrics,
        }
    }
}
