use anyhow::Context;
use clap::{Parser, Subcommand};
use ewcore::pattern::AntennaArchetype;
use report::model::SurfaceExport;
use report::render::{render_catalog, render_evaluation, render_pattern, render_worksheet};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use workflow::config::{parse_request, PatternRequest, WorksheetConfig};
use workflow::runner::Runner;

mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Radar and EW reference calculator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List formulas and antenna archetypes
    List,
    /// Evaluate one formula from name=value inputs
    Eval {
        formula: String,
        inputs: Vec<String>,
        #[arg(long, default_value_t = 2)]
        decimals: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Evaluate every formula and pattern in a YAML worksheet
    Worksheet {
        path: PathBuf,
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Append the text report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Synthesize an antenna pattern
    Pattern {
        #[arg(long)]
        antenna: AntennaArchetype,
        #[arg(long)]
        freq_ghz: f64,
        #[arg(long)]
        aperture_m: Option<f64>,
        #[arg(long, default_value_t = 8)]
        elements: u32,
        #[arg(long, default_value_t = 10.0)]
        front_back_db: f64,
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Write the Cartesian surface as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn append_report(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("writing report {}", path.display()))?;
    log::info!("appended report to {}", path.display());
    Ok(())
}

/// Writes the surface as JSON. Returns `false`, with a warning, when the
/// pattern could not be synthesized and there is nothing to write.
fn write_surface(path: &Path, surface: Option<&SurfaceExport>) -> anyhow::Result<bool> {
    let Some(surface) = surface else {
        log::warn!(
            "pattern was not synthesized; surface {} not written",
            path.display()
        );
        return Ok(false);
    };
    let contents = serde_json::to_string(surface).context("serializing pattern surface")?;
    fs::write(path, contents).with_context(|| format!("writing surface {}", path.display()))?;
    Ok(true)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::List => print!("{}", render_catalog()),
        Command::Eval {
            formula,
            inputs,
            decimals,
            json,
        } => {
            let request = parse_request(&formula, &inputs)?;
            let runner = Runner::new(WorksheetConfig::from_request(request));
            for evaluation in runner.evaluate_formulas() {
                if json {
                    println!("{}", serde_json::to_string_pretty(&evaluation)?);
                } else {
                    println!("{}", render_evaluation(&evaluation, decimals));
                }
            }
        }
        Command::Worksheet { path, json, report } => {
            let config = WorksheetConfig::load(&path)?;
            let decimals = config.decimals;
            let result = Runner::new(config).execute();
            let text = render_worksheet(&result, decimals);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", text);
            }
            if let Some(report_path) = report {
                append_report(&report_path, &text)?;
            }
        }
        Command::Pattern {
            antenna,
            freq_ghz,
            aperture_m,
            elements,
            front_back_db,
            json,
            output,
        } => {
            let mut request = PatternRequest::new(antenna, freq_ghz);
            request.aperture_m = aperture_m;
            request.element_count = elements;
            request.front_back_db = front_back_db;
            let runner = Runner::new(WorksheetConfig::from_pattern(request.clone()));
            let (summary, surface) = runner.summarize(&request);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", render_pattern(&summary, runner.config().decimals));
            }
            if let Some(path) = output {
                write_surface(&path, surface.as_ref())?;
            }
        }
    }

    Ok(())
}
