use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use triax_spectrum::{
    Axis, Command, Dataset, DatasetConfig, IngestOptions, Outcome, Session, SpectrumResult,
};

#[derive(Parser)]
#[command(
    name = "triax",
    version,
    about = "Inspect the spectrum of three-axis sensor recordings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Three-column delimited file without header; synthetic data when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Sampling period in seconds
    #[arg(long, default_value_t = 0.001)]
    period: f64,
    /// Column delimiter of --input
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// Keep each column's DC offset instead of removing it
    #[arg(long)]
    keep_dc: bool,
    /// Noise seed for the synthetic data
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the amplitude spectrum of one or all axes as JSON
    Spectrum {
        #[command(flatten)]
        source: SourceArgs,
        /// Axis to analyse (x, y, z or column index 0-2); all axes when omitted
        #[arg(long)]
        axis: Option<String>,
        /// Window start in seconds
        #[arg(long)]
        start: Option<f64>,
        /// Window end in seconds (exclusive)
        #[arg(long)]
        end: Option<f64>,
    },
    /// Print sample count, RMS and dominant frequency per axis as JSON
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Serialize)]
struct Peak {
    frequency: f64,
    magnitude: f64,
}

#[derive(Serialize)]
struct AxisSpectrum {
    axis: Axis,
    start_index: usize,
    end_index: usize,
    peak: Option<Peak>,
    #[serde(flatten)]
    spectrum: SpectrumResult,
}

#[derive(Serialize)]
struct AxisSummary {
    axis: Axis,
    rms: f64,
    peak: Option<Peak>,
}

#[derive(Serialize)]
struct Summary {
    samples: usize,
    sampling_period: f64,
    duration: f64,
    axes: Vec<AxisSummary>,
}

fn peak_of(spectrum: &SpectrumResult) -> Option<Peak> {
    spectrum
        .peak()
        .map(|(frequency, magnitude)| Peak { frequency, magnitude })
}

fn load_dataset(source: &SourceArgs) -> Result<Dataset> {
    match &source.input {
        Some(path) => {
            if !source.delimiter.is_ascii() {
                bail!("delimiter must be a single ASCII character");
            }
            let options = IngestOptions {
                delimiter: source.delimiter as u8,
                remove_dc: !source.keep_dc,
            };
            let mut dataset = Dataset::empty(source.period)?;
            dataset
                .ingest_with(path, source.period, &options)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok(dataset)
        }
        None => Ok(Dataset::new(DatasetConfig {
            sampling_period: source.period,
            seed: source.seed,
            ..DatasetConfig::default()
        })?),
    }
}

fn run_spectrum(
    source: &SourceArgs,
    axis: Option<&str>,
    start: Option<f64>,
    end: Option<f64>,
) -> Result<Vec<AxisSpectrum>> {
    let dataset = load_dataset(source)?;
    let duration = dataset.duration();
    let mut session = Session::new(dataset);

    if let Some(axis) = axis {
        let selected: Axis = axis.parse()?;
        for other in Axis::ALL.into_iter().filter(|&a| a != selected) {
            session.dispatch(Command::ToggleAxis(other))?;
        }
    }

    if start.is_some() || end.is_some() {
        let start = start.unwrap_or(0.0);
        let end = end.unwrap_or(duration);
        if session.dispatch(Command::SelectRange { start, end })? == Outcome::Ignored {
            bail!("window [{start}, {end}) s contains no samples");
        }
    }

    let selection = session.selection();
    let spectra = session.visible_spectra()?;

    Ok(spectra
        .into_iter()
        .map(|(axis, spectrum)| AxisSpectrum {
            axis,
            start_index: selection.start,
            end_index: selection.end,
            peak: peak_of(&spectrum),
            spectrum,
        })
        .collect())
}

fn run_summary(source: &SourceArgs) -> Result<Summary> {
    let dataset = load_dataset(source)?;

    let axes = Axis::ALL
        .into_iter()
        .map(|axis| -> Result<AxisSummary> {
            Ok(AxisSummary {
                axis,
                rms: dataset.rms(axis)?,
                peak: peak_of(&dataset.spectrum(axis, ..)?),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Summary {
        samples: dataset.len(),
        sampling_period: dataset.sampling_period(),
        duration: dataset.duration(),
        axes,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json = match &cli.command {
        Commands::Spectrum {
            source,
            axis,
            start,
            end,
        } => serde_json::to_string_pretty(&run_spectrum(source, axis.as_deref(), *start, *end)?)?,
        Commands::Summary { source } => serde_json::to_string_pretty(&run_summary(source)?)?,
    };

    println!("{json}");
    Ok(())
}
