use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sharkclean::{
    analyze, execute_render, filter_unresolved, normalize, read_records, require_fields,
    CleaningReport, Field, FileFormat, FilterConfig, NormalizerConfig, PipelineConfig,
    RenderConfig,
};

#[derive(Parser)]
#[command(name = "sharkclean")]
#[command(author, version, about = "Shark incident record cleaning pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an incident file and drop records with unresolved species
    Clean {
        /// Input incident file (.json or .csv)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the cleaned records
        #[arg(short, long)]
        output: PathBuf,

        /// Output format (defaults to the output file extension)
        #[arg(long)]
        format: Option<FileFormat>,

        /// Output file for the run report (JSON)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Keep bookkeeping columns
        #[arg(long)]
        no_prune: bool,

        /// Do not derive the Ocean column
        #[arg(long)]
        no_ocean: bool,

        /// Normalize records in parallel
        #[arg(long)]
        parallel: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report how each column would resolve without writing anything
    Analyze {
        /// Input incident file (.json or .csv)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            format,
            report,
            no_prune,
            no_ocean,
            parallel,
            verbose,
        } => {
            setup_logging(verbose);
            let config = PipelineConfig {
                normalizer: NormalizerConfig {
                    add_ocean: !no_ocean,
                    prune_columns: !no_prune,
                    parallel,
                    ..Default::default()
                },
                filter: FilterConfig::default(),
            };
            let render_config = RenderConfig {
                format,
                write_report: report.is_some(),
            };
            clean_records(input, output, report, &config, &render_config)
        }
        Commands::Analyze { input, verbose } => {
            setup_logging(verbose);
            analyze_records(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder().with_max_level(level);
    match EnvFilter::try_from_default_env() {
        Ok(filter) => {
            tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish()).ok()
        }
        Err(_) => tracing::subscriber::set_global_default(builder.finish()).ok(),
    };
}

fn clean_records(
    input: PathBuf,
    output: PathBuf,
    report: Option<PathBuf>,
    config: &PipelineConfig,
    render_config: &RenderConfig,
) -> Result<()> {
    info!("Loading incidents from {:?}", input);
    let mut records = read_records(&input).context("Failed to read input records")?;
    require_fields(&records, &[Field::Species])?;

    info!(
        "Loaded {} records with {} columns",
        records.len(),
        records.columns.len()
    );

    // Stage 0: Column normalization
    info!("Stage 0: Normalizing columns...");
    let norm_result = normalize(&mut records, &config.normalizer);
    if !norm_result.skipped.is_empty() {
        info!("Columns not present: {:?}", norm_result.skipped);
    }

    // Stage 1: Row filter, only after every Species cell is normalized
    info!("Stage 1: Filtering unresolved species...");
    let filter_result = filter_unresolved(&mut records, &config.filter);

    // Stage 2: Rendering
    info!("Stage 2: Rendering output...");
    let cleaning_report = CleaningReport::new(&norm_result, &filter_result);
    let render_result = execute_render(
        &records,
        &cleaning_report,
        &output,
        report.as_deref(),
        render_config,
    )?;

    info!("Output written to {:?}", render_result.output_path);
    if let Some(report_path) = render_result.report_path {
        info!("Run report written to {:?}", report_path);
    }

    let drop_pct = if norm_result.records > 0 {
        filter_result.dropped as f64 / norm_result.records as f64 * 100.0
    } else {
        0.0
    };
    info!(
        "Complete: {} records kept, {} dropped ({:.1}%), {} unmapped countries",
        filter_result.kept,
        filter_result.dropped,
        drop_pct,
        norm_result.unmapped_countries.len()
    );

    Ok(())
}

fn analyze_records(input: PathBuf) -> Result<()> {
    info!("Analyzing incidents from {:?}", input);
    let records = read_records(&input).context("Failed to read input records")?;
    let analysis = analyze(&records, &PipelineConfig::default());

    println!("Incident Analysis");
    println!("=================");
    println!("Total records: {}", analysis.records);
    println!("Columns: {}", records.columns.len());
    if !analysis.missing.is_empty() {
        let missing: Vec<&str> = analysis.missing.iter().map(|f| f.column()).collect();
        println!("Missing columns: {}", missing.join(", "));
    }
    println!();

    println!("Column Resolution");
    println!("-----------------");
    for stats in &analysis.columns {
        println!(
            "{:<10} {:>6} raw -> {:>6} canonical, {:>6} unresolved",
            stats.field.column(),
            stats.distinct_raw,
            stats.distinct_canonical,
            stats.unresolved
        );
    }
    println!();

    println!("Row Filter");
    println!("----------");
    println!("Would keep: {}", analysis.filter.kept);
    println!("Would drop: {}", analysis.filter.dropped);
    for (label, count) in &analysis.filter.dropped_by_label {
        println!("  {:<20} {}", label, count);
    }

    Ok(())
}
