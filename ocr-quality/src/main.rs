//! OCR Quality Assessment CLI

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ocr_quality::{
    assessment::OcrQualityAssessor,
    config::Config,
    reporting::{print_pair_report, write_json},
};

#[derive(Parser)]
#[command(name = "ocr-quality")]
#[command(about = "Score OCR output against ground-truth text at character, word and line level")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a single ground-truth / OCR output pair
    Compare {
        /// Ground-truth text file
        #[arg(long)]
        reference: PathBuf,

        /// OCR output text file
        #[arg(long)]
        candidate: PathBuf,

        /// Write the result as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Assess every ground-truth file in a directory against its OCR output
    Batch {
        /// Directory holding ground-truth files
        #[arg(long)]
        reference_dir: PathBuf,

        /// Directory holding OCR output files
        #[arg(long)]
        candidate_dir: PathBuf,

        /// JSON report path (default from configuration)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Extension of ground-truth files, without the dot
        #[arg(long)]
        extension: Option<String>,

        /// Prefix stripped from ground-truth names to find the OCR output
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Generate sample configuration
    InitConfig {
        /// Output path for configuration file
        #[arg(short, long, default_value = "config/ocr-quality.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("ocr_quality=debug,info")
    } else {
        EnvFilter::new("ocr_quality=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default(),
    };

    match cli.command {
        Commands::Compare {
            reference,
            candidate,
            output,
        } => {
            compare(&config, reference, candidate, output)?;
        }

        Commands::Batch {
            reference_dir,
            candidate_dir,
            report,
            extension,
            prefix,
        } => {
            run_batch(config, reference_dir, candidate_dir, report, extension, prefix)?;
        }

        Commands::InitConfig { output } => {
            init_config(output)?;
        }
    }

    Ok(())
}

fn compare(
    config: &Config,
    reference: PathBuf,
    candidate: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Ground truth: {}", reference.display());
    println!("OCR output:   {}", candidate.display());
    println!();

    let assessor = OcrQualityAssessor::from_config(config);
    let result = assessor.assess_pair(&reference, &candidate)?;
    print_pair_report(&result);

    if let Some(path) = output {
        write_json(&result, &path)?;
        println!("\nDetailed report saved to: {}", path.display());
    }

    Ok(())
}

fn run_batch(
    mut config: Config,
    reference_dir: PathBuf,
    candidate_dir: PathBuf,
    report: Option<PathBuf>,
    extension: Option<String>,
    prefix: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(extension) = extension {
        config.batch.extension = extension.trim_start_matches('.').to_string();
    }
    if let Some(prefix) = prefix {
        config.batch.reference_prefix = prefix;
    }
    let report_path = report.unwrap_or_else(|| PathBuf::from(&config.batch.report_file));

    let assessor = OcrQualityAssessor::from_config(&config);
    assessor.batch_assess_and_report(&reference_dir, &candidate_dir, &report_path)?;
    println!("\nReport saved to: {}", report_path.display());

    Ok(())
}

fn init_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    // Ensure parent directory exists
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    config.save_toml(&output)?;
    println!("Configuration written to: {}", output.display());
    Ok(())
}
