mod analysis;
mod cli;
mod error;
mod model;
mod output;
mod reader;

use crate::error::Result;
use chrono::Local;
use clap::Parser;
use miette::IntoDiagnostic;

/// Verify a mother/father/offspring trio against Mendelian inheritance.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Mother genotype table (CSV).
    #[arg(long, value_hint = clap::ValueHint::FilePath, default_value = "data/Mother.csv")]
    mother: String,

    /// Father genotype table (CSV).
    #[arg(long, value_hint = clap::ValueHint::FilePath, default_value = "data/Father.csv")]
    father: String,

    /// Offspring genotype table (CSV).
    #[arg(long, value_hint = clap::ValueHint::FilePath, default_value = "data/Offspring.csv")]
    offspring: String,

    /// Output directory.
    #[arg(
        short,
        long,
        value_hint = clap::ValueHint::DirPath,
        default_value_t = format!("parentcheck_output_{}", Local::now().format("%Y%m%d_%H%M%S"))
    )]
    output_directory: String,
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.output_directory)
        .map_err(|e| error::CustomError::OutputDir { source: e })?;

    let input_spec = cli::build_input_spec(&args);
    input_spec.print_paths();

    let profiles = input_spec.load_profiles()?;
    cli::run(&profiles, input_spec.output_dir())?;
    Ok(())
}

fn main() -> miette::Result<()> {
    try_main().into_diagnostic()
}
