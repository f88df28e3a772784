use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prodcat::shell::{run_batch, ShellError};

#[derive(Debug, Parser)]
#[command(name = "prodcat")]
#[command(about = "Group supermarket listings that denote the same product", version)]
struct Cli {
    /// JSON file with the raw product listings.
    #[arg(default_value = "products.json")]
    input: PathBuf,

    /// Destination for the grouped categories.
    #[arg(default_value = "categorias.json")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run_batch(&cli.input, &cli.output) {
        Ok(categories) => {
            println!(
                "{} categories written to {}",
                categories.len(),
                cli.output.display()
            );
            for category in &categories {
                println!("  {} ({})", category.category, category.count);
            }
            ExitCode::SUCCESS
        }
        Err(ShellError::InputNotFound(path)) => {
            eprintln!("prodcat: input file not found: {path}");
            eprintln!("usage: prodcat [INPUT] [OUTPUT]");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("prodcat: {err}");
            ExitCode::FAILURE
        }
    }
}
