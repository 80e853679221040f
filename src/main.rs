//! palabras-gen CLI
//!
//! 引数なしで実行すると、`<crate>/data/raw`の`*.xlsx`を
//! `<crate>/public/assets/palabras.json`に変換します。

use clap::Parser;
use palabras_gen::{default_input_dir, default_output_path, ConverterBuilder, WordGenError};
use std::path::PathBuf;
use std::process;
use tracing::{error, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Flatten word-game spreadsheets into a single JSON array
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing the spreadsheet files [default: <crate>/data/raw]
    #[arg(short, long, env = "PALABRAS_INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Output JSON file [default: <crate>/public/assets/palabras.json]
    #[arg(short, long, env = "PALABRAS_OUTPUT")]
    output: Option<PathBuf>,

    /// File extensions to read
    #[arg(short, long, value_delimiter = ',', default_value = "xlsx")]
    extensions: Vec<String>,
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), WordGenError> {
    let converter = ConverterBuilder::new()
        .with_input_dir(args.input_dir.unwrap_or_else(default_input_dir))
        .with_output_path(args.output.unwrap_or_else(default_output_path))
        .with_extensions(&args.extensions)
        .build()?;

    let summary = converter.run()?;
    if !summary.is_clean() {
        warn!(
            "{} of {} files were skipped",
            summary.failures.len(),
            summary.files_found
        );
    }
    Ok(())
}
