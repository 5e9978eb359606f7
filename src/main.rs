use casesheet::{parse_test_cases, ReportConfig, ReportError, ReportRenderer};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "casesheet")]
#[command(version, about = "Render generated test cases as a paginated PDF report", long_about = None)]
#[command(after_help = "The input is either a JSON array of test cases or an object with a
`cases` array, as returned by the test case generator.")]
struct Cli {
    /// Test cases JSON file
    #[arg(value_name = "CASES")]
    input: PathBuf,

    /// Where to write the PDF
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Report configuration JSON (page, margins, columns, palette, ...)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log layout decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ReportError> {
    let config = match &cli.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };

    log::info!("Loading test cases from {}", cli.input.display());
    let cases = parse_test_cases(&fs::read_to_string(&cli.input)?)?;

    ReportRenderer::new(config).render_to_file(&cases, &cli.output)?;

    log::info!("Wrote {}", cli.output.display());
    Ok(())
}
