use super::TextSource;
use crate::reports::{self, OutputFormat};
use clap::Args;
use cribforge::api::solve_json;
use cribforge::config::SolverConfig;
use cribforge::error::CfResult;
use cribforge::solver::Solver;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub source: TextSource,

    /// Word believed to appear in the plaintext.
    #[arg(short = 'w', long, required_unless_present = "request")]
    pub crib: Option<String>,

    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// List the mapping A..Z by cipher letter instead of discovery order.
    #[arg(long, default_value_t = false)]
    pub sorted: bool,

    /// Solve a JSON request file and print the JSON solution. Solver
    /// settings come from the request's own `config` field.
    #[arg(
        long,
        conflicts_with_all = ["text", "input", "crib", "sorted", "accept_threshold", "min_word_len", "pins"]
    )]
    pub request: Option<PathBuf>,

    #[command(flatten)]
    pub config: SolverConfig,
}

pub fn run(args: &SolveArgs, config: SolverConfig) -> CfResult<()> {
    if let Some(path) = &args.request {
        info!("📂 Loading request: {}", path.display());
        let body = fs::read_to_string(path)?;
        println!("{}", solve_json(&body)?);
        return Ok(());
    }

    let cipher = args.source.read()?;
    let crib = args.crib.as_deref().unwrap_or_default();

    let solver = Solver::new(config)?;
    let mut solution = solver.solve(&cipher, crib)?;
    if args.sorted {
        solution.mapping.sort_by_key(|(c, _)| *c);
    }

    match args.format {
        OutputFormat::Table => reports::print_solution(&solution),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        OutputFormat::Csv => reports::write_mapping_csv(std::io::stdout(), &solution.mapping)?,
    }
    Ok(())
}
