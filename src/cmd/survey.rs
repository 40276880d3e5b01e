use super::TextSource;
use crate::reports;
use clap::Args;
use cribforge::config::SolverConfig;
use cribforge::error::CfResult;
use cribforge::solver::Solver;

#[derive(Args, Debug, Clone)]
pub struct SurveyArgs {
    #[command(flatten)]
    pub source: TextSource,

    #[arg(short = 'w', long)]
    pub crib: String,

    /// Truncate decrypted previews to this many chars.
    #[arg(long, default_value_t = 60)]
    pub preview: usize,

    #[command(flatten)]
    pub config: SolverConfig,
}

pub fn run(args: &SurveyArgs, config: SolverConfig) -> CfResult<()> {
    let cipher = args.source.read()?;
    let solver = Solver::new(config)?;
    let candidates = solver.survey(&cipher, &args.crib)?;

    println!("\n🔎 === CRIB SURVEY: '{}' === 🔎", args.crib.trim());
    reports::print_survey(&candidates, solver.config(), args.preview);
    Ok(())
}
