use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use cribforge::config::SolverConfig;
use cribforge::error::CfResult;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with solver settings. Flags typed on the command line win.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Crack a ciphertext from a crib word.
    Solve(cmd::solve::SolveArgs),
    /// Score every crib alignment.
    Survey(cmd::survey::SurveyArgs),
    /// Letter frequencies of a text against the English ranking.
    Freq(cmd::freq::FreqArgs),
    /// Encipher plaintext under a random or given key.
    Encrypt(cmd::encrypt::EncryptArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if cli.config.is_some() && !uses_solver_config(&cli.command) {
        warn!("--config has no effect here and is ignored");
    }

    let result = match &cli.command {
        Commands::Solve(args) => resolve_config(&cli, &args.config, &matches, "solve")
            .and_then(|config| cmd::solve::run(args, config)),
        Commands::Survey(args) => resolve_config(&cli, &args.config, &matches, "survey")
            .and_then(|config| cmd::survey::run(args, config)),
        Commands::Freq(args) => cmd::freq::run(args),
        Commands::Encrypt(args) => cmd::encrypt::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn uses_solver_config(command: &Commands) -> bool {
    match command {
        Commands::Solve(args) => args.request.is_none(),
        Commands::Survey(_) => true,
        Commands::Freq(_) | Commands::Encrypt(_) => false,
    }
}

/// File settings (if any) overlaid with explicit CLI flags.
fn resolve_config(
    cli: &Cli,
    cli_config: &SolverConfig,
    matches: &ArgMatches,
    subcommand: &str,
) -> CfResult<SolverConfig> {
    let Some(path) = &cli.config else {
        return Ok(cli_config.clone());
    };

    info!("⚙️  Loading solver config from: {}", path.display());
    let mut config = SolverConfig::load_from_file(path)?;
    if let Some(sub_matches) = matches.subcommand_matches(subcommand) {
        config.merge_from_cli(cli_config, sub_matches);
    }
    Ok(config)
}
