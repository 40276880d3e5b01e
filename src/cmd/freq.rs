use super::TextSource;
use crate::reports;
use clap::Args;
use cribforge::error::CfResult;
use cribforge::frequency::LetterCounts;

#[derive(Args, Debug, Clone)]
pub struct FreqArgs {
    #[command(flatten)]
    pub source: TextSource,
}

pub fn run(args: &FreqArgs) -> CfResult<()> {
    let text = args.source.read()?;
    let counts = LetterCounts::count(&text);
    if counts.is_empty() {
        println!("No letters found.");
        return Ok(());
    }
    reports::print_frequencies(&counts);
    Ok(())
}
