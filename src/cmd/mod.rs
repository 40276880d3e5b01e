pub mod encrypt;
pub mod freq;
pub mod solve;
pub mod survey;

use clap::Args;
use cribforge::error::CfResult;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the text comes from: inline, a file, or stdin when neither is given.
#[derive(Args, Debug, Clone)]
pub struct TextSource {
    /// Inline text (`--cipher` and `--plain` are accepted too).
    #[arg(
        short = 't',
        long = "text",
        visible_aliases = ["cipher", "plain"],
        conflicts_with = "input"
    )]
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl TextSource {
    pub fn read(&self) -> CfResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return Ok(fs::read_to_string(path)?);
        }
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}
