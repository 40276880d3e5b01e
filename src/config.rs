use crate::alphabet::is_letter;
use crate::error::{CfResult, CribForgeError};
use crate::mapping::CipherMapping;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// A candidate is accepted when its recognizable-word count is strictly above this.
    #[arg(long, default_value_t = 5)]
    pub accept_threshold: usize,

    /// Tokens must be longer than this to count as recognizable.
    #[arg(long, default_value_t = 3)]
    pub min_word_len: usize,

    /// Known cipher=plain pairs applied to every alignment, e.g. "Q=Z,X=K".
    #[arg(long, default_value = "")]
    pub pins: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 5,
            min_word_len: 3,
            pins: String::new(),
        }
    }
}

impl SolverConfig {
    #[inline(always)]
    pub fn accepts(&self, score: usize) -> bool {
        score > self.accept_threshold
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CribForgeError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &SolverConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(accept_threshold, "accept_threshold");
        update_if_present!(min_word_len, "min_word_len");
        update_if_present!(pins, "pins");
    }

    /// Parses `pins` into a mapping. Blank means no pins.
    pub fn pinned_mapping(&self) -> CfResult<CipherMapping> {
        let mut mapping = CipherMapping::new();
        for raw in self.pins.split(',') {
            let entry = raw.trim();
            if entry.is_empty() {
                continue;
            }

            let chars: Vec<char> = entry.chars().filter(|c| !c.is_whitespace()).collect();
            match chars.as_slice() {
                [c, '=', p] if is_letter(*c) && is_letter(*p) => {
                    mapping = mapping.with(*c, *p)?;
                }
                _ => {
                    return Err(CribForgeError::Config(format!(
                        "Invalid pin '{}', expected CIPHER=PLAIN",
                        entry
                    )))
                }
            }
        }
        Ok(mapping)
    }
}
