pub mod aligner;
pub mod completer;
pub mod decrypt;
pub mod scoring;

pub use self::aligner::{find_alignments, Alignment};
pub use self::completer::complete_mapping;
pub use self::decrypt::apply_mapping;
pub use self::scoring::recognizable_words;

use crate::config::SolverConfig;
use crate::error::{CfResult, CribForgeError};
use crate::mapping::CipherMapping;
use rayon::prelude::*;
use serde::Serialize;
use strum_macros::Display;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Fallback,
}

/// One alignment carried through completion, decryption and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub mapping: CipherMapping,
    pub decrypted: String,
    pub score: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub decrypted_text: String,
    /// (cipher, plain) pairs: crib-derived pairs first, then completed ones.
    pub mapping: Vec<(char, char)>,
    /// False when no candidate cleared the threshold and this is the first alignment's best effort.
    pub accepted: bool,
    pub alignment_index: usize,
    pub score: usize,
}

impl Solution {
    fn from_candidate(candidate: Candidate, accepted: bool) -> Self {
        Self {
            mapping: candidate.mapping.pairs(),
            decrypted_text: candidate.decrypted,
            accepted,
            alignment_index: candidate.index,
            score: candidate.score,
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.accepted {
            Verdict::Accepted
        } else {
            Verdict::Fallback
        }
    }
}

/// Called after each candidate is scored, accepted or not.
/// Returning `false` stops the search; an accepted candidate is still returned.
pub trait ProgressCallback {
    fn on_candidate(&mut self, candidate: &Candidate) -> bool;
}

impl<F> ProgressCallback for F
where
    F: FnMut(&Candidate) -> bool,
{
    fn on_candidate(&mut self, candidate: &Candidate) -> bool {
        self(candidate)
    }
}

pub struct Solver {
    config: SolverConfig,
    pins: CipherMapping,
}

impl Solver {
    pub fn new(config: SolverConfig) -> CfResult<Self> {
        let pins = config.pinned_mapping()?;
        Ok(Self { config, pins })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Every usable crib placement, pins folded in, by ascending index.
    pub fn alignments(&self, cipher: &str, crib: &str) -> CfResult<Vec<Alignment>> {
        let crib = validate_inputs(cipher, crib)?;

        let alignments: Vec<Alignment> = find_alignments(cipher, crib)
            .into_iter()
            .filter_map(|a| {
                if self.pins.is_empty() {
                    return Some(a);
                }
                match a.mapping.merge(&self.pins) {
                    Ok(mapping) => Some(Alignment {
                        index: a.index,
                        mapping,
                    }),
                    Err(conflict) => {
                        debug!("alignment @{} dropped by pins: {}", a.index, conflict);
                        None
                    }
                }
            })
            .collect();

        if alignments.is_empty() {
            return Err(CribForgeError::NoAlignment {
                crib: crib.to_string(),
            });
        }

        debug!("{} viable alignment(s) for '{}'", alignments.len(), crib);
        Ok(alignments)
    }

    /// Completes, decrypts and scores a single alignment.
    pub fn evaluate(&self, cipher: &str, alignment: &Alignment) -> Candidate {
        let mapping = complete_mapping(&alignment.mapping, cipher);
        let decrypted = apply_mapping(cipher, &mapping);
        let score = recognizable_words(&decrypted, self.config.min_word_len);

        Candidate {
            index: alignment.index,
            mapping,
            decrypted,
            score,
        }
    }

    pub fn solve(&self, cipher: &str, crib: &str) -> CfResult<Solution> {
        self.solve_with_progress(cipher, crib, |_: &Candidate| true)
    }

    /// First alignment (by index) whose score clears the threshold wins.
    /// With no winner, the first alignment is returned unaccepted.
    pub fn solve_with_progress<P: ProgressCallback>(
        &self,
        cipher: &str,
        crib: &str,
        mut progress: P,
    ) -> CfResult<Solution> {
        let alignments = self.alignments(cipher, crib)?;

        for (evaluated, alignment) in alignments.iter().enumerate() {
            let candidate = self.evaluate(cipher, alignment);
            debug!(
                "candidate @{} scored {} | {}",
                candidate.index, candidate.score, candidate.decrypted
            );

            let keep_going = progress.on_candidate(&candidate);

            if self.config.accepts(candidate.score) {
                info!(
                    "Accepted alignment @{} with {} recognizable word(s)",
                    candidate.index, candidate.score
                );
                return Ok(Solution::from_candidate(candidate, true));
            }

            if !keep_going {
                return Err(CribForgeError::Interrupted {
                    evaluated: evaluated + 1,
                });
            }
        }

        let first = &alignments[0];
        let candidate = self.evaluate(cipher, first);
        warn!(
            "No candidate cleared the threshold ({}); falling back to alignment @{}",
            self.config.accept_threshold, candidate.index
        );
        Ok(Solution::from_candidate(candidate, false))
    }

    /// Scores every alignment, in index order. For reporting; `solve` stops at the first winner.
    pub fn survey(&self, cipher: &str, crib: &str) -> CfResult<Vec<Candidate>> {
        let alignments = self.alignments(cipher, crib)?;
        Ok(alignments
            .par_iter()
            .map(|a| self.evaluate(cipher, a))
            .collect())
    }
}

/// Rejects blank inputs and returns the trimmed crib.
fn validate_inputs<'a>(cipher: &str, crib: &'a str) -> CfResult<&'a str> {
    if cipher.trim().is_empty() {
        return Err(CribForgeError::EmptyInput("ciphertext"));
    }
    let crib = crib.trim();
    if crib.is_empty() {
        return Err(CribForgeError::EmptyInput("crib word"));
    }
    Ok(crib)
}
