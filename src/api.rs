use crate::config::SolverConfig;
use crate::error::CfResult;
use crate::solver::{Solution, Solver};
use serde::{Deserialize, Serialize};

/// Solves with the default configuration.
pub fn solve(cipher_text: &str, crib_word: &str) -> CfResult<Solution> {
    Solver::new(SolverConfig::default())?.solve(cipher_text, crib_word)
}

/// Request shape for callers driving the solver with JSON.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub cipher_text: String,
    pub crib_word: String,
    #[serde(default)]
    pub config: Option<SolverConfig>,
}

pub fn solve_request(request: &SolveRequest) -> CfResult<Solution> {
    let config = request.config.clone().unwrap_or_default();
    Solver::new(config)?.solve(&request.cipher_text, &request.crib_word)
}

/// JSON in, JSON out. Errors stay typed so the caller can tell a bad request from a failed solve.
pub fn solve_json(request_json: &str) -> CfResult<String> {
    let request: SolveRequest = serde_json::from_str(request_json)?;
    let solution = solve_request(&request)?;
    Ok(serde_json::to_string(&solution)?)
}
