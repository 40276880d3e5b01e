pub mod alphabet;
pub mod api;
pub mod config;
pub mod error;
pub mod frequency;
pub mod key;
pub mod mapping;
pub mod solver;
// cmd and reports belong to the binary (main.rs).

pub use self::error::{CfResult, CribForgeError};
pub use self::mapping::{CipherMapping, MappingConflict};
pub use self::solver::{Candidate, Solution, Solver, Verdict};
