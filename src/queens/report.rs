//! JSON-friendly summary of a solved board size.

use serde::{Deserialize, Serialize};

use crate::queens::error::SolveError;
use crate::queens::solver::Solver;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub n: usize,
    pub count: u64,
    pub solutions: Vec<Vec<String>>,
}

impl SolutionReport {
    pub fn from_solver(solver: &Solver) -> Result<Self, SolveError> {
        let solutions = solver.boards()?;
        Ok(Self {
            n: solver.size(),
            count: solutions.len() as u64,
            solutions,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, SolveError> {
        serde_json::to_string_pretty(self).map_err(|e| SolveError::Encode {
            error: e.to_string(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, SolveError> {
        serde_json::from_str(text).map_err(|e| SolveError::Encode {
            error: e.to_string(),
        })
    }
}
