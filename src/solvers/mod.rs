//! This module provides the interface to different solvers.
//!
//! The embedded [`MicrolpSolver`] runs in-process on top of the
//! [`microlp`](https://docs.rs/microlp) crate and needs no external
//! software. The other solvers drive an externally installed binary
//! through its command line: the problem is written to a temporary `.lp`
//! file, the solver is invoked on it, and its solution file is parsed
//! back into a [`Solution`].
//!
//! [`AllSolvers`] tries the external solvers in turn and falls back to
//! the embedded one, so it always finds a way to solve.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::path::Path;
use std::process::Command;

use log::debug;
use thiserror::Error;

use crate::problem::Problem;

pub use self::auto::{AllSolvers, AutoSolver, NoSolver};
pub use self::cbc::CbcSolver;
pub use self::glpk::GlpkSolver;
pub use self::gurobi::GurobiSolver;
pub use self::microlp::MicrolpSolver;

pub mod auto;
pub mod cbc;
#[cfg(feature = "cplex")]
pub mod cplex;
pub mod glpk;
pub mod gurobi;
pub mod microlp;

/// Termination status reported by a solver.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Status {
    /// A provably optimal solution was found
    Optimal,
    /// The solver stopped early (time, iterations) with a feasible solution
    SubOptimal,
    /// No assignment satisfies the constraints
    Infeasible,
    /// The objective can be improved without bound
    Unbounded,
    /// The solver did not reach a conclusion
    NotSolved,
}

/// The outcome of a solver run: a termination status and, when the solver
/// produced one, a value for each variable.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Termination status
    pub status: Status,
    /// Variable values, keyed by variable name
    pub results: HashMap<String, f32>,
}

impl Solution {
    /// Create a solution from a status and a value map.
    pub fn new(status: Status, results: HashMap<String, f32>) -> Solution {
        Solution { status, results }
    }

    /// Value of the named variable.
    ///
    /// Variables absent from the solver's report are taken as 0; CBC in
    /// particular omits variables at zero from its solution files.
    pub fn value(&self, name: &str) -> f32 {
        self.results.get(name).copied().unwrap_or(0.0)
    }
}

/// Failure to run a solver or to understand its output.
///
/// Infeasible and unbounded models are not errors; they are reported
/// through [`Status`].
#[derive(Debug, Error)]
pub enum SolverError {
    /// The model or solution file could not be written or read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The solver executable could not be started
    #[error("could not run '{command}': {source}")]
    Command {
        /// Name of the executable
        command: String,
        /// Why spawning it failed
        source: std::io::Error,
    },
    /// The solver process exited abnormally
    #[error("'{command}' failed: {status}")]
    SolverFailure {
        /// Name of the executable
        command: String,
        /// Its exit status
        status: String,
    },
    /// The solution file did not have the expected shape
    #[error("incorrect solution format: {0}")]
    SolutionFormat(String),
    /// The embedded solver rejected the model
    #[error("embedded solver error: {0}")]
    Native(String),
    /// No solver in the chain is installed on this machine
    #[error("no solver available")]
    NoSolverAvailable,
}

/// A way to solve a [`Problem`].
pub trait SolverTrait {
    /// Solve the given problem.
    fn run(&self, problem: &Problem) -> Result<Solution, SolverError>;
}

/// Implemented by solvers whose solution files we can parse.
pub trait SolverWithSolutionParsing {
    /// Parse the given solution file, deleting it afterwards.
    fn read_solution(
        &self,
        temp_solution_file: &Path,
        problem: Option<&Problem>,
    ) -> Result<Solution, SolverError> {
        let f = File::open(temp_solution_file)?;
        let res = self.read_specific_solution(&f, problem)?;
        let _ = fs::remove_file(temp_solution_file);
        Ok(res)
    }

    /// Parse an open solution file in this solver's own format.
    ///
    /// When `problem` is given, implementations may use it to pre-fill
    /// variables the solver leaves out of its report.
    fn read_specific_solution(
        &self,
        f: &File,
        problem: Option<&Problem>,
    ) -> Result<Solution, SolverError>;
}

/// An external solver driven through its command-line interface.
pub trait SolverProgram {
    /// Name of the executable to invoke
    fn command_name(&self) -> &str;

    /// Command-line arguments asking the solver to read `lp_file` and to
    /// write its solution to `solution_file`
    fn arguments(&self, lp_file: &Path, solution_file: &Path) -> Vec<OsString>;

    /// A fixed solution file path to use instead of a temporary one
    fn preferred_temp_solution_file(&self) -> Option<&Path> {
        None
    }

    /// Suffix the solver forces on its solution files
    fn solution_suffix(&self) -> Option<&str> {
        None
    }

    /// Termination statuses that are only visible on standard output
    fn parse_stdout_status(&self, _stdout: &[u8]) -> Option<Status> {
        None
    }
}

impl<T: SolverProgram + SolverWithSolutionParsing> SolverTrait for T {
    fn run(&self, problem: &Problem) -> Result<Solution, SolverError> {
        let lp_file = problem.to_tmp_file()?;
        let (solution_path, _guard) = match self.preferred_temp_solution_file() {
            Some(path) => (path.to_path_buf(), None),
            None => {
                let temp = tempfile::Builder::new()
                    .prefix(problem.name())
                    .suffix(self.solution_suffix().unwrap_or(".sol"))
                    .tempfile()?
                    .into_temp_path();
                (temp.to_path_buf(), Some(temp))
            }
        };
        let command = self.command_name();
        debug!(
            "solving '{}' with {} (model in {:?})",
            problem.name(),
            command,
            lp_file.path()
        );
        let output = Command::new(command)
            .args(self.arguments(lp_file.path(), &solution_path))
            .output()
            .map_err(|source| SolverError::Command {
                command: command.to_string(),
                source,
            })?;
        if let Some(status) = self.parse_stdout_status(&output.stdout) {
            if status != Status::Optimal {
                return Ok(Solution::new(status, HashMap::new()));
            }
        }
        if !output.status.success() {
            return Err(SolverError::SolverFailure {
                command: command.to_string(),
                status: output.status.to_string(),
            });
        }
        self.read_solution(&solution_path, Some(problem))
    }
}

/// Solvers that accept a wall-clock limit, in seconds.
pub trait WithMaxSeconds<T> {
    /// The configured time limit, if any
    fn max_seconds(&self) -> Option<u32>;
    /// Return a solver with the given time limit
    fn with_max_seconds(&self, seconds: u32) -> T;
}

/// Solvers that can run on multiple threads.
pub trait WithNbThreads<T> {
    /// The configured thread count, if any
    fn nb_threads(&self) -> Option<u32>;
    /// Return a solver with the given thread count
    fn with_nb_threads(&self, threads: u32) -> T;
}
