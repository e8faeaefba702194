//! The [GLPK](https://www.gnu.org/software/glpk/) solver, invoked through
//! the `glpsol` binary.
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::{Path, PathBuf};

use crate::problem::Problem;
use crate::solvers::{
    Solution, SolverError, SolverProgram, SolverWithSolutionParsing, Status,
};

/// The GLPK solver
#[derive(Debug, Clone)]
pub struct GlpkSolver {
    command_name: String,
    temp_solution_file: Option<PathBuf>,
}

impl Default for GlpkSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GlpkSolver {
    /// A solver invoking the `glpsol` binary from the PATH
    pub fn new() -> GlpkSolver {
        GlpkSolver {
            command_name: "glpsol".to_string(),
            temp_solution_file: None,
        }
    }

    /// Set the name of the glpsol executable to invoke
    pub fn command_name(&self, command_name: String) -> GlpkSolver {
        GlpkSolver {
            command_name,
            ..self.clone()
        }
    }

    /// Read/write the solution from the given file instead of a temporary one
    pub fn with_temp_solution_file(&self, temp_solution_file: String) -> GlpkSolver {
        GlpkSolver {
            temp_solution_file: Some(temp_solution_file.into()),
            ..self.clone()
        }
    }
}

impl SolverWithSolutionParsing for GlpkSolver {
    fn read_specific_solution(
        &self,
        f: &File,
        _problem: Option<&Problem>,
    ) -> Result<Solution, SolverError> {
        fn read_size(line: Option<Result<String, Error>>) -> Result<usize, SolverError> {
            line.and_then(|l| l.ok())
                .as_ref()
                .and_then(|l| l.split_whitespace().nth(1))
                .and_then(|value| value.parse::<usize>().ok())
                .ok_or_else(|| SolverError::SolutionFormat("missing size header".to_string()))
        }
        let mut vars_value: HashMap<_, _> = HashMap::new();

        let file = BufReader::new(f);

        let mut iter = file.lines();
        let row = read_size(iter.nth(1))?;
        let col = read_size(iter.next())?;
        let status = match iter.nth(1) {
            Some(Ok(ref status_line)) if status_line.len() > 12 => match &status_line[12..] {
                "INTEGER OPTIMAL" | "OPTIMAL" => Status::Optimal,
                "INFEASIBLE (FINAL)" | "INTEGER EMPTY" => Status::Infeasible,
                "UNDEFINED" => Status::NotSolved,
                "INTEGER UNDEFINED" | "UNBOUNDED" => Status::Unbounded,
                other => {
                    return Err(SolverError::SolutionFormat(format!(
                        "unknown solution status '{}'",
                        other
                    )))
                }
            },
            _ => {
                return Err(SolverError::SolutionFormat(
                    "no solution status found".to_string(),
                ))
            }
        };
        // The column table starts after the objective line, two table
        // headers and the `row` rows of the constraint table.
        let mut result_lines = iter.skip(row + 7);
        for _ in 0..col {
            let line = match result_lines.next() {
                Some(Ok(l)) => l,
                _ => {
                    return Err(SolverError::SolutionFormat(
                        "not all columns are present".to_string(),
                    ))
                }
            };
            let result_line: Vec<_> = line.split_whitespace().collect();
            if result_line.len() >= 4 {
                match result_line[3].parse::<f32>() {
                    Ok(n) => {
                        vars_value.insert(result_line[1].to_string(), n);
                    }
                    Err(e) => return Err(SolverError::SolutionFormat(e.to_string())),
                }
            } else {
                return Err(SolverError::SolutionFormat(
                    "column specification has too few fields".to_string(),
                ));
            }
        }
        Ok(Solution::new(status, vars_value))
    }
}

impl SolverProgram for GlpkSolver {
    fn command_name(&self) -> &str {
        &self.command_name
    }

    fn arguments(&self, lp_file: &Path, solution_file: &Path) -> Vec<OsString> {
        vec![
            "--lp".into(),
            lp_file.into(),
            "-o".into(),
            solution_file.into(),
        ]
    }

    fn preferred_temp_solution_file(&self) -> Option<&Path> {
        self.temp_solution_file.as_deref()
    }
}
