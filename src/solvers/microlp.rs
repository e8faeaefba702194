//! The embedded solver: simplex plus branch-and-bound from the
//! [`microlp`](https://docs.rs/microlp) crate, running in-process.
//!
//! This is the backend the problem programs use by default, since it
//! needs no externally installed software and handles both the
//! continuous and the integer models of the workbook.
use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;
use microlp::{ComparisonOp, OptimizationDirection};

use crate::lp_format::LpObjective;
use crate::problem::Problem;
use crate::solvers::{Solution, SolverError, SolverTrait, Status};

/// The embedded microlp solver
#[derive(Debug, Clone, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    /// Create the embedded solver
    pub fn new() -> MicrolpSolver {
        MicrolpSolver
    }
}

/// microlp wants integer bounds as machine integers
fn int_bound(bound: f64) -> i32 {
    if bound <= f64::from(i32::MIN) {
        i32::MIN
    } else if bound >= f64::from(i32::MAX) {
        i32::MAX
    } else {
        bound.round() as i32
    }
}

impl SolverTrait for MicrolpSolver {
    fn run(&self, problem: &Problem) -> Result<Solution, SolverError> {
        let direction = match problem.sense() {
            LpObjective::Minimize => OptimizationDirection::Minimize,
            LpObjective::Maximize => OptimizationDirection::Maximize,
        };
        let mut model = microlp::Problem::new(direction);
        let objective = problem.objective_coefficients();
        let vars: Vec<microlp::Variable> = problem
            .variables()
            .iter()
            .enumerate()
            .map(|(idx, var)| {
                if var.is_integer {
                    model.add_integer_var(
                        objective[idx],
                        (int_bound(var.lower_bound), int_bound(var.upper_bound)),
                    )
                } else {
                    model.add_var(objective[idx], (var.lower_bound, var.upper_bound))
                }
            })
            .collect();
        for constraint in problem.constraints() {
            let op = match constraint.operator {
                Ordering::Less => ComparisonOp::Le,
                Ordering::Equal => ComparisonOp::Eq,
                Ordering::Greater => ComparisonOp::Ge,
            };
            let row: Vec<(microlp::Variable, f64)> = constraint
                .lhs
                .merged()
                .into_iter()
                .map(|(idx, coefficient)| (vars[idx], coefficient))
                .collect();
            model.add_constraint(row, op, constraint.rhs);
        }
        match model.solve() {
            Ok(solved) => {
                debug!(
                    "microlp solved '{}', objective {}",
                    problem.name(),
                    solved.objective()
                );
                let results: HashMap<String, f32> = problem
                    .variables()
                    .iter()
                    .zip(vars.iter())
                    .map(|(var, &handle)| (var.name.clone(), solved[handle] as f32))
                    .collect();
                Ok(Solution::new(Status::Optimal, results))
            }
            Err(microlp::Error::Infeasible) => Ok(Solution::new(Status::Infeasible, HashMap::new())),
            Err(microlp::Error::Unbounded) => Ok(Solution::new(Status::Unbounded, HashMap::new())),
            Err(other) => Err(SolverError::Native(other.to_string())),
        }
    }
}
