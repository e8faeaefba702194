//! Assigning workers to tasks.
//!
//! Four technicians must each take exactly one of four maintenance
//! tasks, and every task needs exactly one technician. The hours each
//! technician would spend on each task are known. Which assignment
//! minimizes the total hours?
//!
//! ```text
//! minimize    sum_ij hours_ij x_ij
//! subject to  sum_j x_ij = 1      for each technician i
//!             sum_i x_ij = 1      for each task j
//!             x_ij in {0, 1}
//! ```

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const N: usize = 4;
const HOURS: [[f64; N]; N] = [
    [9.0, 2.0, 7.0, 8.0],
    [6.0, 4.0, 3.0, 7.0],
    [5.0, 8.0, 1.0, 8.0],
    [7.0, 6.0, 9.0, 4.0],
];

fn build() -> (Problem, Vec<Vec<Var>>) {
    let mut pb = Problem::new("assignment", LpObjective::Minimize);
    let assign: Vec<Vec<Var>> = (0..N)
        .map(|i| {
            (0..N)
                .map(|j| pb.add_binary_var(&format!("assign_{}_{}", i, j)))
                .collect()
        })
        .collect();

    let mut total = LinearExpr::new();
    for (i, row) in assign.iter().enumerate() {
        for (j, &var) in row.iter().enumerate() {
            total.add_term(HOURS[i][j], var);
        }
    }
    pb.set_objective(total);

    for row in assign.iter() {
        pb.add_constraint(LinearExpr::sum(row.iter().copied()), Ordering::Equal, 1.0);
    }
    for j in 0..N {
        let column = assign.iter().map(|row| row[j]);
        pb.add_constraint(LinearExpr::sum(column), Ordering::Equal, 1.0);
    }
    (pb, assign)
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let (problem, assign) = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for (i, row) in assign.iter().enumerate() {
                for (j, &var) in row.iter().enumerate() {
                    if solution.value(problem.var_name(var)) > 0.5 {
                        println!("technician {} -> task {} ({} h)", i, j, HOURS[i][j]);
                    }
                }
            }
            println!("total : {} h", problem.objective_value(&solution));
        }
        other => println!("no assignment: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_hours_total() {
        let (problem, _) = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((problem.objective_value(&solution) - 13.0).abs() < 1e-2);
        // unique optimum: 2 + 6 + 1 + 4
        assert!(solution.value("assign_0_1") > 0.5);
        assert!(solution.value("assign_1_0") > 0.5);
        assert!(solution.value("assign_2_2") > 0.5);
        assert!(solution.value("assign_3_3") > 0.5);
    }
}
