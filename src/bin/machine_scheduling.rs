//! Spreading jobs over two identical machines.
//!
//! Five milling jobs of known durations must each run on one of two
//! identical machines. Jobs on the same machine run back to back, so a
//! machine finishes at the sum of its jobs' durations. Minimize the
//! makespan, the time at which the later machine finishes.
//!
//! ```text
//! minimize    T
//! subject to  sum_m x_jm = 1                  for each job j
//!             sum_j d_j x_jm - T <= 0         for each machine m
//!             x_jm in {0, 1}, T >= 0
//! ```

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const DURATIONS: [f64; 5] = [7.0, 4.0, 6.0, 3.0, 5.0];
const MACHINES: usize = 2;

fn build() -> (Problem, Vec<Vec<Var>>) {
    let mut pb = Problem::new("machine_scheduling", LpObjective::Minimize);
    let total: f64 = DURATIONS.iter().sum();
    let makespan = pb.add_var("makespan", 0.0, total);
    let on: Vec<Vec<Var>> = (0..DURATIONS.len())
        .map(|j| {
            (0..MACHINES)
                .map(|m| pb.add_binary_var(&format!("job_{}_on_{}", j, m)))
                .collect()
        })
        .collect();
    pb.set_objective(LinearExpr::from(makespan));

    for row in on.iter() {
        pb.add_constraint(LinearExpr::sum(row.iter().copied()), Ordering::Equal, 1.0);
    }
    for m in 0..MACHINES {
        let mut finish = LinearExpr::new();
        for (j, row) in on.iter().enumerate() {
            finish.add_term(DURATIONS[j], row[m]);
        }
        pb.add_constraint(finish - makespan, Ordering::Less, 0.0);
    }
    (pb, on)
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let (problem, on) = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for m in 0..MACHINES {
                let jobs: Vec<usize> = (0..DURATIONS.len())
                    .filter(|&j| solution.value(problem.var_name(on[j][m])) > 0.5)
                    .collect();
                println!("machine {} runs jobs {:?}", m, jobs);
            }
            println!("makespan : {} h", solution.value("makespan"));
        }
        other => println!("no schedule: {:?}", other),
    }
    Ok(())
}
