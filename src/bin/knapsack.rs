//! Capital budgeting as a 0/1 knapsack.
//!
//! A plant manager can fund at most $10k of improvement projects this
//! quarter. Each project has a fixed cost and an estimated payoff, and is
//! either funded in full or not at all. Which projects should get the
//! money?
//!
//! ```text
//! maximize    sum_p payoff_p x_p
//! subject to  sum_p cost_p x_p <= 10
//!             x_p in {0, 1}
//! ```

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{AllSolvers, SolverError, SolverTrait, Status};

const PROJECTS: [&str; 5] = ["conveyor", "forklift", "lighting", "software", "training"];
const PAYOFF: [f64; 5] = [10.0, 40.0, 30.0, 50.0, 35.0];
const COST: [f64; 5] = [5.0, 4.0, 6.0, 3.0, 7.0];
const BUDGET: f64 = 10.0;

fn build() -> Problem {
    let mut pb = Problem::new("knapsack", LpObjective::Maximize);
    let funded: Vec<Var> = PROJECTS
        .iter()
        .map(|project| pb.add_binary_var(project))
        .collect();
    pb.set_objective(LinearExpr::dot(&PAYOFF, &funded));
    pb.add_constraint(LinearExpr::dot(&COST, &funded), Ordering::Less, BUDGET);
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = AllSolvers::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for project in PROJECTS.iter() {
                if solution.value(project) > 0.5 {
                    println!("fund {}", project);
                }
            }
            println!("payoff : {}", problem.objective_value(&solution));
        }
        other => println!("no funding plan: {:?}", other),
    }
    Ok(())
}
