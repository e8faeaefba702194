//! Cyclic staff scheduling at a small call center.
//!
//! Every agent works five consecutive days and then rests two, so an
//! agent starting on Thursday also covers Friday through Monday. Daily
//! staffing requirements vary over the week. How few agents can the
//! center hire while meeting the requirement every day?
//!
//! ```text
//! minimize    sum_d x_d
//! subject to  sum_{k=0..4} x_{(d-k) mod 7} >= need_d    for each day d
//!             x_d >= 0 integer
//! ```
//! where `x_d` counts the agents whose work week starts on day `d`.

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const DAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
const NEED: [f64; 7] = [4.0, 3.0, 3.0, 3.0, 3.0, 3.0, 2.0];
const SHIFT_DAYS: usize = 5;

fn build() -> Problem {
    let mut pb = Problem::new("staff_scheduling", LpObjective::Minimize);
    let starts: Vec<Var> = DAYS
        .iter()
        .map(|day| pb.add_integer_var(&format!("start_{}", day), 0.0, f64::INFINITY))
        .collect();
    pb.set_objective(LinearExpr::sum(starts.iter().copied()));
    for day in 0..DAYS.len() {
        let on_duty = (0..SHIFT_DAYS).map(|k| starts[(day + DAYS.len() - k) % DAYS.len()]);
        pb.add_constraint(LinearExpr::sum(on_duty), Ordering::Greater, NEED[day]);
    }
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for day in DAYS.iter() {
                let agents = solution.value(&format!("start_{}", day));
                if agents > 0.0 {
                    println!("{} starters : {}", day, agents);
                }
            }
            println!("agents hired : {}", problem.objective_value(&solution));
        }
        other => println!("no roster: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_agents_suffice() {
        let problem = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        // total requirement is 21 agent-days, so 5 agents is the floor;
        // several start patterns reach it, so only the total is checked
        assert!((problem.objective_value(&solution) - 5.0).abs() < 1e-4);
        for day in 0..DAYS.len() {
            let on_duty: f32 = (0..SHIFT_DAYS)
                .map(|k| solution.value(&format!("start_{}", DAYS[(day + DAYS.len() - k) % DAYS.len()])))
                .sum();
            assert!(on_duty >= NEED[day] as f32 - 1e-4);
        }
    }
}
