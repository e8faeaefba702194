//! Media selection for an ad campaign.
//!
//! A campaign with a $200k budget can book TV spots, radio slots and
//! newspaper pages. Each booking has a cost, an audience reach, and an
//! outlet-imposed booking limit. Bookings are whole units. Which media
//! plan reaches the largest audience?
//!
//! ```text
//! maximize    300 tv + 90 radio + 50 paper       (reach, thousands)
//! subject to  40 tv + 10 radio + 5 paper <= 200  (budget, $k)
//!             tv <= 5, radio <= 10, paper <= 8
//!             all integer >= 0
//! ```

use std::cmp::Ordering;

use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const BUDGET: f64 = 200.0;

fn build() -> Problem {
    let mut pb = Problem::new("advertising", LpObjective::Maximize);
    let tv = pb.add_integer_var("tv_spots", 0.0, 5.0);
    let radio = pb.add_integer_var("radio_slots", 0.0, 10.0);
    let paper = pb.add_integer_var("newspaper_pages", 0.0, 8.0);
    pb.set_objective(300.0 * tv + 90.0 * radio + 50.0 * paper);
    pb.add_constraint(40.0 * tv + 10.0 * radio + 5.0 * paper, Ordering::Less, BUDGET);
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            println!("tv spots        : {}", solution.value("tv_spots"));
            println!("radio slots     : {}", solution.value("radio_slots"));
            println!("newspaper pages : {}", solution.value("newspaper_pages"));
            println!(
                "audience reached : {}k people",
                problem.objective_value(&solution)
            );
        }
        other => println!("no media plan: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_the_whole_budget() {
        let problem = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((solution.value("tv_spots") - 2.0).abs() < 1e-4);
        assert!((solution.value("radio_slots") - 8.0).abs() < 1e-4);
        assert!((solution.value("newspaper_pages") - 8.0).abs() < 1e-4);
        assert!((problem.objective_value(&solution) - 1720.0).abs() < 1e-2);
    }
}
