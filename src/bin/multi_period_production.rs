//! Production smoothing over a three-month horizon.
//!
//! A plant faces demands of 100, 150 and 200 units over the next three
//! months, but can make at most 160 units a month. Unit production costs
//! rise from $8 to $10 to $12 as raw material gets dearer, and carrying
//! a unit in stock over a month end costs $1. When should the plant
//! produce, and how much should it store?
//!
//! ```text
//! minimize    sum_t make_t p_t + sum_t hold i_t
//! subject to  p_1 - i_1 = d_1
//!             i_{t-1} + p_t - i_t = d_t       for t = 2..T-1
//!             i_{T-1} + p_T = d_T
//!             0 <= p_t <= 160, i_t >= 0
//! ```

use std::cmp::Ordering;

use or_workbook::expr::LinearExpr;
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const DEMAND: [f64; 3] = [100.0, 150.0, 200.0];
const MAKE_COST: [f64; 3] = [8.0, 10.0, 12.0];
const CAPACITY: f64 = 160.0;
const HOLD_COST: f64 = 1.0;

fn build() -> Problem {
    let mut pb = Problem::new("multi_period_production", LpObjective::Minimize);
    let make: Vec<_> = (0..DEMAND.len())
        .map(|t| pb.add_var(&format!("make_{}", t + 1), 0.0, CAPACITY))
        .collect();
    let hold: Vec<_> = (0..DEMAND.len() - 1)
        .map(|t| pb.add_var(&format!("hold_{}", t + 1), 0.0, f64::INFINITY))
        .collect();

    let mut cost = LinearExpr::dot(&MAKE_COST, &make);
    for &inventory in hold.iter() {
        cost.add_term(HOLD_COST, inventory);
    }
    pb.set_objective(cost);

    // stock balance: what comes in (carry-over + production) either
    // serves the month's demand or is carried over again
    pb.add_constraint(make[0] - hold[0], Ordering::Equal, DEMAND[0]);
    pb.add_constraint(hold[0] + LinearExpr::from(make[1]) - hold[1], Ordering::Equal, DEMAND[1]);
    pb.add_constraint(hold[1] + LinearExpr::from(make[2]), Ordering::Equal, DEMAND[2]);
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for t in 1..=DEMAND.len() {
                print!("month {} : make {:6}", t, solution.value(&format!("make_{}", t)));
                if t < DEMAND.len() {
                    print!(", store {}", solution.value(&format!("hold_{}", t)));
                }
                println!();
            }
            println!("total cost : ${}", problem.objective_value(&solution));
        }
        other => println!("demand cannot be met: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_ahead_in_cheap_months() {
        let problem = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((solution.value("make_1") - 160.0).abs() < 1e-2);
        assert!((solution.value("make_2") - 160.0).abs() < 1e-2);
        assert!((solution.value("make_3") - 130.0).abs() < 1e-2);
        assert!((solution.value("hold_1") - 60.0).abs() < 1e-2);
        assert!((solution.value("hold_2") - 70.0).abs() < 1e-2);
        assert!((problem.objective_value(&solution) - 4570.0).abs() < 1e-2);
    }
}
