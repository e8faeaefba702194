//! Allocating an investment portfolio.
//!
//! A trust has $100k to spread over government bonds (4% yield),
//! corporate bonds (6%), stocks (9%) and real estate (7.5%). Policy
//! rules: everything is invested, at least $20k stays in government
//! bonds, stocks alone may not exceed $20k, and stocks plus real estate
//! may not exceed $30k. Maximize the expected yearly return.
//!
//! ```text
//! maximize    0.04 g + 0.06 c + 0.09 s + 0.075 r
//! subject to  g + c + s + r = 100
//!             s + r <= 30
//!             g >= 20, 0 <= s <= 20, c, r >= 0
//! ```
//! Amounts are in thousands of dollars.

use std::cmp::Ordering;

use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

fn build() -> Problem {
    let mut pb = Problem::new("portfolio", LpObjective::Maximize);
    let gov = pb.add_var("gov_bonds", 20.0, f64::INFINITY);
    let corp = pb.add_var("corp_bonds", 0.0, f64::INFINITY);
    let stocks = pb.add_var("stocks", 0.0, 20.0);
    let realty = pb.add_var("real_estate", 0.0, f64::INFINITY);
    pb.set_objective(0.04 * gov + 0.06 * corp + 0.09 * stocks + 0.075 * realty);
    pb.add_constraint(gov + corp + stocks + realty, Ordering::Equal, 100.0);
    pb.add_constraint(stocks + realty, Ordering::Less, 30.0);
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for asset in ["gov_bonds", "corp_bonds", "stocks", "real_estate"].iter() {
                println!("{:11} : ${}k", asset, solution.value(asset));
            }
            println!(
                "expected return : ${:.2}k / year",
                problem.objective_value(&solution)
            );
        }
        other => println!("no allocation: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_are_saturated() {
        let problem = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((solution.value("gov_bonds") - 20.0).abs() < 1e-3);
        assert!((solution.value("corp_bonds") - 50.0).abs() < 1e-3);
        assert!((solution.value("stocks") - 20.0).abs() < 1e-3);
        assert!((solution.value("real_estate") - 10.0).abs() < 1e-3);
        assert!((problem.objective_value(&solution) - 6.35).abs() < 1e-3);
    }
}
