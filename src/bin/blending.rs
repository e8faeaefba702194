//! Alloy blending at a foundry.
//!
//! A foundry must deliver 1000 kg of an alloy containing at least 45%
//! copper. It can melt three raw alloys with 25%, 50% and 75% copper,
//! bought at $5, $9 and $12 per kg. How much of each raw alloy should go
//! into the furnace to fill the order as cheaply as possible?
//!
//! ```text
//! minimize    5 a + 9 b + 12 c
//! subject to  a + b + c = 1000                    (order size)
//!             0.25 a + 0.5 b + 0.75 c >= 450      (copper content)
//!             a, b, c >= 0
//! ```

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const ALLOYS: [&str; 3] = ["low_grade", "mid_grade", "high_grade"];
const COPPER: [f64; 3] = [0.25, 0.5, 0.75];
const PRICE: [f64; 3] = [5.0, 9.0, 12.0];

const ORDER_KG: f64 = 1000.0;
const MIN_COPPER_KG: f64 = 450.0;

fn build() -> Problem {
    let mut pb = Problem::new("blending", LpObjective::Minimize);
    let melt: Vec<Var> = ALLOYS
        .iter()
        .map(|alloy| pb.add_var(alloy, 0.0, f64::INFINITY))
        .collect();
    pb.set_objective(LinearExpr::dot(&PRICE, &melt));
    pb.add_constraint(LinearExpr::sum(melt.iter().copied()), Ordering::Equal, ORDER_KG);
    pb.add_constraint(
        LinearExpr::dot(&COPPER, &melt),
        Ordering::Greater,
        MIN_COPPER_KG,
    );
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for alloy in ALLOYS.iter() {
                println!("{:10} : {:.1} kg", alloy, solution.value(alloy));
            }
            println!("cost       : ${:.2}", problem.objective_value(&solution));
        }
        other => println!("order cannot be blended: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_and_high_grade_only() {
        let problem = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((solution.value("low_grade") - 600.0).abs() < 1e-2);
        assert!((solution.value("mid_grade")).abs() < 1e-2);
        assert!((solution.value("high_grade") - 400.0).abs() < 1e-2);
        assert!((problem.objective_value(&solution) - 7800.0).abs() < 1e-2);
    }
}
