//! Allocating farmland between crops.
//!
//! A farm has 240 acres, 500 hours of labor and 300 acre-feet of
//! irrigation water for the season. Wheat, corn and beans differ in
//! profit per acre and in how much labor and water an acre takes. How
//! should the land be split?
//!
//! ```text
//! maximize    120 w + 150 c + 100 b
//! subject to    w +   c +     b <= 240     (land, acres)
//!             2 w + 3 c +     b <= 500     (labor, hours)
//!               w + 2 c + 0.5 b <= 300     (water, acre-feet)
//!             w, c, b >= 0
//! ```

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const CROPS: [&str; 3] = ["wheat", "corn", "beans"];
const PROFIT: [f64; 3] = [120.0, 150.0, 100.0];
const LABOR: [f64; 3] = [2.0, 3.0, 1.0];
const WATER: [f64; 3] = [1.0, 2.0, 0.5];

const LAND: f64 = 240.0;
const LABOR_HOURS: f64 = 500.0;
const WATER_FEET: f64 = 300.0;

fn build() -> Problem {
    let mut pb = Problem::new("farm_planning", LpObjective::Maximize);
    let acres: Vec<Var> = CROPS
        .iter()
        .map(|crop| pb.add_var(crop, 0.0, f64::INFINITY))
        .collect();
    pb.set_objective(LinearExpr::dot(&PROFIT, &acres));
    pb.add_constraint(LinearExpr::sum(acres.iter().copied()), Ordering::Less, LAND);
    pb.add_constraint(LinearExpr::dot(&LABOR, &acres), Ordering::Less, LABOR_HOURS);
    pb.add_constraint(LinearExpr::dot(&WATER, &acres), Ordering::Less, WATER_FEET);
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for crop in CROPS.iter() {
                println!("{:6} : {} acres", crop, solution.value(crop));
            }
            println!("profit : ${}", problem.objective_value(&solution));
        }
        other => println!("no cropping plan: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_resources_bind() {
        let problem = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((solution.value("wheat") - 60.0).abs() < 1e-2);
        assert!((solution.value("corn") - 100.0).abs() < 1e-2);
        assert!((solution.value("beans") - 80.0).abs() < 1e-2);
        assert!((problem.objective_value(&solution) - 30200.0).abs() < 1e-1);
    }
}
