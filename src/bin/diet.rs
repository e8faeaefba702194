//! A minimum-cost diet.
//!
//! A canteen can buy bread, milk and eggs. Each food has a cost per
//! serving and brings a known amount of protein and calories. The daily
//! menu must provide at least 26 g of protein and 370 kcal. Which
//! quantities of each food meet the requirements at the lowest cost?
//!
//! ```text
//! minimize    sum_f cost_f x_f
//! subject to  sum_f protein_f  x_f >= 26
//!             sum_f calories_f x_f >= 370
//!             x_f >= 0
//! ```
//!
//! The cheapest menu skips bread entirely and mixes milk with a little
//! egg, both nutrient constraints being exactly met.

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const FOODS: [&str; 3] = ["bread", "milk", "eggs"];
const COST: [f64; 3] = [2.0, 3.0, 4.0];
const PROTEIN: [f64; 3] = [4.0, 8.0, 13.0];
const CALORIES: [f64; 3] = [90.0, 120.0, 80.0];

fn build() -> Problem {
    let mut pb = Problem::new("diet", LpObjective::Minimize);
    let servings: Vec<Var> = FOODS
        .iter()
        .map(|food| pb.add_var(food, 0.0, f64::INFINITY))
        .collect();
    pb.set_objective(LinearExpr::dot(&COST, &servings));
    pb.add_constraint(LinearExpr::dot(&PROTEIN, &servings), Ordering::Greater, 26.0);
    pb.add_constraint(
        LinearExpr::dot(&CALORIES, &servings),
        Ordering::Greater,
        370.0,
    );
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for food in FOODS.iter() {
                let servings = solution.value(food);
                if servings > 0.0 {
                    println!("{:8} : {:.3} servings", food, servings);
                }
            }
            println!("cost     : ${:.2}", problem.objective_value(&solution));
        }
        other => println!("no feasible diet: {:?}", other),
    }
    Ok(())
}
