//! Trim-loss minimization at a paper mill.
//!
//! Stock rolls are 10 dm wide. Customers ordered 2 rolls of width 6,
//! 2 of width 4 and 4 of width 3. A stock roll can be slit according to
//! any of a fixed list of cutting patterns; `PATTERNS[p][w]` tells how
//! many pieces of width `w` pattern `p` yields. How few stock rolls
//! fill the order?
//!
//! ```text
//! minimize    sum_p x_p
//! subject to  sum_p patterns_pw x_p >= demand_w    for each width w
//!             x_p >= 0 integer
//! ```
//!
//! The pattern list is enumerated by hand here; a full column-generation
//! scheme is overkill at this size.

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const WIDTHS: [f64; 3] = [6.0, 4.0, 3.0];
const DEMAND: [f64; 3] = [2.0, 2.0, 4.0];
// every maximal way to slit a 10 dm roll into 6, 4 and 3 dm pieces
const PATTERNS: [[f64; 3]; 5] = [
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 2.0, 0.0],
    [0.0, 1.0, 2.0],
    [0.0, 0.0, 3.0],
];

fn build() -> (Problem, Vec<Var>) {
    let mut pb = Problem::new("cutting_stock", LpObjective::Minimize);
    let rolls: Vec<Var> = (0..PATTERNS.len())
        .map(|p| pb.add_integer_var(&format!("pattern_{}", p), 0.0, 20.0))
        .collect();
    pb.set_objective(LinearExpr::sum(rolls.iter().copied()));
    for w in 0..WIDTHS.len() {
        let mut produced = LinearExpr::new();
        for (p, &roll) in rolls.iter().enumerate() {
            if PATTERNS[p][w] > 0.0 {
                produced.add_term(PATTERNS[p][w], roll);
            }
        }
        pb.add_constraint(produced, Ordering::Greater, DEMAND[w]);
    }
    (pb, rolls)
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let (problem, rolls) = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for (p, &roll) in rolls.iter().enumerate() {
                let count = solution.value(problem.var_name(roll));
                if count > 0.0 {
                    println!("cut {} rolls with pattern {:?}", count, PATTERNS[p]);
                }
            }
            println!("stock rolls used : {}", problem.objective_value(&solution));
        }
        other => println!("order cannot be cut: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rolls_fill_the_order() {
        let (problem, _) = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        // the ordered pieces add up to 32 dm, so 3 rolls (30 dm) cannot
        // work and several 4-roll plans exist
        assert!((problem.objective_value(&solution) - 4.0).abs() < 1e-4);
        for w in 0..WIDTHS.len() {
            let produced: f32 = (0..PATTERNS.len())
                .map(|p| PATTERNS[p][w] as f32 * solution.value(&format!("pattern_{}", p)))
                .sum();
            assert!(produced >= DEMAND[w] as f32 - 1e-4);
        }
    }
}
