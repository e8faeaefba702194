//! A balanced transportation problem.
//!
//! Two warehouses hold 60 and 70 pallets; three stores ordered 40, 50
//! and 40 pallets. Shipping one pallet from warehouse `i` to store `j`
//! costs `COST[i][j]` dollars. Total stock equals total demand, so every
//! pallet moves. Which shipping plan is cheapest?
//!
//! ```text
//! minimize    sum_ij cost_ij x_ij
//! subject to  sum_j x_ij = supply_i      for each warehouse i
//!             sum_i x_ij = demand_j      for each store j
//!             x_ij >= 0
//! ```

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{AllSolvers, SolverError, SolverTrait, Status};

const SUPPLY: [f64; 2] = [60.0, 70.0];
const DEMAND: [f64; 3] = [40.0, 50.0, 40.0];
const COST: [[f64; 3]; 2] = [
    [4.0, 6.0, 9.0], //
    [5.0, 3.0, 7.0],
];

fn build() -> (Problem, Vec<Vec<Var>>) {
    let mut pb = Problem::new("transportation", LpObjective::Minimize);
    let ship: Vec<Vec<Var>> = (0..SUPPLY.len())
        .map(|i| {
            (0..DEMAND.len())
                .map(|j| pb.add_var(&format!("ship_{}_{}", i, j), 0.0, f64::INFINITY))
                .collect()
        })
        .collect();

    let mut freight = LinearExpr::new();
    for (i, row) in ship.iter().enumerate() {
        for (j, &var) in row.iter().enumerate() {
            freight.add_term(COST[i][j], var);
        }
    }
    pb.set_objective(freight);

    for (i, row) in ship.iter().enumerate() {
        pb.add_constraint(LinearExpr::sum(row.iter().copied()), Ordering::Equal, SUPPLY[i]);
    }
    for j in 0..DEMAND.len() {
        let column = ship.iter().map(|row| row[j]);
        pb.add_constraint(LinearExpr::sum(column), Ordering::Equal, DEMAND[j]);
    }
    (pb, ship)
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let (problem, ship) = build();
    // use whichever solver is installed, falling back to the embedded one
    let solution = AllSolvers::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for (i, row) in ship.iter().enumerate() {
                for (j, &var) in row.iter().enumerate() {
                    let pallets = solution.value(problem.var_name(var));
                    if pallets > 0.0 {
                        println!("warehouse {} -> store {} : {} pallets", i, j, pallets);
                    }
                }
            }
            println!("freight cost : ${}", problem.objective_value(&solution));
        }
        other => println!("no shipping plan: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use or_workbook::solvers::MicrolpSolver;

    #[test]
    fn cheapest_plan_costs_630() {
        let (problem, _) = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((problem.objective_value(&solution) - 630.0).abs() < 1e-2);
        // the optimal basis is unique for this cost matrix
        assert!((solution.value("ship_0_0") - 40.0).abs() < 1e-3);
        assert!((solution.value("ship_0_2") - 20.0).abs() < 1e-3);
        assert!((solution.value("ship_1_1") - 50.0).abs() < 1e-3);
        assert!((solution.value("ship_1_2") - 20.0).abs() < 1e-3);
    }
}
