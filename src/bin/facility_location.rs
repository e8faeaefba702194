//! Uncapacitated warehouse siting.
//!
//! A retailer may open warehouses at three candidate sites, paying a
//! fixed weekly cost per open site, and must serve four shops. Serving
//! shop `j` from site `i` costs `SERVE[i][j]` per week, and a shop can
//! only be served from an open site. Which sites should open?
//!
//! ```text
//! minimize    sum_i open_i y_i + sum_ij serve_ij x_ij
//! subject to  sum_i x_ij = 1      for each shop j
//!             x_ij <= y_i         for each site i, shop j
//!             x_ij, y_i in {0, 1}
//! ```

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const SITES: usize = 3;
const SHOPS: usize = 4;
const OPEN_COST: [f64; SITES] = [8.0, 6.0, 9.0];
const SERVE: [[f64; SHOPS]; SITES] = [
    [2.0, 3.0, 4.0, 5.0],
    [4.0, 2.0, 3.0, 4.0],
    [3.0, 4.0, 2.0, 2.0],
];

fn build() -> (Problem, Vec<Var>) {
    let mut pb = Problem::new("facility_location", LpObjective::Minimize);
    let open: Vec<Var> = (0..SITES)
        .map(|i| pb.add_binary_var(&format!("open_{}", i)))
        .collect();
    let serve: Vec<Vec<Var>> = (0..SITES)
        .map(|i| {
            (0..SHOPS)
                .map(|j| pb.add_binary_var(&format!("serve_{}_{}", i, j)))
                .collect()
        })
        .collect();

    let mut weekly_cost = LinearExpr::dot(&OPEN_COST, &open);
    for (i, row) in serve.iter().enumerate() {
        for (j, &var) in row.iter().enumerate() {
            weekly_cost.add_term(SERVE[i][j], var);
        }
    }
    pb.set_objective(weekly_cost);

    for j in 0..SHOPS {
        let servers = serve.iter().map(|row| row[j]);
        pb.add_constraint(LinearExpr::sum(servers), Ordering::Equal, 1.0);
    }
    // linking: a shop can only be served from an open site
    for (i, row) in serve.iter().enumerate() {
        for &var in row.iter() {
            pb.add_constraint(var - open[i], Ordering::Less, 0.0);
        }
    }
    (pb, open)
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let (problem, open) = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for (i, &site) in open.iter().enumerate() {
                if solution.value(problem.var_name(site)) > 0.5 {
                    println!("open site {}", i);
                }
            }
            println!("weekly cost : {}", problem.objective_value(&solution));
        }
        other => println!("no siting plan: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mid_site_wins() {
        let (problem, _) = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!(solution.value("open_0") < 0.5);
        assert!(solution.value("open_1") > 0.5);
        assert!(solution.value("open_2") < 0.5);
        assert!((problem.objective_value(&solution) - 19.0).abs() < 1e-2);
    }
}
