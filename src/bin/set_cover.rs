//! Siting fire stations to cover every district.
//!
//! A county of six districts laid out along a valley wants to build fire
//! stations. A station placed in district `j` reaches district `j`, and
//! its immediate neighbors `j - 1` and `j + 1`. Every district must be
//! reachable by some station. How few stations are needed?
//!
//! ```text
//! minimize    sum_j y_j
//! subject to  sum_{j reaches d} y_j >= 1    for each district d
//!             y_j in {0, 1}
//! ```

use std::cmp::Ordering;

use or_workbook::expr::{LinearExpr, Var};
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

const DISTRICTS: usize = 6;

fn reaches(site: usize, district: usize) -> bool {
    (site as i64 - district as i64).abs() <= 1
}

fn build() -> (Problem, Vec<Var>) {
    let mut pb = Problem::new("set_cover", LpObjective::Minimize);
    let stations: Vec<Var> = (0..DISTRICTS)
        .map(|j| pb.add_binary_var(&format!("station_{}", j)))
        .collect();
    pb.set_objective(LinearExpr::sum(stations.iter().copied()));
    for district in 0..DISTRICTS {
        let reachable = stations
            .iter()
            .enumerate()
            .filter(|&(site, _)| reaches(site, district))
            .map(|(_, &var)| var);
        pb.add_constraint(LinearExpr::sum(reachable), Ordering::Greater, 1.0);
    }
    (pb, stations)
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let (problem, stations) = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for (j, &station) in stations.iter().enumerate() {
                if solution.value(problem.var_name(station)) > 0.5 {
                    println!("build a station in district {}", j);
                }
            }
            println!("stations : {}", problem.objective_value(&solution));
        }
        other => println!("no covering plan: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stations_cover_the_valley() {
        let (problem, _) = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((problem.objective_value(&solution) - 2.0).abs() < 1e-4);
        // districts 1 and 4 are the only pair reaching all six districts
        assert!(solution.value("station_1") > 0.5);
        assert!(solution.value("station_4") > 0.5);
    }
}
