//! Maximum flow through a pipeline network.
//!
//! Crude oil is pumped from a source `s` to a refinery `t` through two
//! pumping stations `a` and `b`. Each pipe has a capacity in thousands
//! of barrels per day. How much oil can reach the refinery?
//!
//! ```text
//! maximize    f_at + f_bt
//! subject to  f_sa - f_ab - f_at = 0      (station a balance)
//!             f_sb + f_ab - f_bt = 0      (station b balance)
//!             0 <= f_e <= cap_e           for each pipe e
//! ```

use std::cmp::Ordering;

use or_workbook::expr::LinearExpr;
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

// (pipe, capacity)
const PIPES: [(&str, f64); 5] = [
    ("flow_s_a", 10.0),
    ("flow_s_b", 8.0),
    ("flow_a_b", 4.0),
    ("flow_a_t", 6.0),
    ("flow_b_t", 9.0),
];

fn build() -> Problem {
    let mut pb = Problem::new("network_flow", LpObjective::Maximize);
    let flows: Vec<_> = PIPES
        .iter()
        .map(|&(pipe, capacity)| pb.add_var(pipe, 0.0, capacity))
        .collect();
    let (sa, sb, ab, at, bt) = (flows[0], flows[1], flows[2], flows[3], flows[4]);
    pb.set_objective(at + bt);
    pb.add_constraint(sa - ab - at, Ordering::Equal, 0.0);
    pb.add_constraint(sb + LinearExpr::from(ab) - bt, Ordering::Equal, 0.0);
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            for &(pipe, capacity) in PIPES.iter() {
                println!("{} : {} / {}", pipe, solution.value(pipe), capacity);
            }
            println!("throughput : {} kbbl/day", problem.objective_value(&solution));
        }
        other => println!("no flow: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refinery_cut_is_saturated() {
        let problem = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((problem.objective_value(&solution) - 15.0).abs() < 1e-3);
        // both pipes into the refinery run full; upstream routing may vary
        assert!((solution.value("flow_a_t") - 6.0).abs() < 1e-3);
        assert!((solution.value("flow_b_t") - 9.0).abs() < 1e-3);
    }
}
