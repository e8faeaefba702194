//! Production mix for a small furniture workshop.
//!
//! The workshop builds chairs and tables. A chair sells at a $40 profit
//! and takes 2 hours of carpentry and 1 board of lumber; a table sells at
//! $30 and takes 1 hour and 2 boards. The week has 100 carpentry hours
//! and 80 boards available. How many chairs and tables should be built to
//! maximize profit?
//!
//! ```text
//! maximize    40 c + 30 t
//! subject to   2 c +    t <= 100     (carpentry hours)
//!                c +  2 t <=  80     (lumber boards)
//!              c, t >= 0 integer
//! ```

use std::cmp::Ordering;

use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{MicrolpSolver, SolverError, SolverTrait, Status};

fn build() -> Problem {
    let mut pb = Problem::new("production_mix", LpObjective::Maximize);
    let chairs = pb.add_integer_var("chairs", 0.0, f64::INFINITY);
    let tables = pb.add_integer_var("tables", 0.0, f64::INFINITY);
    pb.set_objective(40.0 * chairs + 30.0 * tables);
    pb.add_constraint(2.0 * chairs + tables, Ordering::Less, 100.0);
    pb.add_constraint(chairs + 2.0 * tables, Ordering::Less, 80.0);
    pb
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let problem = build();
    let solution = MicrolpSolver::new().run(&problem)?;
    match solution.status {
        Status::Optimal => {
            println!("chairs : {}", solution.value("chairs"));
            println!("tables : {}", solution.value("tables"));
            println!("profit : ${}", problem.objective_value(&solution));
        }
        other => println!("no production plan: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_chairs_twenty_tables() {
        let problem = build();
        let solution = MicrolpSolver::new().run(&problem).expect("solver failed");
        assert_eq!(solution.status, Status::Optimal);
        assert!((solution.value("chairs") - 40.0).abs() < 1e-4);
        assert!((solution.value("tables") - 20.0).abs() < 1e-4);
        assert!((problem.objective_value(&solution) - 2200.0).abs() < 1e-2);
    }
}
