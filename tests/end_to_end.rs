use std::cmp::Ordering;

use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::Status::{Infeasible, Optimal, Unbounded};
use or_workbook::solvers::{AllSolvers, MicrolpSolver, SolverTrait};

fn int_problem() -> Problem {
    let mut pb = Problem::new("int_problem", LpObjective::Maximize);
    let x = pb.add_integer_var("x", -10.0, -1.0);
    let y = pb.add_integer_var("y", 4.0, 7.0);
    pb.set_objective(x - y);
    pb.add_constraint(x - y, Ordering::Less, -4.5);
    pb
}

fn solve_integer_problem_with_solver<S: SolverTrait>(solver: &S) {
    let pb = int_problem();
    let solution = solver.run(&pb).expect("Failed to run solver");
    assert_eq!(solution.status, Optimal);
    assert!((solution.value("x") + 1.0).abs() < 1e-5);
    assert!((solution.value("y") - 4.0).abs() < 1e-5);
    assert!((pb.objective_value(&solution) + 5.0).abs() < 1e-4);
}

fn infeasible<S: SolverTrait>(solver: &S) {
    let mut pb = Problem::new("impossible", LpObjective::Maximize);
    let x = pb.add_var("x", 0.0, 100.0);
    pb.set_objective(1.0 * x);
    pb.add_constraint(1.0 * x, Ordering::Less, -5.0);
    let solution = solver.run(&pb).expect("Failed to run solver");
    assert_eq!(solution.status, Infeasible);
}

#[test]
fn solve_integer_problem_with_embedded_solver() {
    let solver = MicrolpSolver::new();
    solve_integer_problem_with_solver(&solver);
    infeasible(&solver);
}

#[test]
fn solve_integer_problem_with_auto_solver() {
    // whatever is installed, the chain ends in the embedded solver
    let solver = AllSolvers::new();
    solve_integer_problem_with_solver(&solver);
    infeasible(&solver);
}

#[test]
fn unbounded_problem_is_reported_as_such() {
    let mut pb = Problem::new("wide_open", LpObjective::Maximize);
    let x = pb.add_var("x", 0.0, f64::INFINITY);
    pb.set_objective(1.0 * x);
    pb.add_constraint(1.0 * x, Ordering::Greater, 1.0);
    let solution = MicrolpSolver::new().run(&pb).expect("Failed to run solver");
    assert_eq!(solution.status, Unbounded);
}

#[test]
fn continuous_problem_hits_the_vertex() {
    // maximize x + 2 y over x + y <= 4, 2 x + y >= 2
    let mut pb = Problem::new("vertex", LpObjective::Maximize);
    let x = pb.add_var("x", 0.0, f64::INFINITY);
    let y = pb.add_var("y", 0.0, 3.0);
    pb.set_objective(x + 2.0 * y);
    pb.add_constraint(x + y, Ordering::Less, 4.0);
    pb.add_constraint(2.0 * x + y, Ordering::Greater, 2.0);
    let solution = MicrolpSolver::new().run(&pb).expect("Failed to run solver");
    assert_eq!(solution.status, Optimal);
    assert!((solution.value("x") - 1.0).abs() < 1e-5);
    assert!((solution.value("y") - 3.0).abs() < 1e-5);
    assert!((pb.objective_value(&solution) - 7.0).abs() < 1e-5);
}
