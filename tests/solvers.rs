//! Solution-file parsing tests, driven by captured solver output in
//! `tests/solution_files/`.

use std::fs;
use std::path::Path;

use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;
use or_workbook::solvers::{
    CbcSolver, GlpkSolver, Solution, SolverProgram, SolverWithSolutionParsing, Status,
    WithMaxSeconds, WithNbThreads,
};

/// `read_solution` deletes the file it parses, so work on a copy.
fn fixture(name: &str) -> String {
    let _ = fs::copy(format!("tests/solution_files/{}", name), name);
    name.to_string()
}

#[test]
fn cbc_optimal() {
    let copy = fixture("cbc_optimal.sol");
    let solver = CbcSolver::new().with_temp_solution_file(copy.clone());
    let Solution {
        status,
        results: mut variables,
    } = solver
        .read_solution(Path::new(&copy), None)
        .unwrap();
    assert_eq!(status, Status::Optimal);
    assert_eq!(variables.remove("a"), Some(5f32));
    assert_eq!(variables.remove("b"), Some(6f32));
    assert_eq!(variables.remove("c"), Some(0f32));
    // lines flagged with ** are parsed like any other
    assert_eq!(variables.remove("d"), Some(1f32));
}

#[test]
fn cbc_solution_prefills_problem_variables() {
    // own copy: tests run in parallel and parsing deletes the file
    let copy = "cbc_prefill.sol".to_string();
    let _ = fs::copy("tests/solution_files/cbc_optimal.sol", &copy);
    let mut pb = Problem::new("prefill", LpObjective::Minimize);
    pb.add_var("a", 0.0, 10.0);
    pb.add_var("missing", 0.0, 10.0);
    let solver = CbcSolver::new().with_temp_solution_file(copy.clone());
    let solution = solver.read_solution(Path::new(&copy), Some(&pb)).unwrap();
    // CBC omits zero variables from its files; they default to 0
    assert_eq!(solution.value("missing"), 0.0);
    assert_eq!(solution.value("a"), 5.0);
}

#[test]
fn cbc_infeasible() {
    let copy = fixture("cbc_infeasible.sol");
    let solver = CbcSolver::new().with_temp_solution_file(copy.clone());
    let Solution { status, .. } = solver
        .read_solution(Path::new(&copy), None)
        .unwrap();
    assert_eq!(status, Status::Infeasible);
}

#[test]
fn cbc_unbounded() {
    let copy = fixture("cbc_unbounded.sol");
    let solver = CbcSolver::new().with_temp_solution_file(copy.clone());
    let Solution { status, .. } = solver
        .read_solution(Path::new(&copy), None)
        .unwrap();
    assert_eq!(status, Status::Unbounded);
}

#[test]
fn glpk_optimal() {
    let copy = fixture("glpk_optimal.sol");
    let solver = GlpkSolver::new().with_temp_solution_file(copy.clone());
    let Solution {
        status,
        results: mut variables,
    } = solver
        .read_solution(Path::new(&copy), None)
        .unwrap();
    assert_eq!(status, Status::Optimal);
    assert_eq!(variables.remove("a"), Some(0f32));
    assert_eq!(variables.remove("b"), Some(5f32));
    assert_eq!(variables.remove("c"), Some(0f32));
}

#[test]
fn glpk_infeasible() {
    let copy = fixture("glpk_infeasible.sol");
    let solver = GlpkSolver::new().with_temp_solution_file(copy.clone());
    let Solution { status, .. } = solver
        .read_solution(Path::new(&copy), None)
        .unwrap();
    assert_eq!(status, Status::Infeasible);
}

#[test]
fn cbc_limits_show_up_on_the_command_line() {
    let solver = CbcSolver::new().with_max_seconds(30).with_nb_threads(4);
    let args = solver.arguments(Path::new("model.lp"), Path::new("model.sol"));
    let args: Vec<String> = args
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        args,
        vec![
            "model.lp", "seconds", "30", "threads", "4", "solve", "solution", "model.sol"
        ]
    );
}

#[test]
fn glpk_unbounded() {
    let copy = fixture("glpk_unbounded.sol");
    let solver = GlpkSolver::new().with_temp_solution_file(copy.clone());
    let Solution { status, .. } = solver
        .read_solution(Path::new(&copy), None)
        .unwrap();
    assert_eq!(status, Status::Unbounded);
}
