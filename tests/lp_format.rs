use std::cmp::Ordering;

use or_workbook::expr::LinearExpr;
use or_workbook::lp_format::LpObjective;
use or_workbook::problem::Problem;

#[test]
fn simple_problem() {
    let mut pb = Problem::new("my_problem", LpObjective::Minimize);
    let x = pb.add_var("x", f64::NEG_INFINITY, f64::INFINITY);
    let y = pb.add_var("y", 0.0, f64::INFINITY);
    let z = pb.add_var("z", 1.0, 10.0);
    pb.set_objective(2.0 * x + y);
    pb.add_constraint(LinearExpr::sum([x, y, z]), Ordering::Greater, 5.0);
    let expected_str = "\\ my_problem

Minimize
  obj: 2 x + y

Subject To
  c0: x + y + z >= 5

Bounds
  x free
  0 <= y
  1 <= z <= 10

End
";
    assert_eq!(pb.display_lp().to_string(), expected_str);
}

#[test]
fn with_integers() {
    let mut pb = Problem::new("int_problem", LpObjective::Maximize);
    let x = pb.add_integer_var("x", -10.0, 10.0);
    let y = pb.add_integer_var("y", f64::NEG_INFINITY, 16.5);
    pb.set_objective(x - y);
    pb.add_constraint(x - y, Ordering::Less, -5.0);
    let expected_str = "\\ int_problem

Maximize
  obj: x - y

Subject To
  c0: x - y <= -5

Bounds
  -10 <= x <= 10
  y <= 16.5

Generals
  x
  y

End
";
    assert_eq!(pb.display_lp().to_string(), expected_str);
}

#[test]
fn negative_and_fractional_coefficients() {
    let mut pb = Problem::new("coefs", LpObjective::Minimize);
    let x = pb.add_var("x", 0.0, f64::INFINITY);
    let y = pb.add_var("y", 0.0, f64::INFINITY);
    pb.set_objective(-2.0 * x + 0.5 * y);
    pb.add_constraint(-1.0 * x - 0.25 * y, Ordering::Greater, -3.0);
    let expected_str = "\\ coefs

Minimize
  obj: -2 x + 0.5 y

Subject To
  c0: -x - 0.25 y >= -3

Bounds
  0 <= x
  0 <= y

End
";
    assert_eq!(pb.display_lp().to_string(), expected_str);
}

#[test]
fn empty_objective_is_written_as_zero() {
    let mut pb = Problem::new("feasibility", LpObjective::Minimize);
    let x = pb.add_var("x", 0.0, 1.0);
    pb.add_constraint(LinearExpr::from(x), Ordering::Less, 1.0);
    let displayed = pb.display_lp().to_string();
    assert!(displayed.contains("obj: 0"));
}

#[test]
fn sanitized_names_are_used_in_the_output() {
    let mut pb = Problem::new("names", LpObjective::Minimize);
    let x = pb.add_var("total cost", 0.0, 1.0);
    assert_eq!(pb.var_name(x), "totalcost");
    let displayed = pb.display_lp().to_string();
    assert!(displayed.contains("0 <= totalcost <= 1"));
}
