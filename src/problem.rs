//! Concrete LP/MIP model type built by the problem programs.

use std::cmp::Ordering;

use crate::expr::{LinearExpr, Var};
use crate::lp_format::LpObjective;
use crate::solvers::Solution;
use crate::util::UniqueNameGenerator;

/// A decision variable and its domain.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Unique, sanitized name. This is the key under which solvers report
    /// the variable's value.
    pub name: String,
    /// Whether the variable is forced to take only integer values
    pub is_integer: bool,
    /// -INFINITY if there is no lower bound
    pub lower_bound: f64,
    /// INFINITY if there is no upper bound
    pub upper_bound: f64,
}

/// A constraint expressing a relation between an expression and a constant
#[derive(Debug, Clone)]
pub struct Constraint {
    /// left hand side of the constraint
    pub lhs: LinearExpr,
    /// '<=' '=' or '>='
    pub operator: Ordering,
    /// Right-hand side of the constraint
    pub rhs: f64,
}

/// A linear or mixed-integer program: variables with bounds, linear
/// constraints, and a linear objective to minimize or maximize.
#[derive(Debug)]
pub struct Problem {
    name: String,
    sense: LpObjective,
    objective: LinearExpr,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    namer: UniqueNameGenerator,
}

impl Problem {
    /// Create an empty problem with the given name and optimization sense.
    pub fn new(name: &str, sense: LpObjective) -> Self {
        Problem {
            name: name.to_string(),
            sense,
            objective: LinearExpr::new(),
            variables: Vec::new(),
            constraints: Vec::new(),
            namer: UniqueNameGenerator::default(),
        }
    }

    /// Declare a continuous variable with the given bounds.
    ///
    /// The requested name is sanitized and deduplicated; read the final
    /// name back with [`Problem::var_name`].
    pub fn add_var(&mut self, name: &str, lower_bound: f64, upper_bound: f64) -> Var {
        self.push_var(name, false, lower_bound, upper_bound)
    }

    /// Declare an integer variable with the given bounds.
    pub fn add_integer_var(&mut self, name: &str, lower_bound: f64, upper_bound: f64) -> Var {
        self.push_var(name, true, lower_bound, upper_bound)
    }

    /// Declare a 0/1 variable.
    pub fn add_binary_var(&mut self, name: &str) -> Var {
        self.push_var(name, true, 0.0, 1.0)
    }

    fn push_var(&mut self, name: &str, is_integer: bool, lower_bound: f64, upper_bound: f64) -> Var {
        let name = self.namer.add_variable(name).into_owned();
        self.variables.push(Variable {
            name,
            is_integer,
            lower_bound,
            upper_bound,
        });
        Var(self.variables.len() - 1)
    }

    /// Set the objective function.
    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    /// Add the constraint `lhs <operator> rhs`, where [`Ordering::Less`]
    /// stands for `<=` and [`Ordering::Greater`] for `>=`.
    pub fn add_constraint(&mut self, lhs: LinearExpr, operator: Ordering, rhs: f64) {
        self.constraints.push(Constraint { lhs, operator, rhs });
    }

    /// Problem name, used as the .lp file comment header and temp file prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether to maximize or minimize the objective
    pub fn sense(&self) -> LpObjective {
        self.sense
    }

    /// Target objective function
    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    /// Variables of the problem, in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// List of constraints to apply
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The final (sanitized, deduplicated) name of a variable.
    pub fn var_name(&self, var: Var) -> &str {
        &self.variables[var.0].name
    }

    /// Evaluate the objective function at a solver solution.
    ///
    /// Variables missing from the solution are taken as 0, which matches
    /// how CBC omits zero variables from its solution files.
    pub fn objective_value(&self, solution: &Solution) -> f64 {
        self.objective
            .merged()
            .into_iter()
            .map(|(idx, coefficient)| {
                coefficient * f64::from(solution.value(&self.variables[idx].name))
            })
            .sum()
    }

    /// Objective coefficient of every variable, in declaration order.
    pub(crate) fn objective_coefficients(&self) -> Vec<f64> {
        let mut coefficients = vec![0.0; self.variables.len()];
        for (idx, coefficient) in self.objective.merged() {
            coefficients[idx] = coefficient;
        }
        coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_deduplicated() {
        let mut pb = Problem::new("test", LpObjective::Minimize);
        let a = pb.add_var("x", 0.0, 1.0);
        let b = pb.add_var("x", 0.0, 1.0);
        assert_eq!(pb.var_name(a), "x");
        assert_eq!(pb.var_name(b), "x2");
    }

    #[test]
    fn binary_vars_are_integer_with_unit_bounds() {
        let mut pb = Problem::new("test", LpObjective::Maximize);
        let b = pb.add_binary_var("pick");
        let var = &pb.variables()[b.index()];
        assert!(var.is_integer);
        assert_eq!((var.lower_bound, var.upper_bound), (0.0, 1.0));
    }
}
