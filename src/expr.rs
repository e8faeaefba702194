//! Linear expressions over decision variables.
//!
//! Expressions are plain term lists. They can be assembled with the
//! arithmetic operators (`40.0 * chairs + 30.0 * tables`) or, when the
//! problem data lives in coefficient arrays, with [`LinearExpr::dot`] and
//! [`LinearExpr::sum`].

use std::collections::HashMap;
use std::iter::FromIterator;
use std::ops::{Add, Mul, Neg, Sub};

/// A handle to a decision variable of a [`Problem`](crate::problem::Problem).
///
/// Handles are only meaningful for the problem that created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Var(pub(crate) usize);

impl Var {
    /// Index of the variable in its problem, in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A linear combination of decision variables.
#[derive(Clone, Debug, Default)]
pub struct LinearExpr {
    pub(crate) terms: Vec<(Var, f64)>,
}

impl LinearExpr {
    /// An expression with no terms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `coefficient * var` to the expression.
    pub fn add_term(&mut self, coefficient: f64, var: Var) {
        self.terms.push((var, coefficient));
    }

    /// The scalar product of a coefficient array and a variable array.
    ///
    /// Panics if the two slices have different lengths.
    pub fn dot(coefficients: &[f64], vars: &[Var]) -> Self {
        assert_eq!(
            coefficients.len(),
            vars.len(),
            "coefficient and variable arrays must have the same length"
        );
        vars.iter()
            .zip(coefficients.iter())
            .map(|(&v, &c)| (c, v))
            .collect()
    }

    /// The sum of the given variables, all with coefficient 1.
    pub fn sum<I: IntoIterator<Item = Var>>(vars: I) -> Self {
        vars.into_iter().map(|v| (1.0, v)).collect()
    }

    /// Iterate over the `(variable, coefficient)` terms in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (Var, f64)> + '_ {
        self.terms.iter().copied()
    }

    /// Whether the expression has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms grouped by variable index, zero coefficients dropped.
    ///
    /// Solver backends want each variable to appear at most once per row.
    pub(crate) fn merged(&self) -> Vec<(usize, f64)> {
        let mut by_var: HashMap<usize, f64> = HashMap::new();
        let mut order = Vec::new();
        for &(var, coefficient) in &self.terms {
            if !by_var.contains_key(&var.0) {
                order.push(var.0);
            }
            *by_var.entry(var.0).or_insert(0.0) += coefficient;
        }
        order
            .into_iter()
            .filter_map(|idx| {
                let c = by_var[&idx];
                if c == 0.0 {
                    None
                } else {
                    Some((idx, c))
                }
            })
            .collect()
    }
}

impl From<Var> for LinearExpr {
    fn from(var: Var) -> Self {
        LinearExpr {
            terms: vec![(var, 1.0)],
        }
    }
}

impl FromIterator<(f64, Var)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (f64, Var)>>(iter: I) -> Self {
        LinearExpr {
            terms: iter.into_iter().map(|(c, v)| (v, c)).collect(),
        }
    }
}

impl Mul<Var> for f64 {
    type Output = LinearExpr;

    fn mul(self, var: Var) -> LinearExpr {
        LinearExpr {
            terms: vec![(var, self)],
        }
    }
}

impl Add for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, rhs: LinearExpr) -> LinearExpr {
        self.terms.extend(rhs.terms);
        self
    }
}

impl Add<Var> for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, var: Var) -> LinearExpr {
        self.terms.push((var, 1.0));
        self
    }
}

impl Add<Var> for Var {
    type Output = LinearExpr;

    fn add(self, rhs: Var) -> LinearExpr {
        LinearExpr {
            terms: vec![(self, 1.0), (rhs, 1.0)],
        }
    }
}

impl Add<LinearExpr> for Var {
    type Output = LinearExpr;

    fn add(self, mut rhs: LinearExpr) -> LinearExpr {
        rhs.terms.insert(0, (self, 1.0));
        rhs
    }
}

impl Sub<LinearExpr> for Var {
    type Output = LinearExpr;

    fn sub(self, rhs: LinearExpr) -> LinearExpr {
        LinearExpr::from(self) - rhs
    }
}

impl Sub for LinearExpr {
    type Output = LinearExpr;

    fn sub(mut self, rhs: LinearExpr) -> LinearExpr {
        self.terms
            .extend(rhs.terms.into_iter().map(|(v, c)| (v, -c)));
        self
    }
}

impl Sub<Var> for LinearExpr {
    type Output = LinearExpr;

    fn sub(mut self, var: Var) -> LinearExpr {
        self.terms.push((var, -1.0));
        self
    }
}

impl Sub<Var> for Var {
    type Output = LinearExpr;

    fn sub(self, rhs: Var) -> LinearExpr {
        LinearExpr {
            terms: vec![(self, 1.0), (rhs, -1.0)],
        }
    }
}

impl Neg for LinearExpr {
    type Output = LinearExpr;

    fn neg(mut self) -> LinearExpr {
        for term in &mut self.terms {
            term.1 = -term.1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_build_term_lists() {
        let x = Var(0);
        let y = Var(1);
        let z = Var(2);
        let e = 3.0 * x + 2.0 * y - z;
        assert_eq!(e.terms, vec![(x, 3.0), (y, 2.0), (z, -1.0)]);
    }

    #[test]
    fn dot_zips_coefficients() {
        let vars = [Var(0), Var(1), Var(2)];
        let e = LinearExpr::dot(&[4.0, 0.5, -1.0], &vars);
        assert_eq!(e.terms, vec![(Var(0), 4.0), (Var(1), 0.5), (Var(2), -1.0)]);
    }

    #[test]
    fn merged_groups_duplicates_and_drops_zeros() {
        let x = Var(0);
        let y = Var(1);
        let e = 2.0 * x + 3.0 * y + 1.0 * x - 3.0 * y;
        assert_eq!(e.merged(), vec![(0, 3.0)]);
    }
}
