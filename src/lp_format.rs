//! Writing problems in the .lp file format, as consumed by CBC, GLPK,
//! Gurobi and CPLEX.
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::io::prelude::*;
use std::io::Result;

use tempfile::NamedTempFile;

use crate::expr::LinearExpr;
use crate::problem::Problem;

/// Optimization sense
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum LpObjective {
    /// min
    Minimize,
    /// max
    Maximize,
}

impl Problem {
    /// Return an object whose [fmt::Display] implementation is the problem in the .lp format
    pub fn display_lp(&self) -> DisplayedLp<'_> {
        DisplayedLp(self)
    }

    /// Write the problem to a temporary .lp file
    pub fn to_tmp_file(&self) -> Result<NamedTempFile> {
        let mut f = tempfile::Builder::new()
            .prefix(self.name())
            .suffix(".lp")
            .tempfile()?;
        write!(f, "{}", self.display_lp())?;
        f.flush()?;
        Ok(f)
    }
}

/// A problem whose `Display` implementation outputs valid .lp syntax
pub struct DisplayedLp<'a>(&'a Problem);

impl<'a> fmt::Display for DisplayedLp<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prob = self.0;
        write!(f, "\\ {}\n\n", prob.name())?;
        objective_lp_file_block(prob, f)?;
        write_constraints_lp_file_block(prob, f)?;
        write_bounds_lp_file_block(prob, f)?;
        write!(f, "\nEnd\n")?;
        Ok(())
    }
}

/// Write a linear expression using the problem's variable names.
/// An empty expression is written as a literal `0`.
fn write_expr(prob: &Problem, expr: &LinearExpr, f: &mut Formatter) -> fmt::Result {
    if expr.is_empty() {
        return write!(f, "0");
    }
    for (idx, (var, coefficient)) in expr.terms().enumerate() {
        let name = prob.var_name(var);
        if idx == 0 {
            if coefficient == 1.0 {
                write!(f, "{}", name)?;
            } else if coefficient == -1.0 {
                write!(f, "-{}", name)?;
            } else {
                write!(f, "{} {}", coefficient, name)?;
            }
        } else {
            let (sign, magnitude) = if coefficient < 0.0 {
                ("-", -coefficient)
            } else {
                ("+", coefficient)
            };
            if magnitude == 1.0 {
                write!(f, " {} {}", sign, name)?;
            } else {
                write!(f, " {} {} {}", sign, magnitude, name)?;
            }
        }
    }
    Ok(())
}

fn objective_lp_file_block(prob: &Problem, f: &mut Formatter) -> fmt::Result {
    // Write objectives
    let obj_type = match prob.sense() {
        LpObjective::Maximize => "Maximize\n  ",
        LpObjective::Minimize => "Minimize\n  ",
    };
    write!(f, "{}obj: ", obj_type)?;
    write_expr(prob, prob.objective(), f)?;
    Ok(())
}

fn write_constraints_lp_file_block(prob: &Problem, f: &mut Formatter) -> fmt::Result {
    let mut wrote_header = false;
    for (idx, constraint) in prob.constraints().iter().enumerate() {
        if !wrote_header {
            write!(f, "\n\nSubject To\n")?;
            wrote_header = true;
        }
        write!(f, "  c{}: ", idx)?;
        write_expr(prob, &constraint.lhs, f)?;
        write!(
            f,
            " {} {}",
            match constraint.operator {
                Ordering::Equal => "=",
                Ordering::Less => "<=",
                Ordering::Greater => ">=",
            },
            constraint.rhs
        )?;
        writeln!(f)?;
    }
    Ok(())
}

fn write_bounds_lp_file_block(prob: &Problem, f: &mut Formatter) -> fmt::Result {
    let mut integers = vec![];
    write!(f, "\nBounds\n")?;
    for variable in prob.variables() {
        let low: f64 = variable.lower_bound;
        let up: f64 = variable.upper_bound;
        write!(f, "  ")?;
        if low > f64::NEG_INFINITY {
            write!(f, "{} <= ", low)?;
        }
        let name = variable.name.as_str();
        write!(f, "{}", name)?;
        if up < f64::INFINITY {
            write!(f, " <= {}", up)?;
        }
        if low.is_infinite() && up.is_infinite() {
            write!(f, " free")?;
        }
        writeln!(f)?;
        if variable.is_integer {
            integers.push(name);
        }
    }
    if !integers.is_empty() {
        writeln!(f, "\nGenerals")?;
        for name in integers.iter() {
            writeln!(f, "  {}", name)?;
        }
    }
    Ok(())
}
