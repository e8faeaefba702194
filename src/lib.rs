#![deny(missing_docs)]
//! A workbook of classic optimization word problems (diet planning,
//! production mix, transportation, scheduling, ...), each modeled as a
//! linear or mixed-integer program and solved by one of the binaries in
//! `src/bin/`.
//!
//! The library half of the crate holds what every problem program needs:
//! building a [`problem::Problem`] out of literal data, writing it in the
//! .lp file format, and running it through a solver, either the embedded
//! [`solvers::MicrolpSolver`] or an external binary such as CBC or GLPK.

pub mod expr;
pub mod lp_format;
pub mod problem;
pub mod solvers;
pub mod util;
