//! Auto solvers automatically find which of their child solvers is installed on
//! the user's computer and use it. The [AllSolvers] solver tries all the
//! external solvers and falls back to the embedded one.

use crate::expr::LinearExpr;
use crate::lp_format::LpObjective;
use crate::problem::Problem;
#[cfg(feature = "cplex")]
use crate::solvers::cplex::Cplex;
use crate::solvers::{
    CbcSolver, GlpkSolver, GurobiSolver, MicrolpSolver, Solution, SolverError,
};

use super::SolverTrait;

/// A solver that tries multiple solvers
#[derive(Debug, Clone)]
pub struct AutoSolver<SOLVER, NEXT>(SOLVER, NEXT);

/// The tail of a list of solvers. This one has no children and never finds any solver.
#[derive(Debug, Clone, Default)]
pub struct NoSolver;

#[cfg(not(feature = "cplex"))]
type Cplex = NoSolver;

/// An [AutoSolver] that tries, in order: Gurobi, Cplex, Cbc and Glpk,
/// and solves with the embedded [MicrolpSolver] when none is installed.
pub type AllSolvers = AutoSolver<
    GurobiSolver,
    AutoSolver<Cplex, AutoSolver<CbcSolver, AutoSolver<GlpkSolver, MicrolpSolver>>>,
>;

impl SolverTrait for NoSolver {
    fn run(&self, _problem: &Problem) -> Result<Solution, SolverError> {
        Err(SolverError::NoSolverAvailable)
    }
}

/// The default AutoSolver contains all supported solvers
impl<A: Default, B: Default> Default for AutoSolver<A, B> {
    fn default() -> Self {
        AutoSolver(A::default(), B::default())
    }
}

impl<SOLVER: Default, NEXT: Default> AutoSolver<SOLVER, NEXT> {
    /// Instantiate an AutoSolver with all supported solvers
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate an AutoSolver with the given solvers
    pub fn with_solver<NewSolver>(self, solver: NewSolver) -> AutoSolver<NewSolver, Self> {
        AutoSolver(solver, self)
    }
}

impl<S: SolverTrait, T: SolverTrait> SolverTrait for AutoSolver<S, T> {
    fn run(&self, problem: &Problem) -> Result<Solution, SolverError> {
        // Try solving a dummy problem (to avoid writing a large problem to disk if not necessary)
        let mut dummy = Problem::new("dummy", LpObjective::Minimize);
        let x = dummy.add_var("x", 0.0, 1.0);
        dummy.set_objective(LinearExpr::from(x));
        dummy.add_constraint(LinearExpr::from(x), std::cmp::Ordering::Less, 1.0);
        let works = self.0.run(&dummy).is_ok();
        if works {
            self.0.run(problem)
        } else {
            self.1.run(problem)
        }
    }
}
