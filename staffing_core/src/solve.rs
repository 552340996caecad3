use good_lp::{
    default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel,
};

use crate::model::StaffingModel;

/// An optimal assignment. `headcounts` is positional, matching
/// `StaffingModel::variables`, so each value is attributable to its `x_<n>`
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffingPlan {
    pub headcounts: Vec<u64>,
    pub total_staff: u64,
}

/// What came back from the optimizer, reduced to the three cases callers
/// branch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Optimal(StaffingPlan),
    Infeasible,
    Failed(String),
}

/// Minimal capability the core needs from an integer-program solver. The
/// formulation stays testable against a stub; the bundled backend is
/// `MilpBackend`.
pub trait IpSolver {
    fn solve(&self, model: &StaffingModel) -> SolveOutcome;
}

/// MILP backend over good_lp's bundled microlp solver.
pub struct MilpBackend;

impl IpSolver for MilpBackend {
    fn solve(&self, model: &StaffingModel) -> SolveOutcome {
        // A window nothing covers can never be met; report that without
        // round-tripping a 0 >= b constraint through the solver.
        if model
            .constraints
            .iter()
            .any(|c| c.covering.is_empty() && c.min_staff > 0)
        {
            return SolveOutcome::Infeasible;
        }

        let mut vars = ProblemVariables::new();
        let xs: Vec<_> = model
            .variables
            .iter()
            .map(|_| vars.add(variable().integer().min(0.)))
            .collect();

        let mut objective = Expression::with_capacity(xs.len());
        for x in &xs {
            objective.add_mul(1., *x);
        }

        let mut problem = vars.minimise(objective).using(default_solver);
        for c in &model.constraints {
            // Any empty covering set left at this point has min_staff 0,
            // a vacuous 0 >= 0 row the solver does not need to see.
            if c.covering.is_empty() {
                continue;
            }
            let mut lhs = Expression::with_capacity(c.covering.len());
            for &i in &c.covering {
                lhs.add_mul(1., xs[i]);
            }
            problem = problem.with(lhs.geq(c.min_staff as f64));
        }

        match problem.solve() {
            Ok(sol) => {
                let headcounts: Vec<u64> =
                    xs.iter().map(|x| sol.value(*x).round() as u64).collect();
                let total_staff = headcounts.iter().sum();
                SolveOutcome::Optimal(StaffingPlan {
                    headcounts,
                    total_staff,
                })
            }
            Err(ResolutionError::Infeasible) => SolveOutcome::Infeasible,
            Err(e) => SolveOutcome::Failed(e.to_string()),
        }
    }
}
