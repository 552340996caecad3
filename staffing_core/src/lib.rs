pub mod cli;
pub mod cover;
pub mod domain;
pub mod model;
pub mod parse;
pub mod render;
pub mod solve;

use domain::{CoverageWindow, ShiftStart};
use model::build_model;
use solve::{IpSolver, MilpBackend, SolveOutcome};

/// Builds the covering program for the given inputs and runs the bundled
/// MILP backend over it.
pub fn solve_staffing(
    starts: &[ShiftStart],
    windows: &[CoverageWindow],
    shift_hours: u32,
) -> SolveOutcome {
    let model = build_model(starts, windows, shift_hours);
    MilpBackend.solve(&model)
}
