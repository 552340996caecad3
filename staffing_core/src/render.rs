use crate::model::{CoverConstraint, StaffingModel};
use crate::solve::SolveOutcome;

/// Deterministic plain-text listing of the whole program: variables,
/// constraints, objective, all in input order.
pub fn render_model(model: &StaffingModel) -> String {
    let mut out = String::new();

    out.push_str("** Decision variables **\n");
    for v in &model.variables {
        out.push_str(&format!(
            "{}: employees starting at {:02}:00\n",
            v.name, v.start_hour
        ));
    }

    out.push_str("\n** Constraints **\n");
    for c in &model.constraints {
        out.push_str(&render_constraint(model, c));
        out.push('\n');
    }

    out.push_str("\n** Objective **\n");
    out.push_str(&format!("{}\n", render_objective(model)));

    out
}

pub fn render_constraint(model: &StaffingModel, c: &CoverConstraint) -> String {
    format!("{} >= {}  # {}", covering_sum(model, c), c.min_staff, c.name)
}

pub fn render_objective(model: &StaffingModel) -> String {
    let sum = if model.variables.is_empty() {
        "0".to_string()
    } else {
        model
            .variables
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!("Minimize Z = {}", sum)
}

/// Report for one solver run: a status line, then for the optimal case the
/// per-variable headcounts, the objective value, and each constraint
/// re-rendered with its achieved left-hand side.
pub fn render_outcome(model: &StaffingModel, outcome: &SolveOutcome) -> String {
    match outcome {
        SolveOutcome::Infeasible => {
            "Status: infeasible (no assignment satisfies every window)\n".to_string()
        }
        SolveOutcome::Failed(msg) => format!("Status: solver error: {}\n", msg),
        SolveOutcome::Optimal(plan) => {
            let mut out = String::from("Status: optimal\n");

            for (v, &n) in model.variables.iter().zip(&plan.headcounts) {
                out.push_str(&format!(
                    "{} = {}  # starting at {:02}:00\n",
                    v.name, n, v.start_hour
                ));
            }
            out.push_str(&format!("Z* = {}\n", plan.total_staff));

            if !model.constraints.is_empty() {
                out.push_str("\n** Constraints (solved) **\n");
                for c in &model.constraints {
                    let achieved: u64 = c.covering.iter().map(|&i| plan.headcounts[i]).sum();
                    out.push_str(&format!(
                        "{} >= {}  # {}: {} >= {}\n",
                        covering_sum(model, c),
                        c.min_staff,
                        c.name,
                        achieved,
                        c.min_staff
                    ));
                }
            }

            out
        }
    }
}

fn covering_sum(model: &StaffingModel, c: &CoverConstraint) -> String {
    if c.covering.is_empty() {
        "0".to_string()
    } else {
        c.covering
            .iter()
            .map(|&i| model.variables[i].name.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
