use serde::Serialize;

use crate::cover::shift_covers_window;
use crate::domain::{CoverageWindow, ShiftStart};

/// One integer unknown: how many employees begin a shift at `start_hour`.
/// `name` is `x_<n>` where n is the 1-based position in the input file, so
/// duplicate hours stay independent variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionVar {
    pub name: String,
    pub start_hour: u32,
}

/// One covering constraint `r_<n>`: the variables listed in `covering` must
/// sum to at least `min_staff`. `covering` holds 0-based indices into
/// `StaffingModel::variables`, in input order. An empty list is kept as a
/// degenerate `0 >= min_staff` constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverConstraint {
    pub name: String,
    pub min_staff: u32,
    pub covering: Vec<usize>,
}

/// The whole covering program for one run. The objective is implicit and
/// never varies: minimise the sum of every variable, each appearing exactly
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffingModel {
    pub shift_hours: u32,
    pub variables: Vec<DecisionVar>,
    pub constraints: Vec<CoverConstraint>,
}

pub fn build_model(
    starts: &[ShiftStart],
    windows: &[CoverageWindow],
    shift_hours: u32,
) -> StaffingModel {
    let variables = starts
        .iter()
        .enumerate()
        .map(|(i, s)| DecisionVar {
            name: format!("x_{}", i + 1),
            start_hour: s.hour,
        })
        .collect();

    let constraints = windows
        .iter()
        .enumerate()
        .map(|(j, w)| CoverConstraint {
            name: format!("r_{}", j + 1),
            min_staff: w.min_staff,
            covering: starts
                .iter()
                .enumerate()
                .filter(|(_, s)| shift_covers_window(**s, w, shift_hours))
                .map(|(i, _)| i)
                .collect(),
        })
        .collect();

    StaffingModel {
        shift_hours,
        variables,
        constraints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts(hours: &[u32]) -> Vec<ShiftStart> {
        hours.iter().map(|&hour| ShiftStart { hour }).collect()
    }

    fn window(start: u32, end: u32, min_staff: u32) -> CoverageWindow {
        CoverageWindow {
            start,
            end,
            min_staff,
        }
    }

    #[test]
    fn one_variable_per_start_and_one_constraint_per_window() {
        let model = build_model(
            &starts(&[8, 8, 14, 20]),
            &[window(9, 12, 2), window(15, 18, 1)],
            8,
        );
        assert_eq!(model.variables.len(), 4);
        assert_eq!(model.constraints.len(), 2);
        // Duplicate start hours still get their own variables.
        assert_eq!(model.variables[0].name, "x_1");
        assert_eq!(model.variables[1].name, "x_2");
        assert_eq!(model.variables[1].start_hour, 8);
    }

    #[test]
    fn covering_sets_follow_the_predicate_in_input_order() {
        let model = build_model(
            &starts(&[8, 14, 20]),
            &[window(9, 12, 2), window(15, 18, 1), window(22, 24, 1)],
            8,
        );
        assert_eq!(model.constraints[0].covering, vec![0]);
        assert_eq!(model.constraints[1].covering, vec![1]);
        // 20:00 runs to 04:00; its evening piece reaches 24.
        assert_eq!(model.constraints[2].covering, vec![2]);
    }

    #[test]
    fn uncoverable_window_keeps_an_empty_constraint() {
        let model = build_model(&starts(&[8]), &[window(20, 23, 1)], 8);
        assert_eq!(model.constraints.len(), 1);
        assert!(model.constraints[0].covering.is_empty());
        assert_eq!(model.constraints[0].min_staff, 1);
    }

    #[test]
    fn no_windows_means_no_constraints() {
        let model = build_model(&starts(&[8, 14]), &[], 8);
        assert_eq!(model.variables.len(), 2);
        assert!(model.constraints.is_empty());
    }

    #[test]
    fn building_twice_is_structurally_identical() {
        let s = starts(&[8, 14, 20, 20]);
        let w = [window(9, 12, 2), window(22, 24, 1)];
        assert_eq!(build_model(&s, &w, 8), build_model(&s, &w, 8));
    }

    #[test]
    fn a_variable_may_sit_in_many_constraints() {
        // Shift 0:00-24:00 covers everything inside the day.
        let model = build_model(
            &starts(&[0]),
            &[window(1, 5, 1), window(6, 10, 2), window(20, 24, 1)],
            24,
        );
        for c in &model.constraints {
            assert_eq!(c.covering, vec![0]);
        }
    }
}
