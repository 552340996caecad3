use staffing_core::cli::{parse_config_from_args, RunMode, USAGE};
use staffing_core::model::build_model;
use staffing_core::parse::{read_coverage_windows, read_shift_starts};
use staffing_core::render::{render_model, render_outcome};
use staffing_core::solve::{IpSolver, MilpBackend, SolveOutcome};

use colored::*;
use std::process;

fn main() {
    // 1) Gather config from CLI (input paths, mode, shift length)
    let config = match parse_config_from_args() {
        Ok(c) => c,
        Err(e) => {
            println!("{e}");
            println!("{USAGE}");
            process::exit(1);
        }
    };

    // 2) Read both input files
    let starts = read_shift_starts(&config.starts_path).unwrap_or_else(|e| fail(&e));
    let windows = read_coverage_windows(&config.windows_path).unwrap_or_else(|e| fail(&e));

    // 3) Build the covering model
    let model = build_model(&starts, &windows, config.shift_hours);

    if config.debug {
        for c in &model.constraints {
            let names: Vec<&str> = c
                .covering
                .iter()
                .map(|&i| model.variables[i].name.as_str())
                .collect();
            println!(
                "DEBUG => {} needs {} staff, covered by [{}]",
                c.name,
                c.min_staff,
                names.join(", ")
            );
        }
    }

    // 4) Print the program, dump it as JSON, or hand it to the solver
    match config.mode {
        RunMode::Print => {
            if config.json {
                match serde_json::to_string_pretty(&model) {
                    Ok(text) => println!("{text}"),
                    Err(e) => fail(&format!("Could not serialize model: {e}")),
                }
            } else {
                print!("{}", render_model(&model));
            }
        }
        RunMode::Solve => {
            let outcome = MilpBackend.solve(&model);
            let report = render_outcome(&model, &outcome);
            match outcome {
                SolveOutcome::Optimal(_) => print!("{report}"),
                SolveOutcome::Infeasible => print!("{}", report.red()),
                SolveOutcome::Failed(_) => {
                    eprint!("{}", report.red());
                    process::exit(1);
                }
            }
        }
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{}", msg.red());
    process::exit(1)
}
