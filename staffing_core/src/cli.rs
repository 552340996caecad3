use std::env;

use crate::domain::DEFAULT_SHIFT_HOURS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Print,
    Solve,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub starts_path: String,
    pub windows_path: String,
    pub shift_hours: u32,
    pub mode: RunMode,
    pub json: bool,
    pub debug: bool,
}

pub const USAGE: &str = "Usage: staffing_core <shift_starts_file> <coverage_file> \
[solve] [--shift-hours=N] [--json] [--debug]";

/// Parses command-line arguments to set:
/// - the two positional input files (shift starts, coverage windows)
/// - print vs. solve mode, e.g. "staffing_core starts.txt cover.txt solve"
/// - the shift length via --shift-hours=N (default 8)
pub fn parse_config_from_args() -> Result<RunConfig, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_config(&args)
}

pub fn parse_config(args: &[String]) -> Result<RunConfig, String> {
    let mut shift_hours = DEFAULT_SHIFT_HOURS;
    let mut mode = RunMode::Print;
    let mut json = false;
    let mut debug = false;
    let mut paths = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--shift-hours=") {
            shift_hours = value
                .parse()
                .map_err(|_| format!("Bad --shift-hours value: {value}"))?;
            if !(1..=24).contains(&shift_hours) {
                return Err(format!("--shift-hours must lie in 1-24, got {shift_hours}"));
            }
        } else if arg == "--json" {
            json = true;
        } else if arg == "--debug" {
            debug = true;
        } else if arg.eq_ignore_ascii_case("solve") {
            mode = RunMode::Solve;
        } else if arg.starts_with("--") {
            return Err(format!("Unknown flag: {arg}"));
        } else {
            paths.push(arg.clone());
        }
    }

    if paths.len() < 2 {
        return Err("Expected two input files: shift starts and coverage windows".to_string());
    }

    Ok(RunConfig {
        starts_path: paths[0].clone(),
        windows_path: paths[1].clone(),
        shift_hours,
        mode,
        json,
        debug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_paths_default_to_print_mode() {
        let config = parse_config(&args(&["starts.txt", "cover.txt"])).unwrap();
        assert_eq!(config.starts_path, "starts.txt");
        assert_eq!(config.windows_path, "cover.txt");
        assert_eq!(config.mode, RunMode::Print);
        assert_eq!(config.shift_hours, DEFAULT_SHIFT_HOURS);
        assert!(!config.json);
        assert!(!config.debug);
    }

    #[test]
    fn solve_keyword_and_flags_are_position_independent() {
        let config = parse_config(&args(&[
            "--debug",
            "starts.txt",
            "SOLVE",
            "cover.txt",
            "--shift-hours=12",
        ]))
        .unwrap();
        assert_eq!(config.mode, RunMode::Solve);
        assert_eq!(config.shift_hours, 12);
        assert!(config.debug);
        assert_eq!(config.starts_path, "starts.txt");
        assert_eq!(config.windows_path, "cover.txt");
    }

    #[test]
    fn missing_paths_is_an_error() {
        assert!(parse_config(&args(&[])).is_err());
        assert!(parse_config(&args(&["starts.txt"])).is_err());
        assert!(parse_config(&args(&["starts.txt", "solve"])).is_err());
    }

    #[test]
    fn bad_flags_are_rejected() {
        assert!(parse_config(&args(&["a", "b", "--shift-hours=0"])).is_err());
        assert!(parse_config(&args(&["a", "b", "--shift-hours=25"])).is_err());
        assert!(parse_config(&args(&["a", "b", "--shift-hours=soon"])).is_err());
        assert!(parse_config(&args(&["a", "b", "--frobnicate"])).is_err());
    }
}
