use regex::Regex;
use std::fs;

use crate::domain::{CoverageWindow, ShiftStart};

/// Reads the shift-starts file: one integer hour (0-23) per line, blank
/// lines ignored. Order of appearance is preserved.
pub fn read_shift_starts(path: &str) -> Result<Vec<ShiftStart>, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("Could not read {}: {}", path, e))?;
    parse_shift_starts(&text, path)
}

/// Reads the coverage file: one `start;end;min_staff` triple per line,
/// blank lines ignored.
pub fn read_coverage_windows(path: &str) -> Result<Vec<CoverageWindow>, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("Could not read {}: {}", path, e))?;
    parse_coverage_windows(&text, path)
}

pub fn parse_shift_starts(text: &str, source: &str) -> Result<Vec<ShiftStart>, String> {
    let mut out = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let hour: u32 = line.parse().map_err(|_| {
            format!(
                "{}:{}: expected an hour (0-23), got {:?}",
                source,
                idx + 1,
                line
            )
        })?;
        if hour > 23 {
            return Err(format!(
                "{}:{}: hour {} out of range 0-23",
                source,
                idx + 1,
                hour
            ));
        }
        out.push(ShiftStart { hour });
    }

    Ok(out)
}

pub fn parse_coverage_windows(text: &str, source: &str) -> Result<Vec<CoverageWindow>, String> {
    let line_re = Regex::new(r"^(\d+)\s*;\s*(\d+)\s*;\s*(\d+)$").unwrap();
    let mut out = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let caps = line_re.captures(line).ok_or_else(|| {
            format!(
                "{}:{}: expected start;end;min_staff, got {:?}",
                source,
                idx + 1,
                line
            )
        })?;

        let field = |n: usize| -> Result<u32, String> {
            caps[n]
                .parse()
                .map_err(|_| format!("{}:{}: number too large in {:?}", source, idx + 1, line))
        };
        let start = field(1)?;
        let end = field(2)?;
        let min_staff = field(3)?;

        if start > 24 || end > 24 {
            return Err(format!(
                "{}:{}: window hours must lie in 0-24, got {};{}",
                source,
                idx + 1,
                start,
                end
            ));
        }

        out.push(CoverageWindow {
            start,
            end,
            min_staff,
        });
    }

    Ok(out)
}
