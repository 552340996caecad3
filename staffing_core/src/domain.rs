use serde::{Deserialize, Serialize};

// Every run plans one fixed shift length; 8 hours unless overridden on the
// command line.
pub const DEFAULT_SHIFT_HOURS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStart {
    pub hour: u32, // e.g. 20 for a shift beginning at 20:00
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageWindow {
    pub start: u32,     // first hour that must be staffed
    pub end: u32,       // hour the window closes, up to 24
    pub min_staff: u32, // headcount required throughout [start..end]
}
