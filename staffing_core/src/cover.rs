use crate::domain::{CoverageWindow, ShiftStart};

/// Whether an employee starting at `shift.hour` and staying on for
/// `shift_hours` is present for the whole of `window`.
///
/// A shift that runs past midnight is split into two pieces on the 24-hour
/// clock, `[start, 24)` and `[0, end mod 24)`, and the window must sit wholly
/// inside one piece. A window whose own `end` lies before its `start`
/// (straddling midnight) is not representable here; the bound checks
/// degenerate for such input (see the tests).
pub fn shift_covers_window(shift: ShiftStart, window: &CoverageWindow, shift_hours: u32) -> bool {
    let shift_end = shift.hour + shift_hours;

    if shift_end < 24 {
        // Same-day shift: plain interval containment.
        shift.hour <= window.start && shift_end >= window.end
    } else {
        // Overnight shift. The evening piece runs [start, 24), the morning
        // piece [0, end mod 24). The morning piece begins at hour 0, so only
        // its end bound needs checking.
        let evening = shift.hour <= window.start && window.end <= 24;
        let morning = shift_end % 24 >= window.end;
        evening || morning
    }
}
