//! Formatting utilities used for CLI outputs.

/// Human readable duration: `H:MM:SS`, prefixed by `N day(s), ` when at
/// least one full day is included.
///
/// `61` → `0:01:01`, `90061` → `1 day, 1:01:01`, `172800` → `2 days, 0:00:00`
pub fn secs2readable(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let rem = total_secs % 86_400;
    let hours = rem / 3_600;
    let minutes = (rem % 3_600) / 60;
    let seconds = rem % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Truncate fractional seconds toward zero, clamping negatives to zero.
pub fn whole_secs(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        secs.trunc() as u64
    } else {
        0
    }
}

