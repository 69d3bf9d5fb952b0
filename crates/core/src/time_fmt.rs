// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! Human-readable elapsed-time formatting for the console.

/// Format a millisecond duration as a compact elapsed string.
///
/// `950` → "0.9s", `61_000` → "1m 1s", `3_725_000` → "1h 2m".
pub fn format_elapsed_ms(ms: u64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        let tenths = (ms % 1000) / 100;
        return format!("{secs}.{tenths}s");
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m {}s", secs % 60);
    }
    format!("{}h {}m", mins / 60, mins % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[yare::parameterized(
        sub_second   = { 950, "0.9s" },
        zero         = { 0, "0.0s" },
        seconds      = { 12_300, "12.3s" },
        minute       = { 61_000, "1m 1s" },
        hour         = { 3_725_000, "1h 2m" },
    )]
    fn formats_elapsed(ms: u64, expected: &str) {
        assert_eq!(format_elapsed_ms(ms), expected);
    }
}
