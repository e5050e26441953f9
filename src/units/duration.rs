/// Format a second count as zero-padded `HH:MM:SS`.
///
/// Fractional seconds are truncated, never rounded up. Hours are unbounded
/// (90000 seconds renders as `25:00:00`, not wrapped into days). Callers
/// clamp negative inputs to zero before formatting.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_duration(3661.0), "01:01:01");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_duration(0.0), "00:00:00");
    }

    #[test]
    fn hours_are_unbounded() {
        assert_eq!(format_duration(90000.0), "25:00:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_duration(59.9), "00:00:59");
        assert_eq!(format_duration(3599.99), "00:59:59");
    }
}
