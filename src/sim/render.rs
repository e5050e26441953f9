//! Text rendering for progress frames and session summaries.
//!
//! `render_frame` is a pure function of its inputs so the display format
//! is testable without a terminal; the engine owns the cursor control
//! around it.

use chrono::{DateTime, Duration as ChronoDuration, Local};

use crate::units::duration::format_duration;
use crate::units::{format_size, format_speed};

use super::frame::ProgressFrame;
use super::plan::TransferPlan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render one progress line for `frame`.
///
/// The ETA timestamp is recomputed as `now + remaining` every frame, so it
/// stays honest even when real sleeps drift from the tick schedule.
pub fn render_frame(frame: &ProgressFrame, plan: &TransferPlan, now: DateTime<Local>) -> String {
    let policy = &plan.policy;
    let filled = ((policy.bar_width as f64 * frame.fraction).floor() as usize).min(policy.bar_width);

    let mut bar = String::with_capacity(policy.bar_width * 3);
    for _ in 0..filled {
        bar.push(policy.filled_glyph);
    }
    for _ in filled..policy.bar_width {
        bar.push(policy.empty_glyph);
    }

    let eta = now
        .checked_add_signed(ChronoDuration::milliseconds(
            (frame.remaining_seconds * 1000.0) as i64,
        ))
        .unwrap_or(now);

    format!(
        "[{}] {:6.2}% | {} / {} | {} | elapsed {} | left {} | ETA {}",
        bar,
        frame.fraction * 100.0,
        format_size(frame.completed_mb),
        format_size(plan.size_mb),
        format_speed(plan.speed_mbps),
        format_duration(frame.elapsed_seconds),
        format_duration(frame.remaining_seconds),
        eta.format(TIMESTAMP_FORMAT),
    )
}

/// Summary block appended after the final frame of a completed session.
pub fn completion_summary(plan: &TransferPlan, finished: DateTime<Local>) -> String {
    format!(
        "\nTransfer complete!\n  Size:     {}\n  Speed:    {}\n  Duration: {}\n  Finished: {}\n",
        format_size(plan.size_mb),
        format_speed(plan.speed_mbps),
        format_duration(plan.total_seconds),
        finished.format(TIMESTAMP_FORMAT),
    )
}

/// Summary line appended when the session is interrupted.
pub fn cancellation_summary(elapsed_seconds: f64, fraction: f64) -> String {
    format!(
        "\nTransfer cancelled: {:.2}% done after {}.\n",
        fraction * 100.0,
        format_duration(elapsed_seconds),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::SimPolicy;
    use chrono::TimeZone;

    fn plan() -> TransferPlan {
        TransferPlan::new(2048.0, 512.0, SimPolicy::default())
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn empty_bar_at_zero_fraction() {
        let plan = plan();
        let line = render_frame(&ProgressFrame::at(0.0, &plan), &plan, fixed_now());
        assert!(line.starts_with(&format!("[{}]", "-".repeat(40))));
        assert!(line.contains("  0.00%"));
    }

    #[test]
    fn half_bar_at_half_fraction() {
        let plan = plan();
        let line = render_frame(&ProgressFrame::at(2.0, &plan), &plan, fixed_now());
        let expected = format!("[{}{}]", "█".repeat(20), "-".repeat(20));
        assert!(line.starts_with(&expected));
        assert!(line.contains(" 50.00%"));
    }

    #[test]
    fn full_bar_at_completion() {
        let plan = plan();
        let line = render_frame(&ProgressFrame::at(plan.total_seconds, &plan), &plan, fixed_now());
        assert!(line.starts_with(&format!("[{}]", "█".repeat(40))));
        assert!(line.contains("100.00%"));
        assert!(line.contains("2.00 GB / 2.00 GB"));
        assert!(line.contains("512.00 MB/s"));
    }

    #[test]
    fn eta_is_now_plus_remaining() {
        let plan = plan();
        // Frame with 10 seconds remaining against a fixed clock.
        let frame = ProgressFrame {
            elapsed_seconds: 0.0,
            completed_mb: 0.0,
            fraction: 0.0,
            remaining_seconds: 10.0,
        };
        let line = render_frame(&frame, &plan, fixed_now());
        assert!(line.contains("ETA 2024-01-02 03:04:15"));
    }

    #[test]
    fn frame_line_lists_elapsed_and_remaining() {
        let plan = plan();
        let line = render_frame(&ProgressFrame::at(2.0, &plan), &plan, fixed_now());
        assert!(line.contains("elapsed 00:00:02"));
        assert!(line.contains("left 00:00:02"));
    }

    #[test]
    fn completion_summary_lists_plan_facts() {
        let plan = plan();
        let summary = completion_summary(&plan, fixed_now());
        assert!(summary.contains("Transfer complete!"));
        assert!(summary.contains("Size:     2.00 GB"));
        assert!(summary.contains("Speed:    512.00 MB/s"));
        assert!(summary.contains("Duration: 00:00:04"));
        assert!(summary.contains("Finished: 2024-01-02 03:04:05"));
    }

    #[test]
    fn cancellation_summary_reports_progress() {
        let summary = cancellation_summary(10.2, 0.1);
        assert!(summary.contains("Transfer cancelled"));
        assert!(summary.contains("10.00% done"));
        assert!(summary.contains("00:00:10"));
    }
}
