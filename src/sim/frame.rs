//! Per-tick progress snapshots.

use super::plan::TransferPlan;

/// Snapshot of simulated progress at one elapsed offset into a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFrame {
    pub elapsed_seconds: f64,
    /// Simulated completed volume in MB, clamped at the declared size.
    pub completed_mb: f64,
    /// Completed fraction in [0, 1], monotone across successive frames.
    pub fraction: f64,
    pub remaining_seconds: f64,
}

impl ProgressFrame {
    /// Compute the frame for `elapsed` seconds into `plan`.
    ///
    /// Once `elapsed` reaches the planned duration the frame reports the
    /// full declared size, so the final fraction is exactly 1.0 rather
    /// than whatever `speed * elapsed` rounds to.
    pub fn at(elapsed: f64, plan: &TransferPlan) -> Self {
        let completed_mb = if elapsed >= plan.total_seconds {
            plan.size_mb
        } else {
            (plan.speed_mbps * elapsed).min(plan.size_mb)
        };
        let fraction = completed_mb / plan.size_mb;
        let remaining_seconds = (plan.total_seconds - elapsed).max(0.0);
        Self {
            elapsed_seconds: elapsed,
            completed_mb,
            fraction,
            remaining_seconds,
        }
    }
}
