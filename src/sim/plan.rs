//! Immutable per-session transfer plan.
//!
//! A `TransferPlan` is computed once from the validated inputs and never
//! mutated afterwards; the engine and renderer only read from it.

use std::time::Instant;

use chrono::{DateTime, Duration as ChronoDuration, Local};

use crate::config::types::SimPolicy;

/// Adaptive refresh interval for a run of `total_seconds`.
///
/// One hundredth of the total duration, clamped to the policy bounds
/// (0.1s..1.0s by default): short transfers still get a visible animation,
/// long transfers never redraw more than once per second.
pub fn tick_interval(total_seconds: f64, policy: &SimPolicy) -> f64 {
    (total_seconds / policy.ticks_per_run)
        .clamp(policy.min_tick_seconds, policy.max_tick_seconds)
}

/// Derived parameters for one simulated transfer session.
#[derive(Debug, Clone)]
pub struct TransferPlan {
    /// Declared payload size in MB. Invariant: positive and finite.
    pub size_mb: f64,
    /// Declared transfer rate in MB/s. Invariant: positive and finite.
    pub speed_mbps: f64,
    /// Total simulated duration in seconds.
    pub total_seconds: f64,
    /// Seconds between rendered frames.
    pub tick_interval: f64,
    /// Index of the final tick; the loop renders frames `0..=total_ticks`.
    pub total_ticks: u64,
    /// Wall-clock time at plan creation, for the projected finish.
    pub started_at: DateTime<Local>,
    /// Monotonic start, for true elapsed time on cancellation.
    pub started: Instant,
    /// Rendering/scheduling constants for this session.
    pub policy: SimPolicy,
}

impl TransferPlan {
    /// Build the plan for a transfer of `size_mb` at `speed_mbps`.
    ///
    /// Inputs must already be validated positive; see `units::parse_size`
    /// and `units::parse_speed`.
    pub fn new(size_mb: f64, speed_mbps: f64, policy: SimPolicy) -> Self {
        let total_seconds = size_mb / speed_mbps;
        let tick = tick_interval(total_seconds, &policy);
        // The division can land a hair under a whole tick count (e.g.
        // 4.0 / 0.1); nudge before flooring so the final 100% frame is
        // never dropped.
        let total_ticks = (total_seconds / tick + 1e-9).floor() as u64;
        Self {
            size_mb,
            speed_mbps,
            total_seconds,
            tick_interval: tick,
            total_ticks,
            started_at: Local::now(),
            started: Instant::now(),
            policy,
        }
    }

    /// Wall-clock timestamp the transfer is projected to finish at.
    pub fn projected_finish(&self) -> DateTime<Local> {
        let millis = ChronoDuration::milliseconds((self.total_seconds * 1000.0) as i64);
        self.started_at
            .checked_add_signed(millis)
            .unwrap_or(self.started_at)
    }
}
