//! The render loop driving a simulated transfer session.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::cursor::MoveToColumn;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use crate::error::EtaError;

use super::frame::ProgressFrame;
use super::plan::TransferPlan;
use super::render;

/// Cooperative cancellation flag shared with the Ctrl+C handler.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Terminal record of one simulated session. Exactly one is produced per run.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed {
        total_seconds: f64,
        finished: DateTime<Local>,
    },
    Cancelled {
        elapsed_seconds: f64,
        fraction: f64,
    },
}

/// Drives the tick loop for a single `TransferPlan`.
///
/// The session moves `Initialized -> Running -> {Completed | Cancelled}`;
/// both terminal states are final. The engine is single-use: `run`
/// consumes it and returns exactly one outcome.
pub struct ProgressEngine<W: Write> {
    plan: TransferPlan,
    cancel: CancelToken,
    sink: W,
}

impl<W: Write> ProgressEngine<W> {
    pub fn new(plan: TransferPlan, cancel: CancelToken, sink: W) -> Self {
        Self { plan, cancel, sink }
    }

    /// Run the loop to completion or cancellation.
    ///
    /// Renders frames `0..=total_ticks`, overwriting the previous line in
    /// place and flushing before each inter-tick sleep so an interrupted
    /// session always shows its latest frame. The cancel token is observed
    /// at the top of every iteration; no frame is rendered after it trips.
    pub fn run(mut self) -> Result<SessionOutcome, EtaError> {
        for tick in 0..=self.plan.total_ticks {
            if self.cancel.is_cancelled() {
                return self.finish_cancelled();
            }

            // The final tick pins the display at the full duration even
            // when the tick grid does not land on it exactly.
            let elapsed = if tick == self.plan.total_ticks {
                self.plan.total_seconds
            } else {
                tick as f64 * self.plan.tick_interval
            };
            let frame = ProgressFrame::at(elapsed, &self.plan);
            let line = render::render_frame(&frame, &self.plan, Local::now());

            self.sink.queue(MoveToColumn(0))?;
            self.sink.queue(Clear(ClearType::CurrentLine))?;
            write!(self.sink, "{}", line)?;
            self.sink.flush()?;

            if tick < self.plan.total_ticks {
                thread::sleep(Duration::from_secs_f64(self.plan.tick_interval));
            }
        }
        self.finish_completed()
    }

    fn finish_completed(mut self) -> Result<SessionOutcome, EtaError> {
        let finished = self.plan.projected_finish();
        writeln!(self.sink)?;
        write!(
            self.sink,
            "{}",
            render::completion_summary(&self.plan, finished)
        )?;
        self.sink.flush()?;
        tracing::debug!(total_seconds = self.plan.total_seconds, "session completed");
        Ok(SessionOutcome::Completed {
            total_seconds: self.plan.total_seconds,
            finished,
        })
    }

    // Cancellation reports real wall-clock elapsed, not the idealized tick
    // schedule: the interrupt may arrive mid-sleep.
    fn finish_cancelled(mut self) -> Result<SessionOutcome, EtaError> {
        let elapsed_seconds = self.plan.started.elapsed().as_secs_f64();
        let fraction = (self.plan.speed_mbps * elapsed_seconds / self.plan.size_mb).min(1.0);
        writeln!(self.sink)?;
        write!(
            self.sink,
            "{}",
            render::cancellation_summary(elapsed_seconds, fraction)
        )?;
        self.sink.flush()?;
        tracing::debug!(elapsed_seconds, fraction, "session cancelled");
        Ok(SessionOutcome::Cancelled {
            elapsed_seconds,
            fraction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::SimPolicy;

    fn run_to_string(plan: TransferPlan, cancel: CancelToken) -> (SessionOutcome, String) {
        let mut buf = Vec::new();
        let outcome = ProgressEngine::new(plan, cancel, &mut buf).run().unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn near_instant_run_emits_one_frame_and_summary() {
        // Total duration well under one tick: exactly one frame at 100%.
        let plan = TransferPlan::new(10.24, 102_400.0, SimPolicy::default());
        let (outcome, output) = run_to_string(plan, CancelToken::new());
        match outcome {
            SessionOutcome::Completed { total_seconds, .. } => assert!(total_seconds < 0.1),
            other => panic!("expected Completed, got {:?}", other),
        }
        assert_eq!(output.matches("| ETA ").count(), 1);
        assert!(output.contains("100.00%"));
        assert!(output.contains("Transfer complete!"));
    }

    #[test]
    fn pre_cancelled_engine_renders_no_frames() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let plan = TransferPlan::new(2048.0, 512.0, SimPolicy::default());
        let (outcome, output) = run_to_string(plan, cancel);
        match outcome {
            SessionOutcome::Cancelled { fraction, .. } => assert!(fraction < 0.05),
            other => panic!("expected Cancelled, got {:?}", other),
        }
        assert_eq!(output.matches("| ETA ").count(), 0);
        assert!(output.contains("Transfer cancelled"));
    }

    #[test]
    fn mid_run_cancellation_uses_wall_clock_elapsed() {
        let cancel = CancelToken::new();
        let handle = {
            let token = cancel.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(300));
                token.cancel();
            })
        };
        // 100 seconds of simulated work at a 1-second tick; the token trips
        // during the first sleep and is observed at the next iteration.
        let plan = TransferPlan::new(100.0, 1.0, SimPolicy::default());
        let (outcome, output) = run_to_string(plan, cancel);
        handle.join().unwrap();
        match outcome {
            SessionOutcome::Cancelled {
                elapsed_seconds,
                fraction,
            } => {
                // Generous bounds for CI scheduling jitter.
                assert!(elapsed_seconds >= 0.3, "elapsed {}", elapsed_seconds);
                assert!(elapsed_seconds < 10.0, "elapsed {}", elapsed_seconds);
                assert!((0.003..0.1).contains(&fraction), "fraction {}", fraction);
            }
            other => panic!("expected Cancelled, got {:?}", other),
        }
        assert!(output.contains("Transfer cancelled"));
    }

    #[test]
    fn completed_outcome_reports_plan_duration() {
        let plan = TransferPlan::new(0.001, 1000.0, SimPolicy::default());
        let total = plan.total_seconds;
        let (outcome, _) = run_to_string(plan, CancelToken::new());
        match outcome {
            SessionOutcome::Completed { total_seconds, .. } => {
                assert_eq!(total_seconds, total)
            }
            other => panic!("expected Completed, got {:?}", other),
        }
    }
}
