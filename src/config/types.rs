/// Verbosity level controlling tracing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Suppress all output except errors
    Quiet,
    /// Normal output (info level)
    Normal,
    /// Verbose output (debug level)
    Verbose,
    /// Maximum output (trace level)
    Trace,
}

impl From<(bool, u8)> for Verbosity {
    /// Convert from (quiet_flag, verbose_count) to Verbosity.
    ///
    /// - quiet=true -> Quiet (regardless of verbose count)
    /// - verbose=0  -> Normal
    /// - verbose=1  -> Verbose
    /// - verbose=2+ -> Trace
    fn from((quiet, verbose_count): (bool, u8)) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            match verbose_count {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

impl Verbosity {
    /// Return the tracing filter string for this verbosity level.
    pub fn as_tracing_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

/// Rendering and scheduling constants for one simulation run.
///
/// Earlier revisions of this tool drifted on bar width, refresh clamps,
/// and bar glyphs; they are consolidated here as a single policy value
/// owned by the plan.
#[derive(Debug, Clone)]
pub struct SimPolicy {
    /// Width of the progress bar in cells.
    pub bar_width: usize,
    /// Glyph for a filled bar cell.
    pub filled_glyph: char,
    /// Glyph for an empty bar cell.
    pub empty_glyph: char,
    /// Target tick count across a full run, before clamping.
    pub ticks_per_run: f64,
    /// Lower bound on the tick interval in seconds.
    pub min_tick_seconds: f64,
    /// Upper bound on the tick interval in seconds.
    pub max_tick_seconds: f64,
}

impl Default for SimPolicy {
    fn default() -> Self {
        Self {
            bar_width: 40,
            filled_glyph: '█',
            empty_glyph: '-',
            ticks_per_run: 100.0,
            min_tick_seconds: 0.1,
            max_tick_seconds: 1.0,
        }
    }
}
