//! One-time terminal capability check.

/// Marker for the per-process terminal initialization.
///
/// The simulation core never touches the environment; whatever platform
/// setup the output terminal needs happens here, once, before the render
/// loop starts.
pub struct TerminalCapability;

impl TerminalCapability {
    /// Probe (and on Windows, enable) ANSI escape support.
    pub fn init() -> Self {
        #[cfg(windows)]
        if !crossterm::ansi_support::supports_ansi() {
            tracing::warn!(
                "terminal does not support ANSI escapes; progress redraw may be garbled"
            );
        }
        Self
    }
}
