//! Span and timing helpers.

use tracing::{info_span, Span};

/// Span for one CLI command.
pub fn command_span(command: &str) -> Span {
    info_span!("command", name = %command)
}

/// Span for work on a single word.
pub fn word_span(word: &str, date: &str) -> Span {
    info_span!("word", word = %word, date = %date)
}

/// Wall-clock timer that logs at debug level when finished.
pub struct Timer {
    start: std::time::Instant,
    operation: &'static str,
}

impl Timer {
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    /// Milliseconds since the timer started.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    /// Log and return the elapsed milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.elapsed_ms();
        tracing::debug!(
            operation = %self.operation,
            duration_ms = %duration_ms,
            "operation completed"
        );
        duration_ms
    }
}

/// Time a block and log its duration at debug level.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}
