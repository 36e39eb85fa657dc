// Operator progress reporting - a single line-oriented log side channel

/// Sink for operator-facing progress lines.
///
/// One plain-text message per call; no structure, no levels. The driver
/// emits through this so tests can capture the exact line sequence.
pub trait ProgressLog {
    fn log(&self, message: &str);
}

/// Default sink: routes progress lines through `tracing` at info level.
#[derive(Debug, Default)]
pub struct TracingProgress;

impl ProgressLog for TracingProgress {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Capturing sink used by tests and dry runs.
#[derive(Debug, Default)]
pub struct CollectingProgress {
    lines: std::sync::Mutex<Vec<String>>,
}

impl CollectingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl ProgressLog for CollectingProgress {
    fn log(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}
