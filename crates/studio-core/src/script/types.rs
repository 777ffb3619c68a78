use super::config::EditStep;

/// Thread-safe progress reporting for edit scripts.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// Step `index` (0-based) is about to run.
    fn begin_step(&self, _index: usize, _step: &EditStep) {}

    /// Step `index` has finished.
    fn finish_step(&self, _index: usize) {}
}

/// No-op progress reporter, used when `run_script` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
