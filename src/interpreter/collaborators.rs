//! Collaborators
//!
//! Narrow capability traits the shell reports to. Both are injected at
//! construction; the no-op versions are the defaults.

/// Receives integrity damage caused by destructive commands.
pub trait DestructiveActionReporter: Send + Sync {
    /// `delta` is negative for damage.
    fn report_destructive_action(&self, delta: i32);
}

/// Receives one record per executed command.
pub trait UsageStatsRecorder: Send + Sync {
    fn record_command(&self, name: &str, exit_code: i32);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl DestructiveActionReporter for NoopReporter {
    fn report_destructive_action(&self, _delta: i32) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStats;

impl UsageStatsRecorder for NoopStats {
    fn record_command(&self, _name: &str, _exit_code: i32) {}
}
