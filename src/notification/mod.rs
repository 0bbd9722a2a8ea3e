//! User-facing notification sink.

use std::time::Duration;

const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
const ERROR_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// How long the host should keep it on screen
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        let duration = match severity {
            Severity::Error => ERROR_DURATION,
            _ => DEFAULT_DURATION,
        };
        Self {
            message: message.into(),
            severity,
            duration,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Fire-and-forget; no acknowledgment.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log at a level matching their severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => tracing::error!("{}", notification.message),
            Severity::Warning => tracing::warn!("{}", notification.message),
            Severity::Success | Severity::Info => tracing::info!("{}", notification.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_longer() {
        assert_eq!(Notification::error("x").duration, Duration::from_secs(5));
        assert_eq!(Notification::info("x").duration, Duration::from_secs(3));
        assert_eq!(
            Notification::warning("x")
                .with_duration(Duration::from_secs(1))
                .duration,
            Duration::from_secs(1)
        );
    }
}
