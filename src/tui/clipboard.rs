//! System clipboard access and the transient "copied" acknowledgement.

use std::time::{Duration, Instant};

use crate::constants::COPY_ACK_MILLIS;

/// Copies text to the system clipboard.
pub fn copy_to_system(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text))
}

/// Tracks when the last copy happened so the UI can show "Copied!" briefly.
///
/// Purely presentational; nothing else depends on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyFeedback {
    since: Option<Instant>,
}

impl CopyFeedback {
    /// How long the acknowledgement stays visible.
    pub const DURATION: Duration = Duration::from_millis(COPY_ACK_MILLIS);

    /// Starts (or restarts) the acknowledgement at `now`.
    pub fn start(&mut self, now: Instant) {
        self.since = Some(now);
    }

    /// Returns `true` while the acknowledgement should be shown.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.since
            .is_some_and(|since| now.saturating_duration_since(since) < Self::DURATION)
    }

    /// Drops an expired acknowledgement.
    ///
    /// Returns `true` if it just expired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.since.is_some() && !self.is_active(now) {
            self.since = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_lasts_two_seconds() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_active(start));

        feedback.start(start);
        assert!(feedback.is_active(start + Duration::from_millis(1999)));
        assert!(!feedback.is_active(start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_tick_reports_expiry_once() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.start(start);

        assert!(!feedback.tick(start + Duration::from_millis(500)));
        assert!(feedback.tick(start + Duration::from_secs(3)));
        assert!(!feedback.tick(start + Duration::from_secs(4)));
    }

    #[test]
    fn test_restart_extends_window() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.start(start);
        feedback.start(start + Duration::from_millis(1500));
        assert!(feedback.is_active(start + Duration::from_millis(3000)));
    }
}
