use crate::clipboard::ClipboardSink;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long the "Copied" acknowledgment stays up.
pub const ACK_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyState {
    pub acknowledged: bool,
}

/// A copy-to-clipboard button attached to a text field.
///
/// After a copy, an acknowledgment stays active until [`ACK_DURATION`]
/// passes or it is dismissed. At most one deadline exists; copying again
/// replaces it.
pub struct CopyAffordance {
    sink: Box<dyn ClipboardSink>,
    visible: bool,
    ack_deadline: Option<Instant>,
}

impl CopyAffordance {
    pub fn new(sink: Box<dyn ClipboardSink>, visible: bool) -> Self {
        Self {
            sink,
            visible,
            ack_deadline: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.ack_deadline = None;
        }
    }

    /// Whether the host should show the control next to `value` at all.
    pub fn is_available(&self, value: Option<&str>) -> bool {
        self.visible && value.is_some_and(|v| !v.is_empty())
    }

    pub fn copy(&mut self, value: Option<&str>) -> bool {
        self.copy_at(value, Instant::now())
    }

    /// Returns whether a clipboard write was attempted.
    pub fn copy_at(&mut self, value: Option<&str>, now: Instant) -> bool {
        if !self.visible {
            return false;
        }
        let Some(text) = value.filter(|v| !v.is_empty()) else {
            return false;
        };

        if let Err(e) = self.sink.write_text(text) {
            warn!("Clipboard write failed: {}", e);
        } else {
            debug!(len = text.chars().count(), "Copied value to clipboard");
        }

        self.ack_deadline = Some(now + ACK_DURATION);
        true
    }

    pub fn dismiss(&mut self) {
        self.ack_deadline = None;
    }

    /// Drop the acknowledgment once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.ack_deadline.is_some_and(|deadline| now >= deadline) {
            self.ack_deadline = None;
        }
    }

    /// Time left before the acknowledgment clears, if one is pending.
    pub fn time_until_clear(&self, now: Instant) -> Option<Duration> {
        self.ack_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn is_acknowledged_at(&self, now: Instant) -> bool {
        self.ack_deadline.is_some_and(|deadline| now < deadline)
    }

    pub fn state_at(&self, now: Instant) -> CopyState {
        CopyState {
            acknowledged: self.is_acknowledged_at(now),
        }
    }

    pub fn state(&self) -> CopyState {
        self.state_at(Instant::now())
    }
}
