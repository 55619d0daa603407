//! One-shot flash notices
//!
//! A notice set during a redirect is shown on the next rendered page and
//! then discarded. [`FlashSlot::take`] is the single consumption point;
//! reading clears the slot.

/// Holder for at most one pending notice
#[derive(Debug, Default)]
pub struct FlashSlot {
    notice: Option<String>,
}

impl FlashSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pending notice, replacing any unread one
    pub fn set(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Consume the pending notice, leaving the slot empty
    pub fn take(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Check whether a notice is pending
    pub fn is_empty(&self) -> bool {
        self.notice.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_once() {
        let mut slot = FlashSlot::new();
        slot.set("Successfully created comment.");

        assert_eq!(slot.take().as_deref(), Some("Successfully created comment."));
        assert_eq!(slot.take(), None);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_set_replaces_unread_notice() {
        let mut slot = FlashSlot::new();
        slot.set("first");
        slot.set("second");

        assert_eq!(slot.take().as_deref(), Some("second"));
    }

    #[test]
    fn test_empty_slot() {
        let mut slot = FlashSlot::new();
        assert!(slot.is_empty());
        assert_eq!(slot.take(), None);
    }
}
