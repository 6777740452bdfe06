//! Optimistic Toggle
//!
//! Show the target state at once, keep the confirmed state for rollback, and
//! refuse a second change while one request is still in flight.

/// Confirmed value, displayed value and in-flight marker for one toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optimistic<T: Copy + PartialEq> {
    confirmed: T,
    shown: T,
    in_flight: bool,
}

impl<T: Copy + PartialEq> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self { confirmed: value, shown: value, in_flight: false }
    }

    /// Value to render
    pub fn shown(&self) -> T {
        self.shown
    }

    pub fn confirmed(&self) -> T {
        self.confirmed
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a change. Returns the previous value, or `None` if a request
    /// is already running and this click must be ignored.
    pub fn begin(&mut self, target: T) -> Option<T> {
        if self.in_flight {
            return None;
        }
        let previous = self.confirmed;
        self.shown = target;
        self.in_flight = true;
        Some(previous)
    }

    /// The server accepted the change; `server_value` replaces what we guessed
    pub fn commit(&mut self, server_value: T) {
        self.confirmed = server_value;
        self.shown = server_value;
        self.in_flight = false;
    }

    /// The request failed; go back to the last confirmed value
    pub fn rollback(&mut self) {
        self.shown = self.confirmed;
        self.in_flight = false;
    }

    /// Refresh from a fresh server read; ignored while a change is pending
    pub fn sync(&mut self, value: T) {
        if !self.in_flight {
            self.confirmed = value;
            self.shown = value;
        }
    }
}

impl Optimistic<bool> {
    /// Flip a boolean toggle; see [`Optimistic::begin`]
    pub fn begin_flip(&mut self) -> Option<SaveRequest> {
        let target = !self.confirmed;
        self.begin(target).map(|_| SaveRequest::for_target(target))
    }
}

/// HTTP shape of a saved-flag change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveRequest {
    /// POST .../save
    Save,
    /// DELETE .../unsave
    Unsave,
}

impl SaveRequest {
    pub fn for_target(saved: bool) -> Self {
        if saved {
            SaveRequest::Save
        } else {
            SaveRequest::Unsave
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            SaveRequest::Save => "POST",
            SaveRequest::Unsave => "DELETE",
        }
    }

    pub fn target(&self) -> bool {
        matches!(self, SaveRequest::Save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::OrderStatus;

    #[test]
    fn test_failed_save_reverts() {
        let mut saved = Optimistic::new(false);
        let request = saved.begin_flip().unwrap();
        assert_eq!(request, SaveRequest::Save);
        assert_eq!(request.method(), "POST");
        assert!(saved.shown());

        saved.rollback();
        assert!(!saved.shown());
        assert!(!saved.in_flight());
    }

    #[test]
    fn test_clicks_ignored_while_in_flight() {
        let mut saved = Optimistic::new(true);
        assert_eq!(saved.begin_flip(), Some(SaveRequest::Unsave));
        assert_eq!(saved.begin_flip(), None);
        assert!(!saved.shown());

        saved.commit(false);
        assert_eq!(saved.begin_flip(), Some(SaveRequest::Save));
    }

    #[test]
    fn test_server_value_wins_on_commit() {
        let mut kitchen = Optimistic::new(false);
        kitchen.begin(true);
        // Server reports the kitchen still closed
        kitchen.commit(false);
        assert!(!kitchen.shown());
        assert!(!kitchen.confirmed());
    }

    #[test]
    fn test_enum_status_transition() {
        let mut status = Optimistic::new(OrderStatus::Placed);
        assert_eq!(status.begin(OrderStatus::Preparing), Some(OrderStatus::Placed));
        assert_eq!(status.shown(), OrderStatus::Preparing);
        status.rollback();
        assert_eq!(status.shown(), OrderStatus::Placed);
    }

    #[test]
    fn test_sync_waits_for_in_flight() {
        let mut saved = Optimistic::new(false);
        saved.begin(true);
        saved.sync(false);
        assert!(saved.shown());
        saved.commit(true);
        saved.sync(false);
        assert!(!saved.shown());
    }
}
