//! Load State Tracking
//!
//! Idle → Loading → {Loaded, Failed} state machine shared by the list and
//! detail views. Each request gets a generation token; a response whose
//! token is no longer current is dropped, so the last trigger always wins.

use crate::api::FetchError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Load state plus the generation of the latest request
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTracker<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> Default for LoadTracker<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
        }
    }
}

impl<T> LoadTracker<T> {
    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Start a new request and return its token
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Apply a response. Returns false when `token` was superseded.
    pub fn finish(&mut self, token: u64, result: Result<T, FetchError>) -> bool {
        if token != self.generation {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    /// Back to idle; any in-flight response becomes stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = LoadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let tracker = LoadTracker::<u32>::default();
        assert_eq!(tracker.state(), &LoadState::Idle);
    }

    #[test]
    fn test_begin_then_success() {
        let mut tracker = LoadTracker::default();
        let token = tracker.begin();
        assert!(tracker.state().is_loading());

        assert!(tracker.finish(token, Ok(7u32)));
        assert_eq!(tracker.state().loaded(), Some(&7));
        assert!(!tracker.state().is_loading());
    }

    #[test]
    fn test_begin_then_failure() {
        let mut tracker = LoadTracker::<u32>::default();
        let token = tracker.begin();

        assert!(tracker.finish(token, Err(FetchError::Status(500))));
        assert_eq!(tracker.state().error(), Some(&FetchError::Status(500)));
        assert_eq!(tracker.state().loaded(), None);
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        // Second request resolves first, then the superseded one arrives
        assert!(tracker.finish(second, Ok("second")));
        assert!(!tracker.finish(first, Ok("first")));
        assert_eq!(tracker.state().loaded(), Some(&"second"));
    }

    #[test]
    fn test_stale_response_while_loading() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin();
        let _second = tracker.begin();

        assert!(!tracker.finish(first, Ok(1u32)));
        assert!(tracker.state().is_loading());
    }

    #[test]
    fn test_reset_invalidates_in_flight() {
        let mut tracker = LoadTracker::default();
        let token = tracker.begin();
        tracker.reset();

        assert!(!tracker.finish(token, Ok(1u32)));
        assert_eq!(tracker.state(), &LoadState::Idle);
    }

    #[test]
    fn test_refetch_returns_to_loading() {
        let mut tracker = LoadTracker::default();
        let token = tracker.begin();
        tracker.finish(token, Ok(1u32));

        tracker.begin();
        assert!(tracker.state().is_loading());
        assert_eq!(tracker.state().loaded(), None);
    }
}
