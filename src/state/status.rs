//! Shared loading/error status.
//!
//! One instance lives on the [`App`](crate::app::App) and is written by
//! whichever screen is fetching; the status bar is the single reader.
//! Concurrent writers apply last-write-wins, which is fine because only one
//! screen is active at a time.

/// Process-wide loading flag and error banner text.
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    is_loading: bool,
    error: Option<String>,
}

impl StatusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Overwrite the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Set the error banner. An error state is never simultaneously a
    /// loading state, so this also drops the loading flag.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_loading = false;
    }

    /// Dismiss the error banner without touching the loading flag.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_error_forces_loading_off() {
        let mut status = StatusState::new();
        status.set_loading(true);
        status.set_error("API error: 500 Internal Server Error");
        assert!(!status.is_loading());
        assert_eq!(status.error(), Some("API error: 500 Internal Server Error"));
    }

    #[test]
    fn clear_error_leaves_loading_untouched() {
        let mut status = StatusState::new();
        status.set_error("boom");
        status.set_loading(true);
        status.clear_error();
        assert!(status.is_loading());
        assert!(status.error().is_none());
    }

    #[test]
    fn set_loading_overwrites() {
        let mut status = StatusState::new();
        status.set_loading(true);
        status.set_loading(false);
        assert!(!status.is_loading());
    }
}
