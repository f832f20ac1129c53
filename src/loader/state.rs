//! Fetch State
//!
//! Lifecycle of one report request as seen by a view.

/// Lifecycle of a single fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Not yet activated, or deactivated
    Idle,
    /// Request in flight
    Loading,
    /// Request settled with data
    Success(T),
    /// Request settled with an error message
    Failure(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Success or Failure
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Failure(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failure(msg) => Some(msg),
            _ => None,
        }
    }

    /// Short lowercase label for logs
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Success(_) => "success",
            FetchState::Failure(_) => "failure",
        }
    }
}

/// Value published to loader subscribers
#[derive(Debug, Clone)]
pub struct LoaderState<T> {
    /// Incremented on every activation and deactivation
    pub generation: u64,
    /// Whether the owning view is mounted
    pub active: bool,
    pub fetch: FetchState<T>,
}

impl<T> Default for LoaderState<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            active: false,
            fetch: FetchState::Idle,
        }
    }
}
