use crate::utils::error::{CatalystError, ErrorCategory, ErrorSeverity};

/// What a module shows after its last trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFailure {
    pub message: String,
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub suggestion: String,
    pub retryable: bool,
}

impl From<&CatalystError> for ModuleFailure {
    fn from(error: &CatalystError) -> Self {
        Self {
            message: error.to_string(),
            category: error.category(),
            severity: error.severity(),
            suggestion: error.recovery_suggestion(),
            retryable: error.is_retryable(),
        }
    }
}

impl ModuleFailure {
    /// Copied from [`CatalystError::is_retryable`] when the failure is recorded.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

/// Per-module state. Exactly one of result, error or pending is live at a
/// time; each trigger replaces the whole value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModuleState<T> {
    #[default]
    Idle,
    /// Set by `ModuleController::trigger` while the call is in flight. The
    /// trigger holds `&mut self` until it settles, so only an embedder that
    /// drives the state itself (or renders from another task) ever sees it.
    Pending,
    Ready(T),
    Failed(ModuleFailure),
}

impl<T> ModuleState<T> {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ModuleFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }
}
