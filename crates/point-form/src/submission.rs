//! Submission Lifecycle
//!
//! Validation errors and the submit state machine.

/// Reasons a form cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    InvalidEmail,
    MissingMobile,
    MissingProvince,
    MissingCity,
    MissingPosition,
    NoItems,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ValidationError::MissingName => "Entity name is required",
            ValidationError::InvalidEmail => "A valid e-mail is required",
            ValidationError::MissingMobile => "Mobile number is required",
            ValidationError::MissingProvince => "Select a province",
            ValidationError::MissingCity => "Select a city",
            ValidationError::MissingPosition => "Select an address on the map",
            ValidationError::NoItems => "Select at least one item",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for ValidationError {}

/// Submission state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Move to `Submitting`; returns false if a request is already in flight
    pub fn start(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmissionState::Submitting;
        true
    }

    /// Record the outcome of the in-flight request
    pub fn finish<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        if !self.is_submitting() {
            log::warn!("[FORM] Submission finished while state was {:?}", self);
        }
        *self = match result {
            Ok(()) => SubmissionState::Succeeded,
            Err(e) => SubmissionState::Failed(e.to_string()),
        };
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
