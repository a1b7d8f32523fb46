// Submit event and outcome

use crate::ValidationErrors;

/// A form submission in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the browser's own navigation for this submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What [`FormValidator::on_submit`](crate::FormValidator::on_submit) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed and the form was submitted.
    Submitted,
    /// Some rules failed; nothing was submitted.
    Blocked(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitOutcome::Submitted => None,
            SubmitOutcome::Blocked(errors) => Some(errors),
        }
    }
}
