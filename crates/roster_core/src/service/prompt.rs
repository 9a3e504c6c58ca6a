//! Blocking user prompts used by store and session flows.

use std::cell::RefCell;

/// Confirmation and notification interface provided by the UI shell.
pub trait Prompter {
    /// Blocking yes/no question. Returns `true` on "yes".
    fn confirm(&self, message: &str) -> bool;

    /// Blocking acknowledgment.
    fn notify(&self, message: &str);
}

/// Prompter whose answer was collected before the call, e.g. by a UI dialog
/// shown ahead of an FFI request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetPrompter {
    pub answer: bool,
}

impl PresetPrompter {
    pub fn yes() -> Self {
        Self { answer: true }
    }

    pub fn no() -> Self {
        Self { answer: false }
    }
}

impl Prompter for PresetPrompter {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }

    fn notify(&self, _message: &str) {}
}

/// Prompter that records every prompt it receives.
#[derive(Debug, Default)]
pub struct RecordingPrompter {
    answer: bool,
    confirmations: RefCell<Vec<String>>,
    notifications: RefCell<Vec<String>>,
}

impl RecordingPrompter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }
}

impl Prompter for RecordingPrompter {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }
}
