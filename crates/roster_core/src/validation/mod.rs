//! Field validation rules and their error taxonomy.
//!
//! # Responsibility
//! - Provide pure validators bound to company/employee/skill/education fields.
//! - Provide the clock used to evaluate date rules at submission time.
//!
//! # Invariants
//! - Validators never mutate input and never panic.
//! - Every failure is scoped to exactly one field path.

use crate::model::field_path::FieldPath;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod clock;
pub mod rules;

pub use clock::{Clock, FixedClock, SystemClock};

/// Reason one field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is empty but the field is required.
    MissingField,
    /// Value exceeds `max` characters.
    TooLong { max: usize, actual: usize },
    /// Value is not a `YYYY-MM-DD` calendar date.
    InvalidDate,
    /// Date is today or later.
    DateNotPast,
    /// Value is not a label of the field's catalog.
    UnknownOption,
    /// Value is not an integer within `min..=max`.
    OutOfRange { min: i64, max: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "required"),
            Self::TooLong { max, actual } => {
                write!(f, "must be at most {max} characters (got {actual})")
            }
            Self::InvalidDate => write!(f, "must be a date in YYYY-MM-DD format"),
            Self::DateNotPast => write!(f, "must be in the past"),
            Self::UnknownOption => write!(f, "must be one of the listed options"),
            Self::OutOfRange { min, max } => {
                write!(f, "must be a whole number from {min} to {max}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Validation failure attached to its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: FieldPath,
    pub error: ValidationError,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

/// Every field failure found by one finalize attempt, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: FieldPath, error: ValidationError) {
        self.errors.push(FieldError { path, error });
    }

    /// Records the failure of `result`, if any, and passes the value through.
    pub fn check<T>(&mut self, path: FieldPath, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(path, error);
                None
            }
        }
    }

    /// Returns the failure recorded for `path`, if any.
    pub fn get(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|entry| &entry.path == path)
            .map(|entry| &entry.error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field(s) failed validation", self.errors.len())?;
        for entry in &self.errors {
            write!(f, "; {entry}")?;
        }
        Ok(())
    }
}

impl Error for FieldErrors {}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
