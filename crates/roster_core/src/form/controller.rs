//! Form controller for one company edit session.
//!
//! # Responsibility
//! - Own the working copy and its reset baseline.
//! - Apply field edits and nested add/remove operations without validation.
//! - Run whole-record validation at the finalize boundary.
//!
//! # Invariants
//! - The working copy never aliases a stored record.
//! - A failed finalize leaves the working copy untouched.
//! - `created_at` is stamped only when the working copy has none.

use crate::form::draft::{CompanyDraft, EducationDraft, EmployeeDraft, SkillDraft};
use crate::model::company::Company;
use crate::model::field_path::{FieldPath, UnknownFieldPath};
use crate::validation::{Clock, FieldErrors, SystemClock};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Dotted path does not name an editable field.
    UnknownField(UnknownFieldPath),
    /// Path names a nested entry that does not exist.
    IndexOutOfRange(FieldPath),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(err) => write!(f, "{err}"),
            Self::IndexOutOfRange(path) => write!(f, "no entry exists for field `{path}`"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownField(err) => Some(err),
            Self::IndexOutOfRange(_) => None,
        }
    }
}

impl From<UnknownFieldPath> for FormError {
    fn from(value: UnknownFieldPath) -> Self {
        Self::UnknownField(value)
    }
}

/// In-progress edit state for one company record.
pub struct FormController<C: Clock = SystemClock> {
    clock: C,
    baseline: CompanyDraft,
    working: CompanyDraft,
}

impl FormController<SystemClock> {
    /// Creates a controller on the local system clock with an empty form.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FormController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FormController<C> {
    /// Creates a controller with an empty form on the provided clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            baseline: CompanyDraft::new(),
            working: CompanyDraft::new(),
        }
    }

    /// Starts a session from `existing`, or from an empty company.
    pub fn initialize(&mut self, existing: Option<&Company>) {
        self.baseline = existing
            .map(CompanyDraft::from_company)
            .unwrap_or_default();
        self.working = self.baseline.clone();
        debug!(
            "event=form_init module=form status=ok mode={} employees={}",
            if existing.is_some() { "edit" } else { "new" },
            self.working.employees.len()
        );
    }

    pub fn working_copy(&self) -> &CompanyDraft {
        &self.working
    }

    /// Returns whether the working copy differs from the reset baseline.
    pub fn is_dirty(&self) -> bool {
        self.working != self.baseline
    }

    /// Sets one field of the working copy. No validation runs.
    pub fn edit(&mut self, path: FieldPath, value: impl Into<String>) -> Result<(), FormError> {
        match self.working.field_mut(path) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => {
                warn!(
                    "event=form_edit module=form status=error error_code=index_out_of_range path={path}"
                );
                Err(FormError::IndexOutOfRange(path))
            }
        }
    }

    /// Sets one field addressed by dotted path, e.g. `empInfo.0.empName`.
    pub fn edit_path(&mut self, path: &str, value: impl Into<String>) -> Result<(), FormError> {
        let path = path.parse::<FieldPath>()?;
        self.edit(path, value)
    }

    /// Appends an empty employee and returns its index.
    pub fn append_employee(&mut self) -> usize {
        self.working.employees.append(EmployeeDraft::new())
    }

    /// Removes one employee with all of its skills and education.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn remove_employee(&mut self, index: usize) -> bool {
        self.working.employees.remove_at(index).is_some()
    }

    /// Appends an empty skill under `employee`; `None` if it does not exist.
    pub fn append_skill(&mut self, employee: usize) -> Option<usize> {
        let entry = self.working.employees.get_mut(employee)?;
        Some(entry.skills.append(SkillDraft::new()))
    }

    pub fn remove_skill(&mut self, employee: usize, skill: usize) -> bool {
        self.working
            .employees
            .get_mut(employee)
            .and_then(|entry| entry.skills.remove_at(skill))
            .is_some()
    }

    /// Appends an empty education entry under `employee`; `None` if it does
    /// not exist.
    pub fn append_education(&mut self, employee: usize) -> Option<usize> {
        let entry = self.working.employees.get_mut(employee)?;
        Some(entry.education.append(EducationDraft::new()))
    }

    pub fn remove_education(&mut self, employee: usize, education: usize) -> bool {
        self.working
            .employees
            .get_mut(employee)
            .and_then(|entry| entry.education.remove_at(education))
            .is_some()
    }

    /// Validates the whole working copy and produces the finished record.
    ///
    /// On success the working copy and reset baseline become an empty form.
    ///
    /// # Errors
    /// - Returns every failing field; the working copy is left as-is.
    pub fn finalize(&mut self) -> Result<Company, FieldErrors> {
        let mut company = match self.working.to_company(self.clock.today()) {
            Ok(company) => company,
            Err(errors) => {
                info!(
                    "event=form_finalize module=form status=invalid field_errors={}",
                    errors.len()
                );
                return Err(errors);
            }
        };

        if !company.has_created_at() {
            company.created_at = self.clock.timestamp();
        }

        self.baseline = CompanyDraft::new();
        self.working = CompanyDraft::new();
        info!(
            "event=form_finalize module=form status=ok employees={} nested_entries={}",
            company.employees.len(),
            company.nested_entry_count()
        );
        Ok(company)
    }

    /// Discards edits since the last `initialize` or successful `finalize`.
    pub fn reset(&mut self) {
        self.working = self.baseline.clone();
    }
}
