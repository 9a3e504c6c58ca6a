//! Roster session: user-facing actions over router, form and store.
//!
//! # Responsibility
//! - Route "new"/"edit"/"list" actions and preselect the edit target.
//! - Commit finalized records to the store as create or update.
//! - Raise the save notification and the delete confirmation.
//!
//! # Invariants
//! - The form is only committed through `submit`.
//! - A failed validation keeps the session in the form view.
//! - The edit target always addresses the company loaded into the form.

use crate::form::controller::FormController;
use crate::model::company::Company;
use crate::repo::blob_store::BlobStore;
use crate::service::company_store::{CompanyStore, StoreError};
use crate::service::prompt::Prompter;
use crate::service::router::{View, ViewRouter};
use crate::validation::{Clock, FieldErrors, SystemClock};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Acknowledgment shown after a successful save.
pub const SAVED_MESSAGE: &str = "Company details saved successfully.";

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug)]
pub enum SessionError {
    /// Finalize rejected the working copy.
    Invalid(FieldErrors),
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "{errors}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<FieldErrors> for SessionError {
    fn from(value: FieldErrors) -> Self {
        Self::Invalid(value)
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Position of the saved company in the list.
    pub index: usize,
    /// `true` for a new company, `false` for an edit.
    pub created: bool,
}

/// One interactive session over the company list.
pub struct RosterSession<B: BlobStore, C: Clock = SystemClock> {
    router: ViewRouter,
    form: FormController<C>,
    store: CompanyStore<B>,
}

impl<B: BlobStore> RosterSession<B, SystemClock> {
    /// Loads the store from `blob_store` and starts on the list view.
    pub fn open(blob_store: B) -> Self {
        Self::with_clock(blob_store, SystemClock)
    }
}

impl<B: BlobStore, C: Clock> RosterSession<B, C> {
    pub fn with_clock(blob_store: B, clock: C) -> Self {
        Self {
            router: ViewRouter::new(),
            form: FormController::with_clock(clock),
            store: CompanyStore::load(blob_store),
        }
    }

    pub fn view(&self) -> View {
        self.router.view()
    }

    pub fn edit_target(&self) -> Option<usize> {
        self.router.edit_target()
    }

    pub fn companies(&self) -> &[Company] {
        self.store.list()
    }

    pub fn store(&self) -> &CompanyStore<B> {
        &self.store
    }

    pub fn form(&self) -> &FormController<C> {
        &self.form
    }

    /// Field edits and nested add/remove go straight to the controller.
    pub fn form_mut(&mut self) -> &mut FormController<C> {
        &mut self.form
    }

    /// "New company": empty form.
    pub fn open_new(&mut self) {
        self.form.initialize(None);
        self.router.open_new();
    }

    /// "Edit company": form preselected with a copy of company `index`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when no company exists at `index`; nothing changes.
    pub fn open_edit(&mut self, index: usize) -> SessionResult<()> {
        let company = self.store.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.store.len(),
        })?;
        self.form.initialize(Some(company));
        self.router.open_edit(index);
        Ok(())
    }

    /// Navigates back to the list without touching the working copy.
    pub fn show_list(&mut self) {
        self.router.show_list();
    }

    /// Discards edits made since the form was opened.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Finalizes the form and saves the record.
    ///
    /// New records are prepended; edited records replace their target. On
    /// success the user is notified and the list view is shown.
    ///
    /// # Errors
    /// - `Invalid` with every failing field; the form stays open and intact.
    /// - `IndexOutOfRange` when the edit target is gone; the form stays intact.
    /// - `Store` when persisting fails; the list already holds the record.
    pub fn submit(&mut self, prompter: &dyn Prompter) -> SessionResult<SubmitOutcome> {
        let target = self.router.edit_target();
        if let Some(index) = target {
            if self.store.get(index).is_none() {
                return Err(StoreError::IndexOutOfRange {
                    index,
                    len: self.store.len(),
                }
                .into());
            }
        }
        let company = self.form.finalize()?;

        let (outcome, persisted) = match target {
            Some(index) => (
                SubmitOutcome {
                    index,
                    created: false,
                },
                self.store.update(index, company),
            ),
            None => (
                SubmitOutcome {
                    index: 0,
                    created: true,
                },
                self.store.create(company),
            ),
        };

        self.router.show_list();
        persisted?;
        info!(
            "event=company_save module=session status=ok created={} index={}",
            outcome.created, outcome.index
        );
        prompter.notify(SAVED_MESSAGE);
        Ok(outcome)
    }

    /// Deletes company `index` after confirmation; `Ok(false)` if declined.
    ///
    /// An open edit keeps pointing at the same company; deleting the edited
    /// company itself closes the form.
    pub fn delete(&mut self, index: usize, prompter: &dyn Prompter) -> SessionResult<bool> {
        let len_before = self.store.len();
        let deleted = self.store.delete(index, prompter);
        if self.store.len() < len_before {
            self.router.company_removed(index);
        }
        Ok(deleted?)
    }
}

#[cfg(test)]
mod tests {
    use super::{RosterSession, SessionError};
    use crate::db::open_db_in_memory;
    use crate::repo::blob_store::SqliteBlobStore;
    use crate::service::company_store::StoreError;
    use crate::service::prompt::RecordingPrompter;
    use crate::service::router::View;
    use crate::validation::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn submit_against_missing_target_keeps_form_intact() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let blob_store = SqliteBlobStore::try_new(open_db_in_memory().unwrap()).unwrap();
        let mut session = RosterSession::with_clock(blob_store, FixedClock(now));
        session.router.open_edit(3);
        session.form.edit_path("companyName", "Kept").unwrap();
        session.form.edit_path("email", "k@example.test").unwrap();
        session.form.edit_path("phoneNumber", "555-0100").unwrap();

        let prompter = RecordingPrompter::answering(true);
        let err = session.submit(&prompter).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Store(StoreError::IndexOutOfRange { index: 3, len: 0 })
        ));
        assert_eq!(session.view(), View::Form);
        assert_eq!(session.form.working_copy().company_name, "Kept");
        assert!(prompter.notifications().is_empty());
        assert!(session.companies().is_empty());
    }
}
