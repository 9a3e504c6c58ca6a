use chrono::NaiveDate;
use roster_core::db::open_db_in_memory;
use roster_core::{
    FixedClock, RecordingPrompter, RosterSession, SessionError, SqliteBlobStore, StoreError,
    SubmitOutcome, View, SAVED_MESSAGE,
};

fn session_at(year: i32, month: u32, day: u32) -> RosterSession<SqliteBlobStore, FixedClock> {
    let now = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let blob_store = SqliteBlobStore::try_new(open_db_in_memory().unwrap()).unwrap();
    RosterSession::with_clock(blob_store, FixedClock(now))
}

fn fill_required(session: &mut RosterSession<SqliteBlobStore, FixedClock>, name: &str) {
    let form = session.form_mut();
    form.edit_path("companyName", name).unwrap();
    form.edit_path("email", "hq@example.test").unwrap();
    form.edit_path("phoneNumber", "555-0100").unwrap();
}

#[test]
fn new_company_submit_notifies_and_returns_to_list() {
    let mut session = session_at(2024, 6, 15);
    assert_eq!(session.view(), View::List);

    session.open_new();
    assert_eq!(session.view(), View::Form);
    fill_required(&mut session, "Acme");

    let prompter = RecordingPrompter::answering(true);
    let outcome = session.submit(&prompter).unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome {
            index: 0,
            created: true
        }
    );
    assert_eq!(session.view(), View::List);
    assert_eq!(prompter.notifications(), vec![SAVED_MESSAGE]);
    assert_eq!(session.companies().len(), 1);
    assert_eq!(session.companies()[0].created_at, "6/15/2024, 9:00:00 AM");
}

#[test]
fn invalid_submit_stays_in_form_and_keeps_edits() {
    let mut session = session_at(2024, 6, 15);
    session.open_new();
    session.form_mut().edit_path("companyName", "Half").unwrap();

    let prompter = RecordingPrompter::answering(true);
    let err = session.submit(&prompter).unwrap_err();
    match err {
        SessionError::Invalid(errors) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(session.view(), View::Form);
    assert_eq!(session.form().working_copy().company_name, "Half");
    assert!(prompter.notifications().is_empty());
    assert!(session.companies().is_empty());
}

#[test]
fn edit_preselects_company_and_updates_in_place() {
    let mut session = session_at(2024, 6, 15);
    let prompter = RecordingPrompter::answering(true);
    for name in ["First", "Second"] {
        session.open_new();
        fill_required(&mut session, name);
        session.submit(&prompter).unwrap();
    }
    let original_created_at = session.companies()[1].created_at.clone();

    session.open_edit(1).unwrap();
    assert_eq!(session.edit_target(), Some(1));
    assert_eq!(session.form().working_copy().company_name, "First");

    session
        .form_mut()
        .edit_path("companyName", "First Renamed")
        .unwrap();
    let outcome = session.submit(&prompter).unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome {
            index: 1,
            created: false
        }
    );

    let names = session
        .companies()
        .iter()
        .map(|company| company.company_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Second", "First Renamed"]);
    assert_eq!(session.companies()[1].created_at, original_created_at);
    assert_eq!(session.edit_target(), None);
}

#[test]
fn open_edit_rejects_missing_index() {
    let mut session = session_at(2024, 6, 15);
    let err = session.open_edit(0).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Store(StoreError::IndexOutOfRange { index: 0, len: 0 })
    ));
    assert_eq!(session.view(), View::List);
}

#[test]
fn navigating_to_list_and_reset_discard_nothing_stored() {
    let mut session = session_at(2024, 6, 15);
    let prompter = RecordingPrompter::answering(true);
    session.open_new();
    fill_required(&mut session, "Stored");
    session.submit(&prompter).unwrap();

    session.open_edit(0).unwrap();
    session.form_mut().edit_path("companyName", "Draft").unwrap();
    session.reset();
    assert_eq!(session.form().working_copy().company_name, "Stored");

    session.form_mut().edit_path("companyName", "Draft").unwrap();
    session.show_list();
    assert_eq!(session.view(), View::List);
    assert_eq!(session.companies()[0].company_name, "Stored");
}

#[test]
fn delete_requires_confirmation() {
    let mut session = session_at(2024, 6, 15);
    let prompter = RecordingPrompter::answering(true);
    session.open_new();
    fill_required(&mut session, "Doomed");
    session.submit(&prompter).unwrap();

    let declining = RecordingPrompter::answering(false);
    assert!(!session.delete(0, &declining).unwrap());
    assert_eq!(session.companies().len(), 1);

    assert!(session.delete(0, &prompter).unwrap());
    assert!(session.companies().is_empty());
}

#[test]
fn deleting_an_earlier_company_keeps_the_edit_on_its_record() {
    let mut session = session_at(2024, 6, 15);
    let prompter = RecordingPrompter::answering(true);
    for name in ["A", "B", "C"] {
        session.open_new();
        fill_required(&mut session, name);
        session.submit(&prompter).unwrap();
    }

    session.open_edit(1).unwrap();
    session
        .form_mut()
        .edit_path("companyName", "B-edited")
        .unwrap();
    assert!(session.delete(0, &prompter).unwrap());
    assert_eq!(session.edit_target(), Some(0));
    assert_eq!(session.view(), View::Form);

    let outcome = session.submit(&prompter).unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome {
            index: 0,
            created: false
        }
    );
    let names = session
        .companies()
        .iter()
        .map(|company| company.company_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["B-edited", "A"]);
}

#[test]
fn deleting_the_edited_company_closes_the_form() {
    let mut session = session_at(2024, 6, 15);
    let prompter = RecordingPrompter::answering(true);
    for name in ["A", "B"] {
        session.open_new();
        fill_required(&mut session, name);
        session.submit(&prompter).unwrap();
    }

    session.open_edit(1).unwrap();
    assert!(session.delete(1, &prompter).unwrap());
    assert_eq!(session.view(), View::List);
    assert_eq!(session.edit_target(), None);
    assert_eq!(session.companies()[0].company_name, "B");
}
