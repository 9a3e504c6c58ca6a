//! Two-state view switch between the company list and the company form.

/// Visible view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Form,
}

/// Current view plus the company being edited, if any.
///
/// # Invariants
/// - `edit_target` is `Some` only while the form view edits a stored company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewRouter {
    view: View,
    edit_target: Option<usize>,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Index of the stored company loaded into the form, if editing.
    pub fn edit_target(&self) -> Option<usize> {
        self.edit_target
    }

    /// "New" action: form view without a target.
    pub fn open_new(&mut self) {
        self.view = View::Form;
        self.edit_target = None;
    }

    /// "Edit" action: form view targeting `index`.
    pub fn open_edit(&mut self, index: usize) {
        self.view = View::Form;
        self.edit_target = Some(index);
    }

    /// Back to the list; used for navigation and after a successful save.
    pub fn show_list(&mut self) {
        self.view = View::List;
        self.edit_target = None;
    }

    /// Keeps the edit target on the same company after `index` is removed.
    ///
    /// Removing the target itself closes the form.
    pub fn company_removed(&mut self, index: usize) {
        match self.edit_target {
            Some(target) if target == index => self.show_list(),
            Some(target) if target > index => self.edit_target = Some(target - 1),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{View, ViewRouter};

    #[test]
    fn starts_on_list_without_target() {
        let router = ViewRouter::new();
        assert_eq!(router.view(), View::List);
        assert_eq!(router.edit_target(), None);
    }

    #[test]
    fn edit_then_new_clears_target() {
        let mut router = ViewRouter::new();
        router.open_edit(2);
        assert_eq!(router.view(), View::Form);
        assert_eq!(router.edit_target(), Some(2));

        router.open_new();
        assert_eq!(router.view(), View::Form);
        assert_eq!(router.edit_target(), None);
    }

    #[test]
    fn show_list_clears_target() {
        let mut router = ViewRouter::new();
        router.open_edit(0);
        router.show_list();
        assert_eq!(router, ViewRouter::new());
    }

    #[test]
    fn removal_shifts_or_drops_edit_target() {
        let mut router = ViewRouter::new();
        router.open_edit(2);
        router.company_removed(3);
        assert_eq!(router.edit_target(), Some(2));
        router.company_removed(0);
        assert_eq!(router.edit_target(), Some(1));
        assert_eq!(router.view(), View::Form);

        router.company_removed(1);
        assert_eq!(router.edit_target(), None);
        assert_eq!(router.view(), View::List);
    }
}
