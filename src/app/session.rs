//! Edit session and modal form.
//!
//! [`EditSession`] tracks whether the modal is closed (`Idle`), adding a new
//! employee (`Creating`) or editing an existing one (`Editing(id)`). It owns
//! the [`EmployeeForm`] backing the modal and remembers the sequence number of
//! the save currently in flight, so only that completion closes the modal.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};
use crate::store::EmployeeCache;

/// Message shown when a required field is missing.
pub const MISSING_FIELDS: &str = "Please fill in all fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Creating,
    Editing(EmployeeId),
}

/// Input fields of the modal form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Position,
    Department,
    Salary,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Position, Self::Department, Self::Salary];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Position => "Position",
            Self::Department => "Department",
            Self::Salary => "Salary",
        }
    }

    /// Next field, wrapping from salary back to name.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Position,
            Self::Position => Self::Department,
            Self::Department => Self::Salary,
            Self::Salary => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Salary,
            Self::Position => Self::Name,
            Self::Department => Self::Position,
            Self::Salary => Self::Department,
        }
    }
}

/// Raw text of the four modal inputs plus the focused field.
///
/// The salary input only ever holds ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: String,
    pub focus: FormField,
}

impl EmployeeForm {
    /// Form pre-filled from a cached record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
            focus: FormField::Name,
        }
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Position => &self.position,
            FormField::Department => &self.department,
            FormField::Salary => &self.salary,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Position => &mut self.position,
            FormField::Department => &mut self.department,
            FormField::Salary => &mut self.salary,
        }
    }

    /// Appends a character to the focused field.
    ///
    /// Returns `false` when the character was rejected (non-digit in salary).
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.focus == FormField::Salary && !c.is_ascii_digit() {
            return false;
        }
        if c.is_control() {
            return false;
        }
        self.value_mut(self.focus).push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.value_mut(self.focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Checks presence of every field and builds the request body.
    ///
    /// Text fields are trimmed; a whitespace-only field counts as empty.
    /// Salary must be a positive integer.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] describing the first problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffdesk::app::session::EmployeeForm;
    ///
    /// let mut form = EmployeeForm::default();
    /// assert!(form.validate().is_err());
    ///
    /// form.name = " Bo ".to_string();
    /// form.position = "QA".to_string();
    /// form.department = "Ops".to_string();
    /// form.salary = "40000".to_string();
    /// let draft = form.validate().unwrap();
    /// assert_eq!(draft.name, "Bo");
    /// assert_eq!(draft.salary, 40_000);
    /// ```
    pub fn validate(&self) -> Result<EmployeeDraft> {
        let name = self.name.trim();
        let position = self.position.trim();
        let department = self.department.trim();
        let salary = self.salary.trim();

        if name.is_empty() || position.is_empty() || department.is_empty() || salary.is_empty() {
            return Err(DirectoryError::Validation(MISSING_FIELDS.to_string()));
        }

        let salary = salary
            .parse::<u64>()
            .map_err(|_| DirectoryError::Validation("Salary is out of range".to_string()))?;
        if salary == 0 {
            return Err(DirectoryError::Validation(MISSING_FIELDS.to_string()));
        }

        Ok(EmployeeDraft {
            name: name.to_string(),
            position: position.to_string(),
            department: department.to_string(),
            salary,
        })
    }
}

/// A validated save, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveIntent {
    /// `None` creates a new record, `Some(id)` updates it.
    pub target: Option<EmployeeId>,
    pub draft: EmployeeDraft,
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: SessionState,
    form: EmployeeForm,
    pending_save: Option<u64>,
}

impl EditSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    #[must_use]
    pub const fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    /// Sequence number of the save awaiting its completion.
    #[must_use]
    pub const fn pending_save(&self) -> Option<u64> {
        self.pending_save
    }

    /// Opens an empty form for a new record.
    pub fn begin_create(&mut self) {
        tracing::debug!("edit session: creating");
        self.state = SessionState::Creating;
        self.form = EmployeeForm::default();
        self.pending_save = None;
    }

    /// Opens the form pre-filled from the cached record with `id`.
    ///
    /// Does nothing and returns `false` if the id is not cached.
    pub fn begin_edit(&mut self, id: EmployeeId, cache: &EmployeeCache) -> bool {
        let Some(employee) = cache.get(id) else {
            tracing::debug!(employee_id = id, "edit requested for unknown employee");
            return false;
        };

        tracing::debug!(employee_id = id, "edit session: editing");
        self.state = SessionState::Editing(id);
        self.form = EmployeeForm::from_employee(employee);
        self.pending_save = None;
        true
    }

    /// Closes the form without saving.
    pub fn cancel(&mut self) {
        tracing::debug!(state = ?self.state, "edit session cancelled");
        self.state = SessionState::Idle;
        self.form = EmployeeForm::default();
        self.pending_save = None;
    }

    /// Validates the form and describes the request to send.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a field is missing, or if the session
    /// is idle.
    pub fn save(&self) -> Result<SaveIntent> {
        let target = match self.state {
            SessionState::Idle => {
                return Err(DirectoryError::Validation("No employee is being edited".to_string()));
            }
            SessionState::Creating => None,
            SessionState::Editing(id) => Some(id),
        };

        let draft = self.form.validate()?;
        Ok(SaveIntent { target, draft })
    }

    /// Remembers the sequence number of the save just sent.
    pub fn mark_pending(&mut self, seq: u64) {
        self.pending_save = Some(seq);
    }

    /// Called when a save completes successfully.
    ///
    /// Returns to `Idle` only if `seq` is the save this session is waiting
    /// for; completions of earlier or cancelled saves leave it untouched.
    pub fn complete_save(&mut self, seq: u64) -> bool {
        if self.pending_save == Some(seq) {
            self.cancel();
            true
        } else {
            false
        }
    }

    /// Called when a save fails. Keeps the form open for a retry.
    pub fn fail_save(&mut self, seq: u64) -> bool {
        if self.pending_save == Some(seq) {
            self.pending_save = None;
            true
        } else {
            false
        }
    }
}
