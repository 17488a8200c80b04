//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! truncated cells, formatted salaries, highlight ranges, and the overlays
//! (modal, delete prompt, notice) that sit on top of the table.
//!
//! # Example
//!
//! ```rust
//! use staffdesk::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     rows: vec![],
//!     selected_index: 0,
//!     id_width: 5,
//!     header: HeaderInfo { title: " Employees (0) ".to_string(), detail: None },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     search_bar: None,
//!     modal: None,
//!     confirm: None,
//!     notice: None,
//! };
//! assert!(vm.rows.is_empty());
//! ```

use crate::domain::EmployeeId;

/// Narrowest id column, including the space before the name column.
pub const ID_WIDTH: usize = 5;

/// Fixed widths of the remaining columns, in characters.
pub const NAME_WIDTH: usize = 22;
pub const POSITION_WIDTH: usize = 22;
pub const DEPARTMENT_WIDTH: usize = 16;
pub const SALARY_WIDTH: usize = 12;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Visible window of table rows.
    pub rows: Vec<DisplayRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Width of the id column; fits the longest listed id plus a separator.
    pub id_width: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Set when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Set while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Set while the add/edit modal is open.
    pub modal: Option<ModalInfo>,

    /// Set while a delete awaits confirmation.
    pub confirm: Option<ConfirmInfo>,

    pub notice: Option<NoticeInfo>,
}

/// What a row trigger does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// An action trigger attached to a table row.
///
/// Every row carries one trigger per [`RowAction`], each parameterized by the
/// row's employee id and activated by `key` while the row is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTrigger {
    pub action: RowAction,
    pub employee_id: EmployeeId,
    pub key: char,
}

impl RowTrigger {
    #[must_use]
    pub const fn edit(employee_id: EmployeeId) -> Self {
        Self { action: RowAction::Edit, employee_id, key: 'e' }
    }

    #[must_use]
    pub const fn delete(employee_id: EmployeeId) -> Self {
        Self { action: RowAction::Delete, employee_id, key: 'd' }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.action {
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }
}

/// Match highlight ranges per searchable cell.
///
/// Ranges are `(start, end)` character indices into the displayed (possibly
/// truncated) cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowHighlights {
    pub name: Vec<(usize, usize)>,
    pub position: Vec<(usize, usize)>,
    pub department: Vec<(usize, usize)>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department: String,
    /// Formatted salary, e.g. `$85,000`.
    pub salary: String,
    pub is_selected: bool,
    pub highlights: RowHighlights,
    pub triggers: [RowTrigger; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Centered title, e.g. ` Employees (3/5) `.
    pub title: String,
    /// Right-aligned sort and sync information.
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes go to the query (as opposed to the results).
    pub is_typing: bool,
}

/// The add/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    /// `Add New Employee` or `Edit Employee`.
    pub title: String,
    pub fields: Vec<ModalField>,
    pub hint: String,
    /// A save has been sent and not yet answered.
    pub is_saving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalField {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmInfo {
    /// e.g. `Delete Ann? (y/n)`
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    pub message: String,
    pub is_error: bool,
}
