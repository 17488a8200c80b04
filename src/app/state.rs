//! Application state management and view model computation.
//!
//! [`AppState`] owns everything the plugin knows: the employee cache, the
//! derived filtered list, selection, input mode, the edit session, pending
//! request bookkeeping and the active notice. The event handler is its only
//! writer.
//!
//! # State Components
//!
//! - **Cache**: Mirror of the backend collection as last observed
//! - **Filtered**: Subset of the cache matching the search query
//! - **Selection**: Cursor position within the filtered list
//! - **Input Mode**: Controls keybinding interpretation and overlays
//! - **Session**: Add/edit modal state and the save in flight
//! - **Ledger**: Sequence numbers for stale completion detection
//!
//! # Example
//!
//! ```rust
//! use staffdesk::app::AppState;
//! use staffdesk::domain::Employee;
//! use staffdesk::ui::theme::Theme;
//!
//! let mut state = AppState::new("http://localhost:5000", Theme::default());
//! state.cache.load(vec![Employee::new(1, "Ann", "Eng", "R&D", 50_000)]);
//! state.apply_search_filter();
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert_eq!(viewmodel.rows.len(), 1);
//! ```

use super::actions::Action;
use super::ledger::RequestLedger;
use super::modes::{InputMode, SearchFocus};
use super::session::{EditSession, FormField, SessionState};
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{format_salary, Employee, EmployeeId, SortColumn};
use crate::remote::{CompletionPayload, RemoteCompletion, RemoteRequest, RequestKind};
use crate::store::{self, EmployeeCache};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmInfo, DisplayRow, EmptyState, FooterInfo, HeaderInfo, ModalField, ModalInfo, NoticeInfo,
    RowHighlights, RowTrigger, SearchBarInfo, UIViewModel, DEPARTMENT_WIDTH, ID_WIDTH, NAME_WIDTH,
    POSITION_WIDTH,
};
use chrono::{DateTime, Utc};

pub const SAVE_FAILED: &str = "Error saving employee. Please try again.";
pub const DELETE_FAILED: &str = "Error deleting employee. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A user-facing alert shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Local mirror of the backend collection.
    pub cache: EmployeeCache,

    /// Cached records matching `search_query`, in cache order.
    ///
    /// Recomputed by `apply_search_filter()` after every cache or query change.
    pub filtered: Vec<Employee>,

    /// Zero-based index of the selected row within `filtered`.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Mode to return to when the modal or delete prompt closes.
    pub resume_mode: InputMode,

    /// Raw search query; not trimmed or tokenized.
    pub search_query: String,

    pub session: EditSession,

    pub ledger: RequestLedger,

    pub notice: Option<Notice>,

    /// Column of the last applied server sort, if the cache is sorted.
    pub sort: Option<SortColumn>,

    /// Sort used for the first load instead of a plain fetch.
    pub initial_sort: Option<SortColumn>,

    /// When the cache was last replaced from the backend.
    pub last_synced: Option<DateTime<Utc>>,

    /// Backend origin, without trailing slash.
    pub base_url: String,

    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state talking to `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, theme: Theme) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            cache: EmployeeCache::new(),
            filtered: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            resume_mode: InputMode::Normal,
            search_query: String::new(),
            session: EditSession::new(),
            ledger: RequestLedger::new(),
            notice: None,
            sort: None,
            initial_sort: None,
            last_synced: None,
            base_url,
            theme,
        }
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.filtered.get(self.selected_index)
    }

    /// Re-derives `filtered` from the cache and the current query.
    ///
    /// Selection follows the previously selected id when it is still
    /// visible, otherwise it is clamped to the new bounds.
    pub fn apply_search_filter(&mut self) {
        let selected_id = self.selected_employee().map(|e| e.id);

        self.filtered = store::filter(self.cache.records(), &self.search_query);

        if self.filtered.is_empty() {
            self.selected_index = 0;
            return;
        }

        self.selected_index = selected_id
            .and_then(|id| self.filtered.iter().position(|e| e.id == id))
            .unwrap_or_else(|| self.selected_index.min(self.filtered.len() - 1));
    }

    /// First request after the host grants network access.
    pub fn initial_load(&mut self) -> Action {
        match self.initial_sort {
            Some(column) => self.sort_by(column),
            None => self.fetch(),
        }
    }

    /// Issues `GET /employees`.
    pub fn fetch(&mut self) -> Action {
        let seq = self.ledger.issue(RequestKind::List);
        tracing::debug!(seq = seq, "fetching employees");
        Action::Send(RemoteRequest::list(&self.base_url, seq))
    }

    /// Issues `GET /employees/sort/{column}`.
    ///
    /// The cache is replaced when the response arrives; nothing is sorted
    /// locally.
    pub fn sort_by(&mut self, column: SortColumn) -> Action {
        let seq = self.ledger.issue(RequestKind::Sort(column));
        tracing::debug!(seq = seq, column = %column, "requesting server sort");
        Action::Send(RemoteRequest::sort(&self.base_url, seq, column))
    }

    /// Opens the modal with an empty form.
    pub fn begin_create(&mut self) {
        self.open_overlay(InputMode::Form);
        self.session.begin_create();
    }

    /// Opens the modal pre-filled with the cached record.
    ///
    /// Returns `false` and leaves the state untouched if `id` is not cached.
    pub fn begin_edit(&mut self, id: EmployeeId) -> bool {
        if !self.cache.contains(id) {
            tracing::debug!(employee_id = id, "ignoring edit of unknown employee");
            return false;
        }
        self.open_overlay(InputMode::Form);
        self.session.begin_edit(id, &self.cache)
    }

    /// Closes the modal without saving.
    pub fn cancel_edit(&mut self) {
        self.session.cancel();
        self.notice = None;
        self.close_overlay();
    }

    /// Validates the form and issues the create or update request.
    ///
    /// A validation failure sets an error notice and sends nothing, as does a
    /// save while the previous one is still in flight.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request body cannot be encoded.
    pub fn save(&mut self) -> Result<Vec<Action>> {
        if let Some(seq) = self.session.pending_save() {
            tracing::debug!(pending = seq, "save already in flight, ignoring");
            return Ok(vec![]);
        }

        let intent = match self.session.save() {
            Ok(intent) => intent,
            Err(DirectoryError::Validation(message)) => {
                tracing::debug!(message = %message, "form validation failed");
                self.notice = Some(Notice::error(message));
                return Ok(vec![]);
            }
            Err(e) => return Err(e),
        };

        let request = match intent.target {
            None => {
                let seq = self.ledger.issue(RequestKind::Create);
                RemoteRequest::create(&self.base_url, seq, &intent.draft)?
            }
            Some(id) => {
                let seq = self.ledger.issue(RequestKind::Update(id));
                RemoteRequest::update(&self.base_url, seq, id, &intent.draft)?
            }
        };

        tracing::debug!(seq = request.seq, kind = ?request.kind, "saving employee");
        self.session.mark_pending(request.seq);
        self.notice = None;
        Ok(vec![Action::Send(request)])
    }

    /// Asks for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: EmployeeId) -> bool {
        if !self.cache.contains(id) {
            return false;
        }
        self.open_overlay(InputMode::ConfirmDelete(id));
        true
    }

    /// Issues the delete awaiting confirmation, if any.
    pub fn confirm_delete(&mut self) -> Option<Action> {
        let InputMode::ConfirmDelete(id) = self.input_mode else {
            return None;
        };
        self.close_overlay();

        let seq = self.ledger.issue(RequestKind::Delete(id));
        tracing::debug!(seq = seq, employee_id = id, "deleting employee");
        Some(Action::Send(RemoteRequest::delete(&self.base_url, seq, id)))
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.input_mode, InputMode::ConfirmDelete(_)) {
            self.close_overlay();
        }
    }

    /// Applies a decoded completion to the cache and session.
    ///
    /// Returns whether anything visible changed, plus a fresh request when a
    /// list or sort arrived older than edits already applied. That snapshot
    /// is discarded and the same list or sort is issued again.
    pub fn apply_completion(&mut self, completion: RemoteCompletion) -> (bool, Vec<Action>) {
        let (seq, kind) = (completion.seq, completion.kind);
        let refetch = completion.is_success() && self.ledger.needs_refetch(seq, kind);

        let changed = self.apply(completion);
        if !refetch {
            return (changed, vec![]);
        }

        tracing::debug!(seq = seq, kind = ?kind, "snapshot predates applied edits, refetching");
        let action = match kind {
            RequestKind::Sort(column) => self.sort_by(column),
            _ => self.fetch(),
        };
        (changed, vec![action])
    }

    fn apply(&mut self, completion: RemoteCompletion) -> bool {
        let RemoteCompletion { seq, kind, result } = completion;

        match (kind, result) {
            (RequestKind::List | RequestKind::Sort(_), Ok(CompletionPayload::Records(records))) => {
                if !self.ledger.admit(seq, kind, None) {
                    return false;
                }
                self.cache.load(records);
                self.sort = match kind {
                    RequestKind::Sort(column) => Some(column),
                    _ => None,
                };
                self.last_synced = Some(Utc::now());
                self.apply_search_filter();
                true
            }
            (RequestKind::Create | RequestKind::Update(_), Ok(CompletionPayload::Record(employee))) => {
                let id = employee.id;
                let applied = self.ledger.admit(seq, kind, Some(id));
                if applied {
                    self.cache.upsert(employee);
                    self.apply_search_filter();
                }
                let closed = self.session.complete_save(seq);
                if closed {
                    self.close_overlay();
                }
                applied || closed
            }
            (RequestKind::Delete(id), Ok(CompletionPayload::Deleted)) => {
                if !self.ledger.admit(seq, kind, Some(id)) {
                    return false;
                }
                self.cache.remove(id);
                self.apply_search_filter();
                true
            }
            (RequestKind::List | RequestKind::Sort(_), Err(e)) => {
                tracing::warn!(seq = seq, error = %e, "failed to load employees");
                false
            }
            (RequestKind::Create | RequestKind::Update(_), Err(e)) => {
                tracing::warn!(seq = seq, error = %e, "failed to save employee");
                self.session.fail_save(seq);
                self.notice = Some(Notice::error(SAVE_FAILED));
                true
            }
            (RequestKind::Delete(id), Err(e)) => {
                tracing::warn!(seq = seq, employee_id = id, error = %e, "failed to delete employee");
                self.notice = Some(Notice::error(DELETE_FAILED));
                true
            }
            (kind, Ok(payload)) => {
                tracing::warn!(kind = ?kind, payload = ?payload, "completion payload does not match request");
                false
            }
        }
    }

    fn open_overlay(&mut self, mode: InputMode) {
        if !matches!(self.input_mode, InputMode::Form | InputMode::ConfirmDelete(_)) {
            self.resume_mode = self.input_mode;
        }
        self.input_mode = mode;
        self.notice = None;
    }

    fn close_overlay(&mut self) {
        self.input_mode = self.resume_mode;
        if self.input_mode.is_search() && self.search_query.is_empty() {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// Rows are windowed around the selection so the selected row stays
    /// visible, centered where possible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows = rows, cols = cols).entered();

        let mut vm = UIViewModel {
            rows: vec![],
            selected_index: 0,
            id_width: self.id_column_width(),
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            modal: self.compute_modal(),
            confirm: self.compute_confirm(),
            notice: self.notice.as_ref().map(|n| NoticeInfo {
                message: n.message.clone(),
                is_error: n.kind == NoticeKind::Error,
            }),
        };

        if self.filtered.is_empty() {
            vm.empty_state = Some(self.compute_empty_state());
            return vm;
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let highlight = !self.search_query.is_empty();

        vm.rows = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, employee)| {
                self.compute_display_row(employee, visible_start + relative_idx, highlight)
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);

        vm
    }

    /// Id column width: the longest id among the filtered rows plus one
    /// separating space, so ids are never cut.
    fn id_column_width(&self) -> usize {
        self.filtered
            .iter()
            .map(|e| e.id.to_string().len() + 1)
            .max()
            .unwrap_or(0)
            .max(ID_WIDTH)
    }

    fn compute_display_row(&self, employee: &Employee, absolute_idx: usize, highlight: bool) -> DisplayRow {
        let name = truncate(&employee.name, NAME_WIDTH - 1);
        let position = truncate(&employee.position, POSITION_WIDTH - 1);
        let department = truncate(&employee.department, DEPARTMENT_WIDTH - 1);

        let highlights = if highlight {
            RowHighlights {
                name: store::match_ranges(&name, &self.search_query),
                position: store::match_ranges(&position, &self.search_query),
                department: store::match_ranges(&department, &self.search_query),
            }
        } else {
            RowHighlights::default()
        };

        DisplayRow {
            id: employee.id,
            name,
            position,
            department,
            salary: format_salary(employee.salary),
            is_selected: absolute_idx == self.selected_index,
            highlights,
            triggers: [RowTrigger::edit(employee.id), RowTrigger::delete(employee.id)],
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let total = self.cache.len();
        let shown = self.filtered.len();
        let title = if self.search_query.is_empty() || shown == total {
            format!(" Employees ({total}) ")
        } else {
            format!(" Employees ({shown}/{total}) ")
        };

        let mut details = vec![];
        if let Some(column) = self.sort {
            details.push(format!("sorted by {}", column.label()));
        }
        if let Some(synced) = self.last_synced {
            details.push(format!("synced {}", synced.format("%H:%M:%S")));
        }

        HeaderInfo {
            title,
            detail: (!details.is_empty()).then(|| details.join("  ")),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter/Tab: results  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  e: edit  d: delete"
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  a: add  e: edit  d: delete  1-4: sort  r: refresh  q: quit"
            }
            InputMode::Form => "Tab/Shift+Tab: next/prev field  Enter: save  Esc: cancel",
            InputMode::ConfirmDelete(_) => "y: delete  n/Esc: cancel",
        };

        FooterInfo { keybindings: keybindings.to_string() }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let visible = match self.input_mode {
            InputMode::Search(_) => true,
            InputMode::Form | InputMode::ConfirmDelete(_) => self.resume_mode.is_search(),
            InputMode::Normal => false,
        };

        visible.then(|| SearchBarInfo {
            query: self.search_query.clone(),
            is_typing: self.input_mode == InputMode::Search(SearchFocus::Typing),
        })
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        if self.input_mode != InputMode::Form {
            return None;
        }

        let title = match self.session.state() {
            SessionState::Idle => return None,
            SessionState::Creating => "Add New Employee",
            SessionState::Editing(_) => "Edit Employee",
        };

        let form = self.session.form();
        let fields = FormField::ALL
            .iter()
            .map(|&field| ModalField {
                label: field.label().to_string(),
                value: form.value(field).to_string(),
                is_focused: form.focus == field,
            })
            .collect();

        Some(ModalInfo {
            title: title.to_string(),
            fields,
            hint: "Enter: save  Esc: cancel".to_string(),
            is_saving: self.session.pending_save().is_some(),
        })
    }

    fn compute_confirm(&self) -> Option<ConfirmInfo> {
        let InputMode::ConfirmDelete(id) = self.input_mode else {
            return None;
        };
        let name = self.cache.get(id).map_or_else(|| format!("employee #{id}"), |e| e.name.clone());
        Some(ConfirmInfo { prompt: format!("Delete {name}? (y/n)") })
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.cache.is_empty() {
            EmptyState {
                message: "No employees".to_string(),
                subtitle: "a: add employee  r: refresh".to_string(),
            }
        } else {
            EmptyState {
                message: "No matches".to_string(),
                subtitle: format!("Nothing matches \"{}\"", self.search_query),
            }
        }
    }

    /// Rows left for the table after header, borders, column headings and
    /// footer; the search bar takes three more and a notice one more.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let mut chrome = 6;
        if self.compute_search_bar().is_some() {
            chrome += 3;
        }
        if self.notice.is_some() {
            chrome += 1;
        }
        total_rows.saturating_sub(chrome)
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::context;

    fn state_with(records: Vec<Employee>) -> AppState {
        let mut state = AppState::new("http://localhost:5000/", Theme::default());
        state.cache.load(records);
        state.apply_search_filter();
        state
    }

    fn directory() -> Vec<Employee> {
        (1..=30)
            .map(|i| Employee::new(i, format!("Person {i}"), "Engineer", "Engineering", 1_000 * i))
            .collect()
    }

    fn completion(seq: u64, kind: RequestKind, status: u16, body: &str) -> RemoteCompletion {
        RemoteCompletion::from_parts(status, body.as_bytes(), &context::encode(seq, kind)).unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let state = state_with(vec![]);
        assert_eq!(state.base_url, "http://localhost:5000");
    }

    #[test]
    fn selection_wraps() {
        let mut state = state_with(directory()[..3].to_vec());
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn filter_keeps_selected_record_when_visible() {
        let mut state = state_with(directory());
        state.selected_index = 11;
        state.search_query = "Person 1".to_string();
        state.apply_search_filter();

        assert_eq!(state.selected_employee().map(|e| e.id), Some(12));
    }

    #[test]
    fn window_follows_selection() {
        let mut state = state_with(directory());
        state.selected_index = 29;

        let vm = state.compute_viewmodel(16, 100);

        assert_eq!(vm.rows.len(), 10);
        assert_eq!(vm.rows.last().map(|r| r.id), Some(30));
        assert!(vm.rows[vm.selected_index].is_selected);
    }

    #[test]
    fn rows_carry_edit_and_delete_triggers() {
        let state = state_with(vec![Employee::new(7, "Ann", "Eng", "R&D", 85_000)]);
        let vm = state.compute_viewmodel(24, 100);

        let row = &vm.rows[0];
        assert_eq!(row.salary, "$85,000");
        assert_eq!(row.triggers, [RowTrigger::edit(7), RowTrigger::delete(7)]);
    }

    #[test]
    fn search_highlights_matching_cells() {
        let mut state = state_with(vec![Employee::new(1, "Ann", "Eng", "R&D", 50_000)]);
        state.search_query = "n".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.rows[0].highlights.name, vec![(1, 2), (2, 3)]);
        assert_eq!(vm.rows[0].highlights.position, vec![(1, 2)]);
        assert!(vm.rows[0].highlights.department.is_empty());
    }

    #[test]
    fn empty_states_distinguish_no_data_from_no_matches() {
        let state = state_with(vec![]);
        assert_eq!(state.compute_viewmodel(24, 80).empty_state.unwrap().message, "No employees");

        let mut state = state_with(directory());
        state.search_query = "zzz".to_string();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No matches");
        assert_eq!(vm.header.title, " Employees (0/30) ");
    }

    #[test]
    fn modal_reflects_session() {
        let mut state = state_with(vec![Employee::new(1, "Ann", "Eng", "R&D", 50_000)]);
        assert!(state.begin_edit(1));

        let modal = state.compute_viewmodel(24, 80).modal.unwrap();
        assert_eq!(modal.title, "Edit Employee");
        assert_eq!(modal.fields[0].value, "Ann");
        assert!(modal.fields[0].is_focused);
        assert_eq!(modal.fields[3].value, "50000");

        state.cancel_edit();
        assert!(state.compute_viewmodel(24, 80).modal.is_none());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn begin_edit_unknown_id_keeps_mode() {
        let mut state = state_with(vec![]);
        assert!(!state.begin_edit(9));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn delete_prompt_names_the_employee() {
        let mut state = state_with(vec![Employee::new(1, "Ann", "Eng", "R&D", 50_000)]);
        assert!(state.request_delete(1));

        let confirm = state.compute_viewmodel(24, 80).confirm.unwrap();
        assert_eq!(confirm.prompt, "Delete Ann? (y/n)");
    }

    #[test]
    fn sort_completion_sets_header_detail() {
        let mut state = state_with(vec![]);
        let Action::Send(request) = state.sort_by(SortColumn::Salary) else {
            panic!("expected request");
        };

        let body = r#"[{"id":1,"name":"Ann","position":"Eng","department":"R&D","salary":50000}]"#;
        assert!(state.apply_completion(completion(request.seq, request.kind, 200, body)).0);

        assert_eq!(state.sort, Some(SortColumn::Salary));
        let detail = state.compute_viewmodel(24, 80).header.detail.unwrap();
        assert!(detail.starts_with("sorted by SALARY"));
    }

    #[test]
    fn failed_delete_keeps_record_and_warns() {
        let mut state = state_with(vec![Employee::new(1, "Ann", "Eng", "R&D", 50_000)]);
        state.request_delete(1);
        let Some(Action::Send(request)) = state.confirm_delete() else {
            panic!("expected delete request");
        };

        assert!(state.apply_completion(completion(request.seq, request.kind, 500, "")).0);

        assert!(state.cache.contains(1));
        assert_eq!(state.notice, Some(Notice::error(DELETE_FAILED)));
    }

    #[test]
    fn id_column_grows_with_the_longest_id() {
        let state = state_with(vec![
            Employee::new(7, "Ann", "Eng", "R&D", 50_000),
            Employee::new(1_234_567, "Bo", "QA", "Ops", 40_000),
        ]);
        assert_eq!(state.compute_viewmodel(24, 120).id_width, 8);

        let state = state_with(vec![Employee::new(7, "Ann", "Eng", "R&D", 50_000)]);
        assert_eq!(state.compute_viewmodel(24, 120).id_width, ID_WIDTH);
    }

    #[test]
    fn truncation_marks_cut() {
        assert_eq!(truncate("Sarah Williams", 20), "Sarah Williams");
        assert_eq!(truncate("Sarah Williams", 6), "Sarah…");
    }
}
