//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single writer of [`AppState`]. Key presses arrive
//! already mapped to intent-level events by the plugin shim; backend
//! completions arrive raw and are decoded here.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Editing**: `AddEmployee`, `EditEmployee`, `NextField`, `PrevField`, `Submit`
//! - **Deleting**: `DeleteEmployee`, `ConfirmDelete`, `CancelDelete`
//! - **Text input**: `Char`, `Backspace`, `Escape`
//! - **Remote**: `SortBy`, `Refresh`, `RemoteCompleted`
//! - **System**: `PermissionsResult`, `CloseFocus`

use crate::app::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState, Notice};
use crate::domain::error::Result;
use crate::domain::{EmployeeId, SortColumn};
use crate::remote::RemoteCompletion;
use std::collections::BTreeMap;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,

    /// Types a character into the search query or the focused form field.
    Char(char),
    /// Removes the last character from the query or focused field.
    Backspace,
    /// Closes whatever overlay is open, or dismisses the notice.
    Escape,

    /// Opens the modal in create mode.
    AddEmployee,
    /// Opens the modal pre-filled for the given employee (edit trigger).
    EditEmployee(EmployeeId),
    /// Asks to delete the given employee (delete trigger).
    DeleteEmployee(EmployeeId),
    NextField,
    PrevField,
    /// Saves the form.
    Submit,
    ConfirmDelete,
    CancelDelete,

    /// Requests a server-sorted reload.
    SortBy(SortColumn),
    /// Reloads the collection.
    Refresh,

    /// Reports whether the host granted network access.
    PermissionsResult {
        granted: bool,
    },

    /// A `web_request` finished.
    ///
    /// Carries exactly what the host reports; decoded by the handler.
    RemoteCompleted {
        status: u16,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
    },
}

impl Event {
    /// Whether the event came from the keyboard.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        !matches!(self, Self::PermissionsResult { .. } | Self::RemoteCompleted { .. })
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, plus the actions for the shim to
/// execute in order.
///
/// # Errors
///
/// Returns an error if a request body cannot be encoded.
///
/// # Example
///
/// ```rust
/// use staffdesk::app::{handle_event, Action, AppState, Event};
/// use staffdesk::ui::theme::Theme;
///
/// let mut state = AppState::new("http://localhost:5000", Theme::default());
/// let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
/// assert!(matches!(actions.as_slice(), [Action::Send(_)]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventName(event)).entered();

    let dismissed = event.is_input() && state.input_mode == InputMode::Normal && state.notice.take().is_some();

    let (should_render, actions) = match event {
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            state.apply_search_filter();
            (true, vec![])
        }
        Event::FocusSearchBar => {
            if !state.input_mode.is_search() {
                return Ok((dismissed, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, vec![])
        }
        Event::FocusResults => {
            if !state.input_mode.is_search() {
                return Ok((dismissed, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            (true, vec![])
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            exit_search(state);
            (true, vec![])
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, char = %c, "search query updated");
                state.apply_search_filter();
                (true, vec![])
            }
            InputMode::Form => (state.session.form_mut().insert_char(*c), vec![]),
            _ => (dismissed, vec![]),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.search_query.pop();
                state.apply_search_filter();
                (true, vec![])
            }
            InputMode::Form => {
                state.session.form_mut().backspace();
                (true, vec![])
            }
            _ => (dismissed, vec![]),
        },
        Event::Escape => {
            match state.input_mode {
                InputMode::Search(_) => exit_search(state),
                InputMode::Form => state.cancel_edit(),
                InputMode::ConfirmDelete(_) => state.cancel_delete(),
                InputMode::Normal => return Ok((dismissed, vec![])),
            }
            (true, vec![])
        }
        Event::AddEmployee => {
            state.begin_create();
            (true, vec![])
        }
        Event::EditEmployee(id) => (state.begin_edit(*id) || dismissed, vec![]),
        Event::DeleteEmployee(id) => (state.request_delete(*id) || dismissed, vec![]),
        Event::NextField | Event::PrevField => {
            if state.input_mode != InputMode::Form {
                return Ok((dismissed, vec![]));
            }
            let form = state.session.form_mut();
            if *event == Event::NextField {
                form.focus_next();
            } else {
                form.focus_prev();
            }
            (true, vec![])
        }
        Event::Submit => {
            if state.input_mode != InputMode::Form {
                return Ok((dismissed, vec![]));
            }
            (true, state.save()?)
        }
        Event::ConfirmDelete => match state.confirm_delete() {
            Some(action) => (true, vec![action]),
            None => (dismissed, vec![]),
        },
        Event::CancelDelete => {
            state.cancel_delete();
            (true, vec![])
        }
        Event::SortBy(column) => (dismissed, vec![state.sort_by(*column)]),
        Event::Refresh => (dismissed, vec![state.fetch()]),
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("network access granted, loading employees");
                (false, vec![state.initial_load()])
            } else {
                tracing::warn!("network access denied, directory unavailable");
                state.notice = Some(Notice::info("Network access was not granted; the directory cannot load"));
                (true, vec![])
            }
        }
        Event::RemoteCompleted { status, body, context } => {
            match RemoteCompletion::from_parts(*status, body, context) {
                Some(completion) => state.apply_completion(completion),
                None => (false, vec![]),
            }
        }
    };

    Ok((should_render || dismissed, actions))
}

fn exit_search(state: &mut AppState) {
    state.input_mode = InputMode::Normal;
    state.search_query.clear();
    state.apply_search_filter();
}

/// Logs events without dumping response bodies.
struct EventName<'a>(&'a Event);

impl std::fmt::Debug for EventName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::RemoteCompleted { status, body, .. } => {
                write!(f, "RemoteCompleted(status={status}, body_len={})", body.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Employee;
    use crate::ui::theme::Theme;

    fn loaded() -> AppState {
        let mut state = AppState::new("http://localhost:5000", Theme::default());
        state.cache.load(vec![
            Employee::new(1, "Ann", "Eng", "R&D", 50_000),
            Employee::new(2, "Bo", "QA", "Ops", 40_000),
        ]);
        state.apply_search_filter();
        state
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    #[test]
    fn typing_filters_live() {
        let mut state = loaded();
        send(&mut state, &[Event::SearchMode, Event::Char('q'), Event::Char('a')]);

        assert_eq!(state.search_query, "qa");
        assert_eq!(state.filtered.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);

        send(&mut state, &[Event::Backspace, Event::Backspace]);
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn focus_results_with_empty_query_leaves_search() {
        let mut state = loaded();
        send(&mut state, &[Event::SearchMode, Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn escape_exits_search_and_clears_query() {
        let mut state = loaded();
        send(&mut state, &[Event::SearchMode, Event::Char('b'), Event::FocusResults, Event::Escape]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn chars_in_normal_mode_are_ignored() {
        let mut state = loaded();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn form_typing_goes_to_focused_field() {
        let mut state = loaded();
        send(
            &mut state,
            &[Event::AddEmployee, Event::Char('C'), Event::NextField, Event::Char('D'), Event::PrevField, Event::Backspace],
        );

        let form = state.session.form();
        assert_eq!(form.name, "");
        assert_eq!(form.position, "D");
    }

    #[test]
    fn escape_cancels_form() {
        let mut state = loaded();
        send(&mut state, &[Event::EditEmployee(1), Event::Char('!'), Event::Escape]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(!state.session.is_active());
        assert_eq!(state.cache.get(1).map(|e| e.name.as_str()), Some("Ann"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = loaded();

        let (_, actions) = handle_event(&mut state, &Event::DeleteEmployee(2)).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::ConfirmDelete(2));

        let (_, actions) = handle_event(&mut state, &Event::CancelDelete).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);

        send(&mut state, &[Event::DeleteEmployee(2)]);
        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        let [Action::Send(request)] = actions.as_slice() else {
            panic!("expected a single delete request, got {actions:?}");
        };
        assert_eq!(request.url, "http://localhost:5000/employees/2");
        assert!(state.cache.contains(2), "removal waits for the completion");
    }

    #[test]
    fn denied_permissions_send_nothing() {
        let mut state = loaded();
        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(actions.is_empty());
        assert!(state.notice.is_some());
    }

    #[test]
    fn initial_sort_is_used_for_first_load() {
        let mut state = loaded();
        state.initial_sort = Some(SortColumn::Department);

        let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        let [Action::Send(request)] = actions.as_slice() else {
            panic!("expected a request");
        };
        assert_eq!(request.url, "http://localhost:5000/employees/sort/department");
    }

    #[test]
    fn foreign_completion_is_ignored() {
        let mut state = loaded();
        let (render, _) = handle_event(
            &mut state,
            &Event::RemoteCompleted { status: 200, body: b"[]".to_vec(), context: BTreeMap::new() },
        )
        .unwrap();

        assert!(!render);
        assert_eq!(state.cache.len(), 2);
    }

    #[test]
    fn next_key_in_normal_mode_dismisses_notice() {
        let mut state = loaded();
        state.notice = Some(Notice::error("boom"));

        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();

        assert!(render);
        assert!(state.notice.is_none());
    }

    fn request(actions: &[Action]) -> &crate::remote::RemoteRequest {
        match actions {
            [Action::Send(request)] => request,
            other => panic!("expected a single request, got {other:?}"),
        }
    }

    fn reply(request: &crate::remote::RemoteRequest, status: u16, body: &str) -> Event {
        Event::RemoteCompleted {
            status,
            body: body.as_bytes().to_vec(),
            context: request.context(),
        }
    }

    #[test]
    fn create_round_trip() {
        let mut state = AppState::new("http://localhost:5000", Theme::default());
        state.cache.load(vec![Employee::new(1, "Ann", "Eng", "R&D", 50_000)]);
        state.apply_search_filter();

        send(&mut state, &[Event::AddEmployee]);
        for (i, value) in ["Bo", "QA", "Ops", "40000"].iter().enumerate() {
            if i > 0 {
                send(&mut state, &[Event::NextField]);
            }
            for c in value.chars() {
                send(&mut state, &[Event::Char(c)]);
            }
        }

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let post = request(&actions).clone();
        assert_eq!(post.url, "http://localhost:5000/employees");
        let body: serde_json::Value = serde_json::from_slice(&post.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Bo", "position": "QA", "department": "Ops", "salary": 40000})
        );
        assert!(state.session.is_active(), "modal stays open until the reply");

        let created = r#"{"id":2,"name":"Bo","position":"QA","department":"Ops","salary":40000}"#;
        send(&mut state, &[reply(&post, 201, created)]);

        assert_eq!(state.cache.len(), 2);
        assert_eq!(state.cache.get(2).map(|e| e.name.as_str()), Some("Bo"));
        assert!(!state.session.is_active());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn incomplete_form_sends_nothing() {
        let mut state = loaded();
        send(&mut state, &[Event::AddEmployee, Event::NextField, Event::Char('Q')]);

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Form);
        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some(crate::app::session::MISSING_FIELDS)
        );
    }

    #[test]
    fn sort_replaces_cache_in_server_order() {
        let mut state = loaded();
        let (_, actions) = handle_event(&mut state, &Event::SortBy(SortColumn::Salary)).unwrap();
        let sort = request(&actions).clone();
        assert_eq!(sort.url, "http://localhost:5000/employees/sort/salary");

        let body = r#"[
            {"id":2,"name":"Bo","position":"QA","department":"Ops","salary":40000},
            {"id":1,"name":"Ann","position":"Eng","department":"R&D","salary":50000}
        ]"#;
        send(&mut state, &[reply(&sort, 200, body)]);

        let ids: Vec<_> = state.cache.records().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(state.sort, Some(SortColumn::Salary));
    }

    #[test]
    fn superseded_sort_is_discarded() {
        let mut state = loaded();
        let (_, first) = handle_event(&mut state, &Event::SortBy(SortColumn::Name)).unwrap();
        let (_, second) = handle_event(&mut state, &Event::SortBy(SortColumn::Salary)).unwrap();
        let (first, second) = (request(&first).clone(), request(&second).clone());

        let by_salary = r#"[{"id":2,"name":"Bo","position":"QA","department":"Ops","salary":40000}]"#;
        let by_name = r#"[{"id":1,"name":"Ann","position":"Eng","department":"R&D","salary":50000}]"#;
        send(&mut state, &[reply(&second, 200, by_salary)]);
        let (render, _) = handle_event(&mut state, &reply(&first, 200, by_name)).unwrap();

        assert!(!render);
        assert_eq!(state.cache.records().iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(state.sort, Some(SortColumn::Salary));
    }

    #[test]
    fn failed_save_leaves_cache_and_keeps_modal() {
        let mut state = loaded();
        send(&mut state, &[Event::EditEmployee(1), Event::Char('n')]);
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let put = request(&actions).clone();
        assert_eq!(put.url, "http://localhost:5000/employees/1");

        send(&mut state, &[reply(&put, 500, "boom")]);

        assert_eq!(state.cache.get(1).map(|e| e.name.as_str()), Some("Ann"));
        assert_eq!(state.input_mode, InputMode::Form);
        assert_eq!(state.session.pending_save(), None);
        assert!(state.notice.as_ref().is_some_and(|n| n.kind == crate::app::NoticeKind::Error));
    }

    #[test]
    fn late_update_does_not_resurrect_deleted_record() {
        let mut state = loaded();
        send(&mut state, &[Event::EditEmployee(2), Event::Char('b')]);
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let put = request(&actions).clone();

        send(&mut state, &[Event::Escape, Event::DeleteEmployee(2)]);
        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        let delete = request(&actions).clone();

        send(&mut state, &[reply(&delete, 204, "")]);
        assert!(!state.cache.contains(2));

        let updated = r#"{"id":2,"name":"Bob","position":"QA","department":"Ops","salary":40000}"#;
        send(&mut state, &[reply(&put, 200, updated)]);

        assert!(!state.cache.contains(2));
        assert_eq!(state.cache.len(), 1);
    }

    fn ids(state: &AppState) -> Vec<u64> {
        state.cache.records().iter().map(|e| e.id).collect()
    }

    #[test]
    fn list_older_than_applied_delete_is_refetched_not_loaded() {
        let mut state = loaded();
        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        let list = request(&actions).clone();

        send(&mut state, &[Event::DeleteEmployee(2)]);
        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        let delete = request(&actions).clone();
        send(&mut state, &[reply(&delete, 204, "")]);

        let snapshot = r#"[
            {"id":1,"name":"Ann","position":"Eng","department":"R&D","salary":50000},
            {"id":2,"name":"Bo","position":"QA","department":"Ops","salary":40000}
        ]"#;
        let (_, actions) = handle_event(&mut state, &reply(&list, 200, snapshot)).unwrap();

        assert_eq!(ids(&state), vec![1]);
        let again = request(&actions);
        assert_eq!(again.url, "http://localhost:5000/employees");
        assert!(again.seq > delete.seq);
    }

    #[test]
    fn sort_older_than_applied_update_keeps_the_update() {
        let mut state = loaded();
        let (_, actions) = handle_event(&mut state, &Event::SortBy(SortColumn::Name)).unwrap();
        let sort = request(&actions).clone();

        send(&mut state, &[Event::EditEmployee(1), Event::Char('e')]);
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let put = request(&actions).clone();
        let updated = r#"{"id":1,"name":"Anne","position":"Eng","department":"R&D","salary":50000}"#;
        send(&mut state, &[reply(&put, 200, updated)]);

        let snapshot = r#"[
            {"id":1,"name":"Ann","position":"Eng","department":"R&D","salary":50000},
            {"id":2,"name":"Bo","position":"QA","department":"Ops","salary":40000}
        ]"#;
        let (_, actions) = handle_event(&mut state, &reply(&sort, 200, snapshot)).unwrap();

        assert_eq!(state.cache.get(1).map(|e| e.name.as_str()), Some("Anne"));
        assert_eq!(request(&actions).url, "http://localhost:5000/employees/sort/name");
    }

    #[test]
    fn submit_while_saving_sends_nothing() {
        let mut state = loaded();
        send(&mut state, &[Event::EditEmployee(1), Event::Char('e')]);

        let (_, first) = handle_event(&mut state, &Event::Submit).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Submit).unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert!(state.session.pending_save().is_some());
    }
}
