//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the staffdesk library and the Zellij
//! plugin system: it maps host events to [`Event`]s, runs
//! [`handle_event`], and executes the returned [`Action`]s against the host.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Initial Load**: Once `WebAccess` is granted, fetch the collection
//! 4. **Update**: Map events, delegate to the library, send requests
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global: `Ctrl+n` / `Ctrl+p` move the selection.
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `e`/`Enter`: Edit selected employee
//! - `d`: Delete selected employee
//! - `a`: Add employee
//! - `1`-`4`: Sort by name, position, department, salary
//! - `r`: Reload
//! - `/`: Search
//! - `q`: Close plugin
//!
//! Search mode: typing edits the query, `Enter`/`Tab` moves to the results,
//! `/` returns to the query, `Esc` leaves search.
//!
//! Form: `Tab`/`Down` and `Shift+Tab`/`Up` change field, `Enter` saves,
//! `Esc` cancels. Delete prompt: `y` confirms, `n`/`Esc` cancels.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use staffdesk::remote::{HttpMethod, RemoteRequest};
use staffdesk::{handle_event, Action, Config, Event, InputMode, SearchFocus, SortColumn};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    app: staffdesk::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: staffdesk::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests network access and subscribes to
    /// events. Nothing is fetched until the permission is granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        staffdesk::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(base_url = %config.base_url, initial_sort = ?config.initial_sort, "parsed configuration");
        self.app = staffdesk::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Event::RemoteCompleted { status, body, context }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Event::PermissionsResult {
                    granted: matches!(permissions, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        staffdesk::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Normal => self.map_normal_key(key.bare_key),
            InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter | BareKey::Tab => Event::FocusResults,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter | BareKey::Char('e') => Event::EditEmployee(self.selected_id()?),
                BareKey::Char('d') => Event::DeleteEmployee(self.selected_id()?),
                BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Esc => Event::ExitSearch,
                _ => return None,
            }),
            InputMode::Form => Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
                BareKey::Tab | BareKey::Down => Event::NextField,
                BareKey::Up => Event::PrevField,
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::ConfirmDelete(_) => Some(match key.bare_key {
                BareKey::Char('y' | 'Y') => Event::ConfirmDelete,
                BareKey::Char('n' | 'N') | BareKey::Esc => Event::CancelDelete,
                _ => return None,
            }),
        }
    }

    fn map_normal_key(&self, bare_key: BareKey) -> Option<Event> {
        Some(match bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter | BareKey::Char('e') => Event::EditEmployee(self.selected_id()?),
            BareKey::Char('d') => Event::DeleteEmployee(self.selected_id()?),
            BareKey::Char('a') => Event::AddEmployee,
            BareKey::Char('r') => Event::Refresh,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            BareKey::Char(c) => Event::SortBy(SortColumn::from_key(c)?),
            _ => return None,
        })
    }

    fn selected_id(&self) -> Option<staffdesk::domain::EmployeeId> {
        self.app.selected_employee().map(|e| e.id)
    }

    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::Send(request) => Self::send(request),
        }
    }

    fn send(request: RemoteRequest) {
        let verb = match request.method {
            HttpMethod::Get => HttpVerb::Get,
            HttpMethod::Post => HttpVerb::Post,
            HttpMethod::Put => HttpVerb::Put,
            HttpMethod::Delete => HttpVerb::Delete,
        };
        tracing::debug!(seq = request.seq, method = %request.method, url = %request.url, "sending request");

        let context = request.context();
        web_request(request.url, verb, request.headers, request.body, context);
    }
}
