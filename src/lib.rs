//! Staffdesk: a Zellij plugin for browsing and editing an employee directory.
//!
//! The directory lives behind a small REST backend; the plugin keeps a local
//! mirror of it and provides:
//! - A table of employees with per-row edit and delete triggers
//! - Case-insensitive filtering on name, position and department
//! - A modal form for creating and editing records
//! - Server-side sorting by name, position, department or salary

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - key mapping, web_request, rendering              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Edit session and request ledger                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Remote Layer  │
//! │ (ui/)         │   │ (store/)      │   │ (remote/)     │
//! │ - Rendering   │   │ - Cache       │   │ - Requests    │
//! │ - Theming     │   │ - Search      │   │ - Completions │
//! │ - Components  │   │               │   │ - Trace ctx   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Employee model and errors (domain/)              │
//! │  - Host paths (infrastructure/)                     │
//! │  - OpenTelemetry file export (observability/)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The application layer never performs I/O. It returns [`Action`]s; the
//! shim turns `Action::Send` into a host `web_request` and feeds the result
//! back as [`Event::RemoteCompleted`].

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod remote;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{DirectoryError, Employee, Result, SortColumn};
pub use ui::Theme;

use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Backend used when no `base_url` is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Plugin configuration parsed from the layout's plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/staffdesk.wasm" {
///     base_url "http://localhost:5000"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/staffdesk/theme.toml"
///     trace_level "debug"
///     initial_sort "salary"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin of the REST backend, without trailing slash.
    pub base_url: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` is expanded.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: String,

    /// Column for a server-sorted first load instead of a plain fetch.
    pub initial_sort: Option<SortColumn>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            initial_sort: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing or blank values fall back to the defaults; an unknown
    /// `initial_sort` column is ignored.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use staffdesk::{Config, SortColumn};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("base_url".to_string(), "http://api.local:8080/".to_string());
    /// map.insert("initial_sort".to_string(), "salary".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.base_url, "http://api.local:8080");
    /// assert_eq!(config.initial_sort, Some(SortColumn::Salary));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let base_url = non_blank("base_url")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let initial_sort = non_blank("initial_sort").and_then(|column| {
            column
                .parse::<SortColumn>()
                .map_err(|e| tracing::debug!(column = %column, error = %e, "ignoring initial_sort"))
                .ok()
        });

        Self {
            base_url,
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level").unwrap_or_else(|| "info".to_string()),
            initial_sort,
        }
    }
}

/// Builds the initial [`AppState`] for `config`.
///
/// A theme that fails to load falls back to the default theme. Tracing is set
/// up separately by the shim via [`observability::init_tracing`].
///
/// ```rust
/// use staffdesk::{initialize, Config, InputMode};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.base_url, "http://localhost:5000");
/// assert_eq!(state.input_mode, InputMode::Normal);
/// assert!(state.cache.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, "initializing staffdesk plugin");

    let theme = match (&config.theme_file, &config.theme_name) {
        (Some(theme_file), _) => Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        }),
        (None, Some(theme_name)) => Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        }),
        (None, None) => Theme::default(),
    };

    let mut state = AppState::new(config.base_url.clone(), theme);
    state.initial_sort = config.initial_sort;
    state
}
