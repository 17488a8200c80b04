//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain, store and remote
//! layers.
//!
//! ```text
//! Key / completion → Event → handle_event → AppState mutation → Actions
//!        ↑                                                          │
//!        └────────────── web_request completion ◄───────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`ledger`]: Request sequence numbers and stale completion checks
//! - [`modes`]: Input mode state machine
//! - [`session`]: Edit session and modal form
//! - [`state`]: Central application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use staffdesk::app::{handle_event, AppState, Event};
//! use staffdesk::ui::theme::Theme;
//!
//! let mut state = AppState::new("http://localhost:5000", Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod ledger;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use ledger::RequestLedger;
pub use modes::{InputMode, SearchFocus};
pub use session::{EditSession, EmployeeForm, FormField, SessionState};
pub use state::{AppState, Notice, NoticeKind};
