//! Input mode state types for the application.
//!
//! The input mode decides which keybindings are active, how key presses are
//! interpreted, and which overlays the UI draws.
//!
//! # State Machine
//!
//! - **Normal**: Table navigation and commands
//! - **Search**: Live filtering, with typing or result navigation focus
//! - **Form**: The add/edit modal has focus
//! - **ConfirmDelete**: A delete prompt awaits `y` or `n`
//!
//! # Example
//!
//! ```rust
//! use staffdesk::app::modes::{InputMode, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(input_mode.is_search());
//! ```

use crate::domain::EmployeeId;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, e/d for row actions, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),

    /// The add/edit modal is open and receives all typing.
    Form,

    /// Waiting for confirmation before deleting the employee with this id.
    ConfirmDelete(EmployeeId),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}
