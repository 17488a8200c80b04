//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; nothing in the library performs I/O
//! against the host.
//!
//! # Example
//!
//! ```rust
//! use staffdesk::app::Action;
//! use staffdesk::remote::RemoteRequest;
//!
//! let actions = vec![Action::Send(RemoteRequest::list("http://localhost:5000", 1))];
//! assert!(matches!(actions[0], Action::Send(_)));
//! ```

use crate::remote::RemoteRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP request through the host.
    ///
    /// The completion comes back later as a `RemoteCompleted` event carrying
    /// the request's context map.
    Send(RemoteRequest),
}
