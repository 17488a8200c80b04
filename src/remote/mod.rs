//! REST contract with the employee backend.
//!
//! Requests are plain descriptions ([`RemoteRequest`]) built by the
//! application layer and executed by the plugin shim through the host's
//! `web_request`. Completions come back as raw status, body and context map
//! and are decoded here into a [`RemoteCompletion`].
//!
//! Nothing in this module talks to the host, so the whole contract can be
//! exercised natively in tests.
//!
//! # Modules
//!
//! - `context`: Request context keys and trace propagation
//! - `request`: Typed request construction for each endpoint
//! - `response`: Status checking and body decoding of completions

pub mod context;
pub mod request;
pub mod response;

pub use context::TraceContext;
pub use request::{HttpMethod, RemoteRequest, RequestKind};
pub use response::{CompletionPayload, RemoteCompletion};
