//! Decoding of host completions.
//!
//! A completion is a success only when the status is 2xx and the body decodes
//! into the shape the operation expects. Anything else becomes an error the
//! handler reports without touching the cache.

use super::context;
use super::request::RequestKind;
use crate::domain::error::{DirectoryError, Result};
use crate::domain::Employee;
use std::collections::BTreeMap;

/// Successful, decoded result of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionPayload {
    /// The whole collection, in server order (list and sort).
    Records(Vec<Employee>),
    /// The created or updated record as echoed by the backend.
    Record(Employee),
    /// The backend acknowledged a delete; the body is ignored.
    Deleted,
}

/// A completed request, matched back to its sequence number and kind.
#[derive(Debug)]
pub struct RemoteCompletion {
    pub seq: u64,
    pub kind: RequestKind,
    pub result: Result<CompletionPayload>,
}

impl RemoteCompletion {
    /// Builds a completion from what the host reports.
    ///
    /// Returns `None` when the context map was not produced by this plugin;
    /// such completions are ignored by the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use staffdesk::remote::{CompletionPayload, RemoteCompletion, RemoteRequest};
    ///
    /// let request = RemoteRequest::delete("http://localhost:5000", 7, 3);
    /// let completion = RemoteCompletion::from_parts(204, b"", &request.context()).unwrap();
    /// assert_eq!(completion.seq, 7);
    /// assert!(matches!(completion.result, Ok(CompletionPayload::Deleted)));
    ///
    /// assert!(RemoteCompletion::from_parts(200, b"[]", &BTreeMap::new()).is_none());
    /// ```
    #[must_use]
    pub fn from_parts(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Self> {
        let Some((seq, kind)) = context::decode(context) else {
            tracing::debug!(status = status, "completion without staffdesk context, ignoring");
            return None;
        };

        let result = decode_outcome(status, body, kind);

        match &result {
            Ok(_) => tracing::debug!(seq = seq, status = status, kind = ?kind, "remote call succeeded"),
            Err(e) => tracing::warn!(seq = seq, status = status, kind = ?kind, error = %e, "remote call failed"),
        }

        Some(Self { seq, kind, result })
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

fn decode_outcome(status: u16, body: &[u8], kind: RequestKind) -> Result<CompletionPayload> {
    if !is_success_status(status) {
        return Err(DirectoryError::Remote {
            status,
            message: String::from_utf8_lossy(body).trim().to_string(),
        });
    }

    match kind {
        RequestKind::List | RequestKind::Sort(_) => {
            Ok(CompletionPayload::Records(serde_json::from_slice(body)?))
        }
        RequestKind::Create | RequestKind::Update(_) => {
            Ok(CompletionPayload::Record(serde_json::from_slice(body)?))
        }
        RequestKind::Delete(_) => Ok(CompletionPayload::Deleted),
    }
}
