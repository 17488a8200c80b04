//! Typed requests for each backend endpoint.
//!
//! | Operation | Method | Path                       | Body            |
//! |-----------|--------|----------------------------|-----------------|
//! | list      | GET    | `/employees`               | none            |
//! | sort      | GET    | `/employees/sort/{column}` | none            |
//! | create    | POST   | `/employees`               | `EmployeeDraft` |
//! | update    | PUT    | `/employees/{id}`          | `EmployeeDraft` |
//! | delete    | DELETE | `/employees/{id}`          | none            |

use super::context::{self, TraceContext};
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{EmployeeDraft, EmployeeId, SortColumn};
use std::collections::BTreeMap;
use std::fmt;

/// HTTP verbs used by the backend contract.
///
/// Mapped onto the host's verb type by the plugin shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// What a request does, independent of how it travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Full collection fetch.
    List,
    /// Server-sorted full collection fetch.
    Sort(SortColumn),
    Create,
    Update(EmployeeId),
    Delete(EmployeeId),
}

impl RequestKind {
    /// Whether the completion replaces the whole cache.
    #[must_use]
    pub const fn is_replacement(self) -> bool {
        matches!(self, Self::List | Self::Sort(_))
    }

    /// The record id a mutation targets, if known before the response.
    #[must_use]
    pub const fn target_id(self) -> Option<EmployeeId> {
        match self {
            Self::Update(id) | Self::Delete(id) => Some(id),
            Self::List | Self::Sort(_) | Self::Create => None,
        }
    }

    pub(crate) const fn op_name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Sort(_) => "sort",
            Self::Create => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }
}

/// A fully described HTTP request, ready for the host to execute.
///
/// # Examples
///
/// ```
/// use staffdesk::domain::SortColumn;
/// use staffdesk::remote::{HttpMethod, RemoteRequest};
///
/// let request = RemoteRequest::sort("http://localhost:5000", 4, SortColumn::Salary);
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.url, "http://localhost:5000/employees/sort/salary");
/// assert!(request.body.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    /// Sequence number assigned by the request ledger.
    pub seq: u64,
    pub kind: RequestKind,
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl RemoteRequest {
    /// `GET /employees`
    #[must_use]
    pub fn list(base_url: &str, seq: u64) -> Self {
        Self::new(base_url, seq, RequestKind::List, HttpMethod::Get, "/employees".to_string(), Vec::new())
    }

    /// `GET /employees/sort/{column}`
    #[must_use]
    pub fn sort(base_url: &str, seq: u64, column: SortColumn) -> Self {
        Self::new(
            base_url,
            seq,
            RequestKind::Sort(column),
            HttpMethod::Get,
            format!("/employees/sort/{}", column.as_str()),
            Vec::new(),
        )
    }

    /// `POST /employees` with the draft as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Encode`] if the draft cannot be serialized.
    pub fn create(base_url: &str, seq: u64, draft: &EmployeeDraft) -> Result<Self> {
        let body = encode_body(draft)?;
        Ok(Self::new(base_url, seq, RequestKind::Create, HttpMethod::Post, "/employees".to_string(), body)
            .with_json_content_type())
    }

    /// `PUT /employees/{id}` with the draft as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Encode`] if the draft cannot be serialized.
    pub fn update(base_url: &str, seq: u64, id: EmployeeId, draft: &EmployeeDraft) -> Result<Self> {
        let body = encode_body(draft)?;
        Ok(Self::new(
            base_url,
            seq,
            RequestKind::Update(id),
            HttpMethod::Put,
            format!("/employees/{id}"),
            body,
        )
        .with_json_content_type())
    }

    /// `DELETE /employees/{id}`
    #[must_use]
    pub fn delete(base_url: &str, seq: u64, id: EmployeeId) -> Self {
        Self::new(base_url, seq, RequestKind::Delete(id), HttpMethod::Delete, format!("/employees/{id}"), Vec::new())
    }

    /// Context map handed to the host and returned with the completion.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        context::encode(self.seq, self.kind)
    }

    fn new(base_url: &str, seq: u64, kind: RequestKind, method: HttpMethod, path: String, body: Vec<u8>) -> Self {
        let mut headers = BTreeMap::new();
        if let Some(trace) = TraceContext::from_current() {
            headers.insert("traceparent".to_string(), trace.traceparent());
        }

        let url = format!("{}{path}", base_url.trim_end_matches('/'));
        tracing::debug!(seq = seq, method = %method, url = %url, "built remote request");

        Self { seq, kind, method, url, headers, body }
    }

    fn with_json_content_type(mut self) -> Self {
        self.headers.insert("Content-Type".to_string(), "application/json".to_string());
        self
    }
}

fn encode_body(draft: &EmployeeDraft) -> Result<Vec<u8>> {
    serde_json::to_vec(draft).map_err(|e| DirectoryError::Encode(e.to_string()))
}
