//! Request context encoding and trace propagation.
//!
//! Every request carries a small string map that the host hands back
//! untouched with the completion. It identifies the request (sequence number
//! and operation) so the completion can be routed and checked for staleness.

use super::request::RequestKind;
use crate::domain::{EmployeeId, SortColumn};
use std::collections::BTreeMap;

pub const SEQ_KEY: &str = "staffdesk.seq";
pub const OP_KEY: &str = "staffdesk.op";
pub const ID_KEY: &str = "staffdesk.id";
pub const COLUMN_KEY: &str = "staffdesk.column";

/// Distributed tracing context for propagating spans to the backend.
///
/// Captures the current trace and span IDs from OpenTelemetry so the backend
/// can join the request to the plugin's trace via a W3C `traceparent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid, which is the
    /// case whenever no OpenTelemetry layer is installed (tests included).
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id = format!("{:032x}", span_context.trace_id());
            let parent_span_id = format!("{:016x}", span_context.span_id());

            tracing::trace!(
                trace_id = %trace_id,
                parent_span_id = %parent_span_id,
                "capturing trace context"
            );

            Some(Self { trace_id, parent_span_id })
        } else {
            None
        }
    }

    /// Formats the context as a W3C `traceparent` header value (sampled).
    ///
    /// # Examples
    ///
    /// ```
    /// use staffdesk::remote::TraceContext;
    ///
    /// let ctx = TraceContext {
    ///     trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
    ///     parent_span_id: "00f067aa0ba902b7".to_string(),
    /// };
    /// assert_eq!(
    ///     ctx.traceparent(),
    ///     "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"
    /// );
    /// ```
    #[must_use]
    pub fn traceparent(&self) -> String {
        format!("00-{}-{}-01", self.trace_id, self.parent_span_id)
    }
}

/// Encodes a request's identity into the host context map.
pub fn encode(seq: u64, kind: RequestKind) -> BTreeMap<String, String> {
    let mut context = BTreeMap::new();
    context.insert(SEQ_KEY.to_string(), seq.to_string());
    context.insert(OP_KEY.to_string(), kind.op_name().to_string());

    match kind {
        RequestKind::Sort(column) => {
            context.insert(COLUMN_KEY.to_string(), column.as_str().to_string());
        }
        RequestKind::Update(id) | RequestKind::Delete(id) => {
            context.insert(ID_KEY.to_string(), id.to_string());
        }
        RequestKind::List | RequestKind::Create => {}
    }

    context
}

/// Decodes a context map produced by [`encode`].
///
/// Returns `None` for maps that did not originate from this plugin or are
/// missing a required key.
pub fn decode(context: &BTreeMap<String, String>) -> Option<(u64, RequestKind)> {
    let seq = context.get(SEQ_KEY)?.parse::<u64>().ok()?;

    let id = || -> Option<EmployeeId> { context.get(ID_KEY)?.parse().ok() };

    let kind = match context.get(OP_KEY)?.as_str() {
        "list" => RequestKind::List,
        "sort" => RequestKind::Sort(context.get(COLUMN_KEY)?.parse::<SortColumn>().ok()?),
        "create" => RequestKind::Create,
        "update" => RequestKind::Update(id()?),
        "delete" => RequestKind::Delete(id()?),
        _ => return None,
    };

    Some((seq, kind))
}
