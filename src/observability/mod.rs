//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter
//!                                                               → rotating OTLP-JSON file
//! ```
//!
//! Traces land in `~/.local/share/zellij/staffdesk/staffdesk-otlp.json` (seen
//! as `/host/...` from inside the sandbox), one OTLP document per line. The
//! file rotates at 10 MiB and keeps three timestamped backups.
//!
//! The span that issues a backend request also travels to the backend as a
//! `traceparent` header, see [`crate::remote::TraceContext`].
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Size-rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope name.
pub const SERVICE_NAME: &str = "staffdesk";

/// File name of the active trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "staffdesk-otlp.json";
