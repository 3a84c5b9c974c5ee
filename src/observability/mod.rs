//! Span export to a local OTLP JSON file.
//!
//! The terminal belongs to the UI, so nothing is logged to stdout or stderr.
//! Instead `tracing` spans flow through OpenTelemetry into a rotating file:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → OtlpFileExporter → ~/.hackpad/hackpad-otlp.json
//! ```
//!
//! Each line of the file is one OTLP JSON `resourceSpans` document. The file
//! rotates at 10 MB and keeps 3 backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup from [`Config`](crate::Config)
//! - [`tracer`]: Tracer provider and the file exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
