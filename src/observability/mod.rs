//! OpenTelemetry tracing with file-based OTLP export.
//!
//! The plugin runs inside Zellij's WASM sandbox where there is no collector to
//! talk to, so spans are serialized as OTLP JSON and appended to a rotating
//! file for offline analysis:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in
//! `/host/.local/share/zellij/content-picker/content-picker-otlp.json`, rotated
//! at 5 MB with two backups. The level comes from the `trace_level` plugin
//! option and defaults to `"info"`.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and OTLP JSON formatting
//! - `file_writer`: Size-rotated line writer

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;
