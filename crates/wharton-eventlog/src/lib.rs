//! Host-local facade over the platform event-log subsystem.
//!
//! Standardizes three operations for a single logical application:
//! registering a named event source under a log, querying previously
//! written events with structured filters, and writing new events with a
//! validated severity, numeric identifier, and message, optionally
//! duplicating the message to a parallel diagnostic channel.
//!
//! Storage, indexing, rotation, and transport belong to the platform
//! subsystem behind the [`EventLogHost`] trait; this crate persists
//! nothing itself, never retries, and passes host failures through
//! unmodified.
//!
//! # Operations
//!
//! | Operation | Entry point | Notes |
//! |-----------|-------------|-------|
//! | Register  | [`register_source`] | idempotent; safe on every startup |
//! | Query     | [`query_events`] | lazy forward-only cursor, host order |
//! | Write     | [`write_event`] | validates first, then one host write |
//!
//! # Usage
//!
//! ```rust,ignore
//! use wharton_eventlog::{
//!     query_events, register_source, write_event, EventLogConfig, QuerySpec,
//!     TracingSink, WriteEventParams,
//! };
//! use wharton_types::EntryType;
//!
//! let config = EventLogConfig::default();
//! register_source(&host, &config)?;
//!
//! let params = WriteEventParams::new(EntryType::Information, 1000, "service started");
//! write_event(&host, &TracingSink, &config, &params)?;
//!
//! for event in query_events(&host, &config, &QuerySpec::default())? {
//!     println!("{}", event?.message);
//! }
//! ```

mod config;
mod error;
mod forward;
mod host;
mod query;
mod registrar;
mod writer;

pub use config::{load_config, ConfigError, EventLogConfig};
pub use error::{EventLogError, ValidationError};
pub use forward::{forward_action, DiagnosticSink, ForwardAction, TracingSink};
pub use host::{EventCursor, EventLogHost, EventRecord, HostError};
pub use query::{build_filter, query_events, EventFilter, QuerySpec};
pub use registrar::{register_source, register_source_in, RegistrationOutcome};
pub use writer::{write_event, WriteEventParams, MAX_EVENT_ID, RAW_DATA};
