//! Event writing: validate, emit, optionally forward.
//!
//! A write is a single synchronous pipeline with no persisted
//! intermediate state: the request is validated locally, one record is
//! handed to the host, and on success the message is optionally
//! duplicated to a diagnostic channel per the forwarding policy.

use serde::{Deserialize, Serialize};
use wharton_types::EntryType;

use crate::config::EventLogConfig;
use crate::error::{EventLogError, ValidationError};
use crate::forward::{forward_action, DiagnosticSink, ForwardAction};
use crate::host::{EventLogHost, EventRecord};

/// Largest event id the host accepts.
pub const MAX_EVENT_ID: u32 = 65535;

/// Auxiliary byte payload attached to every written record.
pub const RAW_DATA: [u8; 2] = [10, 20];

/// Parameters for writing a single event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteEventParams {
    /// Severity of the record.
    pub entry_type: EntryType,
    /// Numeric identifier, at most [`MAX_EVENT_ID`].
    pub event_id: u32,
    /// Message body. Must not be empty.
    pub message: String,
    /// Source to write under; the configured provider when `None`.
    pub source: Option<String>,
    /// Log to write into; the configured log when `None`.
    pub log: Option<String>,
    /// Also duplicate the message to the matching diagnostic channel.
    pub stream: bool,
}

impl WriteEventParams {
    /// A non-streaming write under the configured source and log.
    pub fn new(entry_type: EntryType, event_id: u32, message: impl Into<String>) -> Self {
        Self {
            entry_type,
            event_id,
            message: message.into(),
            source: None,
            log: None,
            stream: false,
        }
    }
}

/// Validates and writes one event record.
///
/// Validation happens before any host call: the event id must not exceed
/// [`MAX_EVENT_ID`] and the message must be non-empty. (Unknown severity
/// names never reach this function; they are rejected when parsed into
/// [`EntryType`].) The record carries the fixed [`RAW_DATA`] payload.
///
/// The source is assumed to be registered already (see
/// [`crate::register_source`]); registration is not re-checked, and a
/// missing source surfaces as the host's own error, unmodified.
///
/// With `params.stream` set, the message is additionally forwarded after
/// a successful write according to the per-severity policy: `Error` to
/// the sink's error channel tagged with the event id, `Information` to
/// its verbose channel, everything else nowhere.
///
/// # Errors
///
/// Returns [`ValidationError::EventIdOutOfRange`] or
/// [`ValidationError::EmptyMessage`] without touching the host; host
/// write failures pass through as
/// [`EventLogError::Host`].
pub fn write_event<H: EventLogHost, S: DiagnosticSink>(
    host: &H,
    sink: &S,
    config: &EventLogConfig,
    params: &WriteEventParams,
) -> Result<(), EventLogError> {
    if params.event_id > MAX_EVENT_ID {
        return Err(ValidationError::EventIdOutOfRange(params.event_id).into());
    }
    if params.message.is_empty() {
        return Err(ValidationError::EmptyMessage.into());
    }

    let record = EventRecord {
        source: params
            .source
            .clone()
            .unwrap_or_else(|| config.provider.clone()),
        log: params.log.clone().unwrap_or_else(|| config.log.clone()),
        event_id: params.event_id,
        entry_type: params.entry_type,
        message: params.message.clone(),
        raw_data: RAW_DATA,
    };

    host.write(&record)?;

    tracing::debug!(
        source = %record.source,
        log = %record.log,
        event_id = record.event_id,
        entry_type = %record.entry_type,
        "event written"
    );

    if params.stream {
        match forward_action(params.entry_type) {
            ForwardAction::ErrorChannel => sink.error(params.event_id, &params.message),
            ForwardAction::VerboseChannel => sink.verbose(&params.message),
            ForwardAction::None => {}
        }
    }

    Ok(())
}
