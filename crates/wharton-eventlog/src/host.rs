//! Host subsystem contract.
//!
//! The platform event-log store is an external collaborator. This module
//! defines the four primitives the facade relies on and the error
//! vocabulary those primitives report. Implementations own persistence,
//! indexing, rotation, and transport; the facade never reinterprets or
//! retries their failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wharton_types::{EntryType, LoggedEvent};

use crate::query::EventFilter;

/// Failures reported by the host subsystem primitives.
///
/// These pass through the facade unmodified as
/// [`EventLogError::Host`](crate::EventLogError::Host).
#[derive(Debug, Error)]
pub enum HostError {
    /// The caller lacks the rights for the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The requested log does not exist on the target host.
    #[error("log not found: {0}")]
    LogNotFound(String),

    /// The target host could not be reached.
    #[error("host unreachable: {0}")]
    Unreachable(String),

    /// The record named a source that is not registered in the log.
    #[error("source not registered: {0}")]
    SourceNotRegistered(String),

    /// The host rejected the record against its own constraints.
    #[error("record rejected by host: {0}")]
    Rejected(String),

    /// Any other host-specific failure.
    #[error("host subsystem error: {0}")]
    Other(String),
}

/// A single event record handed to the host for writing.
///
/// Ownership passes to the host on [`EventLogHost::write`]; the facade
/// never mutates or re-reads a written record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Source the record is written under.
    pub source: String,
    /// Log the record is written into.
    pub log: String,
    /// Numeric identifier of the event type.
    pub event_id: u32,
    /// Severity of the record.
    pub entry_type: EntryType,
    /// Message body.
    pub message: String,
    /// Auxiliary byte payload attached by the facade.
    pub raw_data: [u8; 2],
}

/// Lazy, forward-only cursor over query results, in host order.
///
/// Not restartable: once consumed, re-run the query to read again.
/// Failures during iteration surface as `Err` items, unmodified.
pub type EventCursor<'a> = Box<dyn Iterator<Item = Result<LoggedEvent, HostError>> + 'a>;

/// The primitives the platform event-log subsystem exposes.
///
/// Every call is synchronous and blocks until the host answers. Queries
/// that target a remote machine may block on network I/O with no timeout
/// of their own; any such control belongs to the caller or the host.
pub trait EventLogHost {
    /// Returns whether `source` is registered in `log`.
    fn source_exists(&self, source: &str, log: &str) -> Result<bool, HostError>;

    /// Creates `source` in `log`.
    ///
    /// Fails with [`HostError::PermissionDenied`] when the caller lacks
    /// the rights to create sources.
    fn create_source(&self, log: &str, source: &str) -> Result<(), HostError>;

    /// Runs a filtered query, remotely when `filter.computer_name` is set.
    fn query(&self, filter: &EventFilter) -> Result<EventCursor<'_>, HostError>;

    /// Appends one record.
    ///
    /// Fails with [`HostError::SourceNotRegistered`] when the record's
    /// source has not been created in its log, or [`HostError::Rejected`]
    /// when the record violates host constraints.
    fn write(&self, record: &EventRecord) -> Result<(), HostError>;
}
