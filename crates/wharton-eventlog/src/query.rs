//! Query construction against the host subsystem.
//!
//! Callers describe what they want through [`QuerySpec`]; the facade
//! resolves it against the configured defaults into an [`EventFilter`]
//! and hands that to the host's query primitive. Only fields the caller
//! actually supplied appear in the filter; the provider and log names are
//! always present.

use serde::{Deserialize, Serialize};
use wharton_types::{EntryType, Level};

use crate::config::EventLogConfig;
use crate::error::{EventLogError, ValidationError};
use crate::host::{EventCursor, EventLogHost};

/// Optional query arguments, resolved against [`EventLogConfig`] defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Filter by severity. Only `Error`, `Warning` and `Information` are
    /// accepted here; the audit entry types have no numeric level and are
    /// rejected before any host call.
    pub severity: Option<EntryType>,
    /// Filter by numeric event id.
    pub event_id: Option<u32>,
    /// Override the configured provider name.
    pub provider_name: Option<String>,
    /// Override the configured log name.
    pub log_name: Option<String>,
    /// Target this remote host instead of the local one.
    pub computer_name: Option<String>,
}

/// Filter criteria handed to the host subsystem's query primitive.
///
/// `provider_name` and `log_name` are always present; a `level` never
/// appears without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Provider / source to match.
    pub provider_name: String,
    /// Log to read from.
    pub log_name: String,
    /// Numeric severity level to match, when the caller filtered by one.
    pub level: Option<Level>,
    /// Event id to match, when the caller filtered by one.
    pub event_id: Option<u32>,
    /// Remote host to query; local when absent.
    pub computer_name: Option<String>,
}

/// Resolves a [`QuerySpec`] into the filter handed to the host.
///
/// A supplied severity is mapped to its ordinal in the fixed level table
/// (Error→2, Warning→3, Information→4). The remaining table entries
/// (LogAlways, Critical, Verbose) are not writable entry types and so are
/// not selectable through this entry point.
///
/// # Errors
///
/// Returns [`ValidationError::SeverityNotQueryable`] for `SuccessAudit`
/// and `FailureAudit`, which have no entry in the level table.
pub fn build_filter(
    config: &EventLogConfig,
    spec: &QuerySpec,
) -> Result<EventFilter, EventLogError> {
    let level = match spec.severity {
        Some(entry) => Some(
            entry
                .level()
                .ok_or(ValidationError::SeverityNotQueryable(entry))?,
        ),
        None => None,
    };

    Ok(EventFilter {
        provider_name: spec
            .provider_name
            .clone()
            .unwrap_or_else(|| config.provider.clone()),
        log_name: spec.log_name.clone().unwrap_or_else(|| config.log.clone()),
        level,
        event_id: spec.event_id,
        computer_name: spec.computer_name.clone(),
    })
}

/// Queries the event log with optional filters.
///
/// Returns a lazy, forward-only cursor over matching records in host
/// order; no additional sort is imposed. The cursor is not restartable;
/// call `query_events` again to re-run. With `spec.computer_name` set the
/// query targets that remote machine and may block on network I/O with no
/// timeout of its own.
///
/// # Errors
///
/// Returns [`ValidationError::SeverityNotQueryable`] before any host call
/// for non-queryable severities. Host failures (log not found, host
/// unreachable) pass through unmodified, both here and during iteration.
pub fn query_events<'h, H: EventLogHost>(
    host: &'h H,
    config: &EventLogConfig,
    spec: &QuerySpec,
) -> Result<EventCursor<'h>, EventLogError> {
    let filter = build_filter(config, spec)?;

    tracing::debug!(
        provider = %filter.provider_name,
        log = %filter.log_name,
        level = ?filter.level,
        event_id = ?filter.event_id,
        computer = ?filter.computer_name,
        "querying event log"
    );

    Ok(host.query(&filter)?)
}
