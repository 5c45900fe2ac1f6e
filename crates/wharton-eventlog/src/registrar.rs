//! Event source registration.
//!
//! Sources are created once per host and never deleted, so registration
//! is expected to run on every startup. An already-registered source is a
//! warning-level notice, not an error. Check-then-create runs exactly
//! once with no retry and no locking; concurrent callers may race on the
//! existence check, and the host is trusted to fail a duplicate create
//! safely.

use wharton_types::EventSource;

use crate::config::EventLogConfig;
use crate::error::EventLogError;
use crate::host::EventLogHost;

/// What [`register_source`] found on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The source was absent and has been created.
    Created,
    /// The source was already registered; nothing was done.
    AlreadyRegistered,
}

/// Registers the configured provider in the configured log.
///
/// See [`register_source_in`].
///
/// # Errors
///
/// Same as [`register_source_in`].
pub fn register_source<H: EventLogHost>(
    host: &H,
    config: &EventLogConfig,
) -> Result<RegistrationOutcome, EventLogError> {
    register_source_in(host, &config.provider, &config.log)
}

/// Registers `source` in `log`, creating it when absent.
///
/// Idempotent: when the source already exists nothing is done and a
/// warning-level diagnostic is emitted, leaving the caller's larger
/// workflow free to continue.
///
/// # Errors
///
/// Returns [`EventLogError::Registration`], carrying both names, when the
/// create primitive fails, typically for lack of privilege. A failure of
/// the existence check itself passes through as
/// [`EventLogError::Host`].
pub fn register_source_in<H: EventLogHost>(
    host: &H,
    source: &str,
    log: &str,
) -> Result<RegistrationOutcome, EventLogError> {
    if host.source_exists(source, log)? {
        tracing::warn!(source, log, "event source already registered, nothing to do");
        return Ok(RegistrationOutcome::AlreadyRegistered);
    }

    host.create_source(log, source)
        .map_err(|reason| EventLogError::Registration {
            source: EventSource::new(source, log),
            reason,
        })?;

    tracing::info!(source, log, "event source registered");
    Ok(RegistrationOutcome::Created)
}
