//! Error types for the event-log facade.
//!
//! Three classes of failure, kept deliberately distinct: registration
//! failures (terminating, typically privilege), request validation
//! failures (raised before any host call), and host subsystem failures
//! (passed through unmodified, never reinterpreted, never retried). An
//! already-registered source is *not* an error; see
//! [`RegistrationOutcome`](crate::RegistrationOutcome).

use thiserror::Error;
use wharton_types::{EntryType, EventSource};

use crate::host::HostError;

/// Errors that can occur during facade operations.
#[derive(Debug, Error)]
pub enum EventLogError {
    /// Creating the event source failed, typically for lack of privilege.
    ///
    /// Terminating for the registration attempt. Carries the source and
    /// log names for diagnostics.
    #[error("failed to register event source {source}: {reason}")]
    Registration {
        /// The source that could not be created.
        source: EventSource,
        /// The host failure that stopped creation.
        #[source]
        reason: HostError,
    },

    /// A request was rejected before any host subsystem call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The host subsystem reported a failure. Passed through unmodified.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Request validation failures, each naming the violated constraint.
///
/// Raised locally, before any side effect on the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The event id exceeds what the host accepts.
    #[error("event id {0} exceeds the maximum of {max}", max = crate::writer::MAX_EVENT_ID)]
    EventIdOutOfRange(u32),

    /// The message body was empty.
    #[error("event message must not be empty")]
    EmptyMessage,

    /// The severity has no entry in the level table and cannot be queried.
    #[error("severity '{0}' is not queryable; use Error, Warning or Information")]
    SeverityNotQueryable(EntryType),
}
