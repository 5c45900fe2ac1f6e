//! Shared vocabulary types for the Wharton event-log facade.
//!
//! This crate provides the types used across the workspace: the fixed
//! severity level table, the entry-type variants accepted for writes, the
//! event source identity, and the read-side record shape returned by
//! queries. All string boundaries live here too: unknown severity or
//! entry-type names are rejected when parsed, never mapped to a silent
//! default.
//!
//! No crate in the workspace depends on anything *except* `wharton-types`
//! for cross-cutting type definitions. This keeps the dependency graph
//! clean and prevents circular dependencies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric severity levels, in the fixed platform order.
///
/// The table is process-wide and immutable: every severity name usable in
/// a query filter has exactly one ordinal here. Ordering follows the
/// ordinals, so `Level::Critical < Level::Verbose`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Level {
    /// Always logged, regardless of filtering.
    LogAlways = 0,
    /// Unrecoverable failure.
    Critical = 1,
    /// Failure of an operation.
    Error = 2,
    /// Degraded but continuing.
    Warning = 3,
    /// Normal operational record.
    Information = 4,
    /// High-volume diagnostic detail.
    Verbose = 5,
}

impl Level {
    /// Returns the numeric ordinal for this level.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Attempts to convert a numeric ordinal to a `Level`.
    ///
    /// Returns `None` if the ordinal has no entry in the table.
    pub fn from_u8(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::LogAlways),
            1 => Some(Self::Critical),
            2 => Some(Self::Error),
            3 => Some(Self::Warning),
            4 => Some(Self::Information),
            5 => Some(Self::Verbose),
            _ => None,
        }
    }

    /// Returns the canonical name for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LogAlways => "LogAlways",
            Self::Critical => "Critical",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Information => "Information",
            Self::Verbose => "Verbose",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LogAlways" => Ok(Self::LogAlways),
            "Critical" => Ok(Self::Critical),
            "Error" => Ok(Self::Error),
            "Warning" => Ok(Self::Warning),
            "Information" => Ok(Self::Information),
            "Verbose" => Ok(Self::Verbose),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown severity level name.
#[derive(Debug, Clone, Error)]
#[error("unknown severity level: {0}")]
pub struct ParseLevelError(pub String);

/// Entry types accepted for written event records.
///
/// These are the severities a record can be written with. `Error`,
/// `Warning` and `Information` each map to an ordinal in the [`Level`]
/// table via [`EntryType::level`]; the audit variants have no table entry
/// and cannot be used in query filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Failure of an operation.
    Error,
    /// Degraded but continuing.
    Warning,
    /// Normal operational record.
    Information,
    /// An audited security operation that succeeded.
    SuccessAudit,
    /// An audited security operation that failed.
    FailureAudit,
}

impl EntryType {
    /// All entry types, in declaration order.
    pub const ALL: [EntryType; 5] = [
        Self::Error,
        Self::Warning,
        Self::Information,
        Self::SuccessAudit,
        Self::FailureAudit,
    ];

    /// Returns the canonical name for this entry type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Information => "Information",
            Self::SuccessAudit => "SuccessAudit",
            Self::FailureAudit => "FailureAudit",
        }
    }

    /// Returns this entry type's position in the fixed [`Level`] table.
    ///
    /// The audit variants have no table entry and yield `None`; callers
    /// that need a numeric level must reject them rather than fall back
    /// to a default.
    pub fn level(self) -> Option<Level> {
        match self {
            Self::Error => Some(Level::Error),
            Self::Warning => Some(Level::Warning),
            Self::Information => Some(Level::Information),
            Self::SuccessAudit | Self::FailureAudit => None,
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryType {
    type Err = ParseEntryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Error" => Ok(Self::Error),
            "Warning" => Ok(Self::Warning),
            "Information" => Ok(Self::Information),
            "SuccessAudit" => Ok(Self::SuccessAudit),
            "FailureAudit" => Ok(Self::FailureAudit),
            _ => Err(ParseEntryTypeError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown entry type name.
#[derive(Debug, Clone, Error)]
#[error("unknown entry type: {0}")]
pub struct ParseEntryTypeError(pub String);

/// A named emitter registered under a log.
///
/// Created once per host by source registration; never mutated and never
/// deleted by the facade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventSource {
    /// The source / provider name.
    pub name: String,
    /// The log the source lives in.
    pub log: String,
}

impl EventSource {
    /// Creates a source identity from name and log.
    pub fn new(name: impl Into<String>, log: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log: log.into(),
        }
    }
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' in log '{}'", self.name, self.log)
    }
}

mod record;
pub use record::LoggedEvent;
