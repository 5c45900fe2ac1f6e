//! Diagnostic forwarding of written messages.
//!
//! A written event's message can additionally be duplicated to one of two
//! parallel diagnostic channels. Which channel, if any, is a declared
//! per-severity policy rather than an implicit branch: `Error` duplicates
//! to the error channel tagged with the event id, `Information` to the
//! verbose channel, and the remaining severities deliberately forward
//! nowhere.

use wharton_types::EntryType;

/// Where a written message is additionally delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardAction {
    /// Duplicate to the error channel, tagged with the event id.
    ErrorChannel,
    /// Duplicate to the verbose channel.
    VerboseChannel,
    /// No duplication.
    None,
}

/// The forwarding policy for each entry type.
///
/// Warning and the audit types are declared no-ops. Whether they should
/// ever forward is an open product question; until that is answered the
/// policy matches observed behavior exactly.
pub fn forward_action(entry_type: EntryType) -> ForwardAction {
    match entry_type {
        EntryType::Error => ForwardAction::ErrorChannel,
        EntryType::Information => ForwardAction::VerboseChannel,
        EntryType::Warning | EntryType::SuccessAudit | EntryType::FailureAudit => {
            ForwardAction::None
        }
    }
}

/// Receives messages duplicated off the primary write path.
pub trait DiagnosticSink {
    /// Delivers `message` to the error channel, tagged with `event_id`.
    fn error(&self, event_id: u32, message: &str);

    /// Delivers `message` to the verbose channel.
    fn verbose(&self, message: &str);
}

/// Forwards to the process-wide `tracing` error and debug channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&self, event_id: u32, message: &str) {
        tracing::error!(event_id, "{message}");
    }

    fn verbose(&self, message: &str) {
        tracing::debug!("{message}");
    }
}
