//! Read-side event record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Level;

/// A single event record returned by a host subsystem query.
///
/// The host owns the shape and content of these records; the facade
/// passes them through without altering or validating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Numeric severity level of the record.
    pub level: Level,
    /// Numeric identifier of the event type.
    pub event_id: u32,
    /// Provider / source the record was written under.
    pub provider_name: String,
    /// Log the record lives in.
    pub log_name: String,
    /// Machine the record was generated on.
    pub computer_name: String,
    /// Rendered message body.
    pub message: String,
    /// When the record was written, in UTC.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_event_round_trips_through_json() {
        let event = LoggedEvent {
            level: Level::Warning,
            event_id: 4100,
            provider_name: "whartonCoreServices".to_string(),
            log_name: "Application".to_string(),
            computer_name: "HOST01".to_string(),
            message: "disk nearly full".to_string(),
            timestamp: "2024-05-01T12:00:00Z".parse().expect("valid timestamp"),
        };

        let json = serde_json::to_string(&event).expect("should serialize");
        let back: LoggedEvent = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, event);
    }
}
