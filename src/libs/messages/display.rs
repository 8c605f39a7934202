//! Display implementation for application messages.
//!
//! All user- and log-facing text lives here, so wording stays consistent
//! between the log output of the library and the binary's stderr notes.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),
            Message::SchemaEnsured(table) => format!("Schema for table '{}' is up to date", table),
            Message::SchemaColumnAdded(table, column) => format!("Added missing column '{}' to table '{}'", column, table),
            Message::SchemaEnsureFailed(table, error) => format!("Failed to ensure schema for table '{}': {}", table, error),

            // === RECORD MESSAGES ===
            Message::RecordCreated(kind, id) => format!("{} {} created", kind, id),
            Message::RecordUpdated(kind, id) => format!("{} {} updated", kind, id),
            Message::RecordUpdateEmptyPatch(kind, id) => format!("{} {}: empty patch, nothing to update", kind, id),
            Message::RecordDeleted(kind, id) => format!("{} {} deleted", kind, id),
            Message::RecordSoftDeleted(kind, id) => format!("{} {} moved to trash", kind, id),
            Message::RecordPurged(kind, id) => format!("{} {} permanently removed", kind, id),
            Message::RecordNotFound(kind, id) => format!("{} with ID {} not found", kind, id),
            Message::RecordsListed(kind, count) => format!("Listed {} {} record(s)", count, kind),

            // === QUERY MESSAGES ===
            Message::QueryCompiled(steps) => format!("Query compiled to {} step(s)", steps),
            Message::UnknownSortField(table, field) => format!("Ignoring unknown sort field '{}' for table '{}'", field, table),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigFileNotFound(path) => format!("No configuration at {}, using defaults", path),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),

            // === BRIDGE MESSAGES ===
            Message::BridgeStarted => "Bridge is serving requests on stdin".to_string(),
            Message::BridgeStopped(count) => format!("Bridge stopped after {} request(s)", count),
            Message::BridgeCall(method) => format!("Bridge call: {}", method),
            Message::BridgeUnknownMethod(method) => format!("Unknown bridge method: {}", method),
            Message::BridgeMalformedRequest(error) => format!("Malformed bridge request: {}", error),
            Message::BridgeCallFailed(method, error) => format!("Bridge call {} failed: {}", method, error),
        };
        write!(f, "{}", text)
    }
}
