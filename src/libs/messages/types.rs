#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DatabaseOpened(String),           // path
    SchemaEnsured(String),            // table
    SchemaColumnAdded(String, String), // table, column
    SchemaEnsureFailed(String, String), // table, error

    // === RECORD MESSAGES ===
    RecordCreated(String, i64),        // kind, id
    RecordUpdated(String, i64),        // kind, id
    RecordUpdateEmptyPatch(String, i64), // kind, id
    RecordDeleted(String, i64),        // kind, id
    RecordSoftDeleted(String, i64),    // kind, id
    RecordPurged(String, i64),         // kind, id
    RecordNotFound(String, i64),       // kind, id
    RecordsListed(String, usize),      // kind, count

    // === QUERY MESSAGES ===
    QueryCompiled(usize),              // step count
    UnknownSortField(String, String),  // table, field

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String),              // path
    ConfigFileNotFound(String),        // path
    ConfigSaved(String),               // path

    // === BRIDGE MESSAGES ===
    BridgeStarted,
    BridgeStopped(usize),              // handled requests
    BridgeCall(String),                // method
    BridgeUnknownMethod(String),       // method
    BridgeMalformedRequest(String),    // error
    BridgeCallFailed(String, String),  // method, error
}
