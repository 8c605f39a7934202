//! Error taxonomy shared by the storage layer, services and bridge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A get or update targeted an id that does not exist.
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    /// Storage failure, surfaced verbatim.
    #[error("storage: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Ensuring a table's schema failed. Fatal at startup.
    #[error("schema for table '{table}': {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Bad method name or arguments at the bridge.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Stable machine-readable kind, used in bridge error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "not_found",
            Error::Storage(_) => "storage",
            Error::Schema { .. } => "schema",
            Error::Serialization(_) => "serialization",
            Error::Io(_) => "io",
            Error::InvalidRequest(_) => "invalid_request",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
