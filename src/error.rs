use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Errors raised while reading the ledger document from local storage.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source file not found: {0}")]
    NotFound(String),

    #[error("Failed to read source file: {0}")]
    ReadFailed(String),

    #[error("Source file exceeds read bound ({size} > {limit} bytes): {path}")]
    TooLarge {
        path: String,
        size: u64,
        limit: u64,
    },
}

/// Errors raised while locating the worksheet part inside the container.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Invalid container format: missing ZIP signature")]
    InvalidSignature,

    #[error("Part not found in container: '{0}'")]
    PartNotFound(String),
}

/// Errors related to decoded ledger data and export IO.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Empty worksheet: no trade rows extracted")]
    EmptyWorksheet,

    #[error("Serialization failed")]
    Json(#[from] serde_json::Error),

    #[error("Export write failed: {0}")]
    ExportWrite(String),
}

impl LedgerError {
    /// True for container-level failures the pipeline recovers from by
    /// serving the stale cache or synthetic records. Per-row and coercion
    /// problems never reach this type.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Source(_) | Self::Container(_))
    }
}
