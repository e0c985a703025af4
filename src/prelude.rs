// 1. Pipeline surface
pub use crate::config::IngestConfig;
pub use crate::pipeline::IngestionPipeline;

// 2. Records & response
pub use crate::trade::{LedgerResponse, LedgerSnapshot, Provenance, Side, Trade, TradeStatus};

// 3. Collaborators
pub use crate::cache::{Clock, ManualClock, ResultCache, SystemClock};
pub use crate::synthetic::FallbackSynthesizer;

// 4. Errors
pub use crate::error::{ContainerError, DataError, LedgerError, LedgerResult, SourceError};
