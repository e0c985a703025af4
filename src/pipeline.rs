//! One query operation behind which the whole ingestion ladder hangs:
//! cache check, bounded source read, part location, row extraction, cell
//! resolution, normalization, cache update. Any container-level failure
//! degrades to the stale snapshot or the synthetic floor.

use std::io::ErrorKind;

use bytes::Bytes;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    archive,
    cache::ResultCache,
    config::IngestConfig,
    error::{DataError, LedgerResult, SourceError},
    normalize,
    sheet::{RowExtractor, SharedStringTable, resolve_cells},
    synthetic::FallbackSynthesizer,
    trade::{LedgerResponse, LedgerSnapshot, Provenance, Trade},
};

/// The ledger ingestion pipeline.
///
/// The consumer always receives a well-formed [`LedgerResponse`]: fresh
/// records when the source parses, the cached snapshot inside its freshness
/// window, the stale snapshot when the source degrades, and synthetic
/// records only when no real data was ever obtained.
pub struct IngestionPipeline {
    config: IngestConfig,
    cache: ResultCache,
    synthesizer: FallbackSynthesizer,
    /// Single-flight guard: concurrent callers during a stale window
    /// coalesce onto one parse instead of each re-reading the source.
    parse_guard: Mutex<()>,
}

impl IngestionPipeline {
    pub fn new(config: IngestConfig) -> Self {
        let cache = ResultCache::new(config.cache_ttl);
        Self {
            config,
            cache,
            synthesizer: FallbackSynthesizer::new(),
            parse_guard: Mutex::new(()),
        }
    }

    /// Swaps the cache, e.g. for one built on a manual clock.
    pub fn with_cache(mut self, cache: ResultCache) -> Self {
        self.cache = cache;
        self
    }

    /// Swaps the synthesizer, e.g. for a seeded one.
    pub fn with_synthesizer(mut self, synthesizer: FallbackSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// The single query operation: `(records, provenance)` in all branches.
    pub async fn get_trades(&self) -> LedgerResponse {
        if let Some(response) = self.serve_fresh_cache() {
            return response;
        }

        let _flight = self.parse_guard.lock().await;

        // Double-checked: a coalesced caller finds the cache refreshed by
        // the flight it waited on.
        if let Some(response) = self.serve_fresh_cache() {
            return response;
        }

        match self.parse_source().await {
            Ok(records) if records.is_empty() => {
                info!(source = %self.config.source_path.display(), "ledger parsed but empty");
                LedgerResponse::new(Vec::new(), Provenance::Excel)
                    .with_error(DataError::EmptyWorksheet.to_string())
            }
            Ok(records) => {
                let snapshot = LedgerSnapshot::new(records.clone(), self.cache.now());
                self.cache.put(snapshot);
                info!(total = records.len(), "ledger parsed");
                LedgerResponse::new(records, Provenance::Excel)
            }
            Err(err) => {
                warn!(error = %err, "ledger parse failed, degrading");
                self.degrade(err.to_string())
            }
        }
    }

    fn serve_fresh_cache(&self) -> Option<LedgerResponse> {
        if !self.cache.is_fresh() {
            return None;
        }
        let snapshot = self.cache.get()?;
        debug!(total = snapshot.total, "serving cached snapshot");
        Some(LedgerResponse::new(
            snapshot.records.clone(),
            Provenance::Cache,
        ))
    }

    /// Stale snapshot if one was ever captured, synthetic floor otherwise.
    fn degrade(&self, cause: String) -> LedgerResponse {
        if let Some(snapshot) = self.cache.get() {
            warn!(total = snapshot.total, "serving stale snapshot");
            return LedgerResponse::new(snapshot.records.clone(), Provenance::CacheStale)
                .with_error(format!("Using cached data: {cause}"));
        }

        let records = self.synthesizer.synthesize(self.config.synthetic_count);
        warn!(total = records.len(), "serving synthetic records");
        LedgerResponse::new(records, Provenance::Mock)
            .with_error(format!("Using synthetic data: {cause}"))
    }

    async fn parse_source(&self) -> LedgerResult<Vec<Trade>> {
        let doc = self.read_source().await?;

        let target = archive::worksheet_path(self.config.sheet_index);
        let upper = archive::worksheet_path(self.config.sheet_index + 1);
        let range = archive::locate_part(&doc, &target, Some(&upper))?;

        let shared = SharedStringTable::from_document(&String::from_utf8_lossy(&doc));
        let fragment = String::from_utf8_lossy(&doc[range]);
        let extractor = RowExtractor::new(&fragment);

        Ok(normalize::normalize_rows(
            extractor.rows().map(|row| resolve_cells(row, &shared)),
            &self.config.default_market,
        ))
    }

    /// Reads the whole document, failing fast on missing or oversized files
    /// before any bytes move.
    async fn read_source(&self) -> LedgerResult<Bytes> {
        let path = &self.config.source_path;
        let display = path.display().to_string();

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| classify_io(e, &display))?;
        if metadata.len() > self.config.max_source_bytes {
            return Err(SourceError::TooLarge {
                path: display,
                size: metadata.len(),
                limit: self.config.max_source_bytes,
            }
            .into());
        }

        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| classify_io(e, &display))?;
        Ok(Bytes::from(raw))
    }
}

fn classify_io(err: std::io::Error, path: &str) -> SourceError {
    if err.kind() == ErrorKind::NotFound {
        SourceError::NotFound(path.to_string())
    } else {
        SourceError::ReadFailed(format!("{path}: {err}"))
    }
}
