use std::{env, path::PathBuf, time::Duration};

use crate::cache::DEFAULT_TTL;

/// Environment override for the ledger document location.
pub const SOURCE_ENV: &str = "LEDGERFEED_SOURCE";
/// Environment override for the cache freshness window (humantime, e.g. "45s").
pub const CACHE_TTL_ENV: &str = "LEDGERFEED_CACHE_TTL";

const DEFAULT_SOURCE: &str = "live_trading_results.xlsx";
const DEFAULT_SHEET_INDEX: u32 = 3;
const DEFAULT_MAX_SOURCE_BYTES: u64 = 16 * 1024 * 1024;
const DEFAULT_SYNTHETIC_COUNT: u32 = 20;
const DEFAULT_MARKET: &str = "BTC-5M";

/// Pipeline configuration.
///
/// `Default` matches the producer currently in use: trade rows on the third
/// worksheet of `live_trading_results.xlsx`, a 30 second freshness window,
/// and a 16 MiB read bound as the fail-fast guard against abnormally large
/// or truncated regenerations.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestConfig {
    pub source_path: PathBuf,
    /// 1-based index of the worksheet part carrying the trade rows.
    pub sheet_index: u32,
    pub cache_ttl: Duration,
    pub max_source_bytes: u64,
    /// Number of placeholder records synthesized on the no-data floor.
    pub synthetic_count: u32,
    /// Market identifier for rows without a market column.
    pub default_market: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE),
            sheet_index: DEFAULT_SHEET_INDEX,
            cache_ttl: DEFAULT_TTL,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
            synthetic_count: DEFAULT_SYNTHETIC_COUNT,
            default_market: DEFAULT_MARKET.to_string(),
        }
    }
}

impl IngestConfig {
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    pub fn with_sheet_index(mut self, index: u32) -> Self {
        self.sheet_index = index;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_max_source_bytes(mut self, bound: u64) -> Self {
        self.max_source_bytes = bound;
        self
    }

    pub fn with_synthetic_count(mut self, count: u32) -> Self {
        self.synthetic_count = count;
        self
    }

    pub fn with_default_market(mut self, market: impl Into<String>) -> Self {
        self.default_market = market.into();
        self
    }

    /// Defaults overlaid with the `LEDGERFEED_*` environment, for deployments
    /// that point the pipeline at a regenerated file elsewhere on disk.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var(SOURCE_ENV) {
            config.source_path = PathBuf::from(path);
        }
        if let Some(ttl) = env::var(CACHE_TTL_ENV)
            .ok()
            .and_then(|raw| humantime::parse_duration(&raw).ok())
        {
            config.cache_ttl = ttl;
        }
        config
    }
}
