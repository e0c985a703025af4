use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};
use strum_macros::EnumString;

// ================================================================================================
// Enumerations
// ================================================================================================

/// Direction of a closed trade.
///
/// The producing ledger uses directional wording (`UP`/`DOWN`) instead of
/// `BUY`/`SELL`; both vocabularies parse. Unrecognized tokens default to
/// [`Side::Buy`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Maps a raw direction token to a side, case-insensitively.
    ///
    /// `UP` is a buy, `DOWN` is a sell; anything else that is not literally
    /// `SELL`/`DOWN` falls back to `Buy`.
    pub fn from_token(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "SELL" | "DOWN" => Side::Sell,
            _ => Side::Buy,
        }
    }
}

/// Outcome of a closed trade, derived from the sign of its realized pnl.
///
/// Never stored independently: `Win` iff `pnl >= 0`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Win,
    Loss,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn from_pnl(pnl: f64) -> Self {
        if pnl >= 0.0 {
            TradeStatus::Win
        } else {
            TradeStatus::Loss
        }
    }
}

/// Where the records of a response came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Fresh parse of the source document.
    Excel,
    /// Cached snapshot within its freshness window.
    Cache,
    /// Last-known-good snapshot served past its freshness window.
    CacheStale,
    /// Synthetic placeholder records; never mixed with real ones.
    Mock,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Provenance::CacheStale | Provenance::Mock)
    }
}

// ================================================================================================
// Trade Record
// ================================================================================================

/// A single closed trade event, normalized from one worksheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Positive, unique within one ledger snapshot.
    pub id: u32,
    /// Display timestamp; the date cell when no dedicated time cell is set.
    pub time: String,
    pub strategy: String,
    pub market: String,
    pub side: Side,
    pub entry: f64,
    pub exit: f64,
    pub pnl: f64,
    pub status: TradeStatus,
}

impl Trade {
    /// Builds a trade with `status` derived from the pnl sign. This is the
    /// only way status is ever assigned.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        time: String,
        strategy: String,
        market: String,
        side: Side,
        entry: f64,
        exit: f64,
        pnl: f64,
    ) -> Self {
        Self {
            id,
            time,
            strategy,
            market,
            side,
            entry,
            exit,
            pnl,
            status: TradeStatus::from_pnl(pnl),
        }
    }
}

// ================================================================================================
// Snapshot & Response
// ================================================================================================

/// One immutable capture of ledger state plus its capture time.
///
/// Ownership: exclusively owned and atomically replaced by the result cache
/// on each successful parse; readers get an `Arc` view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Ordered by `id` descending (most recent trade first).
    pub records: Vec<Trade>,
    pub captured_at: DateTime<Utc>,
    pub total: usize,
}

impl LedgerSnapshot {
    pub fn new(records: Vec<Trade>, captured_at: DateTime<Utc>) -> Self {
        let total = records.len();
        Self {
            records,
            captured_at,
            total,
        }
    }
}

/// The single response object handed to the display layer.
///
/// Always well-formed: some `trades` array (possibly synthetic), a count,
/// and a provenance tag. Degradation is communicated through `source` and
/// `error`, never by omission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerResponse {
    pub trades: Vec<Trade>,
    pub total: usize,
    pub source: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LedgerResponse {
    pub fn new(trades: Vec<Trade>, source: Provenance) -> Self {
        let total = trades.len();
        Self {
            trades,
            total,
            source,
            error: None,
        }
    }

    pub fn with_error(mut self, msg: impl Into<String>) -> Self {
        self.error = Some(msg.into());
        self
    }

    /// HTTP-style status for a request/response boundary: 404 for an empty
    /// real result, 200 otherwise. The mock floor keeps 500 unreachable.
    pub fn status_code(&self) -> u16 {
        if self.trades.is_empty() && self.source == Provenance::Excel {
            404
        } else {
            200
        }
    }
}
