//! Static-file export for consumers that read the ledger as JSON instead of
//! querying the pipeline.

use std::path::Path;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::Serialize;
use tracing::info;

use crate::{
    error::{DataError, LedgerResult},
    trade::Trade,
};

#[derive(Serialize)]
struct ExportDocument<'a> {
    trades: &'a [Trade],
    total: usize,
    updated: DateTime<Utc>,
}

/// Writes `{ trades, total, updated }` as pretty JSON, creating parent
/// directories as needed.
pub fn write_json_export(trades: &[Trade], updated: DateTime<Utc>, path: &Path) -> LedgerResult<()> {
    let document = ExportDocument {
        trades,
        total: trades.len(),
        updated,
    };
    let json = serde_json::to_string_pretty(&document).map_err(DataError::Json)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| DataError::ExportWrite(format!("{}: {e}", parent.display())))?;
    }
    std::fs::write(path, json)
        .map_err(|e| DataError::ExportWrite(format!("{}: {e}", path.display())))?;

    info!(total = trades.len(), path = %path.display(), "ledger exported");
    Ok(())
}

/// Per-strategy trade counts, most active strategy first. Ties break
/// alphabetically so the report is stable.
pub fn strategy_breakdown(trades: &[Trade]) -> Vec<(String, usize)> {
    trades
        .iter()
        .counts_by(|t| t.strategy.clone())
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::Side;

    fn trade(id: u32, strategy: &str) -> Trade {
        Trade::new(
            id,
            "16:45:23".into(),
            strategy.into(),
            "BTC-5M".into(),
            Side::Buy,
            0.5,
            0.52,
            0.02,
        )
    }

    #[test]
    fn breakdown_counts_and_orders() {
        let trades = vec![
            trade(4, "VWAP"),
            trade(3, "MOMENTUM"),
            trade(2, "VWAP"),
            trade(1, "ARBITRAGE"),
        ];
        let breakdown = strategy_breakdown(&trades);
        assert_eq!(
            breakdown,
            vec![
                ("VWAP".to_string(), 2),
                ("ARBITRAGE".to_string(), 1),
                ("MOMENTUM".to_string(), 1),
            ]
        );
    }

    #[test]
    fn export_writes_the_consumer_document() {
        let dir = std::env::temp_dir().join("ledgerfeed-export-test");
        let path = dir.join("trades.json");
        let updated = Utc::now();

        write_json_export(&[trade(1, "VWAP")], updated, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["trades"][0]["status"], "WIN");
        assert_eq!(value["trades"][0]["side"], "BUY");

        std::fs::remove_dir_all(&dir).ok();
    }
}
