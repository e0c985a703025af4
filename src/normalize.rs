//! Raw cell strings → typed [`Trade`] records.
//!
//! Per-row problems are silent by contract: a malformed id or short row
//! skips that row only, a malformed number coerces to `0.0`. A run that
//! drops rows is still a successful run with fewer records.

use itertools::Itertools;

use crate::{
    schema::{MIN_COLUMNS, TradeColumn},
    trade::{Side, Trade},
};

/// Normalizes one decoded row, or signals a skip.
///
/// Skips: fewer than [`MIN_COLUMNS`] cells, a non-positive or unparsable id,
/// or a re-emitted header row (the producer occasionally echoes the header
/// literal into the data range).
pub fn normalize_record(cells: &[String], default_market: &str) -> Option<Trade> {
    if cells.len() < MIN_COLUMNS {
        return None;
    }

    let strategy_cell = TradeColumn::Strategy.cell(cells);
    if strategy_cell == "Strategy" {
        return None;
    }

    let id = parse_id(TradeColumn::Id.cell(cells))?;

    let time = match TradeColumn::Time.cell(cells) {
        "" => TradeColumn::Date.cell(cells),
        t => t,
    };
    let strategy = match strategy_cell {
        "" => "Unknown",
        s => s,
    };
    let pnl = parse_price(TradeColumn::Pnl.cell(cells));

    Some(Trade::new(
        id,
        time.to_string(),
        strategy.to_string(),
        default_market.to_string(),
        Side::from_token(TradeColumn::Side.cell(cells)),
        parse_price(TradeColumn::Entry.cell(cells)),
        parse_price(TradeColumn::Exit.cell(cells)),
        pnl,
    ))
}

/// Normalizes every row, de-duplicates by id (first occurrence wins), and
/// sorts id-descending (most recent trade first).
pub fn normalize_rows<I>(rows: I, default_market: &str) -> Vec<Trade>
where
    I: IntoIterator<Item = crate::sheet::cells::CellBuffer>,
{
    let mut trades: Vec<Trade> = rows
        .into_iter()
        .filter_map(|cells| normalize_record(&cells, default_market))
        .unique_by(|trade| trade.id)
        .collect();
    trades.sort_unstable_by(|a, b| b.id.cmp(&a.id));
    trades
}

fn parse_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

/// Float parse with non-numeric characters stripped first (`$`, thousands
/// separators, stray units). Failure coerces to `0.0`, never an error.
fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}
