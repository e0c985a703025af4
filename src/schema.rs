//! The positional column contract between cell resolution and record
//! normalization.
//!
//! The worksheet is header-row-first and column order is fixed by the
//! producer, not discovered from the header. Every index lives here so a
//! schema change is a one-place edit.

/// Column offsets of the trade worksheet, in document order.
///
/// The stored `Status` column is decoded (it keeps positions aligned) but is
/// never read: status is re-derived from the pnl sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum TradeColumn {
    Id = 0,
    Date = 1,
    Time = 2,
    Strategy = 3,
    Side = 4,
    Entry = 5,
    Exit = 6,
    Status = 7,
    Pnl = 8,
}

/// A row must decode at least this many cells to be accepted.
pub const MIN_COLUMNS: usize = 9;

impl TradeColumn {
    #[inline]
    pub const fn idx(self) -> usize {
        self as usize
    }

    /// Looks the column up in a decoded row, empty string for missing cells.
    #[inline]
    pub fn cell<'a>(self, cells: &'a [String]) -> &'a str {
        cells.get(self.idx()).map(String::as_str).unwrap_or("")
    }
}
