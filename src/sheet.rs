//! Worksheet scanning: row extraction and cell decoding over the located
//! XML fragment.
//!
//! Like the part locator this trades generality for simplicity: cells are
//! recognized by regex over the single producer's layout, not by a conformant
//! XML parse. The fragility is isolated here so a real reader could be
//! swapped in without touching normalization or caching.

pub mod cells;
pub mod rows;
pub mod shared_strings;

pub use cells::resolve_cells;
pub use rows::RowExtractor;
pub use shared_strings::SharedStringTable;
