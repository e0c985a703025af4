use std::sync::LazyLock;

use regex::Regex;

static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<row\b[^>]*>(.*?)</row>").expect("valid row pattern"));

/// Scans a worksheet fragment for `<row>` elements in document order.
///
/// The first recognized row is the header and is always discarded, whatever
/// its content. Zero extracted rows is a valid outcome, not an error. The
/// iterator returned by [`rows`](RowExtractor::rows) is lazy, finite, and can
/// be restarted by calling the method again.
#[derive(Debug, Clone, Copy)]
pub struct RowExtractor<'a> {
    fragment: &'a str,
}

impl<'a> RowExtractor<'a> {
    pub fn new(fragment: &'a str) -> Self {
        Self { fragment }
    }

    /// Inner XML of each data row, header excluded.
    pub fn rows(&self) -> impl Iterator<Item = &'a str> {
        ROW_RE
            .captures_iter(self.fragment)
            .skip(1)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
    }
}
