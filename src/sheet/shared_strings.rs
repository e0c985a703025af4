use std::sync::LazyLock;

use regex::Regex;

static SI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<si>(.*?)</si>").expect("valid shared-string pattern"));

static T_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<t[^>]*>([^<]*)</t>").expect("valid text pattern"));

/// The container's de-duplicated, index-addressed table of text values.
///
/// Cells with a shared-string type reference the Nth `<si>` entry (0-based)
/// by the integer content of their `<v>` element. Entries with multiple
/// `<t>` runs (rich text) are concatenated.
#[derive(Debug, Clone, Default)]
pub struct SharedStringTable {
    entries: Vec<String>,
}

impl SharedStringTable {
    /// Collects every `<si>` entry of the document text in order.
    ///
    /// Worksheet parts carry no `<si>` elements, so scanning the whole
    /// document instead of the sharedStrings part alone is safe.
    pub fn from_document(text: &str) -> Self {
        let entries = SI_RE
            .captures_iter(text)
            .map(|caps| {
                let inner = caps.get(1).map_or("", |m| m.as_str());
                T_RE.captures_iter(inner)
                    .map(|t| t.get(1).map_or("", |m| m.as_str()))
                    .collect::<String>()
            })
            .collect();
        Self { entries }
    }

    /// The entry at `idx`, or the empty string when out of range. An
    /// out-of-range reference degrades the cell, not the row.
    pub fn resolve(&self, idx: usize) -> &str {
        self.entries.get(idx).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_entries_in_document_order() {
        let doc = "<sst><si><t>Momentum</t></si><si><t>UP</t></si><si><t>Reversal</t></si></sst>";
        let table = SharedStringTable::from_document(doc);
        assert_eq!(table.len(), 3);
        assert_eq!(table.resolve(0), "Momentum");
        assert_eq!(table.resolve(2), "Reversal");
    }

    #[test]
    fn out_of_range_resolves_to_empty() {
        let table = SharedStringTable::from_document("<si><t>only</t></si>");
        assert_eq!(table.resolve(1), "");
        assert_eq!(SharedStringTable::default().resolve(0), "");
    }

    #[test]
    fn rich_text_runs_are_concatenated() {
        let doc = r#"<si><r><t>Mean</t></r><r><t xml:space="preserve"> Rev</t></r></si>"#;
        let table = SharedStringTable::from_document(doc);
        assert_eq!(table.resolve(0), "Mean Rev");
    }
}
