use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

use super::shared_strings::SharedStringTable;

/// Decoded cell values of one row; rows of the trade schema carry ~10 cells.
pub type CellBuffer = SmallVec<[String; 12]>;

static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<c\b([^>]*?)(?:/>|>(.*?)</c>)").expect("valid cell pattern"));

static T_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<t[^>]*>([^<]*)</t>").expect("valid text pattern"));

static V_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<v>([^<]*)</v>").expect("valid value pattern"));

static SHARED_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)t="s""#).expect("valid type-attr pattern"));

/// Decodes the cells of one raw row fragment into ordered text values.
///
/// Three encodings are resolved in a single pass, in document order:
/// inline/direct `<t>` text (verbatim), shared-string `<v>` references
/// (`t="s"`, resolved through `shared`), and bare numeric `<v>` content
/// (passed through as literal text for downstream parsing). Empty and
/// self-closing cells contribute an empty string so positions stay aligned
/// with the fixed column schema.
pub fn resolve_cells(row_xml: &str, shared: &SharedStringTable) -> CellBuffer {
    CELL_RE
        .captures_iter(row_xml)
        .map(|caps| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            let inner = caps.get(2).map_or("", |m| m.as_str());
            decode_cell(attrs, inner, shared)
        })
        .collect()
}

fn decode_cell(attrs: &str, inner: &str, shared: &SharedStringTable) -> String {
    if SHARED_TYPE_RE.is_match(attrs) {
        return inner_value(inner)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .map(|idx| shared.resolve(idx).to_string())
            .unwrap_or_default();
    }

    if let Some(caps) = T_RE.captures(inner) {
        return caps.get(1).map_or("", |m| m.as_str()).to_string();
    }

    inner_value(inner).unwrap_or_default().to_string()
}

fn inner_value(inner: &str) -> Option<&str> {
    V_RE.captures(inner)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}
