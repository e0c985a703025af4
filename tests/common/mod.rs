use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

pub const SHEET3: &str = "xl/worksheets/sheet3.xml";
pub const SHEET4: &str = "xl/worksheets/sheet4.xml";
pub const SHARED_STRINGS: &str = "xl/sharedStrings.xml";

pub fn inline_cell(text: &str) -> String {
    format!(r#"<c t="inlineStr"><is><t>{text}</t></is></c>"#)
}

pub fn number_cell(value: &str) -> String {
    format!("<c><v>{value}</v></c>")
}

pub fn shared_cell(idx: usize) -> String {
    format!(r#"<c t="s"><v>{idx}</v></c>"#)
}

pub fn header_row() -> String {
    let cells: String = [
        "Trade #",
        "Date",
        "Time",
        "Strategy",
        "Side",
        "Entry Price",
        "Exit Price",
        "Status",
        "P&L $",
    ]
    .iter()
    .map(|h| inline_cell(h))
    .collect();
    format!("<row r=\"1\">{cells}</row>")
}

#[allow(clippy::too_many_arguments)]
pub fn trade_row(
    id: &str,
    date: &str,
    time: &str,
    strategy: &str,
    side: &str,
    entry: &str,
    exit: &str,
    status: &str,
    pnl: &str,
) -> String {
    let cells = [
        number_cell(id),
        inline_cell(date),
        inline_cell(time),
        inline_cell(strategy),
        inline_cell(side),
        number_cell(entry),
        number_cell(exit),
        inline_cell(status),
        number_cell(pnl),
    ]
    .concat();
    format!("<row>{cells}</row>")
}

pub fn sheet_xml(rows: &[String]) -> String {
    format!("<sheetData>{}</sheetData>", rows.concat())
}

pub fn shared_strings_xml(entries: &[&str]) -> String {
    let items: String = entries
        .iter()
        .map(|e| format!("<si><t>{e}</t></si>"))
        .collect();
    format!("<sst>{items}</sst>")
}

/// Fabricates a container the way the locator sees a real one: ZIP magic,
/// then each part's path string immediately followed by its stored XML.
pub fn container(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut doc = vec![0x50, 0x4B, 0x03, 0x04];
    for (path, content) in parts {
        doc.extend_from_slice(path.as_bytes());
        doc.extend_from_slice(content.as_bytes());
    }
    doc
}

/// A two-worksheet container with the trade rows on sheet 3.
pub fn ledger_container(shared_entries: &[&str], rows: &[String]) -> Vec<u8> {
    let sst = shared_strings_xml(shared_entries);
    let sheet3 = sheet_xml(rows);
    container(&[
        (SHARED_STRINGS, &sst),
        (SHEET3, &sheet3),
        (SHEET4, "<sheetData/>"),
    ])
}

/// Install a test subscriber once so degradation paths are visible under
/// `RUST_LOG=debug`. Later calls are no-ops.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ledgerfeed-it-{}-{name}", std::process::id()));
    std::fs::write(&path, bytes).expect("fixture write");
    path
}
