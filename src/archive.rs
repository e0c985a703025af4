//! Marker-based part location inside the ZIP-packaged document.
//!
//! This is deliberately **not** a conformant archive reader: the writer in
//! use stores the worksheet XML so that its path string and content are
//! locatable by direct byte scan, and the narrow single-producer layout makes
//! a central-directory parse unnecessary. Any violated assumption surfaces as
//! a recoverable [`ContainerError`], never a panic.

use std::ops::Range;

use crate::error::{ContainerError, LedgerResult};

/// ZIP local-file-header signature, first two bytes of any valid container.
const CONTAINER_MAGIC: [u8; 2] = [0x50, 0x4B];

/// Builds the conventional worksheet part path for a 1-based sheet index.
pub fn worksheet_path(index: u32) -> String {
    format!("xl/worksheets/sheet{index}.xml")
}

/// Returns the byte range of the part fragment tagged by `target`.
///
/// The fragment starts right after the first occurrence of the `target` path
/// string and is bounded by the first occurrence of `upper` after it; with no
/// upper bound it extends to the end of the buffer.
pub fn locate_part(
    doc: &[u8],
    target: &str,
    upper: Option<&str>,
) -> LedgerResult<Range<usize>> {
    if doc.len() < 2 || doc[0..2] != CONTAINER_MAGIC {
        return Err(ContainerError::InvalidSignature.into());
    }

    let start = find_subslice(doc, target.as_bytes(), 0)
        .ok_or_else(|| ContainerError::PartNotFound(target.to_string()))?
        + target.len();

    let end = upper
        .and_then(|marker| find_subslice(doc, marker.as_bytes(), start))
        .unwrap_or(doc.len());

    Ok(start..end)
}

fn find_subslice(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}
