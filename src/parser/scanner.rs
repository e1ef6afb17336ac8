//! Line scanner: splits a raw header block into logical header lines.
//!
//! Tolerant of malformed input. Handles mixed `\n` and `\r\n` terminators,
//! header folding (continuation lines starting with SP or HTAB), and an
//! optional leading MBOX `From ` envelope line. Nothing here fails: odd
//! lines are kept best-effort and logged.

use tracing::warn;

use crate::model::entry::HeaderEntry;

/// Result of scanning a raw header block.
#[derive(Debug, Default)]
pub struct Scan {
    /// Leading MBOX envelope line, terminator excluded, if present.
    pub envelope: Option<Vec<u8>>,

    /// Logical header lines in source order.
    pub entries: Vec<HeaderEntry>,
}

/// Split `raw` into an optional envelope line plus logical header lines.
///
/// A physical line starting with SP or HTAB continues the previous logical
/// line; the terminator bytes between them are kept inside the logical line
/// exactly as found. Scanning stops at the first empty logical line (the
/// header/body separator), which is not stored. Zero-length input yields an
/// empty scan.
pub fn scan(raw: &[u8]) -> Scan {
    let mut result = Scan::default();
    let mut lines: Vec<Vec<u8>> = Vec::new();
    // Terminator of the physical line most recently pushed, needed to
    // reattach fold bytes without loss.
    let mut last_term: &[u8] = b"";
    let mut pos = 0;
    let mut first = true;

    while pos < raw.len() {
        let (content, term, next) = next_physical_line(raw, pos);
        pos = next;

        if first {
            first = false;
            // The envelope check happens once, before any header parsing.
            if is_envelope_line(content) {
                result.envelope = Some(content.to_vec());
                continue;
            }
        }

        if content.is_empty() {
            break;
        }

        if content[0] == b' ' || content[0] == b'\t' {
            if let Some(prev) = lines.last_mut() {
                prev.extend_from_slice(last_term);
                prev.extend_from_slice(content);
                last_term = term;
                continue;
            }
            warn!(
                offset = pos,
                "continuation line with no preceding header, keeping it as its own entry"
            );
        }

        lines.push(content.to_vec());
        last_term = term;
    }

    for line in lines {
        if !line.contains(&b':') {
            warn!(
                line = %String::from_utf8_lossy(&line),
                "header line without ':', keyed by the whole line"
            );
        }
        result.entries.push(HeaderEntry::from_line(line));
    }

    result
}

/// Return `(content, terminator, next_pos)` for the physical line at `pos`.
///
/// `content` excludes the terminator; a CR immediately before the LF belongs
/// to the terminator. The final line of the buffer may have no terminator.
fn next_physical_line(raw: &[u8], pos: usize) -> (&[u8], &[u8], usize) {
    match raw[pos..].iter().position(|&b| b == b'\n') {
        Some(rel) => {
            let nl = pos + rel;
            if nl > pos && raw[nl - 1] == b'\r' {
                (&raw[pos..nl - 1], &raw[nl - 1..=nl], nl + 1)
            } else {
                (&raw[pos..nl], &raw[nl..=nl], nl + 1)
            }
        }
        None => (&raw[pos..], &b""[..], raw.len()),
    }
}

/// MBOX envelope test: the literal `From ` followed by a non-empty remainder.
fn is_envelope_line(line: &[u8]) -> bool {
    line.len() > 5 && line.starts_with(b"From ")
}
