//! Dual-mode serialization: verbatim passthrough and canonical rebuild.
//!
//! Both renderers are pure functions over the same data, selected by the
//! engine's `changed` flag.

use crate::model::entry::HeaderEntry;

/// Untouched mode: the output is the captured raw block, byte for byte.
///
/// Original terminators, folding, and trailing blank-line bytes all come
/// back exactly as given.
pub fn verbatim(raw: &[u8]) -> Vec<u8> {
    raw.to_vec()
}

/// Changed mode: envelope line first (verbatim), then every entry in
/// sequence order, each terminated with CRLF, closed with one extra CRLF as
/// the blank-line separator.
///
/// Folding is flattened: internal CR/LF bytes of a folded line are dropped,
/// the continuation's leading whitespace stays as the separator.
pub fn canonical(envelope: Option<&[u8]>, entries: &[HeaderEntry]) -> Vec<u8> {
    let size = envelope.map_or(0, |e| e.len() + 2)
        + entries.iter().map(|e| e.line.len() + 2).sum::<usize>()
        + 2;
    let mut out = Vec::with_capacity(size);

    if let Some(env) = envelope {
        out.extend_from_slice(env);
        out.extend_from_slice(b"\r\n");
    }
    for entry in entries {
        out.extend(entry.line.iter().filter(|&&b| b != b'\r' && b != b'\n'));
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(b"\r\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_is_identity() {
        let raw = b"Subject: test\r\nX: y\n\n";
        assert_eq!(verbatim(raw), raw);
    }

    #[test]
    fn test_canonical_joins_with_crlf() {
        let entries = vec![
            HeaderEntry::from_line(b"Subject: test".to_vec()),
            HeaderEntry::from_line(b"MIME-Version: 1.0".to_vec()),
        ];
        assert_eq!(
            canonical(None, &entries),
            b"Subject: test\r\nMIME-Version: 1.0\r\n\r\n"
        );
    }

    #[test]
    fn test_canonical_renders_envelope_first() {
        let entries = vec![HeaderEntry::from_line(b"Subject: test".to_vec())];
        let env = &b"From MAILER-DAEMON Fri Jul  8 12:08:34 2011"[..];
        assert_eq!(
            canonical(Some(env), &entries),
            b"From MAILER-DAEMON Fri Jul  8 12:08:34 2011\r\nSubject: test\r\n\r\n"
        );
    }

    #[test]
    fn test_canonical_flattens_folding() {
        let entries = vec![HeaderEntry::from_line(
            b"Subject: first part\r\n\tsecond part".to_vec(),
        )];
        assert_eq!(
            canonical(None, &entries),
            b"Subject: first part\tsecond part\r\n\r\n"
        );
    }

    #[test]
    fn test_canonical_empty_block_is_separator_only() {
        assert_eq!(canonical(None, &[]), b"\r\n");
    }
}
