//! Header entry types: the stored logical line and the query projection.

/// One logical header line, folding included.
///
/// `line` holds the exact source bytes of the logical line (continuation
/// terminators and leading whitespace included, final terminator excluded).
/// Entries created through `add`/`update` hold the rebuilt `Name: value`
/// bytes instead.
#[derive(Debug, Clone)]
pub struct HeaderEntry {
    /// Lowercased header name, used for case-insensitive lookup.
    pub key: String,

    /// Raw bytes of the logical line as they appeared in the source.
    pub line: Vec<u8>,

    /// Text after the first `:`, with at most one leading space stripped.
    /// Empty for lines that carry no colon.
    pub value: String,
}

impl HeaderEntry {
    /// Build an entry from the raw bytes of one logical line.
    ///
    /// A line with no `:` keeps the whole trimmed line (lowercased) as its
    /// key and an empty value; it is stored, not dropped.
    pub fn from_line(line: Vec<u8>) -> Self {
        let (key, value) = {
            let text = String::from_utf8_lossy(&line);
            match text.find(':') {
                Some(pos) => {
                    let rest = &text[pos + 1..];
                    (
                        text[..pos].trim().to_lowercase(),
                        rest.strip_prefix(' ').unwrap_or(rest).to_string(),
                    )
                }
                None => (text.trim().to_lowercase(), String::new()),
            }
        };
        Self { key, line, value }
    }

    /// Build an entry from a caller-supplied name and value.
    ///
    /// The rendered line keeps the caller's name casing; only the lookup
    /// key is lowercased.
    pub fn from_parts(name: &str, value: &str) -> Self {
        Self {
            key: name.trim().to_lowercase(),
            line: format!("{name}: {value}").into_bytes(),
            value: value.to_string(),
        }
    }

    /// Original-casing header name as stored in the line (text before the
    /// first `:`). Falls back to the lowercased key for colon-less lines.
    pub fn original_name(&self) -> String {
        let text = String::from_utf8_lossy(&self.line);
        match text.find(':') {
            Some(pos) => text[..pos].trim().to_string(),
            None => self.key.clone(),
        }
    }
}

/// One row of [`HeaderBlock::get_list`](crate::block::HeaderBlock::get_list):
/// the lowercased key plus the raw logical line as text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeaderRecord {
    /// Lowercased header name.
    pub key: String,

    /// The logical line, fold bytes included, terminator excluded.
    pub line: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_splits_on_first_colon() {
        let e = HeaderEntry::from_line(b"Message-ID: <abc@def>".to_vec());
        assert_eq!(e.key, "message-id");
        assert_eq!(e.value, "<abc@def>");
        assert_eq!(e.line, b"Message-ID: <abc@def>");
    }

    #[test]
    fn test_from_line_strips_at_most_one_space() {
        let e = HeaderEntry::from_line(b"Subject:  two spaces".to_vec());
        assert_eq!(e.value, " two spaces");

        let e = HeaderEntry::from_line(b"Subject:no space".to_vec());
        assert_eq!(e.value, "no space");
    }

    #[test]
    fn test_from_line_without_colon() {
        let e = HeaderEntry::from_line(b"This Is Not A Header".to_vec());
        assert_eq!(e.key, "this is not a header");
        assert_eq!(e.value, "");
    }

    #[test]
    fn test_from_parts_preserves_caller_casing() {
        let e = HeaderEntry::from_parts("X-Test", "tere");
        assert_eq!(e.key, "x-test");
        assert_eq!(e.line, b"X-Test: tere");
        assert_eq!(e.value, "tere");
    }

    #[test]
    fn test_original_name() {
        let e = HeaderEntry::from_line(b"MIME-Version: 1.0".to_vec());
        assert_eq!(e.original_name(), "MIME-Version");
    }
}
