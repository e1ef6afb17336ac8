//! The header engine: lazy parse, case-insensitive index, ordered
//! mutations, and dual-mode build.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::entry::{HeaderEntry, HeaderRecord};
use crate::parser::scanner;
use crate::render;

/// An editable RFC 5322 header block.
///
/// Construct one per message from the raw header section (everything up to
/// and including the blank-line separator). Queries parse lazily and leave
/// the block clean; any mutation flips the one-way `changed` flag, after
/// which [`build`](Self::build) re-renders canonically (CRLF terminators,
/// folding flattened) instead of echoing the original bytes.
///
/// The engine is single-threaded and assumes exclusive ownership; callers
/// sharing one instance across tasks must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct HeaderBlock {
    raw: Vec<u8>,
    parsed: bool,
    changed: bool,
    envelope: Option<Vec<u8>>,
    entries: Vec<HeaderEntry>,
    /// Lowercased key → positions in `entries`, rebuilt after structural
    /// mutations. `entries` order stays the single source of truth.
    index: HashMap<String, Vec<usize>>,
}

impl HeaderBlock {
    /// Create an engine over a raw header block.
    ///
    /// No parsing happens here; the block is scanned on first query or
    /// mutation.
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// Idempotent lazy parse, invoked by every accessor that needs
    /// structural state.
    fn parse(&mut self) {
        if self.parsed {
            return;
        }
        self.parsed = true;
        let scan = scanner::scan(&self.raw);
        self.envelope = scan.envelope;
        self.entries = scan.entries;
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (pos, entry) in self.entries.iter().enumerate() {
            self.index.entry(entry.key.clone()).or_default().push(pos);
        }
    }

    /// Raw logical lines of every header matching `name`
    /// (case-insensitive), in original order. Empty when nothing matches.
    pub fn get(&mut self, name: &str) -> Vec<String> {
        self.parse();
        let key = name.trim().to_lowercase();
        match self.index.get(&key) {
            Some(positions) => positions
                .iter()
                .map(|&p| String::from_utf8_lossy(&self.entries[p].line).into_owned())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Value of the first header matching `name` (case-insensitive), or
    /// `None` when absent.
    pub fn get_first(&mut self, name: &str) -> Option<String> {
        self.parse();
        let key = name.trim().to_lowercase();
        let &pos = self.index.get(&key)?.first()?;
        Some(self.entries[pos].value.clone())
    }

    /// Every entry in original order as `{key, line}` records.
    pub fn get_list(&mut self) -> Vec<HeaderRecord> {
        self.parse();
        self.entries
            .iter()
            .map(|e| HeaderRecord {
                key: e.key.clone(),
                line: String::from_utf8_lossy(&e.line).into_owned(),
            })
            .collect()
    }

    /// Prepend a new header. The rendered line keeps the caller's casing
    /// for `name`; the value is inserted verbatim. Marks the block changed.
    pub fn add(&mut self, name: &str, value: &str) {
        self.parse();
        self.changed = true;
        self.entries.insert(0, HeaderEntry::from_parts(name, value));
        self.rebuild_index();
    }

    /// Delete every header matching `name` (case-insensitive), keeping the
    /// relative order of survivors.
    ///
    /// Marks the block changed even when nothing matched, so a no-op
    /// removal still forces canonical rendering.
    pub fn remove(&mut self, name: &str) {
        self.parse();
        self.changed = true;
        let key = name.trim().to_lowercase();
        self.entries.retain(|e| e.key != key);
        self.rebuild_index();
    }

    /// Replace the value of the first header matching `name`
    /// (case-insensitive), in place. The rebuilt line keeps the casing of
    /// the stored header name, not of the `name` argument.
    ///
    /// Never creates headers: with no match this is a structural no-op.
    /// Marks the block changed either way.
    pub fn update(&mut self, name: &str, value: &str) {
        self.parse();
        self.changed = true;
        let key = name.trim().to_lowercase();
        if let Some(&pos) = self.index.get(&key).and_then(|p| p.first()) {
            let original_name = self.entries[pos].original_name();
            self.entries[pos] = HeaderEntry::from_parts(&original_name, value);
        }
    }

    /// External dirty signal: force canonical rendering without editing
    /// anything. One-way, like every other path to `changed`.
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    /// Whether the block has diverged from its original bytes.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// The MBOX envelope line, terminator excluded, if the block starts
    /// with one.
    pub fn envelope(&mut self) -> Option<&[u8]> {
        self.parse();
        self.envelope.as_deref()
    }

    /// Number of stored header entries (the envelope is not one).
    pub fn len(&mut self) -> usize {
        self.parse();
        self.entries.len()
    }

    /// Whether the block holds no header entries.
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Serialize the block.
    ///
    /// Clean blocks come back byte-identical to the input. Changed blocks
    /// are re-rendered canonically: envelope first, every entry with a CRLF
    /// terminator, a trailing CRLF as the blank-line separator. The engine
    /// stays usable afterwards.
    pub fn build(&mut self) -> Vec<u8> {
        if !self.changed {
            return render::verbatim(&self.raw);
        }
        self.parse();
        render::canonical(self.envelope.as_deref(), &self.entries)
    }

    /// [`build`](Self::build) as text. Fails only when the built bytes are
    /// not valid UTF-8.
    pub fn build_string(&mut self) -> Result<String> {
        Ok(String::from_utf8(self.build())?)
    }
}
