//! Session roll history (in-memory only; nothing is persisted).

/// One scored roll, as shown in the history pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// 1-based roll counter.
    pub roll_no: u32,
    /// The rendered result line (label + sorted faces).
    pub line: String,
}

impl HistoryEntry {
    /// History pane text, e.g. `Roll 3: One pair! Dice game results: 1 1 3 4 5`.
    pub fn display_line(&self) -> String {
        format!("Roll {}: {}", self.roll_no, self.line)
    }
}

/// Append-only log of scored rolls for the current session.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result line and return its roll number (starting at 1).
    pub fn push(&mut self, line: impl Into<String>) -> u32 {
        let roll_no = self.entries.len() as u32 + 1;
        self.entries.push(HistoryEntry {
            roll_no,
            line: line.into(),
        });
        roll_no
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
