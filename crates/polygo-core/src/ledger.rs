//! Append-only store of captured ideas.
//!
//! Indices are handed out in capture order and never change. Ranking and
//! export refer to ideas only by index.

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Default)]
pub struct IdeaLedger {
    ideas: Vec<String>,
}

impl IdeaLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an idea and return its index.
    ///
    /// The text is stored padded with blank lines so that joined ideas stay
    /// visually separated. Callers filter out empty text before this point.
    pub fn add(&mut self, text: &str) -> usize {
        self.ideas.push(format!("\n{text}\n\n"));
        self.ideas.len() - 1
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        self.ideas
            .get(index)
            .map(String::as_str)
            .ok_or(CoreError::IndexOutOfRange {
                index,
                len: self.ideas.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ideas.iter().map(String::as_str)
    }

    /// All ideas joined with the `---` separator.
    pub fn joined(&self) -> String {
        self.ideas.join("---")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_sequential_indices() {
        let mut ledger = IdeaLedger::new();
        assert_eq!(ledger.add("first"), 0);
        assert_eq!(ledger.add("second"), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn ideas_are_padded() {
        let mut ledger = IdeaLedger::new();
        ledger.add("Build a robot");
        assert_eq!(ledger.get(0).unwrap(), "\nBuild a robot\n\n");
    }

    #[test]
    fn get_out_of_range_fails() {
        let mut ledger = IdeaLedger::new();
        ledger.add("only");
        match ledger.get(1) {
            Err(CoreError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 1);
                assert_eq!(len, 1);
            }
            other => panic!("Expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn joined_uses_separator() {
        let mut ledger = IdeaLedger::new();
        ledger.add("a");
        ledger.add("b");
        assert_eq!(ledger.joined(), "\na\n\n---\nb\n\n");
        assert_eq!(IdeaLedger::new().joined(), "");
    }
}
