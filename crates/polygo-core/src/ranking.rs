//! Ranking engine.
//!
//! Walks the ledger once from index 0, putting each idea into one of two
//! buckets. The ranked indices are always exactly `0..next_unranked`, each
//! in one bucket.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::ledger::IdeaLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Favorite,
    NeedsPolishing,
}

impl Bucket {
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Favorite => "favorites",
            Bucket::NeedsPolishing => "needs polishing",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Ranking {
    favorites: Vec<usize>,
    needs_polishing: Vec<usize>,
    next_unranked: usize,
}

impl Ranking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_unranked(&self) -> usize {
        self.next_unranked
    }

    pub fn is_complete(&self, ledger: &IdeaLedger) -> bool {
        self.next_unranked >= ledger.len()
    }

    /// Index of the idea waiting for a decision.
    pub fn current_index(&self, ledger: &IdeaLedger) -> Result<usize> {
        if self.is_complete(ledger) {
            return Err(CoreError::NoMoreIdeas);
        }
        Ok(self.next_unranked)
    }

    /// The idea waiting for a decision, if any.
    pub fn current<'a>(&self, ledger: &'a IdeaLedger) -> Option<&'a str> {
        let index = self.current_index(ledger).ok()?;
        ledger.get(index).ok()
    }

    /// Put the current idea into `bucket` and move the cursor forward.
    ///
    /// Fails with `NoMoreIdeas` once every idea is ranked; callers check
    /// `is_complete` first.
    pub fn classify(&mut self, ledger: &IdeaLedger, bucket: Bucket) -> Result<usize> {
        let index = self.current_index(ledger)?;
        match bucket {
            Bucket::Favorite => self.favorites.push(index),
            Bucket::NeedsPolishing => self.needs_polishing.push(index),
        }
        self.next_unranked += 1;
        Ok(index)
    }

    /// Ledger indices in `bucket`, in the order they were classified.
    pub fn indices(&self, bucket: Bucket) -> &[usize] {
        match bucket {
            Bucket::Favorite => &self.favorites,
            Bucket::NeedsPolishing => &self.needs_polishing,
        }
    }

    /// Idea texts in `bucket`, in the order they were classified.
    pub fn bucket_contents<'a>(&self, ledger: &'a IdeaLedger, bucket: Bucket) -> Result<Vec<&'a str>> {
        self.indices(bucket)
            .iter()
            .map(|&index| ledger.get(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_of(ideas: &[&str]) -> IdeaLedger {
        let mut ledger = IdeaLedger::new();
        for idea in ideas {
            ledger.add(idea);
        }
        ledger
    }

    #[test]
    fn empty_ledger_is_complete_immediately() {
        let ledger = IdeaLedger::new();
        let ranking = Ranking::new();
        assert!(ranking.is_complete(&ledger));
        assert!(matches!(ranking.current_index(&ledger), Err(CoreError::NoMoreIdeas)));
        assert!(ranking.current(&ledger).is_none());
    }

    #[test]
    fn classify_walks_ledger_in_order() {
        let ledger = ledger_of(&["a", "b", "c"]);
        let mut ranking = Ranking::new();

        assert_eq!(ranking.classify(&ledger, Bucket::NeedsPolishing).unwrap(), 0);
        assert_eq!(ranking.classify(&ledger, Bucket::Favorite).unwrap(), 1);
        assert!(!ranking.is_complete(&ledger));
        assert_eq!(ranking.current(&ledger), Some("\nc\n\n"));
        assert_eq!(ranking.classify(&ledger, Bucket::NeedsPolishing).unwrap(), 2);

        assert!(ranking.is_complete(&ledger));
        assert_eq!(ranking.indices(Bucket::Favorite), &[1]);
        assert_eq!(ranking.indices(Bucket::NeedsPolishing), &[0, 2]);
    }

    #[test]
    fn classify_past_end_is_an_error() {
        let ledger = ledger_of(&["only"]);
        let mut ranking = Ranking::new();
        ranking.classify(&ledger, Bucket::Favorite).unwrap();
        assert!(matches!(
            ranking.classify(&ledger, Bucket::Favorite),
            Err(CoreError::NoMoreIdeas)
        ));
        assert_eq!(ranking.next_unranked(), 1);
    }

    #[test]
    fn bucket_contents_follow_classification_order() {
        let ledger = ledger_of(&["one", "two", "three"]);
        let mut ranking = Ranking::new();
        ranking.classify(&ledger, Bucket::Favorite).unwrap();
        ranking.classify(&ledger, Bucket::NeedsPolishing).unwrap();
        ranking.classify(&ledger, Bucket::Favorite).unwrap();

        let favs = ranking.bucket_contents(&ledger, Bucket::Favorite).unwrap();
        assert_eq!(favs, vec!["\none\n\n", "\nthree\n\n"]);
        let polish = ranking.bucket_contents(&ledger, Bucket::NeedsPolishing).unwrap();
        assert_eq!(polish, vec!["\ntwo\n\n"]);
    }

    #[test]
    fn is_complete_does_not_change_state() {
        let ledger = ledger_of(&["x", "y"]);
        let mut ranking = Ranking::new();
        ranking.classify(&ledger, Bucket::Favorite).unwrap();
        for _ in 0..5 {
            assert!(!ranking.is_complete(&ledger));
        }
        assert_eq!(ranking.next_unranked(), 1);
        assert_eq!(ranking.indices(Bucket::Favorite), &[0]);
    }

    #[test]
    fn bucket_labels() {
        assert_eq!(Bucket::Favorite.label(), "favorites");
        assert_eq!(Bucket::NeedsPolishing.label(), "needs polishing");
    }
}
