//! Property tests for the idea ledger and the ranking engine.

use std::collections::HashSet;

use polygo_core::{Bucket, IdeaLedger, Ranking};
use proptest::prelude::*;

fn idea_text() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z ]{0,20}"
}

fn bucket() -> impl Strategy<Value = Bucket> {
    prop_oneof![Just(Bucket::Favorite), Just(Bucket::NeedsPolishing)]
}

proptest! {
    #[test]
    fn ledger_preserves_order(ideas in prop::collection::vec(idea_text(), 0..30)) {
        let mut ledger = IdeaLedger::new();
        for (i, idea) in ideas.iter().enumerate() {
            prop_assert_eq!(ledger.add(idea), i);
        }
        prop_assert_eq!(ledger.len(), ideas.len());
        for (i, idea) in ideas.iter().enumerate() {
            let expected = format!("\n{idea}\n\n");
            prop_assert_eq!(ledger.get(i).unwrap(), expected.as_str());
        }
        prop_assert!(ledger.get(ideas.len()).is_err());
    }

    #[test]
    fn ranking_partitions_every_index(decisions in prop::collection::vec(bucket(), 0..30)) {
        let mut ledger = IdeaLedger::new();
        for i in 0..decisions.len() {
            ledger.add(&format!("idea {i}"));
        }

        let mut ranking = Ranking::new();
        for (step, decision) in decisions.iter().enumerate() {
            prop_assert!(!ranking.is_complete(&ledger));
            prop_assert_eq!(ranking.classify(&ledger, *decision).unwrap(), step);

            // Ranked indices are exactly 0..next_unranked, each in one bucket.
            let favs: HashSet<_> = ranking.indices(Bucket::Favorite).iter().copied().collect();
            let polish: HashSet<_> = ranking.indices(Bucket::NeedsPolishing).iter().copied().collect();
            prop_assert!(favs.is_disjoint(&polish));
            let all: HashSet<_> = favs.union(&polish).copied().collect();
            let expected: HashSet<_> = (0..ranking.next_unranked()).collect();
            prop_assert_eq!(all, expected);
        }

        prop_assert_eq!(ranking.next_unranked(), decisions.len());
        prop_assert!(ranking.is_complete(&ledger));
        prop_assert!(ranking.is_complete(&ledger));
        prop_assert!(ranking.classify(&ledger, Bucket::Favorite).is_err());

        let fav_count = decisions.iter().filter(|b| **b == Bucket::Favorite).count();
        prop_assert_eq!(ranking.bucket_contents(&ledger, Bucket::Favorite).unwrap().len(), fav_count);
        prop_assert_eq!(
            ranking.bucket_contents(&ledger, Bucket::NeedsPolishing).unwrap().len(),
            decisions.len() - fav_count
        );
    }
}
