use std::collections::{BTreeSet, HashMap};
use std::num::NonZeroUsize;

use dq_core::casebook::{ClueIndex, InsertOutcome, SuspectTable, char_sum_slot};
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-zÁÉíõç ]{0,8}", 0..64)
}

fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    let suspect = "(Blackwood|Violet|Graves|Mustard|Plum)";
    prop::collection::vec(("[a-z]{1,6}", suspect), 0..64)
}

proptest! {
    #[test]
    fn in_order_is_strictly_ascending(input in names()) {
        let index: ClueIndex = input.iter().cloned().collect();
        let walked: Vec<&str> = index.in_order().collect();

        prop_assert!(walked.windows(2).all(|w| w[0] < w[1]));

        let expected: BTreeSet<&str> = input.iter().map(String::as_str).collect();
        prop_assert_eq!(walked.len(), index.len());
        prop_assert!(walked.iter().copied().eq(expected.iter().copied()));
    }

    #[test]
    fn second_insert_changes_nothing(input in names()) {
        let mut index: ClueIndex = input.iter().cloned().collect();
        let before: Vec<String> = index.in_order().map(str::to_owned).collect();
        let len = index.len();

        for name in &input {
            prop_assert_eq!(index.insert(name.as_str()), InsertOutcome::AlreadyPresent);
        }

        let after: Vec<String> = index.in_order().map(str::to_owned).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(index.len(), len);
    }

    #[test]
    fn contains_iff_inserted(input in names(), needle in "[A-Za-z ]{0,8}") {
        let index: ClueIndex = input.iter().cloned().collect();
        prop_assert_eq!(index.contains(&needle), input.contains(&needle));
        for name in &input {
            prop_assert!(index.contains(name));
        }
    }

    #[test]
    fn enumeration_is_total_and_slot_ordered(input in pairs(), buckets in 1usize..16) {
        let buckets = NonZeroUsize::new(buckets).unwrap();
        let mut table = SuspectTable::with_bucket_count(buckets);
        for (clue, suspect) in &input {
            table.insert(clue.as_str(), suspect.as_str());
        }

        let walked: Vec<(String, String)> = table
            .iter()
            .map(|a| (a.clue.clone(), a.suspect.clone()))
            .collect();
        prop_assert_eq!(walked.len(), input.len());
        prop_assert_eq!(table.len(), input.len());

        // Expected order: stable sort of the inserts by slot
        let mut expected = input.clone();
        expected.sort_by_key(|(clue, _)| char_sum_slot(clue, buckets));
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn leader_has_the_top_count(input in pairs()) {
        let mut table = SuspectTable::new();
        for (clue, suspect) in &input {
            table.insert(clue.as_str(), suspect.as_str());
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();
        for a in table.iter() {
            let entry = counts.entry(a.suspect.as_str()).or_insert(0);
            if *entry == 0 {
                first_seen.push(a.suspect.as_str());
            }
            *entry += 1;
        }

        match table.most_mentioned_suspect() {
            None => prop_assert!(input.is_empty()),
            Some((suspect, count)) => {
                prop_assert_eq!(counts[suspect], count);
                prop_assert!(counts.values().all(|&c| c <= count));
                // Tie-break: nobody seen earlier has the same count
                let earlier = first_seen.iter().take_while(|&&s| s != suspect);
                for s in earlier {
                    prop_assert!(counts[s] < count);
                }
            }
        }
    }
}

#[test]
fn scenario_a_sorted_traversal() {
    let mut index = ClueIndex::new();
    index.insert("Chave Antiga");
    index.insert("Carta Rasgada");
    index.insert("Álbum");

    let mut expected = vec!["Chave Antiga", "Carta Rasgada", "Álbum"];
    expected.sort();
    assert_eq!(index.in_order().collect::<Vec<_>>(), expected);
}

#[test]
fn scenario_b_prime_suspect() {
    let mut table = SuspectTable::new();
    table.insert("Diário Rasgado", "Sr. Blackwood");
    table.insert("Chave Enferrujada", "Sra. Violet");
    table.insert("Receita Queimada", "Sr. Blackwood");

    assert_eq!(table.most_mentioned_suspect(), Some(("Sr. Blackwood", 2)));
}

#[test]
fn scenario_c_empty_table() {
    assert_eq!(SuspectTable::new().most_mentioned_suspect(), None);
}

#[test]
fn scenario_d_duplicate_clue() {
    let mut index = ClueIndex::new();
    assert_eq!(index.insert("Pista A"), InsertOutcome::Inserted);
    assert_eq!(index.insert("Pista A"), InsertOutcome::AlreadyPresent);
    assert_eq!(index.len(), 1);
    assert_eq!(index.height(), 1);
}
