//! Combination and permutation tallies.

use crate::face::Face;
use crate::game::OutcomeTable;
use serde::Serialize;
use std::collections::HashMap;

/// How a roll is turned into a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TallyKind {
    /// Order-insensitive: the roll's outcomes sorted.
    Combination,
    /// Order-sensitive: the roll's outcomes in die order.
    Permutation,
}

/// One distinct key and the number of rolls that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub outcomes: Vec<Face>,
    pub count: u64,
}

/// Distinct keys with their counts, most frequent first.
///
/// Keys with equal counts keep the order in which they first appeared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TallyTable {
    entries: Vec<TallyEntry>,
}

impl TallyTable {
    pub(crate) fn from_outcomes(outcomes: &OutcomeTable, kind: TallyKind) -> Self {
        let mut entries: Vec<TallyEntry> = Vec::new();
        let mut slot_of: HashMap<Vec<Face>, usize> = HashMap::new();

        for row in outcomes.rows() {
            let mut key = row.clone();
            if kind == TallyKind::Combination {
                key.sort();
            }
            match slot_of.get(&key) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    slot_of.insert(key.clone(), entries.len());
                    entries.push(TallyEntry {
                        outcomes: key,
                        count: 1,
                    });
                }
            }
        }

        // sort_by is stable, so ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a key, 0 if it never came up.
    pub fn count(&self, outcomes: &[Face]) -> u64 {
        self.entries
            .iter()
            .find(|e| e.outcomes == outcomes)
            .map_or(0, |e| e.count)
    }

    /// Sum of all counts; equals the number of rolls tallied.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn most_common(&self) -> Option<&TallyEntry> {
        self.entries.first()
    }
}
