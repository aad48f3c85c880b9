//! Descriptive statistics over a single game.
//!
//! An `Analyzer` copies the game's wide outcome table when it is created
//! and never looks at the game again. Each statistic is recomputed on
//! request and cached on the analyzer:
//! - jackpots (rolls where every die shows the same face)
//! - face counts per roll
//! - distinct combinations (order-insensitive) and their counts
//! - distinct permutations (order-sensitive) and their counts

mod face_counts;
mod tally;

pub use face_counts::FaceCountTable;
pub use tally::{TallyEntry, TallyTable};
pub(crate) use tally::TallyKind;

use crate::error::Result;
use crate::face::Face;
use crate::game::{OutcomeSource, OutcomeTable};

#[derive(Debug, Clone)]
pub struct Analyzer {
    results: OutcomeTable,
    jackpot_count: u64,
    face_counts: Option<FaceCountTable>,
    combo_counts: Option<TallyTable>,
    permutation_counts: Option<TallyTable>,
}

impl Analyzer {
    /// Snapshot the source's most recent outcomes.
    ///
    /// A source that has not been played yields an empty snapshot.
    pub fn new<S: OutcomeSource + ?Sized>(source: &S) -> Self {
        let results = source.wide_outcomes().unwrap_or_default();
        log::debug!(
            "analyzer created over {} roll(s) of {} dice",
            results.num_rolls(),
            results.num_dice()
        );
        Self::from_table(results)
    }

    /// Analyze a raw table of rolls. Every row must have the same width.
    pub fn from_rows(rows: Vec<Vec<Face>>) -> Result<Self> {
        Ok(Self::from_table(OutcomeTable::from_rows(rows)?))
    }

    fn from_table(results: OutcomeTable) -> Self {
        Self {
            results,
            jackpot_count: 0,
            face_counts: None,
            combo_counts: None,
            permutation_counts: None,
        }
    }

    /// Count rolls where all dice show the same face.
    pub fn jackpot(&mut self) -> u64 {
        let count = self
            .results
            .rows()
            .iter()
            .filter(|row| row.windows(2).all(|pair| pair[0] == pair[1]))
            .count() as u64;
        self.jackpot_count = count;
        count
    }

    /// Count how many times each face was rolled in each roll.
    pub fn face_counts_per_roll(&mut self) -> &FaceCountTable {
        self.face_counts
            .insert(FaceCountTable::from_outcomes(&self.results))
    }

    /// Distinct combinations of faces rolled, with their counts.
    pub fn combo_count(&mut self) -> &TallyTable {
        self.combo_counts
            .insert(TallyTable::from_outcomes(&self.results, TallyKind::Combination))
    }

    /// Distinct permutations of faces rolled, with their counts.
    pub fn permutation_count(&mut self) -> &TallyTable {
        self.permutation_counts
            .insert(TallyTable::from_outcomes(&self.results, TallyKind::Permutation))
    }

    /// The snapshot taken at construction.
    pub fn results(&self) -> &OutcomeTable {
        &self.results
    }

    /// Last value returned by [`Analyzer::jackpot`], 0 before the first call.
    pub fn jackpot_count(&self) -> u64 {
        self.jackpot_count
    }

    pub fn face_counts(&self) -> Option<&FaceCountTable> {
        self.face_counts.as_ref()
    }

    pub fn combo_counts(&self) -> Option<&TallyTable> {
        self.combo_counts.as_ref()
    }

    pub fn permutation_counts(&self) -> Option<&TallyTable> {
        self.permutation_counts.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MonteCarloError;

    fn rows(values: &[&[&str]]) -> Vec<Vec<Face>> {
        values
            .iter()
            .map(|r| r.iter().map(|v| Face::from(*v)).collect())
            .collect()
    }

    #[test]
    fn test_new_analyzer_is_blank() {
        let analyzer = Analyzer::from_rows(rows(&[&["H", "T"]])).unwrap();
        assert_eq!(analyzer.jackpot_count(), 0);
        assert!(analyzer.face_counts().is_none());
        assert!(analyzer.combo_counts().is_none());
        assert!(analyzer.permutation_counts().is_none());
    }

    #[test]
    fn test_jackpot_counts_uniform_rows() {
        let mut analyzer = Analyzer::from_rows(rows(&[
            &["H", "H"],
            &["H", "T"],
            &["T", "T"],
        ]))
        .unwrap();
        assert_eq!(analyzer.jackpot(), 2);
        assert_eq!(analyzer.jackpot_count(), 2);
    }

    #[test]
    fn test_single_die_always_jackpot() {
        let mut analyzer = Analyzer::from_rows(rows(&[&["a"], &["b"], &["c"]])).unwrap();
        assert_eq!(analyzer.jackpot(), 3);
    }

    #[test]
    fn test_recompute_only_touches_requested_table() {
        let mut analyzer = Analyzer::from_rows(rows(&[&["H", "T"], &["T", "H"]])).unwrap();
        analyzer.combo_count();
        assert!(analyzer.combo_counts().is_some());
        assert!(analyzer.permutation_counts().is_none());
        assert!(analyzer.face_counts().is_none());
        assert_eq!(analyzer.jackpot_count(), 0);
    }

    #[test]
    fn test_cached_tables_match_returned() {
        let mut analyzer = Analyzer::from_rows(rows(&[&["H", "T"], &["T", "H"]])).unwrap();
        let perms = analyzer.permutation_count().clone();
        assert_eq!(analyzer.permutation_counts(), Some(&perms));
        let counts = analyzer.face_counts_per_roll().clone();
        assert_eq!(analyzer.face_counts(), Some(&counts));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Analyzer::from_rows(rows(&[&["H", "T"], &["H"]])).unwrap_err();
        assert!(matches!(err, MonteCarloError::NotASimulation(_)));
    }

    #[test]
    fn test_empty_snapshot_is_usable() {
        let mut analyzer = Analyzer::new(&OutcomeTable::default());
        assert_eq!(analyzer.jackpot(), 0);
        assert_eq!(analyzer.combo_count().total(), 0);
        assert_eq!(analyzer.face_counts_per_roll().num_rolls(), 0);
    }
}
