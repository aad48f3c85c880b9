//! Integration test: two coins tossed five times with a scripted RNG.
//!
//! The scripted RNG makes every draw known in advance, so the whole
//! outcome table and every statistic can be checked exactly. A second
//! table pins what `ChaCha8Rng::seed_from_u64(42)` produces.

use montecarlo::{Analyzer, Die, Face, Form, Game, GameView, MonteCarloError};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws below the midpoint of a fair coin's weight range (picks "H").
const LOW: u64 = 0x4000_0000_0000_0000;
/// Draws above the midpoint (picks "T").
const HIGH: u64 = 0xC000_0000_0000_0000;

/// RNG that replays a fixed list of `u64` values.
struct ScriptedRng {
    values: Vec<u64>,
    next: usize,
}

impl ScriptedRng {
    fn new(values: Vec<u64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn f(label: &str) -> Face {
    Face::from(label)
}

fn key(labels: &[&str]) -> Vec<Face> {
    labels.iter().map(|l| f(l)).collect()
}

/// Die 0 draws H T H T H, then die 1 draws H H T T H.
fn played_coins() -> Game {
    let coin = Die::shared(["H", "T"]).unwrap();
    let mut game = Game::new(vec![coin.clone(), coin]).unwrap();
    let mut rng = ScriptedRng::new(vec![LOW, HIGH, LOW, HIGH, LOW, LOW, LOW, HIGH, HIGH, LOW]);
    game.play(5, &mut rng).unwrap();
    game
}

#[test]
fn test_exact_wide_table() {
    let game = played_coins();
    let wide = game.wide().unwrap();

    assert_eq!(wide.num_rolls(), 5);
    assert_eq!(wide.num_dice(), 2);
    assert_eq!(
        wide.rows(),
        &[
            key(&["H", "H"]),
            key(&["T", "H"]),
            key(&["H", "T"]),
            key(&["T", "T"]),
            key(&["H", "H"]),
        ]
    );
}

#[test]
fn test_exact_narrow_table() {
    let game = played_coins();
    let narrow = match game.show(Form::Narrow) {
        Some(GameView::Narrow(table)) => table,
        other => panic!("expected narrow table, got {:?}", other),
    };

    assert_eq!(narrow.len(), 10);
    let flat: Vec<(usize, usize, Face)> = narrow
        .rows()
        .iter()
        .map(|r| (r.roll_number, r.die_number, r.outcome.clone()))
        .collect();
    assert_eq!(flat[0], (0, 0, f("H")));
    assert_eq!(flat[1], (0, 1, f("H")));
    assert_eq!(flat[2], (1, 0, f("T")));
    assert_eq!(flat[3], (1, 1, f("H")));
    assert_eq!(flat[9], (4, 1, f("H")));
}

#[test]
fn test_jackpots() {
    let game = played_coins();
    let mut analyzer = Analyzer::new(&game);
    assert_eq!(analyzer.jackpot(), 3);
    assert_eq!(analyzer.jackpot_count(), 3);
}

#[test]
fn test_face_counts_per_roll() {
    let game = played_coins();
    let mut analyzer = Analyzer::new(&game);
    let counts = analyzer.face_counts_per_roll();

    assert_eq!(counts.faces(), key(&["H", "T"]).as_slice());
    assert_eq!(counts.num_rolls(), 5);
    let rows: Vec<Vec<u32>> = (0..5).map(|r| counts.row(r).unwrap().to_vec()).collect();
    assert_eq!(
        rows,
        vec![vec![2, 0], vec![1, 1], vec![1, 1], vec![0, 2], vec![2, 0]]
    );
}

#[test]
fn test_combinations() {
    let game = played_coins();
    let mut analyzer = Analyzer::new(&game);
    let combos = analyzer.combo_count();

    let entries: Vec<(Vec<Face>, u64)> = combos
        .entries()
        .iter()
        .map(|e| (e.outcomes.clone(), e.count))
        .collect();
    assert_eq!(
        entries,
        vec![
            (key(&["H", "H"]), 2),
            (key(&["H", "T"]), 2),
            (key(&["T", "T"]), 1),
        ]
    );
    assert_eq!(combos.total(), 5);
}

#[test]
fn test_permutations() {
    let game = played_coins();
    let mut analyzer = Analyzer::new(&game);
    let perms = analyzer.permutation_count();

    let entries: Vec<(Vec<Face>, u64)> = perms
        .entries()
        .iter()
        .map(|e| (e.outcomes.clone(), e.count))
        .collect();
    assert_eq!(
        entries,
        vec![
            (key(&["H", "H"]), 2),
            (key(&["T", "H"]), 1),
            (key(&["H", "T"]), 1),
            (key(&["T", "T"]), 1),
        ]
    );
    assert_eq!(perms.total(), 5);
}

#[test]
fn test_bogus_form_leaves_game_alone() {
    let game = played_coins();
    let before = game.wide();

    let err = "bogus".parse::<Form>().unwrap_err();
    assert_eq!(err, MonteCarloError::InvalidForm("bogus".to_string()));
    assert_eq!(game.wide(), before);
}

// =============================================================================
// Seeded ChaCha8
// =============================================================================

/// Entries of a tally as `(outcomes, count)` pairs.
fn tally_entries(table: &montecarlo::TallyTable) -> Vec<(Vec<Face>, u64)> {
    table
        .entries()
        .iter()
        .map(|e| (e.outcomes.clone(), e.count))
        .collect()
}

#[test]
fn test_seeded_coin_table() {
    let coin = Die::shared(["H", "T"]).unwrap();
    let mut game = Game::new(vec![coin.clone(), coin]).unwrap();
    game.play(5, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();

    assert_eq!(
        game.wide().unwrap().rows(),
        &[
            key(&["T", "H"]),
            key(&["T", "H"]),
            key(&["H", "T"]),
            key(&["T", "T"]),
            key(&["H", "H"]),
        ]
    );

    let mut analyzer = Analyzer::new(&game);
    assert_eq!(analyzer.jackpot(), 2);
    assert_eq!(
        tally_entries(analyzer.combo_count()),
        vec![
            (key(&["H", "T"]), 3),
            (key(&["T", "T"]), 1),
            (key(&["H", "H"]), 1),
        ]
    );
    assert_eq!(
        tally_entries(analyzer.permutation_count()),
        vec![
            (key(&["T", "H"]), 2),
            (key(&["H", "T"]), 1),
            (key(&["T", "T"]), 1),
            (key(&["H", "H"]), 1),
        ]
    );
}
