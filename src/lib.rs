//! Monte Carlo dice simulator.
//!
//! Weighted dice with arbitrary faces, games that roll several of them
//! together, and analyzers that compute jackpots, per-roll face counts and
//! combination/permutation tallies over a game's outcomes.
//!
//! ```
//! use montecarlo::{Analyzer, Die, Game};
//! use rand::SeedableRng;
//!
//! let coin = Die::shared(["H", "T"]).unwrap();
//! coin.borrow_mut().change_weight("H", 3.0).unwrap();
//!
//! let mut game = Game::new(vec![coin.clone(), coin]).unwrap();
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
//! game.play(100, &mut rng).unwrap();
//!
//! let mut analyzer = Analyzer::new(&game);
//! assert!(analyzer.jackpot() <= 100);
//! assert_eq!(analyzer.combo_count().total(), 100);
//! ```

pub mod analyzer;
pub mod build_info;
pub mod die;
pub mod error;
pub mod face;
pub mod game;
pub mod simulator;

pub use analyzer::{Analyzer, FaceCountTable, TallyEntry, TallyTable};
pub use die::{Die, IntoWeight, SharedDie};
pub use error::{MonteCarloError, Result};
pub use face::{Face, FaceKind};
pub use game::{Form, Game, GameView, NarrowRow, NarrowTable, OutcomeSource, OutcomeTable};
