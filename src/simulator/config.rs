//! Simulation configuration.

use crate::game::Form;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Face labels, parsed as integers where possible
    pub faces: Vec<String>,

    /// Number of dice rolled together
    pub num_dice: usize,

    /// Number of rolls in the play
    pub num_rolls: usize,

    /// Weight overrides as (face, weight) applied to every die
    pub weights: Vec<(String, String)>,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Give every die its own weight table instead of sharing one
    pub independent_dice: bool,

    /// Layout of the outcome table in the report
    pub form: Form,

    /// Log verbosity (0 = silent, 1 = summary, 2 = every roll)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            faces: (1..=6).map(|n| n.to_string()).collect(),
            num_dice: 3,
            num_rolls: 1000,
            weights: Vec::new(),
            seed: None,
            independent_dice: false,
            form: Form::Wide,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Fair coins tossed together.
    pub fn coin_toss(num_dice: usize, num_rolls: usize) -> Self {
        Self {
            faces: vec!["H".to_string(), "T".to_string()],
            num_dice,
            num_rolls,
            ..Default::default()
        }
    }

    /// Standard six-sided dice.
    pub fn six_sided(num_dice: usize, num_rolls: usize) -> Self {
        Self {
            num_dice,
            num_rolls,
            ..Default::default()
        }
    }

    /// Six-sided dice with a single face loaded.
    pub fn loaded_die(num_dice: usize, num_rolls: usize, face: u8, weight: f64) -> Self {
        Self {
            weights: vec![(face.to_string(), weight.to_string())],
            ..Self::six_sided(num_dice, num_rolls)
        }
    }
}
