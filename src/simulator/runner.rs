//! Builds dice from a config, plays the game and analyzes it.

use super::config::SimConfig;
use super::report::SimReport;
use crate::analyzer::Analyzer;
use crate::die::{Die, SharedDie};
use crate::error::Result;
use crate::face::Face;
use crate::game::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::rc::Rc;

/// Create the RNG for a run: seeded when a seed is given, from entropy
/// otherwise.
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Build the dice described by `config`.
///
/// Unless `independent_dice` is set, every slot holds the same die.
pub fn build_dice(config: &SimConfig) -> Result<Vec<SharedDie>> {
    let mut template = Die::new(config.faces.iter().map(|f| Face::parse(f)))?;
    for (face, weight) in &config.weights {
        template.change_weight(Face::parse(face), weight.as_str())?;
    }

    if config.independent_dice {
        Ok((0..config.num_dice)
            .map(|_| Rc::new(RefCell::new(template.clone())))
            .collect())
    } else {
        let shared = Rc::new(RefCell::new(template));
        Ok(vec![shared; config.num_dice])
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let mut rng = create_rng(config.seed);
    let dice = build_dice(config)?;
    let mut game = Game::new(dice)?;

    game.play(config.num_rolls, &mut rng)?;

    if config.verbosity >= 2 {
        if let Some(outcomes) = game.wide() {
            for (roll_number, row) in outcomes.rows().iter().enumerate() {
                let faces: Vec<String> = row.iter().map(Face::to_string).collect();
                log::info!("Roll {}: {}", roll_number, faces.join(" "));
            }
        }
    }

    let analyzer = Analyzer::new(&game);
    let report = SimReport::from_game(&game, analyzer, config);

    if config.verbosity >= 1 {
        log::info!(
            "{} roll(s) of {} dice: {} jackpot(s), {} distinct combination(s)",
            report.num_rolls,
            report.num_dice,
            report.jackpots,
            report.combos.len()
        );
    }

    Ok(report)
}
