//! Simulation report generation.

use super::config::SimConfig;
use crate::analyzer::{Analyzer, FaceCountTable, TallyTable};
use crate::face::Face;
use crate::game::{Game, GameView, OutcomeTable};

/// How many tally rows the text report lists.
const TOP_ENTRIES: usize = 10;

/// Everything computed for one play.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_rolls: usize,
    pub num_dice: usize,
    pub seed: Option<u64>,

    /// Face/weight table of each die at play time
    pub die_weights: Vec<Vec<(Face, f64)>>,

    pub outcomes: OutcomeTable,
    /// Outcome table in the configured form
    pub view: Option<GameView>,

    pub jackpots: u64,
    pub jackpot_rate: f64,

    pub face_counts: FaceCountTable,
    /// Share of all dice outcomes per face
    pub face_frequencies: Vec<(Face, f64)>,

    pub combos: TallyTable,
    pub permutations: TallyTable,
}

impl SimReport {
    /// Run every analysis over a played game.
    pub fn from_game(game: &Game, mut analyzer: Analyzer, config: &SimConfig) -> Self {
        let die_weights = game.dice().iter().map(|d| d.borrow().show()).collect();

        let jackpots = analyzer.jackpot();
        let face_counts = analyzer.face_counts_per_roll().clone();
        let combos = analyzer.combo_count().clone();
        let permutations = analyzer.permutation_count().clone();

        let outcomes = analyzer.results().clone();
        let num_rolls = outcomes.num_rolls();
        let num_dice = outcomes.num_dice();

        let jackpot_rate = if num_rolls > 0 {
            jackpots as f64 / num_rolls as f64
        } else {
            0.0
        };

        let cells = (num_rolls * num_dice).max(1) as f64;
        let face_frequencies = face_counts
            .totals()
            .into_iter()
            .map(|(face, total)| (face, total as f64 / cells))
            .collect();

        Self {
            num_rolls,
            num_dice,
            seed: config.seed,
            die_weights,
            outcomes,
            view: game.show(config.form),
            jackpots,
            jackpot_rate,
            face_counts,
            face_frequencies,
            combos,
            permutations,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    MONTE CARLO DICE REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Rolls: {}   Dice: {}",
            self.num_rolls, self.num_dice
        ));
        if let Some(seed) = self.seed {
            report.push_str(&format!("   Seed: {}", seed));
        }
        report.push_str("\n\n");

        report.push_str("── DICE ─────────────────────────────────────────────────────────\n");
        for (die_number, weights) in self.die_weights.iter().enumerate() {
            let total: f64 = weights.iter().map(|(_, w)| w).sum();
            let faces: Vec<String> = weights
                .iter()
                .map(|(face, w)| format!("{}={}", face, w))
                .collect();
            report.push_str(&format!(
                "  Die {:2}: {}  (total weight {})\n",
                die_number,
                faces.join(" "),
                total
            ));
        }
        report.push('\n');

        report.push_str("── JACKPOTS ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Jackpots:      {}\n", self.jackpots));
        report.push_str(&format!(
            "  Jackpot Rate:  {:.2}%\n\n",
            self.jackpot_rate * 100.0
        ));

        report.push_str("── FACE FREQUENCY ───────────────────────────────────────────────\n");
        for (face, share) in &self.face_frequencies {
            let pct = share * 100.0;
            let bar: String = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:>8}: {:>5.1}% {}\n", face.to_string(), pct, bar));
        }
        report.push('\n');

        report.push_str("── TOP COMBINATIONS ─────────────────────────────────────────────\n");
        push_tally(&mut report, &self.combos);
        report.push('\n');

        report.push_str("── TOP PERMUTATIONS ─────────────────────────────────────────────\n");
        push_tally(&mut report, &self.permutations);

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn push_tally(report: &mut String, tally: &TallyTable) {
    report.push_str(&format!("  {} distinct\n", tally.len()));
    for entry in tally.entries().iter().take(TOP_ENTRIES) {
        let faces: Vec<String> = entry.outcomes.iter().map(Face::to_string).collect();
        report.push_str(&format!("  ({})  {}\n", faces.join(", "), entry.count));
    }
    if tally.len() > TOP_ENTRIES {
        report.push_str(&format!("  ... {} more\n", tally.len() - TOP_ENTRIES));
    }
}

// Implement Serialize for JSON output
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 11)?;
        state.serialize_field("num_rolls", &self.num_rolls)?;
        state.serialize_field("num_dice", &self.num_dice)?;
        state.serialize_field("seed", &self.seed)?;
        state.serialize_field("die_weights", &self.die_weights)?;
        state.serialize_field("outcomes", &self.view)?;
        state.serialize_field("jackpots", &self.jackpots)?;
        state.serialize_field("jackpot_rate", &self.jackpot_rate)?;
        state.serialize_field("face_counts", &self.face_counts)?;
        state.serialize_field("face_frequencies", &self.face_frequencies)?;
        state.serialize_field("combinations", &self.combos)?;
        state.serialize_field("permutations", &self.permutations)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::Die;
    use crate::game::Form;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn played_game(rolls: usize) -> Game {
        let coin = Die::shared(["H", "T"]).unwrap();
        let mut game = Game::new(vec![coin.clone(), coin]).unwrap();
        game.play(rolls, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        game
    }

    #[test]
    fn test_report_generation() {
        let game = played_game(40);
        let config = SimConfig {
            seed: Some(1),
            ..SimConfig::coin_toss(2, 40)
        };
        let report = SimReport::from_game(&game, Analyzer::new(&game), &config);

        assert_eq!(report.num_rolls, 40);
        assert_eq!(report.num_dice, 2);
        assert_eq!(report.die_weights.len(), 2);
        assert_eq!(report.combos.total(), 40);

        let share: f64 = report.face_frequencies.iter().map(|(_, s)| s).sum();
        assert!((share - 1.0).abs() < 1e-9);
        assert!((report.jackpot_rate - report.jackpots as f64 / 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_text_report_sections() {
        let game = played_game(10);
        let config = SimConfig::coin_toss(2, 10);
        let report = SimReport::from_game(&game, Analyzer::new(&game), &config);
        let text = report.to_text();
        assert!(text.contains("JACKPOTS"));
        assert!(text.contains("TOP COMBINATIONS"));
        assert!(text.contains("TOP PERMUTATIONS"));
    }

    #[test]
    fn test_json_uses_configured_form() {
        let game = played_game(3);
        let config = SimConfig {
            form: Form::Narrow,
            ..SimConfig::coin_toss(2, 3)
        };
        let report = SimReport::from_game(&game, Analyzer::new(&game), &config);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();

        let rows = json["outcomes"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1]["roll_number"], 0);
        assert_eq!(rows[1]["die_number"], 1);
        assert!(json["combinations"]["entries"].is_array());
    }
}
