//! Games: rolling several similar dice together.
//!
//! A game holds handles to dice created elsewhere and keeps the outcome
//! of its most recent play only. Outcomes are viewed in wide form (one
//! row per roll, one column per die) or narrow form (one row per roll and
//! die pair).

use crate::die::SharedDie;
use crate::error::{MonteCarloError, Result};
use crate::face::Face;
use rand::Rng;
use serde::Serialize;
use std::str::FromStr;

/// Wide outcome table: `rows[roll_number][die_number]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OutcomeTable {
    num_dice: usize,
    rows: Vec<Vec<Face>>,
}

impl OutcomeTable {
    /// Build a table from rows, checking that every row has the same width.
    pub fn from_rows(rows: Vec<Vec<Face>>) -> Result<Self> {
        let num_dice = rows.first().map_or(0, Vec::len);
        if let Some((roll, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_dice) {
            return Err(MonteCarloError::NotASimulation(format!(
                "roll {} has {} outcomes, expected {}",
                roll,
                row.len(),
                num_dice
            )));
        }
        Ok(Self { num_dice, rows })
    }

    /// Assemble a table from one column of draws per die.
    fn from_columns(columns: Vec<Vec<Face>>, n_rolls: usize) -> Self {
        let num_dice = columns.len();
        let rows = (0..n_rolls)
            .map(|r| columns.iter().map(|col| col[r].clone()).collect())
            .collect();
        Self { num_dice, rows }
    }

    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, roll_number: usize, die_number: usize) -> Option<&Face> {
        self.rows.get(roll_number).and_then(|row| row.get(die_number))
    }

    pub fn row(&self, roll_number: usize) -> Option<&[Face]> {
        self.rows.get(roll_number).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<Face>] {
        &self.rows
    }

    /// All outcomes of one die, in roll order.
    pub fn column(&self, die_number: usize) -> Option<Vec<Face>> {
        if die_number >= self.num_dice {
            return None;
        }
        Some(self.rows.iter().map(|row| row[die_number].clone()).collect())
    }

    /// Reshape into long form, ordered by roll then die.
    pub fn to_narrow(&self) -> NarrowTable {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(roll_number, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(die_number, outcome)| NarrowRow {
                        roll_number,
                        die_number,
                        outcome: outcome.clone(),
                    })
            })
            .collect();
        NarrowTable { rows }
    }
}

/// One (roll, die) cell of a narrow table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrowRow {
    pub roll_number: usize,
    pub die_number: usize,
    pub outcome: Face,
}

/// Narrow outcome table, one row per (roll_number, die_number).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NarrowTable {
    rows: Vec<NarrowRow>,
}

impl NarrowTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[NarrowRow] {
        &self.rows
    }

    pub fn get(&self, roll_number: usize, die_number: usize) -> Option<&Face> {
        self.rows
            .iter()
            .find(|r| r.roll_number == roll_number && r.die_number == die_number)
            .map(|r| &r.outcome)
    }
}

/// Layout of a game's outcome table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Form {
    #[default]
    Wide,
    Narrow,
}

impl FromStr for Form {
    type Err = MonteCarloError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Form::Wide),
            "narrow" => Ok(Form::Narrow),
            other => Err(MonteCarloError::InvalidForm(other.to_string())),
        }
    }
}

/// Outcome table in the requested form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GameView {
    Wide(OutcomeTable),
    Narrow(NarrowTable),
}

/// Anything that can hand over a wide outcome table for analysis.
pub trait OutcomeSource {
    /// Copy of the most recent outcome table, `None` before any play.
    fn wide_outcomes(&self) -> Option<OutcomeTable>;
}

/// Rolls one or more similar dice one or more times.
///
/// Similar dice have the same faces but may have their own weights.
pub struct Game {
    dice: Vec<SharedDie>,
    results: Option<OutcomeTable>,
}

impl Game {
    pub fn new(dice: Vec<SharedDie>) -> Result<Self> {
        if dice.is_empty() {
            return Err(MonteCarloError::InvalidInputKind(
                "a game needs at least one die".to_string(),
            ));
        }
        let first_len = dice[0].borrow().len();
        if dice.iter().any(|d| d.borrow().len() != first_len) {
            log::warn!("game created with dice of different sizes");
        }
        Ok(Self {
            dice,
            results: None,
        })
    }

    pub fn dice(&self) -> &[SharedDie] {
        &self.dice
    }

    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    /// Roll every die `n_rolls` times and keep the result.
    ///
    /// Die 0 draws all its rolls first, then die 1, and so on. If any die
    /// fails to roll the previous result is kept.
    pub fn play<R: Rng + ?Sized>(&mut self, n_rolls: usize, rng: &mut R) -> Result<()> {
        if n_rolls == 0 {
            return Err(MonteCarloError::InvalidRollCount);
        }

        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &self.dice {
            columns.push(die.borrow().roll(n_rolls, rng)?);
        }

        self.results = Some(OutcomeTable::from_columns(columns, n_rolls));
        log::debug!("played {} roll(s) with {} dice", n_rolls, self.dice.len());
        Ok(())
    }

    /// The most recent play, or `None` if the game has not been played.
    pub fn show(&self, form: Form) -> Option<GameView> {
        let results = self.results.as_ref()?;
        Some(match form {
            Form::Wide => GameView::Wide(results.clone()),
            Form::Narrow => GameView::Narrow(results.to_narrow()),
        })
    }

    pub fn wide(&self) -> Option<OutcomeTable> {
        self.results.clone()
    }

    pub fn narrow(&self) -> Option<NarrowTable> {
        self.results.as_ref().map(OutcomeTable::to_narrow)
    }
}

impl OutcomeSource for Game {
    fn wide_outcomes(&self) -> Option<OutcomeTable> {
        self.wide()
    }
}

impl OutcomeSource for OutcomeTable {
    fn wide_outcomes(&self) -> Option<OutcomeTable> {
        Some(self.clone())
    }
}
