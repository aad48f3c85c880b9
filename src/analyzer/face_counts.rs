//! Per-roll face frequency table.

use crate::face::Face;
use crate::game::OutcomeTable;
use serde::Serialize;
use std::collections::HashMap;

/// How many times each face came up in each roll.
///
/// Rows are roll numbers. Columns are the faces seen anywhere in the
/// play, in the order they were first seen. Faces that never came up
/// have no column.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FaceCountTable {
    faces: Vec<Face>,
    counts: Vec<Vec<u32>>,
}

impl FaceCountTable {
    pub(crate) fn from_outcomes(outcomes: &OutcomeTable) -> Self {
        let mut faces: Vec<Face> = Vec::new();
        let mut column_of: HashMap<&Face, usize> = HashMap::new();
        for face in outcomes.rows().iter().flatten() {
            if !column_of.contains_key(face) {
                column_of.insert(face, faces.len());
                faces.push(face.clone());
            }
        }

        let counts = outcomes
            .rows()
            .iter()
            .map(|row| {
                let mut counts = vec![0u32; faces.len()];
                for face in row {
                    counts[column_of[face]] += 1;
                }
                counts
            })
            .collect();

        Self { faces, counts }
    }

    /// Column labels.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_rolls(&self) -> usize {
        self.counts.len()
    }

    /// Counts for one roll, aligned with [`FaceCountTable::faces`].
    pub fn row(&self, roll_number: usize) -> Option<&[u32]> {
        self.counts.get(roll_number).map(Vec::as_slice)
    }

    /// Count of `face` in roll `roll_number`. Faces with no column count 0.
    pub fn count(&self, roll_number: usize, face: &Face) -> Option<u32> {
        let row = self.counts.get(roll_number)?;
        Some(
            self.faces
                .iter()
                .position(|f| f == face)
                .map_or(0, |col| row[col]),
        )
    }

    /// Total occurrences of each face over the whole play.
    pub fn totals(&self) -> Vec<(Face, u64)> {
        self.faces
            .iter()
            .enumerate()
            .map(|(col, face)| {
                let total = self.counts.iter().map(|row| row[col] as u64).sum();
                (face.clone(), total)
            })
            .collect()
    }
}
