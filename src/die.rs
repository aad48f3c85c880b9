//! Weighted dice.
//!
//! A `Die` has N distinct faces and one weight per face. Weights default
//! to 1.0, can be changed at any time and are relative (they do not need
//! to sum to one). Rolling draws faces with replacement, each face chosen
//! with probability proportional to its weight.

use crate::error::{MonteCarloError, Result};
use crate::face::Face;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Weight every face starts with.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A die handle that can be placed in several games, or several times in
/// the same game. Weight changes made through any handle are seen by all.
pub type SharedDie = Rc<RefCell<Die>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    faces: Vec<Face>,
    weights: Vec<f64>,
}

impl Die {
    /// Create a die with every face weighted 1.0.
    ///
    /// Faces must be non-empty, all of one kind (text or numeric) and
    /// distinct.
    pub fn new<I, F>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();

        let first_kind = match faces.first() {
            Some(face) => face.kind(),
            None => {
                return Err(MonteCarloError::InvalidInputKind(
                    "a die needs at least one face".to_string(),
                ))
            }
        };
        if let Some(odd) = faces.iter().find(|f| f.kind() != first_kind) {
            return Err(MonteCarloError::InvalidInputKind(format!(
                "faces must all be {} but '{}' is {}",
                first_kind,
                odd,
                odd.kind()
            )));
        }

        let mut seen = HashSet::with_capacity(faces.len());
        for face in &faces {
            if !seen.insert(face) {
                return Err(MonteCarloError::DuplicateValue(face.to_string()));
            }
        }

        let weights = vec![DEFAULT_WEIGHT; faces.len()];
        Ok(Self { faces, weights })
    }

    /// Create a die already wrapped in a shareable handle.
    pub fn shared<I, F>(faces: I) -> Result<SharedDie>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        Ok(Rc::new(RefCell::new(Self::new(faces)?)))
    }

    /// Change the weight of a single face.
    ///
    /// The weight is coerced to `f64` first. On any error the die is left
    /// untouched.
    pub fn change_weight<F, W>(&mut self, face: F, new_weight: W) -> Result<()>
    where
        F: Into<Face>,
        W: IntoWeight,
    {
        let face = face.into();
        let idx = self
            .index_of(&face)
            .ok_or_else(|| MonteCarloError::UnknownFace(face.to_string()))?;
        let weight = new_weight.into_weight()?;
        if weight < 0.0 {
            return Err(MonteCarloError::NegativeWeight(weight));
        }
        self.weights[idx] = weight;
        Ok(())
    }

    /// Roll the die `n_rolls` times.
    ///
    /// All draws of one call use the weights as they were when the call
    /// started. Fails with `NoPositiveWeight` if every weight is zero.
    pub fn roll<R: Rng + ?Sized>(&self, n_rolls: usize, rng: &mut R) -> Result<Vec<Face>> {
        let dist = self.distribution()?;
        let results: Vec<Face> = (0..n_rolls)
            .map(|_| self.faces[dist.sample(rng)].clone())
            .collect();
        log::trace!("rolled {} time(s): {:?}", n_rolls, results);
        Ok(results)
    }

    /// Roll the die once.
    pub fn roll_once<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Face> {
        let dist = self.distribution()?;
        Ok(self.faces[dist.sample(rng)].clone())
    }

    /// Copy of the face/weight table, in face order.
    pub fn show(&self) -> Vec<(Face, f64)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.index_of(face).map(|i| self.weights[i])
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    fn index_of(&self, face: &Face) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }

    fn distribution(&self) -> Result<WeightedIndex<f64>> {
        let total = self.total_weight();
        if total <= 0.0 {
            return Err(MonteCarloError::NoPositiveWeight);
        }
        let result = if total.is_finite() {
            WeightedIndex::new(&self.weights)
        } else {
            // Finite weights can still overflow when summed; scaling by the
            // largest keeps the proportions and brings the total back down.
            let largest = self.weights.iter().copied().fold(0.0, f64::max);
            WeightedIndex::new(self.weights.iter().map(|w| w / largest))
        };
        // Weights are validated on every change, so the only failure left
        // is an all-zero table.
        result.map_err(|_| MonteCarloError::NoPositiveWeight)
    }
}

/// Values that can be coerced into a die weight.
pub trait IntoWeight {
    fn into_weight(self) -> Result<f64>;
}

fn finite(value: f64, original: &dyn std::fmt::Display) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MonteCarloError::InvalidWeightType(original.to_string()))
    }
}

impl IntoWeight for f64 {
    fn into_weight(self) -> Result<f64> {
        finite(self, &self)
    }
}

impl IntoWeight for f32 {
    fn into_weight(self) -> Result<f64> {
        finite(self as f64, &self)
    }
}

macro_rules! weight_from_int {
    ($($t:ty),*) => {
        $(
            impl IntoWeight for $t {
                fn into_weight(self) -> Result<f64> {
                    Ok(self as f64)
                }
            }
        )*
    };
}

weight_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl IntoWeight for &str {
    fn into_weight(self) -> Result<f64> {
        let value = self
            .trim()
            .parse::<f64>()
            .map_err(|_| MonteCarloError::InvalidWeightType(self.to_string()))?;
        finite(value, &self)
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}
