//! Face labels.
//!
//! A die face is either a text symbol ("H", "T", "ace") or a number
//! (1..=6, 0.5, 2.25). All faces of one die are of the same kind.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A distinct labeled outcome of a die.
///
/// Integral numbers are always stored as `Number`, so a value has exactly
/// one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Face {
    Number(i64),
    Decimal(Decimal),
    Text(String),
}

/// A finite numeric face value that is not an `i64`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Decimal(f64);

impl Decimal {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// The kind of value a face holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Number,
    Text,
}

impl Face {
    pub fn kind(&self) -> FaceKind {
        match self {
            Face::Number(_) | Face::Decimal(_) => FaceKind::Number,
            Face::Text(_) => FaceKind::Text,
        }
    }

    /// Numeric face from a float. `None` for NaN and infinities.
    pub fn number(value: f64) -> Option<Face> {
        if !value.is_finite() {
            return None;
        }
        // 2^63 is exactly representable, i64::MAX is not
        let in_range = value >= i64::MIN as f64 && value < -(i64::MIN as f64);
        if value.fract() == 0.0 && in_range {
            Some(Face::Number(value as i64))
        } else {
            Some(Face::Decimal(Decimal(value)))
        }
    }

    /// Parse a face from user input: anything that reads as a finite
    /// number is numeric, everything else is text.
    pub fn parse(input: &str) -> Face {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Face::Number(n);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Face::number)
            .unwrap_or_else(|| Face::Text(trimmed.to_string()))
    }

    fn numeric_value(&self) -> Option<f64> {
        match self {
            Face::Number(n) => Some(*n as f64),
            Face::Decimal(d) => Some(d.0),
            Face::Text(_) => None,
        }
    }
}

impl Ord for Face {
    /// Numbers in numeric order, then text in lexical order.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Face::Number(a), Face::Number(b)) => a.cmp(b),
            (Face::Text(a), Face::Text(b)) => a.cmp(b),
            (Face::Text(_), _) => Ordering::Greater,
            (_, Face::Text(_)) => Ordering::Less,
            _ => {
                let (a, b) = (self.numeric_value(), other.numeric_value());
                let by_value = a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0));
                // Only reachable for values past the i64 range
                by_value.then_with(|| {
                    matches!(self, Face::Decimal(_)).cmp(&matches!(other, Face::Decimal(_)))
                })
            }
        }
    }
}

impl PartialOrd for Face {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Number(n) => write!(f, "{}", n),
            Face::Decimal(d) => write!(f, "{}", d.0),
            Face::Text(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for FaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceKind::Number => write!(f, "numeric"),
            FaceKind::Text => write!(f, "text"),
        }
    }
}

impl From<&str> for Face {
    fn from(value: &str) -> Self {
        Face::Text(value.to_string())
    }
}

impl From<String> for Face {
    fn from(value: String) -> Self {
        Face::Text(value)
    }
}

impl From<char> for Face {
    fn from(value: char) -> Self {
        Face::Text(value.to_string())
    }
}

macro_rules! face_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Face {
                fn from(value: $t) -> Self {
                    Face::Number(value as i64)
                }
            }
        )*
    };
}

face_from_int!(i8, i16, i32, i64, u8, u16, u32);
