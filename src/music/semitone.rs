// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Signed semitone distances.
//!
//! A [`SemitoneInterval`] splits its size into a base `distance` (the
//! prototype's reference position) and a chromatic `adjustment`. Two values
//! with equal size are enharmonically the same point on the semitone line but
//! remain structurally distinct.

use std::cmp::Ordering;
use std::fmt;
use std::ops;

use serde::{Deserialize, Serialize};

use super::error::{Result, TheoryError};
use super::interval::Direction;

/// Semitone count type
pub type Semitones = i32;

/// A signed number of semitones, decomposed into distance and adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemitoneInterval {
    distance: Semitones,
    adjustment: Semitones,
}

impl SemitoneInterval {
    /// The additive identity
    pub const IDENTITY: SemitoneInterval = SemitoneInterval {
        distance: 0,
        adjustment: 0,
    };

    pub fn new(distance: Semitones, adjustment: Semitones) -> Self {
        Self {
            distance,
            adjustment,
        }
    }

    pub fn distance(&self) -> Semitones {
        self.distance
    }

    pub fn adjustment(&self) -> Semitones {
        self.adjustment
    }

    /// Total signed semitones
    pub fn size(&self) -> Semitones {
        self.distance + self.adjustment
    }

    /// Ascending, descending, or `None` for a unison
    pub fn direction(&self) -> Option<Direction> {
        match self.size().cmp(&0) {
            Ordering::Less => Some(Direction::Descending),
            Ordering::Equal => None,
            Ordering::Greater => Some(Direction::Ascending),
        }
    }

    /// Componentwise sum
    pub fn add(self, other: SemitoneInterval) -> SemitoneInterval {
        SemitoneInterval {
            distance: self.distance + other.distance,
            adjustment: self.adjustment + other.adjustment,
        }
    }

    /// Negate both components
    pub fn invert(self) -> SemitoneInterval {
        SemitoneInterval {
            distance: -self.distance,
            adjustment: -self.adjustment,
        }
    }

    /// Reduce the distance modulo `modulus`, keeping the adjustment.
    pub fn reduce(self, modulus: Semitones) -> Result<SemitoneInterval> {
        if modulus <= 0 {
            return Err(TheoryError::argument(format!(
                "reduction modulus must be positive, got {}",
                modulus
            )));
        }
        Ok(SemitoneInterval {
            distance: self.distance.rem_euclid(modulus),
            adjustment: self.adjustment,
        })
    }

    /// Total order by size only
    pub fn cmp_size(&self, other: &SemitoneInterval) -> Ordering {
        self.size().cmp(&other.size())
    }

    /// Same point on the semitone line (enharmonic collapse)
    pub fn size_eq(&self, other: &SemitoneInterval) -> bool {
        self.size() == other.size()
    }

    /// Exact structural match of distance and adjustment
    pub fn enharm_eq(&self, other: &SemitoneInterval) -> bool {
        self == other
    }
}

impl ops::Add for SemitoneInterval {
    type Output = SemitoneInterval;

    fn add(self, rhs: SemitoneInterval) -> SemitoneInterval {
        SemitoneInterval::add(self, rhs)
    }
}

impl ops::Neg for SemitoneInterval {
    type Output = SemitoneInterval;

    fn neg(self) -> SemitoneInterval {
        self.invert()
    }
}

impl std::iter::Sum for SemitoneInterval {
    fn sum<I: Iterator<Item = SemitoneInterval>>(iter: I) -> Self {
        iter.fold(SemitoneInterval::IDENTITY, SemitoneInterval::add)
    }
}

impl fmt::Display for SemitoneInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}", self.distance, self.adjustment)
    }
}
