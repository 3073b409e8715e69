// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The reference scale that interval names are judged against.
//!
//! A [`DiatonicPrototype`] fixes how many letter names exist per repeating
//! block, the semitone position of each letter, and which positions are
//! perfect. The usual Western prototype is the major scale
//! (`[0, 2, 4, 5, 7, 9, 11]` inside a 12-semitone block).
//!
//! Quality is always relative to the prototype: a "pure" third is the
//! prototype's own third (a major third for [`DiatonicPrototype::major`]),
//! one semitone less is diminished, one more is augmented.

use serde::{Deserialize, Serialize};

use super::error::{Result, TheoryError};
use super::interval::Quality;
use super::semitone::Semitones;

/// Serialized form of a prototype, validated on conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrototypeConfig {
    /// Semitones from each letter to the next; the first entry is the root (0)
    pub steps: Vec<Semitones>,
    /// Semitones from the last letter to the root of the next block
    pub continuation: Semitones,
    /// Letter names, one per step
    pub letters: Vec<String>,
    /// Interval numbers (1-based, within one block) that are perfect
    #[serde(default)]
    pub perfect: Vec<u32>,
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        Self {
            steps: vec![0, 2, 2, 1, 2, 2, 2],
            continuation: 1,
            letters: ["c", "d", "e", "f", "g", "a", "b"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            perfect: vec![1, 4, 5],
        }
    }
}

/// Immutable reference structure shared by intervals and scales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PrototypeConfig", into = "PrototypeConfig")]
pub struct DiatonicPrototype {
    scale_degrees: Vec<Semitones>,
    continuation_offset: Semitones,
    letters: Vec<String>,
    perfect: Vec<u32>,
    absolute: Vec<Semitones>,
    block_size: Semitones,
    pure_table: Vec<Option<u32>>,
    augmented_table: Vec<Option<u32>>,
    diminished_table: Vec<Option<u32>>,
}

impl DiatonicPrototype {
    /// Build a prototype from relative step offsets.
    pub fn new(config: PrototypeConfig) -> Result<Self> {
        let PrototypeConfig {
            steps,
            continuation,
            letters,
            mut perfect,
        } = config;

        if steps.is_empty() {
            return Err(TheoryError::argument("prototype needs at least one step"));
        }
        if steps[0] != 0 {
            return Err(TheoryError::argument(format!(
                "prototype must start at its root (offset 0), got {}",
                steps[0]
            )));
        }
        if let Some(bad) = steps[1..].iter().find(|&&s| s <= 0) {
            return Err(TheoryError::argument(format!(
                "prototype offsets after the root must be positive, got {}",
                bad
            )));
        }
        if continuation <= 0 {
            return Err(TheoryError::argument(format!(
                "prototype continuation must be positive, got {}",
                continuation
            )));
        }
        if letters.len() != steps.len() {
            return Err(TheoryError::argument(format!(
                "prototype has {} steps but {} letter names",
                steps.len(),
                letters.len()
            )));
        }

        let size = steps.len() as u32;
        if let Some(bad) = perfect.iter().find(|&&p| p == 0 || p > size) {
            return Err(TheoryError::argument(format!(
                "perfect position {} is outside 1..={}",
                bad, size
            )));
        }
        perfect.sort_unstable();
        perfect.dedup();

        let absolute: Vec<Semitones> = steps
            .iter()
            .scan(0, |acc, &s| {
                *acc += s;
                Some(*acc)
            })
            .collect();
        let block_size = absolute[absolute.len() - 1] + continuation;

        let mut pure_table = vec![None; block_size as usize];
        let mut augmented_table = vec![None; block_size as usize];
        let mut diminished_table = vec![None; block_size as usize];

        for (i, &pos) in absolute.iter().enumerate() {
            let number = i as u32 + 1;
            pure_table[pos as usize] = Some(number);
            if number != size {
                let up = pos + 1;
                if up < block_size {
                    augmented_table[up as usize] = Some(number);
                }
            }
            if number != 1 {
                diminished_table[(pos - 1) as usize] = Some(number);
            }
        }

        if let Some(gap) = (0..block_size as usize).find(|&r| {
            pure_table[r].is_none() && augmented_table[r].is_none() && diminished_table[r].is_none()
        }) {
            return Err(TheoryError::argument(format!(
                "prototype cannot name an interval of {} semitones",
                gap
            )));
        }

        Ok(Self {
            scale_degrees: steps,
            continuation_offset: continuation,
            letters,
            perfect,
            absolute,
            block_size,
            pure_table,
            augmented_table,
            diminished_table,
        })
    }

    /// Build a prototype from root-relative positions, e.g. `[0, 2, 4, 5, 7, 9, 11]`.
    pub fn from_absolute(
        positions: &[Semitones],
        continuation: Semitones,
        letters: Vec<String>,
        perfect: Vec<u32>,
    ) -> Result<Self> {
        let steps = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| if i == 0 { p } else { p - positions[i - 1] })
            .collect();
        Self::new(PrototypeConfig {
            steps,
            continuation,
            letters,
            perfect,
        })
    }

    /// The major-scale prototype with letters c..b and perfect 1, 4, 5
    pub fn major() -> Self {
        Self::default()
    }

    /// Relative offsets between consecutive letters
    pub fn scale_degrees(&self) -> &[Semitones] {
        &self.scale_degrees
    }

    pub fn continuation_offset(&self) -> Semitones {
        self.continuation_offset
    }

    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// Number of letter names per block (7 for the major prototype)
    pub fn scale_size(&self) -> u32 {
        self.scale_degrees.len() as u32
    }

    /// Semitones per block (12 for the major prototype)
    pub fn block_size(&self) -> Semitones {
        self.block_size
    }

    /// Root-relative semitone position of each letter
    pub fn absolute_representation(&self) -> &[Semitones] {
        &self.absolute
    }

    /// Whether a reduced interval number is perfect
    pub fn is_perfect(&self, reduced_number: u32) -> bool {
        self.perfect.contains(&reduced_number)
    }

    /// Semitones of the pure interval with this reduced number (1-based).
    pub fn base_length(&self, reduced_number: u32) -> Option<Semitones> {
        let index = reduced_number.checked_sub(1)? as usize;
        self.absolute.get(index).copied()
    }

    /// Split a number into its reduced number and octave offset.
    /// Interval numbers start at 1; `0` maps to `(0, 0)`.
    pub fn reduce_number(&self, number: u32) -> (u32, u32) {
        if number == 0 {
            return (0, 0);
        }
        let size = self.scale_size();
        let reduced = ((number - 1) % size) + 1;
        (reduced, (number - reduced) / size)
    }

    /// Every single-quality name for `semitones` (sign ignored), as
    /// `(quality, number)` pairs in pure, augmented, diminished order.
    pub fn candidates(&self, semitones: Semitones) -> Vec<(Quality, u32)> {
        let magnitude = semitones.abs();
        let residue = (magnitude % self.block_size) as usize;
        let octaves = (magnitude / self.block_size) as u32;
        let shift = octaves * self.scale_size();

        [
            (Quality::Pure, &self.pure_table),
            (Quality::Augmented(1), &self.augmented_table),
            (Quality::Diminished(1), &self.diminished_table),
        ]
        .into_iter()
        .filter_map(|(quality, table)| table[residue].map(|n| (quality, n + shift)))
        .collect()
    }

    /// Export as the serializable configuration
    pub fn to_config(&self) -> PrototypeConfig {
        PrototypeConfig {
            steps: self.scale_degrees.clone(),
            continuation: self.continuation_offset,
            letters: self.letters.clone(),
            perfect: self.perfect.clone(),
        }
    }
}

impl Default for DiatonicPrototype {
    fn default() -> Self {
        // The default configuration satisfies every check in `new`.
        match Self::new(PrototypeConfig::default()) {
            Ok(prototype) => prototype,
            Err(e) => unreachable!("built-in major prototype is invalid: {}", e),
        }
    }
}

impl TryFrom<PrototypeConfig> for DiatonicPrototype {
    type Error = TheoryError;

    fn try_from(config: PrototypeConfig) -> Result<Self> {
        Self::new(config)
    }
}

impl From<DiatonicPrototype> for PrototypeConfig {
    fn from(prototype: DiatonicPrototype) -> Self {
        prototype.to_config()
    }
}
