// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scales built by composing diatonic intervals.
//!
//! A [`Scale`] is a list of relative steps, a continuation offset that leads
//! from the last step into the next period, and a degree list naming the
//! diatonic function of every step. The degree list is what turns ambiguous
//! semitone sums back into correctly spelled intervals in
//! [`Scale::absolute_scale_repr`].
//!
//! A scale is rooted when its first step is the unison, rootless when the
//! unison is absent and the first step is measured from an implicit root.

use std::fmt;
use std::iter;
use std::sync::Arc;

use tracing::{debug, trace};

use super::error::{Result, TheoryError};
use super::interval::DiatonicInterval;
use super::prototype::DiatonicPrototype;
use super::semitone::Semitones;

/// Whether a scale starts with its unison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rootedness {
    Rooted,
    Rootless,
}

/// An ordered sequence of intervals with a continuation offset and degree list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    steps: Vec<DiatonicInterval>,
    continuation_offset: DiatonicInterval,
    degree_list: Vec<i32>,
}

impl Scale {
    /// Create a scale, checking lengths, rootedness and prototypes.
    pub fn new(
        steps: Vec<DiatonicInterval>,
        continuation_offset: DiatonicInterval,
        degree_list: Vec<i32>,
    ) -> Result<Self> {
        if steps.is_empty() {
            return Err(TheoryError::argument("a scale needs at least one step"));
        }
        if steps.len() != degree_list.len() {
            return Err(TheoryError::argument(format!(
                "scale has {} steps but {} degrees",
                steps.len(),
                degree_list.len()
            )));
        }
        if let Some(index) = steps.iter().skip(1).position(DiatonicInterval::is_unison) {
            return Err(TheoryError::argument(format!(
                "the unison may only be the first step, found at index {}",
                index + 1
            )));
        }

        let prototype = steps[0].prototype();
        let foreign = steps
            .iter()
            .chain(iter::once(&continuation_offset))
            .any(|s| !Arc::ptr_eq(s.prototype(), prototype) && **s.prototype() != **prototype);
        if foreign {
            return Err(TheoryError::argument(
                "all intervals of a scale must share one prototype",
            ));
        }

        Ok(Self {
            steps,
            continuation_offset,
            degree_list,
        })
    }

    /// Create a scale from interval strings, e.g. `["p1+", "p2+"]`, `"d2+"`.
    pub fn parse(
        steps: &[&str],
        continuation: &str,
        degree_list: Vec<i32>,
        prototype: &Arc<DiatonicPrototype>,
    ) -> Result<Self> {
        let steps = steps
            .iter()
            .map(|s| DiatonicInterval::parse(s, prototype))
            .collect::<Result<Vec<_>>>()?;
        let continuation = DiatonicInterval::parse(continuation, prototype)?;
        Self::new(steps, continuation, degree_list)
    }

    pub fn steps(&self) -> &[DiatonicInterval] {
        &self.steps
    }

    pub fn continuation_offset(&self) -> &DiatonicInterval {
        &self.continuation_offset
    }

    pub fn degree_list(&self) -> &[i32] {
        &self.degree_list
    }

    pub fn prototype(&self) -> &Arc<DiatonicPrototype> {
        self.steps[0].prototype()
    }

    pub fn rootedness(&self) -> Rootedness {
        if self.steps[0].is_unison() {
            Rootedness::Rooted
        } else {
            Rootedness::Rootless
        }
    }

    /// Number of steps, not the span they cover
    pub fn length(&self) -> usize {
        self.steps.len()
    }

    /// Rotate to the `mode_number`-th mode (1 is the scale itself).
    ///
    /// The ring `steps[1..] + [continuation]` is rotated left; its last element
    /// becomes the new continuation and the first step stays in place. Mode
    /// numbers past the ring length wrap around for the steps; the degree
    /// list is rotated `mode_number - 1` times.
    pub fn get_mode(&self, mode_number: i32) -> Result<Scale> {
        if mode_number <= 0 {
            return Err(TheoryError::argument(format!(
                "mode number must be positive, got {}",
                mode_number
            )));
        }

        let mut ring: Vec<DiatonicInterval> = self.steps[1..]
            .iter()
            .cloned()
            .chain(iter::once(self.continuation_offset.clone()))
            .collect();
        let shift = (mode_number as usize - 1) % ring.len();
        ring.rotate_left(shift);

        let continuation = match ring.pop() {
            Some(last) => last,
            None => self.continuation_offset.clone(),
        };
        let steps = iter::once(self.steps[0].clone()).chain(ring).collect();

        let degrees = rotate_degrees_times(&self.degree_list, mode_number as usize - 1);

        debug!(mode = mode_number, shift, "rotated scale {}", self);
        Scale::new(steps, continuation, degrees)
    }

    /// Interval covered by `steps[1..]`, ignoring the root and continuation.
    pub fn scale_span(&self) -> Result<DiatonicInterval> {
        self.fold_span(self.steps[1..].iter().cloned())
    }

    /// Like [`Scale::scale_span`] but every step counted as ascending.
    pub fn scale_cum_span(&self) -> Result<DiatonicInterval> {
        self.fold_span(self.steps[1..].iter().map(DiatonicInterval::abs))
    }

    /// Each partial sum keeps the spelling that agrees with letter
    /// arithmetic, or the first candidate when none does.
    fn fold_span(&self, mut steps: impl Iterator<Item = DiatonicInterval>) -> Result<DiatonicInterval> {
        steps.try_fold(DiatonicInterval::unison(self.prototype()), |acc, step| {
            if let Some(preferred) = acc.preferred_sum(&step) {
                return Ok(preferred);
            }
            acc.add(&step)
                .into_iter()
                .next()
                .ok_or(TheoryError::Unrepresentable {
                    semitones: acc.signed_length() + step.signed_length(),
                })
        })
    }

    /// Largest of `steps[1..]` by size; `None` for a single-step scale
    pub fn widest_consec_interval(&self) -> Option<DiatonicInterval> {
        self.steps[1..].iter().max().cloned()
    }

    /// Stack `other` on top of `self` through `self`'s continuation offset.
    ///
    /// `other`'s degrees are shifted up by the highest degree of `self`. A
    /// rooted `other` loses its unison, whose degree then labels the joining
    /// continuation; a rootless `other` keeps all of its steps and the joining
    /// continuation is labelled as its shifted implicit root.
    pub fn concat(&self, other: &Scale) -> Result<Scale> {
        let shift = self.degree_list.iter().copied().max().unwrap_or(0);

        let mut steps = self.steps.clone();
        steps.push(self.continuation_offset.clone());
        let mut degrees = self.degree_list.clone();

        match other.rootedness() {
            Rootedness::Rooted => steps.extend(other.steps[1..].iter().cloned()),
            Rootedness::Rootless => {
                steps.extend(other.steps.iter().cloned());
                degrees.push(1 + shift);
            }
        }
        degrees.extend(other.degree_list.iter().map(|d| d + shift));

        Scale::new(steps, other.continuation_offset.clone(), degrees)
    }

    /// `self` concatenated with itself `times - 1` times.
    pub fn repeat(&self, times: i32) -> Result<Scale> {
        if times < 1 {
            return Err(TheoryError::argument(format!(
                "repeat count must be at least 1, got {}",
                times
            )));
        }
        (1..times).try_fold(self.clone(), |acc, _| acc.concat(self))
    }

    /// Every step measured from the root, correctly spelled.
    ///
    /// Starting from the first step, each running sum is spelled as the
    /// candidate whose number equals that step's degree. The continuation is
    /// resolved last, landing on the start of the next period; its degree is
    /// the last degree moved by the continuation's letter steps. When no
    /// spelling lands on that degree the preferred sum is used instead, so a
    /// scale whose steps spell never fails on its continuation. The result
    /// therefore holds `length() + 1` intervals.
    pub fn absolute_scale_repr(&self) -> Result<Vec<DiatonicInterval>> {
        let mut absolute = Vec::with_capacity(self.steps.len() + 1);
        absolute.push(self.steps[0].clone());

        for (index, (step, &degree)) in self
            .steps
            .iter()
            .zip(self.degree_list.iter())
            .enumerate()
            .skip(1)
        {
            let next = spell(&absolute[index - 1], step, degree, index)?;
            absolute.push(next);
        }

        let last_degree = self.degree_list[self.degree_list.len() - 1];
        let landing_degree = last_degree + self.continuation_offset.signed_steps();
        let previous = &absolute[absolute.len() - 1];
        let continuation = &self.continuation_offset;
        let landing = match spell(previous, continuation, landing_degree, self.steps.len()) {
            Ok(landing) => landing,
            Err(_) => {
                debug!(
                    degree = landing_degree,
                    "continuation lands off its letter, keeping the preferred spelling"
                );
                previous
                    .preferred_sum(continuation)
                    .or_else(|| previous.add(continuation).into_iter().next())
                    .ok_or(TheoryError::Unrepresentable {
                        semitones: previous.signed_length() + continuation.signed_length(),
                    })?
            }
        };
        absolute.push(landing);

        Ok(absolute)
    }

    /// Root-relative signed semitones of every step plus the continuation
    pub fn absolute_semitones(&self) -> Vec<Semitones> {
        self.steps
            .iter()
            .chain(iter::once(&self.continuation_offset))
            .scan(0, |total, step| {
                *total += step.signed_length();
                Some(*total)
            })
            .collect()
    }
}

/// Drop the first degree, lower the rest by the first gap, re-append the last.
fn rotate_degrees(degrees: &[i32]) -> Vec<i32> {
    if degrees.len() < 2 {
        return degrees.to_vec();
    }
    let gap = degrees[1] - degrees[0];
    let last = degrees[degrees.len() - 1];
    degrees[1..]
        .iter()
        .map(|d| d - gap)
        .chain(iter::once(last))
        .collect()
}

/// Apply [`rotate_degrees`] `times` times, short-cutting once the rotation cycles.
fn rotate_degrees_times(degrees: &[i32], times: usize) -> Vec<i32> {
    let mut seen = vec![degrees.to_vec()];
    while seen.len() <= times {
        let next = rotate_degrees(&seen[seen.len() - 1]);
        if let Some(start) = seen.iter().position(|d| *d == next) {
            let period = seen.len() - start;
            return seen[start + (times - start) % period].clone();
        }
        seen.push(next);
    }
    seen.pop().unwrap_or_else(|| degrees.to_vec())
}

fn spell(
    previous: &DiatonicInterval,
    step: &DiatonicInterval,
    degree: i32,
    index: usize,
) -> Result<DiatonicInterval> {
    let candidates = previous.add(step);
    trace!(
        index,
        degree,
        "{} + {} -> {}",
        previous,
        step,
        join(&candidates)
    );

    candidates
        .iter()
        .find(|c| i64::from(c.number()) == i64::from(degree))
        .cloned()
        .ok_or_else(|| {
            debug!(index, degree, "no spelling for scale step");
            TheoryError::UnspellableScale {
                index,
                degree,
                candidates: join(&candidates),
            }
        })
}

fn join(intervals: &[DiatonicInterval]) -> String {
    intervals
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self
            .degree_list
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "[{}], {}, [{}]",
            join(&self.steps),
            self.continuation_offset,
            degrees
        )
    }
}
