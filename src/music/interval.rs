// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named diatonic intervals.
//!
//! An interval is written `quality number direction`, e.g. `p5+` (pure fifth
//! up), `a4+` (augmented fourth up) or `dd3-` (doubly diminished third down).
//! [`IntervalSpec`] is the bare syntax; [`DiatonicInterval`] is a spec that has
//! been validated against a [`DiatonicPrototype`].
//!
//! Addition works on semitones and returns every enharmonic spelling of the
//! result. A major third plus a major third is eight semitones, which is both
//! an augmented fifth and a diminished sixth; only the caller knows which
//! scale degree it wants, so [`DiatonicInterval::add`] returns both.
//!
//! Two comparison relations exist side by side:
//!
//! * `==` / [`DiatonicInterval::enharm_eq`] compare names, so `a4+ != d5+`.
//! * [`DiatonicInterval::size_cmp`] and friends compare signed semitone size,
//!   so `a4+` and `d5+` tie. Any `a(x)` ties with `d(x+1)` when letters `x`
//!   and `x+1` are a whole step apart; across the half step between the 3rd
//!   and 4th it is `p3` that ties `d4` and `a3` that ties `p4` instead.
//!
//! [`Ord`] is a canonical total order that refines the size order: equal sizes
//! are broken by direction, then by number (smaller number first going up,
//! larger first going down).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::{Result, TheoryError};
use super::prototype::DiatonicPrototype;
use super::semitone::{SemitoneInterval, Semitones};

/// Whether an interval goes up or down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// `+1` or `-1`
    pub fn sign(self) -> i32 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Ascending => '+',
            Direction::Descending => '-',
        }
    }

    /// Direction of a signed semitone count; a unison counts as ascending
    pub fn of(semitones: Semitones) -> Self {
        if semitones < 0 {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Interval quality relative to the prototype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Pure,
    /// Raised by this many semitones
    Augmented(u32),
    /// Lowered by this many semitones
    Diminished(u32),
}

impl Quality {
    /// Semitone offset from the pure interval
    pub fn offset(self) -> Semitones {
        match self {
            Quality::Pure => 0,
            Quality::Augmented(n) => n as Semitones,
            Quality::Diminished(n) => -(n as Semitones),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Quality::Pure => write!(f, "p"),
            Quality::Augmented(n) => write!(f, "{}", "a".repeat(n as usize)),
            Quality::Diminished(n) => write!(f, "{}", "d".repeat(n as usize)),
        }
    }
}

/// Syntax of an interval: quality, number, direction
///
/// Parsing only checks the grammar and that the number is positive; musical
/// legality is checked by [`DiatonicInterval::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IntervalSpec {
    pub quality: Quality,
    pub number: u32,
    pub direction: Direction,
}

impl IntervalSpec {
    pub fn new(quality: Quality, number: u32, direction: Direction) -> Self {
        Self {
            quality,
            number,
            direction,
        }
    }
}

impl FromStr for IntervalSpec {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let direction = match text.chars().last() {
            Some('+') => Direction::Ascending,
            Some('-') => Direction::Descending,
            _ => return Err(TheoryError::spec(s, "must end with '+' or '-'")),
        };
        let body = &text[..text.len() - 1];

        let digits_at = body
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| TheoryError::spec(s, "missing interval number"))?;
        let (letters, digits) = body.split_at(digits_at);

        let quality = match letters {
            "p" => Quality::Pure,
            _ if !letters.is_empty() && letters.chars().all(|c| c == 'a') => {
                Quality::Augmented(letters.len() as u32)
            }
            _ if !letters.is_empty() && letters.chars().all(|c| c == 'd') => {
                Quality::Diminished(letters.len() as u32)
            }
            _ => {
                return Err(TheoryError::spec(
                    s,
                    "quality must be 'p' or a run of 'a' or 'd'",
                ))
            }
        };

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(TheoryError::spec(s, "interval number must be an integer"));
        }
        let number: u32 = digits
            .parse()
            .map_err(|_| TheoryError::spec(s, "interval number out of range"))?;
        if number < 1 {
            return Err(TheoryError::spec(s, "interval number must be at least 1"));
        }

        Ok(IntervalSpec {
            quality,
            number,
            direction,
        })
    }
}

impl TryFrom<String> for IntervalSpec {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<IntervalSpec> for String {
    fn from(spec: IntervalSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.quality,
            self.number,
            self.direction.symbol()
        )
    }
}

/// An interval name validated against a prototype
///
/// Equality and hashing use the name only; see the module docs for the size
/// relations.
#[derive(Debug, Clone)]
pub struct DiatonicInterval {
    spec: IntervalSpec,
    reduced_number: u32,
    octave_offset: u32,
    base_length: Semitones,
    prototype: Arc<DiatonicPrototype>,
}

impl DiatonicInterval {
    /// Validate `spec` against `prototype`.
    pub fn new(spec: IntervalSpec, prototype: &Arc<DiatonicPrototype>) -> Result<Self> {
        let text = spec.to_string();
        if spec.number < 1 {
            return Err(TheoryError::spec(&text, "interval number must be at least 1"));
        }
        if matches!(spec.quality, Quality::Augmented(0) | Quality::Diminished(0)) {
            return Err(TheoryError::spec(&text, "quality needs at least one repetition"));
        }

        let (reduced, _) = prototype.reduce_number(spec.number);
        if matches!(spec.quality, Quality::Diminished(_)) && reduced == 1 {
            return Err(TheoryError::spec(&text, "diminished unisons do not exist"));
        }
        if matches!(spec.quality, Quality::Augmented(_)) && reduced == prototype.scale_size() {
            return Err(TheoryError::spec(
                &text,
                format!(
                    "augmented intervals on multiples of {} do not exist",
                    prototype.scale_size()
                ),
            ));
        }

        if checked_length(spec, prototype).is_none() {
            return Err(TheoryError::spec(
                &text,
                format!("interval is wider than {} semitones", Semitones::MAX),
            ));
        }

        Ok(Self::validated(spec, prototype))
    }

    /// Parse and validate an interval such as `"a4+"`.
    pub fn parse(text: &str, prototype: &Arc<DiatonicPrototype>) -> Result<Self> {
        Self::new(text.parse()?, prototype)
    }

    /// `spec` must already satisfy the checks in [`DiatonicInterval::new`].
    fn validated(spec: IntervalSpec, prototype: &Arc<DiatonicPrototype>) -> Self {
        let (reduced_number, octave_offset) = prototype.reduce_number(spec.number);
        // `reduced_number` is in 1..=scale_size for every number >= 1.
        let base_length = match prototype.base_length(reduced_number) {
            Some(length) => length,
            None => unreachable!("{} reduced to {} outside the prototype", spec, reduced_number),
        };
        Self {
            spec,
            reduced_number,
            octave_offset,
            base_length,
            prototype: Arc::clone(prototype),
        }
    }

    /// The ascending pure unison `p1+`
    pub fn unison(prototype: &Arc<DiatonicPrototype>) -> Self {
        Self::validated(
            IntervalSpec::new(Quality::Pure, 1, Direction::Ascending),
            prototype,
        )
    }

    /// The ascending pure interval one block up (`p8+` for seven letters)
    pub fn octave(prototype: &Arc<DiatonicPrototype>) -> Self {
        Self::validated(
            IntervalSpec::new(Quality::Pure, prototype.scale_size() + 1, Direction::Ascending),
            prototype,
        )
    }

    /// Every single-quality spelling of a signed semitone count.
    ///
    /// Descending when `semitones < 0`, ascending otherwise. The result is
    /// ordered pure, augmented, diminished and holds at most three entries.
    pub fn from_semitones(semitones: Semitones, prototype: &Arc<DiatonicPrototype>) -> Vec<Self> {
        let direction = Direction::of(semitones);
        prototype
            .candidates(semitones)
            .into_iter()
            .map(|(quality, number)| {
                Self::validated(IntervalSpec::new(quality, number, direction), prototype)
            })
            .collect()
    }

    pub fn spec(&self) -> IntervalSpec {
        self.spec
    }

    pub fn quality(&self) -> Quality {
        self.spec.quality
    }

    pub fn number(&self) -> u32 {
        self.spec.number
    }

    pub fn direction(&self) -> Direction {
        self.spec.direction
    }

    /// Number within a single block, `1..=scale_size`
    pub fn reduced_number(&self) -> u32 {
        self.reduced_number
    }

    /// Whole blocks spanned above the reduced number
    pub fn octave_offset(&self) -> u32 {
        self.octave_offset
    }

    pub fn prototype(&self) -> &Arc<DiatonicPrototype> {
        &self.prototype
    }

    /// Semitone count, ignoring direction
    pub fn length(&self) -> Semitones {
        self.base_length
            + self.spec.quality.offset()
            + self.prototype.block_size() * self.octave_offset as Semitones
    }

    /// Semitone count with the direction's sign
    pub fn signed_length(&self) -> Semitones {
        self.spec.direction.sign() * self.length()
    }

    /// Split into prototype distance and chromatic adjustment, signed
    pub fn semitones(&self) -> SemitoneInterval {
        let sign = self.spec.direction.sign();
        let distance =
            self.base_length + self.prototype.block_size() * self.octave_offset as Semitones;
        SemitoneInterval::new(sign * distance, sign * self.spec.quality.offset())
    }

    /// Letter steps travelled: `number - 1`, signed by direction
    pub fn signed_steps(&self) -> i32 {
        self.spec.direction.sign() * (self.spec.number as i32 - 1)
    }

    /// A pure unison in either direction
    pub fn is_unison(&self) -> bool {
        self.spec.quality == Quality::Pure && self.spec.number == 1
    }

    pub fn reverse_direction(&self) -> Self {
        let mut reversed = self.clone();
        reversed.spec.direction = self.spec.direction.reversed();
        reversed
    }

    /// Same quality and direction, number reduced into one block
    pub fn reduce(&self) -> Self {
        Self::validated(
            IntervalSpec::new(self.spec.quality, self.reduced_number, self.spec.direction),
            &self.prototype,
        )
    }

    /// Ascending version of this interval
    pub fn abs(&self) -> Self {
        match self.spec.direction {
            Direction::Ascending => self.clone(),
            Direction::Descending => self.reverse_direction(),
        }
    }

    /// All spellings of the signed semitone sum, using `self`'s prototype.
    pub fn add(&self, other: &DiatonicInterval) -> Vec<DiatonicInterval> {
        let total = self.semitones() + other.semitones();
        Self::from_semitones(total.size(), &self.prototype)
    }

    /// `self + reverse(other)`
    pub fn sub(&self, other: &DiatonicInterval) -> Vec<DiatonicInterval> {
        self.add(&other.reverse_direction())
    }

    /// Invert with respect to the ascending octave.
    pub fn invert(&self) -> Vec<DiatonicInterval> {
        self.invert_wrt(&Self::octave(&self.prototype))
    }

    /// Invert with respect to `wrt`: `wrt - self`.
    pub fn invert_wrt(&self, wrt: &DiatonicInterval) -> Vec<DiatonicInterval> {
        wrt.sub(self)
    }

    /// The addition candidate whose number agrees with letter arithmetic.
    ///
    /// `p3+ + p3+` spells as `a5+` (3rd plus 3rd is a 5th), not `d6+`.
    pub fn preferred_sum(&self, other: &DiatonicInterval) -> Option<DiatonicInterval> {
        let steps = self.signed_steps() + other.signed_steps();
        self.add(other)
            .into_iter()
            .find(|c| c.signed_steps() == steps)
    }

    /// Compare by signed semitone size only.
    pub fn size_cmp(&self, other: &DiatonicInterval) -> Ordering {
        self.signed_length().cmp(&other.signed_length())
    }

    pub fn less_than(&self, other: &DiatonicInterval) -> bool {
        self.size_cmp(other) == Ordering::Less
    }

    /// Same point on the semitone line
    pub fn size_eq(&self, other: &DiatonicInterval) -> bool {
        self.size_cmp(other) == Ordering::Equal
    }

    /// Identical names: quality, number and direction
    pub fn enharm_eq(&self, other: &DiatonicInterval) -> bool {
        self.spec == other.spec
    }

    /// Quality in conventional terms, using the prototype's perfect set:
    /// `p4` is "perfect", `p3` is "major", `d3` is "minor", `dd3` is "diminished".
    pub fn quality_name(&self) -> String {
        let perfect = self.prototype.is_perfect(self.reduced_number);
        match (self.spec.quality, perfect) {
            (Quality::Pure, true) => "perfect".to_string(),
            (Quality::Pure, false) => "major".to_string(),
            (Quality::Diminished(1), false) => "minor".to_string(),
            (Quality::Diminished(n), true) => repeated("diminished", n),
            (Quality::Diminished(n), false) => repeated("diminished", n - 1),
            (Quality::Augmented(n), _) => repeated("augmented", n),
        }
    }

    /// Conventional name such as "minor third" or "perfect fifth"
    pub fn conventional_name(&self) -> String {
        format!("{} {}", self.quality_name(), ordinal(self.spec.number))
    }

    /// Name in this system's own terms, such as "pure fifth up"
    pub fn long_name(&self) -> String {
        let quality = match self.spec.quality {
            Quality::Pure => "pure".to_string(),
            Quality::Augmented(n) => repeated("augmented", n),
            Quality::Diminished(n) => repeated("diminished", n),
        };
        let direction = match self.spec.direction {
            Direction::Ascending => "up",
            Direction::Descending => "down",
        };
        format!("{} {} {}", quality, ordinal(self.spec.number), direction)
    }
}

fn repeated(word: &str, times: u32) -> String {
    match times {
        1 => word.to_string(),
        2 => format!("doubly {}", word),
        3 => format!("triply {}", word),
        n => format!("{}-times {}", n, word),
    }
}

fn ordinal(number: u32) -> String {
    const NAMES: [&str; 16] = [
        "", "unison", "second", "third", "fourth", "fifth", "sixth", "seventh", "octave", "ninth",
        "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth",
    ];
    if let Some(name) = NAMES.get(number as usize).filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    let suffix = match (number % 10, number % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", number, suffix)
}

impl PartialEq for DiatonicInterval {
    fn eq(&self, other: &Self) -> bool {
        self.enharm_eq(other)
    }
}

impl Eq for DiatonicInterval {}

impl Hash for DiatonicInterval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spec.hash(state);
    }
}

impl PartialOrd for DiatonicInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DiatonicInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        let direction_rank = |d: Direction| match d {
            Direction::Descending => 0,
            Direction::Ascending => 1,
        };
        self.size_cmp(other)
            .then_with(|| direction_rank(self.direction()).cmp(&direction_rank(other.direction())))
            .then_with(|| {
                let by_number = self.number().cmp(&other.number());
                match self.direction() {
                    Direction::Ascending => by_number,
                    Direction::Descending => by_number.reverse(),
                }
            })
            .then_with(|| {
                let by_quality = self.quality().offset().cmp(&other.quality().offset());
                match self.direction() {
                    Direction::Ascending => by_quality,
                    Direction::Descending => by_quality.reverse(),
                }
            })
    }
}

/// Semitone length of `spec`, or `None` when it does not fit [`Semitones`].
fn checked_length(spec: IntervalSpec, prototype: &DiatonicPrototype) -> Option<Semitones> {
    let (reduced, octaves) = prototype.reduce_number(spec.number);
    let offset = match spec.quality {
        Quality::Pure => 0,
        Quality::Augmented(n) => Semitones::try_from(n).ok()?,
        Quality::Diminished(n) => Semitones::try_from(n).ok()?.checked_neg()?,
    };
    Semitones::try_from(spec.number).ok()?;
    prototype
        .block_size()
        .checked_mul(Semitones::try_from(octaves).ok()?)?
        .checked_add(prototype.base_length(reduced)?)?
        .checked_add(offset)
}

impl fmt::Display for DiatonicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proto() -> Arc<DiatonicPrototype> {
        Arc::new(DiatonicPrototype::major())
    }

    fn iv(text: &str) -> DiatonicInterval {
        DiatonicInterval::parse(text, &proto()).unwrap()
    }

    fn names(xs: &[DiatonicInterval]) -> Vec<String> {
        xs.iter().map(|x| x.to_string()).collect()
    }

    /// Every single-quality interval within two octaves, both directions
    fn all_simple() -> Vec<DiatonicInterval> {
        let p = proto();
        let mut out = Vec::new();
        for number in 1..=15 {
            for quality in [Quality::Pure, Quality::Augmented(1), Quality::Diminished(1)] {
                for direction in [Direction::Ascending, Direction::Descending] {
                    if let Ok(x) =
                        DiatonicInterval::new(IntervalSpec::new(quality, number, direction), &p)
                    {
                        out.push(x);
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_parse_spec() {
        let spec: IntervalSpec = "dd3-".parse().unwrap();
        assert_eq!(spec.quality, Quality::Diminished(2));
        assert_eq!(spec.number, 3);
        assert_eq!(spec.direction, Direction::Descending);
        assert_eq!(spec.to_string(), "dd3-");

        let spec: IntervalSpec = "aaa11+".parse().unwrap();
        assert_eq!(spec.quality, Quality::Augmented(3));
        assert_eq!(spec.number, 11);
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["", "p4", "4+", "x4+", "ad4+", "p0+", "p+", "p4*", "P4+", "p-4+", "pp4+"] {
            assert!(
                matches!(
                    bad.parse::<IntervalSpec>(),
                    Err(TheoryError::InvalidIntervalSpec { .. })
                ),
                "{} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_illegal_intervals() {
        let p = proto();
        for bad in ["d1+", "dd1-", "d8+", "a7+", "a14-", "aa21+"] {
            assert!(
                matches!(
                    DiatonicInterval::parse(bad, &p),
                    Err(TheoryError::InvalidIntervalSpec { .. })
                ),
                "{} should be rejected",
                bad
            );
        }
        assert!(DiatonicInterval::parse("a1+", &p).is_ok());
        assert!(DiatonicInterval::parse("d2+", &p).is_ok());
        assert!(DiatonicInterval::parse("a8+", &p).is_ok());
    }

    #[test]
    fn test_oversized_numbers_rejected() {
        let p = proto();
        for bad in ["p2000000000+", "d4294967295-", "a1300000000+"] {
            assert!(
                matches!(
                    DiatonicInterval::parse(bad, &p),
                    Err(TheoryError::InvalidIntervalSpec { .. })
                ),
                "{} should be rejected",
                bad
            );
        }
        let huge = IntervalSpec::new(Quality::Augmented(u32::MAX), 2, Direction::Ascending);
        assert!(DiatonicInterval::new(huge, &p).is_err());

        let wide = iv("p1000000000+");
        assert_eq!(wide.reduced_number(), 6);
        assert_eq!(wide.length(), 1_714_285_713);
        assert_eq!(wide.signed_steps(), 999_999_999);
    }

    #[test]
    fn test_pure_fourth_length() {
        let fourth = iv("p4+");
        assert_eq!(fourth.length(), 5);
        assert_eq!(fourth.reduced_number(), 4);
        assert_eq!(fourth.octave_offset(), 0);
    }

    #[test]
    fn test_lengths() {
        assert_eq!(iv("p1+").length(), 0);
        assert_eq!(iv("d3+").length(), 3);
        assert_eq!(iv("a4+").length(), 6);
        assert_eq!(iv("d5+").length(), 6);
        assert_eq!(iv("aa4+").length(), 7);
        assert_eq!(iv("p8+").length(), 12);
        assert_eq!(iv("p17+").length(), 28);
        assert_eq!(iv("d10-").length(), 15);
        assert_eq!(iv("d10-").signed_length(), -15);
    }

    #[test]
    fn test_length_invariant_under_reduce() {
        for x in all_simple() {
            let block = x.prototype().block_size();
            assert_eq!(
                x.length(),
                x.reduce().length() + block * x.octave_offset() as Semitones,
                "{}",
                x
            );
        }
    }

    #[test]
    fn test_semitone_decomposition() {
        let x = iv("a11-");
        let s = x.semitones();
        assert_eq!(s.distance(), -17);
        assert_eq!(s.adjustment(), -1);
        assert_eq!(s.size(), x.signed_length());
    }

    #[test]
    fn test_reverse_reduce_abs() {
        assert_eq!(iv("a4+").reverse_direction(), iv("a4-"));
        assert_eq!(iv("p12-").reduce(), iv("p5-"));
        assert_eq!(iv("d10+").reduce(), iv("d3+"));
        assert_eq!(iv("p5-").abs(), iv("p5+"));
        assert_eq!(iv("p5+").abs(), iv("p5+"));
    }

    #[test]
    fn test_two_thirds_make_a_fifth() {
        let third = iv("p3+");
        let sum = third.add(&third);
        let fifths: Vec<_> = sum.iter().filter(|c| c.number() == 5).collect();
        assert_eq!(fifths.len(), 1);
        assert_eq!(fifths[0].to_string(), "a5+");
        assert_eq!(fifths[0].length(), 8);
        assert!(sum.iter().all(|c| c.number() != 4));
        assert_eq!(third.preferred_sum(&third), Some(iv("a5+")));
    }

    #[test]
    fn test_add_candidates() {
        assert_eq!(names(&iv("p2+").add(&iv("p2+"))), vec!["p3+", "d4+"]);
        assert_eq!(names(&iv("p5+").add(&iv("p4+"))), vec!["p8+"]);
        assert_eq!(names(&iv("p2+").add(&iv("p3-"))), vec!["p2-"]);
        assert_eq!(names(&iv("p5+").add(&iv("p5-"))), vec!["p1+"]);
        assert_eq!(names(&iv("p7+").add(&iv("a4+"))), vec!["p11+", "a10+"]);
    }

    #[test]
    fn test_addition_soundness() {
        let xs = all_simple();
        for a in &xs {
            for b in &xs {
                let expected = a.signed_length() + b.signed_length();
                let candidates = a.add(b);
                assert!(!candidates.is_empty(), "{} + {}", a, b);
                for c in candidates {
                    assert_eq!(c.signed_length(), expected, "{} + {} -> {}", a, b, c);
                }
            }
        }
    }

    #[test]
    fn test_sub_and_invert() {
        assert_eq!(names(&iv("p5+").sub(&iv("p3+"))), vec!["a2+", "d3+"]);
        assert_eq!(names(&iv("p3+").invert()), vec!["a5+", "d6+"]);
        assert_eq!(names(&iv("p4+").invert()), vec!["p5+"]);
        assert_eq!(names(&iv("p2+").invert_wrt(&iv("p5+"))), vec!["p4+", "a3+"]);
    }

    #[test]
    fn test_enharm_eq_vs_size_eq() {
        let aug_fourth = iv("a4+");
        let dim_fifth = iv("d5+");
        assert!(aug_fourth.size_eq(&dim_fifth));
        assert!(!aug_fourth.enharm_eq(&dim_fifth));
        assert_ne!(aug_fourth, dim_fifth);

        // The half step between the 3rd and 4th shifts the ties.
        assert!(iv("p3+").size_eq(&iv("d4+")));
        assert!(iv("a3+").size_eq(&iv("p4+")));
        assert!(!iv("a3+").size_eq(&iv("d4+")));
        assert!(iv("a2+").size_eq(&iv("d3+")));
        assert!(iv("a9+").size_eq(&iv("d10+")));
    }

    #[test]
    fn test_size_order_properties() {
        let xs = all_simple();
        for a in &xs {
            assert!(a.size_eq(a));
            for b in &xs {
                assert!(!(a.less_than(b) && b.less_than(a)));
                assert_eq!(a.size_eq(b), b.size_eq(a));
                for c in &xs {
                    if a.size_eq(b) && b.size_eq(c) {
                        assert!(a.size_eq(c));
                    }
                }
            }
        }
    }

    #[test]
    fn test_descending_below_ascending() {
        assert!(iv("p8-").less_than(&iv("a1+")));
        assert!(iv("d2-").less_than(&iv("p1+")));
        assert!(iv("p3-").less_than(&iv("p2-")));
    }

    #[test]
    fn test_canonical_order() {
        let mut xs = vec![iv("d5+"), iv("p5+"), iv("a4+"), iv("p4+"), iv("a3+"), iv("p3-")];
        xs.sort();
        assert_eq!(names(&xs), vec!["p3-", "a3+", "p4+", "a4+", "d5+", "p5+"]);

        let mut down = vec![iv("a4-"), iv("d5-")];
        down.sort();
        assert_eq!(names(&down), vec!["d5-", "a4-"]);

        assert!(iv("p1-") < iv("p1+"));
    }

    #[test]
    fn test_names() {
        assert_eq!(iv("p5+").long_name(), "pure fifth up");
        assert_eq!(iv("dd3-").long_name(), "doubly diminished third down");
        assert_eq!(iv("p4+").conventional_name(), "perfect fourth");
        assert_eq!(iv("p3+").conventional_name(), "major third");
        assert_eq!(iv("d3+").conventional_name(), "minor third");
        assert_eq!(iv("dd3+").conventional_name(), "diminished third");
        assert_eq!(iv("d5+").conventional_name(), "diminished fifth");
        assert_eq!(iv("a4+").conventional_name(), "augmented fourth");
        assert_eq!(iv("p8+").conventional_name(), "perfect octave");
        assert_eq!(iv("d10+").conventional_name(), "minor tenth");
        assert_eq!(iv("p22+").conventional_name(), "perfect 22nd");
    }

    #[test]
    fn test_spec_serde() {
        let spec: IntervalSpec = serde_yaml::from_str("a4+").unwrap();
        assert_eq!(spec, IntervalSpec::new(Quality::Augmented(1), 4, Direction::Ascending));
        assert_eq!(serde_yaml::to_string(&spec).unwrap().trim(), "a4+");
        assert!(serde_yaml::from_str::<IntervalSpec>("q4+").is_err());
    }
}
