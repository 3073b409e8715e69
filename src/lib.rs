// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic interval and scale algebra.
//!
//! Semitone arithmetic lives in [`music::SemitoneInterval`], enharmonically
//! spelled intervals in [`music::DiatonicInterval`], and scales built by
//! composing intervals in [`music::Scale`]. Scale libraries can be loaded from
//! YAML or TOML through [`config::ScaleFile`].

pub mod config;
pub mod music;

pub use music::{
    DiatonicInterval, DiatonicPrototype, Direction, IntervalSpec, Quality, Rootedness, Scale,
    ScaleLibrary, SemitoneInterval, TheoryError,
};
