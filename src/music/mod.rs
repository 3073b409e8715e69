// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory algebra.
//!
//! This module provides semitone arithmetic, the diatonic prototype that
//! interval names are judged against, named diatonic intervals and scales
//! composed from them.

pub mod error;
pub mod interval;
pub mod library;
pub mod prototype;
pub mod scale;
pub mod semitone;

pub use error::{Result, TheoryError};
pub use interval::{DiatonicInterval, Direction, IntervalSpec, Quality};
pub use library::ScaleLibrary;
pub use prototype::{DiatonicPrototype, PrototypeConfig};
pub use scale::{Rootedness, Scale};
pub use semitone::SemitoneInterval;
