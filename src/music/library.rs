// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named scale registry with the common built-in scales.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::error::Result;
use super::prototype::DiatonicPrototype;
use super::scale::Scale;

/// Church mode names in mode-number order
pub const CHURCH_MODES: [&str; 7] = [
    "ionian",
    "dorian",
    "phrygian",
    "lydian",
    "mixolydian",
    "aeolian",
    "locrian",
];

/// Registry of scales by name, all sharing one prototype
#[derive(Debug, Clone)]
pub struct ScaleLibrary {
    prototype: Arc<DiatonicPrototype>,
    scales: HashMap<String, Scale>,
}

impl ScaleLibrary {
    /// Create an empty library
    pub fn new(prototype: Arc<DiatonicPrototype>) -> Self {
        Self {
            prototype,
            scales: HashMap::new(),
        }
    }

    /// Create a library holding the built-in scales.
    ///
    /// The spellings assume a seven-letter prototype such as
    /// [`DiatonicPrototype::major`].
    pub fn with_builtins(prototype: Arc<DiatonicPrototype>) -> Result<Self> {
        let mut library = Self::new(prototype);
        let p = Arc::clone(&library.prototype);

        let ionian = Scale::parse(
            &["p1+", "p2+", "p2+", "d2+", "p2+", "p2+", "p2+"],
            "d2+",
            (1..=7).collect(),
            &p,
        )?;
        for (mode, name) in (1..).zip(CHURCH_MODES) {
            library.register(name, ionian.get_mode(mode)?);
        }
        library.register("major", ionian);

        library.register(
            "lydian_tetrachord",
            Scale::parse(&["p1+", "p2+", "p2+", "d2+"], "p2+", vec![1, 2, 3, 4], &p)?,
        );
        library.register(
            "major_pentatonic",
            Scale::parse(&["p2+", "p2+", "d3+", "p2+"], "d3+", vec![2, 3, 5, 6], &p)?,
        );
        library.register(
            "whole_tone",
            Scale::parse(
                &["p1+", "p2+", "p2+", "p2+", "p2+", "p2+"],
                "dd3+",
                vec![1, 2, 3, 4, 5, 6],
                &p,
            )?,
        );
        library.register(
            "melodic_minor",
            Scale::parse(
                &["p2+", "d2+", "p2+", "p2+", "p2+", "p2+"],
                "d2+",
                vec![2, 3, 4, 5, 6, 7],
                &p,
            )?,
        );

        debug!(count = library.len(), "loaded built-in scales");
        Ok(library)
    }

    pub fn prototype(&self) -> &Arc<DiatonicPrototype> {
        &self.prototype
    }

    /// Register a scale, replacing any scale with the same name.
    /// Names are stored lowercased.
    pub fn register(&mut self, name: impl AsRef<str>, scale: Scale) {
        self.scales.insert(normalize(name.as_ref()), scale);
    }

    /// Look up a scale by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Scale> {
        self.scales.get(&normalize(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scales.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
