// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for scale libraries.
//!
//! A scale file names a prototype (optional, defaults to the major scale) and
//! a list of scale definitions. Definitions are either literal interval lists
//! or are derived from earlier definitions by mode rotation, concatenation or
//! repetition. Files may be YAML or TOML; the extension decides.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::music::{
    DiatonicInterval, DiatonicPrototype, IntervalSpec, PrototypeConfig, Scale, ScaleLibrary,
};

/// Root of a scale library file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleFile {
    /// Prototype the intervals are judged against
    #[serde(default)]
    pub prototype: Option<PrototypeConfig>,
    /// Start from the built-in scales
    #[serde(default = "default_include_builtins")]
    pub include_builtins: bool,
    /// Scale definitions, resolved in order
    #[serde(default)]
    pub scales: Vec<ScaleDefinition>,
}

fn default_include_builtins() -> bool {
    true
}

impl Default for ScaleFile {
    fn default() -> Self {
        Self {
            prototype: None,
            include_builtins: default_include_builtins(),
            scales: Vec::new(),
        }
    }
}

/// A named scale definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleDefinition {
    pub name: String,
    #[serde(flatten)]
    pub source: ScaleSource,
}

/// Where a scale definition's intervals come from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScaleSource {
    /// Explicit steps, continuation offset and degree list
    Literal {
        steps: Vec<IntervalSpec>,
        continuation: IntervalSpec,
        degrees: Vec<i32>,
    },
    /// The `mode`-th mode of another scale
    Mode { mode_of: String, mode: i32 },
    /// Several scales stacked in order
    Concat { concat: Vec<String> },
    /// One scale stacked on itself
    Repeat { repeat_of: String, times: i32 },
}

impl ScaleFile {
    /// Load a scale file, choosing TOML or YAML by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scale file: {:?}", path))?;
        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        }
        .with_context(|| format!("Invalid scale file: {:?}", path))?;
        info!(path = ?path, scales = file.scales.len(), "loaded scale file");
        Ok(file)
    }

    /// Parse a scale file from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML scale file")
    }

    /// Parse a scale file from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML scale file")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize scale file to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize scale file to TOML")
    }

    /// Save to a file, choosing TOML or YAML by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => self.to_toml()?,
            _ => self.to_yaml()?,
        };
        fs::write(path, text).with_context(|| format!("Failed to write scale file: {:?}", path))
    }

    /// Validate the prototype and resolve every definition into a library.
    pub fn build(&self) -> Result<ScaleLibrary> {
        let prototype = match &self.prototype {
            Some(config) => DiatonicPrototype::new(config.clone())
                .context("Invalid prototype in scale file")?,
            None => DiatonicPrototype::major(),
        };
        let prototype = Arc::new(prototype);

        let mut library = if self.include_builtins {
            ScaleLibrary::with_builtins(Arc::clone(&prototype))
                .context("Built-in scales do not fit this prototype")?
        } else {
            ScaleLibrary::new(Arc::clone(&prototype))
        };

        for def in &self.scales {
            let scale = def
                .resolve(&library)
                .with_context(|| format!("Failed to build scale '{}'", def.name))?;
            if library.contains(&def.name) {
                warn!(name = %def.name, "scale definition replaces an existing scale");
            }
            debug!(name = %def.name, "{}", scale);
            library.register(&def.name, scale);
        }

        Ok(library)
    }
}

impl ScaleDefinition {
    /// Build this definition against the scales defined so far
    pub fn resolve(&self, library: &ScaleLibrary) -> Result<Scale> {
        let lookup = |name: &str| {
            library
                .get(name)
                .ok_or_else(|| anyhow!("unknown scale '{}'", name))
        };

        let scale = match &self.source {
            ScaleSource::Literal {
                steps,
                continuation,
                degrees,
            } => {
                let prototype = library.prototype();
                let steps = steps
                    .iter()
                    .map(|&s| DiatonicInterval::new(s, prototype))
                    .collect::<Result<Vec<_>, _>>()?;
                let continuation = DiatonicInterval::new(*continuation, prototype)?;
                Scale::new(steps, continuation, degrees.clone())?
            }
            ScaleSource::Mode { mode_of, mode } => lookup(mode_of)?.get_mode(*mode)?,
            ScaleSource::Concat { concat } => {
                let (first, rest) = concat
                    .split_first()
                    .ok_or_else(|| anyhow!("concat needs at least one scale"))?;
                let mut scale = lookup(first)?.clone();
                for name in rest {
                    scale = scale.concat(lookup(name)?)?;
                }
                scale
            }
            ScaleSource::Repeat { repeat_of, times } => lookup(repeat_of)?.repeat(*times)?,
        };

        if scale.prototype().as_ref() != library.prototype().as_ref() {
            bail!("scale '{}' uses a different prototype", self.name);
        }
        Ok(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn spelled(library: &ScaleLibrary, name: &str) -> Vec<String> {
        library
            .get(name)
            .unwrap()
            .absolute_scale_repr()
            .unwrap()
            .iter()
            .map(|i| i.to_string())
            .collect()
    }

    #[test]
    fn test_parse_scale_file() {
        let yaml = r#"
scales:
  - name: tetrachord
    steps: [p1+, p2+, p2+, d2+]
    continuation: p2+
    degrees: [1, 2, 3, 4]

  - name: hyper_lydian
    repeat_of: tetrachord
    times: 3

  - name: my_lydian
    mode_of: ionian
    mode: 4

  - name: double
    concat: [tetrachord, tetrachord]
"#;

        let file = ScaleFile::from_yaml(yaml).unwrap();
        assert!(file.include_builtins);
        assert!(file.prototype.is_none());
        assert_eq!(file.scales.len(), 4);
        assert_eq!(file.scales[0].name, "tetrachord");
        assert!(matches!(file.scales[0].source, ScaleSource::Literal { .. }));
        assert_eq!(
            file.scales[1].source,
            ScaleSource::Repeat {
                repeat_of: "tetrachord".to_string(),
                times: 3
            }
        );
        assert!(matches!(file.scales[2].source, ScaleSource::Mode { mode: 4, .. }));
        assert!(matches!(file.scales[3].source, ScaleSource::Concat { .. }));
    }

    #[test]
    fn test_build_library() {
        let yaml = r#"
scales:
  - name: tetrachord
    steps: [p1+, p2+, p2+, d2+]
    continuation: p2+
    degrees: [1, 2, 3, 4]
  - name: double
    concat: [tetrachord, tetrachord]
  - name: my_lydian
    mode_of: ionian
    mode: 4
"#;
        let library = ScaleFile::from_yaml(yaml).unwrap().build().unwrap();
        assert_eq!(library.get("double").unwrap().length(), 8);
        assert_eq!(
            spelled(&library, "my_lydian"),
            vec!["p1+", "p2+", "p3+", "a4+", "p5+", "p6+", "p7+", "p8+"]
        );
        assert_eq!(
            spelled(&library, "double"),
            vec!["p1+", "p2+", "p3+", "p4+", "p5+", "p6+", "p7+", "p8+", "p9+"]
        );
    }

    #[test]
    fn test_build_errors() {
        let unknown = "scales:\n  - name: x\n    mode_of: bebop\n    mode: 2\n";
        let err = ScaleFile::from_yaml(unknown).unwrap().build().unwrap_err();
        assert!(format!("{:#}", err).contains("unknown scale 'bebop'"));

        let bad_mode = "scales:\n  - name: x\n    mode_of: ionian\n    mode: 0\n";
        assert!(ScaleFile::from_yaml(bad_mode).unwrap().build().is_err());

        let no_builtins = "include_builtins: false\nscales:\n  - name: x\n    repeat_of: ionian\n    times: 2\n";
        assert!(ScaleFile::from_yaml(no_builtins).unwrap().build().is_err());

        let bad_syntax = "scales:\n  - name: x\n    steps: [p1+, x2+]\n    continuation: p2+\n    degrees: [1, 2]\n";
        assert!(ScaleFile::from_yaml(bad_syntax).is_err());

        let dim_unison = "scales:\n  - name: x\n    steps: [p1+, d1+]\n    continuation: p2+\n    degrees: [1, 2]\n";
        assert!(ScaleFile::from_yaml(dim_unison).unwrap().build().is_err());

        let illegal = "scales:\n  - name: x\n    steps: [p1+, a7+]\n    continuation: p2+\n    degrees: [1, 2]\n";
        assert!(ScaleFile::from_yaml(illegal).unwrap().build().is_err());
    }

    #[test]
    fn test_custom_prototype() {
        let yaml = r#"
include_builtins: false
prototype:
  steps: [0, 2, 2, 2, 2, 1]
  continuation: 1
  letters: [c, d, e, f, g, a]
  perfect: [1]
scales:
  - name: hexachord
    steps: [p1+, p2+, p2+, p2+, p2+, d2+]
    continuation: d2+
    degrees: [1, 2, 3, 4, 5, 6]
"#;
        let library = ScaleFile::from_yaml(yaml).unwrap().build().unwrap();
        assert_eq!(library.prototype().scale_size(), 6);
        assert_eq!(library.prototype().block_size(), 10);
        assert_eq!(library.len(), 1);
        assert_eq!(
            spelled(&library, "hexachord"),
            vec!["p1+", "p2+", "p3+", "p4+", "p5+", "p6+", "p7+"]
        );
    }

    #[test]
    fn test_toml_file() {
        let text = r#"
[[scales]]
name = "tetrachord"
steps = ["p1+", "p2+", "p2+", "d2+"]
continuation = "p2+"
degrees = [1, 2, 3, 4]
"#;
        let file = ScaleFile::from_toml(text).unwrap();
        assert_eq!(file.scales.len(), 1);
        let library = file.build().unwrap();
        assert!(library.contains("tetrachord"));
    }

    #[test]
    fn test_round_trip_files() {
        let dir = tempdir().unwrap();
        let yaml = r#"
scales:
  - name: tetrachord
    steps: [p1+, p2+, p2+, d2+]
    continuation: p2+
    degrees: [1, 2, 3, 4]
  - name: double
    concat: [tetrachord, tetrachord]
"#;
        let file = ScaleFile::from_yaml(yaml).unwrap();

        let yaml_path = dir.path().join("scales.yaml");
        file.save(&yaml_path).unwrap();
        assert_eq!(ScaleFile::load(&yaml_path).unwrap(), file);

        let toml_path = dir.path().join("scales.toml");
        file.save(&toml_path).unwrap();
        assert_eq!(ScaleFile::load(&toml_path).unwrap(), file);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"scales: [").unwrap();

        assert!(ScaleFile::load(&path).is_err());
        assert!(ScaleFile::load(dir.path().join("missing.yaml")).is_err());
    }
}
