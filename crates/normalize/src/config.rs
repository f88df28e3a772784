//! Configuration for the title normalization pipeline.
//!
//! The `version` field exists for determinism: any change to normalization
//! behavior (even a bug fix) must bump it, so callers can tell which ruleset
//! produced a given canonical form. For a given version the output is stable
//! across machines, operating systems, and locales.

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Controls which normalization steps run.
///
/// The default configuration enables every step and is what the plain
/// [`normalize`](crate::normalize) entry point uses. Individual steps can be
/// switched off for diagnostics, but grouping behavior is only specified for
/// the defaults.
///
/// Serializes to plain JSON/YAML:
///
/// ```json
/// {
///   "version": 1,
///   "strip_diacritics": true,
///   "split_hyphens": true,
///   "abbreviate_units": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization ruleset. Must be >= 1;
    /// version 0 is reserved and rejected.
    pub version: u32,

    /// If true, decompose accented characters (NFD) and drop combining
    /// marks, yielding ASCII-equivalent letters ("feijão" → "feijao").
    pub strip_diacritics: bool,

    /// If true, replace every hyphen with a single space so hyphenated and
    /// spaced spellings compare equal ("semi-desnatado" ≡ "semi desnatado").
    pub split_hyphens: bool,

    /// If true, rewrite spelled-out unit words to their abbreviations
    /// ("litro" → "l", "quilo" → "kg"). Plain substring replacement,
    /// deliberately not word-boundary aware.
    pub abbreviate_units: bool,
}

impl NormalizeConfig {
    /// Checks structural validity. Version 0 is the only rejected state.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.version == 0 {
            return Err(NormalizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_diacritics: true,
            split_hyphens: true,
            abbreviate_units: true,
        }
    }
}
