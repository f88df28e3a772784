//! Listing title normalization layer.
//!
//! This crate turns a raw product title into a deterministic, comparable
//! lowercase form. Downstream stages (classification, grouping) rely on this
//! for stable identity between differently-worded listings.
//!
//! ## What we do
//!
//! - Locale-insensitive lowercasing
//! - Diacritic stripping (NFD decomposition, combining marks dropped)
//! - Hyphens unified to spaces
//! - Unit words abbreviated ("litro" → "l", "quilo" → "kg")
//! - Whitespace collapsed to single spaces, edges trimmed
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same title and config,
//! same output on any machine. The default-config entry point [`normalize`]
//! is total: any input, including the empty string, produces a result.
//!
//! ## Invariants worth knowing
//!
//! - Step order is fixed; each step feeds the next
//! - Normalization is idempotent: `normalize(normalize(x)) == normalize(x)`
//! - Output depends only on title + config

mod config;
mod error;
mod pipeline;
mod units;
mod whitespace;

pub use crate::config::NormalizeConfig;
pub use crate::error::NormalizeError;
pub use crate::pipeline::{normalize, normalize_with, strip_diacritics};
pub use crate::units::{abbreviate_units, UNIT_SYNONYMS};
pub use crate::whitespace::collapse_whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize_default() {
        let out = normalize("  Leite   Integral\tPiracanjuba 1L ");
        assert_eq!(out, "leite integral piracanjuba 1l");
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(normalize("Feijão Carioca Camil"), "feijao carioca camil");
        assert_eq!(normalize("Açúcar Cristal"), "acucar cristal");
        // Composed and decomposed forms collapse to the same output.
        assert_eq!(normalize("Caf\u{00E9}"), normalize("Cafe\u{0301}"));
    }

    #[test]
    fn hyphens_become_spaces() {
        assert_eq!(normalize("Leite Semi-Desnatado"), "leite semi desnatado");
        assert_eq!(
            normalize("Leite Semi-Desnatado"),
            normalize("Leite Semi Desnatado")
        );
    }

    #[test]
    fn unit_words_are_abbreviated() {
        assert_eq!(normalize("Leite 1 Litro"), "leite 1 l");
        assert_eq!(normalize("Arroz 1 Quilo"), "arroz 1 kg");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let titles = [
            "Leite Semi-Desnatado Italac 1 Litro",
            "FEIJÃO Carioca CAMIL 1 Quilo",
            "Produto Genérico XYZ",
            "",
        ];
        for title in titles {
            let once = normalize(title);
            assert_eq!(normalize(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn steps_can_be_disabled() {
        let cfg = NormalizeConfig {
            strip_diacritics: false,
            ..Default::default()
        };
        let out = normalize_with("Feijão", &cfg).expect("valid config");
        assert_eq!(out, "feijão");
    }

    #[test]
    fn invalid_config_version_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        let res = normalize_with("Leite", &cfg);
        assert!(matches!(res, Err(NormalizeError::InvalidConfig(_))));
    }
}
