use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;
use crate::units::abbreviate_units;
use crate::whitespace::collapse_whitespace;

/// Canonicalizes a raw product title with the default configuration.
///
/// Total over any input: the empty string normalizes to the empty string,
/// and no input can fail. See the crate docs for the step order.
pub fn normalize(title: &str) -> String {
    normalize_inner(title, &NormalizeConfig::default())
}

/// Main entry point for callers with an explicit configuration.
///
/// Validates the config, then runs the enabled steps in the fixed order.
pub fn normalize_with(title: &str, cfg: &NormalizeConfig) -> Result<String, NormalizeError> {
    cfg.validate()?;
    Ok(normalize_inner(title, cfg))
}

/// The pipeline proper. Step order matters: each step's output feeds the
/// next, so unit abbreviation sees hyphen-free lowercase text and the final
/// whitespace collapse cleans up anything the earlier replacements left.
fn normalize_inner(title: &str, cfg: &NormalizeConfig) -> String {
    let mut text = title.to_lowercase();
    if cfg.strip_diacritics {
        text = strip_diacritics(&text);
    }
    if cfg.split_hyphens {
        text = text.replace('-', " ");
    }
    if cfg.abbreviate_units {
        text = abbreviate_units(&text);
    }
    collapse_whitespace(&text)
}

/// Decomposes accented characters (NFD) and drops the combining marks,
/// reducing acute/grave/circumflex/tilde/cedilla forms to their base letter.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_diacritics_covers_portuguese_marks() {
        assert_eq!(strip_diacritics("ação"), "acao");
        assert_eq!(strip_diacritics("pêssego"), "pessego");
        assert_eq!(strip_diacritics("maçã"), "maca");
        assert_eq!(strip_diacritics("sem acento"), "sem acento");
    }

    #[test]
    fn step_order_lets_units_see_hyphen_free_text() {
        // "1-Litro" only becomes "1 l" because hyphens split first.
        assert_eq!(normalize("Leite 1-Litro"), "leite 1 l");
    }

    #[test]
    fn disabled_steps_are_skipped() {
        let cfg = NormalizeConfig {
            split_hyphens: false,
            abbreviate_units: false,
            ..Default::default()
        };
        let out = normalize_with("Semi-Desnatado 1 Litro", &cfg).expect("valid config");
        assert_eq!(out, "semi-desnatado 1 litro");
    }
}
