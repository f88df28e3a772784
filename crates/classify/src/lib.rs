//! Grouping-key extraction for normalized listing titles.
//!
//! Given a title already canonicalized by the `listing-normalize` crate, this
//! layer decides which real-world product it denotes. A fixed, ordered table
//! of category rules is scanned with plain substring containment; the first
//! rule whose type marker appears in the title wins. Within the winning rule,
//! variant and brand markers are checked independently, each short-circuiting
//! on its first hit. Size extraction runs regardless of the rule outcome.
//!
//! The result is a [`GroupingKey`]: four tokens (type, brand, variant, size)
//! whose exact equality is the sole criterion for "same product". Everything
//! outside the recognized markers and the size pattern is ignored, so the key
//! is deliberately coarse.
//!
//! ## Failure semantics
//!
//! [`extract_key`] never fails. A marker that does not match leaves its field
//! as the empty token; a title with no recognized markers at all produces the
//! all-empty key (`"---"` when displayed), which groups every unclassified
//! title into one bucket. That is accepted degradation, not an error.

mod engine;
mod key;
mod rules;

pub use crate::engine::{extract_key, extract_size};
pub use crate::key::{GroupingKey, KEY_SEPARATOR};
pub use crate::rules::{CategoryRule, BUILTIN_RULES};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milk_title_extracts_full_key() {
        let key = extract_key("leite integral piracanjuba 1l");
        assert_eq!(key.product_type, "leite");
        assert_eq!(key.brand, "piracanjuba");
        assert_eq!(key.variant, "integral");
        assert_eq!(key.size, "1l");
        assert_eq!(key.to_string(), "leite-piracanjuba-integral-1l");
    }

    #[test]
    fn rice_title_extracts_full_key() {
        let key = extract_key("arroz branco tio joao 5kg");
        assert_eq!(key.to_string(), "arroz-tio joao-branco-5kg");
    }

    #[test]
    fn beans_title_extracts_full_key() {
        let key = extract_key("feijao carioca camil 1kg");
        assert_eq!(key.to_string(), "feijao-camil-carioca-1kg");
    }

    #[test]
    fn semi_desnatado_wins_over_desnatado() {
        let key = extract_key("leite semi desnatado parmalat 1l");
        assert_eq!(key.variant, "semi desnatado");
    }

    #[test]
    fn plain_desnatado_still_matches() {
        let key = extract_key("leite desnatado italac 1l");
        assert_eq!(key.variant, "desnatado");
    }

    #[test]
    fn first_type_marker_wins_no_fallback() {
        // "integral" is a variant of both leite and arroz; the type decides
        // which rule scans it, and leite is declared first.
        let key = extract_key("leite integral com arroz");
        assert_eq!(key.product_type, "leite");
        assert_eq!(key.variant, "integral");
    }

    #[test]
    fn missing_markers_degrade_to_empty_tokens() {
        let key = extract_key("leite 1l");
        assert_eq!(key.product_type, "leite");
        assert_eq!(key.brand, "");
        assert_eq!(key.variant, "");
        assert_eq!(key.size, "1l");
        assert_eq!(key.to_string(), "leite---1l");
    }

    #[test]
    fn unclassified_title_yields_all_empty_key() {
        let key = extract_key("produto generico xyz");
        assert!(key.is_unclassified());
        assert_eq!(key.to_string(), "---");
        // Genuinely different unmatched products share the bucket.
        assert_eq!(key, extract_key("outro item sem marcadores"));
    }

    #[test]
    fn size_is_extracted_without_a_type_match() {
        let key = extract_key("qualquer coisa 900g");
        assert_eq!(key.product_type, "");
        assert_eq!(key.size, "900g");
    }
}
