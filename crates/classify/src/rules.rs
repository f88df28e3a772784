//! The built-in category rule table.
//!
//! A flat, ordered data table rather than per-type dispatch: classification
//! is a priority chain (first rule whose type marker appears wins), and a
//! table keeps the ruleset auditable and trivially extensible. To recognize a
//! new product category, add a row.

/// One product category: its type markers plus the vocabularies scanned once
/// the type has matched.
///
/// All markers are literal substrings tested against the normalized title,
/// so they must already be in normalized form (lowercase, hyphen-free) to be
/// reachable. In-order scanning means more specific markers must precede
/// their prefixes ("semi desnatado" before "desnatado").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// Markers identifying the product type; any one matching selects the rule.
    pub type_markers: &'static [&'static str],
    /// Variant vocabulary, first match wins.
    pub variant_markers: &'static [&'static str],
    /// Brand vocabulary, first match wins.
    pub brand_markers: &'static [&'static str],
}

/// Built-in rules, scanned in declared order.
///
/// The accented "feijão" and hyphenated "semi-desnatado" spellings are kept
/// alongside their normalized forms even though normalization runs first and
/// should make them unreachable. The redundancy is preserved rather than
/// assumed dead.
pub const BUILTIN_RULES: &[CategoryRule] = &[
    CategoryRule {
        type_markers: &["leite"],
        variant_markers: &["integral", "semi desnatado", "semi-desnatado", "desnatado"],
        brand_markers: &["piracanjuba", "italac", "parmalat"],
    },
    CategoryRule {
        type_markers: &["arroz"],
        variant_markers: &["branco", "integral"],
        brand_markers: &["tio joao"],
    },
    CategoryRule {
        type_markers: &["feijao", "feijão"],
        variant_markers: &["carioca"],
        brand_markers: &["camil"],
    },
];
