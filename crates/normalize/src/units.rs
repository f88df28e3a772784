//! Unit-word abbreviation table.
//!
//! Listings spell sizes inconsistently ("1 Litro" vs "1L", "1 Quilo" vs
//! "1kg"). Rewriting the spelled-out words to their abbreviations lets the
//! size extractor downstream see a single form.

/// Spelled-out unit words and their abbreviations, applied in order.
///
/// Replacement is plain substring replacement, deliberately not
/// word-boundary aware: "litros" becomes "ls". Permissive by design; the
/// size extractor only looks at digit-adjacent text anyway.
pub const UNIT_SYNONYMS: &[(&str, &str)] = &[("litro", "l"), ("quilo", "kg")];

/// Rewrites every occurrence of a spelled-out unit word to its abbreviation.
/// Expects lowercased input; the table is lowercase-only.
pub fn abbreviate_units(text: &str) -> String {
    let mut out = text.to_string();
    for (word, abbrev) in UNIT_SYNONYMS {
        if out.contains(word) {
            out = out.replace(word, abbrev);
        }
    }
    out
}
