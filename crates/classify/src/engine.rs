use once_cell::sync::Lazy;
use regex::Regex;

use crate::key::GroupingKey;
use crate::rules::{CategoryRule, BUILTIN_RULES};

/// Size pattern: digits, optional spaces, then a unit. `kg` is listed before
/// `g` so "5kg" captures the whole unit instead of stopping at "g".
static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(kg|g|l)").expect("size pattern is valid"));

/// Scans a normalized title and produces its [`GroupingKey`].
///
/// The rule table is tried in declared order; the first rule with a type
/// marker contained in the title wins outright — no scoring, no fallback to
/// a later rule on a partial match. Variant and brand scans within the
/// winning rule are independent, each taking its first matching marker.
/// Size extraction always runs, with or without a type match.
///
/// Never fails: absent matches leave their fields as empty tokens.
pub fn extract_key(normalized_title: &str) -> GroupingKey {
    let mut key = GroupingKey::default();

    if let Some((rule, type_marker)) = match_rule(normalized_title) {
        key.product_type = type_marker.to_string();
        if let Some(brand) = first_contained(normalized_title, rule.brand_markers) {
            key.brand = brand.to_string();
        }
        if let Some(variant) = first_contained(normalized_title, rule.variant_markers) {
            key.variant = variant.to_string();
        }
    }

    if let Some(size) = extract_size(normalized_title) {
        key.size = size;
    }

    key
}

/// Extracts the size token: the first digits+unit occurrence, digits and
/// lowercased unit concatenated ("1l", "900g", "5kg").
///
/// Known coarse behavior: only the first occurrence is taken, so a title
/// embedding an unrelated number+unit before the true size (a pack count,
/// say) yields that earlier token.
pub fn extract_size(normalized_title: &str) -> Option<String> {
    SIZE_RE.captures(normalized_title).map(|caps| {
        let digits = &caps[1];
        let unit = caps[2].to_lowercase();
        format!("{digits}{unit}")
    })
}

/// First rule whose type marker appears in the title, plus the marker that
/// matched.
fn match_rule(title: &str) -> Option<(&'static CategoryRule, &'static str)> {
    BUILTIN_RULES.iter().find_map(|rule| {
        rule.type_markers
            .iter()
            .find(|marker| title.contains(*marker))
            .map(|marker| (rule, *marker))
    })
}

/// First marker in `markers` contained in the title.
fn first_contained(title: &str, markers: &'static [&'static str]) -> Option<&'static str> {
    markers.iter().copied().find(|marker| title.contains(marker))
}
