use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when rendering a key as a single string.
pub const KEY_SEPARATOR: char = '-';

/// Composite grouping key: the sole equality criterion between products.
///
/// Each field is an extracted token or the empty token for "unknown".
/// Two listings denote the same product iff their keys are equal; the
/// rendered form joins the four fields with [`KEY_SEPARATOR`] in the fixed
/// order type, brand, variant, size (e.g. `leite-piracanjuba-integral-1l`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupingKey {
    pub product_type: String,
    pub brand: String,
    pub variant: String,
    pub size: String,
}

impl GroupingKey {
    /// True when no marker matched at all. The rendered form is `"---"`,
    /// a legitimate bucket that co-groups every unmatched title.
    pub fn is_unclassified(&self) -> bool {
        self.product_type.is_empty()
            && self.brand.is_empty()
            && self.variant.is_empty()
            && self.size.is_empty()
    }
}

impl fmt::Display for GroupingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.product_type,
            self.brand,
            self.variant,
            self.size,
            sep = KEY_SEPARATOR
        )
    }
}
