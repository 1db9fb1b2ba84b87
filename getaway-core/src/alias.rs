//! City name aliases and the title casing applied to query input.
//!
//! Two tables ship with the crate. [`AliasTable::dataset`] canonicalizes the
//! whole dataset at load time; [`AliasTable::query`] is the narrower table
//! applied to a caller's source city. Lookups are exact and case-sensitive.

use std::collections::BTreeMap;

/// Legacy spelling forced to [`CANONICAL_DELHI`] in a dedicated pass.
pub const LEGACY_DELHI: &str = "Delhi";
/// Canonical form of [`LEGACY_DELHI`].
pub const CANONICAL_DELHI: &str = "New Delhi";

const DATASET_ALIASES: [(&str, &str); 6] = [
    (LEGACY_DELHI, CANONICAL_DELHI),
    ("Bangalore", "Bengaluru"),
    ("Gurgaon", "Gurugram"),
    ("Bombay", "Mumbai"),
    ("Calcutta", "Kolkata"),
    ("Madras", "Chennai"),
];

const QUERY_ALIASES: [(&str, &str); 3] = [
    (LEGACY_DELHI, CANONICAL_DELHI),
    ("Bangalore", "Bengaluru"),
    ("Bombay", "Mumbai"),
];

/// Mapping from a raw city spelling to its canonical name.
///
/// # Examples
/// ```
/// use getaway_core::AliasTable;
///
/// let aliases = AliasTable::dataset();
/// assert_eq!(aliases.resolve("Calcutta"), "Kolkata");
/// assert_eq!(aliases.resolve("Pune"), "Pune");
/// assert_eq!(aliases.resolve("calcutta"), "calcutta");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    /// Create an empty table that resolves every name to itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table used to canonicalize dataset rows.
    #[must_use]
    pub fn dataset() -> Self {
        Self::from_pairs(&DATASET_ALIASES)
    }

    /// The narrower table used to resolve a query's source city.
    #[must_use]
    pub fn query() -> Self {
        Self::from_pairs(&QUERY_ALIASES)
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |table, &(variant, canonical)| {
                table.with_alias(variant, canonical)
            })
    }

    /// Add or replace an alias while returning `self` for chaining.
    #[must_use]
    pub fn with_alias(mut self, variant: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(variant.into(), canonical.into());
        self
    }

    /// Return the canonical spelling of `name`, or `name` itself when the
    /// table has no entry for it.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }

    /// Number of aliases in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Report whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Iterate over `(variant, canonical)` pairs in variant order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(variant, canonical)| (variant.as_str(), canonical.as_str()))
    }
}

/// Upper-case the first letter of every word and lower-case the rest.
///
/// Any non-alphabetic character ends a word and is copied unchanged, so
/// `"new delhi"` becomes `"New Delhi"` and `"KOLKATA"` becomes `"Kolkata"`.
///
/// # Examples
/// ```
/// use getaway_core::title_case;
///
/// assert_eq!(title_case("new delhi"), "New Delhi");
/// assert_eq!(title_case("tIRUCHIRAPPALLI"), "Tiruchirappalli");
/// ```
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(ch);
            in_word = false;
        }
    }
    output
}
