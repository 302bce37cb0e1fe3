//! Fixed catalogs of personalities and models.
//!
//! Both catalogs are closed enums: the set of entries is known at compile
//! time, so a selected entry can never dangle. Name lookups coming from the
//! user are resolved through [`lookup`], which returns a [`NotFound`] error
//! listing the valid names on a miss.

pub mod model;
pub mod personality;

pub use model::ModelRef;
pub use personality::Personality;

use std::fmt;

/// A closed set of named catalog entries.
pub trait CatalogEntry: Copy + Sized + 'static {
    /// Singular noun used in error messages ("model", "personality").
    const KIND: &'static str;

    /// Every entry, in catalog order. The first entry is the default.
    fn all() -> &'static [Self];

    fn display_name(self) -> &'static str;

    /// Alternate spellings accepted by [`lookup`] besides the display name.
    fn aliases(self) -> Vec<String>;

    fn default_entry() -> Self {
        Self::all()[0]
    }

    fn display_names() -> Vec<&'static str> {
        Self::all().iter().map(|entry| entry.display_name()).collect()
    }
}

/// The requested name is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub kind: &'static str,
    pub input: String,
    pub available: Vec<&'static str>,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown {} '{}'. Available: {}",
            self.kind,
            self.input,
            self.available.join(", ")
        )
    }
}

impl std::error::Error for NotFound {}

/// Resolve a user-supplied name, ignoring case and surrounding whitespace.
pub fn lookup<T: CatalogEntry>(input: &str) -> Result<T, NotFound> {
    let needle = input.trim();
    T::all()
        .iter()
        .copied()
        .find(|entry| {
            entry.display_name().eq_ignore_ascii_case(needle)
                || entry
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(needle))
        })
        .ok_or_else(|| NotFound {
            kind: T::KIND,
            input: needle.to_string(),
            available: T::display_names(),
        })
}

/// Lowercase kebab-case form of a display name ("Tech Support" -> "tech-support").
pub(crate) fn slugify(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
