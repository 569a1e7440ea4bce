//! Owner and name filtering over joined rows.

use catalog_fixtures::User;

use super::catalog::JoinedProduct;

/// Which owner's products are visible.
///
/// A tagged choice rather than a sentinel string, so a user literally named
/// `"all"` is still selectable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum OwnerFilter {
    /// No owner restriction.
    #[default]
    AllOwners,
    /// Only products whose category owner has exactly this name.
    Owner(String),
}

impl OwnerFilter {
    /// Restrict to the owner with the given name.
    #[must_use]
    pub fn owner(name: impl Into<String>) -> Self {
        Self::Owner(name.into())
    }

    /// Returns `true` if rows owned by `user` pass this filter.
    ///
    /// Names are compared exactly, including case.
    #[must_use]
    pub fn admits(&self, user: &User) -> bool {
        match self {
            Self::AllOwners => true,
            Self::Owner(name) => user.name == *name,
        }
    }

    /// Returns `true` if this filter selects exactly the named owner.
    #[must_use]
    pub fn selects(&self, name: &str) -> bool {
        matches!(self, Self::Owner(selected) if selected == name)
    }
}

/// The filter inputs that affect which rows are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Owner restriction.
    pub owner: OwnerFilter,
    /// Raw search text; normalised only when filtering.
    pub name: String,
}

/// Keep the rows that pass `filter`, in their original relative order.
///
/// The name criterion lowercases both sides and matches on substrings; an
/// empty search admits every row. Accepts any iterator of borrowed rows so a
/// filtered result can be filtered again.
///
/// # Examples
///
/// ```
/// use catalog_viewer::domain::{Catalog, ProductFilter, filter_products};
/// use catalog_fixtures::Dataset;
///
/// let catalog = Catalog::build(&Dataset::bundled().expect("dataset")).expect("catalog");
/// let all = filter_products(catalog.products(), &ProductFilter::default());
/// assert_eq!(all.len(), catalog.products().len());
/// ```
pub fn filter_products<'a, I>(rows: I, filter: &ProductFilter) -> Vec<&'a JoinedProduct>
where
    I: IntoIterator<Item = &'a JoinedProduct>,
{
    let needle = filter.name.to_lowercase();
    rows.into_iter()
        .filter(|row| filter.owner.admits(row.user()))
        .filter(|row| name_matches(row.name(), &needle))
        .collect()
}

fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}
