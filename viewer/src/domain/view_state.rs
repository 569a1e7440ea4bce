//! Mutable view state and the transitions that drive it.
//!
//! Every user interaction is reduced to exactly one [`Transition`]. The
//! state is owned by the application object and only ever changes through
//! [`ViewState::apply`].

use catalog_fixtures::Category;

use super::filter::{OwnerFilter, ProductFilter};

/// A single state change triggered by a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Replace the owner filter.
    SelectOwner(OwnerFilter),
    /// Replace the raw search text.
    SetNameFilter(String),
    /// Empty the search text.
    ClearNameFilter,
    /// Replace the selection with the given full category collection.
    SelectAllCategories(Vec<Category>),
    /// Append one category to the selection; duplicates accumulate.
    AddCategory(Category),
    /// Restore the owner and name filters to their defaults. The category
    /// selection is left as it is.
    ResetAllFilters,
}

impl Transition {
    /// Short stable name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectOwner(_) => "select_owner",
            Self::SetNameFilter(_) => "set_name_filter",
            Self::ClearNameFilter => "clear_name_filter",
            Self::SelectAllCategories(_) => "select_all_categories",
            Self::AddCategory(_) => "add_category",
            Self::ResetAllFilters => "reset_all_filters",
        }
    }
}

/// Current filter inputs plus the click-accumulated category selection.
///
/// The selection is tracked but does not affect which rows are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    filter: ProductFilter,
    selected_categories: Vec<Category>,
}

impl ViewState {
    /// State with every filter at its default and nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current owner filter.
    #[must_use]
    pub const fn owner_filter(&self) -> &OwnerFilter {
        &self.filter.owner
    }

    /// Raw search text as typed.
    #[must_use]
    pub fn name_filter(&self) -> &str {
        self.filter.name.as_str()
    }

    /// Categories in click order, duplicates included.
    #[must_use]
    pub fn selected_categories(&self) -> &[Category] {
        &self.selected_categories
    }

    /// The part of the state that determines the visible rows.
    #[must_use]
    pub const fn product_filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Apply one transition in place.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::SelectOwner(owner) => self.filter.owner = owner,
            Transition::SetNameFilter(text) => self.filter.name = text,
            Transition::ClearNameFilter => self.filter.name.clear(),
            Transition::SelectAllCategories(categories) => self.selected_categories = categories,
            Transition::AddCategory(category) => self.selected_categories.push(category),
            Transition::ResetAllFilters => self.filter = ProductFilter::default(),
        }
    }
}
