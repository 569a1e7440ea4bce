//! UI events raised by the rendered controls.
//!
//! Each event corresponds to one `data-cy` control and maps to at most one
//! domain [`Transition`]. Sort icons are rendered but inert, so they map to
//! nothing.

use catalog_fixtures::Category;

use super::html::Column;
use crate::domain::{Catalog, OwnerFilter, Transition};

/// A user interaction with one of the page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// `FilterAllUsers` clicked.
    FilterAllUsers,
    /// `FilterUser` clicked for the named user.
    FilterUser(String),
    /// `SearchField` edited; carries the full new value.
    SearchInput(String),
    /// `ClearButton` clicked.
    ClearButton,
    /// `AllCategories` clicked.
    AllCategories,
    /// `Category` clicked for this category.
    Category(Category),
    /// `ResetAllButton` clicked.
    ResetAllButton,
    /// `SortIcon` clicked in a column header.
    SortIcon(Column),
}

impl UiEvent {
    /// Map the event to the transition it triggers, if any.
    ///
    /// `catalog` supplies the full category collection for
    /// [`UiEvent::AllCategories`].
    #[must_use]
    pub fn into_transition(self, catalog: &Catalog) -> Option<Transition> {
        match self {
            Self::FilterAllUsers => Some(Transition::SelectOwner(OwnerFilter::AllOwners)),
            Self::FilterUser(name) => Some(Transition::SelectOwner(OwnerFilter::Owner(name))),
            Self::SearchInput(text) => Some(Transition::SetNameFilter(text)),
            Self::ClearButton => Some(Transition::ClearNameFilter),
            Self::AllCategories => Some(Transition::SelectAllCategories(
                catalog.categories().to_vec(),
            )),
            Self::Category(category) => Some(Transition::AddCategory(category)),
            Self::ResetAllButton => Some(Transition::ResetAllFilters),
            Self::SortIcon(_) => None,
        }
    }
}
