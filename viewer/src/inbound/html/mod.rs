//! HTML presentation of the catalogue view.
//!
//! Rendering is a pure function of a [`PageModel`]. Every interactive
//! control and every result row carries a stable `data-cy` attribute from
//! [`labels`] so external harnesses can address it without relying on
//! layout or styling classes.

use catalog_fixtures::{Category, User};

use crate::domain::{JoinedProduct, ViewState};

mod controls;
mod markup;
mod table;

pub use table::{Column, category_cell_text, user_cell_class};

use markup::Element;

/// Page heading and document title.
pub const PAGE_TITLE: &str = "Product Categories";

/// Stable `data-cy` labels for controls and result cells.
pub mod labels {
    /// Link resetting the owner filter to all owners.
    pub const FILTER_ALL_USERS: &str = "FilterAllUsers";
    /// One link per user selecting that owner.
    pub const FILTER_USER: &str = "FilterUser";
    /// Text input bound to the name filter.
    pub const SEARCH_FIELD: &str = "SearchField";
    /// Button clearing the name filter; present only while it is non-empty.
    pub const CLEAR_BUTTON: &str = "ClearButton";
    /// Link selecting every category.
    pub const ALL_CATEGORIES: &str = "AllCategories";
    /// One link per category appending it to the selection.
    pub const CATEGORY: &str = "Category";
    /// Link resetting the owner and name filters.
    pub const RESET_ALL_BUTTON: &str = "ResetAllButton";
    /// Inert sort affordance, one per column header.
    pub const SORT_ICON: &str = "SortIcon";
    /// Results table; present only when rows are visible.
    pub const PRODUCT_TABLE: &str = "ProductTable";
    /// Empty-state message; present only when no rows are visible.
    pub const NO_MATCHING_MESSAGE: &str = "NoMatchingMessage";
    /// One table row per visible product.
    pub const PRODUCT: &str = "Product";
    /// Product id cell.
    pub const PRODUCT_ID: &str = "ProductId";
    /// Product name cell.
    pub const PRODUCT_NAME: &str = "ProductName";
    /// Category cell.
    pub const PRODUCT_CATEGORY: &str = "ProductCategory";
    /// Owner cell.
    pub const PRODUCT_USER: &str = "ProductUser";
}

/// Everything the page needs to render one frame.
#[derive(Debug, Clone, Copy)]
pub struct PageModel<'a> {
    /// Users offered as owner filters.
    pub users: &'a [User],
    /// Categories offered for selection.
    pub categories: &'a [Category],
    /// Current view state.
    pub state: &'a ViewState,
    /// Rows that passed the current filter, in display order.
    pub rows: &'a [&'a JoinedProduct],
}

/// Render the full HTML document for `model`.
#[must_use]
pub fn render_page(model: &PageModel<'_>) -> String {
    let head = Element::new("head")
        .child(Element::void("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text(PAGE_TITLE));
    let container = Element::new("div")
        .class("container")
        .child(Element::new("h1").class("title").text(PAGE_TITLE))
        .child(
            Element::new("div")
                .class("block")
                .child(controls::filter_panel(model)),
        )
        .child(
            Element::new("div")
                .class("box table-container")
                .child(table::results(model.rows)),
        );
    let body = Element::new("body").child(Element::new("div").class("section").child(container));
    let document = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(body);

    let mut html = String::from("<!DOCTYPE html>\n");
    html.push_str(&document.render());
    html.push('\n');
    html
}

#[cfg(test)]
mod tests;
