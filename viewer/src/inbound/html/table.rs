//! Results table and empty state.

use catalog_fixtures::Sex;

use super::labels;
use super::markup::Element;
use crate::domain::JoinedProduct;

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Product id.
    Id,
    /// Product name.
    Product,
    /// Category icon and title.
    Category,
    /// Owning user.
    User,
}

impl Column {
    /// Every column, left to right.
    pub const ALL: [Self; 4] = [Self::Id, Self::Product, Self::Category, Self::User];

    /// Header text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Product => "Product",
            Self::Category => "Category",
            Self::User => "User",
        }
    }

    /// Resolve a header label, ignoring ASCII case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.label().eq_ignore_ascii_case(label))
    }
}

/// Text shown in the category cell.
#[must_use]
pub fn category_cell_text(row: &JoinedProduct) -> String {
    format!("{} - {}", row.category().icon, row.category().title)
}

/// Styling class for the owner cell, if any.
#[must_use]
pub const fn user_cell_class(sex: &Sex) -> Option<&'static str> {
    match sex {
        Sex::Male => Some("has-text-link"),
        Sex::Female => Some("has-text-danger"),
        Sex::Other(_) => None,
    }
}

pub(super) fn results(rows: &[&JoinedProduct]) -> Element {
    if rows.is_empty() {
        return Element::new("p")
            .data_cy(labels::NO_MATCHING_MESSAGE)
            .text("No products matching selected criteria");
    }

    Element::new("table")
        .data_cy(labels::PRODUCT_TABLE)
        .class("table is-striped is-narrow is-fullwidth")
        .child(header())
        .child(Element::new("tbody").children(rows.iter().map(|row| product_row(row))))
}

fn header() -> Element {
    let cells = Column::ALL.into_iter().map(|column| {
        let sort = Element::new("a").attr("href", "#/").child(
            Element::new("span").class("icon").child(
                Element::new("i")
                    .data_cy(labels::SORT_ICON)
                    .class("fas fa-sort"),
            ),
        );
        Element::new("th").child(
            Element::new("span")
                .class("is-flex is-flex-wrap-nowrap")
                .text(column.label())
                .child(sort),
        )
    });

    Element::new("thead").child(Element::new("tr").children(cells))
}

fn product_row(row: &JoinedProduct) -> Element {
    let user_cell = user_cell_class(&row.user().sex)
        .into_iter()
        .fold(Element::new("td").data_cy(labels::PRODUCT_USER), |cell, class| {
            cell.class(class)
        });

    Element::new("tr")
        .data_cy(labels::PRODUCT)
        .child(
            Element::new("td")
                .class("has-text-weight-bold")
                .data_cy(labels::PRODUCT_ID)
                .text(row.id().to_string()),
        )
        .child(
            Element::new("td")
                .data_cy(labels::PRODUCT_NAME)
                .text(row.name()),
        )
        .child(
            Element::new("td")
                .data_cy(labels::PRODUCT_CATEGORY)
                .text(category_cell_text(row)),
        )
        .child(user_cell.text(row.user().name.as_str()))
}
