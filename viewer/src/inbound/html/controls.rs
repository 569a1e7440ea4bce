//! Filter panel: owner tabs, search field, category buttons, reset link.

use super::PageModel;
use super::labels;
use super::markup::Element;
use crate::domain::OwnerFilter;

const ACTIVE_CLASS: &str = "is-active";
const LINK_TARGET: &str = "#/";

pub(super) fn filter_panel(model: &PageModel<'_>) -> Element {
    Element::new("nav")
        .class("panel")
        .child(Element::new("p").class("panel-heading").text("Filters"))
        .child(owner_tabs(model))
        .child(search_block(model.state.name_filter()))
        .child(category_block(model))
        .child(reset_block())
}

fn link() -> Element {
    Element::new("a").attr("href", LINK_TARGET)
}

fn active_when(tab: Element, is_active: bool) -> Element {
    if is_active {
        tab.class(ACTIVE_CLASS)
    } else {
        tab
    }
}

fn owner_tabs(model: &PageModel<'_>) -> Element {
    let owner = model.state.owner_filter();

    let all = active_when(
        link().data_cy(labels::FILTER_ALL_USERS),
        *owner == OwnerFilter::AllOwners,
    )
    .text("All");
    let users = model.users.iter().map(|user| {
        active_when(link().data_cy(labels::FILTER_USER), owner.selects(&user.name))
            .text(user.name.as_str())
    });

    Element::new("p")
        .class("panel-tabs has-text-weight-bold")
        .child(all)
        .children(users)
}

fn search_block(name_filter: &str) -> Element {
    let input = Element::void("input")
        .data_cy(labels::SEARCH_FIELD)
        .attr("type", "text")
        .class("input")
        .attr("placeholder", "Search")
        .attr("value", name_filter);
    let search_icon = Element::new("span").class("icon is-left").child(
        Element::new("i")
            .class("fas fa-search")
            .attr("aria-hidden", "true"),
    );
    let clear_slot = Element::new("span")
        .class("icon is-right")
        .child_if(!name_filter.is_empty(), || {
            Element::new("button")
                .data_cy(labels::CLEAR_BUTTON)
                .attr("type", "button")
                .class("delete")
        });

    Element::new("div").class("panel-block").child(
        Element::new("p")
            .class("control has-icons-left has-icons-right")
            .child(input)
            .child(search_icon)
            .child(clear_slot),
    )
}

fn category_block(model: &PageModel<'_>) -> Element {
    let all = link()
        .data_cy(labels::ALL_CATEGORIES)
        .class("button is-success mr-6 is-outlined")
        .text("All");
    let categories = model.categories.iter().map(|category| {
        link()
            .data_cy(labels::CATEGORY)
            .class("button mr-2 my-1")
            .attr("data-category-id", category.id.to_string())
            .text(category.title.as_str())
    });

    Element::new("div")
        .class("panel-block is-flex-wrap-wrap")
        .child(all)
        .children(categories)
}

fn reset_block() -> Element {
    Element::new("div").class("panel-block").child(
        link()
            .data_cy(labels::RESET_ALL_BUTTON)
            .class("button is-link is-outlined is-fullwidth")
            .text("Reset all filters"),
    )
}
