//! Rendering tests for the catalogue page.

use catalog_fixtures::{CategoryId, Dataset, Product, ProductId, Sex, UserId};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{Catalog, OwnerFilter, Transition, filter_products};

fn count_label(html: &str, label: &str) -> usize {
    html.matches(&format!("data-cy=\"{label}\"")).count()
}

fn render(catalog: &Catalog, state: &ViewState) -> String {
    let rows = filter_products(catalog.products(), state.product_filter());
    render_page(&PageModel {
        users: catalog.users(),
        categories: catalog.categories(),
        state,
        rows: &rows,
    })
}

#[fixture]
fn catalog() -> Catalog {
    let users = vec![
        User {
            id: UserId::new(100),
            name: "Max".to_owned(),
            sex: Sex::Male,
        },
        User {
            id: UserId::new(200),
            name: "Anna".to_owned(),
            sex: Sex::Female,
        },
        User {
            id: UserId::new(300),
            name: "Kit <3".to_owned(),
            sex: Sex::Other("x".to_owned()),
        },
    ];
    let categories = vec![
        Category {
            id: CategoryId::new(10),
            title: "Dairy".to_owned(),
            icon: "🍦".to_owned(),
            owner_id: UserId::new(100),
        },
        Category {
            id: CategoryId::new(20),
            title: "Fruit".to_owned(),
            icon: "🍏".to_owned(),
            owner_id: UserId::new(200),
        },
        Category {
            id: CategoryId::new(30),
            title: "Misc".to_owned(),
            icon: "?".to_owned(),
            owner_id: UserId::new(300),
        },
    ];
    let products = vec![
        Product {
            id: ProductId::new(1),
            name: "Milk".to_owned(),
            category_id: CategoryId::new(10),
        },
        Product {
            id: ProductId::new(2),
            name: "Apple".to_owned(),
            category_id: CategoryId::new(20),
        },
        Product {
            id: ProductId::new(3),
            name: "Tape & Glue".to_owned(),
            category_id: CategoryId::new(30),
        },
    ];
    Catalog::build(&Dataset::new(users, categories, products)).expect("catalog")
}

#[rstest]
fn renders_one_control_per_user_and_category(catalog: Catalog) {
    let html = render(&catalog, &ViewState::new());

    assert_eq!(count_label(&html, labels::FILTER_ALL_USERS), 1);
    assert_eq!(count_label(&html, labels::FILTER_USER), 3);
    assert_eq!(count_label(&html, labels::SEARCH_FIELD), 1);
    assert_eq!(count_label(&html, labels::ALL_CATEGORIES), 1);
    assert_eq!(count_label(&html, labels::CATEGORY), 3);
    assert_eq!(count_label(&html, labels::RESET_ALL_BUTTON), 1);
}

#[rstest]
fn renders_table_with_sort_icon_per_column(catalog: Catalog) {
    let html = render(&catalog, &ViewState::new());

    assert_eq!(count_label(&html, labels::PRODUCT_TABLE), 1);
    assert_eq!(count_label(&html, labels::NO_MATCHING_MESSAGE), 0);
    assert_eq!(count_label(&html, labels::SORT_ICON), Column::ALL.len());
    for column in Column::ALL {
        assert!(html.contains(column.label()), "missing header {column:?}");
    }
}

#[rstest]
fn renders_one_cell_set_per_visible_row(catalog: Catalog) {
    let mut state = ViewState::new();
    state.apply(Transition::SelectOwner(OwnerFilter::owner("Max")));
    let html = render(&catalog, &state);

    for label in [
        labels::PRODUCT,
        labels::PRODUCT_ID,
        labels::PRODUCT_NAME,
        labels::PRODUCT_CATEGORY,
        labels::PRODUCT_USER,
    ] {
        assert_eq!(count_label(&html, label), 1, "label {label}");
    }
}

#[rstest]
fn category_cell_joins_icon_and_title(catalog: Catalog) {
    let html = render(&catalog, &ViewState::new());

    assert!(html.contains(r#"<td data-cy="ProductCategory">🍦 - Dairy</td>"#));
}

#[rstest]
#[case::male("Max", r#"<td data-cy="ProductUser" class="has-text-link">Max</td>"#)]
#[case::female("Anna", r#"<td data-cy="ProductUser" class="has-text-danger">Anna</td>"#)]
#[case::other("Kit <3", r#"<td data-cy="ProductUser">Kit &lt;3</td>"#)]
fn user_cell_is_styled_by_sex(catalog: Catalog, #[case] owner: &str, #[case] expected: &str) {
    let mut state = ViewState::new();
    state.apply(Transition::SelectOwner(OwnerFilter::owner(owner)));
    let html = render(&catalog, &state);

    assert!(html.contains(expected), "expected {expected} in {html}");
}

#[rstest]
fn empty_result_shows_message_instead_of_table(catalog: Catalog) {
    let mut state = ViewState::new();
    state.apply(Transition::SetNameFilter("zzz".to_owned()));
    let html = render(&catalog, &state);

    assert_eq!(count_label(&html, labels::PRODUCT_TABLE), 0);
    assert_eq!(count_label(&html, labels::NO_MATCHING_MESSAGE), 1);
    assert!(html.contains("No products matching selected criteria"));
}

#[rstest]
fn clear_button_only_with_search_text(catalog: Catalog) {
    let idle = render(&catalog, &ViewState::new());
    assert_eq!(count_label(&idle, labels::CLEAR_BUTTON), 0);

    let mut state = ViewState::new();
    state.apply(Transition::SetNameFilter("mi".to_owned()));
    let searching = render(&catalog, &state);
    assert_eq!(count_label(&searching, labels::CLEAR_BUTTON), 1);
    assert!(searching.contains(r#"value="mi""#));
}

#[rstest]
fn active_class_follows_owner_filter(catalog: Catalog) {
    let idle = render(&catalog, &ViewState::new());
    assert!(idle.contains(r##"<a href="#/" data-cy="FilterAllUsers" class="is-active">All</a>"##));

    let mut state = ViewState::new();
    state.apply(Transition::SelectOwner(OwnerFilter::owner("Anna")));
    let html = render(&catalog, &state);
    assert!(html.contains(r##"<a href="#/" data-cy="FilterAllUsers">All</a>"##));
    assert!(html.contains(r##"<a href="#/" data-cy="FilterUser" class="is-active">Anna</a>"##));
    assert!(html.contains(r##"<a href="#/" data-cy="FilterUser">Max</a>"##));
}

#[rstest]
fn interpolated_text_is_escaped(catalog: Catalog) {
    let mut state = ViewState::new();
    state.apply(Transition::SetNameFilter("\"><script>".to_owned()));
    let html = render(&catalog, &state);

    assert!(!html.contains("<script>"));
    assert!(html.contains("Kit &lt;3"));
}

#[rstest]
fn document_has_title_and_doctype(catalog: Catalog) {
    let html = render(&catalog, &ViewState::new());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1 class=\"title\">Product Categories</h1>"));
}

#[rstest]
#[case("id", Some(Column::Id))]
#[case("PRODUCT", Some(Column::Product))]
#[case("Category", Some(Column::Category))]
#[case("user", Some(Column::User))]
#[case("price", None)]
fn columns_resolve_from_labels(#[case] label: &str, #[case] expected: Option<Column>) {
    assert_eq!(Column::from_label(label), expected);
}
