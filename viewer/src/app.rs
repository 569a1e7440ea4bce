//! Application object owning the catalogue and the live view state.

use catalog_fixtures::Dataset;
use tracing::{debug, warn};

use crate::domain::{Catalog, JoinError, JoinedProduct, ViewState, filter_products};
use crate::inbound::events::UiEvent;
use crate::inbound::html::{PageModel, render_page};

/// The catalogue view: an immutable catalogue plus mutable filter state.
///
/// # Examples
///
/// ```
/// use catalog_fixtures::Dataset;
/// use catalog_viewer::app::CatalogApp;
/// use catalog_viewer::inbound::events::UiEvent;
///
/// let mut app = CatalogApp::new(&Dataset::bundled().expect("dataset")).expect("app");
/// app.dispatch(UiEvent::SearchInput("MILK".to_owned()));
///
/// let names: Vec<_> = app.visible_products().iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["Milk"]);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogApp {
    catalog: Catalog,
    state: ViewState,
}

impl CatalogApp {
    /// Join `dataset` once and start from the default view state.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError`] when a product or category references a
    /// missing record.
    pub fn new(dataset: &Dataset) -> Result<Self, JoinError> {
        Catalog::build(dataset).map(Self::from_catalog)
    }

    /// Wrap an already joined catalogue.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ViewState::new(),
        }
    }

    /// The joined catalogue.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Handle one UI event, applying at most one transition.
    pub fn dispatch(&mut self, event: UiEvent) {
        if let UiEvent::SortIcon(column) = &event {
            warn!(
                column = column.label(),
                "sorting is not supported; ignoring click"
            );
        }
        if let Some(transition) = event.into_transition(&self.catalog) {
            debug!(transition = transition.name(), "applying transition");
            self.state.apply(transition);
        }
    }

    /// Replay events in order.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = UiEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Rows passing the current filter, in catalogue order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&JoinedProduct> {
        filter_products(self.catalog.products(), self.state.product_filter())
    }

    /// Render the page for the current state.
    #[must_use]
    pub fn render(&self) -> String {
        let rows = self.visible_products();
        render_page(&PageModel {
            users: self.catalog.users(),
            categories: self.catalog.categories(),
            state: &self.state,
            rows: &rows,
        })
    }
}
