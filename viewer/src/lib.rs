//! Product catalogue viewer.
//!
//! Joins the users, categories, and products of a
//! [`catalog_fixtures::Dataset`] into display rows, filters them by owner
//! and by a case-insensitive name fragment, and renders the result as an
//! HTML page whose controls carry stable `data-cy` labels.
//!
//! The [`domain`] layer is pure. [`inbound`] turns clicks and keystrokes
//! (or a replayed event script) into domain transitions and renders the
//! page. [`app::CatalogApp`] owns the catalogue and the live view state.
//!
//! # Example
//!
//! ```
//! use catalog_fixtures::Dataset;
//! use catalog_viewer::CatalogApp;
//! use catalog_viewer::inbound::events::UiEvent;
//!
//! let mut app = CatalogApp::new(&Dataset::bundled().expect("dataset")).expect("app");
//! app.dispatch(UiEvent::FilterUser("Anna".to_owned()));
//!
//! assert!(app.render().contains(r#"class="is-active">Anna</a>"#));
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod inbound;

pub use app::CatalogApp;
pub use config::ViewerSettings;
