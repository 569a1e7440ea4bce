//! Domain layer: the joined catalogue, row filtering, and view state.
//!
//! Nothing here renders markup or touches the filesystem. Inbound adapters
//! translate user interaction into [`Transition`]s and read the results
//! back through [`filter_products`].

pub mod catalog;
pub mod filter;
pub mod view_state;

pub use catalog::{Catalog, JoinError, JoinedProduct, join};
pub use filter::{OwnerFilter, ProductFilter, filter_products};
pub use view_state::{Transition, ViewState};
