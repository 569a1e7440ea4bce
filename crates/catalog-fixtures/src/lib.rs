//! Static datasets backing the product catalogue viewer.
//!
//! The viewer joins three flat collections: users, the categories they own,
//! and the products filed under those categories. This crate owns the record
//! types and the versioned JSON document they are loaded from. It knows
//! nothing about joins or filtering; dangling foreign keys are accepted here
//! and reported by the viewer when it builds its catalogue.
//!
//! # Example
//!
//! ```
//! use catalog_fixtures::Dataset;
//!
//! let json = r#"{
//!     "version": 1,
//!     "users": [{"id": 100, "name": "Max", "sex": "m"}],
//!     "categories": [{"id": 10, "title": "Dairy", "icon": "🍦", "ownerId": 100}],
//!     "products": [{"id": 1, "name": "Milk", "categoryId": 10}]
//! }"#;
//!
//! let dataset = Dataset::from_json(json).expect("valid dataset");
//! assert_eq!(dataset.products().len(), 1);
//! ```

mod ambient;
mod dataset;
mod error;
mod records;

pub use ambient::open_parent_dir;
pub use dataset::{Dataset, SUPPORTED_VERSION};
pub use error::DatasetError;
pub use records::{Category, CategoryId, Product, ProductId, Sex, User, UserId};
