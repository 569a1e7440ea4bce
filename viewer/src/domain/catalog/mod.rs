//! Joined catalogue read model.
//!
//! The catalogue is built once from a [`Dataset`] and never mutated. Each
//! product row embeds its resolved category and the user owning that
//! category, so filtering and rendering never chase foreign keys.

use catalog_fixtures::{Category, CategoryId, Dataset, ProductId, User, UserId};
use thiserror::Error;
use tracing::info;

mod join;


pub use join::join;

/// Referential-integrity failures detected while joining the dataset.
///
/// The join fails on the first dangling reference; no partial catalogue is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// A product points at a category that does not exist.
    #[error("product {product_id} references missing category {category_id}")]
    MissingCategory {
        /// Product holding the dangling reference.
        product_id: ProductId,
        /// Category id that could not be resolved.
        category_id: CategoryId,
    },
    /// A category points at an owner that does not exist.
    #[error("category {category_id} references missing owner {owner_id}")]
    MissingOwner {
        /// Category holding the dangling reference.
        category_id: CategoryId,
        /// User id that could not be resolved.
        owner_id: UserId,
    },
}

/// A product row with its category and owning user resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedProduct {
    id: ProductId,
    name: String,
    category: Category,
    user: User,
}

impl JoinedProduct {
    pub(crate) const fn new(id: ProductId, name: String, category: Category, user: User) -> Self {
        Self {
            id,
            name,
            category,
            user,
        }
    }

    /// Product identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Product name as stored in the dataset.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Category the product is filed under.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// User owning the product's category.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }
}

/// Immutable catalogue: the joined rows plus the collections the filter
/// controls are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<JoinedProduct>,
}

impl Catalog {
    /// Join the dataset into a catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError`] when a product or category references an id
    /// that does not exist.
    pub fn build(dataset: &Dataset) -> Result<Self, JoinError> {
        let products = join(dataset.products(), dataset.categories(), dataset.users())?;
        info!(
            users = dataset.users().len(),
            categories = dataset.categories().len(),
            products = products.len(),
            "catalogue built"
        );

        Ok(Self {
            users: dataset.users().to_vec(),
            categories: dataset.categories().to_vec(),
            products,
        })
    }

    /// All users in source order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All categories in source order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All joined rows in product source order.
    #[must_use]
    pub fn products(&self) -> &[JoinedProduct] {
        &self.products
    }

    /// Look up a category by id; the first match wins.
    #[must_use]
    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Look up a user by exact name.
    #[must_use]
    pub fn find_user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == name)
    }
}
