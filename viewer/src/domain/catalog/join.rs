//! Product → category → owner join.

use std::collections::HashMap;
use std::hash::Hash;

use catalog_fixtures::{Category, Product, User};

use super::{JoinError, JoinedProduct};

/// Resolve every product's category and that category's owner.
///
/// Output order matches `products`. Duplicate ids resolve to their first
/// occurrence. Categories that no product references are never inspected,
/// so a dangling owner on an unused category is not an error.
///
/// # Errors
///
/// Returns the first [`JoinError`] encountered in product order.
///
/// # Examples
///
/// ```
/// use catalog_fixtures::{Category, CategoryId, Product, ProductId, Sex, User, UserId};
/// use catalog_viewer::domain::join;
///
/// let users = vec![User { id: UserId::new(100), name: "Max".to_owned(), sex: Sex::Male }];
/// let categories = vec![Category {
///     id: CategoryId::new(10),
///     title: "Dairy".to_owned(),
///     icon: "🍦".to_owned(),
///     owner_id: UserId::new(100),
/// }];
/// let products = vec![Product {
///     id: ProductId::new(1),
///     name: "Milk".to_owned(),
///     category_id: CategoryId::new(10),
/// }];
///
/// let rows = join(&products, &categories, &users).expect("references resolve");
/// assert_eq!(rows.len(), 1);
/// ```
pub fn join(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Result<Vec<JoinedProduct>, JoinError> {
    let categories_by_id = index_first(categories, |category| category.id);
    let users_by_id = index_first(users, |user| user.id);

    products
        .iter()
        .map(|product| {
            let Some(&category) = categories_by_id.get(&product.category_id) else {
                return Err(JoinError::MissingCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                });
            };
            let Some(&user) = users_by_id.get(&category.owner_id) else {
                return Err(JoinError::MissingOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                });
            };

            Ok(JoinedProduct::new(
                product.id,
                product.name.clone(),
                category.clone(),
                user.clone(),
            ))
        })
        .collect()
}

fn index_first<T, K, F>(items: &[T], key: F) -> HashMap<K, &T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(key(item)).or_insert(item);
    }
    index
}
