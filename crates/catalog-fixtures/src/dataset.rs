//! Versioned dataset document and loaders.
//!
//! A dataset holds the three base collections in source order. It is built
//! once and never mutated; callers only ever see slices.

use std::path::Path;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use crate::ambient::open_parent_dir;
use crate::error::DatasetError;
use crate::records::{Category, Product, User};

/// Current supported dataset document version.
pub const SUPPORTED_VERSION: u32 = 1;

const BUNDLED_JSON: &str = include_str!("../fixtures/catalog.json");

/// Users, categories, and products loaded from a single document.
///
/// # Example
///
/// ```
/// use catalog_fixtures::Dataset;
///
/// let dataset = Dataset::bundled().expect("bundled dataset parses");
/// assert!(!dataset.users().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Dataset {
    /// Builds a dataset from in-memory collections.
    #[must_use]
    pub const fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] when the JSON is malformed or misses
    /// required fields, and [`DatasetError::UnsupportedVersion`] when the
    /// document version is not [`SUPPORTED_VERSION`].
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::Parse {
            message: e.to_string(),
        })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Ok(Self::new(raw.users, raw.categories, raw.products))
    }

    /// Loads a dataset file relative to an open directory handle.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read, or any error
    /// from [`Dataset::from_json`].
    pub fn from_file(dir: &Dir, file_name: &Utf8Path) -> Result<Self, DatasetError> {
        let contents = dir
            .read_to_string(file_name)
            .map_err(|e| DatasetError::Io {
                path: file_name.as_std_path().to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    /// Loads a dataset from a filesystem path using ambient authority for
    /// the parent directory, then reads it through [`Dataset::from_file`].
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`], carrying the full `path`, if the path
    /// has no UTF-8 file name, the parent directory cannot be opened, or the
    /// file cannot be read.
    pub fn open(path: &Path) -> Result<Self, DatasetError> {
        let io_error = |message: String| DatasetError::Io {
            path: path.to_path_buf(),
            message,
        };

        let (dir, file_name) = open_parent_dir(path).map_err(|e| io_error(e.to_string()))?;
        let utf8_name = Utf8Path::from_path(file_name)
            .ok_or_else(|| io_error("file name is not valid UTF-8".to_owned()))?;

        Self::from_file(&dir, utf8_name).map_err(|err| match err {
            DatasetError::Io { message, .. } => io_error(message),
            other => other,
        })
    }

    /// Returns the dataset compiled into this crate.
    ///
    /// # Errors
    ///
    /// Propagates [`Dataset::from_json`] errors; the bundled document is
    /// covered by tests so this only fails if the fixture file is edited
    /// into an invalid state.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Returns all users in source order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns all categories in source order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns all products in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::records::{CategoryId, ProductId, Sex, UserId};

    const SMALL_JSON: &str = r#"{
        "version": 1,
        "users": [{"id": 100, "name": "Max", "sex": "m"}],
        "categories": [{"id": 10, "title": "Dairy", "icon": "🍦", "ownerId": 100}],
        "products": [
            {"id": 2, "name": "Yoghurt", "categoryId": 10},
            {"id": 1, "name": "Milk", "categoryId": 10}
        ]
    }"#;

    #[test]
    fn parses_valid_dataset() {
        let dataset = Dataset::from_json(SMALL_JSON).expect("valid dataset");

        assert_eq!(dataset.users().len(), 1);
        assert_eq!(dataset.categories().len(), 1);
        assert_eq!(dataset.products().len(), 2);
    }

    #[test]
    fn keeps_source_order() {
        let dataset = Dataset::from_json(SMALL_JSON).expect("valid dataset");
        let ids: Vec<ProductId> = dataset.products().iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![ProductId::new(2), ProductId::new(1)]);
    }

    #[test]
    fn accepts_dangling_references() {
        let json = r#"{
            "version": 1,
            "users": [],
            "categories": [{"id": 10, "title": "Dairy", "icon": "🍦", "ownerId": 999}],
            "products": [{"id": 1, "name": "Milk", "categoryId": 42}]
        }"#;

        let dataset = Dataset::from_json(json).expect("referential checks happen later");
        let category = dataset.categories().first().expect("one category");
        let product = dataset.products().first().expect("one product");
        assert_eq!(category.owner_id, UserId::new(999));
        assert_eq!(product.category_id, CategoryId::new(42));
    }

    /// Tests that use pattern matching for parse errors (message content varies).
    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(r#"{"users": [], "categories": [], "products": []}"#)]
    #[case::missing_products(r#"{"version": 1, "users": [], "categories": []}"#)]
    #[case::string_id(
        r#"{"version": 1, "users": [{"id": "1", "name": "Max", "sex": "m"}], "categories": [], "products": []}"#
    )]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = Dataset::from_json(json);
        assert!(matches!(result, Err(DatasetError::Parse { .. })));
    }

    #[test]
    fn rejects_unsupported_version() {
        let json = r#"{"version": 2, "users": [], "categories": [], "products": []}"#;

        assert_eq!(
            Dataset::from_json(json),
            Err(DatasetError::UnsupportedVersion {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn bundled_dataset_parses() {
        let dataset = Dataset::bundled().expect("bundled dataset");

        assert_eq!(dataset.users().len(), 4);
        assert_eq!(dataset.categories().len(), 5);
        assert_eq!(dataset.products().len(), 10);
        let anna = dataset.users().get(1).expect("second user");
        assert_eq!(anna.sex, Sex::Female);
    }

    #[test]
    fn open_reports_missing_file() {
        let path = Path::new("target/definitely-missing/catalog.json");

        let result = Dataset::open(path);
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn open_reports_full_path_when_file_is_missing() {
        let path = Path::new("src/missing-catalog.json");

        match Dataset::open(path) {
            Err(DatasetError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Io, got: {other:?}"),
        }
    }
}
