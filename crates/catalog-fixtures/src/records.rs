//! Record types for users, categories, and products.
//!
//! Records mirror the dataset document one-to-one. Foreign keys are kept as
//! typed identifiers and are resolved by the viewer's join, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

record_id!(
    /// Identifier of a [`User`].
    UserId
);
record_id!(
    /// Identifier of a [`Category`].
    CategoryId
);
record_id!(
    /// Identifier of a [`Product`].
    ProductId
);

/// Sex recorded for a user.
///
/// The document stores `"m"` or `"f"`. Any other string is preserved as
/// [`Sex::Other`] so a single odd record does not reject the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    /// Stored as `"m"`.
    Male,
    /// Stored as `"f"`.
    Female,
    /// Any other stored value, kept verbatim.
    Other(String),
}

impl Sex {
    /// Returns the stored code for this value.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        match value.as_str() {
            "m" => Self::Male,
            "f" => Self::Female,
            _ => Self::Other(value),
        }
    }
}

impl From<Sex> for String {
    fn from(value: Sex) -> Self {
        match value {
            Sex::Male => "m".to_owned(),
            Sex::Female => "f".to_owned(),
            Sex::Other(raw) => raw,
        }
    }
}

/// A catalogue user who can own categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name, unique in practice and used by the owner filter.
    pub name: String,
    /// Recorded sex, used only for styling.
    pub sex: Sex,
}

/// A product category owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Human-readable title.
    pub title: String,
    /// Glyph shown next to the title.
    pub icon: String,
    /// Owning user.
    pub owner_id: UserId,
}

/// A product filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// Product name, matched by the name filter.
    pub name: String,
    /// Category the product belongs to.
    pub category_id: CategoryId,
}
