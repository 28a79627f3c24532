//! Plain data carried by the cache

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Internal link id of a parent product
///
/// Distinct from the SKU; children report their parent through this id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ParentKey(i64);

impl ParentKey {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ParentKey {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ParentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attribute codes selected when fetching children
pub type AttributeSet = BTreeSet<String>;

/// Catalog status of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Enabled,
    Disabled,
}

impl ProductStatus {
    /// Numeric value stored by the catalog
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Enabled => 1,
            Self::Disabled => 2,
        }
    }

    /// Parse the stored numeric value
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Enabled),
            2 => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// A fetched child paired with its display id (the SKU)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildRecord<C> {
    pub entity: C,
    pub display_id: String,
}

/// Counters describing what a cache instance has done so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FetchStats {
    /// Completed batch fetches
    pub fetches: u32,
    /// Batch fetches aborted by an error
    pub failed_fetches: u32,
    /// Populated maps discarded by a late registration
    pub invalidations: u32,
    /// Parents queried across all completed fetches
    pub parents_fetched: u64,
    /// Children returned across all completed fetches
    pub children_fetched: u64,
}
