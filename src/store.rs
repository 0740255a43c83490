use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::catalog;
use crate::error::AppResult;

/// Named JSON-array collections backing the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Products,
    Orders,
}

impl Collection {
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Users => "users.json",
            Collection::Products => "products.json",
            Collection::Orders => "orders.json",
        }
    }
}

/// Whole-collection persistence over JSON files in a data directory.
///
/// Every mutation is load-whole-collection, mutate in memory, write the
/// whole collection back. Concurrent writers to the same collection race
/// (last writer wins); adequate at this scale, and the seam where a
/// transactional store could be substituted.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create the data directory and initialize any absent collection
    /// file: an empty array, or the seed catalog for products.
    pub async fn init(&self) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir).await?;
        for collection in [Collection::Users, Collection::Products, Collection::Orders] {
            self.ensure(collection).await?;
        }
        Ok(())
    }

    pub async fn load<T: DeserializeOwned>(&self, collection: Collection) -> AppResult<Vec<T>> {
        self.ensure(collection).await?;
        let raw = fs::read_to_string(self.path(collection)).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub async fn replace<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(self.path(collection), raw).await?;
        Ok(())
    }

    async fn ensure(&self, collection: Collection) -> AppResult<()> {
        let path = self.path(collection);
        if fs::try_exists(&path).await? {
            return Ok(());
        }
        fs::create_dir_all(&self.data_dir).await?;
        match collection {
            Collection::Products => {
                self.replace(collection, &catalog::default_catalog()).await
            }
            Collection::Users | Collection::Orders => {
                fs::write(&path, "[]").await?;
                Ok(())
            }
        }
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}
