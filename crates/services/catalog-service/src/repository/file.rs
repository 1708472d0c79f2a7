//! Store that keeps one JSON array per entity type on disk.

use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;

use common::AppResult;
use domain::{Customer, CustomerId, NewCustomer, NewProduct, Product, ProductId};

use super::record::{next_id, replace_all, Record};
use super::{CustomerRepository, ProductRepository};

/// JSON file backed store.
///
/// The file is read on every call and rewritten through a temporary file on
/// every write. A missing file is treated as an empty collection.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Create a store over `path`; nothing is touched until the first call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    async fn load(&self) -> io::Result<Vec<T>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    async fn store(&self, records: &[T]) -> io::Result<()> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let written = match fs::write(&tmp, bytes).await {
            Ok(()) => fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };
        if written.is_err() {
            if let Err(e) = fs::remove_file(&tmp).await {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %tmp.display(), "Leftover temp file: {}", e);
                }
            }
        }
        written
    }

    async fn all(&self) -> AppResult<Vec<T>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?)
    }

    async fn get(&self, id: u64) -> AppResult<Option<T>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.into_iter().find(|record| record.id() == id))
    }

    async fn insert(&self, new: T::New) -> AppResult<T> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let record = T::from_new(next_id(&records)?, new);
        records.push(record.clone());
        self.store(&records).await?;
        tracing::debug!(path = %self.path.display(), id = record.id(), "{} written", T::ENTITY);
        Ok(record)
    }

    async fn replace(&self, changes: &[T]) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        replace_all(&mut records, changes)?;
        self.store(&records).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for JsonFileStore<Product> {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        self.all().await
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        self.get(id).await
    }

    async fn save(&self, product: NewProduct) -> AppResult<Product> {
        self.insert(product).await
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        self.replace(std::slice::from_ref(product)).await
    }

    async fn update_many(&self, products: &[Product]) -> AppResult<()> {
        self.replace(products).await
    }
}

#[async_trait]
impl CustomerRepository for JsonFileStore<Customer> {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        self.all().await
    }

    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        self.get(id).await
    }

    async fn save(&self, customer: NewCustomer) -> AppResult<Customer> {
        self.insert(customer).await
    }

    async fn update(&self, customer: &Customer) -> AppResult<()> {
        self.replace(std::slice::from_ref(customer)).await
    }

    async fn update_many(&self, customers: &[Customer]) -> AppResult<()> {
        self.replace(customers).await
    }
}
