//! In-process store backed by an ordered `Vec`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{Customer, CustomerId, NewCustomer, NewProduct, Product, ProductId};

use super::record::{next_id, replace_all, Record};
use super::{CustomerRepository, ProductRepository};

/// Keeps records in insertion order for the lifetime of the process.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with existing records
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn get(&self, id: u64) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    async fn insert(&self, new: T::New) -> AppResult<T> {
        let mut records = self.records.write().await;
        let record = T::from_new(next_id(&records)?, new);
        records.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, changes: &[T]) -> AppResult<()> {
        let mut records = self.records.write().await;
        replace_all(&mut records, changes)
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore<Product> {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.all().await)
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        Ok(self.get(id).await)
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
impl CustomerRepository for InMemoryStore<Customer> {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        Ok(self.all().await)
    }

    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        Ok(self.get(id).await)
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

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    #[tokio::test]
    async fn save_assigns_increasing_ids_in_order() {
        let store = InMemoryStore::<Product>::new();
        let first = ProductRepository::save(&store, NewProduct::new("a", 1.0)).await.unwrap();
        let second = ProductRepository::save(&store, NewProduct::new("b", 2.0)).await.unwrap();

        assert_eq!((first.id, second.id), (1, 2));
        let titles: Vec<_> = ProductRepository::find_all(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let store = InMemoryStore::<Customer>::new();
        let ghost = Customer::from_new(5, NewCustomer::new("Ghost"));

        let err = CustomerRepository::update(&store, &ghost).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "Customer", id: 5 }));
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let store = InMemoryStore::with_records(vec![Customer::from_new(1, NewCustomer::new("Ann"))]);
        let mut ann = CustomerRepository::find_by_id(&store, 1).await.unwrap().unwrap();
        ann.add_to_cart(9);
        CustomerRepository::update(&store, &ann).await.unwrap();

        let stored = CustomerRepository::find_by_id(&store, 1).await.unwrap().unwrap();
        assert_eq!(stored.products, vec![9]);
        assert!(CustomerRepository::find_by_id(&store, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_many_with_unknown_id_changes_nothing() {
        let store = InMemoryStore::with_records(vec![
            Product::from_new(1, NewProduct::new("W", 1.0)),
            Product::from_new(2, NewProduct::new("W", 2.0)),
        ]);
        let mut first = Product::from_new(1, NewProduct::new("W", 1.0));
        first.soft_delete();
        let ghost = Product::from_new(7, NewProduct::new("W", 3.0));

        let err = ProductRepository::update_many(&store, &[first, ghost]).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { id: 7, .. }));
        let all = ProductRepository::find_all(&store).await.unwrap();
        assert!(all.iter().all(Product::is_active));
    }
}
