//! What a store needs to know about the entities it keeps.

use std::io;

use common::{AppError, AppResult};
use domain::{
    Customer, NewCustomer, NewProduct, Product, CUSTOMER_ENTITY, FIRST_ID, PRODUCT_ENTITY,
};

/// An entity with a repository-assigned numeric identifier.
pub trait Record: Clone + Send + Sync + 'static {
    /// Save payload, i.e. the entity before it has an identifier
    type New: Send + 'static;

    /// Label used in not-found errors
    const ENTITY: &'static str;

    fn id(&self) -> u64;

    fn from_new(id: u64, new: Self::New) -> Self;
}

impl Record for Product {
    type New = NewProduct;
    const ENTITY: &'static str = PRODUCT_ENTITY;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_new(id: u64, new: NewProduct) -> Self {
        Product::from_new(id, new)
    }
}

impl Record for Customer {
    type New = NewCustomer;
    const ENTITY: &'static str = CUSTOMER_ENTITY;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_new(id: u64, new: NewCustomer) -> Self {
        Customer::from_new(id, new)
    }
}

/// Next free identifier: one past the highest in use.
pub(crate) fn next_id<T: Record>(records: &[T]) -> AppResult<u64> {
    match records.iter().map(Record::id).max() {
        None => Ok(FIRST_ID),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} identifiers exhausted", T::ENTITY),
            ))
        }),
    }
}

/// Replace every record in `records` whose ID matches one in `changes`.
///
/// All IDs are checked before anything is replaced, so on error `records`
/// is unchanged.
pub(crate) fn replace_all<T: Record>(records: &mut [T], changes: &[T]) -> AppResult<()> {
    let mut slots = Vec::with_capacity(changes.len());
    for change in changes {
        let slot = records
            .iter()
            .position(|existing| existing.id() == change.id())
            .ok_or_else(|| AppError::not_found(T::ENTITY, change.id()))?;
        slots.push(slot);
    }

    for (slot, change) in slots.into_iter().zip(changes) {
        if let Some(existing) = records.get_mut(slot) {
            *existing = change.clone();
        }
    }
    Ok(())
}
