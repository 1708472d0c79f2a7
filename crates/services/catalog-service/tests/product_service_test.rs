//! Product service tests against the in-memory store.

use std::sync::Arc;

use tokio_test::{assert_err, assert_ok};

use catalog_service_lib::repository::{InMemoryStore, ProductRepository};
use catalog_service_lib::service::{ProductManager, ProductService};
use common::AppError;
use domain::{NewProduct, Product};

fn setup() -> (Arc<InMemoryStore<Product>>, ProductManager) {
    let store = Arc::new(InMemoryStore::<Product>::new());
    let service = ProductManager::new(store.clone());
    (store, service)
}

#[tokio::test]
async fn test_saved_products_are_active() {
    let (_, service) = setup();

    let saved = assert_ok!(service.save(NewProduct::new("Widget", 9.99)).await);
    assert!(saved.active);
    assert_eq!(saved.id, 1);
}

#[tokio::test]
async fn test_widget_scenario_aggregates() {
    let (_, service) = setup();
    assert_ok!(service.save(NewProduct::new("Widget", 9.99)).await);

    assert_eq!(service.get_active_products_count().await.unwrap(), 1);
    assert_eq!(service.get_active_product_total_cost().await.unwrap(), 9.99);
    assert_eq!(service.get_active_product_average_price().await.unwrap(), 9.99);
}

#[tokio::test]
async fn test_empty_catalog_aggregates_are_zero() {
    let (_, service) = setup();

    assert_eq!(service.get_active_products_count().await.unwrap(), 0);
    assert_eq!(service.get_active_product_total_cost().await.unwrap(), 0.0);
    assert_eq!(service.get_active_product_average_price().await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_invalid_product_is_not_stored() {
    let (store, service) = setup();

    assert_err!(service.save(NewProduct::new("", 5.0)).await);
    assert_err!(service.save(NewProduct::new("Widget", 0.0)).await);
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_active_product_by_id_is_idempotent() {
    let (_, service) = setup();
    let saved = service.save(NewProduct::new("Widget", 1.5)).await.unwrap();

    let first = service.get_active_product_by_id(saved.id).await.unwrap();
    let second = service.get_active_product_by_id(saved.id).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, saved);
}

#[tokio::test]
async fn test_delete_and_restore_toggle() {
    let (_, service) = setup();
    let saved = service.save(NewProduct::new("Widget", 2.0)).await.unwrap();

    assert_ok!(service.delete_by_id(saved.id).await);
    let err = service.get_active_product_by_id(saved.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "Product", id } if id == saved.id));
    assert!(err.to_string().contains(&saved.id.to_string()));

    // Deleting twice fails: the product is no longer active
    assert_err!(service.delete_by_id(saved.id).await);

    assert_ok!(service.restore_by_id(saved.id).await);
    assert_eq!(service.get_active_product_by_id(saved.id).await.unwrap(), saved);
}

#[tokio::test]
async fn test_restore_unknown_and_already_active() {
    let (_, service) = setup();
    let saved = service.save(NewProduct::new("Widget", 2.0)).await.unwrap();

    let err = service.restore_by_id(99).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { id: 99, .. }));

    assert_ok!(service.restore_by_id(saved.id).await);
    assert_eq!(service.get_active_products_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_soft_deleted_products_stay_in_storage() {
    let (store, service) = setup();
    let saved = service.save(NewProduct::new("Widget", 2.0)).await.unwrap();
    service.delete_by_id(saved.id).await.unwrap();

    let stored = store.find_by_id(saved.id).await.unwrap().unwrap();
    assert!(!stored.active);
    assert!(service.get_all_active_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_by_title_only_touches_exact_matches() {
    let (_, service) = setup();
    service.save(NewProduct::new("Widget", 1.0)).await.unwrap();
    service.save(NewProduct::new("Widget ", 2.0)).await.unwrap();
    service.save(NewProduct::new("Widget", 3.0)).await.unwrap();
    service.save(NewProduct::new("Gadget", 4.0)).await.unwrap();

    assert_eq!(service.delete_by_title("Widget").await.unwrap(), 2);
    assert_eq!(service.delete_by_title("Nothing").await.unwrap(), 0);

    let titles: Vec<_> = service
        .get_all_active_products()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["Widget ", "Gadget"]);
    assert_eq!(service.get_active_product_total_cost().await.unwrap(), 6.0);
}

#[tokio::test]
async fn test_update_persists_and_validates() {
    let (_, service) = setup();
    let mut product = service.save(NewProduct::new("Widget", 2.0)).await.unwrap();

    product.price = 4.0;
    product.title = "Big widget".to_string();
    assert_ok!(service.update(&product).await);
    assert_eq!(service.get_active_product_by_id(product.id).await.unwrap(), product);

    product.price = -1.0;
    assert!(matches!(
        service.update(&product).await,
        Err(AppError::Validation(_))
    ));
    assert_eq!(
        service.get_active_product_by_id(product.id).await.unwrap().price,
        4.0
    );
}

#[tokio::test]
async fn test_update_of_unknown_product_is_not_found() {
    let (_, service) = setup();
    let ghost = Product::from_new(12, NewProduct::new("Ghost", 1.0));

    assert!(matches!(
        service.update(&ghost).await,
        Err(AppError::NotFound { id: 12, .. })
    ));
}

#[tokio::test]
async fn test_update_does_not_revive_a_deleted_product() {
    let (_, service) = setup();
    let mut product = service.save(NewProduct::new("Widget", 2.0)).await.unwrap();
    service.delete_by_id(product.id).await.unwrap();

    product.price = 3.0;
    assert_ok!(service.update(&product).await);

    assert!(matches!(
        service.get_active_product_by_id(product.id).await,
        Err(AppError::NotFound { .. })
    ));
    service.restore_by_id(product.id).await.unwrap();
    assert_eq!(service.get_active_product_by_id(product.id).await.unwrap().price, 3.0);
}
