use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

use super::{CatalogService, SuggestionService, SyncError};
use crate::connectors::{FieldMapping, MockStorefrontConnector};
use crate::forms::{ProductForm, SuggestionDraft};
use crate::models::{Product, RecordId, Suggestion, ANONYMOUS_NAME};
use crate::storage::{LocalStore, PRODUCTS_KEY, SUGGESTIONS_KEY};

fn local_suggestions(dir: &TempDir) -> LocalStore<Suggestion> {
    LocalStore::new(dir.path(), SUGGESTIONS_KEY)
}

fn service(
    use_backend: bool,
    remote: Arc<MockStorefrontConnector>,
    dir: &TempDir,
) -> SuggestionService {
    SuggestionService::new(use_backend, remote, local_suggestions(dir))
}

#[tokio::test]
async fn test_remote_rows_in_either_convention_are_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::with_suggestions(vec![
        json!({ "id": 1, "nombre": "Ana", "titulo": "Horario", "mensaje": "Abrir antes", "importancia": 4, "fecha": "2024-02-01 09:00:00" }),
        json!({ "id": 2, "name": "Luis", "title": "Pagos", "message": "Aceptar débito", "rating": 2, "createdAt": "2024-02-02T09:00:00Z" }),
        json!({ "id": 3, "nombre": "Eva", "mensaje": "Sin título", "rating": null }),
    ]));

    let all = service(true, remote, &dir).get_all().await;

    assert_eq!(all.len(), 3);
    assert_eq!(
        (all[0].name.as_str(), all[0].title.as_str(), all[0].message.as_str(), all[0].rating),
        ("Ana", "Horario", "Abrir antes", 4)
    );
    assert_eq!(
        (all[1].name.as_str(), all[1].title.as_str(), all[1].message.as_str(), all[1].rating),
        ("Luis", "Pagos", "Aceptar débito", 2)
    );
    assert_eq!(all[2].title, "");
    assert_eq!(all[2].rating, 0);

    // No raw key survives normalization.
    let raw = serde_json::to_value(&all[0]).unwrap();
    let mut keys: Vec<_> = raw.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["createdAt", "id", "message", "name", "rating", "title"]);
}

#[tokio::test]
async fn test_local_create_is_visible_to_next_read() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::new());
    let service = service(false, remote.clone(), &dir);

    let created = service
        .create(SuggestionDraft::new("Más colores").with_name("Ana"))
        .await
        .unwrap();
    let all = service.get_all().await;

    assert!(created.id.is_local());
    assert!(!created.created_at.to_rfc3339().is_empty());
    assert_eq!(all, vec![created]);
    assert_eq!(remote.calls(), 0, "remote must not be consulted");
}

#[tokio::test]
async fn test_remote_read_failure_returns_local_contents() {
    let dir = tempfile::tempdir().unwrap();
    let local = local_suggestions(&dir);
    let stored = SuggestionDraft::new("guardada antes")
        .into_suggestion(RecordId::generate(), chrono::Utc::now());
    local.add(stored.clone()).unwrap();

    let service = service(true, Arc::new(MockStorefrontConnector::unavailable()), &dir);

    assert_eq!(service.get_all().await, vec![stored]);
}

#[tokio::test]
async fn test_remote_read_success_ignores_local_contents() {
    let dir = tempfile::tempdir().unwrap();
    local_suggestions(&dir)
        .add(SuggestionDraft::new("solo local").into_suggestion(RecordId::generate(), chrono::Utc::now()))
        .unwrap();
    let remote = Arc::new(MockStorefrontConnector::with_suggestions(vec![
        json!({ "id": 10, "nombre": "Ana", "mensaje": "remota" }),
    ]));

    let all = service(true, remote, &dir).get_all().await;

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].message, "remota");
}

#[tokio::test]
async fn test_remote_create_failure_keeps_the_suggestion_locally() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(true, Arc::new(MockStorefrontConnector::unavailable()), &dir);

    let created = service
        .create(SuggestionDraft::new("No perder esto").with_rating(3))
        .await
        .unwrap();

    assert!(created.id.is_local());
    assert_eq!(service.get_all().await, vec![created.clone()]);
    assert_eq!(service.local().get_all(), vec![created]);
}

#[tokio::test]
async fn test_remote_create_success_does_not_write_locally() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::new());
    let service = service(true, remote.clone(), &dir);

    let created = service
        .create(SuggestionDraft::new("Directo al servidor").with_name("Ana"))
        .await
        .unwrap();

    assert_eq!(created.id, RecordId::Remote(1));
    assert_eq!(created.name, "Ana");
    assert!(service.local().is_empty());
    assert_eq!(remote.suggestions().len(), 1);
}

#[tokio::test]
async fn test_remote_create_without_reported_id_is_not_local() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::without_ids());
    let service = service(true, remote.clone(), &dir);

    let created = service.create(SuggestionDraft::new("hola")).await.unwrap();

    assert_eq!(created.id, RecordId::Unassigned);
    assert!(!created.id.is_local());
    assert!(service.local().is_empty());
    assert_eq!(remote.suggestions().len(), 1);

    // The stored row is reachable through its real id once listed again.
    let listed = service.get_all().await;
    assert_eq!(listed[0].id, RecordId::Remote(1));
    assert!(matches!(
        service.delete(&created.id).await,
        Err(SyncError::ValidationFailed(_))
    ));
    service.delete(&listed[0].id).await.unwrap();
    assert!(remote.suggestions().is_empty());
}

#[tokio::test]
async fn test_product_acknowledged_without_id_is_unassigned() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::without_ids());
    let catalog = CatalogService::new(true, remote.clone(), LocalStore::new(dir.path(), PRODUCTS_KEY));

    let product = catalog.add_product(product_form("Taza", 12990, 3)).await.unwrap();

    assert_eq!(product.id, RecordId::Unassigned);
    assert!(matches!(
        catalog.delete_product(&product.id).await,
        Err(SyncError::ValidationFailed(_))
    ));
    assert_eq!(remote.products().len(), 1);
}

#[tokio::test]
async fn test_create_uses_configured_field_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::new());
    let service = service(true, remote.clone(), &dir).with_mapping(FieldMapping::spanish());

    service
        .create(SuggestionDraft::new("Hola").with_title("Saludo").with_rating(5))
        .await
        .unwrap();

    let sent = &remote.suggestions()[0];
    assert_eq!(sent["nombre"], ANONYMOUS_NAME);
    assert_eq!(sent["titulo"], "Saludo");
    assert_eq!(sent["mensaje"], "Hola");
    assert_eq!(sent["importancia"], 5);
    assert!(sent.get("message").is_none());
}

#[tokio::test]
async fn test_rating_defaults_to_zero_and_five_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    for use_backend in [false, true] {
        let service = service(use_backend, Arc::new(MockStorefrontConnector::new()), &dir);
        service.local().clear().unwrap();

        service.create(SuggestionDraft::new("sin estrellas")).await.unwrap();
        service
            .create(SuggestionDraft::new("cinco estrellas").with_rating(5))
            .await
            .unwrap();

        let ratings: Vec<u8> = service.get_all().await.iter().map(|s| s.rating).collect();
        assert_eq!(ratings, vec![0, 5], "use_backend = {}", use_backend);
    }
}

#[tokio::test]
async fn test_empty_message_is_rejected_before_any_store() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::new());

    for use_backend in [false, true] {
        let service = service(use_backend, remote.clone(), &dir);
        let result = service
            .create(SuggestionDraft::new("   ").with_name("Ana").with_rating(4))
            .await;

        assert!(matches!(result, Err(SyncError::ValidationFailed(_))));
        assert_eq!(service.local().len(), 0);
    }
    assert_eq!(remote.calls(), 0);
}

#[tokio::test]
async fn test_rating_above_five_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(false, Arc::new(MockStorefrontConnector::new()), &dir);

    let result = service.create(SuggestionDraft::new("hola").with_rating(7)).await;

    assert!(matches!(result, Err(SyncError::ValidationFailed(_))));
    assert!(service.local().is_empty());
}

#[tokio::test]
async fn test_filter_by_rating_keeps_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(false, Arc::new(MockStorefrontConnector::new()), &dir);

    for (message, rating) in [("primera", 5), ("segunda", 3), ("tercera", 5)] {
        service
            .create(SuggestionDraft::new(message).with_rating(rating))
            .await
            .unwrap();
    }

    let five: Vec<String> = service
        .by_rating(Some(5))
        .await
        .into_iter()
        .map(|s| s.message)
        .collect();
    assert_eq!(five, vec!["primera", "tercera"]);
    assert_eq!(service.by_rating(None).await.len(), 3);
}

#[tokio::test]
async fn test_delete_local_suggestion() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(false, Arc::new(MockStorefrontConnector::new()), &dir);
    let keep = service.create(SuggestionDraft::new("queda")).await.unwrap();
    let drop = service.create(SuggestionDraft::new("se va")).await.unwrap();

    service.delete(&drop.id).await.unwrap();

    assert_eq!(service.get_all().await, vec![keep]);
    assert!(matches!(
        service.delete(&drop.id).await,
        Err(SyncError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_remote_suggestion() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::with_suggestions(vec![
        json!({ "id": 4, "nombre": "Ana", "mensaje": "Hola" }),
    ]));
    let service = service(true, remote.clone(), &dir);

    service.delete(&RecordId::Remote(4)).await.unwrap();

    assert!(remote.suggestions().is_empty());
    assert!(matches!(
        service.delete(&RecordId::Remote(4)).await,
        Err(SyncError::NotFound(_))
    ));
}

fn product_form(name: &str, price: i64, stock: i64) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        description: String::new(),
        price,
        image: String::new(),
        stock,
    }
}

#[tokio::test]
async fn test_catalog_reads_and_normalizes_remote_products() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::with_products(vec![json!({
        "id": 1, "nombre": "Taza", "descripcion": "Cerámica", "precio": 12990, "imagen": "taza.png", "stock": 3
    })]));
    let catalog = CatalogService::new(true, remote, LocalStore::new(dir.path(), PRODUCTS_KEY));

    let products = catalog.products().await;

    assert_eq!(
        products,
        vec![Product {
            id: RecordId::Remote(1),
            name: "Taza".to_string(),
            description: "Cerámica".to_string(),
            price: 12990,
            image: "taza.png".to_string(),
            stock: 3,
        }]
    );
}

#[tokio::test]
async fn test_catalog_listing_falls_back_to_last_remote_listing() {
    let dir = tempfile::tempdir().unwrap();
    let online = CatalogService::new(
        true,
        Arc::new(MockStorefrontConnector::with_products(vec![json!({
            "id": 9, "nombre": "Polera", "precio": 9990, "stock": 1
        })])),
        LocalStore::new(dir.path(), PRODUCTS_KEY),
    );
    let listed = online.products().await;
    assert_eq!(listed.len(), 1);

    let offline = CatalogService::new(
        true,
        Arc::new(MockStorefrontConnector::unavailable()),
        LocalStore::new(dir.path(), PRODUCTS_KEY),
    );
    assert_eq!(offline.products().await, listed);
}

#[tokio::test]
async fn test_catalog_listing_copy_is_replaced_not_merged() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::with_products(vec![
        json!({ "id": 1, "nombre": "Taza", "precio": 12990, "stock": 3 }),
        json!({ "id": 2, "nombre": "Polera", "precio": 9990, "stock": 1 }),
    ]));
    let catalog = CatalogService::new(true, remote.clone(), LocalStore::new(dir.path(), PRODUCTS_KEY));
    catalog.products().await;

    catalog.delete_product(&RecordId::Remote(1)).await.unwrap();
    let current = catalog.products().await;

    let offline = CatalogService::new(
        true,
        Arc::new(MockStorefrontConnector::unavailable()),
        LocalStore::new(dir.path(), PRODUCTS_KEY),
    );
    let served = offline.products().await;
    assert_eq!(served, current);
    assert_eq!(served[0].id, RecordId::Remote(2));
    assert_eq!(served.len(), 1);
}

#[tokio::test]
async fn test_catalog_add_and_delete_product() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::new());
    let catalog = CatalogService::new(true, remote.clone(), LocalStore::new(dir.path(), PRODUCTS_KEY));

    let product = catalog.add_product(product_form(" Taza ", 12990, 3)).await.unwrap();
    assert_eq!(product.id, RecordId::Remote(1));
    assert_eq!(product.name, "Taza");
    assert_eq!(remote.products()[0]["price"], 12990);

    catalog.delete_product(&product.id).await.unwrap();
    assert!(remote.products().is_empty());
    assert!(matches!(
        catalog.delete_product(&product.id).await,
        Err(SyncError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_catalog_rejects_invalid_product_without_calling_remote() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(MockStorefrontConnector::new());
    let catalog = CatalogService::new(true, remote.clone(), LocalStore::new(dir.path(), PRODUCTS_KEY));

    let result = catalog.add_product(product_form("Taza", 0, 1)).await;

    assert!(matches!(result, Err(SyncError::ValidationFailed(_))));
    assert_eq!(remote.calls(), 0);
}

#[tokio::test]
async fn test_catalog_writes_fail_when_remote_is_down_or_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let down = CatalogService::new(
        true,
        Arc::new(MockStorefrontConnector::unavailable()),
        LocalStore::new(dir.path(), PRODUCTS_KEY),
    );
    let disabled = CatalogService::new(
        false,
        Arc::new(MockStorefrontConnector::new()),
        LocalStore::new(dir.path(), PRODUCTS_KEY),
    );

    for catalog in [down, disabled] {
        assert!(matches!(
            catalog.add_product(product_form("Taza", 10, 1)).await,
            Err(SyncError::RemoteUnavailable(_))
        ));
        assert!(matches!(
            catalog.update_historia("texto").await,
            Err(SyncError::RemoteUnavailable(_))
        ));
    }
}

#[tokio::test]
async fn test_historia_is_replaced_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CatalogService::new(
        true,
        Arc::new(MockStorefrontConnector::new()),
        LocalStore::new(dir.path(), PRODUCTS_KEY),
    );

    assert_eq!(catalog.historia().await.unwrap(), "");
    catalog.update_historia("Nacimos en 2019").await.unwrap();
    catalog.update_historia("Somos una tienda familiar").await.unwrap();
    assert_eq!(catalog.historia().await.unwrap(), "Somos una tienda familiar");
}
