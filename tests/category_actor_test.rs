use catalog_api::category_actor::CategoryError;
use catalog_api::lifecycle::{CatalogSystem, Config};
use catalog_api::model::{CategoryCreate, CategoryUpdate, ProductCreate, ProductUpdate};
use resource_store::ActorClient;

fn product(name: &str, price: f64) -> ProductCreate {
    ProductCreate {
        id: None,
        name: name.to_string(),
        price,
        description: None,
    }
}

fn category(name: &str) -> CategoryCreate {
    CategoryCreate {
        name: name.to_string(),
        products: Vec::new(),
    }
}

#[tokio::test]
async fn test_concurrent_product_adds_are_all_kept() {
    let system = CatalogSystem::new(&Config::default());
    let client = system.category_client.clone();
    let created = client.create_category(category("Tools")).await.unwrap();
    let id = created.id;

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .add_product(id, product(&format!("tool-{i}"), i as f64))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.products.len(), 20);

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_updates_to_different_products_both_land() {
    let system = CatalogSystem::new(&Config::default());
    let client = system.category_client.clone();
    let mut params = category("Pantry");
    params.products = vec![product("Rice", 2.0), product("Beans", 3.0)];
    let created = client.create_category(params).await.unwrap();
    let id = created.id;
    let (rice, beans) = (created.products[0].id, created.products[1].id);

    let first = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .update_product(
                    id,
                    rice,
                    ProductUpdate {
                        price: Some(2.5),
                        ..Default::default()
                    },
                )
                .await
        })
    };
    let second = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .update_product(
                    id,
                    beans,
                    ProductUpdate {
                        description: Some("dried".into()),
                        ..Default::default()
                    },
                )
                .await
        })
    };
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.products[0].price, 2.5);
    assert_eq!(stored.products[1].description.as_deref(), Some("dried"));
}

#[tokio::test]
async fn test_rejected_writes_leave_category_unchanged() {
    let system = CatalogSystem::new(&Config::default());
    let client = system.category_client.clone();
    let created = client.create_category(category("Sports")).await.unwrap();

    let err = client
        .add_product(created.id, product("Ball", -10.0))
        .await
        .unwrap_err();
    assert!(matches!(err, CategoryError::Validation(_)));

    let err = client
        .update_category(
            created.id,
            CategoryUpdate {
                name: Some("Games".into()),
                products: Some(vec![product("", 1.0)]),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CategoryError::Validation(_)));

    let stored = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_list_keeps_creation_order() {
    let system = CatalogSystem::new(&Config::default());
    let client = system.category_client.clone();
    for name in ["a", "b", "c"] {
        client.create_category(category(name)).await.unwrap();
    }

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}
