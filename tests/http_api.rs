//! End-to-end tests against a real listener.

use item_store::server::serve;
use item_store::storage::memory::ItemStore;
use item_store::storage::types::Item;
use reqwest::StatusCode;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    store: Arc<ItemStore>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let store = Arc::new(ItemStore::new());
        let (tx, rx) = oneshot::channel::<()>();

        let server_store = store.clone();
        let handle = tokio::spawn(async move {
            serve(listener, server_store, async {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            store,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_crud_lifecycle_over_http() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // Create
    let response = client
        .post(server.url("/items"))
        .json(&json!({"name": "Widget", "value": "blue"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Item = response.json().await.unwrap();
    assert_eq!(created.id, 1);

    // Read
    let fetched: Item = client
        .get(server.url("/items/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    // Update
    let response = client
        .put(server.url("/items/1"))
        .json(&json!({"name": "Gadget", "value": "red"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Item = response.json().await.unwrap();
    assert_eq!(updated.name, "Gadget");
    assert_eq!(updated.value, "red");

    // Delete
    let response = client.delete(server.url("/items/1")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.get(server.url("/items/1")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let items: Vec<Item> = client
        .get(server.url("/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(items.is_empty());

    server.stop().await;
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/items"))
        .body(r#"{"name": "a", "value": "b"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Item = response.json().await.unwrap();
    assert_eq!(created.name, "a");
    assert_eq!(server.store.get(created.id).unwrap(), created);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_http_creates_get_distinct_ids() {
    const REQUESTS: usize = 50;

    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::with_capacity(REQUESTS);
    for i in 0..REQUESTS {
        let client = client.clone();
        let url = server.url("/items");
        handles.push(tokio::spawn(async move {
            let response = client
                .post(url)
                .json(&json!({"name": format!("n{}", i), "value": i.to_string()}))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            response.json::<Item>().await.unwrap().id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    assert_eq!(ids.len(), REQUESTS);

    let items: Vec<Item> = client
        .get(server.url("/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed: HashSet<_> = items.into_iter().map(|item| item.id).collect();
    assert_eq!(listed, ids);

    server.stop().await;
}
