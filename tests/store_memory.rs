use std::collections::HashSet;
use std::sync::Arc;
use shortlink::application::services::{DEFAULT_MAX_ATTEMPTS, ShortenerService};
use shortlink::domain::entities::ShortCode;
use shortlink::domain::repositories::{MappingStore, StoreError};
use shortlink::infrastructure::persistence::InMemoryStore;
use shortlink::utils::code_generator::RandomCodeGenerator;

fn code(s: &str) -> ShortCode {
    ShortCode::parse(s).unwrap()
}

#[tokio::test]
async fn test_store_contract() {
    let store = InMemoryStore::new();

    assert!(store.supports_reverse_lookup());
    assert!(store.health_check().await);

    assert_eq!(
        store.get(&code("abc123")).await.unwrap_err(),
        StoreError::CodeNotFound("abc123".to_string())
    );

    store
        .save(&code("abc123"), "https://example.com")
        .await
        .unwrap();

    assert_eq!(
        store.get(&code("abc123")).await.unwrap(),
        "https://example.com"
    );
    assert_eq!(
        store.find_code_for_url("https://example.com").await,
        Some(code("abc123"))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_save_same_code_has_one_winner() {
    let store = Arc::new(InMemoryStore::new());

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .save(&code("race00"), &format!("https://example.com/{}", i))
                .await
        }));
    }

    let mut winners = Vec::new();
    for (i, handle) in handles.into_iter().enumerate() {
        match handle.await.unwrap() {
            Ok(()) => winners.push(i),
            Err(StoreError::CodeExists(_)) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(
        store.get(&code("race00")).await.unwrap(),
        format!("https://example.com/{}", winners[0])
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_distinct_urls() {
    let store = Arc::new(InMemoryStore::new());
    let service = Arc::new(ShortenerService::new(
        store.clone(),
        Arc::new(RandomCodeGenerator),
        DEFAULT_MAX_ATTEMPTS,
    ));

    let mut handles = Vec::new();
    for i in 0..100 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let url = format!("https://example.com/page/{}", i);
            let code = service.shorten(&url).await.unwrap();
            (code, url)
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        let (code, url) = handle.await.unwrap();
        assert_eq!(service.resolve(code.as_str()).await.unwrap(), url);
        codes.insert(code);
    }

    assert_eq!(codes.len(), 100);
    assert_eq!(store.len().await, 100);
}
