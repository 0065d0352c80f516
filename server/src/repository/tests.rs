//! Repository Integration Tests
//!
//! Tests for JsonFileRepository against a temporary data directory.

use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;
use tempfile::TempDir;

use crate::domain::{DomainError, ListCatalog, ListOption};
use crate::repository::{JsonFileRepository, OptionListRepository};

fn setup_test_repo() -> (TempDir, JsonFileRepository) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let repo = JsonFileRepository::new(dir.path(), ListCatalog::default());
    (dir, repo)
}

fn option(label: &str, value: &str) -> ListOption {
    ListOption::new(label, value)
}

#[tokio::test]
async fn test_get_missing_list_is_empty() {
    let (_dir, repo) = setup_test_repo();

    let options = repo.get("area").await.expect("Get failed");
    assert!(options.is_empty());
    assert!(!repo.list_path("area").exists());
}

#[tokio::test]
async fn test_append_persists_pretty_json() {
    let (_dir, repo) = setup_test_repo();

    let options = repo
        .append_if_absent("area", &option("Frontend", "frontend"))
        .await
        .expect("Append failed");
    assert_eq!(options, vec![option("Frontend", "frontend")]);

    let raw = std::fs::read_to_string(repo.list_path("area")).unwrap();
    assert_eq!(
        raw,
        "[\n  {\n    \"label\": \"Frontend\",\n    \"value\": \"frontend\"\n  }\n]\n"
    );
}

#[tokio::test]
async fn test_idempotent_append() {
    let (_dir, repo) = setup_test_repo();

    let first = repo
        .append_if_absent("category", &option("Workshop", "workshop"))
        .await
        .unwrap();
    let second = repo
        .append_if_absent("category", &option("WORKSHOP", "Workshop"))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(second.len(), 1);
    assert_eq!(repo.get("category").await.unwrap(), first);
}

#[rstest]
#[case::label_collision(option("design", "design_2"))]
#[case::value_collision(option("Visual Design", "DESIGN"))]
#[tokio::test]
async fn test_case_insensitive_collision(#[case] duplicate: ListOption) {
    let (_dir, repo) = setup_test_repo();

    repo.append_if_absent("type", &option("Design", "design"))
        .await
        .unwrap();
    let options = repo.append_if_absent("type", &duplicate).await.unwrap();

    assert_eq!(options, vec![option("Design", "design")]);
}

#[tokio::test]
async fn test_insertion_order_preserved() {
    let (_dir, repo) = setup_test_repo();

    for (label, value) in [("Zeta", "zeta"), ("Alpha", "alpha"), ("Mid", "mid")] {
        repo.append_if_absent("area", &option(label, value))
            .await
            .unwrap();
    }
    repo.append_if_absent("area", &option("alpha", "alpha"))
        .await
        .unwrap();

    let labels: Vec<String> = repo
        .get("area")
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
}

#[tokio::test]
async fn test_legacy_entries_accepted() {
    let (_dir, repo) = setup_test_repo();
    std::fs::write(
        repo.list_path("type"),
        r#"[{"label": "Non Technical", "value": "Non-Technical"}]"#,
    )
    .unwrap();

    let options = repo
        .append_if_absent("type", &option("Technical", "technical"))
        .await
        .unwrap();
    assert_eq!(
        options,
        vec![
            option("Non Technical", "Non-Technical"),
            option("Technical", "technical"),
        ]
    );
}

#[rstest]
#[case("nonexistent")]
#[case("area.json")]
#[case("../area")]
#[tokio::test]
async fn test_invalid_list_name(#[case] name: &str) {
    let (dir, repo) = setup_test_repo();

    assert_eq!(
        repo.get(name).await,
        Err(DomainError::InvalidListName(name.to_string()))
    );
    assert_eq!(
        repo.append_if_absent(name, &option("X", "x")).await,
        Err(DomainError::InvalidListName(name.to_string()))
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_blank_fields_rejected() {
    let (_dir, repo) = setup_test_repo();

    let result = repo.append_if_absent("area", &option("  ", "frontend")).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert!(!repo.list_path("area").exists());
}

#[tokio::test]
async fn test_corrupt_file_is_read_error() {
    let (_dir, repo) = setup_test_repo();
    std::fs::write(repo.list_path("area"), "{ not json").unwrap();

    assert!(matches!(
        repo.get("area").await,
        Err(DomainError::StorageRead { .. })
    ));

    // Appending must not overwrite the unreadable file
    assert!(repo
        .append_if_absent("area", &option("Frontend", "frontend"))
        .await
        .is_err());
    assert_eq!(
        std::fs::read_to_string(repo.list_path("area")).unwrap(),
        "{ not json"
    );
}

#[tokio::test]
async fn test_failed_write_leaves_list_unchanged() {
    let (dir, repo) = setup_test_repo();
    repo.append_if_absent("area", &option("Frontend", "frontend"))
        .await
        .unwrap();
    let before = std::fs::read_to_string(repo.list_path("area")).unwrap();

    // A directory squatting on the temp path makes the write fail
    let blocker = dir.path().join(".area.json.tmp");
    std::fs::create_dir(&blocker).unwrap();

    let result = repo
        .append_if_absent("area", &option("Backend", "backend"))
        .await;
    assert!(matches!(result, Err(DomainError::StorageWrite { .. })));
    assert_eq!(
        repo.get("area").await.unwrap(),
        vec![option("Frontend", "frontend")]
    );
    assert_eq!(
        std::fs::read_to_string(repo.list_path("area")).unwrap(),
        before
    );

    std::fs::remove_dir(&blocker).unwrap();
    let options = repo
        .append_if_absent("area", &option("Backend", "backend"))
        .await
        .unwrap();
    assert_eq!(options.len(), 2);
}

#[tokio::test]
async fn test_lock_timeout_fails_fast() {
    let (_dir, repo) = setup_test_repo();
    let repo = repo.with_lock_timeout(Duration::from_millis(50));

    let lock = repo.lock_for("area").unwrap();
    let _held = lock.lock().await;

    let result = repo
        .append_if_absent("area", &option("Frontend", "frontend"))
        .await;
    assert!(matches!(result, Err(DomainError::StorageWrite { .. })));

    // Other lists are not blocked
    assert!(repo
        .append_if_absent("type", &option("Talk", "talk"))
        .await
        .is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_appends_are_not_lost() {
    let (_dir, repo) = setup_test_repo();
    let repo = Arc::new(repo);

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                let item = option(&format!("Item {i}"), &format!("item_{i}"));
                repo.append_if_absent("category", &item).await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().expect("Append failed");
    }

    let options = repo.get("category").await.unwrap();
    assert_eq!(options.len(), 16);
    for i in 0..16 {
        assert!(options.iter().any(|o| o.value == format!("item_{i}")));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_appends_store_one_entry() {
    let (_dir, repo) = setup_test_repo();
    let repo = Arc::new(repo);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = Arc::clone(&repo);
            let label = if i % 2 == 0 { "Frontend" } else { "frontend" };
            tokio::spawn(async move {
                repo.append_if_absent("area", &option(label, "frontend")).await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().expect("Append failed");
    }

    let options = repo.get("area").await.unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "frontend");
}
