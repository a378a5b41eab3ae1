//! Requires a Docker daemon for the MySQL container.
//! Run with: cargo test -p portal-storage --test mysql_repository_integration -- --ignored

use std::time::Duration;

use portal_core::{Code, LinkEntry};
use portal_storage::{MySqlRepository, ReadRepository, Repository, StorageError};
use portal_test_infra::mysql::{MySqlServer, MysqlConfig};
use sqlx::mysql::MySqlPoolOptions;

struct Fixture {
    _mysql: MySqlServer,
    repo: MySqlRepository,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::new(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let url = mysql.database_url().await.expect("mysql url");
        let pool = connect_with_retry(&url).await;

        sqlx::query(include_str!("../ddl/mysql/links.sql"))
            .execute(&pool)
            .await
            .expect("create schema");

        Self {
            _mysql: mysql,
            repo: MySqlRepository::new(pool),
        }
    }
}

async fn connect_with_retry(url: &str) -> sqlx::MySqlPool {
    let mut last_error = None;

    for _ in 0..20 {
        match MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
        {
            Ok(pool) => return pool,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect mysql: {last_error:?}");
}

fn code(value: &str) -> Code {
    Code::new_unchecked(value)
}

fn entry(c: &str, url: &str) -> LinkEntry {
    LinkEntry::new(code(c), url)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn insert_and_get() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(entry("abc123", "https://example.com"))
        .await
        .unwrap();

    let got = fixture.repo.get(&code("abc123")).await.unwrap().unwrap();
    assert_eq!(got, entry("abc123", "https://example.com"));
    assert!(fixture.repo.exists(&code("abc123")).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn insert_conflicts_when_code_already_exists() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(entry("abc123", "https://one.example"))
        .await
        .unwrap();

    let err = fixture
        .repo
        .insert(entry("abc123", "https://two.example"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Conflict(_)));
    let got = fixture.repo.get(&code("abc123")).await.unwrap().unwrap();
    assert_eq!(got.url, "https://one.example");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn codes_differing_in_case_are_distinct() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(entry("abc", "https://lower.example"))
        .await
        .unwrap();
    fixture
        .repo
        .insert(entry("ABC", "https://upper.example"))
        .await
        .unwrap();

    let got = fixture.repo.get(&code("ABC")).await.unwrap().unwrap();
    assert_eq!(got.url, "https://upper.example");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn update_reports_presence() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(entry("abc123", "https://example.com"))
        .await
        .unwrap();

    assert!(fixture
        .repo
        .update(&code("abc123"), "https://example.org")
        .await
        .unwrap());
    // same value again: no rows changed, but the row exists
    assert!(fixture
        .repo
        .update(&code("abc123"), "https://example.org")
        .await
        .unwrap());
    assert!(!fixture
        .repo
        .update(&code("missing"), "https://example.org")
        .await
        .unwrap());

    let got = fixture.repo.get(&code("abc123")).await.unwrap().unwrap();
    assert_eq!(got.url, "https://example.org");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn delete_is_idempotent() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(entry("to-delete", "https://example.com"))
        .await
        .unwrap();

    assert!(fixture.repo.delete(&code("to-delete")).await.unwrap());
    assert!(fixture.repo.get(&code("to-delete")).await.unwrap().is_none());
    assert!(!fixture.repo.delete(&code("to-delete")).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn list_is_ordered_by_code() {
    let fixture = Fixture::start().await;

    for c in ["z1", "a1", "m1"] {
        fixture
            .repo
            .insert(entry(c, "https://example.com"))
            .await
            .unwrap();
    }

    let codes: Vec<String> = fixture
        .repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.code.into_string())
        .collect();
    assert_eq!(codes, ["a1", "m1", "z1"]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn trailing_spaces_are_significant() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .insert(entry("abc", "https://example.com"))
        .await
        .unwrap();

    assert!(fixture.repo.get(&code("abc ")).await.unwrap().is_none());
    assert!(!fixture.repo.exists(&code("abc ")).await.unwrap());

    fixture
        .repo
        .insert(entry("abc ", "https://spaced.example"))
        .await
        .unwrap();
    let got = fixture.repo.get(&code("abc ")).await.unwrap().unwrap();
    assert_eq!(got.url, "https://spaced.example");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn longest_code_fits_the_column() {
    let fixture = Fixture::start().await;
    let long = "中".repeat(portal_core::code::MAX_CODE_LEN);

    fixture
        .repo
        .insert(entry(&long, "https://example.com"))
        .await
        .unwrap();

    assert!(fixture.repo.exists(&code(&long)).await.unwrap());
}
