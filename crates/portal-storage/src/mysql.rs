use crate::error::{is_unique_violation, map_sqlx_error};
use async_trait::async_trait;
use portal_core::repository::{ReadRepository, Repository, Result};
use portal_core::{Code, LinkEntry, StorageError};
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::{MySqlPool, Row};
use std::time::Duration;
use tracing::debug;

/// MySQL implementation of the repository contract.
///
/// Expects the `links` table from `ddl/mysql/links.sql`. The primary key on
/// `code` is what guarantees uniqueness; a violated key is reported as
/// [`StorageError::Conflict`]. The column uses the NO PAD binary collation
/// `utf8mb4_0900_bin`, so codes compare and sort byte for byte and trailing
/// spaces are significant.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Opens a pool with an explicit size and connection acquire timeout.
    pub async fn connect_with(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }
}

fn row_to_entry(row: &MySqlRow) -> Result<LinkEntry> {
    let code: String = row.try_get("code").map_err(map_sqlx_error)?;
    let url: String = row.try_get("url").map_err(map_sqlx_error)?;
    Ok(LinkEntry::new(Code::new_unchecked(code), url))
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn get(&self, code: &Code) -> Result<Option<LinkEntry>> {
        let row = sqlx::query(
            r#"
            SELECT code, url
            FROM links
            WHERE code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_entry).transpose()
    }

    async fn exists(&self, code: &Code) -> Result<bool> {
        let exists = sqlx::query(
            r#"
            SELECT 1
            FROM links
            WHERE code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .is_some();

        Ok(exists)
    }

    async fn list(&self) -> Result<Vec<LinkEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT code, url
            FROM links
            ORDER BY code ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_entry).collect()
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn insert(&self, entry: LinkEntry) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (code, url)
            VALUES (?, ?)
            "#,
        )
        .bind(entry.code.as_str())
        .bind(entry.url.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(entry.code.into_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn update(&self, code: &Code, url: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET url = ?
            WHERE code = ?
            "#,
        )
        .bind(url)
        .bind(code.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // MySQL counts changed rows, so writing the current url reports zero.
        debug!(code = %code, "update changed no rows, checking existence");
        self.exists(code).await
    }

    async fn delete(&self, code: &Code) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM links
            WHERE code = ?
            "#,
        )
        .bind(code.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
