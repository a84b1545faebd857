//! Read-only data source: the only component that talks to the store.

use crate::sql::{bind_all, QueryBuf};
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// One result row, keyed by projected column alias.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Value> for Row {
    /// Non-object values produce an empty row.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Row(map),
            _ => Row::default(),
        }
    }
}

/// Parameterized read access. `fetch_one` yields `None` when nothing matches.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_all(&self, query: &QueryBuf) -> Result<Vec<Row>, DataSourceError>;
    async fn fetch_one(&self, query: &QueryBuf) -> Result<Option<Row>, DataSourceError>;
}

#[derive(Clone, Debug)]
pub struct SqliteDataSource {
    pool: SqlitePool,
}

impl SqliteDataSource {
    /// Open the database file read-only. The file must already exist.
    pub async fn open(path: impl AsRef<Path>, max_connections: u32) -> Result<Self, DataSourceError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|source| DataSourceError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), "opened read-only database");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used with in-memory databases).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataSource for SqliteDataSource {
    async fn fetch_all(&self, query: &QueryBuf) -> Result<Vec<Row>, DataSourceError> {
        tracing::debug!(sql = %query.sql, params = ?query.params, "query");
        let rows = bind_all(&query.sql, &query.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(row_to_map).collect())
    }

    async fn fetch_one(&self, query: &QueryBuf) -> Result<Option<Row>, DataSourceError> {
        tracing::debug!(sql = %query.sql, params = ?query.params, "query");
        let row = bind_all(&query.sql, &query.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(row_to_map))
    }
}

fn row_to_map(row: &SqliteRow) -> Row {
    use sqlx::Column;
    use sqlx::Row as _;
    let mut map = Map::new();
    for col in row.columns() {
        map.insert(col.name().to_string(), cell_to_value(row, col.ordinal()));
    }
    Row(map)
}

/// SQLite is dynamically typed: try each storage class in turn.
fn cell_to_value(row: &SqliteRow, idx: usize) -> Value {
    use sqlx::Row as _;
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(idx) {
        return Value::Number(n.into());
    }
    if let Ok(Some(f)) = row.try_get::<Option<f64>, _>(idx) {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(idx) {
        return Value::String(s);
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::BindValue;

    async fn memory_source() -> SqliteDataSource {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory sqlite");
        sqlx::raw_sql(
            "CREATE TABLE t (id INTEGER PRIMARY KEY, label TEXT, score REAL, extra);
             INSERT INTO t VALUES (1, 'one', 1.5, NULL), (2, 'two', 2.0, 'x');",
        )
        .execute(&pool)
        .await
        .expect("seed");
        SqliteDataSource::from_pool(pool)
    }

    fn query(sql: &str, params: Vec<BindValue>) -> QueryBuf {
        QueryBuf {
            sql: sql.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn fetch_all_converts_each_storage_class() {
        let source = memory_source().await;
        let rows = source
            .fetch_all(&query("SELECT id, label, score, extra FROM t ORDER BY id", vec![]))
            .await
            .expect("fetch");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("id"), Some(&Value::from(1)));
        assert_eq!(rows[0].get("label"), Some(&Value::from("one")));
        assert_eq!(rows[0].get("score"), Some(&Value::from(1.5)));
        assert_eq!(rows[0].get("extra"), Some(&Value::Null));
    }

    #[tokio::test]
    async fn fetch_one_is_none_when_nothing_matches() {
        let source = memory_source().await;
        let row = source
            .fetch_one(&query("SELECT id FROM t WHERE id = ?", vec![BindValue::Int(99)]))
            .await
            .expect("fetch");
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn bound_text_is_never_interpolated() {
        let source = memory_source().await;
        let rows = source
            .fetch_all(&query(
                "SELECT id FROM t WHERE label = ?",
                vec![BindValue::Text("one' OR '1'='1".into())],
            ))
            .await
            .expect("fetch");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn invalid_sql_is_a_query_error() {
        let source = memory_source().await;
        let err = source
            .fetch_all(&query("SELECT nope FROM missing", vec![]))
            .await
            .expect_err("missing table");
        assert!(matches!(err, DataSourceError::Query(_)));
    }

    #[tokio::test]
    async fn open_fails_for_missing_file() {
        let err = SqliteDataSource::open("/nonexistent/dir/f1.db", 1)
            .await
            .expect_err("missing file");
        assert!(matches!(err, DataSourceError::Open { .. }));
    }
}
