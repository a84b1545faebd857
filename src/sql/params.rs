//! Values bound to `?` placeholders.

use sqlx::sqlite::Sqlite;

/// A value that can be bound to a SQLite query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::Int(n)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

/// Prepare `sql` and bind every parameter in order.
pub fn bind_all<'q>(
    sql: &'q str,
    params: &'q [BindValue],
) -> sqlx::query::Query<'q, Sqlite, <Sqlite as sqlx::Database>::Arguments<'q>> {
    params.iter().fold(sqlx::query(sql), |query, p| match p {
        BindValue::Int(n) => query.bind(*n),
        BindValue::Text(s) => query.bind(s.as_str()),
    })
}
