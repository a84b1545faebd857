//! Builds parameterized SELECTs from declarative projections.

use super::params::BindValue;

/// Columns read from one table, exposed to mappers under `scope`.
/// Each column is selected as `"scope.column"`, so joined tables with the
/// same column names never collide.
#[derive(Debug)]
pub struct Projection {
    pub scope: &'static str,
    pub columns: &'static [&'static str],
}

impl Projection {
    /// Row key under which `column` of this projection is returned.
    pub fn key(&self, column: &str) -> String {
        scoped_key(self.scope, column)
    }
}

pub fn scoped_key(scope: &str, column: &str) -> String {
    format!("{}.{}", scope, column)
}

/// Quote identifier for SQLite (safe: only from projections and query definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `alias."column"`
fn column_ref(alias: &str, column: &str) -> String {
    format!("{}.{}", alias, quoted(column))
}

/// Escape LIKE wildcards so user input only ever matches literally.
fn escape_like(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_sql(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

/// Incremental SELECT. Joins are always inner joins.
#[derive(Debug)]
pub struct Select {
    columns: Vec<String>,
    from: String,
    joins: Vec<String>,
    predicates: Vec<String>,
    group_by: Vec<String>,
    order_by: Vec<String>,
    params: Vec<BindValue>,
}

impl Select {
    pub fn from(table: &str, alias: &str) -> Self {
        Select {
            columns: Vec::new(),
            from: format!("{} {}", quoted(table), alias),
            joins: Vec::new(),
            predicates: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Select every column of `projection` from the table aliased `alias`.
    pub fn project(mut self, alias: &str, projection: &Projection) -> Self {
        for column in projection.columns {
            self.columns.push(format!(
                "{} AS {}",
                column_ref(alias, column),
                quoted(&projection.key(column))
            ));
        }
        self
    }

    /// `INNER JOIN table alias ON alias.key = parent.key`
    pub fn inner_join(mut self, table: &str, alias: &str, key: &str, parent: &str) -> Self {
        self.joins.push(format!(
            "INNER JOIN {} {} ON {} = {}",
            quoted(table),
            alias,
            column_ref(alias, key),
            column_ref(parent, key)
        ));
        self
    }

    pub fn where_eq(mut self, alias: &str, column: &str, value: impl Into<BindValue>) -> Self {
        self.predicates.push(format!("{} = ?", column_ref(alias, column)));
        self.params.push(value.into());
        self
    }

    /// Case-insensitive exact match, used for reference codes.
    pub fn where_ref(mut self, alias: &str, column: &str, reference: &str) -> Self {
        self.predicates
            .push(format!("LOWER({}) = LOWER(?)", column_ref(alias, column)));
        self.params.push(reference.into());
        self
    }

    /// Case-insensitive prefix match. `%` and `_` in `prefix` match literally.
    pub fn where_prefix(mut self, alias: &str, column: &str, prefix: &str) -> Self {
        self.predicates.push(format!(
            "LOWER({}) LIKE LOWER(?) ESCAPE '\\'",
            column_ref(alias, column)
        ));
        self.params.push(format!("{}%", escape_like(prefix)).into());
        self
    }

    /// Inclusive range on an integer column.
    pub fn where_between(mut self, alias: &str, column: &str, start: i64, end: i64) -> Self {
        self.predicates
            .push(format!("{} BETWEEN ? AND ?", column_ref(alias, column)));
        self.params.push(start.into());
        self.params.push(end.into());
        self
    }

    pub fn group_by(mut self, alias: &str, column: &str) -> Self {
        self.group_by.push(column_ref(alias, column));
        self
    }

    pub fn order_by(mut self, alias: &str, column: &str, order: Order) -> Self {
        self.order_by
            .push(format!("{} {}", column_ref(alias, column), order.as_sql()));
        self
    }

    /// Order by the smallest value of `column` within each group.
    pub fn order_by_min(mut self, alias: &str, column: &str, order: Order) -> Self {
        self.order_by
            .push(format!("MIN({}) {}", column_ref(alias, column), order.as_sql()));
        self
    }

    pub fn build(self) -> QueryBuf {
        let mut sql = format!("SELECT {} FROM {}", self.columns.join(", "), self.from);
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.predicates.join(" AND "));
        }
        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }
        QueryBuf {
            sql,
            params: self.params,
        }
    }
}
