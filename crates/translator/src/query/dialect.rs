//! Defines the `Dialect` trait for database-specific SQL fragments.
//!
//! Compiled statements are dialect-agnostic. A dialect only wraps them
//! with pagination, locking and identifier-return clauses.

/// Lock requested around a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockType {
    TableRead,
    TableWrite,
    RowRead,
    RowWrite,
}

pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;

    /// Appends the row-limiting clause for `start` (offset) and `limit`.
    fn paginate(&self, sql: &str, start: Option<u64>, limit: Option<u64>) -> String;

    /// Returns the locking statement or suffix for `lock`.
    ///
    /// Table locks name `tables`, each prefixed with `schema` when given.
    /// Row locks are suffixes to append to a select.
    fn lock(&self, lock: LockType, tables: &[&str], schema: Option<&str>) -> String;

    /// Returns the clause that makes an insert yield its generated key,
    /// or an empty string when the dialect has none.
    fn insert_returning(&self, id_column: &str) -> String;
}

fn qualify_tables(tables: &[&str], schema: Option<&str>) -> String {
    tables
        .iter()
        .map(|t| match schema {
            Some(s) => format!("{}.{}", s, t),
            None => t.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> String {
        "PostgreSQL".into()
    }

    fn paginate(&self, sql: &str, start: Option<u64>, limit: Option<u64>) -> String {
        match (start.filter(|s| *s > 0), limit.filter(|l| *l > 0)) {
            (Some(start), Some(limit)) => format!("{} LIMIT {} OFFSET {}", sql, limit, start),
            (None, Some(limit)) => format!("{} LIMIT {}", sql, limit),
            (Some(start), None) => format!("{} OFFSET {}", sql, start),
            (None, None) => sql.to_string(),
        }
    }

    fn lock(&self, lock: LockType, tables: &[&str], schema: Option<&str>) -> String {
        match lock {
            LockType::TableRead => format!(
                "LOCK TABLE {} IN SHARE MODE",
                qualify_tables(tables, schema)
            ),
            LockType::TableWrite => format!(
                "LOCK TABLE {} IN EXCLUSIVE MODE",
                qualify_tables(tables, schema)
            ),
            LockType::RowRead => "FOR SHARE".into(),
            LockType::RowWrite => "FOR UPDATE".into(),
        }
    }

    fn insert_returning(&self, id_column: &str) -> String {
        format!("RETURNING {}", id_column)
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> String {
        "MySQL".into()
    }

    fn paginate(&self, sql: &str, start: Option<u64>, limit: Option<u64>) -> String {
        match (start.filter(|s| *s > 0), limit.filter(|l| *l > 0)) {
            (Some(start), Some(limit)) => format!("{} LIMIT {},{}", sql, start, limit),
            (None, Some(limit)) => format!("{} LIMIT {}", sql, limit),
            // MySQL has no bare OFFSET; the documented idiom is the max row count.
            (Some(start), None) => format!("{} LIMIT {},18446744073709551615", sql, start),
            (None, None) => sql.to_string(),
        }
    }

    fn lock(&self, lock: LockType, tables: &[&str], schema: Option<&str>) -> String {
        let with_mode = |mode: &str| {
            tables
                .iter()
                .map(|t| match schema {
                    Some(s) => format!("{}.{} {}", s, t, mode),
                    None => format!("{} {}", t, mode),
                })
                .collect::<Vec<_>>()
                .join(",")
        };
        match lock {
            LockType::TableRead => format!("LOCK TABLES {}", with_mode("READ")),
            LockType::TableWrite => format!("LOCK TABLES {}", with_mode("WRITE")),
            LockType::RowRead => "LOCK IN SHARE MODE".into(),
            LockType::RowWrite => "FOR UPDATE".into(),
        }
    }

    fn insert_returning(&self, _id_column: &str) -> String {
        String::new()
    }
}

/// Resolves a dialect by its command-line name.
pub fn dialect_for(name: &str) -> Option<Box<dyn Dialect>> {
    match name.to_ascii_lowercase().as_str() {
        "postgres" | "postgresql" | "pg" => Some(Box::new(Postgres)),
        "mysql" => Some(Box::new(MySql)),
        _ => None,
    }
}
