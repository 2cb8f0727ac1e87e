#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::query::ast::common::TableRef {
            name: $name.to_string(),
        }
    };
}

/// Creates a column expression qualified by a table alias.
#[macro_export]
macro_rules! column {
    ($qualifier:expr, $name:expr) => {
        $crate::query::ast::expr::Expr::Column($crate::query::ast::expr::Ident {
            qualifier: Some($qualifier.to_string()),
            name: $name.to_string(),
        })
    };
}

/// Creates an aliased column expression: `column_as!("t0", "name", "t0_name")`.
#[macro_export]
macro_rules! column_as {
    ($qualifier:expr, $name:expr, $alias:expr) => {
        $crate::query::ast::expr::Expr::Alias {
            expr: Box::new($crate::column!($qualifier, $name)),
            alias: $alias.to_string(),
        }
    };
}
