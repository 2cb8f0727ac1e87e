use crate::query::{
    ast::insert::Insert,
    renderer::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("insert into ");
        r.sql.push_str(&self.table.name);
        r.sql.push_str(" (");
        r.sql.push_str(&self.columns.join(","));
        r.sql.push_str(") values (");
        r.render_list(&self.values, ",");
        r.sql.push(')');
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        query::{
            ast::{expr::Expr, insert::Insert},
            renderer::to_sql,
        },
        table_ref,
    };

    #[test]
    fn test_render_insert() {
        let ast = Insert {
            table: table_ref!("users"),
            columns: vec!["id".to_string(), "name".to_string(), "manager".to_string()],
            values: vec![
                Expr::Literal("1".to_string()),
                Expr::Literal("'ann'".to_string()),
                Expr::Literal("null".to_string()),
            ],
        };

        assert_eq!(
            to_sql(&ast),
            "insert into users (id,name,manager) values (1,'ann',null)"
        );
    }
}
