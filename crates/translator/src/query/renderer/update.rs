use crate::query::{
    ast::update::{Assignment, Update},
    renderer::{Render, Renderer},
};

impl Render for Update {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("update ");
        r.sql.push_str(&self.table.name);
        r.sql.push_str(" set ");
        r.render_list(&self.assignments, ",");
        r.sql.push_str(" where ");
        self.where_clause.render(r);
    }
}

impl Render for Assignment {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.column);
        r.sql.push('=');
        self.value.render(r);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        query::{
            ast::{
                expr::{BinaryOp, BinaryOperator, Expr, Ident},
                update::{Assignment, Update},
            },
            renderer::to_sql,
        },
        table_ref,
    };

    #[test]
    fn test_render_update() {
        let ast = Update {
            table: table_ref!("users"),
            assignments: vec![
                Assignment {
                    column: "name".to_string(),
                    value: Expr::Literal("'ann'".to_string()),
                },
                Assignment {
                    column: "age".to_string(),
                    value: Expr::Literal("null".to_string()),
                },
            ],
            where_clause: Expr::BinaryOp(Box::new(BinaryOp::new(
                Expr::Column(Ident::bare("id")),
                BinaryOperator::Assign,
                Expr::Literal("7".to_string()),
            ))),
        };

        assert_eq!(
            to_sql(&ast),
            "update users set name='ann',age=null where id=7"
        );
    }
}
