use crate::query::{
    ast::{
        common::JoinKind,
        select::{FromClause, JoinClause, Select, TableItem},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("select ");
        r.render_list(&self.columns, ",");

        // 2. FROM, synthesized joins, then the rest of the table clause
        r.sql.push_str(" from ");
        self.from.render(r);
        for join in &self.joins {
            r.sql.push(' ');
            join.render(r);
        }
        for item in &self.tail {
            r.sql.push(' ');
            item.render(r);
        }

        // 3. WHERE
        if !self.where_clause.is_empty() {
            r.sql.push_str(" where ");
            r.render_list(&self.where_clause, " ");
        }

        // 4. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" order by ");
            r.render_list(&self.order_by, " ");
        }
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.table.name);
        r.sql.push(' ');
        r.sql.push_str(&self.alias);
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        let join_str = match self.kind {
            JoinKind::Left => "left join",
        };
        r.sql.push_str(join_str);
        r.sql.push(' ');
        r.sql.push_str(&self.table.name);
        r.sql.push(' ');
        r.sql.push_str(&self.alias);
        r.sql.push_str(" on ");
        self.on.render(r);
    }
}

impl Render for TableItem {
    fn render(&self, r: &mut Renderer) {
        match self {
            TableItem::Table { table, alias } => {
                r.sql.push_str(&table.name);
                r.sql.push(' ');
                r.sql.push_str(alias);
            }
            TableItem::Token(expr) => expr.render(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        query::{
            ast::{
                common::{JoinKind, TableRef},
                expr::{BinaryOp, BinaryOperator, Expr},
                select::{FromClause, JoinClause, Select, TableItem},
            },
            column, raw,
            renderer::to_sql,
        },
        table_ref,
    };

    fn from(table: &str) -> FromClause {
        FromClause {
            table: table_ref!(table),
            alias: "t0".to_string(),
        }
    }

    #[test]
    fn test_render_simple_select() {
        let ast = Select {
            columns: vec![column("t0", "id")],
            from: from("foo"),
            joins: vec![],
            tail: vec![],
            where_clause: vec![],
            order_by: vec![],
        };

        assert_eq!(to_sql(&ast), "select t0.id from foo t0");
    }

    #[test]
    fn test_render_joins_tail_where_and_order() {
        let ast = Select {
            columns: vec![column("t0", "id"), column("t1", "name")],
            from: from("orders"),
            joins: vec![JoinClause {
                kind: JoinKind::Left,
                table: TableRef::new("users"),
                alias: "t1".to_string(),
                on: Expr::BinaryOp(Box::new(BinaryOp::new(
                    column("t0", "user_id"),
                    BinaryOperator::Eq,
                    column("t1", "id"),
                ))),
            }],
            tail: vec![
                TableItem::Token(raw(",")),
                TableItem::Table {
                    table: table_ref!("items"),
                    alias: "t2".to_string(),
                },
            ],
            where_clause: vec![column("t0", "total"), raw(">"), raw("10")],
            order_by: vec![column("t1", "name"), raw("desc")],
        };

        assert_eq!(
            to_sql(&ast),
            "select t0.id,t1.name from orders t0 left join users t1 on t0.user_id = t1.id , items t2 \
             where t0.total > 10 order by t1.name desc"
        );
    }
}
