use crate::query::{
    ast::delete::Delete,
    renderer::{Render, Renderer},
};

impl Render for Delete {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("delete from ");
        r.sql.push_str(&self.table.name);
        r.sql.push_str(" where ");
        self.where_clause.render(r);
    }
}
