use crate::query::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, FunctionCall, Ident},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Column(ident) => ident.render(r),
            Expr::Alias { expr, alias } => {
                expr.render(r);
                r.sql.push_str(" as ");
                r.sql.push_str(alias);
            }
            Expr::FunctionCall(func) => func.render(r),
            Expr::BinaryOp(op) => op.render(r),
            Expr::Literal(text) | Expr::Raw(text) => r.sql.push_str(text),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(qualifier);
            r.sql.push('.');
        }
        r.sql.push_str(&self.name);
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);
        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::Assign => "=",
        };
        r.sql.push_str(op_str);
        self.right.render(r);
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push('(');
        r.render_list(&self.args, ",");
        r.sql.push(')');
    }
}
