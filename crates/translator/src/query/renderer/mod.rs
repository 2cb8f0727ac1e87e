//! Defines the core rendering trait and context for converting AST to SQL.

pub mod delete;
pub mod expr;
pub mod insert;
pub mod select;
pub mod update;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the SQL text while an AST is rendered.
///
/// Values are inlined as literals, so there is no parameter list.
#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Renders each node, separated by `sep`.
    pub fn render_list<T: Render>(&mut self, nodes: &[T], sep: &str) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(sep);
            }
            node.render(self);
        }
    }
}

/// Renders a single node to an owned string.
pub fn to_sql<T: Render + ?Sized>(node: &T) -> String {
    let mut renderer = Renderer::new();
    node.render(&mut renderer);
    renderer.finish()
}
