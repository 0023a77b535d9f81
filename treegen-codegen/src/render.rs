//! Node-level rendering helpers.

use crate::writer::EmissionWriter;
use treegen_schema::TreeNode;

/// Renders parts of a node descriptor into a writer.
pub trait RenderNode {
    /// Appends a construction of this node, passing every field in declared
    /// order, to the current line.
    fn print_new<'w>(&self, writer: &'w mut EmissionWriter) -> &'w mut EmissionWriter;

    /// Renders the node's fields as formal parameters in declared order.
    fn formal_params(&self, writer: &EmissionWriter) -> Vec<String>;
}

impl RenderNode for TreeNode {
    fn print_new<'w>(&self, writer: &'w mut EmissionWriter) -> &'w mut EmissionWriter {
        let args: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
        let expr = writer.syntax().construct(&self.name, &args);
        writer.print(&expr)
    }

    fn formal_params(&self, writer: &EmissionWriter) -> Vec<String> {
        let syntax = writer.syntax();
        self.fields
            .iter()
            .map(|f| syntax.param(&f.name, &f.type_name))
            .collect()
    }
}
