//! Default tree factory.
//!
//! For a node `D` with fields `f1..fn`, emits a method that takes a position
//! and the fields, constructs `D`, stamps the position on it and returns it:
//!
//! ```text
//! public Ident create_Ident(int pos, Symbol sym) {
//!     Ident t = new Ident(sym);
//!     t.pos = pos;
//!     return t;
//! }
//! ```

use crate::error::CodegenError;
use crate::expander::{Param, TreeMethodExpander};
use crate::render::RenderNode;
use crate::writer::EmissionWriter;
use treegen_schema::TreeNode;

/// Name of the position parameter and of the position attribute.
const POSITION: &str = "pos";
/// Name of the local holding the new node.
const LOCAL: &str = "t";

/// Expander emitting "allocate, stamp position, return" factory methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTreeFactory;

impl DefaultTreeFactory {
    /// Creates a new default factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TreeMethodExpander for DefaultTreeFactory {
    fn print_tree_method(
        &self,
        writer: &mut EmissionWriter,
        node: &TreeNode,
    ) -> Result<(), CodegenError> {
        let syntax = *writer.syntax();
        self.print_tree_method_header(
            writer,
            node,
            &[Param::new(POSITION, syntax.position_type)],
        );

        let mut body = writer.block();
        node.print_new(body.print(&syntax.binding_prefix(&node.name, LOCAL)))
            .end_statement();
        body.statement(&format!("{}.{} = {}", LOCAL, POSITION, POSITION));
        body.statement(&format!("return {}", LOCAL));

        Ok(())
    }

    fn reserved_names(&self) -> &[&str] {
        &[POSITION, LOCAL]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expander::TreeExpander;
    use crate::syntax::Syntax;

    fn expand(syntax: Syntax, nodes: &[TreeNode]) -> Vec<String> {
        TreeExpander::new(syntax)
            .expand_all(&DefaultTreeFactory::new(), nodes)
            .expect("Failed to expand")
            .into_lines()
    }

    #[test]
    fn test_ident_factory_java() {
        let lines = expand(
            Syntax::java(),
            &[TreeNode::new("Ident").with_field("sym", "Symbol")],
        );

        assert_eq!(
            lines,
            [
                "public Ident create_Ident(int pos, Symbol sym) {",
                "    Ident t = new Ident(sym);",
                "    t.pos = pos;",
                "    return t;",
                "}",
            ]
        );
    }

    #[test]
    fn test_ident_factory_rust() {
        let lines = expand(
            Syntax::rust(),
            &[TreeNode::new("Ident").with_field("sym", "Symbol")],
        );

        assert_eq!(
            lines,
            [
                "pub fn create_Ident(pos: i32, sym: Symbol) -> Ident {",
                "    let mut t = Ident::new(sym);",
                "    t.pos = pos;",
                "    return t;",
                "}",
            ]
        );
    }

    #[test]
    fn test_leaf_takes_only_position() {
        let lines = expand(Syntax::java(), &[TreeNode::new("Empty")]);

        assert_eq!(lines[0], "public Empty create_Empty(int pos) {");
        assert_eq!(lines[1], "    Empty t = new Empty();");
    }

    #[test]
    fn test_fields_keep_declared_order() {
        let node = TreeNode::new("If")
            .with_field("cond", "Tree")
            .with_field("thenp", "Tree")
            .with_field("elsep", "Tree");
        let lines = expand(Syntax::java(), &[node]);

        assert_eq!(
            lines[0],
            "public If create_If(int pos, Tree cond, Tree thenp, Tree elsep) {"
        );
        assert_eq!(lines[1], "    If t = new If(cond, thenp, elsep);");
    }

    #[test]
    fn test_blocks_balance_per_method() {
        let nodes = vec![
            TreeNode::new("Ident").with_field("sym", "Symbol"),
            TreeNode::new("Empty"),
            TreeNode::new("Apply")
                .with_field("fun", "Tree")
                .with_field("args", "Tree[]"),
        ];
        let lines = expand(Syntax::java(), &nodes);

        let mut depth: i32 = 0;
        for line in &lines {
            if line.ends_with('{') {
                depth += 1;
            }
            if line.trim() == "}" {
                depth -= 1;
            }
            assert!(depth >= 0, "close without open at {:?}", line);
        }
        assert_eq!(depth, 0);
        assert_eq!(lines.iter().filter(|l| l.ends_with('{')).count(), nodes.len());
    }

    #[test]
    fn test_field_named_like_position_or_local_is_rejected() {
        let nodes = vec![
            TreeNode::new("Ident").with_field("sym", "Symbol"),
            TreeNode::new("Mark")
                .with_field("pos", "int")
                .with_field("t", "Tree"),
        ];
        let result =
            TreeExpander::new(Syntax::java()).expand_all(&DefaultTreeFactory::new(), &nodes);

        match result {
            Err(CodegenError::MalformedDescriptor {
                index,
                name,
                source,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "Mark");
                assert_eq!(
                    source,
                    treegen_schema::SchemaError::ReservedFieldName {
                        node: "Mark".to_string(),
                        field: "pos".to_string(),
                    }
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_position_type_is_configurable() {
        let lines = expand(
            Syntax::rust().with_position_type("u32"),
            &[TreeNode::new("Empty")],
        );
        assert_eq!(lines[0], "pub fn create_Empty(pos: u32) -> Empty {");
    }
}
