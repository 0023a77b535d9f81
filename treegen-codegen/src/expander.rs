//! Catalogue expansion.
//!
//! [`TreeExpander`] walks a catalogue in order and hands each descriptor to a
//! [`TreeMethodExpander`], which emits one method for it. The signature is
//! shared logic ([`print_method_header`]); the body is up to the expander.
//!
//! A run is all-or-nothing: output is buffered and only returned once every
//! descriptor has been expanded.

use crate::error::{CodegenError, display_name};
use crate::render::RenderNode;
use crate::syntax::Syntax;
use crate::writer::{Emission, EmissionWriter};
use treegen_schema::{TreeNode, validate_catalogue_with};

/// A formal parameter placed before a node's own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    /// Parameter name.
    pub name: &'a str,
    /// Parameter type.
    pub type_name: &'a str,
}

impl<'a> Param<'a> {
    /// Creates a parameter.
    #[must_use]
    pub const fn new(name: &'a str, type_name: &'a str) -> Self {
        Self { name, type_name }
    }
}

/// Emits the signature of a method for `node`.
///
/// The formal parameters are `extra_params` followed by the node's fields in
/// declared order; the return type is the node's type. The body block is not
/// opened and the line is left unterminated.
pub fn print_method_header<'w>(
    writer: &'w mut EmissionWriter,
    node: &TreeNode,
    extra_params: &[Param<'_>],
) -> &'w mut EmissionWriter {
    let syntax = *writer.syntax();
    let mut params: Vec<String> = extra_params
        .iter()
        .map(|p| syntax.param(p.name, p.type_name))
        .collect();
    params.extend(node.formal_params(writer));

    let signature = syntax.signature(&syntax.factory_name(&node.name), &params, &node.name);
    writer.print(&signature)
}

/// Emits one method per descriptor.
pub trait TreeMethodExpander {
    /// Emits the complete method for `node`, header included.
    ///
    /// Every block opened here must be closed before returning.
    ///
    /// # Errors
    /// Returns `CodegenError` if the method cannot be emitted.
    fn print_tree_method(
        &self,
        writer: &mut EmissionWriter,
        node: &TreeNode,
    ) -> Result<(), CodegenError>;

    /// Emits the method signature for `node`; see [`print_method_header`].
    fn print_tree_method_header(
        &self,
        writer: &mut EmissionWriter,
        node: &TreeNode,
        extra_params: &[Param<'_>],
    ) {
        print_method_header(writer, node, extra_params);
    }

    /// Identifiers the emitted method introduces besides the node's fields.
    ///
    /// A node with a field of one of these names is rejected before anything
    /// is emitted.
    fn reserved_names(&self) -> &[&str] {
        &[]
    }
}

impl<F> TreeMethodExpander for F
where
    F: Fn(&mut EmissionWriter, &TreeNode) -> Result<(), CodegenError>,
{
    fn print_tree_method(
        &self,
        writer: &mut EmissionWriter,
        node: &TreeNode,
    ) -> Result<(), CodegenError> {
        self(writer, node)
    }
}

/// Per-descriptor bookkeeping for the duration of one method.
struct MethodContext<'a> {
    index: usize,
    node: &'a TreeNode,
    opened: usize,
    closed: usize,
    underflows: usize,
}

impl<'a> MethodContext<'a> {
    fn enter(index: usize, node: &'a TreeNode, writer: &EmissionWriter) -> Self {
        Self {
            index,
            node,
            opened: writer.opened(),
            closed: writer.closed(),
            underflows: writer.underflows(),
        }
    }

    /// Checks that the method left block nesting as it found it.
    fn leave(self, writer: &EmissionWriter) -> Result<(), CodegenError> {
        let opened = writer.opened() - self.opened;
        let closed = writer.closed() - self.closed;

        if opened != closed || writer.underflows() != self.underflows {
            return Err(CodegenError::UnbalancedBlock {
                index: self.index,
                name: display_name(&self.node.name),
                opened,
                closed,
            });
        }
        Ok(())
    }
}

/// Drives expansion of a whole catalogue.
#[derive(Debug, Clone, Default)]
pub struct TreeExpander {
    syntax: Syntax,
}

impl TreeExpander {
    /// Creates an expander rendering with `syntax`.
    #[must_use]
    pub fn new(syntax: Syntax) -> Self {
        Self { syntax }
    }

    /// Returns the rendering parameters.
    #[must_use]
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Expands every descriptor, in order, with `expander`.
    ///
    /// The whole catalogue is validated before anything is emitted. Each
    /// method ends on a complete line, and methods are separated by one blank
    /// line.
    ///
    /// # Errors
    /// Returns `CodegenError::MalformedDescriptor` for the first invalid or
    /// duplicate descriptor, `CodegenError::UnbalancedBlock` if the expander
    /// leaves blocks unbalanced, or `CodegenError::Expansion` wrapping an
    /// error the expander itself returns. No output is produced in any of
    /// these cases.
    pub fn expand_all<E>(&self, expander: &E, nodes: &[TreeNode]) -> Result<Emission, CodegenError>
    where
        E: TreeMethodExpander + ?Sized,
    {
        let mut writer = EmissionWriter::new(self.syntax);

        match self.expand_into(expander, nodes, &mut writer) {
            Ok(()) => {
                let emission = writer.finish();
                tracing::info!(
                    "Expanded {} descriptors into {} lines",
                    nodes.len(),
                    emission.len()
                );
                Ok(emission)
            }
            Err(e) => {
                tracing::warn!("Expansion aborted: {}", e);
                Err(e)
            }
        }
    }

    fn expand_into<E>(
        &self,
        expander: &E,
        nodes: &[TreeNode],
        writer: &mut EmissionWriter,
    ) -> Result<(), CodegenError>
    where
        E: TreeMethodExpander + ?Sized,
    {
        validate_catalogue_with(nodes, expander.reserved_names())
            .map_err(|(index, e)| CodegenError::malformed(index, &nodes[index].name, e))?;

        for (index, node) in nodes.iter().enumerate() {
            tracing::debug!(
                "Expanding descriptor #{} '{}' ({} fields)",
                index,
                node.name,
                node.fields.len()
            );

            if index > 0 {
                writer.newline();
            }

            let ctx = MethodContext::enter(index, node, writer);
            expander
                .print_tree_method(writer, node)
                .map_err(|e| e.in_descriptor(index, &node.name))?;
            ctx.leave(writer)?;
            writer.end_line();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treegen_schema::SchemaError;

    fn declare_only(writer: &mut EmissionWriter, node: &TreeNode) -> Result<(), CodegenError> {
        print_method_header(writer, node, &[]).end_statement();
        Ok(())
    }

    #[test]
    fn test_header_java() {
        let node = TreeNode::new("Ident").with_field("sym", "Symbol");
        let mut writer = EmissionWriter::new(Syntax::java());
        print_method_header(&mut writer, &node, &[Param::new("pos", "int")]);

        assert_eq!(
            writer.finish().lines(),
            ["public Ident create_Ident(int pos, Symbol sym)"]
        );
    }

    #[test]
    fn test_header_does_not_open_block() {
        let node = TreeNode::new("Empty");
        let mut writer = EmissionWriter::default();
        print_method_header(&mut writer, &node, &[]);

        assert_eq!(writer.opened(), 0);
        assert!(writer.lines().is_empty());
    }

    #[test]
    fn test_header_extra_params_come_first() {
        let node = TreeNode::new("Select")
            .with_field("qualifier", "Tree")
            .with_field("selector", "Name");
        let mut writer = EmissionWriter::new(Syntax::rust());
        print_method_header(
            &mut writer,
            &node,
            &[Param::new("pos", "i32"), Param::new("span", "Span")],
        );

        assert_eq!(
            writer.finish().lines(),
            ["pub fn create_Select(pos: i32, span: Span, qualifier: Tree, selector: Name) -> Select"]
        );
    }

    #[test]
    fn test_expand_all_preserves_order() {
        let nodes = vec![
            TreeNode::new("Select"),
            TreeNode::new("Apply"),
            TreeNode::new("Ident"),
        ];
        let emission = TreeExpander::default()
            .expand_all(&declare_only, &nodes)
            .expect("Failed to expand");

        assert_eq!(
            emission.lines(),
            [
                "public Select create_Select();",
                "",
                "public Apply create_Apply();",
                "",
                "public Ident create_Ident();",
            ]
        );
    }

    #[test]
    fn test_expand_all_empty_catalogue() {
        let emission = TreeExpander::default()
            .expand_all(&declare_only, &[])
            .expect("Failed to expand");
        assert!(emission.is_empty());
    }

    #[test]
    fn test_malformed_descriptor_aborts_run() {
        let nodes = vec![
            TreeNode::new("Ident"),
            TreeNode::new("Select"),
            TreeNode::new(""),
            TreeNode::new("Apply"),
        ];
        let result = TreeExpander::default().expand_all(&declare_only, &nodes);

        assert!(matches!(
            result,
            Err(CodegenError::MalformedDescriptor {
                index: 2,
                source: SchemaError::EmptyNodeName,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_field_type_is_malformed() {
        let nodes = vec![TreeNode::new("Ident").with_field("sym", "")];
        let result = TreeExpander::default().expand_all(&declare_only, &nodes);

        match result {
            Err(CodegenError::MalformedDescriptor { index, name, source }) => {
                assert_eq!(index, 0);
                assert_eq!(name, "Ident");
                assert!(matches!(source, SchemaError::EmptyFieldType { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_descriptor_is_malformed() {
        let nodes = vec![TreeNode::new("Ident"), TreeNode::new("Ident")];
        let result = TreeExpander::default().expand_all(&declare_only, &nodes);

        assert_eq!(result.err().and_then(|e| e.descriptor_index()), Some(1));
    }

    #[test]
    fn test_unclosed_block_is_unbalanced() {
        let leaky = |writer: &mut EmissionWriter, node: &TreeNode| -> Result<(), CodegenError> {
            print_method_header(writer, node, &[]).open_block();
            Ok(())
        };
        let nodes = vec![TreeNode::new("Ident")];
        let result = TreeExpander::default().expand_all(&leaky, &nodes);

        assert!(matches!(
            result,
            Err(CodegenError::UnbalancedBlock {
                index: 0,
                opened: 1,
                closed: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_stray_close_is_unbalanced() {
        let stray = |writer: &mut EmissionWriter, node: &TreeNode| -> Result<(), CodegenError> {
            print_method_header(writer, node, &[]);
            writer.close_block();
            Ok(())
        };
        let nodes = vec![TreeNode::new("Empty")];
        let result = TreeExpander::default().expand_all(&stray, &nodes);

        assert!(matches!(
            result,
            Err(CodegenError::UnbalancedBlock { ref name, closed: 1, .. }) if name == "Empty"
        ));
    }

    #[test]
    fn test_expander_error_propagates() {
        let failing = |writer: &mut EmissionWriter, _node: &TreeNode| -> Result<(), CodegenError> {
            writer.with_block(|w| {
                w.statement("partial");
                Err(CodegenError::generation("body failed"))
            })
        };
        let nodes = vec![TreeNode::new("Empty"), TreeNode::new("Ident")];
        let result = TreeExpander::default().expand_all(&failing, &nodes);

        match result {
            Err(CodegenError::Expansion { index, name, source }) => {
                assert_eq!(index, 0);
                assert_eq!(name, "Empty");
                assert!(matches!(*source, CodegenError::Generation { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_expander_error_names_failing_descriptor() {
        let fail_on_apply =
            |writer: &mut EmissionWriter, node: &TreeNode| -> Result<(), CodegenError> {
                if node.name == "Apply" {
                    return Err(CodegenError::generation("unsupported node"));
                }
                declare_only(writer, node)
            };
        let nodes = vec![TreeNode::new("Ident"), TreeNode::new("Apply")];
        let err = TreeExpander::default()
            .expand_all(&fail_on_apply, &nodes)
            .expect_err("Expansion should fail");

        assert_eq!(err.descriptor_index(), Some(1));
        assert_eq!(
            err.to_string(),
            "failed to expand descriptor #1 'Apply': generation error: unsupported node"
        );
    }

    #[test]
    fn test_reserved_field_name_is_malformed() {
        struct Reserving;

        impl TreeMethodExpander for Reserving {
            fn print_tree_method(
                &self,
                writer: &mut EmissionWriter,
                node: &TreeNode,
            ) -> Result<(), CodegenError> {
                declare_only(writer, node)
            }

            fn reserved_names(&self) -> &[&str] {
                &["pos"]
            }
        }

        let nodes = vec![
            TreeNode::new("Ident").with_field("sym", "Symbol"),
            TreeNode::new("Mark").with_field("pos", "int"),
        ];
        let result = TreeExpander::default().expand_all(&Reserving, &nodes);

        assert!(matches!(
            result,
            Err(CodegenError::MalformedDescriptor {
                index: 1,
                source: SchemaError::ReservedFieldName { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_validation_runs_before_emission() {
        let counting = std::cell::Cell::new(0);
        let count_calls =
            |writer: &mut EmissionWriter, node: &TreeNode| -> Result<(), CodegenError> {
                counting.set(counting.get() + 1);
                declare_only(writer, node)
            };
        let nodes = vec![TreeNode::new("Ident"), TreeNode::new("")];
        let result = TreeExpander::default().expand_all(&count_calls, &nodes);

        assert!(matches!(
            result,
            Err(CodegenError::MalformedDescriptor { index: 1, .. })
        ));
        assert_eq!(counting.get(), 0);
    }

    #[test]
    fn test_partial_last_line_still_separated() {
        let unterminated =
            |writer: &mut EmissionWriter, node: &TreeNode| -> Result<(), CodegenError> {
                print_method_header(writer, node, &[]).print(";");
                Ok(())
            };
        let nodes = vec![TreeNode::new("Ident"), TreeNode::new("Empty")];
        let emission = TreeExpander::default()
            .expand_all(&unterminated, &nodes)
            .expect("Failed to expand");

        assert_eq!(
            emission.lines(),
            [
                "public Ident create_Ident();",
                "",
                "public Empty create_Empty();",
            ]
        );
    }
}
