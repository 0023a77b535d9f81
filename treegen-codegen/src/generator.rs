//! Generation front door.

use crate::error::CodegenError;
use crate::expander::{TreeExpander, TreeMethodExpander};
use crate::factory::DefaultTreeFactory;
use crate::syntax::Syntax;
use crate::writer::Emission;
use treegen_schema::TreeNode;

/// Builder for one generation run over a catalogue.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    nodes: &'a [TreeNode],
    syntax: Syntax,
}

impl<'a> Generator<'a> {
    /// Creates a generator over a catalogue, rendering Java-style output.
    #[must_use]
    pub fn new<C>(catalogue: &'a C) -> Self
    where
        C: AsRef<[TreeNode]> + ?Sized,
    {
        Self {
            nodes: catalogue.as_ref(),
            syntax: Syntax::default(),
        }
    }

    /// Sets the output syntax.
    #[must_use]
    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Expands the catalogue with the default tree factory.
    ///
    /// # Errors
    /// Returns `CodegenError` if any descriptor cannot be expanded.
    pub fn expand(&self) -> Result<Emission, CodegenError> {
        self.expand_with(&DefaultTreeFactory::new())
    }

    /// Expands the catalogue with a custom method expander.
    ///
    /// # Errors
    /// Returns `CodegenError` if any descriptor cannot be expanded.
    pub fn expand_with<E>(&self, expander: &E) -> Result<Emission, CodegenError>
    where
        E: TreeMethodExpander + ?Sized,
    {
        TreeExpander::new(self.syntax).expand_all(expander, self.nodes)
    }

    /// Generates source text with the default tree factory.
    ///
    /// # Errors
    /// Returns `CodegenError` if any descriptor cannot be expanded.
    pub fn generate(&self) -> Result<String, CodegenError> {
        Ok(self.expand()?.to_source())
    }
}
