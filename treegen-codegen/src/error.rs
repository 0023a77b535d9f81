//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Catalogue parse error.
    #[error("catalogue parse error: {0}")]
    Parse(#[from] treegen_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A descriptor cannot be expanded.
    #[error("malformed descriptor #{index} '{name}': {source}")]
    MalformedDescriptor {
        /// Position in the catalogue.
        index: usize,
        /// Descriptor name, or `<unnamed>` when empty.
        name: String,
        /// The defect found.
        #[source]
        source: treegen_schema::SchemaError,
    },

    /// A method expander left blocks unbalanced.
    #[error(
        "unbalanced blocks in method for descriptor #{index} '{name}': opened {opened}, closed {closed}"
    )]
    UnbalancedBlock {
        /// Position in the catalogue.
        index: usize,
        /// Descriptor name.
        name: String,
        /// Blocks opened while expanding the descriptor.
        opened: usize,
        /// Blocks closed while expanding the descriptor.
        closed: usize,
    },

    /// A method expander failed on a descriptor.
    #[error("failed to expand descriptor #{index} '{name}': {source}")]
    Expansion {
        /// Position in the catalogue.
        index: usize,
        /// Descriptor name.
        name: String,
        /// The expander's error.
        #[source]
        source: Box<CodegenError>,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a malformed descriptor error.
    pub fn malformed(
        index: usize,
        name: &str,
        source: treegen_schema::SchemaError,
    ) -> Self {
        Self::MalformedDescriptor {
            index,
            name: display_name(name),
            source,
        }
    }

    /// Attaches the descriptor being expanded, unless the error already
    /// names one.
    #[must_use]
    pub fn in_descriptor(self, index: usize, name: &str) -> Self {
        if self.descriptor_index().is_some() {
            return self;
        }
        Self::Expansion {
            index,
            name: display_name(name),
            source: Box::new(self),
        }
    }

    /// Returns the catalogue index of the offending descriptor, if any.
    #[must_use]
    pub fn descriptor_index(&self) -> Option<usize> {
        match self {
            Self::MalformedDescriptor { index, .. }
            | Self::UnbalancedBlock { index, .. }
            | Self::Expansion { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Name used in diagnostics for a possibly empty descriptor name.
pub(crate) fn display_name(name: &str) -> String {
    if name.is_empty() {
        "<unnamed>".to_string()
    } else {
        name.to_string()
    }
}
