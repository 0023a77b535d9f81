//! Error types for catalogue parsing and descriptor validation.

use thiserror::Error;

/// Error type for catalogue parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Invalid catalogue structure.
    #[error("invalid catalogue structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

/// A defect in a single descriptor, or in the catalogue as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The node has an empty name.
    #[error("node name is empty")]
    EmptyNodeName,

    /// A field of the node has an empty name.
    #[error("field name is empty in node '{node}'")]
    EmptyFieldName {
        /// Node name.
        node: String,
    },

    /// A field of the node has an empty type.
    #[error("field '{field}' of node '{node}' has an empty type")]
    EmptyFieldType {
        /// Node name.
        node: String,
        /// Field name.
        field: String,
    },

    /// A field name collides with an identifier the generated method uses.
    #[error("field '{field}' of node '{node}' uses a reserved name")]
    ReservedFieldName {
        /// Node name.
        node: String,
        /// Field name.
        field: String,
    },

    /// Two fields of the same node share a name.
    #[error("duplicate field '{field}' in node '{node}'")]
    DuplicateField {
        /// Node name.
        node: String,
        /// Field name.
        field: String,
    },

    /// Two nodes of the catalogue share a name.
    #[error("duplicate node definition: '{name}'")]
    DuplicateNode {
        /// Node name.
        name: String,
    },
}
