//! # treegen
//!
//! Factory method generator for compiler AST node catalogues.
//!
//! Given an ordered catalogue of node descriptors (a name plus typed fields),
//! treegen emits one factory method per node that constructs the node,
//! stamps it with a source position and returns it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use treegen::prelude::*;
//!
//! let catalogue: Catalogue = vec![TreeNode::new("Ident").with_field("sym", "Symbol")].into();
//! let source = Generator::new(&catalogue).syntax(Syntax::java()).generate()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Node descriptors, XML catalogue parsing and validation
//! - [`codegen`] - Emission writer, expansion engine and default factory

pub mod prelude;

/// Node descriptors and catalogue loading.
pub mod schema {
    pub use treegen_schema::*;
}

/// Factory method generation.
pub mod codegen {
    pub use treegen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use treegen_codegen::{
    CodegenError, DefaultTreeFactory, Emission, Generator, Syntax, generate_from_file,
    generate_from_xml,
};
pub use treegen_schema::{Catalogue, TreeField, TreeNode, parse_catalogue};
