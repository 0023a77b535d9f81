//! Prelude module for convenient imports.
//!
//! ```ignore
//! use treegen::prelude::*;
//! ```

// Descriptor model
pub use treegen_schema::{
    Catalogue, ParseError, SchemaError, TreeField, TreeNode, parse_catalogue, validate_catalogue,
};

// Generation
pub use treegen_codegen::{
    BlockGuard, CodegenError, DefaultTreeFactory, Emission, EmissionWriter, Generator, Param,
    RenderNode, Syntax, TreeExpander, TreeMethodExpander, print_method_header,
};
