//! # treegen Schema
//!
//! AST node descriptors and the catalogue that holds them.
//!
//! This crate provides:
//! - The descriptor model (`TreeNode`, `TreeField`, `Catalogue`)
//! - XML catalogue parsing
//! - Descriptor validation

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::parse_catalogue;
pub use types::{Catalogue, TreeField, TreeNode};
pub use validation::{
    validate_catalogue, validate_catalogue_with, validate_node, validate_node_with,
};
