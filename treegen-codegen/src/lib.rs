//! # treegen Codegen
//!
//! Factory method generation from AST node catalogues.
//!
//! This crate provides:
//! - A line-oriented emission writer with scoped blocks
//! - Target-language syntax parameters (Java-style and Rust-style presets)
//! - The catalogue expansion engine and its method expander trait
//! - The default "allocate, stamp position, return" tree factory

pub mod error;
pub mod expander;
pub mod factory;
pub mod generator;
pub mod render;
pub mod syntax;
pub mod writer;

pub use error::CodegenError;
pub use expander::{Param, TreeExpander, TreeMethodExpander, print_method_header};
pub use factory::DefaultTreeFactory;
pub use generator::Generator;
pub use render::RenderNode;
pub use syntax::Syntax;
pub use writer::{BlockGuard, Emission, EmissionWriter};

/// Generates factory methods from an XML catalogue string.
///
/// # Arguments
/// * `xml` - XML catalogue content
///
/// # Returns
/// Generated source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<String, CodegenError> {
    let catalogue = treegen_schema::parse_catalogue(xml)?;
    Generator::new(&catalogue).generate()
}

/// Generates factory methods from an XML catalogue file.
///
/// # Arguments
/// * `path` - Path to the XML catalogue file
///
/// # Returns
/// Generated source as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}
