//! Descriptor validation.
//!
//! A descriptor is well formed when its name is non-empty and every field has
//! a non-empty, unique name and a non-empty type. A catalogue is well formed
//! when every node is, and no two nodes share a name.
//!
//! Generated methods introduce identifiers of their own (a position
//! parameter, a local). Those are passed in as reserved names, and a field
//! using one of them is rejected.

use crate::error::SchemaError;
use crate::types::TreeNode;
use std::collections::HashSet;

/// Validates a single node descriptor.
///
/// # Errors
/// Returns the first `SchemaError` found, checking the node name first and
/// then each field in declaration order.
pub fn validate_node(node: &TreeNode) -> Result<(), SchemaError> {
    validate_node_with(node, &[])
}

/// Validates a single node descriptor whose fields may not use `reserved`.
///
/// # Errors
/// Returns the first `SchemaError` found, checking the node name first and
/// then each field in declaration order.
pub fn validate_node_with(node: &TreeNode, reserved: &[&str]) -> Result<(), SchemaError> {
    if node.name.is_empty() {
        return Err(SchemaError::EmptyNodeName);
    }

    let mut seen_fields = HashSet::new();

    for field in &node.fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName {
                node: node.name.clone(),
            });
        }

        if field.type_name.is_empty() {
            return Err(SchemaError::EmptyFieldType {
                node: node.name.clone(),
                field: field.name.clone(),
            });
        }

        if reserved.contains(&field.name.as_str()) {
            return Err(SchemaError::ReservedFieldName {
                node: node.name.clone(),
                field: field.name.clone(),
            });
        }

        if !seen_fields.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                node: node.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}

/// Validates every node of a catalogue, in order.
///
/// # Returns
/// Ok(()) if valid, or the catalogue index of the first offending node
/// together with its defect.
///
/// # Errors
/// Returns `(index, SchemaError)` for the first malformed or duplicate node.
pub fn validate_catalogue<'a, I>(nodes: I) -> Result<(), (usize, SchemaError)>
where
    I: IntoIterator<Item = &'a TreeNode>,
{
    validate_catalogue_with(nodes, &[])
}

/// Validates every node of a catalogue, in order, against `reserved` field
/// names.
///
/// # Errors
/// Returns `(index, SchemaError)` for the first malformed or duplicate node.
pub fn validate_catalogue_with<'a, I>(
    nodes: I,
    reserved: &[&str],
) -> Result<(), (usize, SchemaError)>
where
    I: IntoIterator<Item = &'a TreeNode>,
{
    let mut seen_names = HashSet::new();

    for (index, node) in nodes.into_iter().enumerate() {
        validate_node_with(node, reserved).map_err(|e| (index, e))?;

        if !seen_names.insert(node.name.as_str()) {
            return Err((
                index,
                SchemaError::DuplicateNode {
                    name: node.name.clone(),
                },
            ));
        }
    }

    Ok(())
}
