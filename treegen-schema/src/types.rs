//! Descriptor model for AST node kinds.
//!
//! A [`TreeNode`] names one node kind and lists the typed fields every
//! instance of it carries. Field order is significant: it is both the
//! constructor-argument order and the formal-parameter order of generated
//! factory methods.

/// A typed field of a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeField {
    /// Field name.
    pub name: String,
    /// Field type, rendered verbatim into generated code.
    pub type_name: String,
}

impl TreeField {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Descriptor of one AST node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Node name, which is also the node's type in generated code.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<TreeField>,
}

impl TreeNode {
    /// Creates a node with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, consuming and returning the node.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.add_field(TreeField::new(name, type_name));
        self
    }

    /// Adds a field to the node.
    pub fn add_field(&mut self, field: TreeField) {
        self.fields.push(field);
    }

    /// Returns true if the node carries no fields.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&TreeField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The ordered set of descriptors processed in one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    /// Nodes in output order.
    pub nodes: Vec<TreeNode>,
}

impl Catalogue {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at the end of the catalogue.
    pub fn add_node(&mut self, node: TreeNode) {
        self.nodes.push(node);
    }

    /// Gets a node by name.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the catalogue holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the nodes in catalogue order.
    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.nodes.iter()
    }
}

impl From<Vec<TreeNode>> for Catalogue {
    fn from(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<TreeNode> for Catalogue {
    fn from_iter<I: IntoIterator<Item = TreeNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a TreeNode;
    type IntoIter = std::slice::Iter<'a, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl AsRef<[TreeNode]> for Catalogue {
    fn as_ref(&self) -> &[TreeNode] {
        &self.nodes
    }
}
