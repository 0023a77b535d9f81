//! Target-language rendering parameters.
//!
//! Everything that differs between output languages (block tokens, statement
//! terminators, parameter and return-type layout, how a node is constructed
//! and bound) lives here, so the engine and strategies stay syntax-agnostic.

/// How a formal parameter is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `Type name`
    TypeName,
    /// `name: Type`
    NameColonType,
}

/// Where a method's return type is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnStyle {
    /// `Type name(...)`
    Leading,
    /// `name(...) -> Type`
    Trailing,
}

/// How a local variable binding is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStyle {
    /// `Type var = `
    Typed,
    /// `let mut var = `
    Let,
}

/// How a node instance is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructStyle {
    /// `new Type(args)`
    NewKeyword,
    /// `Type::new(args)`
    AssociatedNew,
}

/// Rendering parameters for one output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    /// Indentation unit, repeated once per open block.
    pub indent: &'static str,
    /// Block-opening token.
    pub block_open: &'static str,
    /// Block-closing token.
    pub block_close: &'static str,
    /// Statement terminator.
    pub terminator: &'static str,
    /// Text printed before the method signature, e.g. `public` or `pub fn`.
    pub method_prefix: &'static str,
    /// Prefix prepended to a node name to form its factory method name.
    pub factory_prefix: &'static str,
    /// Type of the position parameter.
    pub position_type: &'static str,
    /// Formal parameter layout.
    pub params: ParamStyle,
    /// Return type placement.
    pub returns: ReturnStyle,
    /// Local binding layout.
    pub binding: BindingStyle,
    /// Construction expression layout.
    pub construct: ConstructStyle,
}

impl Syntax {
    /// Java-style output: `public Ident create_Ident(int pos, Symbol sym) {`.
    #[must_use]
    pub const fn java() -> Self {
        Self {
            indent: "    ",
            block_open: "{",
            block_close: "}",
            terminator: ";",
            method_prefix: "public",
            factory_prefix: "create_",
            position_type: "int",
            params: ParamStyle::TypeName,
            returns: ReturnStyle::Leading,
            binding: BindingStyle::Typed,
            construct: ConstructStyle::NewKeyword,
        }
    }

    /// Rust-style output: `pub fn create_Ident(pos: i32, sym: Symbol) -> Ident {`.
    #[must_use]
    pub const fn rust() -> Self {
        Self {
            indent: "    ",
            block_open: "{",
            block_close: "}",
            terminator: ";",
            method_prefix: "pub fn",
            factory_prefix: "create_",
            position_type: "i32",
            params: ParamStyle::NameColonType,
            returns: ReturnStyle::Trailing,
            binding: BindingStyle::Let,
            construct: ConstructStyle::AssociatedNew,
        }
    }

    /// Sets the position parameter type.
    #[must_use]
    pub const fn with_position_type(mut self, position_type: &'static str) -> Self {
        self.position_type = position_type;
        self
    }

    /// Sets the factory method name prefix.
    #[must_use]
    pub const fn with_factory_prefix(mut self, prefix: &'static str) -> Self {
        self.factory_prefix = prefix;
        self
    }

    /// Sets the indentation unit.
    #[must_use]
    pub const fn with_indent(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    /// Renders one formal parameter.
    #[must_use]
    pub fn param(&self, name: &str, type_name: &str) -> String {
        match self.params {
            ParamStyle::TypeName => format!("{} {}", type_name, name),
            ParamStyle::NameColonType => format!("{}: {}", name, type_name),
        }
    }

    /// Returns the factory method name for a node.
    #[must_use]
    pub fn factory_name(&self, node_name: &str) -> String {
        format!("{}{}", self.factory_prefix, node_name)
    }

    /// Renders a method signature from already-rendered parameters.
    #[must_use]
    pub fn signature(&self, name: &str, params: &[String], return_type: &str) -> String {
        let mut out = String::new();
        if !self.method_prefix.is_empty() {
            out.push_str(self.method_prefix);
            out.push(' ');
        }
        if self.returns == ReturnStyle::Leading {
            out.push_str(return_type);
            out.push(' ');
        }
        out.push_str(name);
        out.push('(');
        out.push_str(&params.join(", "));
        out.push(')');
        if self.returns == ReturnStyle::Trailing {
            out.push_str(" -> ");
            out.push_str(return_type);
        }
        out
    }

    /// Renders the prefix of a local binding, up to and including `= `.
    #[must_use]
    pub fn binding_prefix(&self, type_name: &str, var: &str) -> String {
        match self.binding {
            BindingStyle::Typed => format!("{} {} = ", type_name, var),
            BindingStyle::Let => format!("let mut {} = ", var),
        }
    }

    /// Renders a construction expression.
    #[must_use]
    pub fn construct(&self, type_name: &str, args: &[&str]) -> String {
        match self.construct {
            ConstructStyle::NewKeyword => format!("new {}({})", type_name, args.join(", ")),
            ConstructStyle::AssociatedNew => format!("{}::new({})", type_name, args.join(", ")),
        }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::java()
    }
}
