//! The semantic lookup surface supplied by the host.
//!
//! The pipeline never inspects attribute-defining types itself; it asks a
//! [`SemanticModel`] what a written attribute path resolves to and which
//! capabilities the resolved symbol declares. Capabilities are first-class
//! data, not display-string patterns.

use std::collections::HashMap;

use crate::model::{Capability, TypeName};
use crate::support;

/// A resolved attribute-defining type: its fully-qualified display name and
/// the capabilities it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSymbol {
    qualified_name: TypeName,
    capabilities: Vec<Capability>,
}

impl AttributeSymbol {
    /// A symbol with the given fully-qualified display name and no
    /// capabilities yet.
    pub fn new(qualified_name: impl Into<TypeName>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            capabilities: Vec::new(),
        }
    }

    /// Declares that this attribute marks its target as wrapping `ty`.
    #[must_use]
    pub fn wraps(mut self, ty: impl Into<TypeName>) -> Self {
        self.capabilities.push(Capability::Wraps(ty.into()));
        self
    }

    /// Declares that this attribute's defining type validates values of `ty`.
    #[must_use]
    pub fn validates(mut self, ty: impl Into<TypeName>) -> Self {
        self.capabilities.push(Capability::Validates(ty.into()));
        self
    }

    /// The fully-qualified display name of the defining type.
    pub fn qualified_name(&self) -> &TypeName {
        &self.qualified_name
    }

    /// All declared capabilities, in declaration order.
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }
}

/// Semantic lookup over an already-materialized symbol table.
///
/// Queries are synchronous and read-only; the host owns the table's
/// lifetime. An unresolvable path is answered with `None` — never an error —
/// and the caller treats the usage as contributing no capability.
pub trait SemanticModel {
    /// Resolves the attribute path as written at a use site to its defining
    /// type symbol, if the host knows one.
    fn resolve_attribute(&self, path: &syn::Path) -> Option<&AttributeSymbol>;
}

/// In-memory [`SemanticModel`] keyed by the attribute path as written.
///
/// Hosts that materialize their symbol information up front register each
/// attribute name once; the pipeline then runs without further host calls.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, AttributeSymbol>,
}

impl SymbolTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the symbol an attribute path resolves to. `path` must match
    /// the use-site spelling, e.g. `"range"` or `"demo::range"`.
    pub fn define(&mut self, path: impl Into<String>, symbol: AttributeSymbol) -> &mut Self {
        self.symbols.insert(path.into(), symbol);
        self
    }
}

impl SemanticModel for SymbolTable {
    fn resolve_attribute(&self, path: &syn::Path) -> Option<&AttributeSymbol> {
        self.symbols.get(&support::path_text(path))
    }
}
