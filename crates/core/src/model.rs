//! Data carried between pipeline stages.
//!
//! Everything here is plain data: candidates are created by the scanner,
//! enriched by the resolver, and discarded once their artifact (if any) has
//! been registered. Nothing is shared between candidates.

use std::fmt;

/// A fully-qualified type display name, as produced by the host's semantic
/// model.
///
/// The disambiguator compares wrapped types by this name, so two
/// capabilities wrap "the same type" exactly when the semantic model
/// displays them identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName(String);

impl TypeName {
    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A declared relation an attribute's defining type advertises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// The attribute marks its declaration as wrapping values of this type.
    Wraps(TypeName),
    /// The attribute's defining type validates values of this type. It is
    /// expected to expose `new(...)` matching its attribute arguments and to
    /// implement the external `Validate` contract for the type.
    Validates(TypeName),
}

/// One syntactic attribute application on a candidate declaration.
#[derive(Debug, Clone)]
pub struct AttributeUsage {
    /// The path the attribute was written with, used for semantic lookup.
    pub path: syn::Path,
    /// Literal argument-list text, parentheses included, exactly as written
    /// (canonical token spacing). Empty when no arguments were supplied.
    pub args: String,
    /// Position within the declaration's attribute list; defines chain order.
    pub index: usize,
}

/// A type declaration eligible for generation: a unit struct carrying at
/// least one attribute. The empty body marks it as open for the generated
/// definition.
#[derive(Debug, Clone)]
pub struct CandidateDeclaration {
    /// The declared identifier.
    pub name: String,
    /// Enclosing module segments, outer to inner. Empty at file scope.
    pub namespace: Vec<String>,
    /// Attribute applications in declaration order.
    pub attrs: Vec<AttributeUsage>,
}

/// One entry of the validation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationStep {
    /// Fully-qualified name of the validating attribute's defining type.
    pub validator: TypeName,
    /// Literal argument text re-emitted verbatim into the constructor call.
    pub args: String,
}

/// The sole artifact handed to the emitter. Pure data, independent of the
/// syntax tree it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    /// Enclosing module segments, outer to inner.
    pub namespace: Vec<String>,
    /// The wrapper type's name.
    pub name: String,
    /// The single wrapped type.
    pub wrapped: TypeName,
    /// Validation steps in declaration order.
    pub steps: Vec<ValidationStep>,
}

impl GeneratedType {
    /// The stable key the rendered text is registered under: the dot-joined
    /// namespace-qualified name, or the bare name at file scope.
    pub fn output_key(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace.join("."), self.name)
        }
    }
}
