//! Capability resolution and wrapped-type disambiguation.
//!
//! Resolution asks the host's semantic model what each written attribute
//! denotes; usages the model cannot resolve contribute no capability and are
//! skipped without failing the candidate. Disambiguation then enforces the
//! exactly-one rule: a candidate must wrap one unambiguous type or it yields
//! no artifact at all.

use std::collections::BTreeSet;

use crate::model::{Capability, CandidateDeclaration, TypeName};
use crate::semantics::{AttributeSymbol, SemanticModel};
use crate::support;

/// An attribute usage whose defining symbol resolved, paired with the
/// literal argument text it was written with.
#[derive(Debug, Clone)]
pub struct ResolvedAttribute<'m> {
    /// The defining type symbol, owned by the semantic model.
    pub symbol: &'m AttributeSymbol,
    /// Literal argument-list text, `""` when no arguments were supplied.
    pub args: String,
    /// Position within the declaration's attribute list.
    pub index: usize,
}

/// Resolves each attribute usage of `candidate` against the semantic model,
/// preserving declaration order.
pub fn resolve_attributes<'m, M>(
    candidate: &CandidateDeclaration,
    model: &'m M,
) -> Vec<ResolvedAttribute<'m>>
where
    M: SemanticModel + ?Sized,
{
    candidate
        .attrs
        .iter()
        .filter_map(|usage| match model.resolve_attribute(&usage.path) {
            Some(symbol) => Some(ResolvedAttribute {
                symbol,
                args: usage.args.clone(),
                index: usage.index,
            }),
            None => {
                tracing::debug!(
                    candidate = %candidate.name,
                    attribute = %support::path_text(&usage.path),
                    "attribute did not resolve; it contributes no capability"
                );
                None
            }
        })
        .collect()
}

/// Reduces the resolved wrap capabilities to exactly one wrapped type.
///
/// Zero or two-and-more distinct types drop the candidate whole; the reason
/// is visible on the debug log but no diagnostic is raised.
pub fn disambiguate(
    candidate: &CandidateDeclaration,
    attrs: &[ResolvedAttribute<'_>],
) -> Option<TypeName> {
    let distinct: BTreeSet<&TypeName> = attrs
        .iter()
        .flat_map(|attr| attr.symbol.capabilities())
        .filter_map(|capability| match capability {
            Capability::Wraps(ty) => Some(ty),
            Capability::Validates(_) => None,
        })
        .collect();

    match distinct.len() {
        1 => distinct.first().map(|ty| (*ty).clone()),
        0 => {
            tracing::debug!(candidate = %candidate.name, "no wrapped-type capability; candidate dropped");
            None
        }
        n => {
            tracing::debug!(candidate = %candidate.name, distinct = n, "ambiguous wrapped type; candidate dropped");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::scan;
    use crate::semantics::SymbolTable;

    fn candidate(source: &str) -> CandidateDeclaration {
        scan::scan_file(&syn::parse_str(source).expect("valid source"))
            .into_iter()
            .next()
            .expect("one candidate")
    }

    #[test]
    fn unresolved_attributes_are_silently_excluded() {
        let mut table = SymbolTable::new();
        table.define("wrap_i32", AttributeSymbol::new("demo::WrapI32").wraps("i32"));

        let candidate = candidate("#[mystery] #[wrap_i32] struct Id;");
        let resolved = resolve_attributes(&candidate, &table);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].symbol.qualified_name().as_str(), "demo::WrapI32");
        assert_eq!(resolved[0].index, 1);
    }

    #[rstest]
    #[case::no_wrap(&[], None)]
    #[case::one_wrap(&["i32"], Some("i32"))]
    #[case::same_type_twice(&["i32", "i32"], Some("i32"))]
    #[case::two_distinct(&["i32", "i64"], None)]
    fn exactly_one_rule(#[case] wraps: &[&str], #[case] expected: Option<&str>) {
        let mut table = SymbolTable::new();
        let mut source = String::new();
        for (i, ty) in wraps.iter().enumerate() {
            table.define(
                format!("wrap_{i}"),
                AttributeSymbol::new(format!("demo::Wrap{i}")).wraps(*ty),
            );
            source.push_str(&format!("#[wrap_{i}] "));
        }
        // A trailing unresolvable marker keeps the attribute list non-empty
        // even when no wrap attribute is declared.
        source.push_str("#[marker] struct Id;");

        let candidate = candidate(&source);
        let resolved = resolve_attributes(&candidate, &table);
        let wrapped = disambiguate(&candidate, &resolved);

        assert_eq!(wrapped, expected.map(TypeName::from));
    }
}
