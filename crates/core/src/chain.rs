//! Validation chain assembly.
//!
//! Keeps, in declaration order, the attributes that validate the resolved
//! wrapped type. Argument text is passed through untouched — the generated
//! constructor re-invokes each validator with exactly the parameters written
//! at the declaration site.

use crate::model::{Capability, TypeName, ValidationStep};
use crate::resolve::ResolvedAttribute;

/// Selects the validation steps for a candidate resolved to wrap `wrapped`.
///
/// Only capabilities matching the exact resolved type participate; no
/// reordering, deduplication or argument evaluation happens here.
pub fn build_chain(attrs: &[ResolvedAttribute<'_>], wrapped: &TypeName) -> Vec<ValidationStep> {
    attrs
        .iter()
        .filter(|attr| {
            attr.symbol
                .capabilities()
                .iter()
                .any(|capability| matches!(capability, Capability::Validates(ty) if ty == wrapped))
        })
        .map(|attr| ValidationStep {
            validator: attr.symbol.qualified_name().clone(),
            args: attr.args.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::resolve;
    use crate::scan;
    use crate::semantics::{AttributeSymbol, SymbolTable};

    fn steps(source: &str, table: &SymbolTable) -> Vec<ValidationStep> {
        let candidate = scan::scan_file(&syn::parse_str(source).expect("valid source"))
            .into_iter()
            .next()
            .expect("one candidate");
        let resolved = resolve::resolve_attributes(&candidate, table);
        let wrapped = resolve::disambiguate(&candidate, &resolved).expect("resolved");
        build_chain(&resolved, &wrapped)
    }

    #[test]
    fn chain_follows_declaration_order_around_the_wrap_marker() {
        let mut table = SymbolTable::new();
        table.define("checks_a", AttributeSymbol::new("demo::ChecksA").validates("i32"));
        table.define("wrap_i32", AttributeSymbol::new("demo::WrapI32").wraps("i32"));
        table.define("checks_b", AttributeSymbol::new("demo::ChecksB").validates("i32"));

        let steps = steps("#[checks_a] #[wrap_i32] #[checks_b] struct Id;", &table);
        let validators: Vec<_> = steps.iter().map(|s| s.validator.as_str()).collect();
        assert_eq!(validators, ["demo::ChecksA", "demo::ChecksB"]);
    }

    #[test]
    fn validators_of_other_types_are_filtered_out() {
        let mut table = SymbolTable::new();
        table.define("wrap_i32", AttributeSymbol::new("demo::WrapI32").wraps("i32"));
        table.define("len", AttributeSymbol::new("demo::Len").validates("String"));

        let steps = steps("#[wrap_i32] #[len(3)] struct Id;", &table);
        assert!(steps.is_empty());
    }

    #[test]
    fn argument_text_is_passed_through_verbatim() {
        let mut table = SymbolTable::new();
        table.define(
            "range",
            AttributeSymbol::new("demo::Range").wraps("i32").validates("i32"),
        );

        let steps = steps("#[range(1, 100)] struct Id;", &table);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].args, "(1, 100)");
    }

    #[test]
    fn repeated_validators_are_kept_not_deduplicated() {
        let mut table = SymbolTable::new();
        table.define(
            "wrap_i32",
            AttributeSymbol::new("demo::WrapI32").wraps("i32").validates("i32"),
        );
        table.define("min", AttributeSymbol::new("demo::Min").validates("i32"));

        let steps = steps("#[wrap_i32] #[min(1)] #[min(1)] struct Id;", &table);
        let validators: Vec<_> = steps.iter().map(|s| s.validator.as_str()).collect();
        assert_eq!(validators, ["demo::WrapI32", "demo::Min", "demo::Min"]);
    }
}
