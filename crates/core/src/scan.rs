//! Declaration scanner: a single syntactic pass over a source file.
//!
//! Candidates are unit structs carrying at least one attribute; the empty
//! body is the marker that the declaration is open for a generated
//! definition. No semantic information is consulted here, so the pass is
//! cheap and can run per file.

use crate::model::{AttributeUsage, CandidateDeclaration};
use crate::support;

/// Collects candidate declarations in tree order.
pub fn scan_file(file: &syn::File) -> Vec<CandidateDeclaration> {
    let mut found = Vec::new();
    let mut namespace = Vec::new();
    walk_items(&file.items, &mut namespace, &mut found);
    found
}

fn walk_items(
    items: &[syn::Item],
    namespace: &mut Vec<String>,
    found: &mut Vec<CandidateDeclaration>,
) {
    for item in items {
        match item {
            syn::Item::Struct(item) => {
                if matches!(item.fields, syn::Fields::Unit) && !item.attrs.is_empty() {
                    found.push(candidate_from(item, namespace));
                }
            }
            syn::Item::Mod(module) => {
                // Only inline modules contribute namespace segments; an
                // out-of-line `mod x;` has no content in this tree.
                if let Some((_, items)) = &module.content {
                    namespace.push(module.ident.to_string());
                    walk_items(items, namespace, found);
                    namespace.pop();
                }
            }
            _ => {}
        }
    }
}

fn candidate_from(item: &syn::ItemStruct, namespace: &[String]) -> CandidateDeclaration {
    let attrs = item
        .attrs
        .iter()
        .enumerate()
        .map(|(index, attr)| AttributeUsage {
            path: attr.path().clone(),
            args: support::argument_text(attr),
            index,
        })
        .collect();

    let candidate = CandidateDeclaration {
        name: item.ident.to_string(),
        namespace: namespace.to_vec(),
        attrs,
    };
    tracing::debug!(name = %candidate.name, namespace = %candidate.namespace.join("."), "found candidate declaration");
    candidate
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scan(source: &str) -> Vec<CandidateDeclaration> {
        scan_file(&syn::parse_str(source).expect("valid source"))
    }

    #[test]
    fn finds_attributed_unit_structs_in_tree_order() {
        let found = scan(
            r"
            #[wrap_i32]
            struct First;

            #[wrap_i32]
            struct Second;
            ",
        );
        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn skips_structs_without_attributes() {
        assert!(scan("struct Plain;").is_empty());
    }

    #[test]
    fn skips_structs_with_fields() {
        let found = scan(
            r"
            #[wrap_i32]
            struct Closed {
                value: i32,
            }
            ",
        );
        assert!(found.is_empty());
    }

    #[test]
    fn records_the_enclosing_module_chain_outer_to_inner() {
        let found = scan(
            r"
            mod foo {
                mod bar {
                    #[wrap_i32]
                    struct Name;
                }
            }
            ",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].namespace, ["foo", "bar"]);
    }

    #[test]
    fn preserves_attribute_order_and_argument_text() {
        let found = scan(
            r"
            #[checks_a]
            #[wrap_i32]
            #[checks_b(1, 100)]
            struct Guarded;
            ",
        );
        let attrs = &found[0].attrs;
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs[0].index, 0);
        assert_eq!(attrs[2].args, "(1, 100)");
    }
}
