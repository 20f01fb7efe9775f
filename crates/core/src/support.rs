//! Canonical token-to-text rendering.
//!
//! Attribute argument lists travel through the pipeline as text and are
//! re-emitted verbatim into generated constructors, so the rendering must be
//! deterministic: the same tokens always produce the same string.

use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};

/// Renders an attribute path as written, e.g. `demo::range`.
pub fn path_text(path: &syn::Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (i, segment) in path.segments.iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
    }
    out
}

/// Extracts the literal argument-list text of an attribute.
///
/// `#[range(0, 100)]` yields `"(0, 100)"`; a bare `#[marker]` (and the
/// name-value form, which carries no argument list) yields `""`.
pub fn argument_text(attr: &syn::Attribute) -> String {
    match &attr.meta {
        syn::Meta::List(list) => format!("({})", tokens_text(&list.tokens)),
        syn::Meta::Path(_) | syn::Meta::NameValue(_) => String::new(),
    }
}

/// Renders a token stream with canonical spacing: word tokens (idents and
/// literals) are space-separated, commas take a trailing space, all other
/// punctuation is glued. Re-parsing the result yields the same tokens.
pub fn tokens_text(tokens: &TokenStream) -> String {
    let mut out = String::new();
    let mut prev_word = false;
    for tree in tokens.clone() {
        match tree {
            TokenTree::Ident(ident) => {
                if prev_word {
                    out.push(' ');
                }
                out.push_str(&ident.to_string());
                prev_word = true;
            }
            TokenTree::Literal(literal) => {
                if prev_word {
                    out.push(' ');
                }
                out.push_str(&literal.to_string());
                prev_word = true;
            }
            TokenTree::Punct(punct) => {
                out.push(punct.as_char());
                if punct.as_char() == ',' && punct.spacing() == Spacing::Alone {
                    out.push(' ');
                }
                prev_word = false;
            }
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                // Call-style groups glue to the preceding word: `min(1)`.
                if prev_word && group.delimiter() == Delimiter::Brace {
                    out.push(' ');
                }
                out.push_str(open);
                out.push_str(&tokens_text(&group.stream()));
                out.push_str(close);
                prev_word = true;
            }
        }
    }
    // A trailing comma leaves a dangling space.
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
