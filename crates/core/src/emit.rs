//! Deterministic rendering of generated wrapper types.
//!
//! The emitter is a pure function from [`GeneratedType`] to text: no
//! timestamps, no environment lookups, no randomness. Host build systems
//! cache artifacts by key and content, so identical inputs must produce
//! byte-identical output.
//!
//! Core-library paths in the emitted text are absolute (`::core::...`,
//! `::valwrap_contract::...`); validator paths are emitted exactly as the
//! semantic model displayed them.

use std::fmt::Write as _;

use crate::model::GeneratedType;

const HEADER: &str = "// Generated by valwrap. Do not edit.";

/// Renders the complete artifact text for a generated type.
pub fn render(generated: &GeneratedType) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");

    let depth = generated.namespace.len();
    for (level, segment) in generated.namespace.iter().enumerate() {
        out.push('\n');
        line(&mut out, level, &format!("pub mod {segment} {{"));
    }
    render_body(&mut out, depth, generated);
    for level in (0..depth).rev() {
        line(&mut out, level, "}");
    }
    out
}

fn render_body(out: &mut String, depth: usize, generated: &GeneratedType) {
    let name = &generated.name;
    let wrapped = &generated.wrapped;

    out.push('\n');
    line(out, depth, &format!("pub struct {name} {{"));
    line(out, depth + 1, &format!("value: {wrapped},"));
    line(out, depth, "}");

    // Constructor: the validation chain runs in declaration order; the first
    // failure propagates unchanged and nothing is constructed.
    out.push('\n');
    line(out, depth, &format!("impl {name} {{"));
    line(out, depth + 1, "/// Validates `value` and wraps it on success.");
    line(
        out,
        depth + 1,
        &format!(
            "pub fn new(value: {wrapped}) -> ::core::result::Result<Self, ::valwrap_contract::ValidationError> {{"
        ),
    );
    if !generated.steps.is_empty() {
        line(out, depth + 2, "use ::valwrap_contract::Validate as _;");
        for step in &generated.steps {
            let args = if step.args.is_empty() {
                "()"
            } else {
                step.args.as_str()
            };
            line(
                out,
                depth + 2,
                &format!("{}::new{args}.validate(&value)?;", step.validator),
            );
        }
    }
    line(out, depth + 2, "Ok(Self { value })");
    line(out, depth + 1, "}");
    line(out, depth, "}");

    // Wrapper association: the hook external serializers and binders use to
    // marshal the type transparently as its wrapped value. Also the explicit
    // unwrap surface.
    out.push('\n');
    line(
        out,
        depth,
        &format!("impl ::valwrap_contract::Wrapper for {name} {{"),
    );
    line(out, depth + 1, &format!("type Value = {wrapped};"));
    out.push('\n');
    line(out, depth + 1, &format!("fn value(&self) -> &{wrapped} {{"));
    line(out, depth + 2, "&self.value");
    line(out, depth + 1, "}");
    out.push('\n');
    line(out, depth + 1, &format!("fn into_value(self) -> {wrapped} {{"));
    line(out, depth + 2, "self.value");
    line(out, depth + 1, "}");
    line(out, depth, "}");

    // Equality and three-way ordering delegate to the wrapped value's own
    // total order. Absence is expressed with `Option<Self>`, whose derived
    // ordering already sorts `None` first.
    out.push('\n');
    line(out, depth, &format!("impl ::core::cmp::PartialEq for {name} {{"));
    line(out, depth + 1, "fn eq(&self, other: &Self) -> bool {");
    line(out, depth + 2, "self.value == other.value");
    line(out, depth + 1, "}");
    line(out, depth, "}");

    out.push('\n');
    line(out, depth, &format!("impl ::core::cmp::Eq for {name} {{}}"));

    out.push('\n');
    line(out, depth, &format!("impl ::core::cmp::PartialOrd for {name} {{"));
    line(
        out,
        depth + 1,
        "fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {",
    );
    line(
        out,
        depth + 2,
        "::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))",
    );
    line(out, depth + 1, "}");
    line(out, depth, "}");

    out.push('\n');
    line(out, depth, &format!("impl ::core::cmp::Ord for {name} {{"));
    line(
        out,
        depth + 1,
        "fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {",
    );
    line(out, depth + 2, "::core::cmp::Ord::cmp(&self.value, &other.value)");
    line(out, depth + 1, "}");
    line(out, depth, "}");

    out.push('\n');
    line(out, depth, &format!("impl ::core::fmt::Debug for {name} {{"));
    line(
        out,
        depth + 1,
        "fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {",
    );
    line(
        out,
        depth + 2,
        &format!("f.debug_tuple(\"{name}\").field(&self.value).finish()"),
    );
    line(out, depth + 1, "}");
    line(out, depth, "}");

    // Textual representation delegates to the wrapped value's own.
    out.push('\n');
    line(out, depth, &format!("impl ::core::fmt::Display for {name} {{"));
    line(
        out,
        depth + 1,
        "fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {",
    );
    line(out, depth + 2, "::core::fmt::Display::fmt(&self.value, f)");
    line(out, depth + 1, "}");
    line(out, depth, "}");

    // One-way conversion out of the wrapper.
    out.push('\n');
    line(
        out,
        depth,
        &format!("impl ::core::convert::From<{name}> for {wrapped} {{"),
    );
    line(
        out,
        depth + 1,
        &format!("fn from(wrapper: {name}) -> {wrapped} {{"),
    );
    line(out, depth + 2, "wrapper.value");
    line(out, depth + 1, "}");
    line(out, depth, "}");

    // Static factory, equivalent to direct construction.
    out.push('\n');
    line(
        out,
        depth,
        &format!("impl ::core::convert::TryFrom<{wrapped}> for {name} {{"),
    );
    line(
        out,
        depth + 1,
        "type Error = ::valwrap_contract::ValidationError;",
    );
    out.push('\n');
    line(
        out,
        depth + 1,
        &format!(
            "fn try_from(value: {wrapped}) -> ::core::result::Result<Self, Self::Error> {{"
        ),
    );
    line(out, depth + 2, "Self::new(value)");
    line(out, depth + 1, "}");
    line(out, depth, "}");
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str("    ");
    }
    out.push_str(text);
    out.push('\n');
}
