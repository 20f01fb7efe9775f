//! # valwrap-core
//!
//! A compile-time generator for validated wrapper types. It scans source
//! text for unit structs annotated with capability-describing attributes,
//! resolves — through the host's semantic model, not text matching — which
//! primitive type each declaration wraps and which validation rules apply,
//! and renders a complete wrapper-type definition for each.
//!
//! ## Pipeline
//!
//! | Stage | Module | Contract |
//! |-------|--------|----------|
//! | Declaration scanner | [`scan`] | unit structs with attributes, tree order, purely syntactic |
//! | Capability resolver | [`resolve`] | attribute path → defining symbol → declared capabilities |
//! | Type disambiguator | [`resolve`] | exactly one distinct wrapped type, or the candidate is dropped |
//! | Chain builder | [`chain`] | validators of the resolved type, declaration order, verbatim arguments |
//! | Emitter | [`emit`] | deterministic text + stable output key |
//!
//! Data flows strictly scanner → resolver → disambiguator → builder →
//! emitter, once per candidate, with no shared state between candidates —
//! processing is safely interruptible at every candidate boundary.
//!
//! ## Host integration
//!
//! The host supplies two things: a [`SemanticModel`] answering what each
//! written attribute resolves to, and an [`ArtifactSink`] receiving the
//! rendered (key, text) pairs. [`SymbolTable`] and [`MemorySink`] /
//! [`FsSink`] are ready-made implementations.
//!
//! ```
//! use valwrap_core::{AttributeSymbol, MemorySink, SymbolTable};
//!
//! let mut model = SymbolTable::new();
//! model.define(
//!     "rating",
//!     AttributeSymbol::new("demo::Rating").wraps("i32").validates("i32"),
//! );
//!
//! let mut sink = MemorySink::new();
//! let emitted = valwrap_core::generate_source(
//!     "#[rating(0, 100)] struct Rating;",
//!     &model,
//!     &mut sink,
//! )
//! .unwrap();
//!
//! assert_eq!(emitted, 1);
//! assert!(sink.get("Rating").unwrap().contains("demo::Rating::new(0, 100)"));
//! ```
//!
//! Generated constructors call validators through the `Validate` contract in
//! `valwrap-contract`; validation failures surface to the construction call
//! site exactly as the validator signals them.

pub mod chain;
pub mod emit;
mod error;
pub mod model;
pub mod resolve;
pub mod scan;
pub mod semantics;
pub mod sink;
mod support;

pub use error::Error;
pub use model::{
    AttributeUsage, CandidateDeclaration, Capability, GeneratedType, TypeName, ValidationStep,
};
pub use semantics::{AttributeSymbol, SemanticModel, SymbolTable};
pub use sink::{ArtifactSink, FsSink, MemorySink, SinkError};

/// Runs the full pipeline over one parsed file, registering an artifact for
/// every candidate that survives disambiguation. Returns how many artifacts
/// were registered.
pub fn generate_file<M, S>(file: &syn::File, model: &M, sink: &mut S) -> Result<usize, Error>
where
    M: SemanticModel + ?Sized,
    S: ArtifactSink + ?Sized,
{
    let mut emitted = 0;
    for candidate in scan::scan_file(file) {
        let attrs = resolve::resolve_attributes(&candidate, model);
        let Some(wrapped) = resolve::disambiguate(&candidate, &attrs) else {
            continue;
        };
        let steps = chain::build_chain(&attrs, &wrapped);

        let generated = GeneratedType {
            namespace: candidate.namespace,
            name: candidate.name,
            wrapped,
            steps,
        };
        let key = generated.output_key();
        let text = emit::render(&generated);

        tracing::debug!(%key, "registering generated wrapper");
        sink.register(&key, &text)?;
        emitted += 1;
    }
    Ok(emitted)
}

/// Parses `source` and runs [`generate_file`] on it.
pub fn generate_source<M, S>(source: &str, model: &M, sink: &mut S) -> Result<usize, Error>
where
    M: SemanticModel + ?Sized,
    S: ArtifactSink + ?Sized,
{
    let file: syn::File = syn::parse_str(source)?;
    generate_file(&file, model, sink)
}
