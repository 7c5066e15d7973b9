//! Compute which schema types a set of GraphQL operations depends on.
//!
//! Given a schema and a document of operations and fragments, this crate
//! walks the document with full type information and records every named
//! type it touches:
//! - output types of selected fields and the types owning them
//! - fragment type conditions, including fragments reached by spreads
//! - input types of arguments, variables and literal values, with every
//!   field of any input object a literal is written against
//!
//! Interfaces and unions in the result are then expanded to their concrete
//! object types, and the references are reduced to bare names.
//!
//! # Example
//!
//! ```
//! use apollo_compiler::{ast, Schema};
//! use graphql_type_refs::{resolve_type_names, TypePolicy};
//!
//! let schema = Schema::parse(
//!     "type Query { user(id: ID!): User } type User { id: ID! name: String }",
//!     "schema.graphql",
//! )
//! .unwrap();
//! let document = ast::Document::parse(
//!     "query($id: ID!) { user(id: $id) { name } }",
//!     "query.graphql",
//! )
//! .unwrap();
//!
//! let names = resolve_type_names(&schema, &document, &TypePolicy::empty()).sorted();
//! assert_eq!(names.into_vec(), vec!["ID", "Query", "String", "User"]);
//! ```

mod canonical;
mod collector;
mod context;
mod expand;
mod fragments;
mod names;
mod referenced;
pub mod type_ref;
mod visitor;

pub use canonical::{
    canonical_name, canonicalize, canonicalize_names, TypePolicy, DEFAULT_DENYLIST,
    DEFAULT_FORCED_INCLUDE,
};
pub use collector::{collect, ReferenceCollector};
pub use context::TypeContext;
pub use expand::{expand, possible_types};
pub use fragments::FragmentIndex;
pub use names::TypeNames;
pub use referenced::ReferencedTypes;
pub use type_ref::TypeKind;
pub use visitor::{walk_document, Recorded, TypeRefRules};

use apollo_compiler::{ast, Schema};

/// Resolve the complete, canonical list of type names `document` needs.
///
/// Collects raw references, expands abstract types, canonicalizes the names
/// and applies `policy`. Names keep first-seen order.
#[tracing::instrument(skip_all, fields(definitions = document.definitions.len()))]
#[must_use]
pub fn resolve_type_names(
    schema: &Schema,
    document: &ast::Document,
    policy: &TypePolicy,
) -> TypeNames {
    let collected = collect(schema, document);
    let expanded = expand(schema, &collected);
    let names: TypeNames = canonicalize(&expanded, policy).into_iter().collect();
    tracing::debug!(types = names.len(), "Resolved type names");
    names
}
