//! # GraphQL Test Utilities
//!
//! Shared test infrastructure for the type reference crates: schema and
//! document fixtures, parse helpers and snapshot formatting.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
//!
//! ## Quick Start
//!
//! ```ignore
//! use graphql_test_utils::{fixtures::ADDRESS_SCHEMA, parse_document, parse_schema};
//!
//! #[test]
//! fn test_address_query() {
//!     let schema = parse_schema(ADDRESS_SCHEMA);
//!     let document = parse_document("{ user(id: 1) { id } }");
//!     // ... assertions
//! }
//! ```

pub mod assertions;
pub mod fixtures;

use apollo_compiler::{ast, Schema};

// Re-export insta for snapshot testing
pub use insta;

pub use assertions::format_type_names;

/// Parse a schema fixture, panicking with the parse errors if it is invalid.
pub fn parse_schema(sdl: &str) -> Schema {
    match Schema::parse(sdl, "schema.graphql") {
        Ok(schema) => schema,
        Err(with_errors) => panic!("fixture schema failed to parse:\n{}", with_errors.errors),
    }
}

/// Parse an executable document fixture, panicking on syntax errors.
pub fn parse_document(source: &str) -> ast::Document {
    match ast::Document::parse(source, "query.graphql") {
        Ok(document) => document,
        Err(with_errors) => panic!("fixture document failed to parse:\n{}", with_errors.errors),
    }
}
