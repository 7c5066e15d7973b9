//! Reading GraphQL introspection results and converting them to SDL.
//!
//! Schemas are often checked in as the JSON result of an introspection query
//! rather than as SDL. This crate parses such a dump, with or without the
//! `{"data": ...}` response envelope, and renders it as SDL so it can be
//! handed to any SDL-based schema parser.
//!
//! # Example
//!
//! ```
//! use graphql_introspect::introspection_json_to_sdl;
//!
//! let json = r#"{"data": {"__schema": {
//!     "queryType": {"name": "Query"},
//!     "types": [{"kind": "OBJECT", "name": "Query", "interfaces": [], "fields": [
//!         {"name": "hello", "args": [], "type": {"kind": "SCALAR", "name": "String", "ofType": null}}
//!     ]}]
//! }}}"#;
//!
//! let sdl = introspection_json_to_sdl(json).unwrap();
//! assert_eq!(sdl, "type Query {\n  hello: String\n}");
//! ```

mod error;
mod sdl;
mod types;

pub use error::{IntrospectionError, Result};
pub use sdl::introspection_to_sdl;
pub use types::*;

use serde_json::Value;

/// Parse an introspection result.
///
/// Accepts a full response (`{"data": {"__schema": ...}}`) or the bare
/// `{"__schema": ...}` object. A response carrying only `errors` is reported
/// with the first error message.
#[tracing::instrument(skip(json), fields(bytes = json.len()))]
pub fn parse_introspection(json: &str) -> Result<IntrospectionSchema> {
    let mut value: Value = serde_json::from_str(json)?;

    let enveloped = value.get("data").is_some_and(|data| !data.is_null());
    let schema = if enveloped {
        value
            .get_mut("data")
            .and_then(|data| data.get_mut("__schema"))
            .map(Value::take)
    } else {
        value.get_mut("__schema").map(Value::take)
    };

    let Some(schema) = schema.filter(|schema| !schema.is_null()) else {
        return Err(first_reported_error(&value).map_or(
            IntrospectionError::MissingSchema,
            IntrospectionError::Reported,
        ));
    };

    let schema: IntrospectionSchema = serde_json::from_value(schema)?;
    tracing::debug!(types = schema.types.len(), "Parsed introspection result");
    Ok(schema)
}

fn first_reported_error(response: &Value) -> Option<String> {
    let first = response.get("errors")?.as_array()?.first()?;
    Some(
        first
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| first.to_string(), ToString::to_string),
    )
}

/// Parse an introspection result and render it as SDL.
pub fn introspection_json_to_sdl(json: &str) -> Result<String> {
    parse_introspection(json).map(|schema| introspection_to_sdl(&schema))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = r#"{"__schema": {"queryType": {"name": "Query"}, "types": []}}"#;

    #[test]
    fn test_accepts_data_envelope() {
        let json = format!(r#"{{"data": {BARE}}}"#);
        let schema = parse_introspection(&json).unwrap();
        assert_eq!(schema.query_type.map(|root| root.name), Some("Query".to_string()));
    }

    #[test]
    fn test_accepts_bare_schema() {
        let schema = parse_introspection(BARE).unwrap();
        assert!(schema.types.is_empty());
        assert!(schema.directives.is_empty());
    }

    #[test]
    fn test_missing_schema() {
        let err = parse_introspection(r#"{"data": {}}"#).unwrap_err();
        assert!(matches!(err, IntrospectionError::MissingSchema));

        let err = parse_introspection(r#"{"something": "else"}"#).unwrap_err();
        assert!(matches!(err, IntrospectionError::MissingSchema));
    }

    #[test]
    fn test_reported_errors() {
        let err = parse_introspection(r#"{"data": null, "errors": [{"message": "denied"}]}"#)
            .unwrap_err();
        assert!(matches!(err, IntrospectionError::Reported(ref message) if message == "denied"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_introspection("{not json").unwrap_err();
        assert!(matches!(err, IntrospectionError::Json(_)));
    }

    #[test]
    fn test_invalid_schema_shape() {
        let err = parse_introspection(r#"{"__schema": {"types": [{"kind": "BOGUS"}]}}"#)
            .unwrap_err();
        assert!(matches!(err, IntrospectionError::Json(_)));
    }
}
