//! SDL (Schema Definition Language) rendering of introspection results.

use crate::types::{
    Field, InputValue, IntrospectionDirective, IntrospectionSchema, IntrospectionType, NamedRef,
};
use std::fmt::{self, Display, Formatter};

/// Built-in scalar types that are never written to SDL.
pub(crate) const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// Directives every GraphQL implementation already defines.
const BUILTIN_DIRECTIVES: &[&str] = &["skip", "include", "deprecated", "specifiedBy", "oneOf"];

/// Converts an introspected schema to SDL.
///
/// Built-in scalars, introspection types and built-in directives are left
/// out. Descriptions, deprecations and default values are preserved. A
/// `schema { ... }` block is only written when a root type has a
/// non-default name.
#[must_use]
#[tracing::instrument(skip(schema), fields(
    types = schema.types.len(),
    directives = schema.directives.len()
))]
pub fn introspection_to_sdl(schema: &IntrospectionSchema) -> String {
    let sdl = Sdl(schema).to_string();
    tracing::debug!(sdl_length = sdl.len(), "SDL generation complete");
    sdl
}

struct Sdl<'a>(&'a IntrospectionSchema);

impl Display for Sdl<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let schema = self.0;
        let mut separator = "";

        if has_renamed_roots(schema) {
            write_schema_block(f, schema)?;
            separator = "\n\n";
        }
        for directive in &schema.directives {
            if BUILTIN_DIRECTIVES.contains(&directive.name.as_str()) {
                continue;
            }
            f.write_str(separator)?;
            write_directive(f, directive)?;
            separator = "\n\n";
        }
        for ty in schema.types.iter().filter(|ty| !ty.is_builtin()) {
            f.write_str(separator)?;
            write_type(f, ty)?;
            separator = "\n\n";
        }
        Ok(())
    }
}

fn roots(schema: &IntrospectionSchema) -> [(&'static str, Option<&NamedRef>, &'static str); 3] {
    [
        ("query", schema.query_type.as_ref(), "Query"),
        ("mutation", schema.mutation_type.as_ref(), "Mutation"),
        ("subscription", schema.subscription_type.as_ref(), "Subscription"),
    ]
}

fn has_renamed_roots(schema: &IntrospectionSchema) -> bool {
    roots(schema)
        .into_iter()
        .any(|(_, root, default)| root.is_some_and(|root| root.name != default))
}

fn write_schema_block(f: &mut Formatter<'_>, schema: &IntrospectionSchema) -> fmt::Result {
    f.write_str("schema {\n")?;
    for (operation, root, _) in roots(schema) {
        if let Some(root) = root {
            writeln!(f, "  {operation}: {}", root.name)?;
        }
    }
    f.write_str("}")
}

fn write_type(f: &mut Formatter<'_>, ty: &IntrospectionType) -> fmt::Result {
    match ty {
        IntrospectionType::Scalar(scalar) => {
            write_description(f, scalar.description.as_deref(), "")?;
            write!(f, "scalar {}", scalar.name)
        }
        IntrospectionType::Object(object) | IntrospectionType::Interface(object) => {
            let keyword = if matches!(ty, IntrospectionType::Object(_)) {
                "type"
            } else {
                "interface"
            };
            write_description(f, object.description.as_deref(), "")?;
            write!(f, "{keyword} {}", object.name)?;
            write_implements(f, &object.interfaces)?;
            write_body(f, &object.fields, write_field)
        }
        IntrospectionType::Union(union) => {
            write_description(f, union.description.as_deref(), "")?;
            write!(f, "union {}", union.name)?;
            for (i, member) in union.possible_types.iter().enumerate() {
                f.write_str(if i == 0 { " = " } else { " | " })?;
                f.write_str(&member.name)?;
            }
            Ok(())
        }
        IntrospectionType::Enum(enumeration) => {
            write_description(f, enumeration.description.as_deref(), "")?;
            write!(f, "enum {}", enumeration.name)?;
            write_body(f, &enumeration.enum_values, |f, value| {
                write_description(f, value.description.as_deref(), "  ")?;
                write!(f, "  {}", value.name)?;
                write_deprecation(f, value.is_deprecated, value.deprecation_reason.as_deref())
            })
        }
        IntrospectionType::InputObject(input) => {
            write_description(f, input.description.as_deref(), "")?;
            write!(f, "input {}", input.name)?;
            write_body(f, &input.input_fields, |f, field| {
                write_description(f, field.description.as_deref(), "  ")?;
                f.write_str("  ")?;
                write_input_value(f, field)
            })
        }
    }
}

/// Write `{ ... }` with one line per item. Empty bodies are omitted, since
/// `{}` is not valid SDL.
fn write_body<T>(
    f: &mut Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    f.write_str(" {\n")?;
    for item in items {
        write_item(f, item)?;
        f.write_str("\n")?;
    }
    f.write_str("}")
}

fn write_implements(f: &mut Formatter<'_>, interfaces: &[NamedRef]) -> fmt::Result {
    for (i, interface) in interfaces.iter().enumerate() {
        f.write_str(if i == 0 { " implements " } else { " & " })?;
        f.write_str(&interface.name)?;
    }
    Ok(())
}

fn write_field(f: &mut Formatter<'_>, field: &Field) -> fmt::Result {
    write_description(f, field.description.as_deref(), "  ")?;
    write!(f, "  {}", field.name)?;
    write_arguments(f, &field.args)?;
    write!(f, ": {}", field.ty)?;
    write_deprecation(f, field.is_deprecated, field.deprecation_reason.as_deref())
}

fn write_directive(f: &mut Formatter<'_>, directive: &IntrospectionDirective) -> fmt::Result {
    write_description(f, directive.description.as_deref(), "")?;
    write!(f, "directive @{}", directive.name)?;
    write_arguments(f, &directive.args)?;
    if directive.is_repeatable {
        f.write_str(" repeatable")?;
    }
    write!(f, " on {}", directive.locations.join(" | "))
}

fn write_arguments(f: &mut Formatter<'_>, args: &[InputValue]) -> fmt::Result {
    if args.is_empty() {
        return Ok(());
    }
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_input_value(f, arg)?;
    }
    f.write_str(")")
}

fn write_input_value(f: &mut Formatter<'_>, value: &InputValue) -> fmt::Result {
    write!(f, "{}: {}", value.name, value.ty)?;
    if let Some(default) = &value.default_value {
        write!(f, " = {default}")?;
    }
    Ok(())
}

fn write_deprecation(
    f: &mut Formatter<'_>,
    is_deprecated: bool,
    reason: Option<&str>,
) -> fmt::Result {
    match (is_deprecated, reason) {
        (false, _) => Ok(()),
        (true, Some(reason)) => write!(f, " @deprecated(reason: \"{}\")", escape_string(reason)),
        (true, None) => f.write_str(" @deprecated"),
    }
}

fn write_description(f: &mut Formatter<'_>, description: Option<&str>, indent: &str) -> fmt::Result {
    match description {
        None => Ok(()),
        Some(text) if text.contains('\n') => {
            let text = text.replace("\"\"\"", "\\\"\"\"");
            writeln!(f, "{indent}\"\"\"\n{text}\n{indent}\"\"\"")
        }
        Some(text) => writeln!(f, "{indent}\"{}\"", escape_string(text)),
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_introspection;

    fn sdl_from(json: &str) -> String {
        introspection_to_sdl(&parse_introspection(json).unwrap())
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("hello"), "hello");
        assert_eq!(escape_string("hello \"world\""), "hello \\\"world\\\"");
        assert_eq!(escape_string("hello\nworld"), "hello\\nworld");
        assert_eq!(escape_string("C:\\path"), "C:\\\\path");
    }

    #[test]
    fn test_builtins_are_skipped() {
        let sdl = sdl_from(
            r#"{"__schema": {
                "queryType": {"name": "Query"},
                "types": [
                    {"kind": "SCALAR", "name": "String"},
                    {"kind": "OBJECT", "name": "__Type", "fields": [], "interfaces": []},
                    {"kind": "OBJECT", "name": "Query", "interfaces": [], "fields": [
                        {"name": "hello", "args": [],
                         "type": {"kind": "SCALAR", "name": "String", "ofType": null}}
                    ]}
                ],
                "directives": [
                    {"name": "skip", "locations": ["FIELD"], "args": []}
                ]
            }}"#,
        );
        assert_eq!(sdl, "type Query {\n  hello: String\n}");
    }

    #[test]
    fn test_renamed_roots_write_schema_block() {
        let sdl = sdl_from(
            r#"{"__schema": {
                "queryType": {"name": "Root"},
                "mutationType": null,
                "types": [
                    {"kind": "OBJECT", "name": "Root", "interfaces": [], "fields": [
                        {"name": "ok", "args": [],
                         "type": {"kind": "SCALAR", "name": "Boolean", "ofType": null}}
                    ]}
                ]
            }}"#,
        );
        assert!(sdl.starts_with("schema {\n  query: Root\n}\n\ntype Root"), "{sdl}");
    }

    #[test]
    fn test_every_kind_renders() {
        let sdl = sdl_from(
            r#"{"__schema": {
                "queryType": {"name": "Query"},
                "types": [
                    {"kind": "SCALAR", "name": "Date", "description": "An ISO date"},
                    {"kind": "INTERFACE", "name": "Node", "interfaces": [], "possibleTypes": [], "fields": [
                        {"name": "id", "args": [],
                         "type": {"kind": "NON_NULL", "name": null,
                                  "ofType": {"kind": "SCALAR", "name": "ID", "ofType": null}}}
                    ]},
                    {"kind": "UNION", "name": "Result", "possibleTypes": [{"name": "A"}, {"name": "B"}]},
                    {"kind": "ENUM", "name": "Color", "enumValues": [
                        {"name": "RED", "isDeprecated": false},
                        {"name": "OLD", "isDeprecated": true, "deprecationReason": "gone"}
                    ]},
                    {"kind": "INPUT_OBJECT", "name": "Filter", "inputFields": [
                        {"name": "limit",
                         "type": {"kind": "SCALAR", "name": "Int", "ofType": null},
                         "defaultValue": "10"}
                    ]}
                ],
                "directives": [
                    {"name": "tag", "locations": ["FIELD_DEFINITION", "OBJECT"], "isRepeatable": true,
                     "args": [{"name": "name",
                               "type": {"kind": "NON_NULL", "name": null,
                                        "ofType": {"kind": "SCALAR", "name": "String", "ofType": null}}}]}
                ]
            }}"#,
        );

        assert!(sdl.contains("directive @tag(name: String!) repeatable on FIELD_DEFINITION | OBJECT"));
        assert!(sdl.contains("\"An ISO date\"\nscalar Date"));
        assert!(sdl.contains("interface Node {\n  id: ID!\n}"));
        assert!(sdl.contains("union Result = A | B"));
        assert!(sdl.contains("enum Color {\n  RED\n  OLD @deprecated(reason: \"gone\")\n}"));
        assert!(sdl.contains("input Filter {\n  limit: Int = 10\n}"));
    }

    #[test]
    fn test_empty_bodies_are_omitted() {
        let sdl = sdl_from(
            r#"{"__schema": {"types": [
                {"kind": "OBJECT", "name": "Empty", "fields": [], "interfaces": []},
                {"kind": "UNION", "name": "Nothing", "possibleTypes": []}
            ]}}"#,
        );
        assert_eq!(sdl, "type Empty\n\nunion Nothing");
    }
}
