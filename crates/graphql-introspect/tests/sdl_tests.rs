//! Integration tests for graphql-introspect.
//!
//! These tests check that converted introspection results are valid SDL.

use apollo_compiler::Schema;
use graphql_introspect::{introspection_json_to_sdl, parse_introspection};

fn scalar(name: &str) -> String {
    format!(r#"{{"kind": "SCALAR", "name": "{name}", "ofType": null}}"#)
}

fn non_null(inner: &str) -> String {
    format!(r#"{{"kind": "NON_NULL", "name": null, "ofType": {inner}}}"#)
}

fn list(inner: &str) -> String {
    format!(r#"{{"kind": "LIST", "name": null, "ofType": {inner}}}"#)
}

fn named(kind: &str, name: &str) -> String {
    format!(r#"{{"kind": "{kind}", "name": "{name}", "ofType": null}}"#)
}

fn field(name: &str, ty: &str) -> String {
    format!(r#"{{"name": "{name}", "args": [], "type": {ty}, "isDeprecated": false}}"#)
}

/// A server response covering every type kind plus the built-in types a
/// real server includes.
fn response() -> String {
    let id = non_null(&scalar("ID"));
    let users = non_null(&list(&non_null(&named("OBJECT", "User"))));
    format!(
        r#"{{"data": {{"__schema": {{
            "queryType": {{"name": "Query"}},
            "mutationType": null,
            "subscriptionType": null,
            "types": [
                {{"kind": "SCALAR", "name": "String", "description": "Built-in"}},
                {{"kind": "SCALAR", "name": "ID"}},
                {{"kind": "SCALAR", "name": "Boolean"}},
                {{"kind": "OBJECT", "name": "__Schema", "fields": [], "interfaces": []}},
                {{"kind": "OBJECT", "name": "Query", "interfaces": [], "fields": [
                    {{"name": "users", "type": {users}, "isDeprecated": false,
                      "args": [{{"name": "filter", "type": {filter}, "defaultValue": null}}]}},
                    {{"name": "search", "args": [], "type": {search}, "isDeprecated": false}},
                    {{"name": "legacy", "args": [], "type": {string},
                      "isDeprecated": true, "deprecationReason": "Use \"users\""}}
                ]}},
                {{"kind": "INTERFACE", "name": "Node", "interfaces": [],
                  "possibleTypes": [{{"name": "User"}}], "fields": [{node_id}]}},
                {{"kind": "OBJECT", "name": "User", "interfaces": [{{"name": "Node"}}],
                  "description": "A person\nwith an account",
                  "fields": [{user_id}, {user_status}]}},
                {{"kind": "UNION", "name": "SearchResult", "possibleTypes": [{{"name": "User"}}]}},
                {{"kind": "ENUM", "name": "Status", "enumValues": [
                    {{"name": "ACTIVE", "isDeprecated": false}},
                    {{"name": "BANNED", "isDeprecated": true, "deprecationReason": null}}
                ]}},
                {{"kind": "INPUT_OBJECT", "name": "UserFilter", "inputFields": [
                    {{"name": "status", "type": {status}, "defaultValue": "ACTIVE"}},
                    {{"name": "limit", "type": {int}, "defaultValue": "20"}}
                ]}},
                {{"kind": "SCALAR", "name": "Int"}}
            ],
            "directives": [
                {{"name": "include", "locations": ["FIELD"], "args": []}},
                {{"name": "cached", "description": "Cache hint",
                  "locations": ["FIELD_DEFINITION", "OBJECT"],
                  "args": [{{"name": "ttl", "type": {int}, "defaultValue": "60"}}]}}
            ]
        }}}}}}"#,
        users = users,
        filter = named("INPUT_OBJECT", "UserFilter"),
        search = non_null(&list(&named("UNION", "SearchResult"))),
        string = scalar("String"),
        node_id = field("id", &id),
        user_id = field("id", &id),
        user_status = field("status", &named("ENUM", "Status")),
        status = named("ENUM", "Status"),
        int = scalar("Int"),
    )
}

#[test]
fn test_converted_sdl_is_a_valid_schema() {
    let sdl = introspection_json_to_sdl(&response()).unwrap();

    let schema = Schema::parse_and_validate(&sdl, "introspection.graphql")
        .unwrap_or_else(|err| panic!("invalid SDL:\n{sdl}\n{}", err.errors));

    for name in ["Query", "Node", "User", "SearchResult", "Status", "UserFilter"] {
        assert!(schema.types.contains_key(name), "missing {name} in\n{sdl}");
    }
    assert!(schema.directive_definitions.contains_key("cached"));
}

#[test]
fn test_converted_sdl_keeps_type_structure() {
    let sdl = introspection_json_to_sdl(&response()).unwrap();

    assert!(sdl.contains("users(filter: UserFilter): [User!]!"), "{sdl}");
    assert!(sdl.contains("search: [SearchResult]!"), "{sdl}");
    assert!(sdl.contains("type User implements Node {"), "{sdl}");
    assert!(sdl.contains("status: Status = ACTIVE"), "{sdl}");
    assert!(sdl.contains(r#"legacy: String @deprecated(reason: "Use \"users\"")"#), "{sdl}");
    assert!(sdl.contains("BANNED @deprecated"), "{sdl}");
    assert!(!sdl.contains("__Schema"), "{sdl}");
    assert!(!sdl.contains("scalar String"), "{sdl}");
    assert!(!sdl.contains("directive @include"), "{sdl}");
}

#[test]
fn test_parsed_schema_lookup() {
    let schema = parse_introspection(&response()).unwrap();
    assert!(schema.get_type("User").is_some());
    assert!(schema.get_type("Missing").is_none());
    assert_eq!(schema.types.iter().filter(|ty| !ty.is_builtin()).count(), 6);
}
