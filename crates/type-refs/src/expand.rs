use crate::referenced::ReferencedTypes;
use apollo_compiler::ast::Type;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::{Name, Schema};

/// Concrete object types that can stand in for the named type.
///
/// Union members in declaration order, or for an interface every object type
/// implementing it in schema order. Empty for any other kind of type and for
/// unknown names.
#[must_use]
pub fn possible_types(schema: &Schema, name: &Name) -> Vec<Name> {
    match schema.types.get(name) {
        Some(ExtendedType::Union(union)) => union
            .members
            .iter()
            .map(|member| member.name.clone())
            .collect(),
        Some(ExtendedType::Interface(_)) => schema
            .types
            .iter()
            .filter_map(|(object_name, ty)| match ty {
                ExtendedType::Object(object)
                    if object
                        .implements_interfaces
                        .iter()
                        .any(|interface| interface.name == *name) =>
                {
                    Some(object_name.clone())
                }
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Add the possible types of every abstract type in `types`.
///
/// Wrapped references are expanded through their named core, so `[Node!]`
/// pulls in the implementers of `Node`. The input order is kept and
/// expansions follow it.
#[must_use]
pub fn expand(schema: &Schema, types: &ReferencedTypes) -> ReferencedTypes {
    let mut expanded = types.clone();
    for ty in types {
        expanded.extend(
            possible_types(schema, ty.inner_named_type())
                .into_iter()
                .map(Type::Named),
        );
    }
    tracing::debug!(
        before = types.len(),
        after = expanded.len(),
        "Expanded abstract types"
    );
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_compiler::name;

    const SCHEMA: &str = r"
        type Query { node: Node search: [SearchResult!]! }
        interface Node { id: ID! }
        interface Named { name: String }
        type User implements Node & Named { id: ID! name: String }
        type Team implements Node { id: ID! }
        type Post { id: ID! }
        union SearchResult = Post | User
    ";

    fn schema() -> Schema {
        Schema::parse(SCHEMA, "schema.graphql").unwrap()
    }

    fn rendered(types: &ReferencedTypes) -> Vec<String> {
        types.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_possible_types_of_union() {
        assert_eq!(
            possible_types(&schema(), &name!("SearchResult")),
            vec![name!("Post"), name!("User")]
        );
    }

    #[test]
    fn test_possible_types_of_interface() {
        let schema = schema();
        assert_eq!(
            possible_types(&schema, &name!("Node")),
            vec![name!("User"), name!("Team")]
        );
        assert_eq!(possible_types(&schema, &name!("Named")), vec![name!("User")]);
    }

    #[test]
    fn test_possible_types_of_concrete_or_unknown() {
        let schema = schema();
        assert!(possible_types(&schema, &name!("User")).is_empty());
        assert!(possible_types(&schema, &name!("ID")).is_empty());
        assert!(possible_types(&schema, &name!("Missing")).is_empty());
    }

    #[test]
    fn test_expand_keeps_input_and_appends_implementers() {
        let types: ReferencedTypes = [Type::Named(name!("Query")), Type::Named(name!("Node"))]
            .into_iter()
            .collect();
        let expanded = expand(&schema(), &types);
        assert_eq!(rendered(&expanded), vec!["Query", "Node", "User", "Team"]);
    }

    #[test]
    fn test_expand_unwraps_list_types() {
        let list = Type::NonNullList(Box::new(Type::NonNullNamed(name!("SearchResult"))));
        let types: ReferencedTypes = std::iter::once(list).collect();
        let expanded = expand(&schema(), &types);
        assert_eq!(rendered(&expanded), vec!["[SearchResult!]!", "Post", "User"]);
    }

    #[test]
    fn test_expand_without_abstract_types_is_identity() {
        let types: ReferencedTypes = [Type::Named(name!("User")), Type::Named(name!("ID"))]
            .into_iter()
            .collect();
        assert_eq!(expand(&schema(), &types), types);
    }
}
