//! Type definitions for GraphQL introspection results.
//!
//! These mirror the JSON produced by the standard introspection query.
//! Servers differ in which optional parts they return, so list-valued
//! fields accept both a missing key and `null` as empty.

use serde::{Deserialize, Deserializer};
use std::fmt;

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The `__schema` object of an introspection result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    pub query_type: Option<NamedRef>,
    pub mutation_type: Option<NamedRef>,
    pub subscription_type: Option<NamedRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub types: Vec<IntrospectionType>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub directives: Vec<IntrospectionDirective>,
}

impl IntrospectionSchema {
    /// Look up a type definition by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&IntrospectionType> {
        self.types.iter().find(|ty| ty.name() == name)
    }
}

/// A reference to a named type, as used for root types, interfaces and
/// union members.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntrospectionType {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(ObjectType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl IntrospectionType {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(ty) => &ty.name,
            Self::Object(ty) | Self::Interface(ty) => &ty.name,
            Self::Union(ty) => &ty.name,
            Self::Enum(ty) => &ty.name,
            Self::InputObject(ty) => &ty.name,
        }
    }

    /// Built-in scalars and `__`-prefixed introspection types.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        let name = self.name();
        name.starts_with("__") || crate::sdl::BUILTIN_SCALARS.contains(&name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

/// Objects and interfaces share a shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<Field>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interfaces: Vec<NamedRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub possible_types: Vec<NamedRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enum_values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub input_fields: Vec<InputValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub args: Vec<InputValue>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// An argument or input object field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Already rendered as a GraphQL literal by the server.
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionDirective {
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub args: Vec<InputValue>,
    #[serde(default)]
    pub is_repeatable: bool,
}

/// A possibly wrapped type reference: `{kind: NON_NULL, ofType: {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeRefKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeRefKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeRef {
    /// The innermost named type, if the reference is complete.
    #[must_use]
    pub fn named_type(&self) -> Option<&str> {
        match &self.of_type {
            Some(inner) => inner.named_type(),
            None => self.name.as_deref(),
        }
    }
}

/// Renders SDL notation: `String`, `[String!]!`.
///
/// A wrapper whose `ofType` is missing renders only the wrapper syntax, so
/// a truncated reference stays visible in the output instead of being
/// silently dropped.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.of_type) {
            (TypeRefKind::NonNull, Some(inner)) => write!(f, "{inner}!"),
            (TypeRefKind::NonNull, None) => f.write_str("!"),
            (TypeRefKind::List, Some(inner)) => write!(f, "[{inner}]"),
            (TypeRefKind::List, None) => f.write_str("[]"),
            _ => f.write_str(self.name.as_deref().unwrap_or_default()),
        }
    }
}
