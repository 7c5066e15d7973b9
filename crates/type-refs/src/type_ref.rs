//! Helpers for working with schema type references.
//!
//! A type reference is an [`Type`]: either a named type or a list /
//! non-null wrapper around one. References are only meaningful when their
//! innermost named type exists in the schema, so every helper that needs
//! the schema answers `None`/`false` for unknown names instead of failing.

use apollo_compiler::ast::Type;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::{Name, Schema};

/// Strip every list and non-null wrapper, leaving the named core.
///
/// `[User!]!` becomes `User`.
#[must_use]
pub fn named_core(ty: &Type) -> Type {
    Type::Named(ty.inner_named_type().clone())
}

/// Strip one outer non-null wrapper, if present.
///
/// `[User!]!` becomes `[User!]`, `User!` becomes `User`.
#[must_use]
pub fn nullable(ty: &Type) -> Type {
    match ty {
        Type::NonNullNamed(name) => Type::Named(name.clone()),
        Type::NonNullList(inner) => Type::List(inner.clone()),
        Type::Named(_) | Type::List(_) => ty.clone(),
    }
}

/// The element type of a list type, ignoring outer nullability.
#[must_use]
pub fn item_type(ty: &Type) -> Option<Type> {
    match ty {
        Type::List(inner) | Type::NonNullList(inner) => Some(inner.as_ref().clone()),
        Type::Named(_) | Type::NonNullNamed(_) => None,
    }
}

/// The kind of a named schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    fn of(extended: &ExtendedType) -> Self {
        match extended {
            ExtendedType::Scalar(_) => Self::Scalar,
            ExtendedType::Object(_) => Self::Object,
            ExtendedType::Interface(_) => Self::Interface,
            ExtendedType::Union(_) => Self::Union,
            ExtendedType::Enum(_) => Self::Enum,
            ExtendedType::InputObject(_) => Self::InputObject,
        }
    }

    /// Object, interface or union: a valid fragment type condition.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::Union)
    }

    /// Interface or union.
    #[must_use]
    pub const fn is_abstract(self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }

    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Scalar | Self::Enum | Self::InputObject)
    }

    #[must_use]
    pub const fn is_output(self) -> bool {
        !matches!(self, Self::InputObject)
    }
}

/// Look up the kind of the named core of `ty`.
///
/// Returns `None` when the schema does not define that name.
#[must_use]
pub fn kind_of(schema: &Schema, ty: &Type) -> Option<TypeKind> {
    kind_of_name(schema, ty.inner_named_type())
}

/// Look up the kind of a named type.
#[must_use]
pub fn kind_of_name(schema: &Schema, name: &Name) -> Option<TypeKind> {
    schema.types.get(name).map(TypeKind::of)
}

/// Resolve a type reference written in a document against the schema.
///
/// The wrapper structure is kept as written; the reference is dropped
/// entirely when its named core is unknown.
#[must_use]
pub fn resolve(schema: &Schema, ty: &Type) -> Option<Type> {
    kind_of(schema, ty).map(|_| ty.clone())
}

/// Resolve a bare type name, as found in a fragment type condition.
#[must_use]
pub fn resolve_name(schema: &Schema, name: &Name) -> Option<Type> {
    kind_of_name(schema, name).map(|_| Type::Named(name.clone()))
}
