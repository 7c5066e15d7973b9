//! Tracks which schema types apply at the walker's current position.
//!
//! This follows the standard GraphQL type-inference rules: a field's type
//! comes from its parent type's field map, an argument's type from the
//! matching argument definition, and a literal's type from where it sits
//! (argument value, list item, input object field). Each rule pushes on
//! enter and pops on leave, so the accessors always describe the node
//! being visited.

use crate::fragments::FragmentIndex;
use crate::type_ref::{self, item_type, kind_of, named_core, nullable, TypeKind};
use apollo_compiler::ast::{OperationType, Type};
use apollo_compiler::schema::{
    DirectiveDefinition, ExtendedType, FieldDefinition, InputObjectType,
};
use apollo_compiler::{Name, Schema};

/// The type context at one point of a document traversal.
pub struct TypeContext<'a> {
    schema: &'a Schema,
    fragments: &'a FragmentIndex<'a>,
    output_types: Vec<Option<Type>>,
    parent_output_types: Vec<Option<Type>>,
    input_types: Vec<Option<Type>>,
    field_definitions: Vec<Option<&'a FieldDefinition>>,
    directive: Option<&'a DirectiveDefinition>,
}

impl<'a> TypeContext<'a> {
    #[must_use]
    pub fn new(schema: &'a Schema, fragments: &'a FragmentIndex<'a>) -> Self {
        Self {
            schema,
            fragments,
            output_types: Vec::new(),
            parent_output_types: Vec::new(),
            input_types: Vec::new(),
            field_definitions: Vec::new(),
            directive: None,
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &'a Schema {
        self.schema
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The output type of the node being visited, e.g. a field's declared type.
    #[must_use]
    pub fn output_type(&self) -> Option<&Type> {
        self.output_types.last().and_then(Option::as_ref)
    }

    /// The composite type owning the current selection set.
    #[must_use]
    pub fn parent_output_type(&self) -> Option<&Type> {
        self.parent_output_types.last().and_then(Option::as_ref)
    }

    /// The input type expected at the current argument or literal.
    #[must_use]
    pub fn input_type(&self) -> Option<&Type> {
        self.input_types.last().and_then(Option::as_ref)
    }

    /// The input type one level up, e.g. the list around a list item or the
    /// input object around one of its fields.
    #[must_use]
    pub fn parent_input_type(&self) -> Option<&Type> {
        self.input_types
            .len()
            .checked_sub(2)
            .and_then(|index| self.input_types.get(index))
            .and_then(Option::as_ref)
    }

    // =========================================================================
    // Schema helpers for rules
    // =========================================================================

    /// Resolve a document type reference, keeping its wrappers.
    #[must_use]
    pub fn resolve(&self, ty: &Type) -> Option<Type> {
        type_ref::resolve(self.schema, ty)
    }

    /// Resolve a bare type name.
    #[must_use]
    pub fn resolve_name(&self, name: &Name) -> Option<Type> {
        type_ref::resolve_name(self.schema, name)
    }

    /// Resolve a fragment spread to its composite type condition.
    #[must_use]
    pub fn fragment_type(&self, name: &str) -> Option<Type> {
        self.fragments.resolve(name, self.schema)
    }

    #[must_use]
    pub fn kind(&self, ty: &Type) -> Option<TypeKind> {
        kind_of(self.schema, ty)
    }

    /// The input object definition behind the named core of `ty`.
    #[must_use]
    pub fn input_object(&self, ty: &Type) -> Option<&'a InputObjectType> {
        match self.schema.types.get(ty.inner_named_type()) {
            Some(ExtendedType::InputObject(object)) => Some(&**object),
            _ => None,
        }
    }

    /// Declared types of every field of the input object behind `ty`.
    ///
    /// Empty when `ty` is not an input object.
    #[must_use]
    pub fn input_field_types(&self, ty: &Type) -> Vec<Type> {
        self.input_object(ty)
            .map(|object| {
                object
                    .fields
                    .values()
                    .map(|field| Type::clone(&field.ty))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is(&self, ty: &Type, predicate: fn(TypeKind) -> bool) -> bool {
        self.kind(ty).is_some_and(predicate)
    }

    fn only_if(&self, ty: Option<Type>, predicate: fn(TypeKind) -> bool) -> Option<Type> {
        ty.filter(|ty| self.is(ty, predicate))
    }

    // =========================================================================
    // Enter / leave
    // =========================================================================

    pub(crate) fn enter_operation(&mut self, operation_type: OperationType) {
        let root = self
            .schema
            .root_operation(operation_type)
            .map(|name| Type::Named(name.clone()));
        let root = self.only_if(root, |kind| kind == TypeKind::Object);
        self.output_types.push(root);
    }

    /// Fragment definitions and inline fragments. Without a type condition
    /// the fragment keeps the named core of the surrounding output type.
    pub(crate) fn enter_fragment(&mut self, type_condition: Option<&Name>) {
        let ty = match type_condition {
            Some(name) => Some(Type::Named(name.clone())),
            None => self.output_type().map(named_core),
        };
        let ty = self.only_if(ty, TypeKind::is_output);
        self.output_types.push(ty);
    }

    pub(crate) fn leave_output(&mut self) {
        self.output_types.pop();
    }

    pub(crate) fn enter_selection_set(&mut self) {
        let parent = self.output_type().map(named_core);
        let parent = self.only_if(parent, TypeKind::is_composite);
        self.parent_output_types.push(parent);
    }

    pub(crate) fn leave_selection_set(&mut self) {
        self.parent_output_types.pop();
    }

    pub(crate) fn enter_field(&mut self, name: &Name) {
        let schema = self.schema;
        let definition = self
            .parent_output_type()
            .and_then(|parent| schema.type_field(parent.inner_named_type(), name).ok())
            .map(|component| &***component);
        let ty = definition.map(|field| field.ty.clone());
        let ty = self.only_if(ty, TypeKind::is_output);
        self.field_definitions.push(definition);
        self.output_types.push(ty);
    }

    pub(crate) fn leave_field(&mut self) {
        self.field_definitions.pop();
        self.output_types.pop();
    }

    /// Unknown directives leave no definition, so their arguments are looked
    /// up on the enclosing field instead.
    pub(crate) fn enter_directive(&mut self, name: &Name) {
        self.directive = self
            .schema
            .directive_definitions
            .get(name)
            .map(|definition| &**definition);
    }

    pub(crate) fn leave_directive(&mut self) {
        self.directive = None;
    }

    pub(crate) fn enter_variable_definition(&mut self, ty: &Type) {
        let ty = self.only_if(Some(ty.clone()), TypeKind::is_input);
        self.input_types.push(ty);
    }

    pub(crate) fn enter_argument(&mut self, name: &Name) {
        let arguments = match self.directive {
            Some(directive) => Some(&directive.arguments),
            None => self
                .field_definitions
                .last()
                .copied()
                .flatten()
                .map(|field| &field.arguments),
        };
        let ty = arguments
            .and_then(|arguments| arguments.iter().find(|argument| argument.name == *name))
            .map(|argument| Type::clone(&argument.ty));
        let ty = self.only_if(ty, TypeKind::is_input);
        self.input_types.push(ty);
    }

    pub(crate) fn enter_list_value(&mut self) {
        let item = self.input_type().map(nullable).map(|list| match item_type(&list) {
            Some(item) => item,
            None => list,
        });
        let item = self.only_if(item, TypeKind::is_input);
        self.input_types.push(item);
    }

    pub(crate) fn enter_object_field(&mut self, name: &Name) {
        let ty = self
            .input_type()
            .and_then(|ty| self.input_object(ty))
            .and_then(|object| object.fields.get(name))
            .map(|field| Type::clone(&field.ty));
        let ty = self.only_if(ty, TypeKind::is_input);
        self.input_types.push(ty);
    }

    /// Leave a variable definition, argument, list value or object field.
    pub(crate) fn leave_input(&mut self) {
        self.input_types.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_compiler::{ast, name};

    const SCHEMA: &str = r"
        type Query {
            user(id: ID!): User
            search(filter: SearchFilter, tags: [String!]!): [Result!]!
        }
        type User { id: ID! name: String }
        union Result = User
        input SearchFilter { term: String, nested: [SearchFilter!] }
    ";

    fn with_context(f: impl FnOnce(&mut TypeContext<'_>)) {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        let document = ast::Document::parse("{ __typename }", "query.graphql").unwrap();
        let fragments = FragmentIndex::new(&document);
        let mut context = TypeContext::new(&schema, &fragments);
        f(&mut context);
    }

    fn rendered(ty: Option<&Type>) -> Option<String> {
        ty.map(ToString::to_string)
    }

    #[test]
    fn test_empty_context_has_no_types() {
        with_context(|cx| {
            assert_eq!(cx.output_type(), None);
            assert_eq!(cx.parent_output_type(), None);
            assert_eq!(cx.input_type(), None);
            assert_eq!(cx.parent_input_type(), None);
        });
    }

    #[test]
    fn test_field_types_follow_parent() {
        with_context(|cx| {
            cx.enter_operation(OperationType::Query);
            assert_eq!(rendered(cx.output_type()), Some("Query".into()));

            cx.enter_selection_set();
            cx.enter_field(&name!("search"));
            assert_eq!(rendered(cx.output_type()), Some("[Result!]!".into()));
            assert_eq!(rendered(cx.parent_output_type()), Some("Query".into()));

            cx.enter_selection_set();
            assert_eq!(rendered(cx.parent_output_type()), Some("Result".into()));
            cx.enter_field(&name!("__typename"));
            assert_eq!(rendered(cx.output_type()), Some("String!".into()));
            cx.leave_field();
            cx.leave_selection_set();

            cx.leave_field();
            assert_eq!(rendered(cx.output_type()), Some("Query".into()));
        });
    }

    #[test]
    fn test_unknown_field_yields_none() {
        with_context(|cx| {
            cx.enter_operation(OperationType::Query);
            cx.enter_selection_set();
            cx.enter_field(&name!("missing"));
            assert_eq!(cx.output_type(), None);

            cx.enter_selection_set();
            assert_eq!(cx.parent_output_type(), None);
            cx.enter_field(&name!("id"));
            assert_eq!(cx.output_type(), None);
        });
    }

    #[test]
    fn test_mutation_without_root_yields_none() {
        with_context(|cx| {
            cx.enter_operation(OperationType::Mutation);
            assert_eq!(cx.output_type(), None);
        });
    }

    #[test]
    fn test_argument_list_and_object_field_inputs() {
        with_context(|cx| {
            cx.enter_operation(OperationType::Query);
            cx.enter_selection_set();
            cx.enter_field(&name!("search"));

            cx.enter_argument(&name!("tags"));
            assert_eq!(rendered(cx.input_type()), Some("[String!]!".into()));
            cx.enter_list_value();
            assert_eq!(rendered(cx.input_type()), Some("String!".into()));
            assert_eq!(rendered(cx.parent_input_type()), Some("[String!]!".into()));
            cx.leave_input();
            cx.leave_input();

            cx.enter_argument(&name!("filter"));
            assert_eq!(rendered(cx.input_type()), Some("SearchFilter".into()));
            cx.enter_object_field(&name!("nested"));
            assert_eq!(rendered(cx.input_type()), Some("[SearchFilter!]".into()));
            assert_eq!(rendered(cx.parent_input_type()), Some("SearchFilter".into()));
            cx.enter_list_value();
            assert_eq!(rendered(cx.input_type()), Some("SearchFilter!".into()));
            cx.enter_object_field(&name!("term"));
            assert_eq!(rendered(cx.input_type()), Some("String".into()));
            cx.leave_input();
            cx.enter_object_field(&name!("unknown"));
            assert_eq!(cx.input_type(), None);
        });
    }

    #[test]
    fn test_directive_arguments_use_directive_definition() {
        with_context(|cx| {
            cx.enter_operation(OperationType::Query);
            cx.enter_selection_set();
            cx.enter_field(&name!("user"));

            cx.enter_directive(&name!("include"));
            cx.enter_argument(&name!("if"));
            assert_eq!(rendered(cx.input_type()), Some("Boolean!".into()));
            cx.leave_input();
            cx.leave_directive();

            cx.enter_argument(&name!("id"));
            assert_eq!(rendered(cx.input_type()), Some("ID!".into()));
        });
    }

    #[test]
    fn test_inline_fragment_without_condition_keeps_named_type() {
        with_context(|cx| {
            cx.enter_operation(OperationType::Query);
            cx.enter_selection_set();
            cx.enter_field(&name!("search"));
            cx.enter_fragment(None);
            assert_eq!(rendered(cx.output_type()), Some("Result".into()));
            cx.leave_output();
            cx.enter_fragment(Some(&name!("SearchFilter")));
            assert_eq!(cx.output_type(), None);
        });
    }

    #[test]
    fn test_variable_definition_input_type() {
        with_context(|cx| {
            let document =
                ast::Document::parse("query($f: [SearchFilter]) { __typename }", "q.graphql")
                    .unwrap();
            let Some(ast::Definition::OperationDefinition(op)) = document.definitions.first()
            else {
                panic!("expected an operation");
            };
            cx.enter_variable_definition(&op.variables[0].ty);
            assert_eq!(rendered(cx.input_type()), Some("[SearchFilter]".into()));
            cx.leave_input();

            let document =
                ast::Document::parse("query($u: User) { __typename }", "q.graphql").unwrap();
            let Some(ast::Definition::OperationDefinition(op)) = document.definitions.first()
            else {
                panic!("expected an operation");
            };
            cx.enter_variable_definition(&op.variables[0].ty);
            assert_eq!(cx.input_type(), None);
        });
    }
}
