//! Typed traversal of executable GraphQL documents.
//!
//! [`walk_document`] visits every node of every operation and fragment
//! definition in source order. Before a node's rule runs, the shared
//! [`TypeContext`] is updated for that node, so rules can ask which schema
//! types apply at that position. Whatever a rule returns is accumulated into
//! a [`ReferencedTypes`] set.
//!
//! Rules override only the nodes they care about; every default records
//! nothing.

use crate::context::TypeContext;
use crate::fragments::FragmentIndex;
use crate::referenced::ReferencedTypes;
use apollo_compiler::ast::{self, Type};
use apollo_compiler::{Name, Node, Schema};

/// What a rule recorded at one node.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Recorded {
    types: Vec<Type>,
    skip_children: bool,
}

impl Recorded {
    /// Record nothing and keep descending.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Record every known type; `None` entries are dropped.
    #[must_use]
    pub fn of(types: impl IntoIterator<Item = Option<Type>>) -> Self {
        Self {
            types: types.into_iter().flatten().collect(),
            skip_children: false,
        }
    }

    /// Record additional types after the ones already present.
    #[must_use]
    pub fn and(mut self, types: impl IntoIterator<Item = Type>) -> Self {
        self.types.extend(types);
        self
    }

    /// Do not visit the children of this node.
    #[must_use]
    pub fn skip_children(mut self) -> Self {
        self.skip_children = true;
        self
    }

    #[must_use]
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    #[must_use]
    pub const fn skips_children(&self) -> bool {
        self.skip_children
    }
}

/// Per-node rules applied during [`walk_document`].
///
/// Every method receives the type context already entered for the node.
#[allow(unused_variables)]
pub trait TypeRefRules {
    // =========================================================================
    // Definitions
    // =========================================================================

    fn operation(&self, cx: &TypeContext<'_>, op: &ast::OperationDefinition) -> Recorded {
        Recorded::none()
    }

    fn variable_definition(
        &self,
        cx: &TypeContext<'_>,
        var: &ast::VariableDefinition,
    ) -> Recorded {
        Recorded::none()
    }

    fn fragment_definition(
        &self,
        cx: &TypeContext<'_>,
        fragment: &ast::FragmentDefinition,
    ) -> Recorded {
        Recorded::none()
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn field(&self, cx: &TypeContext<'_>, field: &ast::Field) -> Recorded {
        Recorded::none()
    }

    fn fragment_spread(&self, cx: &TypeContext<'_>, spread: &ast::FragmentSpread) -> Recorded {
        Recorded::none()
    }

    fn inline_fragment(&self, cx: &TypeContext<'_>, inline: &ast::InlineFragment) -> Recorded {
        Recorded::none()
    }

    fn argument(&self, cx: &TypeContext<'_>, argument: &ast::Argument) -> Recorded {
        Recorded::none()
    }

    fn directive(&self, cx: &TypeContext<'_>, directive: &ast::Directive) -> Recorded {
        Recorded::none()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// String, int, float and boolean literals.
    fn scalar_value(&self, cx: &TypeContext<'_>, value: &ast::Value) -> Recorded {
        Recorded::none()
    }

    fn enum_value(&self, cx: &TypeContext<'_>, value: &Name) -> Recorded {
        Recorded::none()
    }

    fn null_value(&self, cx: &TypeContext<'_>) -> Recorded {
        Recorded::none()
    }

    /// A variable reference (`$name`), including the one inside its own
    /// definition.
    fn variable(&self, cx: &TypeContext<'_>, name: &Name) -> Recorded {
        Recorded::none()
    }

    /// Runs with the list's item type already entered as the input type.
    fn list_value(&self, cx: &TypeContext<'_>, items: &[Node<ast::Value>]) -> Recorded {
        Recorded::none()
    }

    fn object_value(
        &self,
        cx: &TypeContext<'_>,
        fields: &[(Name, Node<ast::Value>)],
    ) -> Recorded {
        Recorded::none()
    }

    fn object_field(&self, cx: &TypeContext<'_>, name: &Name, value: &ast::Value) -> Recorded {
        Recorded::none()
    }
}

// =============================================================================
// Walk functions
// =============================================================================

/// Apply `rules` to every executable definition of `document`.
///
/// Type system definitions mixed into the document are ignored.
pub fn walk_document<R: TypeRefRules + ?Sized>(
    rules: &R,
    schema: &Schema,
    document: &ast::Document,
) -> ReferencedTypes {
    let fragments = FragmentIndex::new(document);
    let mut walker = Walker {
        rules,
        context: TypeContext::new(schema, &fragments),
        found: ReferencedTypes::new(),
    };

    for definition in &document.definitions {
        match definition {
            ast::Definition::OperationDefinition(op) => walker.walk_operation(op),
            ast::Definition::FragmentDefinition(fragment) => {
                walker.walk_fragment_definition(fragment);
            }
            _ => {}
        }
    }

    walker.found
}

struct Walker<'r, 'a, R: ?Sized> {
    rules: &'r R,
    context: TypeContext<'a>,
    found: ReferencedTypes,
}

impl<R: TypeRefRules + ?Sized> Walker<'_, '_, R> {
    /// Accumulate what a rule recorded. Returns whether to visit children.
    fn record(&mut self, recorded: Recorded) -> bool {
        for ty in &recorded.types {
            tracing::trace!(ty = %ty, "Recorded type reference");
        }
        let descend = !recorded.skip_children;
        self.found.extend(recorded.types);
        descend
    }

    fn walk_operation(&mut self, op: &ast::OperationDefinition) {
        self.context.enter_operation(op.operation_type);
        if self.record(self.rules.operation(&self.context, op)) {
            for var in &op.variables {
                self.walk_variable_definition(var);
            }
            self.walk_directives(&op.directives);
            self.walk_selection_set(&op.selection_set);
        }
        self.context.leave_output();
    }

    fn walk_variable_definition(&mut self, var: &ast::VariableDefinition) {
        self.context.enter_variable_definition(&var.ty);
        if self.record(self.rules.variable_definition(&self.context, var)) {
            self.record(self.rules.variable(&self.context, &var.name));
            if let Some(default_value) = &var.default_value {
                self.walk_value(default_value);
            }
            self.walk_directives(&var.directives);
        }
        self.context.leave_input();
    }

    fn walk_fragment_definition(&mut self, fragment: &ast::FragmentDefinition) {
        self.context.enter_fragment(Some(&fragment.type_condition));
        if self.record(self.rules.fragment_definition(&self.context, fragment)) {
            self.walk_directives(&fragment.directives);
            self.walk_selection_set(&fragment.selection_set);
        }
        self.context.leave_output();
    }

    fn walk_selection_set(&mut self, selections: &[ast::Selection]) {
        if selections.is_empty() {
            return;
        }
        self.context.enter_selection_set();
        for selection in selections {
            match selection {
                ast::Selection::Field(field) => self.walk_field(field),
                ast::Selection::FragmentSpread(spread) => self.walk_fragment_spread(spread),
                ast::Selection::InlineFragment(inline) => self.walk_inline_fragment(inline),
            }
        }
        self.context.leave_selection_set();
    }

    fn walk_field(&mut self, field: &ast::Field) {
        self.context.enter_field(&field.name);
        if self.record(self.rules.field(&self.context, field)) {
            self.walk_arguments(&field.arguments);
            self.walk_directives(&field.directives);
            self.walk_selection_set(&field.selection_set);
        }
        self.context.leave_field();
    }

    fn walk_fragment_spread(&mut self, spread: &ast::FragmentSpread) {
        if self.record(self.rules.fragment_spread(&self.context, spread)) {
            self.walk_directives(&spread.directives);
        }
    }

    fn walk_inline_fragment(&mut self, inline: &ast::InlineFragment) {
        self.context.enter_fragment(inline.type_condition.as_ref());
        if self.record(self.rules.inline_fragment(&self.context, inline)) {
            self.walk_directives(&inline.directives);
            self.walk_selection_set(&inline.selection_set);
        }
        self.context.leave_output();
    }

    fn walk_arguments(&mut self, arguments: &[Node<ast::Argument>]) {
        for argument in arguments {
            self.context.enter_argument(&argument.name);
            if self.record(self.rules.argument(&self.context, argument)) {
                self.walk_value(&argument.value);
            }
            self.context.leave_input();
        }
    }

    fn walk_directives(&mut self, directives: &ast::DirectiveList) {
        for directive in directives.iter() {
            self.context.enter_directive(&directive.name);
            if self.record(self.rules.directive(&self.context, directive)) {
                self.walk_arguments(&directive.arguments);
            }
            self.context.leave_directive();
        }
    }

    fn walk_value(&mut self, value: &ast::Value) {
        match value {
            ast::Value::Null => {
                self.record(self.rules.null_value(&self.context));
            }
            ast::Value::Enum(name) => {
                self.record(self.rules.enum_value(&self.context, name));
            }
            ast::Value::Variable(name) => {
                self.record(self.rules.variable(&self.context, name));
            }
            ast::Value::String(_)
            | ast::Value::Float(_)
            | ast::Value::Int(_)
            | ast::Value::Boolean(_) => {
                self.record(self.rules.scalar_value(&self.context, value));
            }
            ast::Value::List(items) => {
                self.context.enter_list_value();
                if self.record(self.rules.list_value(&self.context, items)) {
                    for item in items {
                        self.walk_value(item);
                    }
                }
                self.context.leave_input();
            }
            ast::Value::Object(fields) => {
                if self.record(self.rules.object_value(&self.context, fields)) {
                    for (name, field_value) in fields {
                        self.context.enter_object_field(name);
                        if self.record(self.rules.object_field(&self.context, name, field_value)) {
                            self.walk_value(field_value);
                        }
                        self.context.leave_input();
                    }
                }
            }
        }
    }
}
