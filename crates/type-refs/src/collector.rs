//! The rule table that decides which types each document node references.

use crate::context::TypeContext;
use crate::referenced::ReferencedTypes;
use crate::type_ref::{named_core, nullable};
use crate::visitor::{walk_document, Recorded, TypeRefRules};
use apollo_compiler::ast;
use apollo_compiler::{Name, Node, Schema};

/// Records every schema type a document touches.
///
/// Fields and arguments contribute their output type and the type that owns
/// them. Literal values contribute the input type they are written against,
/// and input object literals pull in every field of their input object, not
/// only the fields the literal spells out.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceCollector;

impl ReferenceCollector {
    fn output_and_parent(cx: &TypeContext<'_>) -> Recorded {
        Recorded::of([cx.output_type().cloned(), cx.parent_output_type().cloned()])
    }

    fn input_core(cx: &TypeContext<'_>) -> Recorded {
        Recorded::of([cx.input_type().map(named_core)])
    }
}

impl TypeRefRules for ReferenceCollector {
    fn variable_definition(
        &self,
        cx: &TypeContext<'_>,
        var: &ast::VariableDefinition,
    ) -> Recorded {
        Recorded::of([cx.resolve(&var.ty), cx.input_type().cloned()])
    }

    fn fragment_definition(
        &self,
        cx: &TypeContext<'_>,
        fragment: &ast::FragmentDefinition,
    ) -> Recorded {
        Recorded::of([cx.resolve_name(&fragment.type_condition)])
    }

    fn field(&self, cx: &TypeContext<'_>, _field: &ast::Field) -> Recorded {
        Self::output_and_parent(cx)
    }

    fn argument(&self, cx: &TypeContext<'_>, _argument: &ast::Argument) -> Recorded {
        Self::output_and_parent(cx)
    }

    fn fragment_spread(&self, cx: &TypeContext<'_>, spread: &ast::FragmentSpread) -> Recorded {
        Recorded::of([
            cx.fragment_type(&spread.fragment_name),
            cx.parent_output_type().cloned(),
        ])
    }

    fn inline_fragment(&self, cx: &TypeContext<'_>, inline: &ast::InlineFragment) -> Recorded {
        let condition = inline
            .type_condition
            .as_ref()
            .and_then(|name| cx.resolve_name(name));
        Recorded::of([
            condition,
            cx.parent_output_type().cloned(),
            cx.output_type().cloned(),
        ])
    }

    fn scalar_value(&self, cx: &TypeContext<'_>, _value: &ast::Value) -> Recorded {
        Self::input_core(cx)
    }

    fn enum_value(&self, cx: &TypeContext<'_>, _value: &Name) -> Recorded {
        Self::input_core(cx)
    }

    /// Kept as the full input type, so `null` passed to `[Tag!]` records
    /// the list type. Canonicalization strips the wrappers later.
    fn null_value(&self, cx: &TypeContext<'_>) -> Recorded {
        Recorded::of([cx.input_type().cloned()])
    }

    fn list_value(&self, cx: &TypeContext<'_>, _items: &[Node<ast::Value>]) -> Recorded {
        Recorded::of([cx.parent_input_type().map(nullable)])
    }

    fn object_value(
        &self,
        cx: &TypeContext<'_>,
        _fields: &[(Name, Node<ast::Value>)],
    ) -> Recorded {
        let Some(core) = cx.input_type().map(named_core) else {
            return Recorded::none().skip_children();
        };
        if cx.input_object(&core).is_none() {
            return Recorded::of([Some(core)]).skip_children();
        }
        Recorded::none().and(cx.input_field_types(&core))
    }

    fn object_field(&self, cx: &TypeContext<'_>, _name: &Name, _value: &ast::Value) -> Recorded {
        let parent = cx.parent_input_type().map(named_core);
        let siblings = parent
            .as_ref()
            .map(|parent| cx.input_field_types(parent))
            .unwrap_or_default();
        Recorded::of([parent])
            .and(siblings)
            .and(cx.input_type().cloned())
    }
}

/// Collect the raw type references of `document`, before abstract types are
/// expanded or names canonicalized.
#[must_use]
pub fn collect(schema: &Schema, document: &ast::Document) -> ReferencedTypes {
    let found = walk_document(&ReferenceCollector, schema, document);
    tracing::debug!(types = found.len(), "Collected type references");
    found
}
