use crate::type_ref::kind_of_name;
use apollo_compiler::ast::{self, Type};
use apollo_compiler::Schema;
use std::collections::HashMap;

/// Fragment definitions of a document, indexed by name.
///
/// When a name is defined more than once the last definition wins.
#[derive(Debug, Default)]
pub struct FragmentIndex<'a> {
    definitions: HashMap<&'a str, &'a ast::FragmentDefinition>,
}

impl<'a> FragmentIndex<'a> {
    #[must_use]
    pub fn new(document: &'a ast::Document) -> Self {
        let mut definitions = HashMap::new();
        for definition in &document.definitions {
            if let ast::Definition::FragmentDefinition(fragment) = definition {
                definitions.insert(fragment.name.as_str(), &**fragment);
            }
        }
        tracing::debug!(fragments = definitions.len(), "Indexed fragment definitions");
        Self { definitions }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.definitions.get(name).copied()
    }

    /// Resolve a fragment name to the composite type of its type condition.
    ///
    /// Unknown fragments, unknown type conditions and conditions on
    /// non-composite types all resolve to `None`.
    #[must_use]
    pub fn resolve(&self, name: &str, schema: &Schema) -> Option<Type> {
        let fragment = self.get(name)?;
        let condition = &fragment.type_condition;
        kind_of_name(schema, condition)
            .filter(|kind| kind.is_composite())
            .map(|_| Type::Named(condition.clone()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
