use apollo_compiler::ast::Type;
use indexmap::IndexSet;

/// The set of type references recorded while walking a document.
///
/// Iteration follows insertion order, so repeated runs over the same
/// schema and document produce the same sequence. `None` is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencedTypes {
    types: IndexSet<Type>,
}

impl ReferencedTypes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a type reference. Returns `true` if it was not already present.
    pub fn insert(&mut self, ty: Type) -> bool {
        self.types.insert(ty)
    }

    /// Record a type reference if there is one.
    pub fn insert_opt(&mut self, ty: Option<Type>) -> bool {
        ty.is_some_and(|ty| self.insert(ty))
    }

    #[must_use]
    pub fn contains(&self, ty: &Type) -> bool {
        self.types.contains(ty)
    }

    /// Whether any recorded reference renders as `notation` (e.g. `"[ID!]"`).
    #[must_use]
    pub fn contains_notation(&self, notation: &str) -> bool {
        self.types.iter().any(|ty| ty.to_string() == notation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Extend<Type> for ReferencedTypes {
    fn extend<I: IntoIterator<Item = Type>>(&mut self, iter: I) {
        self.types.extend(iter);
    }
}

impl FromIterator<Type> for ReferencedTypes {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ReferencedTypes {
    type Item = Type;
    type IntoIter = indexmap::set::IntoIter<Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReferencedTypes {
    type Item = &'a Type;
    type IntoIter = indexmap::set::Iter<'a, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_compiler::name;

    #[test]
    fn test_insert_deduplicates() {
        let mut types = ReferencedTypes::new();
        assert!(types.insert(Type::Named(name!("User"))));
        assert!(!types.insert(Type::Named(name!("User"))));
        assert!(types.insert(Type::NonNullNamed(name!("User"))));
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn test_insert_opt_ignores_none() {
        let mut types = ReferencedTypes::new();
        assert!(!types.insert_opt(None));
        assert!(types.is_empty());
        assert!(types.insert_opt(Some(Type::Named(name!("ID")))));
        assert!(types.contains_notation("ID"));
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let types: ReferencedTypes = [name!("B"), name!("A"), name!("C")]
            .into_iter()
            .map(Type::Named)
            .collect();
        let rendered: Vec<String> = types.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["B", "A", "C"]);
    }
}
