use serde::Serialize;

/// The final list of type names for a set of documents.
///
/// Serializes as `{"types": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeNames {
    types: Vec<String>,
}

impl TypeNames {
    #[must_use]
    pub fn new(types: Vec<String>) -> Self {
        Self { types }
    }

    /// The same names in lexicographic order.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.types.sort_unstable();
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.iter().any(|ty| ty == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.types
    }

    /// Compact single-line JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl FromIterator<String> for TypeNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
