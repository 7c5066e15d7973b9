use serde::{Deserialize, Serialize};

/// Extensions used to pick document files out of a directory when the
/// config does not list any.
pub const DEFAULT_DOCUMENT_EXTENSIONS: &[&str] = &["graphql", "gql"];

/// Contents of a `.graphql-types.yml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypesConfig {
    /// Replaces the built-in type policy when present.
    pub policy: Option<PolicyConfig>,
    pub documents: Option<DocumentsConfig>,
}

impl TypesConfig {
    /// File extensions (without the dot) to load from document directories.
    #[must_use]
    pub fn document_extensions(&self) -> Vec<String> {
        self.documents
            .as_ref()
            .and_then(|documents| documents.extensions.as_ref())
            .map_or_else(
                || {
                    DEFAULT_DOCUMENT_EXTENSIONS
                        .iter()
                        .map(ToString::to_string)
                        .collect()
                },
                |extensions| {
                    extensions
                        .iter()
                        .map(|ext| ext.trim_start_matches('.').to_string())
                        .collect()
                },
            )
    }
}

/// Names removed from or forced into every result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default)]
    pub denylist: Vec<String>,
    #[serde(default)]
    pub forced_include: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentsConfig {
    pub extensions: Option<Vec<String>>,
}
