//! Turning recorded type references into a clean list of type names.

use crate::referenced::ReferencedTypes;
use apollo_compiler::ast::Type;
use indexmap::IndexSet;

/// Names removed from every result by the default policy.
pub const DEFAULT_DENYLIST: &[&str] = &["_VInputParsingError_"];

/// Names added to every result by the default policy, even when no document
/// references them.
pub const DEFAULT_FORCED_INCLUDE: &[&str] = &["Common_GovernmentId"];

/// Fixed exceptions applied after the names are computed.
///
/// The denylist is applied before forced inclusion, so a name present in
/// both lists ends up included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePolicy {
    denylist: IndexSet<String>,
    forced_include: IndexSet<String>,
}

impl Default for TypePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_DENYLIST.iter().copied(),
            DEFAULT_FORCED_INCLUDE.iter().copied(),
        )
    }
}

impl TypePolicy {
    #[must_use]
    pub fn new<D, F>(denylist: D, forced_include: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            denylist: denylist.into_iter().map(Into::into).collect(),
            forced_include: forced_include.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy with no exceptions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            denylist: IndexSet::new(),
            forced_include: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn deny(mut self, name: impl Into<String>) -> Self {
        self.denylist.insert(name.into());
        self
    }

    #[must_use]
    pub fn include(mut self, name: impl Into<String>) -> Self {
        self.forced_include.insert(name.into());
        self
    }

    pub fn denylist(&self) -> impl Iterator<Item = &str> {
        self.denylist.iter().map(String::as_str)
    }

    pub fn forced_include(&self) -> impl Iterator<Item = &str> {
        self.forced_include.iter().map(String::as_str)
    }

    fn apply(&self, names: &mut IndexSet<String>) {
        names.retain(|name| !self.denylist.contains(name));
        names.extend(self.forced_include.iter().cloned());
    }
}

/// Reduce a type reference to a bare name.
///
/// The SDL notation is filtered down to ASCII letters and underscores, which
/// strips list brackets and non-null markers. Digits are dropped as well.
/// Returns `None` when nothing is left.
#[must_use]
pub fn canonical_name(ty: &Type) -> Option<String> {
    sanitize(&ty.to_string())
}

fn sanitize(notation: &str) -> Option<String> {
    let name: String = notation
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '_')
        .collect();
    (!name.is_empty()).then_some(name)
}

/// Sanitize already-rendered names, dedupe them and apply `policy`.
#[must_use]
pub fn canonicalize_names<I>(names: I, policy: &TypePolicy) -> IndexSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut canonical: IndexSet<String> = names
        .into_iter()
        .filter_map(|name| sanitize(name.as_ref()))
        .collect();
    policy.apply(&mut canonical);
    canonical
}

/// Canonical names of every recorded type, in first-seen order.
#[must_use]
pub fn canonicalize(types: &ReferencedTypes, policy: &TypePolicy) -> IndexSet<String> {
    let mut canonical: IndexSet<String> = types.iter().filter_map(canonical_name).collect();
    policy.apply(&mut canonical);
    canonical
}
