//! Snapshot formatting helpers.
//!
//! Type name lists are formatted one name per line so snapshots diff well.

/// Format a list of type names for snapshot testing.
///
/// # Example
///
/// ```ignore
/// use graphql_test_utils::assertions::format_type_names;
///
/// let names = resolve_type_names(&schema, &document, &policy).sorted();
/// insta::assert_snapshot!(format_type_names(names.iter()));
/// ```
pub fn format_type_names<I>(names: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let lines: Vec<String> = names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    if lines.is_empty() {
        return String::from("(no types)");
    }
    lines.join("\n")
}
