/// Turn a poet's display name into the path segment used by the site and
/// for the output file name.
///
/// Lowercases the name and replaces only the *first* space with a hyphen, so
/// "Walt Whitman" becomes "walt-whitman" while "William Carlos Williams"
/// becomes "william-carlos williams". Nothing else is touched, including
/// surrounding whitespace.
pub fn poet_slug(name: &str) -> String {
    name.to_lowercase().replacen(' ', "-", 1)
}
