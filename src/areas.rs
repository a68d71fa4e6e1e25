//! Recognized cuisine areas and free-text query classification.

/// Areas the catalog knows about, in canonical display casing.
pub const AVAILABLE_AREAS: [&str; 28] = [
    "American", "British", "Canadian", "Chinese", "Croatian", "Dutch",
    "Egyptian", "Filipino", "French", "Greek", "Indian", "Irish",
    "Italian", "Jamaican", "Japanese", "Kenyan", "Malaysian", "Mexican",
    "Moroccan", "Polish", "Portuguese", "Russian", "Spanish", "Thai",
    "Tunisian", "Turkish", "Ukrainian", "Vietnamese",
];

/// Return the recognized area equal to `term` ignoring case.
///
/// Only whole-name matches count: `"Brit"` does not match `"British"`.
pub fn match_area(term: &str) -> Option<&'static str> {
    let lower_term = term.to_lowercase();
    AVAILABLE_AREAS
        .iter()
        .copied()
        .find(|area| area.to_lowercase() == lower_term)
}

/// How a free-text search should be sent to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// The query names a recognized area; list that area's recipes
    Area(&'static str),
    /// Anything else is a recipe-name search
    Name(String),
}

/// Classify a raw query typed by the user.
///
/// Surrounding whitespace is ignored for both the area lookup and the
/// returned name query.
pub fn classify(term: &str) -> QueryKind {
    let term = term.trim();
    match match_area(term) {
        Some(area) => QueryKind::Area(area),
        None => QueryKind::Name(term.to_string()),
    }
}
