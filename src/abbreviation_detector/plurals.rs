// WHY: abbreviations show up pluralised in prose ("MABs") but singular in glossaries
// Expands a token into the surface forms worth looking up

/// Singular and plural forms of an abbreviation token.
///
/// The token itself is always the first element. Tokens ending in `s` with
/// at least two characters before it also yield the stripped form; all other
/// tokens (except short ones ending in `s`) yield the form with `s` appended.
///
/// ```
/// use abbrev_review::abbreviation_detector::plurals;
///
/// assert_eq!(plurals("MAB"), vec!["MAB", "MABs"]);
/// assert_eq!(plurals("MABs"), vec!["MABs", "MAB"]);
/// ```
pub fn plurals(token: &str) -> Vec<String> {
    let mut variants = vec![token.to_string()];

    match token.strip_suffix(['s', 'S']) {
        Some(stem) if stem.chars().count() >= 2 => variants.push(stem.to_string()),
        Some(_) => {}
        None if !token.is_empty() => variants.push(format!("{token}s")),
        None => {}
    }

    variants
}
