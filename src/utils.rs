//! Small display helpers.

/// Turn an API identifier into a display name.
///
/// Examples: `mr-mime` -> `Mr Mime`, `ho_oh` -> `Ho Oh`.
pub fn format_name(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
