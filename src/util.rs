//! Shared utility functions.

/// Convert a file stem to a page title.
///
/// Splits on `-` and `_`, capitalizes each word, drops empty words.
/// "summer-trip" -> "Summer Trip"
/// "road__trip_2024" -> "Road Trip 2024"
pub fn title_case(s: &str) -> String {
    s.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("summer-trip"), "Summer Trip");
        assert_eq!(title_case("gallery"), "Gallery");
        assert_eq!(title_case("road__trip_2024"), "Road Trip 2024");
        assert_eq!(title_case("README"), "README");
        assert_eq!(title_case(""), "");
    }
}
