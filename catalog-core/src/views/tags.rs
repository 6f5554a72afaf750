//! Conversion between a product's tags and the form's single text field.

/// Parse the comma-separated tag field.
///
/// An empty field yields no tags. Otherwise every comma-separated piece is
/// trimmed and kept, in order, duplicates included.
pub fn parse_tags(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Render tags for the form's text field.
pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_tags() {
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_pieces_are_trimmed_in_order() {
        assert_eq!(parse_tags("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(parse_tags("fresh,fresh, dairy"), vec!["fresh", "fresh", "dairy"]);
    }

    #[test]
    fn test_format_joins_with_comma_space() {
        let tags = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_tags(&tags), "a, b");
        assert_eq!(parse_tags(&format_tags(&tags)), tags);
        assert_eq!(format_tags(&[]), "");
    }
}
