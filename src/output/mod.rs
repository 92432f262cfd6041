// Output formatting — terminal display of relations and validation results.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Manufacturer names come from scraped listings and can be arbitrarily long
/// or contain multi-byte characters, so this never slices bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("Nestlé", 5), "Nestl...");
        assert_eq!(truncate_chars("Nestlé", 6), "Nestlé");
    }
}
